use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use luxestay_core::{
    app::{Tab, ViewMode},
    entities::Coordinates,
    view::FilterChip,
};

/// Discover luxury hotels from your terminal.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Latitude of the simulated device location
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the simulated device location
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

impl Args {
    pub fn location(&self) -> Option<Coordinates> {
        self.lat
            .zip(self.lng)
            .map(|(lat, lng)| Coordinates::new(lat, lng))
    }
}

/// A single line entered at the prompt.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Enter with your membership
    Login { email: String, password: String },
    /// Request a new membership
    Signup {
        email: String,
        password: String,
        /// Display name
        name: Vec<String>,
    },
    /// Conclude your stay
    Logout,
    /// Ask the concierge for hotels
    Search {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Switch between discoveries and favorites
    Tab { tab: TabArg },
    /// Switch between list and map
    View { mode: ViewArg },
    /// Add or remove a listed hotel from your favorites
    Fav { number: usize },
    /// Show the details of a listed hotel
    Show { number: usize },
    /// Close the details
    Close,
    /// Select a filter
    Filter { chip: FilterArg },
    /// Show the current member
    Whoami,
    /// Leave LuxeStay
    Quit,
}

impl Line {
    /// Returns `Ok(None)` for empty lines.
    pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
        let words: Vec<_> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        let Self { command } = Self::try_parse_from(words)?;
        Ok(Some(command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Discover,
    Favorites,
}

impl From<TabArg> for Tab {
    fn from(from: TabArg) -> Self {
        match from {
            TabArg::Discover => Self::Discover,
            TabArg::Favorites => Self::Favorites,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    List,
    Map,
}

impl From<ViewArg> for ViewMode {
    fn from(from: ViewArg) -> Self {
        match from {
            ViewArg::List => Self::List,
            ViewArg::Map => Self::Map,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Rating,
    Price,
    Distance,
}

impl From<FilterArg> for FilterChip {
    fn from(from: FilterArg) -> Self {
        match from {
            FilterArg::Rating => Self::Rating,
            FilterArg::Price => Self::Price,
            FilterArg::Distance => Self::Distance,
        }
    }
}
