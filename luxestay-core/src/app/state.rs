use crate::{entities::*, usecases, view};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    Home,
}

impl Screen {
    pub const fn is_auth(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub(super) screen: Screen,
    pub(super) user: Option<User>,
    pub(super) auth_error: Option<String>,
    pub(super) hotels: Vec<Hotel>,
    pub(super) narrative: Option<String>,
    pub(super) favorites: Vec<Hotel>,
    pub(super) selected: Option<Hotel>,
    pub(super) tab: Tab,
    pub(super) view_mode: ViewMode,
    pub(super) loading: bool,
    pub(super) coordinates: Option<Coordinates>,
}

impl AppState {
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Inline message of a rejected authentication.
    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    /// The hotels of the last search.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// What the concierge said about the last search.
    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    pub fn favorites(&self) -> &[Hotel] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &Id) -> bool {
        usecases::is_favorite(&self.favorites, id)
    }

    pub const fn selected(&self) -> Option<&Hotel> {
        self.selected.as_ref()
    }

    pub const fn tab(&self) -> Tab {
        self.tab
    }

    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The map is only available while discovering.
    pub fn shows_map(&self) -> bool {
        self.tab == Tab::Discover && self.view_mode == ViewMode::Map
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Search results or favorites, depending on the tab.
    pub fn displayed_hotels(&self) -> &[Hotel] {
        match self.tab {
            Tab::Discover => &self.hotels,
            Tab::Favorites => &self.favorites,
        }
    }

    pub fn average_price(&self) -> Option<String> {
        view::average_price(&self.hotels)
    }
}
