//! Presentation data shared by all front-ends.

use crate::entities::*;

/// Where a hotel marker is placed on the simulated map,
/// in percent of the map's height and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapPlacement {
    pub top: usize,
    pub left: usize,
}

impl MapPlacement {
    /// Deterministic but scattered, there is no real geocoding.
    pub const fn of_index(index: usize) -> Self {
        Self {
            top: 20 + (index * 17) % 65,
            left: 15 + (index * 23) % 70,
        }
    }

    /// The position of the member.
    pub const CENTER: Self = Self { top: 50, left: 50 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amenity {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Shown for every hotel.
pub const AMENITIES: [Amenity; 4] = [
    Amenity {
        icon: "fa-wifi",
        label: "WiFi VIP",
    },
    Amenity {
        icon: "fa-spa",
        label: "Suite Spa",
    },
    Amenity {
        icon: "fa-glass-cheers",
        label: "Lounge Bar",
    },
    Amenity {
        icon: "fa-concierge-bell",
        label: "Butler 24/7",
    },
];

/// Appended to the description in the detail panel.
pub const SELECTION_NOTE: &str = "Esta propiedad ha sido seleccionada por LuxeStay por su \
    inquebrantable compromiso con la excelencia y su capacidad para transformar una \
    estancia ordinaria en un legado de recuerdos extraordinarios.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChip {
    Rating,
    Price,
    Distance,
}

impl FilterChip {
    pub const ALL: [Self; 3] = [Self::Rating, Self::Price, Self::Distance];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Price => "price",
            Self::Distance => "distance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Eminente (4.5+)",
            Self::Price => "Ultra Lujo",
            Self::Distance => "Cercanía Real",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Rating => "fa-star",
            Self::Price => "fa-gem",
            Self::Distance => "fa-map-pin",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// The average nightly price of all hotels in XAF.
pub fn average_price(hotels: &[Hotel]) -> Option<String> {
    average_xaf(hotels.iter().map(|h| &h.price_per_night)).map(format_xaf)
}
