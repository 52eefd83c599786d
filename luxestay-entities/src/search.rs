use crate::{geo::Coordinates, hotel::Hotel};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub coordinates: Option<Coordinates>,
}

/// The result of a single search.
///
/// It replaces any previous result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub hotels: Vec<Hotel>,
    /// Narrative text of the concierge
    pub text: String,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}
