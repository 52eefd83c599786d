use crate::{id::Id, price::Price};

/// A hotel as presented to the member.
///
/// Hotels are immutable once they have been returned
/// by a search and are identified by their [`Id`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id              : Id,
    pub name            : String,
    /// 0.0 ..= 5.0
    pub rating          : f64,
    pub price_per_night : Price,
    pub description     : String,
    pub address         : String,
    pub image           : String,
    pub distance        : Option<String>,
    pub maps_url        : Option<String>,
    pub review_snippets : Option<Vec<String>>,
}

impl Hotel {
    pub const MAX_RATING: f64 = 5.0;

    pub fn is_valid_rating(rating: f64) -> bool {
        (0.0..=Self::MAX_RATING).contains(&rating)
    }
}
