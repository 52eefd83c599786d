use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

pub mod gemini;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id    : String,
    pub email : String,
    pub name  : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id              : String,
    pub name            : String,
    pub rating          : f64,
    pub price_per_night : String,
    pub description     : String,
    pub address         : String,
    pub image           : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_url : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_snippets : Option<Vec<String>>,
}
