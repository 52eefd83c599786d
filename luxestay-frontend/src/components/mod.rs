mod details;
mod filter_bar;
mod header;
mod hotel_card;
mod map;
mod search;

pub use self::{details::*, filter_bar::*, header::*, hotel_card::*, map::*, search::*};
