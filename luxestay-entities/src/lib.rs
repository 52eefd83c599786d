#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # luxestay-entities
//!
//! Reusable, agnostic domain entities for LuxeStay.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod geo;
pub mod grounding;
pub mod hotel;
pub mod id;
pub mod price;
pub mod search;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
