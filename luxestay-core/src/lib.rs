pub mod app;
pub mod gateways;
pub mod repositories;
pub mod synthesis;
pub mod usecases;
pub mod view;

pub mod entities {
    pub use luxestay_entities::{
        geo::*, grounding::*, hotel::*, id::*, price::*, search::*, time::*, user::*,
    };
}
