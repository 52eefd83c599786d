//! The application state and the only way to change it.
//!
//! Front-ends own exactly one [`AppController`], read its
//! [`AppState`] to render and call its transition methods
//! on user input. Asynchronous work (locating the device,
//! searching) is handed out as requests and fed back in
//! when it completes.

mod controller;
mod state;

pub use self::{controller::*, state::*};
