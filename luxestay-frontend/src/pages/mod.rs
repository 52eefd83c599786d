mod auth;
mod home;

pub use self::{auth::*, home::*};
