mod authenticate;
mod error;
mod favorites;
mod search;
mod session;

#[cfg(test)]
pub mod tests;

pub use self::{
    authenticate::*, error::Error, favorites::*, search::*, session::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
