// Access traits for the local session store.
// The store only knows two records: the signed in
// user and the favorites collection. Both are
// rewritten completely on every change.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The stored record is malformed: {0}")]
    Malformed(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn load_user(&self) -> Result<Option<User>>;
    fn save_user(&self, user: &User) -> Result<()>;
    fn clear_user(&self) -> Result<()>;
}

pub trait FavoritesRepo {
    /// Returns an empty list if nothing has been stored yet.
    fn load_favorites(&self) -> Result<Vec<Hotel>>;
    fn save_favorites(&self, favorites: &[Hotel]) -> Result<()>;
}
