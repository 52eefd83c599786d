use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid credentials")]
    Credentials,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
