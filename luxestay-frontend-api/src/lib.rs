use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use luxestay_boundary::gemini::{ApiError, ErrorResponse};

mod gemini;

pub use self::gemini::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("No Gemini API key configured")]
    MissingApiKey,

    #[error("Gemini API error: {0}")]
    Api(#[from] ApiError),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(ErrorResponse { error }) => Err(error.into()),
            Err(_) => Err(Error::Fetch(format!("Unexpected response status {status}"))),
        }
    }
}
