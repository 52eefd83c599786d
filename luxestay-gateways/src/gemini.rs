use luxestay_boundary::gemini::{
    generate_content_url, ApiError, ErrorResponse, GenerateContentRequest,
    GenerateContentResponse,
};
use luxestay_core::{entities::*, gateways::HotelSearchGateway};
use reqwest::StatusCode;
use thiserror::Error;

pub use luxestay_boundary::gemini::{DEFAULT_API_URL, DEFAULT_MODEL};

#[derive(Debug, Error)]
pub enum Error {
    #[error("No Gemini API key configured")]
    MissingApiKey,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Gemini API error: {0}")]
    Api(#[from] ApiError),
    #[error("Unexpected response status {0}")]
    Status(StatusCode),
    #[error("Unable to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A blocking client of the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct Gemini {
    pub api_url: String,
    pub model: String,
    pub api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl Gemini {
    pub fn new(api_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            api_url,
            model,
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        generate_content_url(&self.api_url, &self.model)
    }

    pub fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let url = self.endpoint();
        log::debug!("Sending request to {url}");
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        decode_response(status, &body)
    }
}

fn decode_response(status: StatusCode, body: &str) -> Result<GenerateContentResponse, Error> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => Err(error.into()),
        Err(_) => Err(Error::Status(status)),
    }
}

impl HotelSearchGateway for Gemini {
    fn grounded_search(
        &self,
        prompt: &str,
        coordinates: Option<Coordinates>,
    ) -> anyhow::Result<GroundedAnswer> {
        let request =
            GenerateContentRequest::maps_grounded(prompt.to_string(), coordinates.map(Into::into));
        let response = self.generate_content(&request)?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_of_model() {
        let gemini = Gemini::new(
            format!("{DEFAULT_API_URL}/"),
            DEFAULT_MODEL.to_string(),
            None,
        );
        assert_eq!(
            gemini.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn refuse_to_search_without_api_key() {
        let gemini = Gemini::new(DEFAULT_API_URL.into(), DEFAULT_MODEL.into(), None);
        let err = gemini.grounded_search("Kribi", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingApiKey)
        ));
    }

    #[test]
    fn decode_grounded_answer() {
        let body = r#"{
          "candidates": [{
            "content": { "parts": [{ "text": "Le recomiendo" }] },
            "groundingMetadata": {
              "groundingChunks": [
                { "maps": { "title": "Hilton Yaoundé", "uri": "https://maps.google.com/?cid=7" } }
              ]
            }
          }]
        }"#;
        let answer: GroundedAnswer = decode_response(StatusCode::OK, body).unwrap().into();
        assert_eq!(answer.text.as_deref(), Some("Le recomiendo"));
        assert_eq!(answer.chunks.len(), 1);
        assert_eq!(answer.chunks[0].title.as_deref(), Some("Hilton Yaoundé"));
    }

    #[test]
    fn decode_api_error() {
        let body = r#"{
          "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        }"#;
        let err = decode_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        let Error::Api(api_err) = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(api_err.code, Some(400));
        assert_eq!(api_err.message, "API key not valid.");
    }

    #[test]
    fn decode_unexpected_status() {
        let err = decode_response(StatusCode::BAD_GATEWAY, "<html></html>").unwrap_err();
        assert!(matches!(err, Error::Status(StatusCode::BAD_GATEWAY)));
    }

    #[test]
    fn decode_garbage() {
        let err = decode_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
