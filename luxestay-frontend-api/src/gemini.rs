use gloo_net::http::Request;

use luxestay_boundary::gemini::{
    generate_content_url, GenerateContentRequest, GenerateContentResponse, LatLng,
};

use crate::{into_json, Error, Result};

pub use luxestay_boundary::gemini::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Gemini API as seen from the browser.
#[derive(Debug, Clone)]
pub struct GeminiApi {
    url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiApi {
    #[must_use]
    pub const fn new(url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            url,
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        generate_content_url(&self.url, &self.model)
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let url = self.endpoint();
        let response = Request::post(&url)
            .query([("key", api_key)])
            .json(request)?
            .send()
            .await?;
        into_json(response).await
    }

    /// A prompt answered with places from Google Maps.
    pub async fn maps_grounded(
        &self,
        prompt: String,
        lat_lng: Option<LatLng>,
    ) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest::maps_grounded(prompt, lat_lng);
        self.generate_content(&request).await
    }
}
