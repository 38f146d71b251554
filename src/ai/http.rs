//! HTTP client for the hosted AI functions

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;

use super::{AiError, ChatMessage, CoachChat, DetectedFood, FoodRecognizer};

#[derive(Serialize)]
struct AnalyzeFoodRequest {
    image: String,
}

#[derive(Deserialize)]
struct AnalyzeFoodResponse {
    food: Option<DetectedFood>,
}

#[derive(Serialize)]
struct CoachRequest<'a> {
    message: &'a str,
    history: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CoachResponse {
    reply: Option<String>,
}

/// Calls `analyze-food` and `fitness-coach` under a common base URL
#[derive(Clone)]
pub struct HttpAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAiClient {
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::Failed(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    async fn post<B: Serialize + ?Sized>(&self, name: &str, body: &B) -> Result<reqwest::Response, AiError> {
        let mut request = self.client.post(self.endpoint(name)).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} request failed: {}", name, e);
            AiError::Failed(e.to_string())
        })?;

        if let Some(err) = classify_status(response.status()) {
            tracing::warn!("{} returned {}", name, response.status());
            return Err(err);
        }
        Ok(response)
    }
}

/// Map a non-success HTTP status to the error the caller distinguishes
pub(crate) fn classify_status(status: StatusCode) -> Option<AiError> {
    if status.is_success() {
        None
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Some(AiError::RateLimited)
    } else if status == StatusCode::PAYMENT_REQUIRED {
        Some(AiError::QuotaExhausted)
    } else {
        Some(AiError::Failed(format!("HTTP {}", status.as_u16())))
    }
}

/// Encode an image as a `data:` URL, sniffing PNG/JPEG/WebP from the header
pub(crate) fn encode_image(image: &[u8]) -> String {
    let mime = if image.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if image.len() >= 12 && &image[0..4] == b"RIFF" && &image[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(image))
}

/// Pull the detected food out of an `analyze-food` body
pub(crate) fn parse_food_response(body: &str) -> Result<DetectedFood, AiError> {
    let parsed: AnalyzeFoodResponse =
        serde_json::from_str(body).map_err(|e| AiError::Failed(e.to_string()))?;
    parsed.food.ok_or(AiError::Unrecognized)
}

#[async_trait]
impl FoodRecognizer for HttpAiClient {
    async fn identify_food(&self, image: &[u8]) -> Result<DetectedFood, AiError> {
        if image.is_empty() {
            return Err(AiError::Failed("empty image".to_string()));
        }

        let body = AnalyzeFoodRequest {
            image: encode_image(image),
        };
        let response = self.post("analyze-food", &body).await?;
        let text = response
            .text()
            .await
            .map_err(|e| AiError::Failed(e.to_string()))?;

        let food = parse_food_response(&text)?;
        tracing::info!("recognized {} ({} kcal)", food.name, food.calories);
        Ok(food)
    }
}

#[async_trait]
impl CoachChat for HttpAiClient {
    async fn chat(&self, message: &str, history: &[ChatMessage]) -> Result<String, AiError> {
        let body = CoachRequest { message, history };
        let response = self.post("fitness-coach", &body).await?;
        let parsed: CoachResponse = response
            .json()
            .await
            .map_err(|e| AiError::Failed(e.to_string()))?;

        parsed
            .reply
            .ok_or_else(|| AiError::Failed("coach returned no reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(StatusCode::OK), None);
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            Some(AiError::RateLimited)
        );
        assert_eq!(
            classify_status(StatusCode::PAYMENT_REQUIRED),
            Some(AiError::QuotaExhausted)
        );
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            Some(AiError::Failed("HTTP 500".to_string()))
        );
    }

    #[test]
    fn test_encode_image_sniffs_mime() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A];
        assert!(encode_image(&png).starts_with("data:image/png;base64,"));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(encode_image(&jpeg), "data:image/jpeg;base64,/9j/4A==");

        assert!(encode_image(b"hello").starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_parse_food_response() {
        let food = parse_food_response(
            r#"{"food":{"name":"Idli","calories":78,"protein":2.5,"carbs":16,"fat":0.3}}"#,
        )
        .unwrap();
        assert_eq!(food.name, "Idli");
        assert_eq!(food.calories, 78.0);

        assert_eq!(parse_food_response(r#"{"food":null}"#), Err(AiError::Unrecognized));
        assert_eq!(parse_food_response("{}"), Err(AiError::Unrecognized));
        assert!(matches!(
            parse_food_response("not json"),
            Err(AiError::Failed(_))
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = HttpAiClient::new(&AiConfig {
            base_url: "https://example.test/functions/v1/".to_string(),
            api_key: None,
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(
            client.endpoint("analyze-food"),
            "https://example.test/functions/v1/analyze-food"
        );
    }
}
