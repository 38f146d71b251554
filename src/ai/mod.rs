//! AI collaborators
//!
//! Food recognition from a photo and a chat-based fitness coach. Both are
//! remote; callers only see the traits below.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FoodCategory, FoodItem, Nutrition};

pub use http::HttpAiClient;

/// AI call failures, kept apart so each gets its own user message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("rate limited by the AI service")]
    RateLimited,

    #[error("AI credits exhausted")]
    QuotaExhausted,

    #[error("no food recognized in the image")]
    Unrecognized,

    #[error("AI request failed: {0}")]
    Failed(String),
}

impl AiError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            AiError::RateLimited => "Rate limit exceeded. Please try again in a moment.",
            AiError::QuotaExhausted => "AI credits exhausted. Please add credits to continue.",
            AiError::Unrecognized => "Could not identify the food. Please try a clearer image.",
            AiError::Failed(_) => "Failed to reach the AI service. Please try again.",
        }
    }
}

/// A food identified in a photo, macros per portion shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DetectedFood {
    /// Treat the detected portion as one serving of an ad-hoc food
    pub fn into_food_item(self) -> FoodItem {
        let nutrition = Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            ..Nutrition::zero()
        };
        FoodItem {
            id: format!("scan:{}", self.name.to_lowercase().replace(' ', "-")),
            name: self.name,
            category: FoodCategory::Other,
            serving_size: 0.0,
            serving_unit: "serving".to_string(),
            nutrition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a coaching conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Identifies a food from an image
#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    async fn identify_food(&self, image: &[u8]) -> Result<DetectedFood, AiError>;
}

/// Answers fitness questions given the conversation so far
#[async_trait]
pub trait CoachChat: Send + Sync {
    async fn chat(&self, message: &str, history: &[ChatMessage]) -> Result<String, AiError>;
}
