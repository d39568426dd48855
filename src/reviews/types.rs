//! Review payloads and store record mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::validate::ValidatePayload;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Body of `POST /restaurants/:restaurantId/reviews`.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub text: String,
}

impl ValidatePayload for CreateReview {
    fn validate(&self) -> Result<(), Vec<String>> {
        if (MIN_RATING..=MAX_RATING).contains(&self.rating) {
            Ok(())
        } else {
            Err(vec![format!(
                "rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )])
        }
    }
}

/// Path parameters of the review deletion route.
#[derive(Debug, Deserialize)]
pub struct ReviewPath {
    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,
    #[serde(rename = "reviewId")]
    pub review_id: String,
}

/// Review detail hash as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: String,
    pub rating: f64,
    pub text: String,
    pub timestamp: i64,
    pub restaurant_id: String,
}

impl ReviewRecord {
    pub fn new(
        id: String,
        restaurant_id: String,
        rating: f64,
        text: String,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            rating,
            text,
            timestamp,
            restaurant_id,
        }
    }

    /// Hash field/value pairs for the detail write.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("rating", self.rating.to_string()),
            ("text", self.text.clone()),
            ("timestamp", self.timestamp.to_string()),
            ("restaurantId", self.restaurant_id.clone()),
        ]
    }

    /// Builds a record from a stored hash. `None` when the hash carries no
    /// id, which is how a missing key reads back.
    pub fn from_hash(hash: &HashMap<String, String>) -> Option<Self> {
        let id = hash.get("id")?;

        Some(Self {
            id: id.clone(),
            rating: hash.get("rating").and_then(|v| v.parse().ok()).unwrap_or(0.0),
            text: hash.get("text").cloned().unwrap_or_default(),
            timestamp: hash
                .get("timestamp")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            restaurant_id: hash.get("restaurantId").cloned().unwrap_or_default(),
        })
    }
}

/// Average star rating rounded to one decimal, the value mirrored into the
/// rating index and the `avgStars` hash field.
pub fn average_rating(total_stars: f64, review_count: i64) -> f64 {
    if review_count <= 0 {
        return 0.0;
    }
    (total_stars / review_count as f64 * 10.0).round() / 10.0
}
