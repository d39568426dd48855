//! Restaurant payloads and store record mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::validate::ValidatePayload;

/// Body of `POST /restaurants`.
#[derive(Debug, Deserialize)]
pub struct CreateRestaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

impl ValidatePayload for CreateRestaurant {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push("name must be a non-empty string".to_string());
        }
        if self.location.trim().is_empty() {
            violations.push("location must be a non-empty string".to_string());
        }
        if self.cuisines.is_empty() {
            violations.push("cuisines must contain at least one entry".to_string());
        } else if self.cuisines.iter().any(|c| c.trim().is_empty()) {
            violations.push("cuisines must not contain empty strings".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Path parameters of restaurant-scoped routes.
#[derive(Debug, Deserialize)]
pub struct RestaurantPath {
    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,
}

/// Restaurant hash as returned to clients.
///
/// Hash values are stored as strings; counters absent from the hash (a
/// restaurant that was never viewed or reviewed) read as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub view_count: u64,
    pub total_stars: f64,
    pub avg_stars: f64,
}

impl RestaurantRecord {
    /// Hash field/value pairs written on creation. The counters are not
    /// seeded, the first increment creates them.
    pub fn creation_fields(id: &str, name: &str, location: &str) -> Vec<(&'static str, String)> {
        vec![
            ("id", id.to_string()),
            ("name", name.to_string()),
            ("location", location.to_string()),
        ]
    }

    /// Builds a record from a stored hash. `None` when the hash carries no
    /// id, which is how a missing key reads back.
    pub fn from_hash(hash: &HashMap<String, String>) -> Option<Self> {
        let id = hash.get("id")?;

        Some(Self {
            id: id.clone(),
            name: hash.get("name").cloned().unwrap_or_default(),
            location: hash.get("location").cloned().unwrap_or_default(),
            view_count: parse_or_zero(hash.get("viewCount")),
            total_stars: parse_or_zero(hash.get("totalStars")),
            avg_stars: parse_or_zero(hash.get("avgStars")),
        })
    }
}

/// Detail response: the record plus its cuisine memberships.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: RestaurantRecord,
    pub cuisines: Vec<String>,
}

/// Creation response: exactly the fields persisted to the hash.
#[derive(Debug, Serialize)]
pub struct CreatedRestaurant {
    pub id: String,
    pub name: String,
    pub location: String,
}

fn parse_or_zero<T: std::str::FromStr + Default>(field: Option<&String>) -> T {
    field.and_then(|v| v.parse().ok()).unwrap_or_default()
}
