//! Restaurant Module Tests
//!
//! Validates the create-payload schema and the hash-to-record mapping.
//! Store-backed listing and detail behavior is covered by the HTTP
//! integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::restaurants::types::{CreateRestaurant, RestaurantRecord};
    use crate::validate::ValidatePayload;

    fn payload(name: &str, location: &str, cuisines: &[&str]) -> CreateRestaurant {
        CreateRestaurant {
            name: name.to_string(),
            location: location.to_string(),
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn hash(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ============================================================
    // SCHEMA VALIDATION
    // ============================================================

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload("Thai Corner", "Old Town", &["thai", "vegan"])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let violations = payload("   ", "Old Town", &["thai"]).validate().unwrap_err();
        assert_eq!(violations, vec!["name must be a non-empty string"]);
    }

    #[test]
    fn test_blank_location_rejected() {
        let violations = payload("Thai Corner", "", &["thai"]).validate().unwrap_err();
        assert_eq!(violations, vec!["location must be a non-empty string"]);
    }

    #[test]
    fn test_empty_cuisine_list_rejected() {
        let violations = payload("Thai Corner", "Old Town", &[]).validate().unwrap_err();
        assert_eq!(violations, vec!["cuisines must contain at least one entry"]);
    }

    #[test]
    fn test_blank_cuisine_entry_rejected() {
        let violations = payload("Thai Corner", "Old Town", &["thai", " "])
            .validate()
            .unwrap_err();
        assert_eq!(violations, vec!["cuisines must not contain empty strings"]);
    }

    #[test]
    fn test_every_violation_reported() {
        let violations = payload("", "", &[]).validate().unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    // ============================================================
    // HASH MAPPING
    // ============================================================

    #[test]
    fn test_record_from_full_hash() {
        let record = RestaurantRecord::from_hash(&hash(&[
            ("id", "r1"),
            ("name", "Thai Corner"),
            ("location", "Old Town"),
            ("viewCount", "7"),
            ("totalStars", "9"),
            ("avgStars", "4.5"),
        ]))
        .unwrap();

        assert_eq!(record.id, "r1");
        assert_eq!(record.name, "Thai Corner");
        assert_eq!(record.location, "Old Town");
        assert_eq!(record.view_count, 7);
        assert_eq!(record.total_stars, 9.0);
        assert_eq!(record.avg_stars, 4.5);
    }

    #[test]
    fn test_missing_counters_read_as_zero() {
        let record = RestaurantRecord::from_hash(&hash(&[
            ("id", "r1"),
            ("name", "Thai Corner"),
            ("location", "Old Town"),
        ]))
        .unwrap();

        assert_eq!(record.view_count, 0);
        assert_eq!(record.total_stars, 0.0);
        assert_eq!(record.avg_stars, 0.0);
    }

    #[test]
    fn test_empty_hash_yields_none() {
        assert!(RestaurantRecord::from_hash(&HashMap::new()).is_none());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = RestaurantRecord::from_hash(&hash(&[
            ("id", "r1"),
            ("name", "Thai Corner"),
            ("location", "Old Town"),
            ("viewCount", "1"),
        ]))
        .unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["viewCount"], 1);
        assert_eq!(json["avgStars"], 0.0);
        assert!(json.get("view_count").is_none());
    }

    #[test]
    fn test_creation_fields_cover_identity_only() {
        let fields = RestaurantRecord::creation_fields("r1", "Thai Corner", "Old Town");
        assert_eq!(
            fields,
            vec![
                ("id", "r1".to_string()),
                ("name", "Thai Corner".to_string()),
                ("location", "Old Town".to_string()),
            ]
        );
    }
}
