//! Review Module Tests
//!
//! Validates the rating schema, the one-decimal average computation, and
//! the detail-hash mapping. Store-backed submission and deletion behavior
//! is covered by the HTTP integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::reviews::types::{average_rating, CreateReview, ReviewRecord};
    use crate::validate::ValidatePayload;

    fn review(rating: f64) -> CreateReview {
        CreateReview {
            rating,
            text: "solid pad thai".to_string(),
        }
    }

    // ============================================================
    // SCHEMA VALIDATION
    // ============================================================

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(review(1.0).validate().is_ok());
        assert!(review(5.0).validate().is_ok());
        assert!(review(3.5).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        assert!(review(0.9).validate().is_err());
        assert!(review(5.1).validate().is_err());
        assert!(review(-1.0).validate().is_err());
    }

    #[test]
    fn test_violation_names_the_range() {
        let violations = review(6.0).validate().unwrap_err();
        assert_eq!(violations, vec!["rating must be between 1 and 5"]);
    }

    // ============================================================
    // AVERAGE COMPUTATION
    // ============================================================

    #[test]
    fn test_average_of_four_and_five_is_four_point_five() {
        assert_eq!(average_rating(9.0, 2), 4.5);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(average_rating(10.0, 3), 3.3);
        assert_eq!(average_rating(11.0, 3), 3.7);
    }

    #[test]
    fn test_average_of_single_rating_is_the_rating() {
        assert_eq!(average_rating(4.0, 1), 4.0);
    }

    #[test]
    fn test_average_with_no_reviews_is_zero() {
        assert_eq!(average_rating(0.0, 0), 0.0);
    }

    // ============================================================
    // HASH MAPPING
    // ============================================================

    #[test]
    fn test_fields_round_trip_through_hash() {
        let record = ReviewRecord::new(
            "rev1".to_string(),
            "r1".to_string(),
            4.5,
            "solid pad thai".to_string(),
            1_700_000_000_000,
        );

        let hash: HashMap<String, String> = record
            .to_fields()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(ReviewRecord::from_hash(&hash).unwrap(), record);
    }

    #[test]
    fn test_empty_hash_yields_none() {
        assert!(ReviewRecord::from_hash(&HashMap::new()).is_none());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ReviewRecord::new(
            "rev1".to_string(),
            "r1".to_string(),
            4.0,
            "fine".to_string(),
            0,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["restaurantId"], "r1");
        assert!(json.get("restaurant_id").is_none());
    }
}
