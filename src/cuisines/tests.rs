//! Cuisine Module Tests
//!
//! Validates the serialized shape of the cuisine listings. Store-backed
//! behavior is covered by the HTTP integration tests.

#[cfg(test)]
mod tests {
    use crate::response::Envelope;

    #[test]
    fn test_missing_names_serialize_as_null() {
        let body = Envelope::data(vec![Some("Thai Corner".to_string()), None]);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"], serde_json::json!(["Thai Corner", null]));
    }

    #[test]
    fn test_catalog_serializes_as_plain_array() {
        let body = Envelope::data(vec!["thai".to_string(), "vegan".to_string()]);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"], serde_json::json!(["thai", "vegan"]));
    }
}
