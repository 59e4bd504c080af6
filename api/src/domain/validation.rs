//! Itinerary validation
//!
//! Completeness checks run both when saving and when sharing, since the
//! backend may have changed a record between the two calls.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::entities::{FieldValue, ItineraryRecord};

/// Fields every itinerary must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "tripTitle",
    "destination",
    "startDate",
    "endDate",
    "clientName",
];

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Outcome of validating an itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub missing_fields: Vec<&'static str>,
}

/// Check that all required fields are present and non-blank.
///
/// Missing fields are reported in `REQUIRED_FIELDS` order regardless of the
/// order they appear in the input.
pub fn validate_itinerary(itinerary: &ItineraryRecord) -> Validation {
    let values: [&Option<FieldValue>; 5] = [
        &itinerary.trip_title,
        &itinerary.destination,
        &itinerary.start_date,
        &itinerary.end_date,
        &itinerary.client_name,
    ];

    let missing_fields: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.as_ref().map_or(true, FieldValue::is_blank))
        .map(|(name, _)| *name)
        .collect();

    Validation {
        is_valid: missing_fields.is_empty(),
        missing_fields,
    }
}

/// Basic `local@domain.tld` shape check, not full RFC 5322 validation
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_SHAPE.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_itinerary;

    #[test]
    fn complete_record_is_valid() {
        let result = validate_itinerary(&test_itinerary());

        assert!(result.is_valid);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn blank_client_name_is_reported() {
        let itinerary = ItineraryRecord {
            trip_title: Some("Paris Trip".into()),
            destination: Some("Paris".into()),
            start_date: Some("2024-06-01".into()),
            end_date: Some("2024-06-10".into()),
            client_name: Some("".into()),
            ..Default::default()
        };

        let result = validate_itinerary(&itinerary);

        assert_eq!(
            result,
            Validation {
                is_valid: false,
                missing_fields: vec!["clientName"],
            }
        );
    }

    #[test]
    fn empty_record_reports_all_fields_in_order() {
        let result = validate_itinerary(&ItineraryRecord::default());

        assert!(!result.is_valid);
        assert_eq!(result.missing_fields, REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut itinerary = test_itinerary();
        itinerary.destination = Some("   \t".into());
        itinerary.end_date = None;

        let result = validate_itinerary(&itinerary);

        assert_eq!(result.missing_fields, vec!["destination", "endDate"]);
    }

    #[test]
    fn order_follows_required_list_not_input() {
        // endDate and tripTitle missing; report tripTitle first
        let json = r#"{
            "clientName": "Ana",
            "endDate": "",
            "startDate": "2024-01-01",
            "destination": "Lisbon"
        }"#;
        let itinerary: ItineraryRecord = serde_json::from_str(json).unwrap();

        let result = validate_itinerary(&itinerary);

        assert_eq!(result.missing_fields, vec!["tripTitle", "endDate"]);
    }

    #[test]
    fn numeric_values_coerce_to_text() {
        let mut itinerary = test_itinerary();
        itinerary.trip_title = Some(FieldValue::from(2024));

        assert!(validate_itinerary(&itinerary).is_valid);
    }

    #[test]
    fn validation_serializes_camel_case() {
        let json = serde_json::to_value(validate_itinerary(&ItineraryRecord::default())).unwrap();

        assert_eq!(json["isValid"], false);
        assert_eq!(json["missingFields"][0], "tripTitle");
    }

    #[test]
    fn email_shape_accepts_plain_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }
}
