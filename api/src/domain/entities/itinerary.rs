//! Itinerary domain entity
//!
//! Itineraries live in the storage backend (source of truth). This entity is
//! the relay's read-mostly view of a record; fields it does not know about are
//! carried in `extra` so a save forwards the body untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A JSON value as the backend stores it.
///
/// Records come from a loosely typed service, so a field like
/// `numberOfTravelers` may arrive as `4` or `"4"`, and `activities` may be a
/// list. The original JSON is kept for round-tripping; `Display` gives the
/// text coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Flag(bool),
    /// Arrays and objects
    Other(Value),
}

impl FieldValue {
    /// True when the value coerces to text that is empty after trimming
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::Flag(_) => false,
            FieldValue::Other(_) => self.to_string().trim().is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Other(v) => write_value(f, v),
        }
    }
}

// Arrays join their items with commas; objects print as JSON
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_value(f, item)?;
            }
            Ok(())
        }
        other => write!(f, "{}", other),
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n.into())
    }
}

/// A travel itinerary as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    /// Assigned by the backend; absent on records submitted for saving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_title: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_travelers: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_plans: Option<DailyPlans>,
    /// Fields the relay does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItineraryRecord {
    /// Day plans in sequence order (empty when absent)
    pub fn days(&self) -> &[DayPlan] {
        match &self.daily_plans {
            Some(DailyPlans::Days(days)) => days,
            Some(DailyPlans::Other(_)) | None => &[],
        }
    }

    /// True when this record's id equals `id` (same JSON type and value)
    pub fn has_id(&self, id: &FieldValue) -> bool {
        self.id.as_ref() == Some(id)
    }
}

/// The `dailyPlans` field: a list of day objects, or any other shape the
/// backend happens to hold, which is carried through but not rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DailyPlans {
    Days(Vec<DayPlan>),
    Other(Value),
}

impl From<Vec<DayPlan>> for DailyPlans {
    fn from(days: Vec<DayPlan>) -> Self {
        DailyPlans::Days(days)
    }
}

/// One day's entry within an itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treat a blank value the same as an absent one
pub fn present(value: &Option<FieldValue>) -> Option<&FieldValue> {
    value.as_ref().filter(|v| !v.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case_record() {
        let json = r#"{
            "id": "it-1",
            "tripTitle": "Paris Trip",
            "destination": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-10",
            "clientName": "Jane Doe",
            "numberOfTravelers": 2,
            "dailyPlans": [{"date": "2024-06-01", "activities": "Louvre"}]
        }"#;

        let record: ItineraryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(FieldValue::from("it-1")));
        assert_eq!(record.trip_title, Some(FieldValue::from("Paris Trip")));
        assert_eq!(record.number_of_travelers, Some(FieldValue::from(2)));
        assert_eq!(record.days().len(), 1);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let json = r#"{"tripTitle": null, "dailyPlans": null}"#;
        let record: ItineraryRecord = serde_json::from_str(json).unwrap();

        assert!(record.trip_title.is_none());
        assert!(record.days().is_empty());
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let json = r#"{"tripTitle": "Rome", "budget": {"amount": 1200, "currency": "EUR"}}"#;
        let record: ItineraryRecord = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["budget"]["currency"], "EUR");
        assert_eq!(value["tripTitle"], "Rome");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn numeric_fields_keep_their_json_type() {
        let record: ItineraryRecord =
            serde_json::from_str(r#"{"id": 7, "numberOfTravelers": "3"}"#).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["numberOfTravelers"], "3");
    }

    #[test]
    fn blank_detection() {
        assert!(FieldValue::from("   ").is_blank());
        assert!(FieldValue::from("").is_blank());
        assert!(!FieldValue::from(" x ").is_blank());
        assert!(!FieldValue::from(0).is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
    }

    #[test]
    fn id_match_is_type_strict() {
        let record = ItineraryRecord {
            id: Some(FieldValue::from(5)),
            ..Default::default()
        };

        assert!(record.has_id(&FieldValue::from(5)));
        assert!(!record.has_id(&FieldValue::from("5")));
    }

    #[test]
    fn display_coerces_to_text() {
        assert_eq!(FieldValue::from(4).to_string(), "4");
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
        assert_eq!(FieldValue::from("Rome").to_string(), "Rome");
    }

    #[test]
    fn structured_values_are_kept() {
        let json = r#"{
            "tripTitle": "Rome Trip",
            "status": {"stage": "draft"},
            "dailyPlans": [{"date": "d1", "activities": ["Colosseum", "Forum"]}]
        }"#;
        let record: ItineraryRecord = serde_json::from_str(json).unwrap();

        let activities = record.days()[0].activities.as_ref().unwrap();
        assert_eq!(activities.to_string(), "Colosseum,Forum");
        assert_eq!(
            record.status.as_ref().unwrap().to_string(),
            r#"{"stage":"draft"}"#
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["dailyPlans"][0]["activities"][1], "Forum");
        assert_eq!(value["status"]["stage"], "draft");
    }

    #[test]
    fn odd_daily_plans_shape_is_carried_not_rendered() {
        let record: ItineraryRecord =
            serde_json::from_str(r#"{"dailyPlans": "see attachment"}"#).unwrap();

        assert!(record.days().is_empty());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["dailyPlans"], "see attachment");
    }

    #[test]
    fn empty_list_is_blank() {
        assert!(FieldValue::Other(serde_json::json!([])).is_blank());
        assert!(!FieldValue::Other(serde_json::json!(["Louvre"])).is_blank());
    }
}
