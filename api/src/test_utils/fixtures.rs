//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid record that can be customized.

use crate::domain::entities::{DayPlan, FieldValue, ItineraryRecord};

/// Create a complete itinerary with id `itin-001`
pub fn test_itinerary() -> ItineraryRecord {
    ItineraryRecord {
        id: Some("itin-001".into()),
        trip_title: Some("Paris Trip".into()),
        destination: Some("Paris".into()),
        start_date: Some("2024-06-01".into()),
        end_date: Some("2024-06-10".into()),
        client_name: Some("Jane Doe".into()),
        number_of_travelers: Some(FieldValue::from(2)),
        trip_type: Some("Leisure".into()),
        status: None,
        notes: None,
        daily_plans: Some(vec![test_day_plan(
            "2024-06-01",
            Some("Sunny, 24°C"),
            Some("Arrival and Seine river cruise"),
        )].into()),
        extra: Default::default(),
    }
}

/// Create a complete itinerary with a specific id
pub fn test_itinerary_with_id(id: impl Into<FieldValue>) -> ItineraryRecord {
    ItineraryRecord {
        id: Some(id.into()),
        ..test_itinerary()
    }
}

/// Create a day plan
pub fn test_day_plan(date: &str, weather: Option<&str>, activities: Option<&str>) -> DayPlan {
    DayPlan {
        date: Some(date.into()),
        weather: weather.map(FieldValue::from),
        activities: activities.map(FieldValue::from),
        extra: Default::default(),
    }
}
