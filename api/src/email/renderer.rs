//! Itinerary email renderer
//!
//! Renders an itinerary to a self-contained HTML email. Output depends only on
//! the record, the optional message and the `sent_at` timestamp.

use chrono::{DateTime, Utc};

use crate::domain::entities::{present, DayPlan, FieldValue, ItineraryRecord};

const STYLES: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; }
.container { max-width: 600px; margin: 0 auto; background: #ffffff; }
.header { background: #0081A7; color: white; padding: 20px; text-align: center; }
.content { padding: 20px; }
.trip-details { background: #FDFCDC; padding: 15px; border-radius: 8px; margin: 15px 0; }
.daily-plan { background: #FED9B7; padding: 12px; border-radius: 6px; margin: 10px 0; border-left: 4px solid #0081A7; }
.detail-row { margin: 8px 0; }
.label { font-weight: bold; color: #0081A7; }
.custom-message { background: #FED9B7; padding: 15px; border-radius: 8px; margin: 15px 0; border-left: 4px solid #F07167; }
.footer { text-align: center; padding: 20px; color: #666; font-size: 12px; }
.day-header { color: #0081A7; font-weight: bold; margin-bottom: 5px; }
.weather { color: #666; font-size: 14px; margin-bottom: 5px; }
.activities { margin-top: 8px; }
@media only screen and (max-width: 480px) {
  body { padding: 10px; }
  .content { padding: 15px; }
}
";

/// Subject line for an itinerary email
pub fn render_subject(itinerary: &ItineraryRecord) -> String {
    let title = present(&itinerary.trip_title)
        .map(FieldValue::to_string)
        .unwrap_or_else(|| "Trip".to_string());
    format!("Your {} Itinerary", title)
}

/// Render an itinerary to an HTML email body
pub fn render_itinerary_email(
    itinerary: &ItineraryRecord,
    custom_message: Option<&str>,
    sent_at: DateTime<Utc>,
) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    buf.push_str("<title>Your Travel Itinerary</title>\n");
    buf.push_str("<style>\n");
    buf.push_str(STYLES);
    buf.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    buf.push_str("<div class=\"header\">\n");
    buf.push_str("<h1>Your Travel Itinerary</h1>\n");
    buf.push_str("<p>Prepared with care for your upcoming adventure</p>\n");
    buf.push_str("</div>\n");

    buf.push_str("<div class=\"content\">\n");
    buf.push_str(&format!(
        "<p>Dear {},</p>\n",
        escape_html(&greeting_name(itinerary))
    ));

    if let Some(message) = custom_message.filter(|m| !m.is_empty()) {
        buf.push_str("<div class=\"custom-message\">\n");
        buf.push_str("<p><strong>Personal Message:</strong></p>\n");
        buf.push_str(&format!("<p>{}</p>\n", escape_html(message)));
        buf.push_str("</div>\n");
    }

    buf.push_str("<p>Here are the complete details for your upcoming trip:</p>\n");
    buf.push_str(&render_trip_details(itinerary));

    if let Some(notes) = present(&itinerary.notes) {
        buf.push_str("<div class=\"trip-details\">\n");
        buf.push_str("<h3 style=\"color: #0081A7;\">Notes:</h3>\n");
        buf.push_str(&format!("<p>{}</p>\n", escape_field(notes)));
        buf.push_str("</div>\n");
    }

    let days = itinerary.days();
    if !days.is_empty() {
        buf.push_str("<div class=\"trip-details\">\n");
        buf.push_str("<h3 style=\"color: #0081A7;\">Daily Itinerary:</h3>\n");
        for (index, day) in days.iter().enumerate() {
            buf.push_str(&render_day(index + 1, day));
        }
        buf.push_str("</div>\n");
    }

    buf.push_str(
        "<p>If you have any questions or would like to make changes, \
         please don't hesitate to reach out on our Contact page!</p>\n",
    );
    buf.push_str("<p>Best regards,<br>Your Travel Agent</p>\n");
    buf.push_str("</div>\n");

    let id = itinerary_id(itinerary);
    buf.push_str("<div class=\"footer\">\n");
    buf.push_str(&format!(
        "<p>This itinerary was sent on {}</p>\n",
        sent_at.format("%B %-d, %Y")
    ));
    buf.push_str(&format!("<p>Itinerary ID: {}</p>\n", id));
    buf.push_str("</div>\n");

    buf.push_str("</div>\n</body>\n</html>\n");

    buf
}

fn render_trip_details(itinerary: &ItineraryRecord) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"trip-details\">\n");
    buf.push_str(&format!(
        "<h2 style=\"color: #0081A7; margin-top: 0;\">{}</h2>\n",
        field_or(&itinerary.trip_title, "Your Trip")
    ));
    buf.push_str(&detail_row("Client", &field_or(&itinerary.client_name, "N/A")));
    buf.push_str(&detail_row(
        "Destination",
        &field_or(&itinerary.destination, "N/A"),
    ));
    buf.push_str(&detail_row(
        "Travel Dates",
        &format!(
            "{} to {}",
            field_or(&itinerary.start_date, "TBD"),
            field_or(&itinerary.end_date, "TBD")
        ),
    ));
    buf.push_str(&detail_row(
        "Number of Travelers",
        &field_or(&itinerary.number_of_travelers, "N/A"),
    ));
    buf.push_str(&detail_row("Trip Type", &field_or(&itinerary.trip_type, "N/A")));
    if let Some(status) = present(&itinerary.status) {
        buf.push_str(&detail_row("Status", &escape_field(status)));
    }
    buf.push_str(&detail_row("Itinerary ID", &itinerary_id(itinerary)));
    buf.push_str("</div>\n");

    buf
}

fn render_day(number: usize, day: &DayPlan) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"daily-plan\">\n");
    buf.push_str(&format!(
        "<div class=\"day-header\">Day {} - {}</div>\n",
        number,
        field_or(&day.date, "TBD")
    ));

    if let Some(weather) = present(&day.weather) {
        buf.push_str(&format!(
            "<div class=\"weather\">Weather: {}</div>\n",
            escape_field(weather)
        ));
    }

    match present(&day.activities) {
        Some(activities) => buf.push_str(&format!(
            "<div class=\"activities\"><strong>Activities:</strong><br>{}</div>\n",
            escape_field(activities)
        )),
        None => buf.push_str(
            "<div class=\"activities\"><em>No activities planned yet</em></div>\n",
        ),
    }

    buf.push_str("</div>\n");
    buf
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        "<div class=\"detail-row\"><span class=\"label\">{}:</span> {}</div>\n",
        label, value
    )
}

/// First whitespace-delimited token of the client name, or "Traveler"
fn greeting_name(itinerary: &ItineraryRecord) -> String {
    present(&itinerary.client_name)
        .and_then(|name| name.to_string().split_whitespace().next().map(str::to_string))
        .unwrap_or_else(|| "Traveler".to_string())
}

fn itinerary_id(itinerary: &ItineraryRecord) -> String {
    field_or(&itinerary.id, "N/A")
}

/// Escaped field text, or `fallback` when the field is absent or blank
fn field_or(value: &Option<FieldValue>, fallback: &str) -> String {
    present(value)
        .map(escape_field)
        .unwrap_or_else(|| fallback.to_string())
}

fn escape_field(value: &FieldValue) -> String {
    escape_html(&value.to_string())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
