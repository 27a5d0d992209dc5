use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// RFC 3339 instant as exchanged with the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Short human form used in tables.
    #[must_use]
    pub fn display(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Same form, shifted into `tz` (the browser's zone in the UI).
    #[must_use]
    pub fn display_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        self.0.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.display() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 59).unwrap();
        let timestamp = Timestamp(dt);

        assert_eq!(timestamp.display(), "2025-03-08 14:30");
        assert_eq!(timestamp.to_html(), html! { "2025-03-08 14:30" });
    }

    #[test]
    fn test_timestamp_display_in_offset() {
        let timestamp = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 23, 30, 0).unwrap());
        let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(timestamp.display_in(&tz), "2025-03-09 01:30");
    }

    #[test]
    fn test_timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap();
        let serialized = serde_json::to_string(&Timestamp(dt)).unwrap();

        assert_eq!(serialized, "\"2025-03-08T14:30:00Z\"");
    }

    #[test]
    fn test_timestamp_deserializes_offset() {
        let deserialized: Timestamp = serde_json::from_str("\"2025-03-08T16:30:00+02:00\"").unwrap();

        let expected = Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap();
        assert_eq!(deserialized.0, expected);
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap());
        let later = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 1).unwrap());

        assert!(earlier < later);
    }
}
