/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// DD.MM.YYYY HH:MM, или "-" если даты нет
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// DD.MM.YYYY, или "-" если даты нет
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// HH:MM для карточек кухни
pub fn format_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}
