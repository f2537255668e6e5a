use chrono::{DateTime, Local, NaiveDateTime};

/// Value format of `<input type="datetime-local">`
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATETIME_DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Current local time, formatted for a datetime-local input
pub fn now_local_input() -> String {
    Local::now().format(DATETIME_INPUT_FORMAT).to_string()
}

/// Parses an ISO-8601 local datetime (minutes, seconds or fractional seconds)
pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Human readable datetime for tables; `N/A` when absent
pub fn format_display(value: Option<&str>) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return "N/A".to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt
            .with_timezone(&Local)
            .format(DATETIME_DISPLAY_FORMAT)
            .to_string();
    }

    match parse_local_datetime(value) {
        Some(dt) => dt.format(DATETIME_DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Remaining seconds as `m:ss`
pub fn format_countdown(remaining_secs: u32) -> String {
    format!("{}:{:02}", remaining_secs / 60, remaining_secs % 60)
}
