use chrono::{ TimeZone, Utc };
use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").unwrap());

/// Removes HTML tags, keeping the text between them. Entities are left as-is.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

pub fn wrap_body(text: &str, width: usize) -> String {
    textwrap::fill(text, width.max(20))
}

pub fn timestamp_to_elapsed(timestamp: i64) -> String {
    let Some(then) = Utc.timestamp_opt(timestamp, 0).single() else {
        return "some time ago".to_string();
    };
    let duration = Utc::now().signed_duration_since(then);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_hours() < 24 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_days() < 30 {
        plural(duration.num_days(), "day")
    } else if duration.num_days() < 365 {
        plural(duration.num_days() / 30, "month")
    } else {
        plural(duration.num_days() / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}
