//! Presentation-adjacent formatting helpers. Pure functions, no I/O; the
//! views call these on data the services returned.

pub mod message;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

pub use message::format_message;

/// Job types offered by the preference pickers.
pub const JOB_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Temporary",
    "Internship",
    "Volunteer",
];

/// Remote types offered by the preference pickers.
pub const REMOTE_TYPES: &[&str] = &["On-site", "Remote", "Hybrid"];

const JOB_TYPE_LABELS: &[(&str, &str)] = &[
    ("Full-time", "Full-time"),
    ("Part-time", "Part-time"),
    ("Contract", "Contract"),
    ("Temporary", "Temporary"),
    ("Internship", "Internship"),
    ("Volunteer", "Volunteer"),
];

const REMOTE_TYPE_LABELS: &[(&str, &str)] = &[
    ("Remote", "Remote"),
    ("On-site", "On-site"),
    ("Hybrid", "Hybrid"),
];

const REMOTE_TYPE_ICONS: &[(&str, &str)] = &[
    ("Remote", "🏠"),
    ("On-site", "🏢"),
    ("Hybrid", "🔄"),
];

/// Shown when a remote type has no icon of its own.
const GENERIC_PIN_ICON: &str = "📍";

/// Formats a salary range for display. Either bound may be absent.
pub fn format_salary(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (None, None) => "Salary not specified".to_string(),
        (Some(min), Some(max)) => {
            format!("${} - ${}", group_thousands(min), group_thousands(max))
        }
        (Some(min), None) => format!("${}+", group_thousands(min)),
        (None, Some(max)) => format!("Up to ${}", group_thousands(max)),
    }
}

/// Formats a posting date relative to now: "1 day ago", "N days ago",
/// "N week(s) ago", or the plain date once it is a month old.
pub fn format_posted_date(posted_date: Option<&str>) -> String {
    format_posted_date_at(posted_date, Utc::now())
}

/// Deterministic variant of [`format_posted_date`]; `now` is injected.
///
/// The day delta is `ceil(|now - date| / 1 day)`, so anything up to 24h out
/// reads "1 day ago".
pub fn format_posted_date_at(posted_date: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(date) = posted_date.and_then(parse_date) else {
        return "Date not specified".to_string();
    };

    let diff_secs = (now - date).num_seconds().abs();
    let diff_days = (diff_secs as f64 / 86_400.0).ceil() as i64;

    if diff_days == 1 {
        "1 day ago".to_string()
    } else if diff_days < 7 {
        format!("{diff_days} days ago")
    } else if diff_days < 30 {
        let weeks = diff_days / 7;
        if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{weeks} weeks ago")
        }
    } else {
        format!("{}/{}/{}", date.month(), date.day(), date.year())
    }
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Display label for a job type; unrecognized values pass through as-is.
pub fn job_type_label(job_type: Option<&str>) -> String {
    label_or_raw(JOB_TYPE_LABELS, job_type)
}

/// Display label for a remote type; unrecognized values pass through as-is.
pub fn remote_type_label(remote_type: Option<&str>) -> String {
    label_or_raw(REMOTE_TYPE_LABELS, remote_type)
}

/// Icon for a remote type, falling back to a generic pin.
pub fn remote_type_icon(remote_type: Option<&str>) -> &'static str {
    remote_type
        .and_then(|rt| {
            REMOTE_TYPE_ICONS
                .iter()
                .find(|(key, _)| *key == rt)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(GENERIC_PIN_ICON)
}

fn label_or_raw(table: &[(&str, &'static str)], value: Option<&str>) -> String {
    let Some(value) = value else {
        return "Not specified".to_string();
    };
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_salary_both_absent() {
        assert_eq!(format_salary(None, None), "Salary not specified");
    }

    #[test]
    fn test_salary_both_present_with_separators() {
        assert_eq!(
            format_salary(Some(100_000), Some(150_000)),
            "$100,000 - $150,000"
        );
    }

    #[test]
    fn test_salary_min_only() {
        assert_eq!(format_salary(Some(90_000), None), "$90,000+");
    }

    #[test]
    fn test_salary_max_only() {
        assert_eq!(format_salary(None, Some(120_000)), "Up to $120,000");
    }

    #[test]
    fn test_salary_small_values_unseparated() {
        assert_eq!(format_salary(Some(900), Some(1_000)), "$900 - $1,000");
    }

    #[test]
    fn test_salary_idempotent_inputs() {
        let a = format_salary(Some(50_000), Some(70_000));
        let b = format_salary(Some(50_000), Some(70_000));
        assert_eq!(a, b);
    }

    #[test]
    fn test_posted_date_none() {
        assert_eq!(
            format_posted_date_at(None, fixed_now()),
            "Date not specified"
        );
    }

    #[test]
    fn test_posted_date_unparseable() {
        assert_eq!(
            format_posted_date_at(Some("not-a-date"), fixed_now()),
            "Date not specified"
        );
    }

    #[test]
    fn test_posted_date_half_day_rounds_up_to_one() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-15T00:00:00Z"), fixed_now()),
            "1 day ago"
        );
    }

    #[test]
    fn test_posted_date_three_days() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-12T12:00:00Z"), fixed_now()),
            "3 days ago"
        );
    }

    #[test]
    fn test_posted_date_six_days() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-09T12:00:00Z"), fixed_now()),
            "6 days ago"
        );
    }

    #[test]
    fn test_posted_date_exactly_one_week_singular() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-08T12:00:00Z"), fixed_now()),
            "1 week ago"
        );
    }

    #[test]
    fn test_posted_date_thirteen_days_still_one_week() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-02T12:00:00Z"), fixed_now()),
            "1 week ago"
        );
    }

    #[test]
    fn test_posted_date_twenty_days_two_weeks() {
        assert_eq!(
            format_posted_date_at(Some("2025-05-26T12:00:00Z"), fixed_now()),
            "2 weeks ago"
        );
    }

    #[test]
    fn test_posted_date_twenty_nine_days_four_weeks() {
        assert_eq!(
            format_posted_date_at(Some("2025-05-17T12:00:00Z"), fixed_now()),
            "4 weeks ago"
        );
    }

    #[test]
    fn test_posted_date_thirty_days_plain_date() {
        assert_eq!(
            format_posted_date_at(Some("2025-05-16T12:00:00Z"), fixed_now()),
            "5/16/2025"
        );
    }

    #[test]
    fn test_posted_date_accepts_bare_date() {
        assert_eq!(
            format_posted_date_at(Some("2025-06-12"), fixed_now()),
            "4 days ago"
        );
    }

    #[test]
    fn test_job_type_label_known_and_unknown() {
        assert_eq!(job_type_label(Some("Full-time")), "Full-time");
        assert_eq!(job_type_label(Some("Apprenticeship")), "Apprenticeship");
        assert_eq!(job_type_label(None), "Not specified");
    }

    #[test]
    fn test_remote_type_icon_fallback() {
        assert_eq!(remote_type_icon(Some("Remote")), "🏠");
        assert_eq!(remote_type_icon(Some("Moonbase")), GENERIC_PIN_ICON);
        assert_eq!(remote_type_icon(None), GENERIC_PIN_ICON);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
