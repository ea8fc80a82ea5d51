//! Text helpers shared by every template.

use chrono::NaiveDate;

/// Formats `YYYY`, `YYYY-MM` or `YYYY-MM-DD` as `Mon YYYY` (a bare year reads as January).
/// Unparseable input is returned unchanged; empty input stays empty.
pub fn format_date(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }
    parse_date(date)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d"))
        .ok()
}

/// `Jan 2020 - Jun 2022`, `Jan 2020 - Present`, or just the start when no end is known.
pub fn format_date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let start = format_date(start);
    if current {
        return format!("{start} - Present");
    }
    let end = end.map(format_date).unwrap_or_default();
    if !start.is_empty() && !end.is_empty() {
        return format!("{start} - {end}");
    }
    start
}

/// Splits a comma-separated skills string, dropping blanks.
pub fn split_skills_string(skills: Option<&str>) -> Vec<String> {
    skills
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a free-text description into bullets on newlines and `• ` markers.
pub fn bullet_points(text: Option<&str>) -> Vec<String> {
    text.unwrap_or_default()
        .split('\n')
        .flat_map(|line| line.split("• "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` for missing or blank optional fields.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
