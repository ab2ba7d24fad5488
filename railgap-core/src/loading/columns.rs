//! Header resolution for loosely formatted ridership exports.
//!
//! WMATA publishes these datasets with inconsistent column names
//! (`Svc_Date` vs `SERVICE DATE`, `AvgBoardings` vs `avg_daily_boardings`),
//! so columns are resolved against ordered candidate lists instead of
//! deserializing into fixed structs.

use chrono::NaiveDate;
use csv::StringRecord;

/// Find the index of the first candidate present in `headers`.
///
/// Matching is case-insensitive and ignores spaces, hyphens and
/// underscores. When no candidate matches exactly, falls back to a
/// case-insensitive substring search in candidate order.
pub fn resolve_column(headers: &StringRecord, candidates: &[&str]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(normalize).collect();

    for cand in candidates {
        let key = normalize(cand);
        if let Some(idx) = normalized.iter().position(|h| *h == key) {
            return Some(idx);
        }
    }

    for cand in candidates {
        let key = cand.to_lowercase();
        if let Some(idx) = headers
            .iter()
            .position(|h| h.to_lowercase().contains(&key))
        {
            return Some(idx);
        }
    }

    None
}

fn normalize(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse a boardings figure, tolerating thousands separators ("1,234.5").
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

/// Parse a service date in any of the formats seen in WMATA exports.
pub fn parse_service_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cols: &[&str]) -> StringRecord {
        StringRecord::from(cols.to_vec())
    }

    #[test]
    fn resolves_exact_match_ignoring_case_and_separators() {
        let h = headers(&["Svc_Date", "STOP ID", "Avg-Boardings"]);
        assert_eq!(resolve_column(&h, &["svc_date", "date"]), Some(0));
        assert_eq!(resolve_column(&h, &["stop_id", "stop"]), Some(1));
        assert_eq!(resolve_column(&h, &["avg_boardings"]), Some(2));
    }

    #[test]
    fn candidate_order_wins_over_header_order() {
        let h = headers(&["date", "service_date"]);
        assert_eq!(resolve_column(&h, &["service_date", "date"]), Some(1));
    }

    #[test]
    fn falls_back_to_substring_match() {
        let h = headers(&["TOTAL AVG DAILY BOARDINGS 2024"]);
        assert_eq!(resolve_column(&h, &["boardings"]), Some(0));
        assert_eq!(resolve_column(&h, &["stop_id"]), None);
    }

    #[test]
    fn parses_numbers_with_separators() {
        assert_eq!(parse_number("1,234"), Some(1234.0));
        assert_eq!(parse_number(" 56.5 "), Some(56.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
    }

    #[test]
    fn parses_known_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_service_date("2024-03-05"), Some(expected));
        assert_eq!(parse_service_date("03/05/2024"), Some(expected));
        assert_eq!(parse_service_date("20240305"), Some(expected));
        assert_eq!(parse_service_date("March 5"), None);
    }
}
