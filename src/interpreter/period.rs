// ==========================================
// Exam Table Engine - Period Extractor
// ==========================================
// Responsibility: cell text -> academic period number
// ==========================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUN_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// First run of decimal digits anywhere in the text, parsed as an integer.
///
/// Handles the markers the schedules actually print: "1º", "2º", "3°/4°"
/// (the first period of a combined marker wins). No upper-bound check; a
/// run too long for u32 counts as not found.
pub fn extract_period(text: &str) -> Option<u32> {
    DIGIT_RUN_RE
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_markers() {
        assert_eq!(extract_period("1º"), Some(1));
        assert_eq!(extract_period("  2º  "), Some(2));
        assert_eq!(extract_period("10°"), Some(10));
    }

    #[test]
    fn test_combined_marker_takes_first() {
        assert_eq!(extract_period("3°/4°"), Some(3));
        assert_eq!(extract_period("5º/6º"), Some(5));
    }

    #[test]
    fn test_digits_embedded_in_text() {
        assert_eq!(extract_period("Período 7"), Some(7));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_period(""), None);
        assert_eq!(extract_period("PERÍODO"), None);
    }

    #[test]
    fn test_oversized_run_is_not_found() {
        assert_eq!(extract_period("99999999999999999999"), None);
    }
}
