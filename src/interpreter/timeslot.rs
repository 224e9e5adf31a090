// ==========================================
// Exam Table Engine - Time-Slot Matcher
// ==========================================
// Responsibility: cell text -> canonical "<H>h às <H>h"
// ==========================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "19h às 20h", "08h - 09h", variable internal whitespace
    static ref TIME_SLOT_RE: Regex =
        Regex::new(r"(?i)(\d{1,2})h\s*(?:às|-)\s*(\d{1,2})h").unwrap();
}

/// Match a time-slot range anywhere in the text and re-render it in the
/// canonical "às" form, regardless of the separator the source used.
pub fn match_time_slot(text: &str) -> Option<String> {
    TIME_SLOT_RE
        .captures(text)
        .map(|caps| format!("{}h às {}h", &caps[1], &caps[2]))
}

/// Whether the text contains a time-slot range at all.
pub fn contains_time_slot(text: &str) -> bool {
    TIME_SLOT_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_preserved() {
        assert_eq!(match_time_slot("19h às 20h").as_deref(), Some("19h às 20h"));
        assert_eq!(match_time_slot("08h às 09h").as_deref(), Some("08h às 09h"));
    }

    #[test]
    fn test_hyphen_variant_rerendered() {
        assert_eq!(match_time_slot("19h - 20h").as_deref(), Some("19h às 20h"));
        assert_eq!(match_time_slot("19h-20h").as_deref(), Some("19h às 20h"));
    }

    #[test]
    fn test_case_insensitive_separator() {
        assert_eq!(match_time_slot("19H ÀS 20H").as_deref(), Some("19h às 20h"));
    }

    #[test]
    fn test_embedded_in_longer_text() {
        assert_eq!(
            match_time_slot("Aplicação: 21h às 22h (sala 3)").as_deref(),
            Some("21h às 22h")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(match_time_slot("").is_none());
        assert!(match_time_slot("19:00 às 20:00").is_none());
        assert!(match_time_slot("14275 - ARQUITETURA").is_none());
        assert!(!contains_time_slot("PERÍODO"));
    }
}
