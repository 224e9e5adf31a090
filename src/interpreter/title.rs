// ==========================================
// Exam Table Engine - Title Interpreter
// ==========================================
// Responsibility: title string -> shift / weekday / date
// ==========================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Parenthesized date as printed in titles: "(16/09/2025)"
    static ref TITLE_DATE_RE: Regex = Regex::new(r"\((\d{2}/\d{2}/\d{4})\)").unwrap();
}

/// Recognized weekday markers, in match-priority order, paired with the
/// canonical capitalized form. Weekend names are deliberately absent: the
/// institution never schedules exams on Saturday or Sunday.
const WEEKDAYS: [(&str, &str); 5] = [
    ("TERÇA-FEIRA", "Terça-Feira"),
    ("QUARTA-FEIRA", "Quarta-Feira"),
    ("QUINTA-FEIRA", "Quinta-Feira"),
    ("SEGUNDA-FEIRA", "Segunda-Feira"),
    ("SEXTA-FEIRA", "Sexta-Feira"),
];

// ==========================================
// TitleInfo - parsed table context
// ==========================================
// Absent fields default to empty strings when records are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleInfo {
    pub shift: Option<String>,
    pub day: Option<String>,
    pub date: Option<String>,
}

impl TitleInfo {
    /// Parse a table's joined title text. Pure; no side effects.
    pub fn parse(title: &str) -> Self {
        Self {
            shift: extract_shift(title),
            day: extract_day(title),
            date: extract_date(title),
        }
    }
}

/// Shift marker: "NOTURNO" -> noturno, "MATUTINO" -> matutino.
/// NOTURNO is checked first.
pub fn extract_shift(title: &str) -> Option<String> {
    let upper = title.to_uppercase();
    if upper.contains("NOTURNO") {
        Some("noturno".to_string())
    } else if upper.contains("MATUTINO") {
        Some("matutino".to_string())
    } else {
        None
    }
}

/// Weekday marker: first recognized name wins, canonical form returned.
pub fn extract_day(title: &str) -> Option<String> {
    let upper = title.to_uppercase();
    WEEKDAYS
        .iter()
        .find(|(marker, _)| upper.contains(marker))
        .map(|(_, canonical)| canonical.to_string())
}

/// First parenthesized DD/MM/YYYY substring, without the parentheses.
pub fn extract_date(title: &str) -> Option<String> {
    TITLE_DATE_RE
        .captures(title)
        .map(|caps| caps[1].to_string())
}
