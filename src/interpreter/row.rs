// ==========================================
// Exam Table Engine - Row Interpreter
// ==========================================
// Responsibility: one data row + carried time -> maybe one record
// Flow: normalize -> width guard -> time update -> discipline cascade
//       -> period -> emission guard
// ==========================================

use crate::interpreter::period::extract_period;
use crate::interpreter::timeslot::{contains_time_slot, match_time_slot};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "14275 - ARQUITETURA E ORGANIZAÇÃO DE COMPUTADORES"
    static ref CODE_DASH_TEXT_RE: Regex = Regex::new(r"^\d{5,}\s+[-–]\s*.+").unwrap();
    // "14275 ARQUITETURA ..." (no separator)
    static ref CODE_TEXT_RE: Regex = Regex::new(r"^\d{5,}\s+.+").unwrap();
    // bare leading code
    static ref CODE_RE: Regex = Regex::new(r"^\d{5,}").unwrap();
    // emission guard: any 5+ digit run
    static ref CODE_RUN_RE: Regex = Regex::new(r"\d{5,}").unwrap();
}

// ==========================================
// RowFields - row-level output
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub subject: String,
    pub time: String,
    pub cycle: u32,
}

// ==========================================
// RowOutcome - fold step product
// ==========================================
// Value-in/value-out: the assembler threads `carry` through a table's
// data rows, so the per-table reset is just a fresh `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub carry: Option<String>,
    pub record: Option<RowFields>,
}

impl RowOutcome {
    fn skip(carry: Option<String>) -> Self {
        Self {
            carry,
            record: None,
        }
    }
}

/// Interpret one data row against the carried time state.
pub fn interpret_row(cells: &[Option<String>], carry: Option<String>) -> RowOutcome {
    // Step 1: absent -> empty, trim, drop leading empty cells
    let normalized: Vec<String> = cells
        .iter()
        .map(|cell| cell.as_deref().unwrap_or("").trim().to_string())
        .collect();
    let lead = normalized
        .iter()
        .position(|cell| !cell.is_empty())
        .unwrap_or(normalized.len());
    let row = &normalized[lead..];

    // Step 2: width guard (trailing empties still count, a lone cell is noise)
    if row.len() < 2 {
        return RowOutcome::skip(carry);
    }

    // Step 3: time-section header row (first cell carries the slot)
    if let Some(slot) = match_time_slot(&row[0]) {
        return RowOutcome::skip(Some(slot));
    }

    // Step 4: a slot anywhere else in the row overwrites the carry
    let carry = row
        .iter()
        .find_map(|cell| match_time_slot(cell))
        .or(carry);

    // Step 5: no time ever established for this table -> not a data row yet
    if carry.is_none() {
        return RowOutcome::skip(carry);
    }

    // Step 6: discipline cascade, strict priority, first match wins
    let discipline_idx = select_discipline(row);

    // Step 7: period from any other cell, defaulting to the first cycle
    let cycle = discipline_idx
        .map(|chosen| {
            row.iter()
                .enumerate()
                .filter(|(idx, _)| *idx != chosen)
                .find_map(|(_, cell)| extract_period(cell))
                .unwrap_or(1)
        })
        .unwrap_or(1);

    // Step 8: emission guard (a code run or substantial text)
    let record = discipline_idx
        .map(|idx| row[idx].clone())
        .filter(|subject| CODE_RUN_RE.is_match(subject) || subject.chars().count() > 10)
        .map(|subject| RowFields {
            subject,
            time: carry.clone().unwrap_or_default(),
            cycle,
        });

    RowOutcome { carry, record }
}

/// Ordered discipline-cell selection over the normalized row.
///
/// Each rule is a full pass before the next is tried:
/// a) code + separator + text, b) code + text, c) bare leading code,
/// d) first non-empty cell that is not itself a time slot.
fn select_discipline(row: &[String]) -> Option<usize> {
    if let Some(idx) = row.iter().position(|c| CODE_DASH_TEXT_RE.is_match(c)) {
        return Some(idx);
    }
    if let Some(idx) = row.iter().position(|c| CODE_TEXT_RE.is_match(c)) {
        return Some(idx);
    }
    if let Some(idx) = row.iter().position(|c| CODE_RE.is_match(c)) {
        return Some(idx);
    }
    row.iter()
        .position(|c| !c.is_empty() && !contains_time_slot(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_time_header_row_updates_carry_without_record() {
        let outcome = interpret_row(&cells(&["19h às 20h", "", ""]), None);
        assert_eq!(outcome.carry.as_deref(), Some("19h às 20h"));
        assert!(outcome.record.is_none());
    }

    #[test]
    fn test_discipline_row_uses_carried_time() {
        let outcome = interpret_row(
            &cells(&["14275 - ARQUITETURA E ORGANIZAÇÃO DE COMPUTADORES", "1º"]),
            Some("19h às 20h".to_string()),
        );
        let record = outcome.record.unwrap();
        assert_eq!(
            record.subject,
            "14275 - ARQUITETURA E ORGANIZAÇÃO DE COMPUTADORES"
        );
        assert_eq!(record.time, "19h às 20h");
        assert_eq!(record.cycle, 1);
    }

    #[test]
    fn test_subject_code_is_not_the_cycle() {
        let outcome = interpret_row(
            &cells(&["14275 - ARQUITETURA E ORGANIZAÇÃO", "3°/4°"]),
            Some("21h às 22h".to_string()),
        );
        assert_eq!(outcome.record.unwrap().cycle, 3);
    }

    #[test]
    fn test_cycle_defaults_to_one() {
        let outcome = interpret_row(
            &cells(&["14275 - ARQUITETURA E ORGANIZAÇÃO", ""]),
            Some("19h às 20h".to_string()),
        );
        assert_eq!(outcome.record.unwrap().cycle, 1);
    }

    #[test]
    fn test_no_time_ever_established_skips_row() {
        let outcome = interpret_row(&cells(&["14275 - ARQUITETURA E ORGANIZAÇÃO", "1º"]), None);
        assert!(outcome.record.is_none());
        assert!(outcome.carry.is_none());
    }

    #[test]
    fn test_time_found_mid_row_overwrites_carry() {
        let outcome = interpret_row(
            &cells(&["14275 - ARQUITETURA E ORGANIZAÇÃO", "1º", "21h às 22h"]),
            Some("19h às 20h".to_string()),
        );
        assert_eq!(outcome.carry.as_deref(), Some("21h às 22h"));
        assert_eq!(outcome.record.unwrap().time, "21h às 22h");
    }

    #[test]
    fn test_width_guard_skips_single_cell_row() {
        let outcome = interpret_row(&cells(&["19h às 20h"]), None);
        assert!(outcome.carry.is_none());
        assert!(outcome.record.is_none());
    }

    #[test]
    fn test_leading_empty_cells_dropped() {
        let outcome = interpret_row(
            &[
                None,
                Some("  ".to_string()),
                Some("14275 - ARQUITETURA E ORGANIZAÇÃO".to_string()),
                Some("2º".to_string()),
            ],
            Some("19h às 20h".to_string()),
        );
        let record = outcome.record.unwrap();
        assert_eq!(record.cycle, 2);
    }

    #[test]
    fn test_priority_coded_cell_beats_long_text() {
        let outcome = interpret_row(
            &cells(&["OBSERVAÇÕES GERAIS DA COORDENAÇÃO", "14275 - ARQUITETURA", "1º"]),
            Some("19h às 20h".to_string()),
        );
        assert_eq!(outcome.record.unwrap().subject, "14275 - ARQUITETURA");
    }

    #[test]
    fn test_priority_dash_separated_beats_plain_code_text() {
        let row: Vec<String> = vec![
            "14280 SEM SEPARADOR".to_string(),
            "14275 - COM SEPARADOR".to_string(),
        ];
        assert_eq!(select_discipline(&row), Some(1));
    }

    #[test]
    fn test_bare_code_cell_selected() {
        let outcome = interpret_row(
            &cells(&["14275", "1º"]),
            Some("19h às 20h".to_string()),
        );
        assert_eq!(outcome.record.unwrap().subject, "14275");
    }

    #[test]
    fn test_fallback_skips_time_cells() {
        let row: Vec<String> = vec![
            "19h às 20h".to_string(),
            "AVALIAÇÃO INTEGRADA DO SEMESTRE".to_string(),
        ];
        assert_eq!(select_discipline(&row), Some(1));
    }

    #[test]
    fn test_emission_guard_filters_short_fragments() {
        let outcome = interpret_row(
            &cells(&["sala 12", "bloco B"]),
            Some("19h às 20h".to_string()),
        );
        assert!(outcome.record.is_none());
        // carry survives the filtered row
        assert_eq!(outcome.carry.as_deref(), Some("19h às 20h"));
    }

    #[test]
    fn test_emission_guard_counts_chars_not_bytes() {
        // 11 accented chars, more than 10 even though the fragment is short
        let outcome = interpret_row(
            &cells(&["AVALIAÇÕES!", "sala"]),
            Some("19h às 20h".to_string()),
        );
        assert!(outcome.record.is_some());
    }

    #[test]
    fn test_en_dash_separator_accepted() {
        let outcome = interpret_row(
            &cells(&["14275 – ARQUITETURA E ORGANIZAÇÃO", "1º"]),
            Some("19h às 20h".to_string()),
        );
        assert!(outcome.record.is_some());
    }
}
