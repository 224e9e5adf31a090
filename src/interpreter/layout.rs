// ==========================================
// Exam Table Engine - Table Layout Locators
// ==========================================
// Responsibility: find the title row and where data rows begin
// ==========================================

use crate::domain::Table;

/// Markers that identify a column-header row.
const COLUMN_MARKERS: [&str; 4] = ["PERÍODO", "PERIODO", "HORÁRIO", "HORARIO"];

/// Join a row's cells into one text line, absent cells as empty strings.
pub fn join_row_text(row: &[Option<String>]) -> String {
    row.iter()
        .map(|cell| cell.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join only the non-empty trimmed cells: the title string proper.
fn join_title_parts(row: &[Option<String>]) -> String {
    row.iter()
        .filter_map(|cell| cell.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Locate the table's title row: the row whose joined text contains
/// "DISCIPLINAS" and a shift marker. Returns its index and the title
/// string built from its non-empty cells. An index-0 title counts.
pub fn find_title_row(table: &Table) -> Option<(usize, String)> {
    for (idx, row) in table.iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        let row_text = join_row_text(row).to_uppercase();
        if row_text.contains("DISCIPLINAS")
            && (row_text.contains("NOTURNO") || row_text.contains("MATUTINO"))
        {
            return Some((idx, join_title_parts(row)));
        }
    }
    None
}

/// Locate the column-header row within two rows after the title.
///
/// Returns the index of the row after which data begins: the marker row
/// when one is found, otherwise `title_idx + 1` (the row right after the
/// title is presumed to be an unrecognized header row).
pub fn locate_column_header(table: &Table, title_idx: usize) -> usize {
    let lookahead_end = (title_idx + 3).min(table.len());
    for idx in (title_idx + 1)..lookahead_end {
        let row = &table[idx];
        if row.is_empty() {
            continue;
        }
        let row_text = join_row_text(row).to_uppercase();
        if COLUMN_MARKERS.iter().any(|m| row_text.contains(m)) {
            return idx;
        }
    }
    title_idx + 1
}
