// ==========================================
// Exam Table Engine - Extracted Document Model
// ==========================================
// Responsibility: the shape the extraction collaborator hands over
// Contract: pages -> tables -> rows -> nullable text cells
// ==========================================

use serde::{Deserialize, Serialize};

/// A single table cell: text as extracted, or absent.
///
/// Absent cells are treated as empty strings by the row interpreter.
pub type Cell = Option<String>;

/// One extracted table row, in column order.
pub type Row = Vec<Cell>;

/// One extracted table: ordered rows, no fixed schema.
pub type Table = Vec<Row>;

// ==========================================
// Page - one document page
// ==========================================
// A page carries zero or more tables in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub tables: Vec<Table>,
}

impl Page {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

// ==========================================
// TableDocument - the whole extracted document
// ==========================================
// Produced by a TableSource; consumed read-only by the assembler.
// Serde-derived so the JSON table-dump source decodes it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDocument {
    pub pages: Vec<Page>,
}

impl TableDocument {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|p| p.tables.len()).sum()
    }
}
