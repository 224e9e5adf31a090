// ==========================================
// Exam Table Engine - Interpretation Layer
// ==========================================
// Responsibility: extracted tables in, normalized exam records out
// Stages: source -> layout -> title -> rows (timeslot/period) -> assembly
// ==========================================

// Module declarations
pub mod assembler;
pub mod error;
pub mod layout;
pub mod period;
pub mod row;
pub mod source;
pub mod timeslot;
pub mod title;

// Re-export core types
pub use assembler::ExamAssembler;
pub use error::{InterpretError, InterpretResult};
pub use row::{interpret_row, RowFields, RowOutcome};
pub use source::{
    CsvTableSource, JsonTableSource, TableSource, UniversalTableSource, XlsxTableSource,
};
pub use title::TitleInfo;
