// ==========================================
// Exam Table Engine - Core Library
// ==========================================
// Stack: Rust + serde + calamine/csv + regex + tracing
// Positioning: heuristic interpreter for scanned exam-schedule tables
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities
pub mod domain;

// Interpretation layer - extraction sources + heuristics + assembly
pub mod interpreter;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain entities
pub use domain::{Cell, ExamRecord, ExamReport, Page, Row, Table, TableDocument};

// Interpretation pipeline
pub use interpreter::{
    CsvTableSource, ExamAssembler, InterpretError, InterpretResult, JsonTableSource, TableSource,
    TitleInfo, UniversalTableSource, XlsxTableSource,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Tool name
pub const APP_NAME: &str = "exam-table-engine";

// ==========================================
// Compile-time smoke checks
// ==========================================
