// ==========================================
// Exam Table Engine - Interpreter Error Types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Interpreter error taxonomy.
///
/// Only structural failures live here; heuristic misses (no title row, no
/// time slot, no qualifying discipline cell) are `Option`-level skips and
/// never surface as errors.
#[derive(Error, Debug)]
pub enum InterpretError {
    // ===== Input errors =====
    #[error("empty document payload")]
    EmptyInput,

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("input read failed: {0}")]
    InputRead(String),

    // ===== Extraction source errors =====
    #[error("table dump decode failed: {0}")]
    JsonParse(String),

    #[error("workbook parse failed: {0}")]
    WorkbookParse(String),

    #[error("csv parse failed: {0}")]
    CsvParse(String),

    // ===== Generic errors =====
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for InterpretError {
    fn from(err: std::io::Error) -> Self {
        InterpretError::InputRead(err.to_string())
    }
}

impl From<serde_json::Error> for InterpretError {
    fn from(err: serde_json::Error) -> Self {
        InterpretError::JsonParse(err.to_string())
    }
}

impl From<csv::Error> for InterpretError {
    fn from(err: csv::Error) -> Self {
        InterpretError::CsvParse(err.to_string())
    }
}

impl From<calamine::XlsxError> for InterpretError {
    fn from(err: calamine::XlsxError) -> Self {
        InterpretError::WorkbookParse(err.to_string())
    }
}

/// Result type alias
pub type InterpretResult<T> = Result<T, InterpretError>;
