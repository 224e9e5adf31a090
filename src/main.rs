// ==========================================
// Exam Table Engine - CLI Entry Point
// ==========================================
// Contract: document bytes on stdin, JSON on stdout
// Failure: {"error": "..."} on stderr + non-zero exit
// ==========================================

use exam_table_engine::{ExamAssembler, ExamReport, InterpretError};
use serde::Serialize;
use std::io::{self, Read};

// Failure envelope for the error channel.
#[derive(Serialize)]
struct ErrorReport {
    error: String,
}

fn main() {
    exam_table_engine::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", exam_table_engine::APP_NAME, exam_table_engine::VERSION);
    tracing::info!("==================================================");

    let mut payload = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut payload) {
        fail(InterpretError::from(err));
    }

    if payload.is_empty() {
        fail(InterpretError::EmptyInput);
    }

    let assembler = ExamAssembler::default();
    match assembler.run(&payload) {
        Ok(exams) => {
            let report = ExamReport::new(exams);
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(err) => fail(InterpretError::from(err)),
            }
        }
        Err(err) => fail(err),
    }
}

/// Render the failure payload on stderr and terminate non-zero.
///
/// The message carries the whole cause chain, one "caused by:" line per
/// source, so downstream callers get the full diagnostic in one field.
fn fail(err: InterpretError) -> ! {
    tracing::error!(error = %err, "exam interpretation failed");

    let report = ErrorReport {
        error: error_detail(&err),
    };
    let json = serde_json::to_string(&report)
        .unwrap_or_else(|_| r#"{"error":"failed to serialize error payload"}"#.to_string());
    eprintln!("{}", json);

    std::process::exit(1);
}

fn error_detail(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str("\ncaused by: ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
