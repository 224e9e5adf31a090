// ==========================================
// Exam Table Engine - Exam Assembler
// ==========================================
// Responsibility: drive the pipeline over pages -> tables -> rows
// Flow: extract -> per-table title -> column header -> row fold
// ==========================================

use crate::domain::{ExamRecord, Table, TableDocument};
use crate::interpreter::error::{InterpretError, InterpretResult};
use crate::interpreter::layout::{find_title_row, locate_column_header};
use crate::interpreter::row::interpret_row;
use crate::interpreter::source::{TableSource, UniversalTableSource};
use crate::interpreter::title::TitleInfo;
use std::time::Instant;
use tracing::{debug, info, trace};
use uuid::Uuid;

// ==========================================
// ExamAssembler - pipeline orchestrator
// ==========================================
pub struct ExamAssembler {
    // extraction collaborator (stage 0)
    source: Box<dyn TableSource>,
}

impl Default for ExamAssembler {
    fn default() -> Self {
        Self::new(Box::new(UniversalTableSource))
    }
}

impl ExamAssembler {
    /// Create an assembler around an injected table source.
    pub fn new(source: Box<dyn TableSource>) -> Self {
        Self { source }
    }

    /// Run the whole pipeline: document bytes in, ordered records out.
    ///
    /// Structural failures (unreadable payload, undecodable document)
    /// return `Err`; heuristic misses only shrink the output.
    pub fn run(&self, bytes: &[u8]) -> InterpretResult<Vec<ExamRecord>> {
        let start_time = Instant::now();
        let run_id = Uuid::new_v4().to_string();

        info!(run_id = %run_id, payload_bytes = bytes.len(), "starting exam interpretation");

        if bytes.is_empty() {
            return Err(InterpretError::EmptyInput);
        }

        // === Step 1: extract tables ===
        debug!(run_id = %run_id, "step 1: extract tables");
        let document = self.source.extract_tables(bytes)?;
        debug!(
            run_id = %run_id,
            pages = document.pages.len(),
            tables = document.table_count(),
            "extraction complete"
        );

        // === Step 2: interpret rows ===
        debug!(run_id = %run_id, "step 2: interpret tables");
        let exams = self.interpret_document(&document);

        info!(
            run_id = %run_id,
            pages = document.pages.len(),
            tables = document.table_count(),
            records = exams.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "exam interpretation complete"
        );

        Ok(exams)
    }

    /// Interpret an already-extracted document. Pure heuristic stage;
    /// document order (page, table, row) is preserved in the output.
    pub fn interpret_document(&self, document: &TableDocument) -> Vec<ExamRecord> {
        let mut exams = Vec::new();
        for (page_idx, page) in document.pages.iter().enumerate() {
            for (table_idx, table) in page.tables.iter().enumerate() {
                let records = self.interpret_table(table);
                debug!(
                    page = page_idx,
                    table = table_idx,
                    records = records.len(),
                    "table interpreted"
                );
                exams.extend(records);
            }
        }
        exams
    }

    /// Interpret one table: title context once, then a fold over the data
    /// rows with the carried time state starting unset.
    fn interpret_table(&self, table: &Table) -> Vec<ExamRecord> {
        if table.len() < 2 {
            trace!("table too small, skipped");
            return Vec::new();
        }

        let Some((title_idx, title)) = find_title_row(table) else {
            trace!("no title row, table skipped");
            return Vec::new();
        };

        let info = TitleInfo::parse(&title);
        let header_idx = locate_column_header(table, title_idx);
        trace!(title = %title, title_idx, header_idx, "table context resolved");

        let day = info.day.unwrap_or_default();
        let date = info.date.unwrap_or_default();
        let shift = info.shift.unwrap_or_default();

        // carried time state: reset per table, threaded through the fold
        let mut carry: Option<String> = None;
        let mut records = Vec::new();

        for row in table.iter().skip(header_idx + 1) {
            let outcome = interpret_row(row, carry);
            carry = outcome.carry;
            if let Some(fields) = outcome.record {
                records.push(ExamRecord::new(
                    day.clone(),
                    date.clone(),
                    fields.subject,
                    fields.time,
                    fields.cycle,
                    shift.clone(),
                ));
            }
        }

        records
    }
}
