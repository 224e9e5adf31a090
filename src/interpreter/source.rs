// ==========================================
// Exam Table Engine - Table Source Implementations
// ==========================================
// Responsibility: document bytes -> TableDocument
// Supported: JSON table dump / XLSX / CSV
// ==========================================
// The PDF-to-table step itself is an external collaborator; this seam
// consumes its serialized output (the JSON dump) or native tabular formats.
// ==========================================

use crate::domain::{Page, TableDocument};
use crate::interpreter::error::{InterpretError, InterpretResult};
use calamine::{Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::io::Cursor;

// ==========================================
// TableSource Trait
// ==========================================
// Purpose: the extraction collaborator's contract (stage 0)
// Implementors: JsonTableSource, XlsxTableSource, CsvTableSource,
//               UniversalTableSource
pub trait TableSource: Send + Sync {
    /// Extract the page/table/row/cell structure from raw document bytes.
    fn extract_tables(&self, bytes: &[u8]) -> InterpretResult<TableDocument>;
}

// ==========================================
// JsonTableSource - upstream extractor dump
// ==========================================
// Decodes the structure the out-of-process PDF extractor serializes:
// {"pages": [{"tables": [[[cell, ...], ...], ...]}, ...]}
pub struct JsonTableSource;

impl TableSource for JsonTableSource {
    fn extract_tables(&self, bytes: &[u8]) -> InterpretResult<TableDocument> {
        let document: TableDocument = serde_json::from_slice(bytes)?;
        Ok(document)
    }
}

// ==========================================
// XlsxTableSource - workbook schedules
// ==========================================
// Each worksheet becomes one page carrying a single table.
pub struct XlsxTableSource;

impl TableSource for XlsxTableSource {
    fn extract_tables(&self, bytes: &[u8]) -> InterpretResult<TableDocument> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names().to_owned();
        if sheet_names.is_empty() {
            return Err(InterpretError::WorkbookParse(
                "workbook has no worksheets".to_string(),
            ));
        }

        let mut pages = Vec::new();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;

            let table: Vec<Vec<Option<String>>> = range
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Data::Empty => None,
                            other => Some(other.to_string()),
                        })
                        .collect()
                })
                .collect();

            // Worksheets with no cells contribute an empty page
            let tables = if table.is_empty() { vec![] } else { vec![table] };
            pages.push(Page::new(tables));
        }

        Ok(TableDocument::new(pages))
    }
}

// ==========================================
// CsvTableSource - flat single-table exports
// ==========================================
// Headerless: the schedule tables carry no fixed schema, so every CSV
// record is a data row of one table on one page.
pub struct CsvTableSource;

impl TableSource for CsvTableSource {
    fn extract_tables(&self, bytes: &[u8]) -> InterpretResult<TableDocument> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // row widths vary in scanned-table exports
            .from_reader(bytes);

        let mut table = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<Option<String>> =
                record.iter().map(|field| Some(field.to_string())).collect();
            table.push(row);
        }

        let tables = if table.is_empty() { vec![] } else { vec![table] };
        Ok(TableDocument::new(vec![Page::new(tables)]))
    }
}

// ==========================================
// UniversalTableSource - content-sniffing dispatch
// ==========================================
// Stdin carries no file extension, so the format is decided from the
// payload itself: ZIP magic -> XLSX, '{'/'[' -> JSON dump, '%PDF' ->
// unsupported (the extraction collaborator runs out of process), else CSV.
pub struct UniversalTableSource;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const PDF_MAGIC: &[u8] = b"%PDF";

impl TableSource for UniversalTableSource {
    fn extract_tables(&self, bytes: &[u8]) -> InterpretResult<TableDocument> {
        if bytes.starts_with(ZIP_MAGIC) {
            return XlsxTableSource.extract_tables(bytes);
        }
        if bytes.starts_with(PDF_MAGIC) {
            return Err(InterpretError::UnsupportedFormat(
                "pdf (supply the extractor's table dump instead)".to_string(),
            ));
        }

        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') | Some(b'[') => JsonTableSource.extract_tables(bytes),
            _ => CsvTableSource.extract_tables(bytes),
        }
    }
}
