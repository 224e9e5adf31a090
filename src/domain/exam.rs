// ==========================================
// Exam Table Engine - Exam Domain Model
// ==========================================
// Responsibility: the normalized output entities
// Boundary: constructed by the interpreter, mutated by nobody
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ExamRecord - one scheduled exam
// ==========================================
// Field declaration order fixes the JSON key order:
// day, date, subject, time, grade, cycle, shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    // ===== Table-level context (from the title row) =====
    pub day: String,   // weekday name, e.g. "Terça-Feira", or empty
    pub date: String,  // "DD/MM/YYYY" as printed in the title, or empty
    // ===== Row-level fields =====
    pub subject: String,       // discipline text, may lead with a numeric code
    pub time: String,          // carried slot "<H>h às <H>h", or empty
    pub grade: Option<String>, // filled downstream, never by this engine
    pub cycle: u32,            // academic period, defaults to 1
    pub shift: String,         // "noturno" | "matutino" | empty
}

impl ExamRecord {
    /// Build a record from table-level context and row-level fields.
    ///
    /// `grade` is always absent at creation; a downstream consumer assigns
    /// it once results are published.
    pub fn new(
        day: String,
        date: String,
        subject: String,
        time: String,
        cycle: u32,
        shift: String,
    ) -> Self {
        Self {
            day,
            date,
            subject,
            time,
            grade: None,
            cycle,
            shift,
        }
    }
}

// ==========================================
// ExamReport - success envelope
// ==========================================
// Serializes as {"exams": [ ... ]} on stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamReport {
    pub exams: Vec<ExamRecord>,
}

impl ExamReport {
    pub fn new(exams: Vec<ExamRecord>) -> Self {
        Self { exams }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_serializes_as_null() {
        let record = ExamRecord::new(
            "Terça-Feira".to_string(),
            "16/09/2025".to_string(),
            "14275 - ARQUITETURA E ORGANIZAÇÃO DE COMPUTADORES".to_string(),
            "19h às 20h".to_string(),
            1,
            "noturno".to_string(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"grade\":null"));
    }

    #[test]
    fn test_json_key_order() {
        let record = ExamRecord::new(
            String::new(),
            String::new(),
            "subject".to_string(),
            String::new(),
            1,
            String::new(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let day = json.find("\"day\"").unwrap();
        let date = json.find("\"date\"").unwrap();
        let subject = json.find("\"subject\"").unwrap();
        let time = json.find("\"time\"").unwrap();
        let grade = json.find("\"grade\"").unwrap();
        let cycle = json.find("\"cycle\"").unwrap();
        let shift = json.find("\"shift\"").unwrap();
        assert!(day < date && date < subject && subject < time);
        assert!(time < grade && grade < cycle && cycle < shift);
    }

    #[test]
    fn test_unicode_left_unescaped() {
        let record = ExamRecord::new(
            "Terça-Feira".to_string(),
            String::new(),
            "ORGANIZAÇÃO".to_string(),
            String::new(),
            1,
            String::new(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("Terça-Feira"));
        assert!(json.contains("ORGANIZAÇÃO"));
    }
}
