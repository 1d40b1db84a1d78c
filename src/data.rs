// src/data.rs

use crate::error::ValidationError;
use crate::explanation;
use crate::model::Question;
use crate::text::clean_text;
use crate::topics;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Banco embebido, usado cuando la configuración no indica otro fichero.
const EMBEDDED_BANK: &str = include_str!("data/driving_questions.csv");

/// Fila tal cual viene del CSV/JSON, antes de validar.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawRow {
    #[serde(rename = "Question", default)]
    pub question: String,
    #[serde(rename = "Option A", default)]
    pub option_a: String,
    #[serde(rename = "Option B", default)]
    pub option_b: String,
    #[serde(rename = "Option C", default)]
    pub option_c: String,
    #[serde(rename = "Option D", default)]
    pub option_d: String,
    #[serde(rename = "Correct Answer", default)]
    pub correct_answer: String,
}

impl RawRow {
    pub fn new(question: &str, options: [&str; 4], correct_answer: &str) -> Self {
        let [a, b, c, d] = options;
        Self {
            question: question.to_string(),
            option_a: a.to_string(),
            option_b: b.to_string(),
            option_c: c.to_string(),
            option_d: d.to_string(),
            correct_answer: correct_answer.to_string(),
        }
    }
}

/// Valida y limpia una fila. Los pasos van en orden y el primero que falla descarta la fila.
pub fn validate(row: &RawRow) -> Result<Question, ValidationError> {
    let text = clean_text(&row.question);

    // Opciones limpias, sin vacías ni repetidas
    let mut options: Vec<String> = Vec::with_capacity(4);
    for raw in [&row.option_a, &row.option_b, &row.option_c, &row.option_d] {
        let option = clean_text(raw);
        if !option.is_empty() && !options.contains(&option) {
            options.push(option);
        }
    }
    let mut correct_answer = clean_text(&row.correct_answer);

    if text.is_empty() {
        return Err(ValidationError::MissingQuestion);
    }
    if options.len() < 2 {
        return Err(ValidationError::NotEnoughOptions {
            question: text,
            found: options.len(),
        });
    }
    if correct_answer.is_empty() {
        return Err(ValidationError::MissingCorrectAnswer { question: text });
    }

    if !options.contains(&correct_answer) {
        let lowered = correct_answer.to_lowercase();
        match options.iter().find(|o| o.to_lowercase() == lowered) {
            Some(matching) => correct_answer = matching.clone(),
            None => options.push(correct_answer.clone()),
        }
    }

    let topic = topics::categorize(&text).to_string();
    let explanation = explanation::generate(&text, &correct_answer, &topic);

    Ok(Question {
        text,
        options,
        correct_answer,
        topic,
        explanation,
    })
}

/// Pregunta de reserva para no presentar nunca un quiz vacío.
pub fn fallback_question() -> Question {
    Question {
        text: "What is the default speed limit in a residential area?".to_string(),
        options: vec![
            "30 mph".to_string(),
            "25 mph".to_string(),
            "35 mph".to_string(),
            "40 mph".to_string(),
        ],
        correct_answer: "30 mph".to_string(),
        topic: "Speed Limits".to_string(),
        explanation:
            "The default speed limit in a residential area is 30 mph unless otherwise posted."
                .to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Csv,
        }
    }
}

/// Fila descartada: número de fila (1-based, sin cabecera) y motivo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub error: ValidationError,
}

/// Resultado de leer un banco: preguntas válidas y filas descartadas.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<RowError>,
}

impl LoadReport {
    fn push(
        &mut self,
        row: usize,
        result: Result<Question, ValidationError>,
        seen: &mut HashSet<String>,
    ) {
        let outcome = result.and_then(|q| {
            if seen.insert(q.text.to_lowercase()) {
                Ok(q)
            } else {
                Err(ValidationError::Duplicate { question: q.text })
            }
        });
        match outcome {
            Ok(q) => self.questions.push(q),
            Err(error) => {
                log::warn!("skipping question row {row}: {error}");
                self.skipped.push(RowError { row, error });
            }
        }
    }
}

/// Lee filas de un lector. Nunca falla: lo que no se puede leer se descarta y se registra.
pub fn read_rows<R: Read>(reader: R, format: SourceFormat) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    match format {
        SourceFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .flexible(true)
                .from_reader(reader);
            for (i, record) in rdr.deserialize::<RawRow>().enumerate() {
                let result = record
                    .map_err(|e| ValidationError::Malformed(e.to_string()))
                    .and_then(|row| validate(&row));
                report.push(i + 1, result, &mut seen);
            }
        }
        SourceFormat::Json => match serde_json::from_reader::<_, Vec<serde_json::Value>>(reader) {
            Ok(values) => {
                for (i, value) in values.into_iter().enumerate() {
                    let result = serde_json::from_value::<RawRow>(value)
                        .map_err(|e| ValidationError::Malformed(e.to_string()))
                        .and_then(|row| validate(&row));
                    report.push(i + 1, result, &mut seen);
                }
            }
            Err(e) => log::error!("error reading quiz data: {e}"),
        },
    }
    report
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    Embedded,
    File(PathBuf),
}

/// Banco de preguntas. Carga una sola vez y guarda el resultado.
#[derive(Debug)]
pub struct QuestionStore {
    source: QuestionSource,
    questions: Option<Vec<Question>>,
}

impl QuestionStore {
    pub fn new(source: QuestionSource) -> Self {
        Self {
            source,
            questions: None,
        }
    }

    pub fn embedded() -> Self {
        Self::new(QuestionSource::Embedded)
    }

    /// Almacén ya cargado con preguntas dadas (tests y bancos generados).
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            source: QuestionSource::Embedded,
            questions: Some(questions),
        }
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    /// Devuelve el banco, leyéndolo la primera vez. Si no queda ninguna pregunta
    /// válida se sustituye por la pregunta de reserva.
    pub fn load(&mut self) -> &[Question] {
        let source = &self.source;
        self.questions.get_or_insert_with(|| {
            let report = match source {
                QuestionSource::Embedded => read_rows(EMBEDDED_BANK.as_bytes(), SourceFormat::Csv),
                QuestionSource::File(path) => match std::fs::File::open(path) {
                    Ok(file) => read_rows(file, SourceFormat::for_path(path)),
                    Err(e) => {
                        log::error!("error reading quiz data from {}: {e}", path.display());
                        LoadReport::default()
                    }
                },
            };
            log::info!(
                "loaded {} questions ({} rows skipped)",
                report.questions.len(),
                report.skipped.len()
            );
            if report.questions.is_empty() {
                log::error!("no valid questions loaded, using the built-in fallback");
                vec![fallback_question()]
            } else {
                report.questions
            }
        })
    }

    /// Olvida lo cargado; la próxima llamada a `load` vuelve a leer la fuente.
    pub fn invalidate(&mut self) {
        self.questions = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn valid_row_keeps_correct_answer_among_options() {
        let row = RawRow::new("Is X legal?", ["A", "B", "C", ""], "B");
        let q = validate(&row).expect("valid row");
        assert_eq!(q.options, vec!["A", "B", "C"]);
        assert_eq!(q.correct_answer, "B");
        assert!(q.has_option(&q.correct_answer));
        assert_eq!(q.topic, "Rules and Regulations");
    }

    #[test]
    fn fewer_than_two_options_drops_the_row() {
        let row = RawRow::new("Lonely?", ["  only  ", " ", "", ""], "only");
        assert!(matches!(
            validate(&row),
            Err(ValidationError::NotEnoughOptions { found: 1, .. })
        ));
    }

    #[test]
    fn empty_question_and_answer_are_rejected() {
        let row = RawRow::new("   ", ["a", "b", "", ""], "a");
        assert_eq!(validate(&row), Err(ValidationError::MissingQuestion));

        let row = RawRow::new("Q?", ["a", "b", "", ""], " ");
        assert!(matches!(
            validate(&row),
            Err(ValidationError::MissingCorrectAnswer { .. })
        ));
    }

    #[test]
    fn correct_answer_matches_case_insensitively() {
        let row = RawRow::new("Q?", ["Stop", "Go", "", ""], "stop");
        let q = validate(&row).expect("valid row");
        assert_eq!(q.correct_answer, "Stop");
        assert_eq!(q.options.len(), 2);
    }

    #[test]
    fn unknown_correct_answer_is_appended() {
        let row = RawRow::new("Q?", ["a", "b", "c", "d"], "e");
        let q = validate(&row).expect("valid row");
        assert_eq!(q.options, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(q.correct_answer, "e");
    }

    #[test]
    fn question_text_is_normalized_before_storage() {
        let row = RawRow::new("Can\u{2019}t you stop?", ["Yes", "No", "", ""], "No");
        let q = validate(&row).expect("valid row");
        assert_eq!(q.text, "Can't you stop?");
    }

    #[test]
    fn csv_rows_are_validated_and_bad_ones_skipped() {
        let csv = "Question,Option A,Option B,Option C,Option D,Correct Answer\n\
                   Is X legal?,A,B,C,,B\n\
                   ,A,B,C,D,A\n\
                   Only one?,A,,,,A\n\
                   is x legal?,A,B,C,D,C\n\
                   \"When, exactly, must you signal?\",100 feet before,At the turn,Never,,100 feet before\n";
        let report = read_rows(csv.as_bytes(), SourceFormat::Csv);
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[1].text, "When, exactly, must you signal?");
        let reasons: Vec<_> = report.skipped.iter().map(|s| (s.row, s.error.clone())).collect();
        assert_eq!(reasons.len(), 3);
        assert_eq!(reasons[0], (2, ValidationError::MissingQuestion));
        assert!(matches!(reasons[1].1, ValidationError::NotEnoughOptions { .. }));
        assert!(matches!(reasons[2].1, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn json_rows_are_accepted() {
        let json = r#"[
            {"Question": "Is X legal?", "Option A": "A", "Option B": "B", "Correct Answer": "B"},
            {"Question": 42}
        ]"#;
        let report = read_rows(json.as_bytes(), SourceFormat::Json);
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(report.skipped[0].error, ValidationError::Malformed(_)));
    }

    #[test]
    fn missing_file_falls_back_to_builtin_question() {
        let mut store = QuestionStore::new(QuestionSource::File(PathBuf::from(
            "/definitely/not/here/questions.csv",
        )));
        let questions = store.load();
        assert_eq!(questions, &[fallback_question()]);
    }

    #[test]
    fn file_with_only_invalid_rows_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().expect("temp file");
        let header = "Question,Option A,Option B,Option C,Option D,Correct Answer";
        writeln!(file, "{header}").expect("write");
        writeln!(file, "Broken?,A,,,,A").expect("write");
        let mut store = QuestionStore::new(QuestionSource::File(file.path().to_path_buf()));
        assert_eq!(store.load().len(), 1);
        assert_eq!(store.load()[0], fallback_question());
    }

    #[test]
    fn embedded_bank_loads_and_is_cached() {
        let mut store = QuestionStore::embedded();
        let first = store.load().to_vec();
        assert!(first.len() >= 20);
        assert!(first.iter().all(|q| q.has_option(&q.correct_answer)));
        assert_eq!(store.load(), first.as_slice());
    }

    #[test]
    fn source_format_follows_extension() {
        assert_eq!(SourceFormat::for_path(Path::new("bank.JSON")), SourceFormat::Json);
        assert_eq!(SourceFormat::for_path(Path::new("bank.csv")), SourceFormat::Csv);
        assert_eq!(SourceFormat::for_path(Path::new("bank")), SourceFormat::Csv);
    }
}
