// src/progress.rs

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Progreso guardado entre sesiones, identificado por el texto de la pregunta.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    #[serde(default)]
    pub correct_questions: BTreeSet<String>,
    #[serde(default)]
    pub incorrect_questions: BTreeSet<String>,
}

impl ProgressRecord {
    /// Apunta el último resultado de una pregunta; el más reciente manda.
    pub fn record(&mut self, question: &str, correct: bool) {
        if correct {
            self.incorrect_questions.remove(question);
            self.correct_questions.insert(question.to_string());
        } else {
            self.correct_questions.remove(question);
            self.incorrect_questions.insert(question.to_string());
        }
    }

    /// Preguntas dominadas: las que se acertaron la última vez.
    pub fn mastered(&self) -> usize {
        self.correct_questions.len()
    }
}

pub trait ProgressStore {
    fn load(&self) -> Result<ProgressRecord, PersistenceError>;
    fn save(&mut self, record: &ProgressRecord) -> Result<(), PersistenceError>;
}

/// Carga el progreso; si falta o está corrupto se empieza de cero.
pub fn load_or_default(store: &dyn ProgressStore) -> ProgressRecord {
    store.load().unwrap_or_else(|e| {
        log::warn!("could not read saved progress, starting fresh: {e}");
        ProgressRecord::default()
    })
}

/// Progreso en un fichero JSON (escritorio).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<ProgressRecord, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ProgressRecord::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Progreso solo en memoria (web, tests). En web lo vuelca eframe al guardar.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: ProgressRecord,
}

impl MemoryStore {
    pub fn new(record: ProgressRecord) -> Self {
        Self { record }
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<ProgressRecord, PersistenceError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), PersistenceError> {
        self.record = record.clone();
        Ok(())
    }
}
