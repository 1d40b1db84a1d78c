// src/view_models.rs

use crate::model::QuizMode;
use crate::options::PresentedOptions;

/// Estado de la pregunta actual después de comprobarla.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Correct,
    Incorrect { user_answer: String },
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub index: usize,       // índice 0-based en la sesión
    pub number: usize,      // número "humano" (1,2,3…)
    pub total: usize,
    pub text: String,
    pub topic: String,
    pub explanation: String,
    pub options: PresentedOptions,
    pub bookmarked: bool,
    pub verdict: Verdict,
}

impl QuestionView {
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// Fracción para la barra de progreso, contando la actual.
    pub fn progress_fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.number as f32 / self.total as f32
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.verdict != Verdict::Pending
    }

    pub fn bookmark_label(&self) -> &'static str {
        if self.bookmarked {
            "🔖 Remove Bookmark"
        } else {
            "📑 Bookmark"
        }
    }
}

#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub number: usize,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub passed: bool,
    pub mode: QuizMode,
}

impl HistoryRow {
    pub fn label(&self) -> String {
        let mode = match self.mode {
            QuizMode::Normal => "",
            QuizMode::Practice => " (practice)",
        };
        let mark = if self.passed { "✅" } else { "❌" };
        format!(
            "#{}{mode}: {}/{} ({:.1}%) {mark}",
            self.number, self.score, self.total, self.percentage
        )
    }
}
