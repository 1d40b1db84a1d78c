// src/summary.rs

use crate::model::{QuizMode, SessionState};
use crate::session::QuizSession;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewKind {
    Bookmarked,
    Incorrect,
}

/// Entrada de la revisión final.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub kind: ReviewKind,
    /// Número "humano" de la pregunta (1, 2, 3…)
    pub number: usize,
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub topic: String,
    pub explanation: String,
}

impl ReviewEntry {
    pub fn study_tip(&self) -> String {
        format!(
            "Review the section on {} in the Minnesota Driver's Manual.",
            self.topic
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub passed: bool,
    pub bookmarked: Vec<ReviewEntry>,
    pub incorrect: Vec<ReviewEntry>,
}

impl QuizSummary {
    /// Revisión en orden de presentación: primero las marcadas, después las falladas.
    pub fn review(&self) -> impl Iterator<Item = &ReviewEntry> {
        self.bookmarked.iter().chain(self.incorrect.iter())
    }
}

pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    }
}

/// Resumen del intento. El umbral de aprobado lo decide quien llama.
pub fn summarize(session: &QuizSession, pass_percentage: f64) -> QuizSummary {
    let score = session.score();
    let total = session.len();
    let percentage = percentage(score, total);

    let bookmarked = session
        .bookmarked()
        .iter()
        .filter_map(|&i| session.questions().get(i).map(|q| (i, q)))
        .map(|(i, q)| ReviewEntry {
            kind: ReviewKind::Bookmarked,
            number: i + 1,
            question: q.text.clone(),
            user_answer: session.response(i).map(str::to_string),
            correct_answer: q.correct_answer.clone(),
            topic: q.topic.clone(),
            explanation: q.explanation.clone(),
        })
        .collect();

    let incorrect = session
        .incorrect()
        .iter()
        .map(|e| ReviewEntry {
            kind: ReviewKind::Incorrect,
            number: e.index + 1,
            question: e.question.clone(),
            user_answer: Some(e.user_answer.clone()),
            correct_answer: e.correct_answer.clone(),
            topic: e.topic.clone(),
            explanation: e.explanation.clone(),
        })
        .collect();

    QuizSummary {
        score,
        total,
        percentage,
        passed: total > 0 && score >= required_to_pass(total, pass_percentage),
        bookmarked,
        incorrect,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStatus {
    Passed,
    OnTrack,
    CannotPass,
}

/// Marcador en vivo durante el quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub score: usize,
    pub total: usize,
    pub required: usize,
    pub percentage: f64,
    pub status: PassStatus,
}

pub fn required_to_pass(total: usize, pass_percentage: f64) -> usize {
    (total as f64 * pass_percentage / 100.0).ceil() as usize
}

pub fn score_board(session: &QuizSession, pass_percentage: f64) -> ScoreBoard {
    let score = session.score();
    let total = session.len();
    let required = required_to_pass(total, pass_percentage);
    let remaining = total.saturating_sub(session.position());

    let status = if total > 0 && score >= required {
        PassStatus::Passed
    } else if score + remaining < required {
        PassStatus::CannotPass
    } else {
        PassStatus::OnTrack
    };

    ScoreBoard {
        score,
        total,
        required,
        percentage: percentage(score, total),
        status,
    }
}

/// Registro de un intento terminado, para el historial.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub mode: QuizMode,
}

impl AttemptRecord {
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        if session.state() != SessionState::Completed {
            return None;
        }
        Some(Self {
            score: session.score(),
            total: session.len(),
            percentage: percentage(session.score(), session.len()),
            mode: session.mode(),
        })
    }
}
