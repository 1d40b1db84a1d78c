// src/session.rs

use crate::error::QuizError;
use crate::model::{IncorrectAnswer, Question, QuizMode, SessionState};
use crate::options::{self, PresentedOptions};
use rand::Rng;
use rand::seq::index;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Resultado de enviar una respuesta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: String },
    /// La pregunta ya tenía respuesta; no cambia nada.
    AlreadyAnswered,
}

/// Cómo se eligen las preguntas al empezar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    pub count: usize,
    pub shuffle: bool,
}

/// Intento de un usuario: NotStarted → InProgress → Completed, con el modo
/// práctica como variante de InProgress limitada a las marcadas.
///
/// La puntuación se consolida al avanzar, de modo que `score <= position`
/// se cumple después de cualquier operación. La navegación es solo hacia
/// delante y cada pregunta admite una única respuesta.
#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    answered: BTreeSet<usize>,
    responses: BTreeMap<usize, String>,
    incorrect: Vec<IncorrectAnswer>,
    bookmarked: BTreeSet<usize>,
    presented: HashMap<usize, PresentedOptions>,
    seed: u64,
    mode: QuizMode,
    state: SessionState,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    // Accesores
    pub fn state(&self) -> SessionState {
        self.state
    }
    pub fn mode(&self) -> QuizMode {
        self.mode
    }
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
    pub fn len(&self) -> usize {
        self.questions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn score(&self) -> usize {
        self.score
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }
    pub fn incorrect(&self) -> &[IncorrectAnswer] {
        &self.incorrect
    }
    pub fn bookmarked(&self) -> &BTreeSet<usize> {
        &self.bookmarked
    }
    pub fn is_bookmarked(&self, index: usize) -> bool {
        self.bookmarked.contains(&index)
    }
    pub fn response(&self, index: usize) -> Option<&str> {
        self.responses.get(&index).map(String::as_str)
    }
    pub fn is_submitted(&self, index: usize) -> bool {
        self.responses.contains_key(&index)
    }

    /// Pregunta actual, si el quiz está en curso.
    pub fn current(&self) -> Option<(usize, &Question)> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.questions.get(self.position).map(|q| (self.position, q))
    }

    /// Empieza un quiz nuevo con `count` preguntas del banco, sin repetir.
    /// Si no hay suficientes, la sesión no cambia.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &[Question],
        options: StartOptions,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if options.count == 0 {
            return Err(QuizError::EmptyQuiz);
        }
        if options.count > bank.len() {
            return Err(QuizError::InsufficientQuestions {
                requested: options.count,
                available: bank.len(),
            });
        }

        let questions = if options.shuffle {
            index::sample(rng, bank.len(), options.count)
                .into_iter()
                .map(|i| bank[i].clone())
                .collect()
        } else {
            bank[..options.count].to_vec()
        };

        self.begin(questions, QuizMode::Normal, rng.next_u64());
        log::info!("quiz started with {} questions", self.questions.len());
        Ok(())
    }

    /// Repite como práctica solo las preguntas marcadas del intento terminado.
    /// Las marcas se borran: sus índices hacen referencia a la lista anterior.
    pub fn start_practice<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), QuizError> {
        if self.state != SessionState::Completed {
            return Err(QuizError::NotCompleted);
        }
        if self.bookmarked.is_empty() {
            return Err(QuizError::NoBookmarks);
        }
        let practice: Vec<Question> = self
            .bookmarked
            .iter()
            .filter_map(|&i| self.questions.get(i).cloned())
            .collect();

        self.begin(practice, QuizMode::Practice, rng.next_u64());
        log::info!("practice started with {} bookmarked questions", self.questions.len());
        Ok(())
    }

    /// Vuelve a NotStarted y descarta todo lo del intento.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn begin(&mut self, questions: Vec<Question>, mode: QuizMode, seed: u64) {
        *self = Self {
            questions,
            seed,
            mode,
            state: SessionState::InProgress,
            ..Self::default()
        };
    }

    /// Opciones barajadas de una pregunta; se calculan la primera vez y se reutilizan.
    pub fn presented_options(&mut self, index: usize) -> Result<&PresentedOptions, QuizError> {
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::NoSuchQuestion(index))?;
        let seed = self.seed;
        Ok(self
            .presented
            .entry(index)
            .or_insert_with(|| options::present(question, seed, index)))
    }

    /// Corrige la respuesta a la pregunta actual. No avanza.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        let index = self.position;
        if self.responses.contains_key(&index) {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }
        let correct_answer = self.presented_options(index)?.correct_answer.clone();
        self.responses.insert(index, selected.to_string());

        if selected == correct_answer {
            self.answered.insert(index);
            return Ok(AnswerOutcome::Correct);
        }

        let question = &self.questions[index];
        if !self.incorrect.iter().any(|e| e.question == question.text) {
            self.incorrect.push(IncorrectAnswer {
                index,
                question: question.text.clone(),
                user_answer: selected.to_string(),
                correct_answer: correct_answer.clone(),
                topic: question.topic.clone(),
                explanation: question.explanation.clone(),
            });
        }
        Ok(AnswerOutcome::Incorrect { correct_answer })
    }

    /// Pasa a la siguiente pregunta. La actual tiene que estar respondida.
    pub fn advance(&mut self) -> Result<SessionState, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        let index = self.position;
        if !self.responses.contains_key(&index) {
            return Err(QuizError::Unanswered(index));
        }
        if self.answered.contains(&index) {
            self.score += 1;
        }
        self.position += 1;
        if self.position == self.questions.len() {
            self.state = SessionState::Completed;
            log::info!("quiz completed: {}/{}", self.score, self.questions.len());
        }
        Ok(self.state)
    }

    /// Marca o desmarca una pregunta. Devuelve si queda marcada.
    pub fn toggle_bookmark(&mut self, index: usize) -> Result<bool, QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::NoSuchQuestion(index));
        }
        if self.bookmarked.remove(&index) {
            Ok(false)
        } else {
            self.bookmarked.insert(index);
            Ok(true)
        }
    }
}
