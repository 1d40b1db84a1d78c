use super::*;
use crate::error::QuizError;
use crate::model::SessionState;
use crate::session::{AnswerOutcome, StartOptions};

impl QuizApp {
    /// Empieza un quiz nuevo con las preguntas que marca la configuración.
    /// El progreso guardado se vuelve a leer al empezar.
    pub fn start_quiz(&mut self) {
        self.progress = progress::load_or_default(self.progress_store.as_ref());
        let options = StartOptions {
            count: self.config.question_count,
            shuffle: self.config.shuffle_questions,
        };
        let bank = self.store.load();
        match self.session.start(bank, options, &mut self.rng) {
            Ok(()) => {
                self.selected = None;
                self.report = ReportDraft::default();
                self.message.clear();
                self.notice.clear();
            }
            Err(e @ QuizError::InsufficientQuestions { .. }) => {
                log::warn!("cannot start quiz: {e}");
                self.message = format!("⚠ Cannot start the quiz: {e}.");
            }
            Err(e) => {
                log::warn!("cannot start quiz: {e}");
                self.message = format!("⚠ {e}.");
            }
        }
    }

    /// Comprueba la opción marcada. No avanza: eso lo hace `next_question`.
    pub fn submit_selected(&mut self) {
        let Some(selected) = self.selected.clone() else {
            self.message = "⚠ Select an answer before checking.".into();
            return;
        };
        let Some((index, question)) = self.session.current() else {
            return;
        };
        let text = question.text.clone();

        match self.session.submit_answer(&selected) {
            Ok(AnswerOutcome::Correct) => {
                self.message = "✅ Correct!".into();
                self.record_result(&text, true);
            }
            Ok(AnswerOutcome::Incorrect { correct_answer }) => {
                self.message = format!("❌ Incorrect! The correct answer is: {correct_answer}");
                self.record_result(&text, false);
            }
            Ok(AnswerOutcome::AlreadyAnswered) => {
                log::debug!("question {index} already answered, ignoring");
            }
            Err(e) => log::warn!("submit ignored: {e}"),
        }
    }

    pub fn next_question(&mut self) {
        match self.session.advance() {
            Ok(SessionState::Completed) => {
                self.selected = None;
                self.message.clear();
                self.finish_attempt();
            }
            Ok(_) => {
                self.selected = None;
                self.message.clear();
                self.notice.clear();
                self.report = ReportDraft::default();
            }
            Err(QuizError::Unanswered(_)) => {
                self.message = "⚠ Check your answer before moving on.".into();
            }
            Err(e) => log::warn!("advance ignored: {e}"),
        }
    }

    /// Marca o desmarca la pregunta actual.
    pub fn toggle_bookmark_current(&mut self) {
        let Some((index, _)) = self.session.current() else {
            return;
        };
        self.toggle_bookmark(index);
    }

    pub fn toggle_bookmark(&mut self, index: usize) {
        match self.session.toggle_bookmark(index) {
            Ok(true) => log::debug!("bookmarked question {index}"),
            Ok(false) => log::debug!("removed bookmark from question {index}"),
            Err(e) => log::warn!("bookmark ignored: {e}"),
        }
    }

    /// Repite solo las marcadas del intento que acaba de terminar.
    pub fn practice_bookmarked(&mut self) {
        match self.session.start_practice(&mut self.rng) {
            Ok(()) => {
                self.selected = None;
                self.message.clear();
            }
            Err(e) => {
                self.message = format!("⚠ {e}.");
            }
        }
    }

    /// Vuelve a la pantalla de inicio descartando el intento actual.
    pub fn back_to_start(&mut self) {
        self.session.reset();
        self.selected = None;
        self.report = ReportDraft::default();
        self.message.clear();
        self.notice.clear();
    }

    fn finish_attempt(&mut self) {
        if let Some(record) = AttemptRecord::from_session(&self.session) {
            self.history.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuizMode};

    fn question(i: usize) -> Question {
        Question {
            text: format!("Is rule {i} legal?"),
            options: vec!["Yes".into(), "No".into(), "Maybe".into()],
            correct_answer: "Yes".into(),
            topic: "Rules and Regulations".into(),
            explanation: "Because.".into(),
        }
    }

    fn app(bank: usize, count: usize) -> QuizApp {
        let config = QuizConfig {
            question_count: count,
            ..QuizConfig::default()
        };
        let store = QuestionStore::from_questions((0..bank).map(question).collect());
        QuizApp::in_memory(config, store, 21)
    }

    #[test]
    fn start_with_small_bank_shows_blocking_message() {
        let mut app = app(3, 5);
        app.start_quiz();
        assert_eq!(app.session.state(), SessionState::NotStarted);
        assert!(app.message.contains("requested 5"));
    }

    #[test]
    fn full_attempt_updates_progress_and_history() {
        let mut app = app(4, 2);
        app.start_quiz();
        assert_eq!(app.session.state(), SessionState::InProgress);

        app.selected = Some("Yes".into());
        app.submit_selected();
        assert!(app.message.starts_with("✅"));
        app.next_question();

        app.selected = Some("No".into());
        app.submit_selected();
        assert!(app.message.contains("The correct answer is: Yes"));
        app.next_question();

        assert_eq!(app.session.state(), SessionState::Completed);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].score, 1);
        assert_eq!(app.progress.correct_questions.len(), 1);
        assert_eq!(app.progress.incorrect_questions.len(), 1);
    }

    #[test]
    fn start_reads_progress_saved_since_launch() {
        let mut app = app(2, 1);
        let mut saved = ProgressRecord::default();
        saved.record("Is rule 0 legal?", true);
        app.progress_store.save(&saved).expect("save");

        app.start_quiz();
        assert_eq!(app.progress, saved);
        assert_eq!(app.mastery(), (1, 2));
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut app = app(2, 1);
        app.start_quiz();
        app.submit_selected();
        assert!(app.message.contains("Select an answer"));
        assert!(!app.session.is_submitted(0));
    }

    #[test]
    fn next_without_answer_keeps_position() {
        let mut app = app(2, 2);
        app.start_quiz();
        app.next_question();
        assert_eq!(app.session.position(), 0);
        assert!(app.message.contains("Check your answer"));
    }

    #[test]
    fn practice_after_completion_uses_bookmarks() {
        let mut app = app(3, 3);
        app.start_quiz();
        for _ in 0..3 {
            app.toggle_bookmark_current();
            app.selected = Some("No".into());
            app.submit_selected();
            app.next_question();
        }
        app.practice_bookmarked();
        assert_eq!(app.session.mode(), QuizMode::Practice);
        assert_eq!(app.session.len(), 3);
    }

    #[test]
    fn back_to_start_resets_session() {
        let mut app = app(2, 2);
        app.start_quiz();
        app.back_to_start();
        assert_eq!(app.session.state(), SessionState::NotStarted);
    }
}
