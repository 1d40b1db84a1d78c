use super::*;
use crate::model::Question;

impl QuizApp {
    pub fn bank_size(&mut self) -> usize {
        self.store.load().len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current().map(|(_, q)| q)
    }

    /// Preguntas dominadas sobre el total del banco.
    pub fn mastery(&mut self) -> (usize, usize) {
        let total = self.bank_size();
        let mastered = self
            .store
            .load()
            .iter()
            .filter(|q| self.progress.correct_questions.contains(&q.text))
            .count();
        (mastered, total)
    }

    pub fn can_practice(&self) -> bool {
        self.session.state() == crate::model::SessionState::Completed
            && !self.session.bookmarked().is_empty()
    }
}
