use super::*;

impl QuizApp {
    /// Apunta el resultado de una pregunta y lo guarda en el acto.
    pub fn record_result(&mut self, question: &str, correct: bool) {
        self.progress.record(question, correct);
        self.save_progress();
    }

    /// Guarda el progreso. Un fallo no corta el quiz, solo se avisa en el log.
    pub fn save_progress(&mut self) {
        if let Err(e) = self.progress_store.save(&self.progress) {
            log::error!("could not save progress: {e}");
        }
    }

    pub fn saved_state(&self) -> SavedState {
        SavedState {
            progress: self.progress.clone(),
            history: self.history.clone(),
        }
    }
}
