use super::*;

impl QuizApp {
    /// Borra el progreso guardado y el historial, y vuelve al inicio.
    pub fn reset_progress(&mut self) {
        self.progress = ProgressRecord::default();
        self.history.clear();
        self.save_progress();
        self.back_to_start();
        self.confirm_reset = false;
        log::info!("progress and history cleared");
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Delete all saved progress and quiz history? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuizMode, SessionState};

    #[test]
    fn reset_clears_progress_history_and_session() {
        let store = QuestionStore::from_questions(vec![]);
        let mut app = QuizApp::in_memory(QuizConfig::default(), store, 9);
        app.record_result("Q", true);
        app.history.push(AttemptRecord {
            score: 1,
            total: 1,
            percentage: 100.0,
            mode: QuizMode::Normal,
        });
        app.confirm_reset = true;

        app.reset_progress();

        assert_eq!(app.progress, ProgressRecord::default());
        assert!(app.history.is_empty());
        assert!(!app.confirm_reset);
        assert_eq!(app.session.state(), SessionState::NotStarted);
        let stored = progress::load_or_default(app.progress_store.as_ref());
        assert_eq!(stored, ProgressRecord::default());
    }
}
