mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::SessionState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, history_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL SUPERIOR: dominio del banco y borrar progreso
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Historial de intentos a la derecha, si hay alguno
        if !self.history.is_empty() {
            history_panel(self, ctx);
        }

        // Dispatch por estado de la sesión
        match self.session.state() {
            SessionState::NotStarted => views::welcome::ui_welcome(self, ctx),
            SessionState::InProgress => views::quiz::ui_quiz(self, ctx),
            SessionState::Completed => views::summary::ui_summary_view(self, ctx),
        }

        if self.report.open {
            views::report::ui_report_window(self, ctx);
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.saved_state());
    }
}
