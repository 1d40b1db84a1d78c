use super::*;
use crate::report::{self, ErrorReport};

impl QuizApp {
    /// Abre la ventana de aviso para una pregunta de la sesión.
    pub fn open_report(&mut self, index: usize) {
        self.report = ReportDraft {
            open: true,
            question_index: Some(index),
            ..ReportDraft::default()
        };
    }

    pub fn close_report(&mut self) {
        self.report = ReportDraft::default();
    }

    /// Construye el aviso a partir del borrador, si hay pregunta y mensaje.
    pub fn build_report(&self) -> Option<ErrorReport> {
        let index = self.report.question_index?;
        let question = self.session.questions().get(index)?;
        if self.report.message.trim().is_empty() {
            return None;
        }
        Some(ErrorReport::new(
            question,
            &self.report.message,
            Some(self.report.contact_email.as_str()),
        ))
    }

    /// Envía el aviso sin bloquear la interfaz. Al usuario siempre se le confirma.
    pub fn send_report(&mut self) {
        let Some(built) = self.build_report() else {
            self.notice = "⚠ Please describe the issue before submitting.".into();
            return;
        };
        log::info!("submitting error report for {:?}", built.question);

        let sink = Arc::clone(&self.report_sink);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            report::submit(sink.as_ref(), &built);
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            report::submit(sink.as_ref(), &built);
        });

        self.notice = report::SUBMITTED_MESSAGE.to_string();
        self.close_report();
    }
}
