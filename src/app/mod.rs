use crate::config::QuizConfig;
use crate::data::QuestionStore;
use crate::progress::{self, MemoryStore, ProgressRecord, ProgressStore};
use crate::report::{LogOnlySink, ReportSink};
use crate::session::QuizSession;
use crate::summary::AttemptRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod progress_sync;
pub mod queries;
pub mod reports;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{HistoryRow, QuestionView, Verdict};

/// Borrador de la ventana "Report an issue".
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub open: bool,
    /// Pregunta de la sesión a la que se refiere el aviso
    pub question_index: Option<usize>,
    pub message: String,
    pub contact_email: String,
}

/// Lo que se guarda en el almacenamiento de eframe entre ejecuciones.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SavedState {
    #[serde(default)]
    pub progress: ProgressRecord,
    #[serde(default)]
    pub history: Vec<AttemptRecord>,
}

pub struct QuizApp {
    pub config: QuizConfig,
    pub store: QuestionStore,
    pub session: QuizSession,
    pub progress: ProgressRecord,
    pub history: Vec<AttemptRecord>,
    pub message: String,
    /// Confirmación o aviso del formulario de errores, aparte del veredicto
    pub notice: String,
    /// Opción marcada en la pregunta actual, antes de comprobarla
    pub selected: Option<String>,
    pub report: ReportDraft,
    pub confirm_reset: bool,
    progress_store: Box<dyn ProgressStore>,
    report_sink: Arc<dyn ReportSink>,
    rng: StdRng,
}

impl QuizApp {
    /// Monta la app a partir de sus piezas. El banco se carga aquí, una sola vez.
    pub fn with_parts(
        config: QuizConfig,
        store: QuestionStore,
        progress_store: Box<dyn ProgressStore>,
        report_sink: Arc<dyn ReportSink>,
        rng: StdRng,
    ) -> Self {
        let progress = progress::load_or_default(progress_store.as_ref());
        let mut app = Self {
            config,
            store,
            session: QuizSession::new(),
            progress,
            history: Vec::new(),
            message: String::new(),
            notice: String::new(),
            selected: None,
            report: ReportDraft::default(),
            confirm_reset: false,
            progress_store,
            report_sink,
            rng,
        };
        app.store.load();
        app
    }

    /// App de escritorio: progreso en JSON y avisos al log local (y webhook si hay).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: QuizConfig) -> Self {
        use crate::data::QuestionSource;
        use crate::progress::JsonFileStore;
        use crate::report::{FallbackSink, LogFileSink, WebhookSink};

        let source = match &config.question_source {
            Some(path) => QuestionSource::File(path.clone()),
            None => QuestionSource::Embedded,
        };
        let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();
        if let Some(url) = &config.report_webhook {
            sinks.push(Box::new(WebhookSink::new(url.clone())));
        }
        sinks.push(Box::new(LogFileSink::new(config.report_log_path.clone())));

        let progress_store = Box::new(JsonFileStore::new(config.progress_path.clone()));
        Self::with_parts(
            config,
            QuestionStore::new(source),
            progress_store,
            Arc::new(FallbackSink::new(sinks)),
            StdRng::from_entropy(),
        )
    }

    /// App web: banco embebido, progreso en memoria volcado por eframe.
    #[cfg(target_arch = "wasm32")]
    pub fn new(config: QuizConfig) -> Self {
        Self::with_parts(
            config,
            QuestionStore::embedded(),
            Box::new(MemoryStore::default()),
            Arc::new(LogOnlySink),
            StdRng::from_entropy(),
        )
    }

    /// Restaura el estado guardado por eframe (historial y, en web, el progreso).
    pub fn restore(cc: &eframe::CreationContext<'_>, config: QuizConfig) -> Self {
        let mut app = Self::new(config);
        if let Some(saved) = cc
            .storage
            .and_then(|s| eframe::get_value::<SavedState>(s, eframe::APP_KEY))
        {
            app.history = saved.history;
            if cfg!(target_arch = "wasm32") {
                app.progress_store = Box::new(MemoryStore::new(saved.progress.clone()));
                app.progress = saved.progress;
            }
        }
        app
    }

    /// App sin efectos externos: banco dado, progreso en memoria, avisos al log.
    pub fn in_memory(config: QuizConfig, store: QuestionStore, seed: u64) -> Self {
        Self::with_parts(
            config,
            store,
            Box::new(MemoryStore::default()),
            Arc::new(LogOnlySink),
            StdRng::seed_from_u64(seed),
        )
    }
}
