// src/report.rs
//
// Avisos de errores en preguntas. La entrega es "dispara y olvida": al usuario
// siempre se le confirma el envío y los fallos solo quedan en el log.

use crate::error::DeliveryError;
use crate::model::Question;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub const SUBMITTED_MESSAGE: &str = "Thank you for your feedback! Your report has been submitted.";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub topic: String,
    pub explanation: String,
    pub message: String,
    pub contact_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ErrorReport {
    pub fn new(question: &Question, message: &str, contact_email: Option<&str>) -> Self {
        Self {
            question: question.text.clone(),
            correct_answer: question.correct_answer.clone(),
            options: question.options.clone(),
            topic: question.topic.clone(),
            explanation: question.explanation.clone(),
            message: message.trim().to_string(),
            contact_email: contact_email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            submitted_at: Utc::now(),
        }
    }

    /// Texto legible del aviso.
    pub fn format(&self) -> String {
        format!(
            "Error Report - Minnesota Driving Quiz\n\
             Time: {time}\n\
             \n\
             Question Information:\n\
             -------------------\n\
             Question: {question}\n\
             Correct Answer: {answer}\n\
             Options: {options}\n\
             Explanation: {explanation}\n\
             Topic: {topic}\n\
             \n\
             User Report:\n\
             -----------\n\
             {message}\n\
             \n\
             User Contact (optional):\n\
             ----------------------\n\
             {contact}\n",
            time = self.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            question = self.question,
            answer = self.correct_answer,
            options = self.options.join(", "),
            explanation = self.explanation,
            topic = self.topic,
            message = self.message,
            contact = self.contact_email.as_deref().unwrap_or("Not provided"),
        )
    }
}

pub trait ReportSink: Send + Sync {
    fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError>;
}

/// Añade cada aviso al final de un fichero de log local.
#[derive(Debug, Clone)]
pub struct LogFileSink {
    path: PathBuf,
}

impl LogFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for LogFileSink {
    fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n{}\n{}", "=".repeat(50), report.format())?;
        Ok(())
    }
}

/// Solo deja constancia en el log (build web).
#[derive(Debug, Clone, Default)]
pub struct LogOnlySink;

impl ReportSink for LogOnlySink {
    fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
        log::info!("error report for {:?}: {}", report.question, report.message);
        Ok(())
    }
}

/// Envía el aviso como JSON a un endpoint HTTP.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct WebhookSink {
    endpoint: String,
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl WebhookSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ReportSink for WebhookSink {
    fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, "DrivingQuiz-Reports/1.0")
            .json(report)
            .send()
            .map_err(|e| DeliveryError::Http(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(DeliveryError::Http(format!("status {}", resp.status())));
        }
        Ok(())
    }
}

/// Prueba cada canal en orden y para en el primero que funciona.
pub struct FallbackSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FallbackSink {
    pub fn new(sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { sinks }
    }
}

impl ReportSink for FallbackSink {
    fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
        let mut last_error = None;
        for sink in &self.sinks {
            match sink.deliver(report) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::warn!("report channel failed, trying next: {e}");
                    last_error = Some(e);
                }
            }
        }
        match last_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Entrega el aviso y devuelve siempre el mensaje de "enviado".
pub fn submit(sink: &dyn ReportSink, report: &ErrorReport) -> &'static str {
    if let Err(e) = sink.deliver(report) {
        log::error!("failed to deliver error report: {e}");
    }
    SUBMITTED_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn question() -> Question {
        Question {
            text: "What does a flashing yellow light mean?".into(),
            options: vec!["Proceed with caution".into(), "Stop".into()],
            correct_answer: "Proceed with caution".into(),
            topic: "Road Signs".into(),
            explanation: "Slow down.".into(),
        }
    }

    struct FailingSink;
    impl ReportSink for FailingSink {
        fn deliver(&self, _report: &ErrorReport) -> Result<(), DeliveryError> {
            Err(DeliveryError::Http("unreachable".into()))
        }
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<String>>);
    impl ReportSink for RecordingSink {
        fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(report.message.clone());
            }
            Ok(())
        }
    }

    #[test]
    fn report_text_includes_question_and_contact() {
        let report = ErrorReport::new(&question(), "  Typo in option  ", Some(" me@example.com "));
        let text = report.format();
        assert!(text.contains("Question: What does a flashing yellow light mean?"));
        assert!(text.contains("Options: Proceed with caution, Stop"));
        assert!(text.contains("Typo in option\n"));
        assert!(text.contains("me@example.com"));
    }

    #[test]
    fn blank_contact_is_not_provided() {
        let report = ErrorReport::new(&question(), "x", Some("   "));
        assert_eq!(report.contact_email, None);
        assert!(report.format().contains("Not provided"));
    }

    #[test]
    fn log_file_sink_appends_reports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("reports.log");
        let sink = LogFileSink::new(&path);
        sink.deliver(&ErrorReport::new(&question(), "first", None)).expect("deliver");
        sink.deliver(&ErrorReport::new(&question(), "second", None)).expect("deliver");
        let log = std::fs::read_to_string(&path).expect("read");
        assert_eq!(log.matches(&"=".repeat(50)).count(), 2);
        assert!(log.find("first") < log.find("second"));
    }

    #[test]
    fn failed_delivery_still_reports_submitted() {
        let report = ErrorReport::new(&question(), "broken", None);
        assert_eq!(submit(&FailingSink, &report), SUBMITTED_MESSAGE);
    }

    #[test]
    fn fallback_uses_next_channel_on_failure() {
        let recording = std::sync::Arc::new(RecordingSink::default());

        struct Shared(std::sync::Arc<RecordingSink>);
        impl ReportSink for Shared {
            fn deliver(&self, report: &ErrorReport) -> Result<(), DeliveryError> {
                self.0.deliver(report)
            }
        }

        let sink = FallbackSink::new(vec![
            Box::new(FailingSink),
            Box::new(Shared(recording.clone())),
        ]);
        sink.deliver(&ErrorReport::new(&question(), "hello", None)).expect("deliver");
        let seen = recording.0.lock().expect("lock").clone();
        assert_eq!(seen, vec!["hello".to_string()]);
    }

    #[test]
    fn fallback_returns_last_error_when_all_fail() {
        let sink = FallbackSink::new(vec![Box::new(FailingSink), Box::new(FailingSink)]);
        assert!(sink.deliver(&ErrorReport::new(&question(), "x", None)).is_err());
    }
}
