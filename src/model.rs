use serde::{Deserialize, Serialize};

/// Pregunta ya validada. Se crea una vez al cargar el banco y no cambia.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub topic: String,
    pub explanation: String,
}

impl Question {
    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }
}

/// Respuesta fallada, tal como se muestra en la revisión final.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IncorrectAnswer {
    pub index: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub topic: String,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizMode {
    #[default]
    Normal,
    Practice,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}
