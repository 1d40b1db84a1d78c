use thiserror::Error;

/// Errores de las transiciones de la sesión de quiz.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("not enough questions: requested {requested}, only {available} available")]
    InsufficientQuestions { requested: usize, available: usize },
    #[error("a quiz needs at least one question")]
    EmptyQuiz,
    #[error("no quiz is in progress")]
    NotInProgress,
    #[error("the quiz has not been completed yet")]
    NotCompleted,
    #[error("question {0} does not exist in this session")]
    NoSuchQuestion(usize),
    #[error("question {0} has not been answered yet")]
    Unanswered(usize),
    #[error("there are no bookmarked questions to practice")]
    NoBookmarks,
}

/// Motivo por el que una fila del banco de preguntas se descarta.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing question text")]
    MissingQuestion,
    #[error("not enough valid options ({found}) for question: {question}")]
    NotEnoughOptions { question: String, found: usize },
    #[error("missing correct answer for question: {question}")]
    MissingCorrectAnswer { question: String },
    #[error("duplicate question: {question}")]
    Duplicate { question: String },
    #[error("malformed row: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("progress file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("report log I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report endpoint error: {0}")]
    Http(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
