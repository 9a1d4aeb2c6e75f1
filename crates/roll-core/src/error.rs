use thiserror::Error;

#[derive(Debug, Error)]
pub enum RollError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("config error: {message}")]
    Config { message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RollError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
