use thiserror::Error;

pub const CONNECTION_ERROR: &str = "Connection error. Please check if the server is running.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Application(String),

    #[error("{}", CONNECTION_ERROR)]
    Transport { detail: String },
}

impl PanelError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(detail: impl ToString) -> Self {
        Self::Transport {
            detail: detail.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Application(_) => "application",
            Self::Transport { .. } => "transport",
        }
    }
}
