use thiserror::Error;

#[derive(Error, Debug)]
pub enum Fault {
    #[error("Invalid numeric input: {input:?}")]
    Validation { input: String },

    #[error("{message}")]
    Internal { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Fault {
    pub fn validation(input: impl Into<String>) -> Self {
        Fault::Validation {
            input: input.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Fault::Internal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Fault::Config {
            message: message.into(),
        }
    }

    /// 驗證錯誤是 400，其餘都視為內部錯誤
    pub fn status_code(&self) -> u16 {
        match self {
            Fault::Validation { .. } => 400,
            Fault::Internal { .. } | Fault::Serialization(_) | Fault::Config { .. } => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Fault::Validation { input } if input.trim().is_empty() => {
                "No number was supplied".to_string()
            }
            Fault::Validation { input } => format!("'{}' is not a valid number", input),
            Fault::Config { message } => format!("Invalid options: {}", message),
            Fault::Internal { .. } | Fault::Serialization(_) => {
                format!("Unexpected failure: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Fault::Validation { .. } => {
                "Pass an integer such as 153 or a decimal such as 7.5"
            }
            Fault::Config { .. } => {
                "Supply either a NUMBER argument or --query 'number=<value>', not both"
            }
            Fault::Internal { .. } | Fault::Serialization(_) => {
                "Re-run with --verbose and report the logged error"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Fault>;
