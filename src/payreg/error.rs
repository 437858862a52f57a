use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corrupt record in {table} at line {line}: {message}")]
    Corrupt {
        table: &'static str,
        line: u64,
        message: String,
    },
}

impl RegisterError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        RegisterError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegisterError>;
