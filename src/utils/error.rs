use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing field on line {line}: {message}")]
    MissingFieldError { line: u64, message: String },

    #[error("Invalid Id on line {line}: {value}")]
    InvalidIdError { line: u64, value: String },

    #[error("Invalid Score on line {line}: {value}")]
    InvalidScoreError { line: u64, value: String },

    #[error("Could not find file '{path}'")]
    FileNotFoundError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    MissingField,
    InvalidId,
    InvalidScore,
    FileNotFound,
    Unclassified,
}

impl GradeError {
    pub fn config(message: impl Into<String>) -> Self {
        GradeError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GradeError::ConfigError { .. } => ErrorCategory::Config,
            GradeError::MissingFieldError { .. } => ErrorCategory::MissingField,
            GradeError::InvalidIdError { .. } => ErrorCategory::InvalidId,
            GradeError::InvalidScoreError { .. } => ErrorCategory::InvalidScore,
            GradeError::FileNotFoundError { .. } => ErrorCategory::FileNotFound,
            GradeError::IoError(_) | GradeError::CsvError(_) => ErrorCategory::Unclassified,
        }
    }

    /// The single line shown to the operator when a run fails.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Error: Invalid configuration. {}", self),
            ErrorCategory::MissingField => format!("Error: Missing field. {}", self),
            ErrorCategory::InvalidId => format!("Error: Invalid id. {}", self),
            ErrorCategory::InvalidScore => format!("Error: Invalid score. {}", self),
            ErrorCategory::FileNotFound => format!("Error: File not found. {}", self),
            ErrorCategory::Unclassified => format!("An unexpected error occurred: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the --input/--output arguments or the config file",
            ErrorCategory::MissingField => {
                "Each line must contain three fields: Id, FullName, and Score"
            }
            ErrorCategory::InvalidId => "Ids must be whole numbers",
            ErrorCategory::InvalidScore => "Scores must be whole numbers between 0 and 100",
            ErrorCategory::FileNotFound => "Make sure the input file exists and is readable",
            ErrorCategory::Unclassified => "Re-run with --verbose for more detail",
        }
    }

    /// Exit codes follow sysexits.h where one fits.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            ErrorCategory::MissingField | ErrorCategory::InvalidId | ErrorCategory::InvalidScore => {
                65
            }
            ErrorCategory::FileNotFound => 66,
            ErrorCategory::Unclassified => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
