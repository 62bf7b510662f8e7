use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyLabelError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Parse Error (line {line}): {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type KlResult<T> = Result<T, KeyLabelError>;
