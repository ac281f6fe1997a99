use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Missing API key: set {env_var} or add it to the secrets store")]
    MissingCredential { env_var: String },

    #[error("Generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown duration: {0} (expected 15s, 30s or 60s)")]
    UnknownDuration(String),

    #[error("Unknown input kind: {0} (expected topic, hook or cta)")]
    UnknownInputKind(String),

    #[error("Input text is empty")]
    EmptyInput,

    #[error("No script has been generated in this session yet")]
    NoScript,

    #[error("Invalid secrets file {path}: {reason}")]
    Secrets { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
