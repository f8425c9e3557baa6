use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load template details")]
    TemplateUnavailable,

    #[error("Import failed: {0}")]
    ImportFailed(String),
}

pub type Result<T> = std::result::Result<T, ImsError>;
