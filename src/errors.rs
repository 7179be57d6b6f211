use thiserror::Error;

/// Failures of the generative AI adapter.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Could not generate the brand strategy: {0}")]
    StrategyGenerationFailed(String),

    #[error("Logo generation failed: {0}")]
    ImageGenerationFailed(String),

    #[error("Could not edit the image: {0}")]
    ImageEditFailed(String),

    #[error("Video generation failed: {0}")]
    VideoGenerationFailed(String),

    #[error("No API key selected for video generation")]
    MissingCredential,

    #[error("No API key configured (set GEMINI_API_KEY or api_key in the config file)")]
    NoApiKey,

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StudioError {
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, StudioError::MissingCredential)
    }
}

pub type StudioResult<T> = Result<T, StudioError>;

/// Failures writing the exported brand file.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization/Deserialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
