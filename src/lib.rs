pub mod app;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod logging;
pub mod media;
pub mod model;
pub mod studio;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppState, Screen, ViewState};
pub use config::AppConfig;
pub use errors::{StudioError, StudioResult};
pub use model::{BrandIdentity, BrandStrategy};
pub use studio::{BrandStudio, GeminiStudio, KeyRing};
