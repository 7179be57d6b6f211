//! Generative AI adapter.
//!
//! [`BrandStudio`] is the seam between the controller and the provider: four
//! request/response operations that turn a mission, a prompt, or an image into
//! plain values. [`GeminiStudio`] implements it over the Gemini REST API.

mod credentials;
mod gemini;
mod prompts;
mod wire;

pub use credentials::{CredentialProvider, KeyRing};
pub use gemini::{GeminiStudio, StudioSettings};
pub use prompts::{logo_prompt, strategy_instruction, strategy_schema, LOGO_STYLE_SUFFIX};

use crate::errors::StudioResult;
use crate::media::{EmbeddedImage, VideoClip};
use crate::model::BrandStrategy;
use async_trait::async_trait;

#[async_trait]
pub trait BrandStudio: Send + Sync {
    /// Generates name, tagline, palette, typography, and a logo prompt for a mission.
    async fn generate_strategy(&self, mission: &str) -> StudioResult<BrandStrategy>;

    /// Renders a single square logo for the given prompt.
    async fn generate_logo(&self, logo_prompt: &str) -> StudioResult<EmbeddedImage>;

    /// Applies a free-text edit instruction to an image.
    async fn edit_image(
        &self,
        image: &EmbeddedImage,
        instruction: &str,
    ) -> StudioResult<EmbeddedImage>;

    /// Animates an image into a short video. `None` uses the configured motion prompt.
    ///
    /// Fails with [`StudioError::MissingCredential`](crate::errors::StudioError::MissingCredential)
    /// before any request when no key has been selected.
    async fn animate_image(
        &self,
        image: &EmbeddedImage,
        prompt: Option<&str>,
    ) -> StudioResult<VideoClip>;
}
