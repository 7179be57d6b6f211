#![allow(dead_code)]

use async_trait::async_trait;
use brand_genesis::actions::{apply_job_event, execute_action, Action};
use brand_genesis::app::AppState;
use brand_genesis::config::AppConfig;
use brand_genesis::errors::{StudioError, StudioResult};
use brand_genesis::jobs::{run_job, Job, JobEvent};
use brand_genesis::media::{EmbeddedImage, VideoClip};
use brand_genesis::model::{BrandStrategy, ColorSwatch, FontPairing};
use brand_genesis::studio::{BrandStudio, CredentialProvider, KeyRing};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory studio with switchable failures and call counters.
pub struct MockStudio {
    pub keyring: Arc<KeyRing>,
    pub fail_strategy: bool,
    pub fail_edit: bool,
    pub fail_animate: bool,
    pub strategy_calls: AtomicUsize,
    pub logo_calls: AtomicUsize,
    pub edit_calls: AtomicUsize,
    pub animate_calls: AtomicUsize,
}

impl MockStudio {
    pub fn new(keyring: Arc<KeyRing>) -> Self {
        Self {
            keyring,
            fail_strategy: false,
            fail_edit: false,
            fail_animate: false,
            strategy_calls: AtomicUsize::new(0),
            logo_calls: AtomicUsize::new(0),
            edit_calls: AtomicUsize::new(0),
            animate_calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrandStudio for MockStudio {
    async fn generate_strategy(&self, mission: &str) -> StudioResult<BrandStrategy> {
        self.strategy_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_strategy {
            return Err(StudioError::StrategyGenerationFailed(
                "response was not valid JSON".to_string(),
            ));
        }
        sample_strategy()
            .normalize(mission)
            .map_err(StudioError::StrategyGenerationFailed)
    }

    async fn generate_logo(&self, _logo_prompt: &str) -> StudioResult<EmbeddedImage> {
        self.logo_calls.fetch_add(1, Ordering::SeqCst);
        Ok(logo_image())
    }

    async fn edit_image(
        &self,
        _image: &EmbeddedImage,
        instruction: &str,
    ) -> StudioResult<EmbeddedImage> {
        self.edit_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_edit {
            return Err(StudioError::ImageEditFailed("no image returned".to_string()));
        }
        Ok(EmbeddedImage::from_bytes("image/png", instruction.as_bytes()))
    }

    async fn animate_image(
        &self,
        _image: &EmbeddedImage,
        _prompt: Option<&str>,
    ) -> StudioResult<VideoClip> {
        if !self.keyring.has_selected_key() {
            return Err(StudioError::MissingCredential);
        }
        self.animate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_animate {
            return Err(StudioError::VideoGenerationFailed(
                "no video reference produced".to_string(),
            ));
        }
        Ok(VideoClip::new(
            "video/mp4",
            vec![0, 0, 0, 24, 102, 116, 121, 112],
            "https://example.com/video.mp4",
        ))
    }
}

pub fn sample_strategy() -> BrandStrategy {
    BrandStrategy {
        company_name: "Café Cumbre".to_string(),
        mission_statement: String::new(),
        tagline: "Sustainably brewed, locally loved".to_string(),
        colors: vec![
            ColorSwatch::new("#2E7D32", "Andean Green", "Primary"),
            ColorSwatch::new("#6D4C41", "Roast", "Secondary"),
            ColorSwatch::new("#F5F5DC", "Cream", "Background"),
            ColorSwatch::new("#FFB300", "Sunrise", "Accent"),
            ColorSwatch::new("#212121", "Espresso", "Text"),
        ],
        fonts: vec![
            FontPairing {
                header: "Montserrat".to_string(),
                body: "Lora".to_string(),
                reasoning: "Modern headline with a warm serif body".to_string(),
            },
            FontPairing {
                header: "Playfair Display".to_string(),
                body: "Open Sans".to_string(),
                reasoning: "Elegant and readable".to_string(),
            },
        ],
        logo_prompt: "A minimalist mountain inside a coffee bean".to_string(),
    }
}

pub fn logo_image() -> EmbeddedImage {
    EmbeddedImage::from_bytes("image/jpeg", b"\xFF\xD8\xFFlogo")
}

pub fn create_test_app(keyring: Arc<KeyRing>) -> AppState {
    AppState::new(AppConfig::default(), keyring)
}

/// Runs a job to completion the way the job runner does and feeds every event back.
pub async fn complete(app: &mut AppState, studio: &dyn BrandStudio, job: Job) {
    let mut progress = Vec::new();
    let result = run_job(studio, job.kind, |message| progress.push(message)).await;
    for message in progress {
        apply_job_event(app, JobEvent::Progress { id: job.id, message });
    }
    apply_job_event(app, JobEvent::Finished { id: job.id, result });
}

/// Dispatches an action and, if it started a job, completes it against the studio.
pub async fn perform(app: &mut AppState, studio: &dyn BrandStudio, action: Action) -> bool {
    match execute_action(action, app).expect("action failed") {
        Some(job) => {
            complete(app, studio, job).await;
            true
        }
        None => false,
    }
}

pub fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        execute_action(Action::TypeChar(c), app).expect("typing failed");
    }
}
