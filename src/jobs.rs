//! Runs adapter calls off the UI thread and reports back over a channel.

use crate::errors::StudioError;
use crate::media::{EmbeddedImage, VideoClip};
use crate::model::BrandIdentity;
use crate::studio::BrandStudio;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

pub type JobId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum JobKind {
    /// Strategy followed by the logo.
    GenerateBrand { mission: String },
    EditImage {
        image: EmbeddedImage,
        instruction: String,
    },
    AnimateImage {
        image: EmbeddedImage,
        prompt: Option<String>,
    },
}

impl JobKind {
    pub fn label(&self) -> &'static str {
        match self {
            JobKind::GenerateBrand { .. } => "generate-brand",
            JobKind::EditImage { .. } => "edit-image",
            JobKind::AnimateImage { .. } => "animate-image",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub kind: JobKind,
}

#[derive(Debug)]
pub enum JobOutput {
    Brand(BrandIdentity),
    EditedImage(EmbeddedImage),
    Video(VideoClip),
}

#[derive(Debug)]
pub enum JobEvent {
    Progress { id: JobId, message: String },
    Finished {
        id: JobId,
        result: Result<JobOutput, StudioError>,
    },
}

/// Executes one job against the studio, reporting intermediate steps through `progress`.
pub async fn run_job<F>(
    studio: &dyn BrandStudio,
    kind: JobKind,
    mut progress: F,
) -> Result<JobOutput, StudioError>
where
    F: FnMut(String) + Send,
{
    match kind {
        JobKind::GenerateBrand { mission } => {
            let strategy = studio.generate_strategy(&mission).await?;
            progress(format!("Generating logo for \"{}\"...", strategy.company_name));
            let logo = studio.generate_logo(&strategy.logo_prompt).await?;
            Ok(JobOutput::Brand(
                BrandIdentity::from_strategy(strategy).with_logo(logo),
            ))
        }
        JobKind::EditImage { image, instruction } => studio
            .edit_image(&image, &instruction)
            .await
            .map(JobOutput::EditedImage),
        JobKind::AnimateImage { image, prompt } => studio
            .animate_image(&image, prompt.as_deref())
            .await
            .map(JobOutput::Video),
    }
}

/// Spawns jobs on a tokio runtime and collects their events for the UI loop.
pub struct JobRunner {
    studio: Arc<dyn BrandStudio>,
    handle: Handle,
    sender: UnboundedSender<JobEvent>,
    receiver: UnboundedReceiver<JobEvent>,
}

impl JobRunner {
    pub fn new(studio: Arc<dyn BrandStudio>, handle: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            studio,
            handle,
            sender,
            receiver,
        }
    }

    pub fn spawn(&self, job: Job) {
        let studio = Arc::clone(&self.studio);
        let sender = self.sender.clone();
        let Job { id, kind } = job;
        info!(job = id, kind = kind.label(), "starting job");

        self.handle.spawn(async move {
            let progress_sender = sender.clone();
            let result = run_job(studio.as_ref(), kind, move |message| {
                let _ = progress_sender.send(JobEvent::Progress { id, message });
            })
            .await;

            match &result {
                Ok(_) => debug!(job = id, "job finished"),
                Err(e) => warn!(job = id, error = %e, "job failed"),
            }
            // The receiver only goes away when the app is shutting down.
            let _ = sender.send(JobEvent::Finished { id, result });
        });
    }

    /// Next pending event, without blocking.
    pub fn try_next(&mut self) -> Option<JobEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
