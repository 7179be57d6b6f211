use crate::app::{AppState, Prompt, Screen, TextInput, Workspace};
use crate::jobs::{Job, JobEvent, JobKind, JobOutput};
use tracing::{debug, info, warn};

pub const STRATEGY_MESSAGE: &str = "Designing brand strategy...";
pub const EDIT_MESSAGE: &str = "Applying your edit...";
pub const ANIMATION_MESSAGE: &str = "Animating with Veo... this can take a few minutes";

/// Submits the mission typed on the input screen.
pub fn start_generation(app: &mut AppState) -> Option<Job> {
    let mission = match &app.screen {
        Screen::Input { mission } if !mission.is_blank() => mission.as_str().trim().to_string(),
        _ => return None,
    };

    app.last_mission = mission.clone();
    app.clear_message();
    Some(app.begin_job(JobKind::GenerateBrand { mission }, STRATEGY_MESSAGE))
}

/// Submits the edit instruction against the current image.
pub fn start_edit(app: &mut AppState) -> Option<Job> {
    let (image, instruction) = match &app.screen {
        Screen::EditImage {
            workspace,
            instruction,
        } if !instruction.is_blank() => (
            workspace.current_image.clone(),
            instruction.as_str().trim().to_string(),
        ),
        _ => return None,
    };

    app.clear_message();
    Some(app.begin_job(JobKind::EditImage { image, instruction }, EDIT_MESSAGE))
}

/// Animates the logo from the dashboard, or the edited image from the editor.
pub fn start_animation(app: &mut AppState) -> Option<Job> {
    let image = match &mut app.screen {
        Screen::Dashboard(workspace) => {
            workspace.reset_to_logo();
            workspace.current_image.clone()
        }
        Screen::EditImage { workspace, .. } => workspace.current_image.clone(),
        _ => return None,
    };

    let prompt = Some(app.config.animation_prompt.clone()).filter(|p| !p.trim().is_empty());
    app.clear_message();
    Some(app.begin_job(JobKind::AnimateImage { image, prompt }, ANIMATION_MESSAGE))
}

/// Feeds a job event back into the state machine.
pub fn apply_job_event(app: &mut AppState, event: JobEvent) {
    match event {
        JobEvent::Progress { id, message } => {
            if let Screen::Loading {
                job_id,
                message: current,
                ..
            } = &mut app.screen
            {
                if *job_id == id {
                    *current = message;
                }
            }
        }
        JobEvent::Finished { id, result } => {
            if app.pending_job() != Some(id) {
                debug!(job = id, "discarding result of a job nobody is waiting for");
                return;
            }
            let Some(resume) = app.take_resume_screen() else {
                return;
            };

            match result {
                Ok(output) => finish(app, resume, output),
                Err(e) if e.is_missing_credential() => {
                    info!(job = id, "video generation needs a selected API key");
                    app.screen = resume;
                    app.prompt = Some(Prompt::Credential(TextInput::default()));
                    app.set_message("Select an API key to generate videos");
                }
                Err(e) => {
                    warn!(job = id, error = %e, "operation failed");
                    app.screen = resume;
                    app.notify_error(e.to_string());
                }
            }
        }
    }
}

fn finish(app: &mut AppState, resume: Screen, output: JobOutput) {
    match (resume, output) {
        (_, JobOutput::Brand(brand)) => {
            let name = brand.company_name.clone();
            match Workspace::from_brand(brand) {
                Some(workspace) => {
                    app.screen = Screen::Dashboard(workspace);
                    app.set_message(format!("Generated {}", name));
                }
                None => {
                    app.screen = Screen::input(app.last_mission.clone());
                    app.notify_error("Logo generation failed: no image returned");
                }
            }
        }
        (
            Screen::EditImage {
                mut workspace,
                mut instruction,
            },
            JobOutput::EditedImage(image),
        ) => {
            workspace.current_image = image;
            instruction.clear();
            app.screen = Screen::EditImage {
                workspace,
                instruction,
            };
            app.set_message("Image updated");
        }
        (Screen::Dashboard(workspace), JobOutput::Video(video))
        | (Screen::EditImage { workspace, .. }, JobOutput::Video(video)) => {
            app.screen = Screen::AnimateVideo { workspace, video };
            app.set_message("Video ready");
        }
        (resume, output) => {
            warn!(?output, "job output does not fit the screen it started from");
            app.screen = resume;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewState;
    use crate::config::AppConfig;
    use crate::errors::StudioError;
    use crate::media::{EmbeddedImage, VideoClip};
    use crate::model::{BrandIdentity, ColorSwatch, FontPairing};
    use crate::studio::KeyRing;
    use std::sync::Arc;

    fn create_test_app() -> AppState {
        let config = AppConfig::default();
        AppState::new(config, Arc::new(KeyRing::default()))
    }

    fn logo() -> EmbeddedImage {
        EmbeddedImage::new("image/jpeg", "bG9nbw==")
    }

    fn sample_brand() -> BrandIdentity {
        BrandIdentity {
            company_name: "Northwind".to_string(),
            mission_statement: "Ship things".to_string(),
            tagline: "Onward".to_string(),
            colors: vec![ColorSwatch::new("#112233", "Navy", "Primary"); 5],
            fonts: vec![FontPairing {
                header: "Inter".to_string(),
                body: "Lora".to_string(),
                reasoning: "Contrast".to_string(),
            }],
            logo_prompt: "a compass".to_string(),
            logo: Some(logo()),
        }
    }

    fn dashboard_app() -> AppState {
        let mut app = create_test_app();
        app.screen = Screen::Dashboard(Workspace::from_brand(sample_brand()).unwrap());
        app
    }

    #[test]
    fn test_blank_mission_does_not_start_a_job() {
        let mut app = create_test_app();
        app.screen = Screen::input("   ");

        assert!(start_generation(&mut app).is_none());
        assert_eq!(app.view_state(), ViewState::Input);
    }

    #[test]
    fn test_generation_success_lands_on_dashboard() {
        let mut app = create_test_app();
        app.screen = Screen::input("  a bike shop ");

        let job = start_generation(&mut app).unwrap();
        assert_eq!(
            job.kind,
            JobKind::GenerateBrand {
                mission: "a bike shop".to_string()
            }
        );
        assert_eq!(app.view_state(), ViewState::Loading);

        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id,
                result: Ok(JobOutput::Brand(sample_brand())),
            },
        );
        assert_eq!(app.view_state(), ViewState::Dashboard);
        assert_eq!(app.screen.current_image(), Some(&logo()));
    }

    #[test]
    fn test_progress_updates_loading_message() {
        let mut app = create_test_app();
        app.screen = Screen::input("tea");
        let job = start_generation(&mut app).unwrap();

        apply_job_event(
            &mut app,
            JobEvent::Progress {
                id: job.id,
                message: "Generating logo".to_string(),
            },
        );
        match &app.screen {
            Screen::Loading { message, .. } => assert_eq!(message, "Generating logo"),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_generation_failure_restores_mission() {
        let mut app = create_test_app();
        app.screen = Screen::input("tea");
        let job = start_generation(&mut app).unwrap();

        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id,
                result: Err(StudioError::StrategyGenerationFailed("bad json".to_string())),
            },
        );
        assert_eq!(app.screen, Screen::input("tea"));
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut app = create_test_app();
        app.screen = Screen::input("tea");
        let job = start_generation(&mut app).unwrap();

        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id + 7,
                result: Ok(JobOutput::Brand(sample_brand())),
            },
        );
        assert_eq!(app.pending_job(), Some(job.id));
    }

    #[test]
    fn test_edit_replaces_image_and_clears_instruction() {
        let mut app = dashboard_app();
        let workspace = app.screen.workspace().cloned().unwrap();
        app.screen = Screen::EditImage {
            workspace,
            instruction: TextInput::new("add a hat"),
        };

        let job = start_edit(&mut app).unwrap();
        let edited = EmbeddedImage::new("image/png", "aGF0");
        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id,
                result: Ok(JobOutput::EditedImage(edited.clone())),
            },
        );

        match &app.screen {
            Screen::EditImage {
                workspace,
                instruction,
            } => {
                assert_eq!(workspace.current_image, edited);
                assert!(instruction.is_blank());
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_animate_from_dashboard_uses_logo() {
        let mut app = dashboard_app();
        if let Screen::Dashboard(workspace) = &mut app.screen {
            workspace.current_image = EmbeddedImage::new("image/png", "b3RoZXI=");
        }

        let job = start_animation(&mut app).unwrap();
        match job.kind {
            JobKind::AnimateImage { image, prompt } => {
                assert_eq!(image, logo());
                assert_eq!(prompt.as_deref(), Some("Cinematic slow motion movement"));
            }
            other => panic!("unexpected job {:?}", other),
        }

        let video = VideoClip::new("video/mp4", vec![1, 2, 3], "https://example.com/v");
        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id,
                result: Ok(JobOutput::Video(video.clone())),
            },
        );
        assert_eq!(app.view_state(), ViewState::AnimateVideo);
        assert_eq!(app.screen.video(), Some(&video));
    }

    #[test]
    fn test_missing_credential_opens_prompt() {
        let mut app = dashboard_app();
        let job = start_animation(&mut app).unwrap();

        apply_job_event(
            &mut app,
            JobEvent::Finished {
                id: job.id,
                result: Err(StudioError::MissingCredential),
            },
        );
        assert_eq!(app.view_state(), ViewState::Dashboard);
        assert!(matches!(app.prompt, Some(Prompt::Credential(_))));
        assert!(app.notice.is_none());
    }
}
