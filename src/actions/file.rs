use crate::app::{AppState, Prompt, Screen, TextInput};
use crate::errors::AppResult;
use crate::media::{format_size, EmbeddedImage};
use crate::model::BrandIdentity;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writes the current image next to the other outputs.
pub fn save_image(app: &mut AppState) -> Result<PathBuf> {
    let (slug, image) = match app.screen.workspace() {
        Some(workspace) => (workspace.brand.slug(), workspace.current_image.clone()),
        None => return Err(anyhow!("No image to save")),
    };

    let n = app.saved_images + 1;
    let path = app
        .config
        .output_dir
        .join(format!("{}-image-{}.{}", slug, n, image.extension()));
    image.save_to(&path)?;
    app.saved_images = n;
    Ok(path)
}

pub fn save_video(app: &mut AppState) -> Result<PathBuf> {
    let (slug, video) = match &app.screen {
        Screen::AnimateVideo { workspace, video } => (workspace.brand.slug(), video),
        _ => return Err(anyhow!("No video to save")),
    };

    let path = app
        .config
        .output_dir
        .join(format!("{}-animation.mp4", slug));
    video.save_to(&path)?;
    Ok(path)
}

/// Writes the brand (without image data) as pretty JSON.
pub fn export_brand(app: &mut AppState) -> Result<PathBuf> {
    let brand = app
        .screen
        .brand()
        .ok_or_else(|| anyhow!("No brand to export"))?;

    let path = app
        .config
        .output_dir
        .join(format!("{}-brand.json", brand.slug()));
    write_json(brand, &path).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn write_json(brand: &BrandIdentity, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(brand)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

/// Shows the outcome of a save in the status line, or a notice on failure.
pub fn report_saved(app: &mut AppState, result: Result<PathBuf>) {
    match result {
        Ok(path) => {
            info!(path = %path.display(), "saved");
            app.set_message(format!("Saved to {}", path.display()));
        }
        Err(e) => {
            warn!(error = %e, "save failed");
            app.notify_error(format!("Failed to save: {:#}", e));
        }
    }
}

/// Asks for the path of a local image to edit instead of the logo.
pub fn open_image_prompt(app: &mut AppState) {
    if matches!(app.screen, Screen::EditImage { .. }) {
        app.prompt = Some(Prompt::ImagePath(TextInput::default()));
    }
}

/// Replaces the current image with a file from disk. No AI call is made.
pub fn load_image(app: &mut AppState, path: &str) {
    let path = expand_home(path);
    let image = match EmbeddedImage::from_file(&path) {
        Ok(image) => image,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load image");
            app.notify_error(e.to_string());
            return;
        }
    };

    if let Screen::EditImage { workspace, .. } = &mut app.screen {
        let size = format_size(image.approx_size());
        workspace.current_image = image;
        app.set_message(format!("Loaded {} ({})", path.display(), size));
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = directories::BaseDirs::new() {
            return home.home_dir().join(rest);
        }
    }
    Path::new(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Workspace;
    use crate::config::AppConfig;
    use crate::errors::AppError;
    use crate::media::VideoClip;
    use crate::studio::KeyRing;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn create_test_app(output_dir: &Path) -> AppState {
        let config = AppConfig {
            output_dir: output_dir.to_path_buf(),
            ..AppConfig::default()
        };
        let mut app = AppState::new(config, Arc::new(KeyRing::default()));

        let brand = BrandIdentity {
            company_name: "Café Verde".to_string(),
            mission_statement: "Coffee".to_string(),
            tagline: "Fresh".to_string(),
            colors: Vec::new(),
            fonts: Vec::new(),
            logo_prompt: "a bean".to_string(),
            logo: Some(EmbeddedImage::from_bytes("image/png", b"png-bytes")),
        };
        app.screen = Screen::Dashboard(Workspace::from_brand(brand).unwrap());
        app
    }

    #[test]
    fn test_save_image_numbers_files() {
        let dir = TempDir::new().unwrap();
        let mut app = create_test_app(dir.path());

        let first = save_image(&mut app).unwrap();
        let second = save_image(&mut app).unwrap();

        assert_eq!(first, dir.path().join("café-verde-image-1.png"));
        assert_eq!(second, dir.path().join("café-verde-image-2.png"));
        assert_eq!(fs::read(&first).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_export_brand_writes_camel_case_json() {
        let dir = TempDir::new().unwrap();
        let mut app = create_test_app(dir.path());

        let path = export_brand(&mut app).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(json["companyName"], "Café Verde");
        assert!(json.get("logo").is_none());
    }

    #[test]
    fn test_write_json_under_a_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let app = create_test_app(dir.path());
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let brand = app.screen.brand().unwrap();
        let result = write_json(brand, &blocker.join("brand.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_save_video() {
        let dir = TempDir::new().unwrap();
        let mut app = create_test_app(dir.path());
        assert!(save_video(&mut app).is_err());

        let workspace = app.screen.workspace().cloned().unwrap();
        app.screen = Screen::AnimateVideo {
            workspace,
            video: VideoClip::new("video/mp4", vec![0, 0, 0, 24], "uri"),
        };
        let path = save_video(&mut app).unwrap();
        assert_eq!(path, dir.path().join("café-verde-animation.mp4"));
    }

    #[test]
    fn test_load_image_replaces_current_image() {
        let dir = TempDir::new().unwrap();
        let mut app = create_test_app(dir.path());
        let workspace = app.screen.workspace().cloned().unwrap();
        app.screen = Screen::EditImage {
            workspace,
            instruction: TextInput::default(),
        };

        let file = dir.path().join("sketch.webp");
        fs::write(&file, b"webp").unwrap();
        load_image(&mut app, file.to_str().unwrap());

        let image = app.screen.current_image().unwrap();
        assert_eq!(image.mime_type, "image/webp");
        assert_eq!(image.decode().unwrap(), b"webp");
    }

    #[test]
    fn test_load_unsupported_file_shows_notice() {
        let dir = TempDir::new().unwrap();
        let mut app = create_test_app(dir.path());
        let file = dir.path().join("notes.txt");
        fs::write(&file, b"text").unwrap();

        load_image(&mut app, file.to_str().unwrap());
        assert!(app.notice.is_some());
    }
}
