use crate::config::AppConfig;
use crate::jobs::{Job, JobId, JobKind};
use crate::media::{EmbeddedImage, VideoClip};
use crate::model::BrandIdentity;
use crate::studio::KeyRing;
use std::sync::Arc;

/// The five screens a user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Input,
    Loading,
    Dashboard,
    EditImage,
    AnimateVideo,
}

/// Single-line text buffer with a cursor, counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub buffer: String,
    pub cursor_pos: usize,
}

impl TextInput {
    pub fn new(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor_pos = buffer.chars().count();
        Self { buffer, cursor_pos }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_pos = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn char_at(&self, char_pos: usize) -> Option<char> {
        self.buffer.chars().nth(char_pos)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.buffer.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.cursor_pos);
        self.buffer.insert_str(at, text);
        self.cursor_pos += text.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index(self.cursor_pos);
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_count() {
            let at = self.byte_index(self.cursor_pos);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    pub fn delete_word_backward(&mut self) {
        let end = self.cursor_pos;
        // Skip spaces, then the word itself
        while self.cursor_pos > 0 && self.char_at(self.cursor_pos - 1) == Some(' ') {
            self.cursor_pos -= 1;
        }
        while self.cursor_pos > 0 && self.char_at(self.cursor_pos - 1) != Some(' ') {
            self.cursor_pos -= 1;
        }
        let start = self.byte_index(self.cursor_pos);
        let end = self.byte_index(end);
        self.buffer.replace_range(start..end, "");
    }

    pub fn delete_to_start(&mut self) {
        let end = self.byte_index(self.cursor_pos);
        self.buffer.replace_range(0..end, "");
        self.cursor_pos = 0;
    }
}

/// A generated brand together with the image currently being viewed or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub brand: BrandIdentity,
    pub current_image: EmbeddedImage,
}

impl Workspace {
    /// Starts from the brand's logo. `None` when the brand has no logo yet.
    pub fn from_brand(brand: BrandIdentity) -> Option<Self> {
        let current_image = brand.logo.clone()?;
        Some(Self {
            brand,
            current_image,
        })
    }

    pub fn reset_to_logo(&mut self) {
        if let Some(logo) = &self.brand.logo {
            self.current_image = logo.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Input {
        mission: TextInput,
    },
    Loading {
        job_id: JobId,
        message: String,
        /// Screen to return to if the job fails.
        resume: Box<Screen>,
    },
    Dashboard(Workspace),
    EditImage {
        workspace: Workspace,
        instruction: TextInput,
    },
    AnimateVideo {
        workspace: Workspace,
        video: VideoClip,
    },
}

impl Screen {
    pub fn input(mission: impl Into<String>) -> Self {
        Screen::Input {
            mission: TextInput::new(mission),
        }
    }

    pub fn view_state(&self) -> ViewState {
        match self {
            Screen::Input { .. } => ViewState::Input,
            Screen::Loading { .. } => ViewState::Loading,
            Screen::Dashboard(_) => ViewState::Dashboard,
            Screen::EditImage { .. } => ViewState::EditImage,
            Screen::AnimateVideo { .. } => ViewState::AnimateVideo,
        }
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Screen::Dashboard(workspace)
            | Screen::EditImage { workspace, .. }
            | Screen::AnimateVideo { workspace, .. } => Some(workspace),
            Screen::Input { .. } | Screen::Loading { .. } => None,
        }
    }

    pub fn brand(&self) -> Option<&BrandIdentity> {
        self.workspace().map(|w| &w.brand)
    }

    pub fn current_image(&self) -> Option<&EmbeddedImage> {
        self.workspace().map(|w| &w.current_image)
    }

    pub fn video(&self) -> Option<&VideoClip> {
        match self {
            Screen::AnimateVideo { video, .. } => Some(video),
            _ => None,
        }
    }

    /// The text field keys are typed into, if this screen has one.
    pub fn text_input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Screen::Input { mission } => Some(mission),
            Screen::EditImage { instruction, .. } => Some(instruction),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Modal text prompts drawn over the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Paste or type an API key for video generation.
    Credential(TextInput),
    /// Path of a local image to use as the reference.
    ImagePath(TextInput),
}

impl Prompt {
    pub fn input_mut(&mut self) -> &mut TextInput {
        match self {
            Prompt::Credential(input) | Prompt::ImagePath(input) => input,
        }
    }

    pub fn input(&self) -> &TextInput {
        match self {
            Prompt::Credential(input) | Prompt::ImagePath(input) => input,
        }
    }
}

pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub config: AppConfig,
    pub keyring: Arc<KeyRing>,

    // Overlays, drawn on top of the screen in this order
    pub prompt: Option<Prompt>,
    pub notice: Option<Notice>,
    pub show_help: bool,

    // Message for status line
    pub message: Option<String>,

    /// Mission of the most recent generation, offered again on "new brand".
    pub last_mission: String,
    pub next_job_id: JobId,
    pub saved_images: usize,
    pub tick: u64,
}

impl AppState {
    pub fn new(config: AppConfig, keyring: Arc<KeyRing>) -> Self {
        Self {
            running: true,
            screen: Screen::input(""),
            config,
            keyring,
            prompt: None,
            notice: None,
            show_help: false,
            message: None,
            last_mission: String::new(),
            next_job_id: 1,
            saved_images: 0,
            tick: 0,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.screen.view_state()
    }

    /// Moves to `Loading`, remembering the current screen, and returns the job to run.
    pub fn begin_job(&mut self, kind: JobKind, message: impl Into<String>) -> Job {
        let id = self.next_job_id;
        self.next_job_id += 1;

        let resume = std::mem::replace(&mut self.screen, Screen::input(""));
        self.screen = Screen::Loading {
            job_id: id,
            message: message.into(),
            resume: Box::new(resume),
        };
        Job { id, kind }
    }

    /// Job id the current `Loading` screen is waiting for.
    pub fn pending_job(&self) -> Option<JobId> {
        match &self.screen {
            Screen::Loading { job_id, .. } => Some(*job_id),
            _ => None,
        }
    }

    /// Leaves `Loading` for the screen captured when the job began.
    pub fn take_resume_screen(&mut self) -> Option<Screen> {
        match std::mem::replace(&mut self.screen, Screen::input("")) {
            Screen::Loading { resume, .. } => Some(*resume),
            other => {
                self.screen = other;
                None
            }
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing_is_char_aware() {
        let mut input = TextInput::new("Bogotá");
        assert_eq!(input.cursor_pos, 6);

        input.backspace();
        assert_eq!(input.as_str(), "Bogot");

        input.insert('á');
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "ogotá");

        input.move_end();
        input.insert_str(" café");
        assert_eq!(input.as_str(), "ogotá café");
        assert_eq!(input.cursor_pos, 10);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = TextInput::new("make it red  ");
        input.delete_word_backward();
        assert_eq!(input.as_str(), "make it ");

        input.delete_to_start();
        assert!(input.is_blank());
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn test_begin_job_and_resume() {
        let keyring = Arc::new(KeyRing::default());
        let mut app = AppState::new(AppConfig::default(), keyring);
        app.screen = Screen::input("a bakery");

        let job = app.begin_job(
            JobKind::GenerateBrand {
                mission: "a bakery".to_string(),
            },
            "Working",
        );
        assert_eq!(app.view_state(), ViewState::Loading);
        assert_eq!(app.pending_job(), Some(job.id));

        let resumed = app.take_resume_screen().unwrap();
        assert_eq!(resumed, Screen::input("a bakery"));
    }

    #[test]
    fn test_take_resume_outside_loading_keeps_screen() {
        let mut app = AppState::new(AppConfig::default(), Arc::new(KeyRing::default()));
        app.screen = Screen::input("kept");

        assert!(app.take_resume_screen().is_none());
        assert_eq!(app.screen, Screen::input("kept"));
    }
}
