use std::sync::RwLock;

/// Source of provider credentials, consulted on every call.
pub trait CredentialProvider: Send + Sync {
    /// The key to authenticate the next request with.
    fn api_key(&self) -> Option<String>;

    /// Whether the user has explicitly chosen a key for video generation.
    fn has_selected_key(&self) -> bool;
}

/// A configured default key plus an interactively selected one that overrides it.
#[derive(Debug, Default)]
pub struct KeyRing {
    default_key: Option<String>,
    selected_key: RwLock<Option<String>>,
}

impl KeyRing {
    pub fn new(default_key: Option<String>, selected_key: Option<String>) -> Self {
        Self {
            default_key: default_key.filter(|k| !k.trim().is_empty()),
            selected_key: RwLock::new(selected_key.filter(|k| !k.trim().is_empty())),
        }
    }

    /// Stores a key chosen by the user. Blank input is ignored and returns false.
    pub fn select(&self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        let mut guard = match self.selected_key.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(key.to_string());
        true
    }

    pub fn clear_selection(&self) {
        let mut guard = match self.selected_key.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }

    fn selected(&self) -> Option<String> {
        match self.selected_key.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl CredentialProvider for KeyRing {
    fn api_key(&self) -> Option<String> {
        self.selected().or_else(|| self.default_key.clone())
    }

    fn has_selected_key(&self) -> bool {
        self.selected().is_some()
    }
}
