//! Durable player preferences (theme, background, tutorial flag).
//!
//! Values are plain strings in browser `localStorage`. The store knows nothing
//! about levels; gating happens in [`crate::state::settings`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

use crate::error::StorageError;

pub const KEY_THEME: &str = "theme";
pub const KEY_BG_TYPE: &str = "bgType";
pub const KEY_BG_VALUE: &str = "bgValue";
/// Old image-URL background; read as a fallback, never written.
pub const KEY_LEGACY_BG: &str = "customBg";
pub const KEY_TUTORIAL_SEEN: &str = "seenTutorial";

pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub struct LocalStorage {
    store: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(store)) => Ok(Self { store }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

fn js_message(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.store
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_string(), message: js_message(e) })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_string(), message: js_message(e) })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store
            .remove_item(key)
            .map_err(|e| StorageError::Remove { key: key.to_string(), message: js_message(e) })
    }
}

/// In-memory backend for tests and browsers without `localStorage`.
#[derive(Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    Solid(String),
    Gradient(String),
    LegacyImage(String),
}

impl Background {
    pub fn gradient(start: &str, end: &str) -> Self {
        Background::Gradient(format!("linear-gradient(135deg, {}, {})", start, end))
    }

    /// Value for the CSS `background` property.
    pub fn css(&self) -> String {
        match self {
            Background::Solid(v) | Background::Gradient(v) => v.clone(),
            Background::LegacyImage(url) => format!("url('{}')", escape_css_url(url)),
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Background::Gradient(_))
    }

    fn type_key(&self) -> Option<&'static str> {
        match self {
            Background::Solid(_) => Some("solid"),
            Background::Gradient(_) => Some("gradient"),
            Background::LegacyImage(_) => None,
        }
    }
}

// Percent-encodes anything that could end the quoted `url('...')` or the
// inline declaration it sits in.
fn escape_css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '\\' => out.push_str("%5C"),
            ';' => out.push_str("%3B"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub background: Option<Background>,
    pub tutorial_seen: bool,
}

/// Write-through key/value store over a [`StorageBackend`].
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Rc<dyn StorageBackend>,
}

impl PartialEq for PreferenceStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl PreferenceStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Browser `localStorage`, or memory when it cannot be opened.
    pub fn browser() -> Self {
        match LocalStorage::open() {
            Ok(ls) => Self::new(Rc::new(ls)),
            Err(e) => {
                warn!(error = %e, "preferences will not survive a reload");
                Self::new(Rc::new(MemoryStorage::default()))
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.get(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    fn read_lenient(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "treating preference as absent");
                None
            }
        }
    }

    /// Reads every known key. Missing or malformed values fall back to defaults.
    pub fn load(&self) -> Preferences {
        let theme = match self.read_lenient(KEY_THEME) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown theme, using default");
                Theme::default()
            }),
            None => Theme::default(),
        };

        let bg_type = self.read_lenient(KEY_BG_TYPE);
        let bg_value = self.read_lenient(KEY_BG_VALUE).filter(|v| !v.is_empty());
        let background = match (bg_type.as_deref(), bg_value) {
            (Some("solid"), Some(v)) => Some(Background::Solid(v)),
            (Some("gradient"), Some(v)) => Some(Background::Gradient(v)),
            (ty, _) => {
                if ty.is_some() {
                    warn!(bg_type = ?ty, "ignoring incomplete background");
                }
                self.read_lenient(KEY_LEGACY_BG)
                    .filter(|v| !v.is_empty())
                    .map(Background::LegacyImage)
            }
        };

        let tutorial_seen = self.read_lenient(KEY_TUTORIAL_SEEN).as_deref() == Some("true");

        Preferences { theme, background, tutorial_seen }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.set(KEY_THEME, theme.as_str())
    }

    pub fn save_background(&self, bg: &Background) -> Result<(), StorageError> {
        let Some(ty) = bg.type_key() else {
            return Ok(());
        };
        self.set(KEY_BG_TYPE, ty)?;
        match bg {
            Background::Solid(v) | Background::Gradient(v) => self.set(KEY_BG_VALUE, v),
            Background::LegacyImage(_) => Ok(()),
        }
    }

    /// Attempts every removal even after a failure; returns the first error.
    pub fn clear_background(&self) -> Result<(), StorageError> {
        [KEY_BG_TYPE, KEY_BG_VALUE, KEY_LEGACY_BG]
            .into_iter()
            .map(|key| self.remove(key))
            .fold(Ok(()), |first, next| first.and(next))
    }

    pub fn mark_tutorial_seen(&self) -> Result<(), StorageError> {
        self.set(KEY_TUTORIAL_SEEN, "true")
    }
}
