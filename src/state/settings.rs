// Preference-changing actions, each checked against its level gate.
// In-memory preferences are updated before the write, so a failed write
// still leaves the session showing the player's choice.
use tracing::{info, warn};

use crate::error::ActionError;
use crate::projection::{Feature, FeatureGates};
use crate::state::preferences::{Background, PreferenceStore, Preferences, Theme};

pub fn set_theme(
    gates: &FeatureGates,
    prefs: &mut Preferences,
    store: &PreferenceStore,
    theme: Theme,
) -> Result<(), ActionError> {
    gates.require(Feature::ThemeToggle)?;
    prefs.theme = theme;
    info!(theme = theme.as_str(), "theme changed");
    store.save_theme(theme).inspect_err(|e| warn!(error = %e, "theme not saved"))?;
    Ok(())
}

pub fn toggle_theme(gates: &FeatureGates, prefs: &mut Preferences, store: &PreferenceStore) -> Result<(), ActionError> {
    let next = prefs.theme.toggled();
    set_theme(gates, prefs, store, next)
}

pub fn set_background(
    gates: &FeatureGates,
    prefs: &mut Preferences,
    store: &PreferenceStore,
    background: Background,
) -> Result<(), ActionError> {
    gates.require(Feature::CustomBackground)?;
    info!(background = %background.css(), "background changed");
    let saved = store.save_background(&background);
    prefs.background = Some(background);
    saved.inspect_err(|e| warn!(error = %e, "background not saved"))?;
    Ok(())
}

/// Always allowed: it only removes stored data.
pub fn reset_background(prefs: &mut Preferences, store: &PreferenceStore) -> Result<(), ActionError> {
    prefs.background = None;
    store
        .clear_background()
        .inspect_err(|e| warn!(error = %e, "background reset not fully saved"))?;
    Ok(())
}

pub fn finish_tutorial(prefs: &mut Preferences, store: &PreferenceStore) -> Result<(), ActionError> {
    prefs.tutorial_seen = true;
    store.mark_tutorial_seen()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::state::preferences::{
        MemoryStorage, StorageBackend, KEY_BG_TYPE, KEY_BG_VALUE, KEY_LEGACY_BG, KEY_THEME, KEY_TUTORIAL_SEEN,
    };
    use std::rc::Rc;

    fn memory() -> PreferenceStore {
        PreferenceStore::new(Rc::new(MemoryStorage::default()))
    }

    /// Memory storage whose writes and removals fail for the listed keys.
    struct BrokenKeys {
        inner: MemoryStorage,
        broken: &'static [&'static str],
    }

    impl StorageBackend for BrokenKeys {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.broken.iter().any(|k| *k == key) {
                return Err(StorageError::Write { key: key.to_string(), message: "quota exceeded".into() });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.broken.iter().any(|k| *k == key) {
                return Err(StorageError::Remove { key: key.to_string(), message: "denied".into() });
            }
            self.inner.remove(key)
        }
    }

    fn broken(inner: MemoryStorage, broken: &'static [&'static str]) -> PreferenceStore {
        PreferenceStore::new(Rc::new(BrokenKeys { inner, broken }))
    }

    #[test]
    fn theme_toggle_denied_below_knight() {
        let store = memory();
        let mut prefs = Preferences::default();
        let err = toggle_theme(&FeatureGates::new(3, false), &mut prefs, &store).unwrap_err();
        assert!(matches!(err, ActionError::Locked { required_level: 4, .. }));
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(store.get(KEY_THEME).unwrap(), None);
    }

    #[test]
    fn theme_toggle_persists_explicit_value() {
        let store = memory();
        let mut prefs = Preferences::default();
        let gates = FeatureGates::new(4, false);
        toggle_theme(&gates, &mut prefs, &store).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(store.get(KEY_THEME).unwrap().as_deref(), Some("light"));
        toggle_theme(&gates, &mut prefs, &store).unwrap();
        assert_eq!(store.get(KEY_THEME).unwrap().as_deref(), Some("dark"));
        set_theme(&gates, &mut prefs, &store, Theme::Dark).unwrap();
        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn background_gated_at_master() {
        let store = memory();
        let mut prefs = Preferences::default();
        let bg = Background::Solid("#224466".into());
        assert!(set_background(&FeatureGates::new(4, false), &mut prefs, &store, bg.clone()).is_err());
        assert_eq!(prefs.background, None);
        assert_eq!(store.get(KEY_BG_TYPE).unwrap(), None);

        set_background(&FeatureGates::new(5, false), &mut prefs, &store, bg.clone()).unwrap();
        assert_eq!(prefs.background, Some(bg.clone()));
        assert_eq!(store.load().background, Some(bg));
    }

    #[test]
    fn reset_background_works_at_any_level() {
        let store = memory();
        let mut prefs = Preferences::default();
        set_background(&FeatureGates::new(6, false), &mut prefs, &store, Background::gradient("#000", "#fff")).unwrap();
        reset_background(&mut prefs, &store).unwrap();
        assert_eq!(prefs.background, None);
        assert_eq!(store.load().background, None);
    }

    #[test]
    fn finishing_tutorial_sets_flag() {
        let store = memory();
        let mut prefs = Preferences::default();
        finish_tutorial(&mut prefs, &store).unwrap();
        assert!(prefs.tutorial_seen);
        assert_eq!(store.get(KEY_TUTORIAL_SEEN).unwrap().as_deref(), Some("true"));
        assert!(store.load().tutorial_seen);
    }

    #[test]
    fn failed_theme_write_keeps_session_choice() {
        let store = broken(MemoryStorage::default(), &[KEY_THEME]);
        let mut prefs = Preferences::default();
        let err = set_theme(&FeatureGates::new(4, false), &mut prefs, &store, Theme::Light).unwrap_err();
        assert!(matches!(err, ActionError::Storage(StorageError::Write { ref key, .. }) if key == KEY_THEME));
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn failed_background_write_keeps_session_choice() {
        let store = broken(MemoryStorage::default(), &[KEY_BG_TYPE]);
        let mut prefs = Preferences::default();
        let bg = Background::Solid("#123456".into());
        let err = set_background(&FeatureGates::new(5, false), &mut prefs, &store, bg.clone()).unwrap_err();
        assert!(matches!(err, ActionError::Storage(StorageError::Write { .. })));
        assert_eq!(prefs.background, Some(bg));
        assert_eq!(store.load().background, None);
    }

    #[test]
    fn reset_clears_remaining_keys_when_one_removal_fails() {
        let inner = MemoryStorage::default();
        inner.set(KEY_BG_TYPE, "solid").unwrap();
        inner.set(KEY_BG_VALUE, "#123456").unwrap();
        inner.set(KEY_LEGACY_BG, "old.png").unwrap();
        let store = broken(inner, &[KEY_BG_TYPE]);
        let mut prefs = store.load();
        assert_eq!(prefs.background, Some(Background::Solid("#123456".into())));

        let err = reset_background(&mut prefs, &store).unwrap_err();
        assert!(matches!(err, ActionError::Storage(StorageError::Remove { ref key, .. }) if key == KEY_BG_TYPE));
        assert_eq!(prefs.background, None);
        assert_eq!(store.get(KEY_BG_VALUE).unwrap(), None);
        assert_eq!(store.get(KEY_LEGACY_BG).unwrap(), None);
        // A reload must not bring the old background back.
        assert_eq!(store.load().background, None);
    }
}
