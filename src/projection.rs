//! Render-ready view models derived from progression and preferences.
//! Pure functions; recomputed on every state change.

use crate::error::ActionError;
use crate::model::{
    definition_for, max_level, Progression, BACKGROUND_UNLOCK_LEVEL, LEGENDARY_UNLOCK_LEVEL, LEVELS,
    THEME_UNLOCK_LEVEL,
};
use crate::state::preferences::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct HudView {
    pub level_label: String,
    pub icon: &'static str,
    pub badge_tier: u32,
    pub xp_bar_percent: f64,
    /// `"<xp> / <required>"`, with xp clamped to the requirement.
    pub xp_label: String,
}

pub fn hud(progression: &Progression) -> HudView {
    let snap = progression.snapshot();
    let def = definition_for(snap.level);
    let shown = snap.xp.min(snap.xp_required);
    HudView {
        level_label: format!("LV. {} {}", snap.level, def.title),
        icon: def.icon,
        badge_tier: snap.level.min(max_level()),
        xp_bar_percent: shown as f64 / snap.xp_required as f64 * 100.0,
        xp_label: format!("{} / {}", shown, snap.xp_required),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    None,
    ToggleTheme { light_active: bool },
    CustomizeBackground,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarRow {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub reward: &'static str,
    pub xp_required: u32,
    pub unlocked: bool,
    pub is_current: bool,
    pub action: RowAction,
}

pub fn sidebar_rows(progression: &Progression, theme: Theme) -> Vec<SidebarRow> {
    let current = progression.level();
    LEVELS
        .iter()
        .map(|def| {
            let unlocked = current >= def.level;
            let action = match def.level {
                THEME_UNLOCK_LEVEL if unlocked => RowAction::ToggleTheme { light_active: theme == Theme::Light },
                BACKGROUND_UNLOCK_LEVEL if unlocked => RowAction::CustomizeBackground,
                _ => RowAction::None,
            };
            SidebarRow {
                level: def.level,
                title: def.title,
                icon: def.icon,
                reward: def.reward,
                xp_required: def.xp_required,
                unlocked,
                is_current: current == def.level,
                action,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    ThemeToggle,
    CustomBackground,
}

impl Feature {
    pub fn required_level(self) -> u32 {
        match self {
            Feature::ThemeToggle => THEME_UNLOCK_LEVEL,
            Feature::CustomBackground => BACKGROUND_UNLOCK_LEVEL,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Feature::ThemeToggle => "theme switching",
            Feature::CustomBackground => "custom backgrounds",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureGates {
    pub can_toggle_theme: bool,
    pub can_customize_background: bool,
    pub legendary_mode_active: bool,
}

impl FeatureGates {
    /// `legendary_latch` keeps legendary mode on once it has fired this session.
    pub fn new(level: u32, legendary_latch: bool) -> Self {
        Self {
            can_toggle_theme: level >= THEME_UNLOCK_LEVEL,
            can_customize_background: level >= BACKGROUND_UNLOCK_LEVEL,
            legendary_mode_active: legendary_latch || level >= LEGENDARY_UNLOCK_LEVEL,
        }
    }

    pub fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::ThemeToggle => self.can_toggle_theme,
            Feature::CustomBackground => self.can_customize_background,
        }
    }

    pub fn require(&self, feature: Feature) -> Result<(), ActionError> {
        if self.allows(feature) {
            return Ok(());
        }
        let required_level = feature.required_level();
        Err(ActionError::Locked {
            feature: feature.label(),
            required_level,
            required_title: definition_for(required_level).title,
        })
    }
}
