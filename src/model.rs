//! Core data models for Habitual Adventure.
//! Level catalog, the XP/level progression machine and the reducer that ties
//! habit toggles to progression.

use std::rc::Rc;
use tracing::{debug, info};
use yew::Reducible;

use crate::state::habits::{HabitEvent, HabitId, HabitRegistry};

/// XP granted for completing one habit (and refunded when it is undone).
pub const XP_PER_TASK: u32 = 20;
pub const ELEVATED_EFFECT_LEVEL: u32 = 3;
pub const THEME_UNLOCK_LEVEL: u32 = 4;
pub const BACKGROUND_UNLOCK_LEVEL: u32 = 5;
pub const LEGENDARY_UNLOCK_LEVEL: u32 = 6;
/// Delay before the onboarding tutorial opens for first-time visitors.
pub const TUTORIAL_DELAY_MS: i32 = 1000;
/// Wall-clock length of the level-up celebration loop.
pub const LEVEL_UP_EFFECT_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelDefinition {
    pub level: u32,
    /// XP needed to advance from this level to the next.
    pub xp_required: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub reward: &'static str,
}

/// Sorted by level, contiguous from 1. The last entry is the max level.
pub const LEVELS: &[LevelDefinition] = &[
    LevelDefinition { level: 1, xp_required: 100, title: "Novice", icon: "fa-seedling", reward: "Start: basic habit tracking unlocked" },
    LevelDefinition { level: 2, xp_required: 150, title: "Apprentice", icon: "fa-scroll", reward: "Reward: earn the Apprentice badge" },
    LevelDefinition { level: 3, xp_required: 220, title: "Warrior", icon: "fa-khanda", reward: "Unlock: fire effects" },
    LevelDefinition { level: 4, xp_required: 300, title: "Knight", icon: "fa-shield-halved", reward: "Reward: light theme unlocked" },
    LevelDefinition { level: 5, xp_required: 400, title: "Master", icon: "fa-dragon", reward: "Unlock: custom backgrounds" },
    LevelDefinition { level: 6, xp_required: 600, title: "Legend", icon: "fa-crown", reward: "Final goal: become a legend!" },
];

pub fn max_level() -> u32 {
    LEVELS.len() as u32
}

/// Catalog lookup. Out-of-range levels are clamped, so everything at or past
/// the last entry resolves to the max-level plateau.
pub fn definition_for(level: u32) -> &'static LevelDefinition {
    let idx = level.clamp(1, max_level()) as usize - 1;
    &LEVELS[idx]
}

/// Payload shown by the level-up popup; one per level transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub reward: &'static str,
    pub description: String,
}

impl LevelUp {
    fn for_definition(def: &LevelDefinition) -> Self {
        Self {
            level: def.level,
            title: def.title,
            icon: def.icon,
            reward: def.reward,
            description: format!("Congratulations! You earned the \"{}\" badge", def.title),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpSnapshot {
    pub level: u32,
    pub xp: u32,
    pub xp_required: u32,
}

/// Level/XP pair. Level never decreases; XP never goes negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    level: u32,
    xp: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

impl Progression {
    #[cfg(test)]
    pub(crate) fn at(level: u32, xp: u32) -> Self {
        Self { level, xp }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    #[cfg(test)]
    pub(crate) fn xp(&self) -> u32 {
        self.xp
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= max_level()
    }

    /// Adds XP and levels up as many times as the total allows. At the max
    /// level XP keeps accumulating with no further effect.
    pub fn gain_xp(&mut self, amount: u32) -> Vec<LevelUp> {
        self.xp = self.xp.saturating_add(amount);
        let mut level_ups = Vec::new();
        while !self.is_max_level() {
            let required = definition_for(self.level).xp_required;
            if self.xp < required {
                break;
            }
            self.xp -= required;
            self.level += 1;
            let def = definition_for(self.level);
            info!(level = def.level, title = def.title, "level up");
            level_ups.push(LevelUp::for_definition(def));
        }
        level_ups
    }

    /// Removes XP only if enough is banked; never levels down.
    pub fn lose_xp(&mut self, amount: u32) {
        if self.xp >= amount {
            self.xp -= amount;
        } else {
            debug!(xp = self.xp, amount, "xp loss ignored, not enough banked");
        }
    }

    pub fn snapshot(&self) -> XpSnapshot {
        XpSnapshot {
            level: self.level,
            xp: self.xp,
            xp_required: definition_for(self.level).xp_required,
        }
    }
}

/// Which completion effect to play. Purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CosmeticTier {
    Standard,
    Elevated,
}

impl CosmeticTier {
    pub fn for_level(level: u32) -> Self {
        if level >= ELEVATED_EFFECT_LEVEL { CosmeticTier::Elevated } else { CosmeticTier::Standard }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Burst(CosmeticTier),
    LevelUp,
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    AddHabit { text: String, icon: String },
    ToggleHabit(HabitId),
    DeleteHabit(HabitId),
    DismissLevelUp,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub progression: Progression,
    pub habits: HabitRegistry,
    /// Latched once the legendary level is reached.
    pub legendary: bool,
    /// Popup currently on screen, if any.
    pub level_up: Option<LevelUp>,
    /// Effects queued by the last action; `effects_version` bumps with each batch.
    pub effects: Vec<Effect>,
    pub effects_version: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Progression::default())
    }
}

impl GameState {
    pub fn new(progression: Progression) -> Self {
        let mut state = Self {
            progression,
            habits: HabitRegistry::seeded(),
            legendary: false,
            level_up: None,
            effects: Vec::new(),
            effects_version: 0,
        };
        state.refresh_legendary();
        state
    }

    fn refresh_legendary(&mut self) {
        if !self.legendary && self.progression.level() >= LEGENDARY_UNLOCK_LEVEL {
            info!("legendary mode enabled");
            self.legendary = true;
        }
    }

    fn gain(&mut self, amount: u32) {
        let level_ups = self.progression.gain_xp(amount);
        if let Some(last) = level_ups.into_iter().last() {
            self.effects.push(Effect::LevelUp);
            self.level_up = Some(last);
            self.refresh_legendary();
        }
    }

    /// Applies one action in place.
    pub fn apply(&mut self, action: GameAction) {
        self.effects.clear();
        match action {
            GameAction::AddHabit { text, icon } => {
                self.habits.add(&text, &icon);
            }
            GameAction::ToggleHabit(id) => match self.habits.toggle(id) {
                Some(HabitEvent::Completed) => {
                    let tier = CosmeticTier::for_level(self.progression.level());
                    self.habits.set_tier(id, tier);
                    self.effects.push(Effect::Burst(tier));
                    self.gain(XP_PER_TASK);
                }
                Some(HabitEvent::Uncompleted) => self.progression.lose_xp(XP_PER_TASK),
                None => debug!(?id, "toggle on unknown habit"),
            },
            GameAction::DeleteHabit(id) => {
                if self.habits.remove(id).is_some_and(|item| item.completed) {
                    self.progression.lose_xp(XP_PER_TASK);
                }
            }
            GameAction::DismissLevelUp => self.level_up = None,
        }
        if !self.effects.is_empty() {
            self.effects_version = self.effects_version.wrapping_add(1);
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(level: u32, xp: u32) -> Progression {
        Progression::at(level, xp)
    }

    #[test]
    fn definition_for_clamps_to_catalog() {
        let last = definition_for(max_level());
        assert_eq!(definition_for(0).level, 1);
        assert_eq!(definition_for(1).xp_required, 100);
        assert_eq!(definition_for(max_level() + 1), last);
        assert_eq!(definition_for(u32::MAX), last);
    }

    #[test]
    fn catalog_is_contiguous() {
        for (i, def) in LEVELS.iter().enumerate() {
            assert_eq!(def.level, i as u32 + 1);
            assert!(def.xp_required > 0);
        }
    }

    #[test]
    fn five_gains_reach_level_two() {
        let mut p = Progression::default();
        for _ in 0..4 {
            assert!(p.gain_xp(20).is_empty());
        }
        assert_eq!(p, at(1, 80));
        let ups = p.gain_xp(20);
        assert_eq!(p, at(2, 0));
        assert_eq!(ups.len(), 1);
        assert_eq!(ups[0].level, 2);
        assert_eq!(ups[0].title, "Apprentice");
        assert_eq!(ups[0].icon, "fa-scroll");
    }

    #[test]
    fn large_gain_crosses_several_levels() {
        let mut p = Progression::default();
        let ups = p.gain_xp(100 + 150 + 10);
        assert_eq!(p, at(3, 10));
        assert_eq!(ups.iter().map(|u| u.level).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn max_level_accumulates_without_level_up() {
        let mut p = at(6, 590);
        assert!(p.gain_xp(20).is_empty());
        assert!(p.gain_xp(1000).is_empty());
        assert_eq!(p, at(6, 1610));
    }

    #[test]
    fn loss_floors_at_zero_without_level_down() {
        let mut p = at(2, 20);
        p.lose_xp(20);
        assert_eq!(p, at(2, 0));
        p.lose_xp(20);
        assert_eq!(p, at(2, 0));
    }

    #[test]
    fn loss_larger_than_banked_is_ignored() {
        let mut p = at(1, 10);
        p.lose_xp(20);
        assert_eq!(p, at(1, 10));
    }

    #[test]
    fn xp_non_negative_and_level_monotonic_over_mixed_sequence() {
        let mut p = Progression::default();
        let mut last_level = p.level();
        for step in 0..400u32 {
            if step % 3 == 2 {
                p.lose_xp(XP_PER_TASK);
            } else {
                p.gain_xp(XP_PER_TASK);
            }
            assert!(p.level() >= last_level);
            assert!(p.is_max_level() || p.xp() < p.snapshot().xp_required);
            last_level = p.level();
        }
    }

    #[test]
    fn snapshot_reports_current_requirement() {
        let s = at(3, 40).snapshot();
        assert_eq!(s, XpSnapshot { level: 3, xp: 40, xp_required: 220 });
    }

    #[test]
    fn tier_depends_only_on_level() {
        assert_eq!(CosmeticTier::for_level(2), CosmeticTier::Standard);
        assert_eq!(CosmeticTier::for_level(3), CosmeticTier::Elevated);
        assert_eq!(CosmeticTier::for_level(6), CosmeticTier::Elevated);
    }

    fn first_id(state: &GameState) -> HabitId {
        state.habits.items()[0].id
    }

    #[test]
    fn toggle_pair_is_symmetric() {
        let mut state = GameState::new(at(2, 40));
        let id = first_id(&state);
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.progression, at(2, 60));
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.progression, at(2, 40));
    }

    #[test]
    fn completion_effect_tier_follows_level() {
        let mut low = GameState::new(at(2, 0));
        let id = first_id(&low);
        low.apply(GameAction::ToggleHabit(id));
        assert_eq!(low.effects, vec![Effect::Burst(CosmeticTier::Standard)]);

        let mut high = GameState::new(at(3, 0));
        let id = first_id(&high);
        high.apply(GameAction::ToggleHabit(id));
        assert_eq!(high.effects, vec![Effect::Burst(CosmeticTier::Elevated)]);
        assert_eq!(high.habits.get(id).and_then(|h| h.tier), Some(CosmeticTier::Elevated));
    }

    #[test]
    fn empty_habit_text_changes_nothing() {
        let mut state = GameState::default();
        let before = state.habits.len();
        state.apply(GameAction::AddHabit { text: "   ".into(), icon: "fa-code".into() });
        assert_eq!(state.habits.len(), before);
        assert_eq!(state.progression, Progression::default());
        assert!(state.effects.is_empty());
    }

    #[test]
    fn completing_at_boundary_opens_level_up_popup() {
        let mut state = GameState::new(at(1, 80));
        let id = first_id(&state);
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.progression, at(2, 0));
        assert_eq!(state.level_up.as_ref().map(|l| l.level), Some(2));
        assert!(state.effects.contains(&Effect::LevelUp));
        state.apply(GameAction::DismissLevelUp);
        assert!(state.level_up.is_none());
    }

    #[test]
    fn deleting_completed_habit_refunds_xp() {
        let mut state = GameState::new(at(2, 40));
        let id = first_id(&state);
        state.apply(GameAction::ToggleHabit(id));
        state.apply(GameAction::DeleteHabit(id));
        assert_eq!(state.progression, at(2, 40));
        assert!(state.habits.get(id).is_none());
    }

    #[test]
    fn deleting_open_habit_keeps_xp() {
        let mut state = GameState::new(at(2, 40));
        let id = first_id(&state);
        state.apply(GameAction::DeleteHabit(id));
        assert_eq!(state.progression, at(2, 40));
    }

    #[test]
    fn legendary_latches_on_level_up_and_startup() {
        let mut state = GameState::new(at(5, 380));
        assert!(!state.legendary);
        let id = first_id(&state);
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.progression.level(), 6);
        assert!(state.legendary);
        state.apply(GameAction::ToggleHabit(id));
        assert!(state.legendary);

        assert!(GameState::new(at(6, 0)).legendary);
    }

    #[test]
    fn effects_version_bumps_only_with_effects() {
        let mut state = GameState::default();
        let id = first_id(&state);
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.effects_version, 1);
        state.apply(GameAction::ToggleHabit(id));
        assert_eq!(state.effects_version, 1);
        assert!(state.effects.is_empty());
    }
}
