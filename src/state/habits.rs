// Habit list owned by the session; nothing here is persisted.
use tracing::debug;

use crate::model::CosmeticTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HabitId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitItem {
    pub id: HabitId,
    pub text: String,
    pub icon: String,
    pub completed: bool,
    /// Effect tier the item was completed with, cleared when undone.
    pub tier: Option<CosmeticTier>,
}

/// Raised by a toggle so the caller can move XP; the registry itself never
/// touches progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HabitEvent {
    Completed,
    Uncompleted,
}

/// Icons offered by the habit input picker. The first is the default.
pub const HABIT_ICONS: &[(&str, &str)] = &[
    ("fa-dumbbell", "Workout"),
    ("fa-code", "Code"),
    ("fa-book", "Read"),
    ("fa-droplet", "Hydrate"),
    ("fa-bed", "Sleep"),
    ("fa-person-running", "Run"),
    ("fa-leaf", "Mindful"),
    ("fa-music", "Music"),
];

const SEED_HABITS: &[(&str, &str)] = &[("Morning workout", "fa-dumbbell"), ("Learn to code", "fa-code")];

/// Most-recent-first list of habits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HabitRegistry {
    items: Vec<HabitItem>,
    next_id: u32,
}

impl HabitRegistry {
    pub fn seeded() -> Self {
        let mut reg = Self::default();
        for (text, icon) in SEED_HABITS {
            reg.add(text, icon);
        }
        reg
    }

    pub fn items(&self) -> &[HabitItem] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: HabitId) -> Option<&HabitItem> {
        self.items.iter().find(|h| h.id == id)
    }

    /// Inserts at the front. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str, icon: &str) -> Option<HabitId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank habit");
            return None;
        }
        let id = HabitId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.items.insert(
            0,
            HabitItem { id, text: text.to_string(), icon: icon.to_string(), completed: false, tier: None },
        );
        Some(id)
    }

    pub fn toggle(&mut self, id: HabitId) -> Option<HabitEvent> {
        let item = self.items.iter_mut().find(|h| h.id == id)?;
        item.completed = !item.completed;
        if item.completed {
            Some(HabitEvent::Completed)
        } else {
            item.tier = None;
            Some(HabitEvent::Uncompleted)
        }
    }

    pub fn set_tier(&mut self, id: HabitId, tier: CosmeticTier) {
        if let Some(item) = self.items.iter_mut().find(|h| h.id == id && h.completed) {
            item.tier = Some(tier);
        }
    }

    /// Removes and returns the item; callers refund XP if it was completed.
    pub fn remove(&mut self, id: HabitId) -> Option<HabitItem> {
        let pos = self.items.iter().position(|h| h.id == id)?;
        Some(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_open_and_last_seed_first() {
        let reg = HabitRegistry::seeded();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.items()[0].text, "Learn to code");
        assert!(reg.items().iter().all(|h| !h.completed));
    }

    #[test]
    fn add_trims_and_prepends() {
        let mut reg = HabitRegistry::default();
        reg.add("first", "fa-book");
        let id = reg.add("  second  ", "fa-leaf").unwrap();
        assert_eq!(reg.items()[0].id, id);
        assert_eq!(reg.items()[0].text, "second");
        assert_eq!(reg.items()[0].icon, "fa-leaf");
    }

    #[test]
    fn blank_text_is_ignored() {
        let mut reg = HabitRegistry::default();
        assert_eq!(reg.add("", "fa-book"), None);
        assert_eq!(reg.add(" \t\n", "fa-book"), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn toggle_reports_direction_and_clears_tier() {
        let mut reg = HabitRegistry::default();
        let id = reg.add("read", "fa-book").unwrap();
        assert_eq!(reg.toggle(id), Some(HabitEvent::Completed));
        reg.set_tier(id, CosmeticTier::Elevated);
        assert_eq!(reg.get(id).unwrap().tier, Some(CosmeticTier::Elevated));
        assert_eq!(reg.toggle(id), Some(HabitEvent::Uncompleted));
        assert_eq!(reg.get(id).unwrap().tier, None);
        assert_eq!(reg.toggle(HabitId(999)), None);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut reg = HabitRegistry::default();
        let a = reg.add("a", "fa-book").unwrap();
        reg.remove(a);
        let b = reg.add("b", "fa-book").unwrap();
        assert_ne!(a, b);
        assert!(reg.remove(a).is_none());
    }
}
