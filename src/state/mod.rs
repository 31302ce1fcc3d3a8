pub mod habits;
pub mod preferences;
pub mod settings;
pub mod tutorial;

pub use habits::{HabitId, HabitItem, HABIT_ICONS};
pub use preferences::{Background, PreferenceStore, Theme};
pub use tutorial::{TutorialCursor, TUTORIAL_STEPS};
