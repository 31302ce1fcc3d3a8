pub mod app;
pub mod background_modal;
pub mod habit_input;
pub mod habit_list;
pub mod hud;
pub mod level_up_popup;
pub mod sidebar;
pub mod tutorial_overlay;
