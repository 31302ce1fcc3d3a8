use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    background_modal::BackgroundModal, habit_input::HabitInput, habit_list::HabitList, hud::Hud,
    level_up_popup::LevelUpPopup, sidebar::Sidebar, tutorial_overlay::TutorialOverlay,
};
use crate::effects;
use crate::error::ActionError;
use crate::model::{GameAction, GameState, TUTORIAL_DELAY_MS};
use crate::projection::{self, FeatureGates};
use crate::state::{settings, Background, PreferenceStore, Theme, TutorialCursor};

const HIGHLIGHT_CLASS: &str = "highlight-element";

fn report(result: Result<(), ActionError>) {
    match result {
        Ok(()) => {}
        Err(e @ ActionError::Locked { .. }) => {
            tracing::info!(reason = %e, "gated action denied");
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&e.to_string());
            }
        }
        Err(ActionError::Storage(e)) => tracing::warn!(error = %e, "preference not persisted"),
    }
}

// Moves the tutorial spotlight class onto `selector`, or clears it.
fn spotlight(selector: Option<&str>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(list) = doc.query_selector_all(&format!(".{}", HIGHLIGHT_CLASS)) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.class_list().remove_1(HIGHLIGHT_CLASS);
            }
        }
    }
    if let Some(sel) = selector {
        if let Ok(Some(el)) = doc.query_selector(sel) {
            let _ = el.class_list().add_1(HIGHLIGHT_CLASS);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| PreferenceStore::browser());
    let prefs = {
        let store = store.clone();
        use_state(move || store.load())
    };
    let game = use_reducer(GameState::default);
    let sidebar_open = use_state(|| false);
    let background_open = use_state(|| false);
    let tutorial_open = use_state(|| false);
    let cursor = use_state(TutorialCursor::default);

    let gates = FeatureGates::new(game.progression.level(), game.legendary);

    // First visit: open the tutorial after a short delay.
    {
        let tutorial_open = tutorial_open.clone();
        let seen = prefs.tutorial_seen;
        use_effect_with((), move |_| {
            let mut pending = None;
            if !seen {
                if let Some(win) = web_sys::window() {
                    let cb = Closure::once(move || tutorial_open.set(true));
                    if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        TUTORIAL_DELAY_MS,
                    ) {
                        pending = Some((win, id, cb));
                    }
                }
            }
            move || {
                if let Some((win, id, _cb)) = pending {
                    win.clear_timeout_with_handle(id);
                }
            }
        });
    }
    // Play effects queued by the last action
    {
        let game = game.clone();
        use_effect_with(game.effects_version, move |_| {
            for effect in &game.effects {
                effects::play(*effect);
            }
            || ()
        });
    }
    // Legendary cursor trail; the latch only ever flips on, so this attaches once.
    use_effect_with(gates.legendary_mode_active, |active| {
        let trail = if *active { effects::LegendaryTrail::attach() } else { None };
        move || drop(trail)
    });
    // Tutorial spotlight
    {
        let step = (*tutorial_open).then(|| cursor.current().highlight).flatten();
        use_effect_with(step, move |step| {
            spotlight(*step);
            || ()
        });
    }

    let on_add = {
        let game = game.clone();
        Callback::from(move |(text, icon): (String, String)| game.dispatch(GameAction::AddHabit { text, icon }))
    };
    let on_toggle = {
        let game = game.clone();
        Callback::from(move |id| game.dispatch(GameAction::ToggleHabit(id)))
    };
    let on_delete = {
        let game = game.clone();
        Callback::from(move |id| game.dispatch(GameAction::DeleteHabit(id)))
    };
    let close_level_up = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::DismissLevelUp))
    };

    let toggle_theme = {
        let prefs = prefs.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let mut next = (*prefs).clone();
            report(settings::toggle_theme(&gates, &mut next, &store));
            prefs.set(next);
        })
    };
    let open_background = {
        let background_open = background_open.clone();
        Callback::from(move |_| {
            if let Err(e) = gates.require(projection::Feature::CustomBackground) {
                report(Err(e));
                return;
            }
            background_open.set(true);
        })
    };
    let close_background = {
        let background_open = background_open.clone();
        Callback::from(move |_| background_open.set(false))
    };
    let apply_background = {
        let prefs = prefs.clone();
        let store = store.clone();
        let background_open = background_open.clone();
        Callback::from(move |bg: Background| {
            let mut next = (*prefs).clone();
            report(settings::set_background(&gates, &mut next, &store, bg));
            prefs.set(next);
            background_open.set(false);
        })
    };
    let reset_background = {
        let prefs = prefs.clone();
        let store = store.clone();
        let background_open = background_open.clone();
        Callback::from(move |_| {
            let mut next = (*prefs).clone();
            report(settings::reset_background(&mut next, &store));
            prefs.set(next);
            background_open.set(false);
        })
    };

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(false))
    };

    let restart_tutorial = {
        let tutorial_open = tutorial_open.clone();
        let cursor = cursor.clone();
        Callback::from(move |_| {
            cursor.set(cursor.restart());
            tutorial_open.set(true);
        })
    };
    let tutorial_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.prev()))
    };
    let tutorial_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.next()))
    };
    let tutorial_finish = {
        let tutorial_open = tutorial_open.clone();
        let prefs = prefs.clone();
        let store = store.clone();
        Callback::from(move |_| {
            tutorial_open.set(false);
            let mut next = (*prefs).clone();
            report(settings::finish_tutorial(&mut next, &store));
            prefs.set(next);
            effects::tutorial_finished();
        })
    };

    let root_class = classes!(
        "app-root",
        (prefs.theme == Theme::Light).then_some("light-theme"),
        gates.legendary_mode_active.then_some("legendary-mode"),
        prefs.background.is_some().then_some("has-custom-bg"),
    );
    let root_style = match &prefs.background {
        Some(bg) if bg.is_gradient() => format!("background:{}; background-attachment:fixed;", bg.css()),
        Some(bg) => format!("background:{};", bg.css()),
        None => String::new(),
    };

    html! {<div class={root_class} style={root_style}>
        <Hud view={projection::hud(&game.progression)} on_open_menu={open_sidebar} on_open_tutorial={restart_tutorial} />
        <HabitInput {on_add} />
        <HabitList items={game.habits.items().to_vec()} {on_toggle} {on_delete} />
        <Sidebar
            open={*sidebar_open}
            rows={projection::sidebar_rows(&game.progression, prefs.theme)}
            show_settings={gates.can_customize_background}
            on_close={close_sidebar}
            on_toggle_theme={toggle_theme}
            on_open_background={open_background}
        />
        <BackgroundModal show={*background_open} on_close={close_background} on_apply={apply_background} on_reset={reset_background} />
        <LevelUpPopup level_up={game.level_up.clone()} on_close={close_level_up} />
        <TutorialOverlay show={*tutorial_open} cursor={*cursor} on_prev={tutorial_prev} on_next={tutorial_next} on_finish={tutorial_finish} />
    </div>}
}
