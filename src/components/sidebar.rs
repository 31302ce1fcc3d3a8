use yew::prelude::*;

use crate::projection::{RowAction, SidebarRow};

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub open: bool,
    pub rows: Vec<SidebarRow>,
    pub show_settings: bool,
    pub on_close: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_open_background: Callback<()>,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let background_cb = {
        let cb = props.on_open_background.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = props.rows.iter().map(|row| {
        let class = classes!("level-row", row.unlocked.then_some("unlocked"), row.is_current.then_some("current"));
        let (onclick, hint, title) = match row.action {
            RowAction::ToggleTheme { light_active } => {
                let cb = props.on_toggle_theme.clone();
                let hint = if light_active { " (active: light)" } else { " (click to enable)" };
                (Some(Callback::from(move |_: MouseEvent| cb.emit(()))), Some(hint), Some("Click to switch light/dark theme"))
            }
            RowAction::CustomizeBackground => {
                let cb = props.on_open_background.clone();
                (Some(Callback::from(move |_: MouseEvent| cb.emit(()))), Some(" (or use the settings below)"), Some("Customize background"))
            }
            RowAction::None => (None, None, None),
        };
        let clickable = onclick.is_some();
        html! { <li key={row.level} {class} {onclick} {title} style={if clickable { "cursor:pointer;" } else { "" }}>
            <div class="level-badge"><i class={classes!("fa-solid", row.icon)}></i></div>
            <div class="level-details">
                <h4>
                    { format!("LV.{} {}", row.level, row.title) }
                    if let Some(h) = hint { <span style="font-size:0.7rem; opacity:0.8;">{ h }</span> }
                </h4>
                <p>{ row.reward }</p>
                if row.action == RowAction::None {
                    <p style="font-size:0.7rem; opacity:0.6;">{ format!("XP required: {}", row.xp_required) }</p>
                }
            </div>
        </li> }
    });

    html! {<>
        <div id="overlay" class={classes!("overlay", props.open.then_some("active"))} onclick={close_cb.clone()}></div>
        <aside id="sidebar" class={classes!("sidebar", props.open.then_some("active"))}>
            <div style="display:flex; justify-content:space-between; align-items:center; padding:12px 16px;">
                <h3 style="margin:0;">{"Level Rewards"}</h3>
                <button onclick={close_cb}><i class="fa-solid fa-xmark"></i></button>
            </div>
            <ul id="level-list" style="list-style:none; margin:0; padding:0 12px; display:flex; flex-direction:column; gap:8px;">
                { for rows }
            </ul>
            if props.show_settings {
                <div id="sidebar-settings" style="padding:12px 16px;">
                    <button onclick={background_cb} style="width:100%;"><i class="fa-solid fa-gear"></i>{" Customize background"}</button>
                </div>
            }
        </aside>
    </>}
}
