use yew::prelude::*;

use crate::projection::HudView;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub view: HudView,
    pub on_open_menu: Callback<()>,
    pub on_open_tutorial: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let menu_cb = {
        let cb = props.on_open_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let tutorial_cb = {
        let cb = props.on_open_tutorial.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let v = &props.view;
    html! {<header style="display:flex; align-items:center; gap:12px; padding:12px 16px;">
        <button class="menu-btn" onclick={menu_cb} title="Level rewards"><i class="fa-solid fa-bars"></i></button>
        <div class="hud-display" style="flex:1; display:flex; flex-direction:column; gap:6px;">
            <div id="level-display" style="font-weight:600;">
                <i class={classes!("fa-solid", v.icon, "hud-level-icon", format!("badge-lv{}", v.badge_tier))}></i>
                { format!(" {}", v.level_label) }
            </div>
            <div class="xp-track" style="height:10px; border-radius:5px; overflow:hidden;">
                <div id="xp-bar" class="xp-fill" style={format!("width:{}%; height:100%; transition:width 0.3s;", v.xp_bar_percent)}></div>
            </div>
            <div id="xp-text" style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("{} XP", v.xp_label) }</div>
        </div>
        <button class="tutorial-btn" onclick={tutorial_cb} title="Adventure guide"><i class="fa-solid fa-book-open"></i></button>
    </header>}
}
