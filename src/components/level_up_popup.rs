use yew::prelude::*;

use crate::model::LevelUp;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelUpPopupProps {
    pub level_up: Option<LevelUp>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn LevelUpPopup(props: &LevelUpPopupProps) -> Html {
    let Some(lu) = &props.level_up else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="level-up-popup" class="popup active" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:60;">
            <div class="popup-card" style="padding:28px 36px; border-radius:14px; text-align:center; min-width:300px;">
                <h2 style="margin:0 0 8px 0;">{"LEVEL UP!"}</h2>
                <div class="level-up-badge" style="font-size:48px; margin:12px 0;"><i class={classes!("fa-solid", lu.icon)}></i></div>
                <h3 id="level-up-rank" style="margin:4px 0;">{ format!("LV.{} {}", lu.level, lu.title) }</h3>
                <p id="level-up-desc" style="margin:4px 0;">{ lu.description.clone() }</p>
                <p style="margin:4px 0; font-size:12px; opacity:0.75;">{ lu.reward }</p>
                <button onclick={close_cb} style="margin-top:12px;">{"Continue"}</button>
            </div>
        </div>
    }
}
