use yew::prelude::*;

use crate::state::{TutorialCursor, TUTORIAL_STEPS};

#[derive(Properties, PartialEq, Clone)]
pub struct TutorialOverlayProps {
    pub show: bool,
    pub cursor: TutorialCursor,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_finish: Callback<()>,
}

#[function_component(TutorialOverlay)]
pub fn tutorial_overlay(props: &TutorialOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let step = props.cursor.current();
    let prev_btn = {
        let cb = props.on_prev.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next_btn = {
        let cb = if props.cursor.is_last() { props.on_finish.clone() } else { props.on_next.clone() };
        Callback::from(move |_| cb.emit(()))
    };
    let dots = (0..TUTORIAL_STEPS.len()).map(|i| {
        html! { <div class={classes!("dot", (i == props.cursor.index()).then_some("active"))}></div> }
    });
    html! {
        <div id="tutorial-overlay" class="tutorial-overlay active" style="position:fixed; inset:0; display:flex; align-items:flex-end; justify-content:center; z-index:70; pointer-events:none;">
            <div class="tutorial-card" style="margin-bottom:32px; padding:20px 28px; border-radius:14px; max-width:520px; width:90%; pointer-events:auto;">
                <h3 id="tut-title" style="margin:0 0 8px 0;">{ step.title }</h3>
                <p id="tut-desc" style="margin:0 0 12px 0; line-height:1.4;">{ step.description }</p>
                <div id="tut-dots" style="display:flex; gap:6px; justify-content:center; margin-bottom:12px;">{ for dots }</div>
                <div style="display:flex; justify-content:space-between;">
                    if props.cursor.is_first() {
                        <span></span>
                    } else {
                        <button id="tut-prev-btn" onclick={prev_btn}><i class="fa-solid fa-chevron-left"></i>{" Back"}</button>
                    }
                    if props.cursor.is_last() {
                        <button id="tut-next-btn" onclick={next_btn}>{"Start adventure "}<i class="fa-solid fa-check"></i></button>
                    } else {
                        <button id="tut-next-btn" onclick={next_btn}>{"Next "}<i class="fa-solid fa-chevron-right"></i></button>
                    }
                </div>
            </div>
        </div>
    }
}
