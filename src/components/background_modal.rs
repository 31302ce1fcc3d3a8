use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::Background;

#[derive(Properties, PartialEq, Clone)]
pub struct BackgroundModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_apply: Callback<Background>,
    pub on_reset: Callback<()>,
}

fn picked(node: &NodeRef, fallback: &str) -> String {
    node.cast::<HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_else(|| fallback.to_string())
}

#[function_component]
pub fn BackgroundModal(props: &BackgroundModalProps) -> Html {
    let solid_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let solid_cb = {
        let cb = props.on_apply.clone();
        let solid_ref = solid_ref.clone();
        Callback::from(move |_| cb.emit(Background::Solid(picked(&solid_ref, "#1a1a2e"))))
    };
    let gradient_cb = {
        let cb = props.on_apply.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        Callback::from(move |_| {
            let start = picked(&start_ref, "#0f2027");
            let end = picked(&end_ref, "#2c5364");
            cb.emit(Background::gradient(&start, &end))
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div id="theme-modal" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div class="modal-card" style="border-radius:12px; padding:16px 20px; min-width:320px; max-width:460px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Custom Background"}</h3>
                <button onclick={close_cb}>{"Close"}</button>
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                <span style="flex:1;">{"Solid color"}</span>
                <input ref={solid_ref} id="solid-color-picker" type="color" value="#1a1a2e" />
                <button onclick={solid_cb}>{"Apply"}</button>
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                <span style="flex:1;">{"Gradient"}</span>
                <input ref={start_ref} id="grad-start" type="color" value="#0f2027" />
                <input ref={end_ref} id="grad-end" type="color" value="#2c5364" />
                <button onclick={gradient_cb}>{"Apply"}</button>
            </div>
            <button onclick={reset_cb}>{"Restore default background"}</button>
        </div>
    </div>}
}
