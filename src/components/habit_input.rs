use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::HABIT_ICONS;

#[derive(Properties, PartialEq, Clone)]
pub struct HabitInputProps {
    pub on_add: Callback<(String, String)>,
}

/// Text field, icon dropdown and "+" button. Enter submits too.
#[function_component]
pub fn HabitInput(props: &HabitInputProps) -> Html {
    let input_ref = use_node_ref();
    let icon = use_state(|| HABIT_ICONS[0].0);
    let open = use_state(|| false);

    let submit = {
        let input_ref = input_ref.clone();
        let icon = icon.clone();
        let cb = props.on_add.clone();
        Rc::new(move || {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let text = input.value();
                if !text.trim().is_empty() {
                    cb.emit((text, (*icon).to_string()));
                    input.set_value("");
                }
            }
        })
    };
    let add_cb = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let key_cb = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit();
            }
        })
    };
    let toggle_open = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let options = HABIT_ICONS.iter().map(|(value, label)| {
        let pick = {
            let icon = icon.clone();
            let open = open.clone();
            let value = *value;
            Callback::from(move |_| {
                icon.set(value);
                open.set(false);
            })
        };
        let selected = *icon == *value;
        html! { <div class={classes!("custom-option", selected.then_some("selected"))} title={*label} onclick={pick}>
            <i class={classes!("fa-solid", *value)}></i>
        </div> }
    });

    html! {<div class="input-group" style="display:flex; gap:8px; padding:0 16px; position:relative;">
        <div class={classes!("custom-select", (*open).then_some("open"))} style="position:relative;">
            <button class="select-trigger" onclick={toggle_open}><i class={classes!("fa-solid", *icon)}></i></button>
            if *open {
                <div class="custom-options" style="position:absolute; top:110%; left:0; display:grid; grid-template-columns:repeat(4, 36px); gap:4px; padding:6px; z-index:20;">
                    { for options }
                </div>
            }
        </div>
        <input ref={input_ref} id="habit-input" type="text" placeholder="Add a new mission..." onkeypress={key_cb} style="flex:1;" />
        <button class="add-btn" onclick={add_cb}><i class="fa-solid fa-plus"></i></button>
    </div>}
}
