use yew::prelude::*;

use crate::model::CosmeticTier;
use crate::state::{HabitId, HabitItem};

#[derive(Properties, PartialEq, Clone)]
pub struct HabitListProps {
    pub items: Vec<HabitItem>,
    pub on_toggle: Callback<HabitId>,
    pub on_delete: Callback<HabitId>,
}

#[function_component]
pub fn HabitList(props: &HabitListProps) -> Html {
    let rows = props.items.iter().map(|item| {
        let id = item.id;
        let toggle_cb = {
            let cb = props.on_toggle.clone();
            Callback::from(move |_| cb.emit(id))
        };
        let delete_cb = {
            let cb = props.on_delete.clone();
            Callback::from(move |_| cb.emit(id))
        };
        let class = classes!(
            "habit-item",
            item.completed.then_some("completed"),
            (item.tier == Some(CosmeticTier::Elevated)).then_some("warrior-impact"),
        );
        html! { <li key={id.0} {class} style="display:flex; align-items:center; gap:10px;">
            <div class="habit-content" onclick={toggle_cb} style="flex:1; display:flex; align-items:center; gap:10px; cursor:pointer;">
                <div class="habit-icon"><i class={classes!("fa-solid", item.icon.clone())}></i></div>
                <span class="habit-text">{ item.text.clone() }</span>
            </div>
            <button class="delete-btn" onclick={delete_cb} title="Delete"><i class="fa-solid fa-trash"></i></button>
        </li> }
    });
    html! { <ul id="habit-list" style="list-style:none; margin:0; padding:0 16px; display:flex; flex-direction:column; gap:8px;">
        { for rows }
    </ul> }
}
