//! Drop Zone Component
//!
//! Target at the end of a column, so a task can be dropped after the last card
//! or into an empty column.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::ColumnId;

#[component]
pub fn DropZone(
    dnd: DndSignals<ColumnId>,
    /// Insertion slot this zone stands for
    slot: Slot<ColumnId>,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_active() { c.push_str(" idle"); }
        if dnd.is_target(slot) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
