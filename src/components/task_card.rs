//! Task Card Component
//!
//! One draggable task inside a column.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::{ColumnId, Task};

/// Due date in the browser's locale format
#[cfg(target_arch = "wasm32")]
fn format_due_date(due: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(due.timestamp_millis() as f64));
    date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn format_due_date(due: DateTime<Utc>) -> String {
    due.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string()
}

/// Card for one task. Hovering it during a drag targets the slot before it.
#[component]
pub fn TaskCard(
    task: Task,
    /// Where this card currently sits
    slot: Slot<ColumnId>,
    dnd: DndSignals<ColumnId>,
) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, slot);
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = move || {
        let mut c = String::from("task-card");
        if dnd.dragging() == Some(slot) { c.push_str(" dragging"); }
        if dnd.is_target(slot) { c.push_str(" drop-target"); }
        c
    };

    let due = task.due_date.map(format_due_date);
    let assignee = task.assignee_label().map(str::to_string);

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <p class="task-content">{task.content}</p>
            {due.map(|d| view! { <span class="task-meta">"Due: " {d}</span> })}
            {assignee.map(|a| view! { <span class="task-meta">"Assigned to: " {a}</span> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::draft::local_midnight;
    use chrono::NaiveDate;

    #[test]
    fn test_format_due_date_shows_picked_day() {
        let due = local_midnight(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap();
        assert_eq!(format_due_date(due), "2024-03-01");
    }
}
