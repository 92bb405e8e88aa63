//! New Task Form Component
//!
//! Content, due date and assignee inputs; tasks always start in the first column.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{store_push_task, store_update_draft, use_board_store, BoardStateStoreFields};
use crate::sync;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let (saving, set_saving) = signal(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.draft().get_untracked();
        if draft.to_new_task().is_none() { return; }

        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            if let Some(task) = sync::create_task(&api, &draft).await {
                store_push_task(&store, task);
                store_update_draft(&store, |d| d.clear());
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="task-content-input"
                placeholder="New task"
                prop:value=move || store.draft().read().content.clone()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store_update_draft(&store, |d| d.content = value);
                }
            />
            <input
                type="date"
                class="task-date-input"
                title="Due date"
                prop:value=move || store.draft().read().due_date_input()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store_update_draft(&store, |d| d.set_due_date_input(&value));
                }
            />
            <input
                type="text"
                class="task-assignee-input"
                placeholder="Assignee"
                prop:value=move || store.draft().read().assignee.clone()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store_update_draft(&store, |d| d.assignee = value);
                }
            />
            <button type="submit" disabled=move || saving.get()>"Add Task"</button>
        </form>
    }
}
