//! Kanban Board App
//!
//! Root component: owns the store, loads tasks on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{BoardView, NewTaskForm};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::store::{store_replace_board, BoardState, BoardStateStoreFields};
use crate::sync;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(config, set_reload_trigger);
    provide_context(ctx);

    // Load tasks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading tasks, trigger={}", trigger);
        let api = ctx.api();
        spawn_local(async move {
            if let Some(board) = sync::load_all(&api).await {
                store_replace_board(&store, board);
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Board"</h1>
                <button class="reload-btn" title="Reload from server" on:click=move |_| ctx.reload()>"⟳"</button>
            </header>

            <NewTaskForm />

            <BoardView />

            <p class="task-count">{move || format!("{} tasks", store.board().with(|b| b.len()))}</p>
        </div>
    }
}
