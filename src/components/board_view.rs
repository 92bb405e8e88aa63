//! Board View Component
//!
//! Lays out the columns and turns finished drags into board moves.
//! Cross-column moves are applied locally first, then sent to the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ColumnCard;
use crate::context::AppContext;
use crate::models::ColumnId;
use crate::store::{store_apply_drag, use_board_store};
use crate::sync;

use leptos_dragdrop::*;

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let dnd = create_dnd_signals::<ColumnId>();

    bind_global_mouseup(dnd, move |drag: DragEnd<ColumnId>| {
        log::debug!("[DND] Drag end: {:?}", drag);
        let Some(task) = store_apply_drag(&store, &drag) else { return; };

        // Fire and forget: a failed update leaves the local move in place
        let api = ctx.api();
        let status = task.status;
        spawn_local(async move {
            sync::persist_move(&api, &task, status).await;
        });
    });

    let board_class = move || if dnd.is_active() { "board dragging" } else { "board" };

    view! {
        <div class=board_class>
            {ColumnId::ALL
                .into_iter()
                .map(|column_id| view! { <ColumnCard column_id=column_id dnd=dnd /> })
                .collect_view()}
        </div>
    }
}
