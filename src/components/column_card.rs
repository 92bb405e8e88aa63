//! Column Card Component
//!
//! Header with the column's icon and color, its tasks, and a trailing drop zone.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DropZone, DropZoneProps, TaskCard, TaskCardProps};
use crate::models::ColumnId;
use crate::store::{store_column_tasks, use_board_store, BoardStateStoreFields};

#[component]
pub fn ColumnCard(column_id: ColumnId, dnd: DndSignals<ColumnId>) -> impl IntoView {
    let store = use_board_store();
    let (name, icon, color) = store.board().with_untracked(|b| {
        let column = b.column(column_id);
        (column.name, column.icon, column.color)
    });

    let tasks = move || store_column_tasks(&store, column_id);
    let count = move || store.board().with(|b| b.column(column_id).items.len());

    view! {
        <section class="column-card">
            <div class="column-title-row">
                <h2 class="column-title">{name}</h2>
                <span class="column-count">{count}</span>
            </div>
            <div class="column-banner" style=format!("background-color: {};", color)>
                {icon} " " {name}
            </div>

            <div class="column-items">
                <For
                    each=move || tasks().into_iter().enumerate()
                    key=|(index, task)| {
                        // Index is part of the key so moved cards re-render with fresh slots
                        (*index, task.id.clone(), task.status)
                    }
                    children=move |(index, task)| {
                        // `slot` is reserved in view!, so build the props directly
                        TaskCard(
                            TaskCardProps::builder()
                                .task(task)
                                .slot(Slot::new(column_id, index))
                                .dnd(dnd)
                                .build(),
                        )
                    }
                />

                {move || DropZone(DropZoneProps::builder().dnd(dnd).slot(Slot::new(column_id, count())).build())}
            </div>
        </section>
    }
}
