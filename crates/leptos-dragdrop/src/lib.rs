//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop between ordered lists for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Lists are identified by a caller-chosen key `K` (a column id, say).
//! Positions are plain indices into the list as currently rendered.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position in one of the lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<K> {
    pub list: K,
    pub index: usize,
}

impl<K> Slot<K> {
    pub fn new(list: K, index: usize) -> Self {
        Self { list, index }
    }
}

/// Result of a finished drag.
///
/// `destination.index` follows the post-removal convention: it is the index
/// the item should occupy once it has been taken out of its source list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd<K> {
    pub source: Slot<K>,
    pub destination: Option<Slot<K>>,
}

impl<K: PartialEq> DragEnd<K> {
    /// Build a drag result from the raw hovered slot.
    ///
    /// Raw slots mean "insert before the item currently at `index`". Within
    /// the same list, every slot past the source shifts down by one once the
    /// source is removed.
    pub fn resolve(source: Slot<K>, hovered: Option<Slot<K>>) -> Self {
        let destination = hovered.map(|slot| {
            if slot.list == source.list && slot.index > source.index {
                Slot { list: slot.list, index: slot.index - 1 }
            } else {
                slot
            }
        });
        Self { source, destination }
    }

    /// True when the drop would leave the item where it started
    pub fn is_noop(&self) -> bool {
        match &self.destination {
            None => true,
            Some(dest) => dest.list == self.source.list && dest.index == self.source.index,
        }
    }
}

/// DnD state signals
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<Slot<K>>>,
    pub dragging_write: WriteSignal<Option<Slot<K>>>,
    pub drop_target_read: ReadSignal<Option<Slot<K>>>,
    pub drop_target_write: WriteSignal<Option<Slot<K>>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<Slot<K>>>,
    pub pending_write: WriteSignal<Option<Slot<K>>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

// Signals are arena handles, so copying never requires `K: Copy`.
impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

impl<K> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    /// Source slot of the item currently being dragged
    pub fn dragging(&self) -> Option<Slot<K>> {
        self.dragging_read.get()
    }

    /// Is this exact slot the hovered drop target?
    pub fn is_target(&self, slot: Slot<K>) -> bool {
        self.drop_target_read.get() == Some(slot)
    }

    /// Is any drag in progress?
    pub fn is_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K: Send + Sync + 'static>() -> DndSignals<K> {
    let (dragging_read, dragging_write) = signal(None::<Slot<K>>);
    let (drop_target_read, drop_target_write) = signal(None::<Slot<K>>);
    let (pending_read, pending_write) = signal(None::<Slot<K>>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has travelled far enough to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<K: Send + Sync + 'static>(dnd: &DndSignals<K>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, source: Slot<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(source));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop slot (a card or a zone)
pub fn make_on_slot_mouseenter<K>(dnd: DndSignals<K>, slot: Slot<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` fires for every real drag, with `destination: None` when the
/// pointer was released outside any slot. Plain clicks never reach it.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragEnd<K>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let hovered = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        if let Some(source) = dragging {
            on_drop(DragEnd::resolve(source, hovered));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_other_list_keeps_index() {
        let end = DragEnd::resolve(Slot::new('a', 0), Some(Slot::new('b', 3)));
        assert_eq!(end.destination, Some(Slot::new('b', 3)));
        assert!(!end.is_noop());
    }

    #[test]
    fn test_resolve_same_list_shifts_slots_after_source() {
        // Item 1 dropped before item 3: lands at 2 after removal
        let end = DragEnd::resolve(Slot::new('a', 1), Some(Slot::new('a', 3)));
        assert_eq!(end.destination, Some(Slot::new('a', 2)));

        // Slots before the source are unaffected
        let end = DragEnd::resolve(Slot::new('a', 2), Some(Slot::new('a', 0)));
        assert_eq!(end.destination, Some(Slot::new('a', 0)));
    }

    #[test]
    fn test_resolve_onto_self_is_noop() {
        // Before itself and directly after itself both mean "stay"
        assert!(DragEnd::resolve(Slot::new('a', 2), Some(Slot::new('a', 2))).is_noop());
        assert!(DragEnd::resolve(Slot::new('a', 2), Some(Slot::new('a', 3))).is_noop());
    }

    #[test]
    fn test_resolve_without_target() {
        let end = DragEnd::resolve(Slot::new('a', 0), None);
        assert_eq!(end.destination, None);
        assert!(end.is_noop());
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
