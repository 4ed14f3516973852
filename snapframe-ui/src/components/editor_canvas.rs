// snapframe-ui/src/components/editor_canvas.rs
use leptos::*;
use snapframe_core::TransformController;

use crate::hooks::use_canvas_gestures;

/// The interactive composition surface.
///
/// The canvas element itself; its backing dimensions are set by the app
/// once the first template defines the frame. The cursor mirrors the
/// interaction state: wait while a template loads, grab/grabbing once a
/// photo can be dragged.
#[component]
pub fn EditorCanvas(
    /// Node ref owned by the app, which also repaints and exports through it.
    canvas_ref: NodeRef<leptos::html::Canvas>,
    controller: StoredValue<Option<TransformController>>,
    has_photo: Signal<bool>,
    /// True while a template load is in flight.
    is_busy: Signal<bool>,
    on_repaint: Callback<()>,
) -> impl IntoView {
    let gestures = use_canvas_gestures(canvas_ref, controller, move || on_repaint.call(()));

    let cursor = move || {
        if is_busy.get() {
            "wait"
        } else if !has_photo.get() {
            "default"
        } else if gestures.is_dragging.get() {
            "grabbing"
        } else {
            "grab"
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class="block max-w-full h-auto touch-none select-none"
            style=move || format!("cursor: {};", cursor())
        />
    }
}
