//! Canvas gesture wiring: DOM events into the transform controller.
//!
//! All listeners convert client coordinates to canvas backing pixels
//! before the controller sees them, so the controller never touches a DOM
//! type. Events the controller turns into a committed transform change
//! trigger the repaint callback synchronously.

use leptos::*;
use snapframe_core::TransformController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::rendering::canvas_utils::{client_to_canvas, touch_points};

/// Handle returned by the gesture hook.
pub struct GestureHandle {
    /// True while a drag is active; drives the grabbing cursor.
    pub is_dragging: ReadSignal<bool>,
}

/// Wire mouse, wheel, and touch listeners on the editor canvas into the
/// controller.
///
/// Wheel and touch listeners are registered non-passive so the page does
/// not scroll or pinch-zoom underneath the editor. With no photograph
/// loaded the listeners leave default browser behavior alone.
pub fn use_canvas_gestures<F>(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    controller: StoredValue<Option<TransformController>>,
    on_repaint: F,
) -> GestureHandle
where
    F: Fn() + Copy + 'static,
{
    let (is_dragging, set_is_dragging) = create_signal(false);

    let sync_drag_state = move || {
        let dragging = controller.with_value(|c| {
            c.as_ref()
                .map(|c| c.gesture().is_dragging())
                .unwrap_or(false)
        });
        set_is_dragging.set(dragging);
    };

    let has_photo =
        move || controller.with_value(|c| c.as_ref().map(|c| c.has_photo()).unwrap_or(false));

    // Attach all listeners once the canvas mounts.
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();

        // Mouse pan.
        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                if !has_photo() {
                    return;
                }
                e.prevent_default();
                let p = client_to_canvas(&canvas_pos, e.client_x() as f64, e.client_y() as f64);
                controller.update_value(|c| {
                    if let Some(c) = c {
                        c.pointer_down(p);
                    }
                });
                sync_drag_state();
            }) as Box<dyn Fn(web_sys::MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousedown", handler.as_ref().unchecked_ref())
                .expect("should add mousedown listener");
            handler.forget();
        }

        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                let p = client_to_canvas(&canvas_pos, e.client_x() as f64, e.client_y() as f64);
                let repaint = controller
                    .try_update_value(|c| c.as_mut().is_some_and(|c| c.pointer_move(p)))
                    .unwrap_or(false);
                if repaint {
                    e.prevent_default();
                    on_repaint();
                }
            }) as Box<dyn Fn(web_sys::MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", handler.as_ref().unchecked_ref())
                .expect("should add mousemove listener");
            handler.forget();
        }

        // Releasing the button and leaving the surface end a drag the same
        // way.
        for event_name in ["mouseup", "mouseleave"] {
            let handler = Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                controller.update_value(|c| {
                    if let Some(c) = c {
                        c.pointer_up();
                    }
                });
                sync_drag_state();
            }) as Box<dyn Fn(web_sys::MouseEvent)>);
            canvas
                .add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
                .expect("should add mouse release listener");
            handler.forget();
        }

        // Wheel zoom.
        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                if !has_photo() {
                    return;
                }
                e.prevent_default();
                let p = client_to_canvas(&canvas_pos, e.client_x() as f64, e.client_y() as f64);
                let repaint = controller
                    .try_update_value(|c| c.as_mut().is_some_and(|c| c.wheel(p, e.delta_y())))
                    .unwrap_or(false);
                if repaint {
                    on_repaint();
                }
            }) as Box<dyn Fn(web_sys::WheelEvent)>);

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "wheel",
                    handler.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("should add wheel listener");
            handler.forget();
        }

        // Touch: one finger pans, two pinch.
        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                if !has_photo() {
                    return;
                }
                e.prevent_default();
                let points = touch_points(&canvas_pos, &e.touches());
                controller.update_value(|c| {
                    if let Some(c) = c {
                        c.touch_start(&points);
                    }
                });
                sync_drag_state();
            }) as Box<dyn Fn(web_sys::TouchEvent)>);

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    handler.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("should add touchstart listener");
            handler.forget();
        }

        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                if !has_photo() {
                    return;
                }
                e.prevent_default();
                let points = touch_points(&canvas_pos, &e.touches());
                let repaint = controller
                    .try_update_value(|c| c.as_mut().is_some_and(|c| c.touch_move(&points)))
                    .unwrap_or(false);
                if repaint {
                    on_repaint();
                }
            }) as Box<dyn Fn(web_sys::TouchEvent)>);

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    handler.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("should add touchmove listener");
            handler.forget();
        }

        {
            let canvas_pos = canvas.clone();
            let handler = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                let points = touch_points(&canvas_pos, &e.touches());
                controller.update_value(|c| {
                    if let Some(c) = c {
                        c.touch_end(&points);
                    }
                });
                sync_drag_state();
            }) as Box<dyn Fn(web_sys::TouchEvent)>);
            canvas
                .add_event_listener_with_callback("touchend", handler.as_ref().unchecked_ref())
                .expect("should add touchend listener");
            handler.forget();
        }
    });

    GestureHandle { is_dragging }
}
