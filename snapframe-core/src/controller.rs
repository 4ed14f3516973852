//! Gesture-to-transform engine for the editor surface.
//!
//! The controller owns the photograph's `ViewTransform` and the active
//! `Gesture`, and is the only code that mutates either. Callers feed it
//! pointer/touch/wheel events already converted to canvas-space
//! coordinates; entry points return `true` when a repaint of the
//! composition is required, and the caller must repaint synchronously.
//!
//! Malformed event sequences (moves without a press, pinch math with a
//! stale snapshot, gestures with no photograph loaded) degrade to
//! no-ops, never to a panic or a corrupted transform.

use crate::frame::{CanvasFrame, PhotoSize};
use crate::geometry::Point;
use crate::gesture::Gesture;
use crate::view_transform::{ViewTransform, ZOOM_SENSITIVITY};

pub struct TransformController {
    frame: CanvasFrame,
    photo: Option<PhotoSize>,
    view: Option<ViewTransform>,
    gesture: Gesture,
}

impl TransformController {
    /// Create a controller for a canvas frame. No photograph is loaded yet,
    /// so every gesture entry point is a no-op until `set_photo`.
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            frame,
            photo: None,
            view: None,
            gesture: Gesture::Idle,
        }
    }

    pub fn frame(&self) -> CanvasFrame {
        self.frame
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// The committed transform, `None` until a photograph is loaded.
    pub fn view(&self) -> Option<ViewTransform> {
        self.view
    }

    /// Install a freshly decoded photograph and give it the aspect-fill
    /// placement. Replaces any previous photograph; any in-flight gesture
    /// is abandoned.
    pub fn set_photo(&mut self, size: PhotoSize) -> bool {
        self.photo = Some(size);
        self.view = Some(ViewTransform::aspect_fill(self.frame, size));
        self.gesture = Gesture::Idle;
        true
    }

    /// Drop the photograph and its transform. Returns `true` (repaint
    /// needed) only if there was one to drop.
    pub fn clear_photo(&mut self) -> bool {
        let had_photo = self.photo.is_some();
        self.photo = None;
        self.view = None;
        self.gesture = Gesture::Idle;
        had_photo
    }

    /// Begin a single-pointer drag. Ignored while a pinch is active.
    pub fn pointer_down(&mut self, pointer: Point) {
        let Some(view) = self.view else { return };
        if self.gesture.is_pinching() {
            return;
        }
        self.gesture = Gesture::Dragging {
            anchor: pointer - view.offset(),
        };
    }

    /// Continue a drag: the grabbed content stays under the pointer.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Gesture::Dragging { anchor } = self.gesture else {
            return false;
        };
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        *view = view.with_offset(pointer - anchor);
        true
    }

    /// End a drag. Pointer-leave is routed here as well; a pinch in
    /// progress is unaffected.
    pub fn pointer_up(&mut self) {
        if self.gesture.is_dragging() {
            self.gesture = Gesture::Idle;
        }
    }

    /// Wheel zoom anchored at the pointer: the image content under the
    /// cursor does not move. Scrolling up (negative delta) zooms in.
    pub fn wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        if self.gesture.is_pinching() {
            return false;
        }
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        let delta = delta_y * ZOOM_SENSITIVITY;
        *view = view.zoomed_about(pointer, view.scale - delta);
        true
    }

    /// A touch landed. One active touch starts a drag; a second converts
    /// it into a pinch, snapshotting the finger distance and the current
    /// scale. More than two touches leave the current gesture untouched.
    pub fn touch_start(&mut self, touches: &[Point]) {
        let Some(view) = self.view else { return };
        match touches {
            [single] => {
                self.gesture = Gesture::Dragging {
                    anchor: *single - view.offset(),
                };
            }
            [a, b] => {
                self.gesture = Gesture::Pinching {
                    initial_distance: a.distance(*b),
                    start_scale: view.scale,
                };
            }
            _ => {}
        }
    }

    /// Touch movement: pans while dragging with one touch, rescales while
    /// pinching with two. The pinch anchors at the live midpoint of the
    /// fingers, so the anchor follows their current center.
    pub fn touch_move(&mut self, touches: &[Point]) -> bool {
        match (self.gesture, touches) {
            (Gesture::Dragging { anchor }, [single]) => {
                let Some(view) = self.view.as_mut() else {
                    return false;
                };
                *view = view.with_offset(*single - anchor);
                true
            }
            (
                Gesture::Pinching {
                    initial_distance,
                    start_scale,
                },
                [a, b],
            ) => {
                // Stale or degenerate snapshot: silently skip the step.
                if initial_distance <= f64::EPSILON {
                    return false;
                }
                let Some(view) = self.view.as_mut() else {
                    return false;
                };
                let factor = a.distance(*b) / initial_distance;
                *view = view.zoomed_about(a.midpoint(*b), start_scale * factor);
                true
            }
            _ => false,
        }
    }

    /// Touches lifted. With none remaining the gesture ends; with one
    /// remaining after a pinch, the gesture converts to a drag re-anchored
    /// at that touch, so the image does not jump.
    pub fn touch_end(&mut self, remaining: &[Point]) {
        if self.photo.is_none() {
            return;
        }
        match remaining {
            [] => self.gesture = Gesture::Idle,
            [single] if self.gesture.is_pinching() => {
                let Some(view) = self.view else { return };
                self.gesture = Gesture::Dragging {
                    anchor: *single - view.offset(),
                };
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_transform::{MAX_ZOOM, MIN_ZOOM};

    fn controller_with_photo() -> TransformController {
        // Square frame and photo of the same size: aspect-fill yields the
        // identity-like transform (scale 1, offset 0), which keeps the
        // arithmetic in assertions easy to follow.
        let mut c = TransformController::new(CanvasFrame::new(1000, 1000));
        c.set_photo(PhotoSize::new(1000, 1000));
        c
    }

    fn view(c: &TransformController) -> ViewTransform {
        c.view().expect("photo should be loaded")
    }

    #[test]
    fn gestures_without_photo_are_noops() {
        let mut c = TransformController::new(CanvasFrame::new(1000, 1000));

        c.pointer_down(Point::new(10.0, 10.0));
        assert!(c.gesture().is_idle());
        assert!(!c.pointer_move(Point::new(20.0, 20.0)));
        assert!(!c.wheel(Point::new(5.0, 5.0), -300.0));
        c.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!(c.gesture().is_idle());
        assert!(!c.touch_move(&[Point::new(0.0, 0.0), Point::new(150.0, 0.0)]));
        assert!(c.view().is_none());
    }

    #[test]
    fn set_photo_applies_aspect_fill_placement() {
        let mut c = TransformController::new(CanvasFrame::new(1000, 1200));
        assert!(c.set_photo(PhotoSize::new(2000, 1000)));

        let vt = view(&c);
        assert_eq!(vt.scale, 1.2);
        assert_eq!(vt.offset_x, -700.0);
        assert_eq!(vt.offset_y, 0.0);
    }

    #[test]
    fn replacing_photo_recomputes_fit_and_resets_gesture() {
        let mut c = controller_with_photo();
        c.pointer_down(Point::new(100.0, 100.0));
        assert!(c.gesture().is_dragging());

        c.set_photo(PhotoSize::new(500, 500));
        assert!(c.gesture().is_idle());
        assert_eq!(view(&c).scale, 2.0);
    }

    #[test]
    fn clear_photo_discards_transform() {
        let mut c = controller_with_photo();
        assert!(c.clear_photo());
        assert!(c.view().is_none());
        // Clearing an already-empty controller needs no repaint.
        assert!(!c.clear_photo());
    }

    #[test]
    fn drag_translates_by_pointer_delta() {
        let mut c = controller_with_photo();
        let start = view(&c);

        c.pointer_down(Point::new(400.0, 300.0));
        assert!(c.pointer_move(Point::new(430.0, 280.0)));

        let vt = view(&c);
        assert_eq!(vt.offset_x, start.offset_x + 30.0);
        assert_eq!(vt.offset_y, start.offset_y - 20.0);
        assert_eq!(vt.scale, start.scale);
    }

    #[test]
    fn drag_requires_a_press() {
        let mut c = controller_with_photo();
        let before = view(&c);
        assert!(!c.pointer_move(Point::new(500.0, 500.0)));
        assert_eq!(view(&c), before);
    }

    #[test]
    fn release_ends_drag() {
        let mut c = controller_with_photo();
        c.pointer_down(Point::new(100.0, 100.0));
        c.pointer_up();
        assert!(c.gesture().is_idle());
        assert!(!c.pointer_move(Point::new(200.0, 200.0)));
    }

    #[test]
    fn wheel_zoom_matches_worked_example() {
        // scale 1, offset (0,0); wheel at (100,100) with delta_y = -500:
        // delta = -1.0, new scale = 2.0, offset = (-100, -100).
        let mut c = controller_with_photo();
        assert!(c.wheel(Point::new(100.0, 100.0), -500.0));

        let vt = view(&c);
        assert_eq!(vt.scale, 2.0);
        assert_eq!(vt.offset_x, -100.0);
        assert_eq!(vt.offset_y, -100.0);
    }

    #[test]
    fn wheel_zoom_keeps_cursor_content_fixed() {
        let mut c = controller_with_photo();
        let pointer = Point::new(371.0, 642.0);

        for delta in [-120.0, -480.0, 250.0, -33.0, 999.0] {
            let before = view(&c).canvas_to_image(pointer);
            assert!(c.wheel(pointer, delta));
            let after = view(&c).canvas_to_image(pointer);
            assert!((before.x - after.x).abs() < 1e-9);
            assert!((before.y - after.y).abs() < 1e-9);
        }
    }

    #[test]
    fn wheel_zoom_clamps_extreme_deltas() {
        let mut c = controller_with_photo();
        c.wheel(Point::new(0.0, 0.0), -1e12);
        assert_eq!(view(&c).scale, MAX_ZOOM);
        c.wheel(Point::new(0.0, 0.0), 1e12);
        assert_eq!(view(&c).scale, MIN_ZOOM);
    }

    #[test]
    fn wheel_is_ignored_during_pinch() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]);
        let before = view(&c);
        assert!(!c.wheel(Point::new(500.0, 500.0), -500.0));
        assert_eq!(view(&c), before);
    }

    #[test]
    fn press_is_ignored_during_pinch() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]);
        c.pointer_down(Point::new(500.0, 500.0));
        assert!(c.gesture().is_pinching());
    }

    #[test]
    fn pinch_scales_relative_to_gesture_start() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(450.0, 500.0), Point::new(550.0, 500.0)]);
        // Fingers spread from distance 100 to 150: 1.5x the start scale.
        assert!(c.touch_move(&[Point::new(425.0, 500.0), Point::new(575.0, 500.0)]));
        assert_eq!(view(&c).scale, 1.5);
    }

    #[test]
    fn pinch_anchors_at_live_midpoint() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(450.0, 500.0), Point::new(550.0, 500.0)]);

        // Fingers spread *and* shift right; the anchor is where they are
        // now, not where the gesture began.
        let a = Point::new(525.0, 500.0);
        let b = Point::new(675.0, 500.0);
        let midpoint = a.midpoint(b);
        let content_before = view(&c).canvas_to_image(midpoint);

        assert!(c.touch_move(&[a, b]));
        let content_after = view(&c).canvas_to_image(midpoint);
        assert!((content_before.x - content_after.x).abs() < 1e-9);
        assert!((content_before.y - content_after.y).abs() < 1e-9);
    }

    #[test]
    fn pinch_clamps_scale() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(499.0, 500.0), Point::new(501.0, 500.0)]);
        // Distance 2 -> 1600: factor 800, clamped to MAX_ZOOM.
        assert!(c.touch_move(&[Point::new(0.0, 500.0), Point::new(1600.0, 500.0)]));
        assert_eq!(view(&c).scale, MAX_ZOOM);
    }

    #[test]
    fn degenerate_pinch_snapshot_is_skipped() {
        let mut c = controller_with_photo();
        let p = Point::new(500.0, 500.0);
        // Both touches at the same spot: initial distance 0.
        c.touch_start(&[p, p]);
        let before = view(&c);
        assert!(!c.touch_move(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]));
        assert_eq!(view(&c), before);
    }

    #[test]
    fn pinch_to_drag_handoff_has_no_jump() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(450.0, 500.0), Point::new(550.0, 500.0)]);
        c.touch_move(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]);
        let before = view(&c);

        // One finger lifts; the remaining one keeps dragging.
        let remaining = Point::new(600.0, 500.0);
        c.touch_end(&[remaining]);
        assert_eq!(view(&c), before, "handoff itself must not move the image");
        assert!(c.gesture().is_dragging());

        assert!(c.touch_move(&[Point::new(610.0, 505.0)]));
        let vt = view(&c);
        assert_eq!(vt.offset_x, before.offset_x + 10.0);
        assert_eq!(vt.offset_y, before.offset_y + 5.0);
        assert_eq!(vt.scale, before.scale);
    }

    #[test]
    fn lifting_all_touches_clears_gesture() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(100.0, 100.0)]);
        assert!(c.gesture().is_dragging());
        c.touch_end(&[]);
        assert!(c.gesture().is_idle());
    }

    #[test]
    fn third_touch_leaves_gesture_untouched() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]);
        let before = view(&c);

        c.touch_start(&[
            Point::new(400.0, 500.0),
            Point::new(600.0, 500.0),
            Point::new(500.0, 300.0),
        ]);
        assert!(c.gesture().is_pinching());
        assert!(!c.touch_move(&[
            Point::new(390.0, 500.0),
            Point::new(610.0, 500.0),
            Point::new(500.0, 290.0),
        ]));
        assert_eq!(view(&c), before);
    }

    #[test]
    fn second_touch_suspends_drag_without_moving_image() {
        let mut c = controller_with_photo();
        c.touch_start(&[Point::new(300.0, 300.0)]);
        c.touch_move(&[Point::new(320.0, 330.0)]);
        let before = view(&c);

        c.touch_start(&[Point::new(320.0, 330.0), Point::new(420.0, 330.0)]);
        assert!(c.gesture().is_pinching());
        assert_eq!(view(&c), before);
    }
}
