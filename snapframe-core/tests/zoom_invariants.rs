//! Zoom-path invariants exercised over long event sequences.

use snapframe_core::{CanvasFrame, PhotoSize, Point, TransformController, MAX_ZOOM, MIN_ZOOM};

fn loaded_controller() -> TransformController {
    let mut c = TransformController::new(CanvasFrame::new(1080, 1350));
    c.set_photo(PhotoSize::new(4032, 3024));
    c
}

/// Deterministic but irregular value stream for stress sequences.
fn pseudo(seed: u64, i: u64) -> f64 {
    let x = seed
        .wrapping_add(i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_mul(0xBF58_476D_1CE4_E5B9);
    ((x >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
}

#[test]
fn scale_stays_clamped_through_arbitrary_wheel_streams() {
    let mut c = loaded_controller();

    for i in 0..5_000 {
        let pointer = Point::new(
            540.0 + pseudo(1, i) * 540.0,
            675.0 + pseudo(2, i) * 675.0,
        );
        // Deltas from tiny trackpad ticks to absurd synthetic spikes.
        let delta = pseudo(3, i) * 10f64.powi((i % 7) as i32);
        c.wheel(pointer, delta);

        let scale = c.view().unwrap().scale;
        assert!(
            (MIN_ZOOM..=MAX_ZOOM).contains(&scale),
            "scale {scale} escaped bounds at step {i}"
        );
    }
}

#[test]
fn wheel_anchor_invariant_holds_at_every_step() {
    let mut c = loaded_controller();

    for i in 0..1_000 {
        let pointer = Point::new(
            540.0 + pseudo(7, i) * 500.0,
            675.0 + pseudo(8, i) * 600.0,
        );
        let delta = pseudo(9, i) * 400.0;

        let before = c.view().unwrap().canvas_to_image(pointer);
        c.wheel(pointer, delta);
        let after = c.view().unwrap().canvas_to_image(pointer);

        assert!(
            (before.x - after.x).abs() < 1e-6 && (before.y - after.y).abs() < 1e-6,
            "content under pointer moved during zoom at step {i}"
        );
    }
}

#[test]
fn scale_stays_clamped_through_pinch_streams() {
    let mut c = loaded_controller();

    for i in 0..500 {
        let center = Point::new(540.0, 675.0);
        let half = 10.0 + (pseudo(11, i).abs() * 500.0);
        let a = Point::new(center.x - half, center.y);
        let b = Point::new(center.x + half, center.y);
        c.touch_start(&[a, b]);

        for j in 0..20 {
            let spread = 1.0 + pseudo(13, i * 20 + j).abs() * 2000.0;
            c.touch_move(&[
                Point::new(center.x - spread, center.y),
                Point::new(center.x + spread, center.y),
            ]);
            let scale = c.view().unwrap().scale;
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&scale));
        }
        c.touch_end(&[]);
    }
}

#[test]
fn aspect_fill_always_covers_frame_within_clamp_range() {
    let frame = CanvasFrame::new(1000, 1200);

    for i in 0..2_000u64 {
        let w = 50 + ((pseudo(17, i).abs() * 8000.0) as u32);
        let h = 50 + ((pseudo(19, i).abs() * 8000.0) as u32);

        let mut c = TransformController::new(frame);
        c.set_photo(PhotoSize::new(w, h));
        let vt = c.view().unwrap();

        if vt.scale > MIN_ZOOM && vt.scale < MAX_ZOOM {
            assert!(w as f64 * vt.scale >= frame.width_f64() - 1e-9);
            assert!(h as f64 * vt.scale >= frame.height_f64() - 1e-9);
        }
    }
}
