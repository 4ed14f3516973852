use snapframe_core::Point;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchList};

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Convert client-space (viewport) coordinates to canvas backing-pixel
/// coordinates.
///
/// Subtracts the canvas's on-screen origin and scales by the ratio of the
/// backing buffer to the CSS-displayed size per axis, so gesture math stays
/// correct when the canvas is CSS-scaled (responsive layouts).
pub fn client_to_canvas(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Point {
    let rect = canvas.get_bounding_client_rect();

    let scale_x = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };

    Point::new(
        (client_x - rect.left()) * scale_x,
        (client_y - rect.top()) * scale_y,
    )
}

/// Canvas-space positions of every touch in a `TouchList`.
pub fn touch_points(canvas: &HtmlCanvasElement, touches: &TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|touch| client_to_canvas(canvas, touch.client_x() as f64, touch.client_y() as f64))
        .collect()
}
