//! Canvas composition: the user's photograph beneath the active template.

use snapframe_core::ViewTransform;
use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use super::canvas_utils::get_2d_context;

/// Background shown behind the template cutout before a photo is chosen.
const PLACEHOLDER_FILL: &str = "#f0f0f0";

/// Clear the canvas and redraw the full composition.
///
/// The photograph (when present) is drawn with its committed transform,
/// then the template is drawn over it, scaled to the full frame. Called
/// synchronously after every committed transform change and after a
/// template swap.
pub fn repaint(
    canvas: &HtmlCanvasElement,
    photo: Option<(&HtmlImageElement, ViewTransform)>,
    template: &HtmlImageElement,
) -> Result<(), JsValue> {
    let ctx = get_2d_context(canvas)?;
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    match photo {
        Some((image, view)) => {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                view.offset_x,
                view.offset_y,
                image.natural_width() as f64 * view.scale,
                image.natural_height() as f64 * view.scale,
            )?;
        }
        None => {
            ctx.set_fill_style_str(PLACEHOLDER_FILL);
            ctx.fill_rect(0.0, 0.0, width, height);
        }
    }

    ctx.draw_image_with_html_image_element_and_dw_and_dh(template, 0.0, 0.0, width, height)?;

    Ok(())
}
