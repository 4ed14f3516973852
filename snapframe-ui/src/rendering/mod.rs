pub mod canvas_utils;
pub mod compositor;
pub mod export;

pub use canvas_utils::{client_to_canvas, get_2d_context, touch_points};
pub use compositor::repaint;
