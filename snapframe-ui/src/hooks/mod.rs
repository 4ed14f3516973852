mod instruction_hint;
mod use_canvas_gestures;

pub use instruction_hint::{use_instruction_hint, InstructionHint};
pub use use_canvas_gestures::{use_canvas_gestures, GestureHandle};
