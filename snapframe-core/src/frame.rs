use serde::{Deserialize, Serialize};

/// Fixed canvas dimensions in backing pixels.
///
/// Established once from the first loaded template and never resized
/// afterwards. Every template is expected to share these dimensions; a
/// template that does not is still composited, the mismatch is only
/// reported (see `matches`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasFrame {
    pub width: u32,
    pub height: u32,
}

impl CanvasFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether an image of the given natural size agrees with this frame.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }
}

/// Natural pixel dimensions of a decoded photograph, captured at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
}

impl PhotoSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
