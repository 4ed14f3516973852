use crate::frame::{CanvasFrame, PhotoSize};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Scale applied per unit of wheel delta.
pub const ZOOM_SENSITIVITY: f64 = 0.002;
/// Lower bound for `ViewTransform::scale`.
pub const MIN_ZOOM: f64 = 0.1;
/// Upper bound for `ViewTransform::scale`.
pub const MAX_ZOOM: f64 = 5.0;

/// Affine mapping from photograph-local pixel coordinates to canvas pixel
/// coordinates: `canvas_point = image_point * scale + offset`.
///
/// Invariant: `MIN_ZOOM <= scale <= MAX_ZOOM`. Every constructor and zoom
/// step clamps, so a transform outside that range is unrepresentable
/// through this API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewTransform {
    /// Initial placement for a freshly loaded photograph: scale the photo so
    /// it fully covers the canvas frame (aspect-fill, cropping overflow) and
    /// center it. This is the only automatic placement; afterwards the
    /// transform changes exclusively through user gestures.
    pub fn aspect_fill(frame: CanvasFrame, photo: PhotoSize) -> Self {
        let img_w = photo.width as f64;
        let img_h = photo.height as f64;

        let cover = f64::max(frame.width_f64() / img_w, frame.height_f64() / img_h);
        let scale = cover.clamp(MIN_ZOOM, MAX_ZOOM);

        Self {
            scale,
            offset_x: (frame.width_f64() - img_w * scale) / 2.0,
            offset_y: (frame.height_f64() - img_h * scale) / 2.0,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn with_offset(&self, offset: Point) -> Self {
        Self {
            scale: self.scale,
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    /// Image-space point currently displayed at `canvas_point`.
    pub fn canvas_to_image(&self, canvas_point: Point) -> Point {
        (canvas_point - self.offset()).scaled(1.0 / self.scale)
    }

    /// Canvas-space position of an image-space point.
    pub fn image_to_canvas(&self, image_point: Point) -> Point {
        image_point.scaled(self.scale) + self.offset()
    }

    /// Re-scale to `target_scale` (clamped) while keeping the image content
    /// under `pivot` stationary on the canvas.
    ///
    /// The offset is recomputed so that the image point at `pivot` before
    /// the zoom maps back to `pivot` after it: this is what makes wheel
    /// zoom track the cursor and pinch zoom track the finger midpoint.
    pub fn zoomed_about(&self, pivot: Point, target_scale: f64) -> Self {
        let new_scale = target_scale.clamp(MIN_ZOOM, MAX_ZOOM);
        let image_at_pivot = self.canvas_to_image(pivot);
        let offset = pivot - image_at_pivot.scaled(new_scale);

        Self {
            scale: new_scale,
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }
}
