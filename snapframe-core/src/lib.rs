pub mod controller;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod view_transform;

pub use controller::TransformController;
pub use frame::{CanvasFrame, PhotoSize};
pub use geometry::Point;
pub use gesture::Gesture;
pub use view_transform::{ViewTransform, MAX_ZOOM, MIN_ZOOM, ZOOM_SENSITIVITY};
