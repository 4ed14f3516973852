use crate::geometry::Point;

/// Transient interaction mode of the editor surface.
///
/// Exactly one variant is active at any instant; starting a new gesture
/// replaces the previous one, so "dragging and pinching at the same time"
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    /// Single-pointer pan. `anchor` is the committed offset expressed
    /// relative to the pointer, so that `offset = pointer - anchor` keeps
    /// the grabbed content under the pointer.
    Dragging { anchor: Point },
    /// Two-touch pinch, snapshotted at the moment the second touch landed.
    Pinching {
        initial_distance: f64,
        start_scale: f64,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Gesture::Pinching { .. })
    }
}
