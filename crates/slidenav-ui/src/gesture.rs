//! Drag bookkeeping and the end-of-gesture decision.

use crate::index::SlideIndex;
use slidenav_foundation::PointerSource;

/// Offsets tracked across a drag, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distance {
    /// Committed wrapper offset.
    pub final_position: f32,
    /// Pointer X when the current gesture started.
    pub start_x: f32,
    /// Amplified travel since `start_x`; positive when dragging left.
    pub movement: f32,
    /// Last offset written to the wrapper.
    pub move_position: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(PointerSource),
}

impl GesturePhase {
    pub fn source(self) -> Option<PointerSource> {
        match self {
            GesturePhase::Idle => None,
            GesturePhase::Dragging(source) => Some(source),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapDecision {
    Next,
    Previous,
    Stay,
}

impl SnapDecision {
    pub fn decide(movement: f32, threshold: f32, index: &SlideIndex) -> Self {
        if movement > threshold && index.next.is_some() {
            SnapDecision::Next
        } else if movement < -threshold && index.prev.is_some() {
            SnapDecision::Previous
        } else {
            SnapDecision::Stay
        }
    }
}
