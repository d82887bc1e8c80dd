//! Construction options and tunables.

use slidenav_foundation::gesture_constants::{
    DRAG_AMPLIFICATION, RESIZE_DEBOUNCE, RESIZE_SETTLE_DELAY, SWIPE_THRESHOLD,
};
use web_time::Duration;

/// CSS selectors locating the viewport and the draggable track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideOptions {
    pub container: String,
    pub wrapper: String,
}

impl SlideOptions {
    pub fn new(container: impl Into<String>, wrapper: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            wrapper: wrapper.into(),
        }
    }
}

/// CSS selectors for the previous/next trigger elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrowOptions {
    pub prev_element: String,
    pub next_element: String,
}

impl ArrowOptions {
    pub fn new(prev_element: impl Into<String>, next_element: impl Into<String>) -> Self {
        Self {
            prev_element: prev_element.into(),
            next_element: next_element.into(),
        }
    }
}

/// Behaviour tunables. `Default` reproduces the fixed carousel behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideConfig {
    /// Factor applied to pointer travel while dragging.
    pub drag_amplification: f32,
    /// Amplified movement needed to change slide at gesture end.
    pub swipe_threshold: f32,
    /// Quiet period for the window resize debounce.
    pub resize_debounce: Duration,
    /// Delay between the debounced resize and the layout recomputation.
    pub settle_delay: Duration,
    /// Force-end a drag after this long without pointer events.
    /// `None` leaves a drag open until its end event arrives.
    pub gesture_timeout: Option<Duration>,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            drag_amplification: DRAG_AMPLIFICATION,
            swipe_threshold: SWIPE_THRESHOLD,
            resize_debounce: RESIZE_DEBOUNCE,
            settle_delay: RESIZE_SETTLE_DELAY,
            gesture_timeout: None,
        }
    }
}

impl SlideConfig {
    pub fn with_drag_amplification(mut self, factor: f32) -> Self {
        self.drag_amplification = factor;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_resize_debounce(mut self, wait: Duration) -> Self {
        self.resize_debounce = wait;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_gesture_timeout(mut self, timeout: Duration) -> Self {
        self.gesture_timeout = Some(timeout);
        self
    }
}
