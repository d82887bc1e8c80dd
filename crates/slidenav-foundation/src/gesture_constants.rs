//! Shared gesture and layout constants.
//!
//! These are the defaults behind `SlideConfig`. All distances are logical
//! (CSS) pixels.

use web_time::Duration;

/// Factor applied to raw horizontal pointer travel while dragging.
///
/// Short drags register as large swipes, so a flick of a few dozen pixels is
/// enough to cross [`SWIPE_THRESHOLD`].
pub const DRAG_AMPLIFICATION: f32 = 1.6;

/// Amplified movement a gesture must exceed to advance or retreat.
///
/// Anything at or below it re-snaps to the active slide, which filters out
/// taps and jitter.
pub const SWIPE_THRESHOLD: f32 = 120.0;

/// Quiet period collapsing a burst of window resize events into one call.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Wait after the debounced resize before the layout is read again, so
/// orientation-change reflows have finished.
pub const RESIZE_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Class toggled on the active slide element.
pub const ACTIVE_CLASS: &str = "active";
