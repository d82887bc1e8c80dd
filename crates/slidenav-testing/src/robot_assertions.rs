//! Assertion utilities for slide robot tests.

use crate::robot::SlideRobot;
use slidenav_foundation::gesture_constants::ACTIVE_CLASS;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the settled state for `expected` slide: the index, a single
/// `active` class on that slide, and the wrapper resting on its descriptor.
pub fn assert_settled_on(robot: &SlideRobot, expected: usize) {
    let slide = robot.slide();
    let index = slide.index().expect("slide controller initialized");
    assert_eq!(index.active, expected, "active slide index");
    assert!(!slide.is_dragging(), "gesture still in progress");

    let position = slide.slides()[expected].position;
    assert_eq!(
        slide.distance().final_position,
        position,
        "final position of slide {}",
        expected
    );

    let dom = slide.host();
    assert_eq!(dom.translate(), Some(position), "wrapper offset");
    assert_eq!(
        dom.slides_with_class(ACTIVE_CLASS),
        vec![expected],
        "slides carrying the active class"
    );
    assert!(dom.transition_enabled(), "transition re-enabled after settle");
}

/// Assert the neighbour invariant for the current index.
pub fn assert_index_consistent(robot: &SlideRobot) {
    let slide = robot.slide();
    let index = slide.index().expect("slide controller initialized");
    let len = slide.slides().len();
    assert!(index.active < len, "active {} out of {} slides", index.active, len);
    assert_eq!(index.prev.is_none(), index.active == 0, "prev of {:?}", index);
    assert_eq!(index.next.is_none(), index.active == len - 1, "next of {:?}", index);
}
