//! End-of-gesture decision.

use crate::{SlideIndex, SnapDecision};

const THRESHOLD: f32 = 120.0;

#[test]
fn long_left_drag_advances() {
    let index = SlideIndex::new(0, 5);
    assert_eq!(
        SnapDecision::decide(240.0, THRESHOLD, &index),
        SnapDecision::Next
    );
}

#[test]
fn long_right_drag_retreats() {
    let index = SlideIndex::new(2, 5);
    assert_eq!(
        SnapDecision::decide(-121.0, THRESHOLD, &index),
        SnapDecision::Previous
    );
}

#[test]
fn movement_at_threshold_stays() {
    let index = SlideIndex::new(2, 5);
    assert_eq!(
        SnapDecision::decide(120.0, THRESHOLD, &index),
        SnapDecision::Stay
    );
    assert_eq!(
        SnapDecision::decide(-120.0, THRESHOLD, &index),
        SnapDecision::Stay
    );
    assert_eq!(
        SnapDecision::decide(80.0, THRESHOLD, &index),
        SnapDecision::Stay
    );
}

#[test]
fn swipe_past_the_ends_stays() {
    assert_eq!(
        SnapDecision::decide(500.0, THRESHOLD, &SlideIndex::new(4, 5)),
        SnapDecision::Stay
    );
    assert_eq!(
        SnapDecision::decide(-500.0, THRESHOLD, &SlideIndex::new(0, 5)),
        SnapDecision::Stay
    );
}
