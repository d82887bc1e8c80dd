//! Centering math for slide descriptors.

use crate::centered_position;

#[test]
fn full_width_slides_sit_at_negative_offsets() {
    let positions: Vec<f32> = (0..5)
        .map(|i| centered_position(i as f32 * 200.0, 200.0, 200.0))
        .collect();
    assert_eq!(positions, vec![0.0, -200.0, -400.0, -600.0, -800.0]);
}

#[test]
fn narrow_slide_is_centered_in_wide_container() {
    // 300px slide at left 600 inside a 1000px viewport: 350px margin each side.
    assert_eq!(centered_position(600.0, 300.0, 1000.0), -250.0);
}

#[test]
fn first_narrow_slide_shifts_right() {
    assert_eq!(centered_position(0.0, 400.0, 800.0), 200.0);
}
