//! Slide placement.

/// Target wrapper offset for one slide, paired with the slide element.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideDescriptor<E> {
    pub position: f32,
    pub element: E,
}

/// Wrapper offset that centers a slide of `offset_width` starting at
/// `offset_left` inside a container `container_width` wide.
#[inline]
pub fn centered_position(offset_left: f32, offset_width: f32, container_width: f32) -> f32 {
    let margin = (container_width - offset_width) / 2.0;
    -(offset_left - margin)
}
