//! Pure geometry data for SlideNav
//!
//! Points, sizes and rectangles in logical (CSS) pixels, shared by the
//! pointer event records and the slide layout code.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
