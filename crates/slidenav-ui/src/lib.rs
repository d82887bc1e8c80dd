//! Draggable slide carousel for SlideNav.
//!
//! [`Slide`] owns the drag, snap and resize behaviour of one wrapper element
//! and talks to the page only through a [`SlideHost`]. [`SlideNav`] shares a
//! `Slide` and wires previous/next trigger elements to it.

mod config;
mod error;
mod gesture;
mod host;
mod index;
mod layout;
mod nav;
mod slide;

#[cfg(test)]
mod tests;

pub use config::{ArrowOptions, SlideConfig, SlideOptions};
pub use error::SlideError;
pub use gesture::{Distance, GesturePhase, SnapDecision};
pub use host::{ArrowBinder, ClickHandler, SlideHost};
pub use index::SlideIndex;
pub use layout::{centered_position, SlideDescriptor};
pub use nav::{SharedSlide, SlideNav};
pub use slide::Slide;

pub use slidenav_foundation::{PointerEvent, PointerEventKind, PointerSource, WrapperEvent};

pub mod prelude {
    pub use crate::config::{ArrowOptions, SlideConfig, SlideOptions};
    pub use crate::error::SlideError;
    pub use crate::host::{ArrowBinder, SlideHost};
    pub use crate::index::SlideIndex;
    pub use crate::nav::{SharedSlide, SlideNav};
    pub use crate::slide::Slide;
    pub use slidenav_foundation::prelude::*;
}
