//! Foundation elements for SlideNav: pointer input records, gesture
//! constants and the deadline timers driving resize handling.

pub mod gesture_constants;
pub mod input;
pub mod timer;

pub use gesture_constants::*;
pub use input::{ListenerSet, PointerEvent, PointerEventKind, PointerSource, WrapperEvent};
pub use timer::{Debounce, OneShot};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::prelude::*;
    pub use crate::timer::{Debounce, OneShot};
}
