pub mod listeners;
pub mod types;

pub use listeners::ListenerSet;
pub use types::{PointerEvent, PointerEventKind, PointerSource, WrapperEvent};

pub mod prelude {
    pub use super::listeners::ListenerSet;
    pub use super::types::{PointerEvent, PointerEventKind, PointerSource, WrapperEvent};
}
