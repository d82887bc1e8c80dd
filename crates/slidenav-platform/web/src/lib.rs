//! Web platform adapter for SlideNav.
//!
//! Binds a [`slidenav_ui::Slide`] to real DOM elements through `web-sys`:
//! [`DomHost`] implements the layout/style/listener seam, [`DomArrows`]
//! binds trigger elements, and [`WebSlideNav`] ties both together with a
//! single `setTimeout` wakeup for the resize timers.

mod arrows;
mod dom_host;
mod events;
mod logging;
mod web_slide;

pub use arrows::DomArrows;
pub use dom_host::DomHost;
pub use events::{pointer_event, translate3d, TRANSITION};
pub use logging::install_logging;
pub use web_slide::WebSlideNav;

use slidenav_ui::SlideError;
use wasm_bindgen::JsValue;

pub(crate) fn js_error(context: &str, value: JsValue) -> SlideError {
    SlideError::Platform(format!("{}: {:?}", context, value))
}
