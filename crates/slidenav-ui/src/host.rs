//! Seams between the controller and the page.
//!
//! The controller never touches the DOM directly. A [`SlideHost`] answers
//! layout queries and applies style/class/listener changes for one
//! container/wrapper pair; an [`ArrowBinder`] resolves trigger elements and
//! registers click handlers on them. The web platform implements both over
//! `web-sys`, the testing crate over an in-memory page.

use crate::error::SlideError;
use slidenav_foundation::WrapperEvent;

pub trait SlideHost {
    /// Handle to one slide element (a direct child of the wrapper).
    type Element: Clone;

    /// `offsetWidth` of the container.
    fn container_width(&self) -> f32;

    /// Direct children of the wrapper, in document order.
    fn slide_elements(&self) -> Vec<Self::Element>;

    /// `offsetLeft` of a slide element.
    fn offset_left(&self, element: &Self::Element) -> f32;

    /// `offsetWidth` of a slide element.
    fn offset_width(&self, element: &Self::Element) -> f32;

    /// Writes `translate3d(x px, 0, 0)` as the wrapper transform.
    fn set_wrapper_translate(&mut self, x: f32) -> Result<(), SlideError>;

    /// Turns the wrapper's CSS transform transition on or off.
    fn set_transition(&mut self, enabled: bool) -> Result<(), SlideError>;

    fn set_class(
        &mut self,
        element: &Self::Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), SlideError>;

    /// Attaches the controller's listener for `event` to the wrapper.
    ///
    /// Attach and detach must refer to the same listener identity, so a
    /// detach really removes what an earlier attach added.
    fn add_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError>;

    fn remove_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError>;

    /// Starts delivering window resize notifications to the controller.
    fn listen_resize(&mut self) -> Result<(), SlideError>;
}

pub type ClickHandler = Box<dyn FnMut()>;

pub trait ArrowBinder {
    type Element;

    fn resolve(&self, selector: &str) -> Result<Self::Element, SlideError>;

    fn on_click(&mut self, element: &Self::Element, handler: ClickHandler)
        -> Result<(), SlideError>;
}
