//! [`SlideHost`] over live DOM elements.

use crate::events::{translate3d, TRANSITION};
use crate::js_error;
use js_sys::Function;
use slidenav_foundation::{ListenerSet, WrapperEvent};
use slidenav_ui::{SlideError, SlideHost, SlideOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

pub(crate) type EventClosure = Closure<dyn FnMut(Event)>;

/// Listener functions handed to `addEventListener`.
///
/// Created once per controller, so removing a listener passes the exact
/// function that was added.
pub(crate) struct Bindings {
    pub(crate) pointer: EventClosure,
    pub(crate) resize: EventClosure,
}

pub struct DomHost {
    window: Window,
    container: HtmlElement,
    wrapper: HtmlElement,
    listeners: ListenerSet,
    bindings: Option<Bindings>,
}

impl DomHost {
    pub fn query(window: Window, options: &SlideOptions) -> Result<Self, SlideError> {
        let document = window
            .document()
            .ok_or_else(|| SlideError::Platform("window has no document".into()))?;
        let container = query_html(&document, &options.container)?;
        let wrapper = query_html(&document, &options.wrapper)?;
        Ok(Self {
            window,
            container,
            wrapper,
            listeners: ListenerSet::new(),
            bindings: None,
        })
    }

    pub fn wrapper(&self) -> &HtmlElement {
        &self.wrapper
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub(crate) fn bind(&mut self, bindings: Bindings) {
        self.bindings = Some(bindings);
    }

    fn bindings(&self) -> Result<&Bindings, SlideError> {
        self.bindings
            .as_ref()
            .ok_or_else(|| SlideError::Platform("listeners not bound".into()))
    }
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Result<HtmlElement, SlideError> {
    document
        .query_selector(selector)
        .map_err(|err| js_error(selector, err))?
        .ok_or_else(|| SlideError::SelectorNotFound(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SlideError::Platform(format!("{} is not an HTML element", selector)))
}

impl SlideHost for DomHost {
    type Element = HtmlElement;

    fn container_width(&self) -> f32 {
        self.container.offset_width() as f32
    }

    fn slide_elements(&self) -> Vec<HtmlElement> {
        let children = self.wrapper.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn offset_left(&self, element: &HtmlElement) -> f32 {
        element.offset_left() as f32
    }

    fn offset_width(&self, element: &HtmlElement) -> f32 {
        element.offset_width() as f32
    }

    fn set_wrapper_translate(&mut self, x: f32) -> Result<(), SlideError> {
        self.wrapper
            .style()
            .set_property("transform", &translate3d(x))
            .map_err(|err| js_error("transform", err))
    }

    fn set_transition(&mut self, enabled: bool) -> Result<(), SlideError> {
        let value = if enabled { TRANSITION } else { "" };
        self.wrapper
            .style()
            .set_property("transition", value)
            .map_err(|err| js_error("transition", err))
    }

    fn set_class(
        &mut self,
        element: &HtmlElement,
        class: &str,
        enabled: bool,
    ) -> Result<(), SlideError> {
        element
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| js_error(class, err))
    }

    fn add_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError> {
        if self.listeners.contains(event) {
            return Ok(());
        }
        let callback: &Function = self.bindings()?.pointer.as_ref().unchecked_ref();
        self.wrapper
            .add_event_listener_with_callback(event.dom_name(), callback)
            .map_err(|err| js_error(event.dom_name(), err))?;
        self.listeners.insert(event);
        Ok(())
    }

    fn remove_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError> {
        if !self.listeners.contains(event) {
            return Ok(());
        }
        let callback: &Function = self.bindings()?.pointer.as_ref().unchecked_ref();
        self.wrapper
            .remove_event_listener_with_callback(event.dom_name(), callback)
            .map_err(|err| js_error(event.dom_name(), err))?;
        self.listeners.remove(event);
        Ok(())
    }

    fn listen_resize(&mut self) -> Result<(), SlideError> {
        let callback: &Function = self.bindings()?.resize.as_ref().unchecked_ref();
        self.window
            .add_event_listener_with_callback("resize", callback)
            .map_err(|err| js_error("resize", err))
    }
}
