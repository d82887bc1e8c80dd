//! [`ArrowBinder`] over `document.querySelector` and click listeners.

use crate::dom_host::{query_html, EventClosure};
use crate::js_error;
use slidenav_ui::{ArrowBinder, ClickHandler, SlideError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

/// Owns the click closures; dropping it detaches nothing but invalidates
/// the handlers, so keep it alive as long as the page.
pub struct DomArrows {
    document: Document,
    closures: Vec<EventClosure>,
}

impl DomArrows {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            closures: Vec::new(),
        }
    }
}

impl ArrowBinder for DomArrows {
    type Element = HtmlElement;

    fn resolve(&self, selector: &str) -> Result<HtmlElement, SlideError> {
        query_html(&self.document, selector)
    }

    fn on_click(
        &mut self,
        element: &HtmlElement,
        mut handler: ClickHandler,
    ) -> Result<(), SlideError> {
        let closure =
            Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| js_error("click", err))?;
        self.closures.push(closure);
        Ok(())
    }
}
