//! In-memory trigger elements implementing [`ArrowBinder`].

use slidenav_ui::{ArrowBinder, ClickHandler, SlideError};
use std::collections::HashMap;

/// Trigger elements addressed by selector.
///
/// Only selectors passed to [`FakeArrows::new`] resolve; anything else
/// fails the way `querySelector` returning null would.
#[derive(Default)]
pub struct FakeArrows {
    handlers: HashMap<String, Vec<ClickHandler>>,
}

impl FakeArrows {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            handlers: selectors
                .into_iter()
                .map(|selector| (selector.into(), Vec::new()))
                .collect(),
        }
    }

    /// Fires every click handler registered on `selector`. Returns `false`
    /// when the element does not exist.
    pub fn click(&mut self, selector: &str) -> bool {
        match self.handlers.get_mut(selector) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler();
                }
                true
            }
            None => false,
        }
    }

    pub fn handler_count(&self, selector: &str) -> usize {
        self.handlers.get(selector).map(Vec::len).unwrap_or(0)
    }
}

impl ArrowBinder for FakeArrows {
    type Element = String;

    fn resolve(&self, selector: &str) -> Result<String, SlideError> {
        if self.handlers.contains_key(selector) {
            Ok(selector.to_string())
        } else {
            Err(SlideError::SelectorNotFound(selector.to_string()))
        }
    }

    fn on_click(&mut self, element: &String, handler: ClickHandler) -> Result<(), SlideError> {
        self.handlers
            .get_mut(element)
            .ok_or_else(|| SlideError::SelectorNotFound(element.clone()))?
            .push(handler);
        Ok(())
    }
}

impl std::fmt::Debug for FakeArrows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut selectors: Vec<&String> = self.handlers.keys().collect();
        selectors.sort();
        f.debug_struct("FakeArrows")
            .field("selectors", &selectors)
            .finish()
    }
}
