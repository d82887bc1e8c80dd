//! Previous/next arrows on top of a shared [`Slide`].

use crate::config::ArrowOptions;
use crate::error::SlideError;
use crate::host::{ArrowBinder, SlideHost};
use crate::slide::Slide;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedSlide<H> = Rc<RefCell<Slide<H>>>;

/// A slide controller plus the trigger elements that drive it.
///
/// Click handlers keep only a weak reference, so dropping every
/// `SharedSlide` handle turns the arrows into no-ops instead of keeping the
/// controller alive.
pub struct SlideNav<H: SlideHost> {
    slide: SharedSlide<H>,
    arrows: Option<ArrowOptions>,
}

impl<H: SlideHost + 'static> SlideNav<H> {
    pub fn new(slide: Slide<H>) -> Self {
        Self::from_shared(Rc::new(RefCell::new(slide)))
    }

    pub fn from_shared(slide: SharedSlide<H>) -> Self {
        Self {
            slide,
            arrows: None,
        }
    }

    pub fn slide(&self) -> &SharedSlide<H> {
        &self.slide
    }

    pub fn init(&self) -> Result<(), SlideError> {
        self.slide.borrow_mut().init()
    }

    /// Selectors of the wired arrows, once [`SlideNav::add_arrow`] succeeded.
    pub fn arrows(&self) -> Option<&ArrowOptions> {
        self.arrows.as_ref()
    }

    pub fn add_arrow<B: ArrowBinder>(
        &mut self,
        binder: &mut B,
        options: ArrowOptions,
    ) -> Result<(), SlideError> {
        let prev = binder.resolve(&options.prev_element)?;
        let next = binder.resolve(&options.next_element)?;

        let slide = Rc::downgrade(&self.slide);
        binder.on_click(
            &prev,
            Box::new(move || with_slide(&slide, "previous", Slide::active_prev_slide)),
        )?;

        let slide = Rc::downgrade(&self.slide);
        binder.on_click(
            &next,
            Box::new(move || with_slide(&slide, "next", Slide::active_next_slide)),
        )?;

        log::debug!(
            "arrows wired: {} / {}",
            options.prev_element,
            options.next_element
        );
        self.arrows = Some(options);
        Ok(())
    }
}

fn with_slide<H: SlideHost>(
    slide: &Weak<RefCell<Slide<H>>>,
    label: &str,
    action: fn(&mut Slide<H>) -> Result<(), SlideError>,
) {
    let Some(slide) = slide.upgrade() else {
        return;
    };
    if let Err(err) = action(&mut *slide.borrow_mut()) {
        log::warn!("{} arrow: {}", label, err);
    };
}
