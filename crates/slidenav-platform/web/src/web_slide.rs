//! A [`SlideNav`] bound to the page.
//!
//! Wrapper events and window resizes reach the controller through two
//! closures created here and stored in the [`DomHost`]. Both hold only weak
//! references, so the controller is freed with the `WebSlideNav`. After each
//! event the pending timer deadline is turned into at most one `setTimeout`.

use crate::arrows::DomArrows;
use crate::dom_host::{Bindings, DomHost, EventClosure};
use crate::events::pointer_event;
use crate::js_error;
use slidenav_ui::{
    ArrowOptions, SharedSlide, Slide, SlideConfig, SlideError, SlideNav, SlideOptions,
};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};
use web_time::Instant;

type WeakSlide = Weak<RefCell<Slide<DomHost>>>;

/// The single pending `setTimeout` that drives [`Slide::tick`].
struct Wakeup {
    window: Window,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Wakeup {
    fn new(window: Window, slide: WeakSlide) -> Rc<Self> {
        let wakeup = Rc::new(Self {
            window,
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&wakeup);
        let callback = Closure::wrap(Box::new(move || {
            let Some(wakeup) = weak.upgrade() else {
                return;
            };
            wakeup.handle.set(None);
            let Some(slide) = slide.upgrade() else {
                return;
            };
            let deadline = {
                let mut slide = slide.borrow_mut();
                if let Err(err) = slide.tick(Instant::now()) {
                    log::warn!("slide timer: {}", err);
                }
                slide.next_deadline()
            };
            wakeup.schedule(deadline);
        }) as Box<dyn FnMut()>);
        *wakeup.callback.borrow_mut() = Some(callback);

        wakeup
    }

    /// Replaces the pending timeout with one firing at `deadline`.
    fn schedule(&self, deadline: Option<Instant>) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let Some(deadline) = deadline else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };

        let delay = deadline.saturating_duration_since(Instant::now());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => log::warn!("{}", js_error("setTimeout", err)),
        }
    }
}

impl Drop for Wakeup {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

pub struct WebSlideNav {
    nav: SlideNav<DomHost>,
    arrows: DomArrows,
    _wakeup: Rc<Wakeup>,
}

impl WebSlideNav {
    /// Resolves the container and wrapper and binds the listener closures.
    /// Nothing is attached to the page until [`WebSlideNav::init`].
    pub fn new(options: &SlideOptions, config: SlideConfig) -> Result<Self, SlideError> {
        let window =
            web_sys::window().ok_or_else(|| SlideError::Platform("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SlideError::Platform("window has no document".into()))?;

        let host = DomHost::query(window.clone(), options)?;
        let slide: SharedSlide<DomHost> = Rc::new(RefCell::new(Slide::new(host, config)));
        let wakeup = Wakeup::new(window, Rc::downgrade(&slide));

        let bindings = Bindings {
            pointer: pointer_listener(Rc::downgrade(&slide), Rc::downgrade(&wakeup)),
            resize: resize_listener(Rc::downgrade(&slide), Rc::downgrade(&wakeup)),
        };
        slide.borrow_mut().host_mut().bind(bindings);

        Ok(Self {
            nav: SlideNav::from_shared(slide),
            arrows: DomArrows::new(document),
            _wakeup: wakeup,
        })
    }

    pub fn init(&self) -> Result<(), SlideError> {
        self.nav.init()
    }

    pub fn add_arrow(&mut self, options: ArrowOptions) -> Result<(), SlideError> {
        self.nav.add_arrow(&mut self.arrows, options)
    }

    pub fn slide(&self) -> &SharedSlide<DomHost> {
        self.nav.slide()
    }

    /// Keeps the controller running for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn pointer_listener(slide: WeakSlide, wakeup: Weak<Wakeup>) -> EventClosure {
    Closure::wrap(Box::new(move |event: Event| {
        let Some(pointer) = pointer_event(&event) else {
            return;
        };
        let Some(slide) = slide.upgrade() else {
            return;
        };
        let deadline = {
            let mut slide = slide.borrow_mut();
            if let Err(err) = slide.handle_event(&pointer, Instant::now()) {
                log::warn!("{} handler: {}", pointer.event, err);
            }
            slide.next_deadline()
        };
        if pointer.is_default_prevented() {
            event.prevent_default();
        }
        if let Some(wakeup) = wakeup.upgrade() {
            wakeup.schedule(deadline);
        }
    }) as Box<dyn FnMut(Event)>)
}

fn resize_listener(slide: WeakSlide, wakeup: Weak<Wakeup>) -> EventClosure {
    Closure::wrap(Box::new(move |_event: Event| {
        let Some(slide) = slide.upgrade() else {
            return;
        };
        let deadline = {
            let mut slide = slide.borrow_mut();
            slide.notify_resize(Instant::now());
            slide.next_deadline()
        };
        if let Some(wakeup) = wakeup.upgrade() {
            wakeup.schedule(deadline);
        }
    }) as Box<dyn FnMut(Event)>)
}
