//! Robot-style driver for slide gestures
//!
//! The robot owns a [`SlideNav`] over a [`FakeDom`], a [`FakeArrows`]
//! binder and a synthetic clock. Interactions go through the same entry
//! points the web platform uses, and wrapper events are only delivered
//! while the page has a listener for them.
//!
//! # Example
//!
//! ```
//! use slidenav_testing::{FakeDom, SlideRobot};
//!
//! let mut robot = SlideRobot::launch(FakeDom::full_width(5, 200.0));
//!
//! // Swipe left by 150px: amplified to 240px, enough to advance.
//! robot.drag(300.0, 150.0);
//!
//! assert_eq!(robot.active(), 1);
//! assert_eq!(robot.translate(), -200.0);
//! ```

use crate::fake_arrows::FakeArrows;
use crate::fake_dom::FakeDom;
use slidenav_foundation::{PointerEvent, PointerEventKind};
use slidenav_ui::{ArrowOptions, Slide, SlideConfig, SlideError, SlideNav};
use std::cell::{Ref, RefMut};
use web_time::{Duration, Instant};

/// Time between synthetic pointer moves, roughly one frame at 60 FPS.
const MOVE_INTERVAL: Duration = Duration::from_millis(16);

/// Number of intermediate moves in a [`SlideRobot::drag`].
const DRAG_STEPS: usize = 10;

pub struct SlideRobot {
    nav: SlideNav<FakeDom>,
    arrows: FakeArrows,
    now: Instant,
}

impl SlideRobot {
    /// Wraps `dom` in a controller with the default config, not yet
    /// initialized.
    pub fn new(dom: FakeDom) -> Self {
        Self::with_config(dom, SlideConfig::default())
    }

    pub fn with_config(dom: FakeDom, config: SlideConfig) -> Self {
        Self {
            nav: SlideNav::new(Slide::new(dom, config)),
            arrows: FakeArrows::new([".prev", ".next"]),
            now: Instant::now(),
        }
    }

    /// Creates and initializes the controller.
    pub fn launch(dom: FakeDom) -> Self {
        let robot = Self::new(dom);
        robot.init().expect("slide init succeeds");
        robot
    }

    pub fn launch_with_config(dom: FakeDom, config: SlideConfig) -> Self {
        let robot = Self::with_config(dom, config);
        robot.init().expect("slide init succeeds");
        robot
    }

    pub fn init(&self) -> Result<(), SlideError> {
        self.nav.init()
    }

    pub fn nav(&self) -> &SlideNav<FakeDom> {
        &self.nav
    }

    pub fn slide(&self) -> Ref<'_, Slide<FakeDom>> {
        self.nav.slide().borrow()
    }

    pub fn slide_mut(&self) -> RefMut<'_, Slide<FakeDom>> {
        self.nav.slide().borrow_mut()
    }

    pub fn dom(&self) -> Ref<'_, FakeDom> {
        Ref::map(self.slide(), |slide| slide.host())
    }

    pub fn dom_mut(&self) -> RefMut<'_, FakeDom> {
        RefMut::map(self.slide_mut(), |slide| slide.host_mut())
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    /// Delivers `event` if the page currently listens for it. Returns
    /// whether it was delivered.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        if !self.dom().is_listening(event.event) {
            log::trace!("{} dropped: no listener attached", event.event);
            return false;
        }
        let result = self.slide_mut().handle_event(&event, self.now);
        if let Err(err) = result {
            panic!("{} handler failed: {}", event.event, err);
        }
        true
    }

    pub fn mouse_down(&mut self, x: f32) -> bool {
        self.dispatch(PointerEvent::mouse(PointerEventKind::Down, x, 0.0))
    }

    pub fn mouse_move(&mut self, x: f32) -> bool {
        self.now += MOVE_INTERVAL;
        self.dispatch(PointerEvent::mouse(PointerEventKind::Move, x, 0.0))
    }

    pub fn mouse_up(&mut self, x: f32) -> bool {
        self.dispatch(PointerEvent::mouse(PointerEventKind::Up, x, 0.0))
    }

    pub fn touch_start(&mut self, x: f32) -> bool {
        self.dispatch(PointerEvent::touch(PointerEventKind::Down, x, 0.0))
    }

    pub fn touch_move(&mut self, x: f32) -> bool {
        self.now += MOVE_INTERVAL;
        self.dispatch(PointerEvent::touch(PointerEventKind::Move, x, 0.0))
    }

    pub fn touch_end(&mut self, x: f32) -> bool {
        self.dispatch(PointerEvent::touch(PointerEventKind::Up, x, 0.0))
    }

    pub fn touch_cancel(&mut self, x: f32) -> bool {
        self.dispatch(PointerEvent::touch(PointerEventKind::Cancel, x, 0.0))
    }

    /// Mouse drag from `from_x` to `to_x` in evenly spaced moves.
    pub fn drag(&mut self, from_x: f32, to_x: f32) {
        self.mouse_down(from_x);
        for x in steps(from_x, to_x) {
            self.mouse_move(x);
        }
        self.mouse_up(to_x);
    }

    /// Touch swipe from `from_x` to `to_x` in evenly spaced moves.
    pub fn swipe(&mut self, from_x: f32, to_x: f32) {
        self.touch_start(from_x);
        for x in steps(from_x, to_x) {
            self.touch_move(x);
        }
        self.touch_end(to_x);
    }

    // ------------------------------------------------------------------
    // Time & resize
    // ------------------------------------------------------------------

    /// Advances the clock and runs whatever timers became due.
    pub fn advance_time(&mut self, duration: Duration) {
        self.now += duration;
        log::trace!("clock advanced by {:?}", duration);
        let now = self.now;
        if let Err(err) = self.slide_mut().tick(now) {
            panic!("timer tick failed: {}", err);
        }
    }

    /// Fires one window resize event.
    pub fn resize_window(&mut self) {
        assert!(
            self.dom().is_listening_resize(),
            "resize fired before the controller listens for it"
        );
        let now = self.now;
        self.slide_mut().notify_resize(now);
    }

    /// Jumps from deadline to deadline until no timer is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..16 {
            let Some(deadline) = self.slide().next_deadline() else {
                return;
            };
            let wait = deadline.saturating_duration_since(self.now);
            self.advance_time(wait);
        }
        panic!("timers still pending after 16 wakeups");
    }

    // ------------------------------------------------------------------
    // Arrows
    // ------------------------------------------------------------------

    /// Wires the `.prev` / `.next` trigger elements.
    pub fn add_arrows(&mut self) -> Result<(), SlideError> {
        self.add_arrow(ArrowOptions::new(".prev", ".next"))
    }

    pub fn add_arrow(&mut self, options: ArrowOptions) -> Result<(), SlideError> {
        self.nav.add_arrow(&mut self.arrows, options)
    }

    pub fn click(&mut self, selector: &str) -> bool {
        self.arrows.click(selector)
    }

    pub fn arrows(&self) -> &FakeArrows {
        &self.arrows
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn active(&self) -> usize {
        self.slide()
            .index()
            .map(|index| index.active)
            .expect("slide controller initialized")
    }

    /// Offset currently written to the wrapper.
    pub fn translate(&self) -> f32 {
        self.dom().translate().expect("wrapper offset written")
    }

    pub fn final_position(&self) -> f32 {
        self.slide().distance().final_position
    }

    pub fn positions(&self) -> Vec<f32> {
        self.slide()
            .slides()
            .iter()
            .map(|slide| slide.position)
            .collect()
    }
}

fn steps(from_x: f32, to_x: f32) -> impl Iterator<Item = f32> {
    (1..=DRAG_STEPS).map(move |i| {
        let t = i as f32 / DRAG_STEPS as f32;
        from_x + (to_x - from_x) * t
    })
}
