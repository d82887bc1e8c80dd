//! The slide controller.
//!
//! A `Slide` tracks one drag at a time, keeps the wrapper offset in sync
//! with the pointer while dragging, and snaps to a slide when the drag ends.
//! Every way of changing slide (swipe, arrows, resize) ends in
//! [`Slide::change_slide`], which is the only place the committed position
//! and the active index are written.
//!
//! Timers are polled, not spawned: the platform calls [`Slide::tick`] at or
//! after [`Slide::next_deadline`].

use crate::config::SlideConfig;
use crate::error::SlideError;
use crate::gesture::{Distance, GesturePhase, SnapDecision};
use crate::host::SlideHost;
use crate::index::SlideIndex;
use crate::layout::{centered_position, SlideDescriptor};
use slidenav_foundation::gesture_constants::ACTIVE_CLASS;
use slidenav_foundation::{
    Debounce, OneShot, PointerEvent, PointerEventKind, PointerSource, WrapperEvent,
};
use slidenav_ui_graphics::Point;
use web_time::Instant;

pub struct Slide<H: SlideHost> {
    host: H,
    config: SlideConfig,
    dist: Distance,
    slides: Vec<SlideDescriptor<H::Element>>,
    index: Option<SlideIndex>,
    phase: GesturePhase,
    last_pointer_at: Option<Instant>,
    resize: Debounce<()>,
    settle: OneShot,
    initialized: bool,
}

impl<H: SlideHost> Slide<H> {
    pub fn new(host: H, config: SlideConfig) -> Self {
        Self {
            host,
            resize: Debounce::new(config.resize_debounce),
            config,
            dist: Distance::default(),
            slides: Vec::new(),
            index: None,
            phase: GesturePhase::Idle,
            last_pointer_at: None,
            settle: OneShot::new(),
            initialized: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn distance(&self) -> &Distance {
        &self.dist
    }

    pub fn slides(&self) -> &[SlideDescriptor<H::Element>] {
        &self.slides
    }

    /// `None` until [`Slide::init`] has activated the first slide.
    pub fn index(&self) -> Option<SlideIndex> {
        self.index
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    // ------------------------------------------------------------------
    // Position & gesture tracking
    // ------------------------------------------------------------------

    /// Live wrapper offset for a pointer at `pointer_x`. Stores the
    /// amplified movement for the end-of-gesture decision.
    pub fn update_position(&mut self, pointer_x: f32) -> f32 {
        self.dist.movement = (self.dist.start_x - pointer_x) * self.config.drag_amplification;
        self.dist.final_position - self.dist.movement
    }

    /// Writes `offset` to the wrapper without committing it.
    pub fn move_slide(&mut self, offset: f32) -> Result<(), SlideError> {
        self.dist.move_position = offset;
        self.host.set_wrapper_translate(offset)
    }

    pub fn on_start(&mut self, event: &PointerEvent, now: Instant) -> Result<(), SlideError> {
        let source = event.source();
        if source == PointerSource::Mouse {
            event.prevent_default();
        }

        if let GesturePhase::Dragging(previous) = self.phase {
            if previous != source {
                self.host.remove_listener(WrapperEvent::move_for(previous))?;
            }
        }

        self.dist.start_x = event.client_x();
        self.dist.movement = 0.0;
        self.phase = GesturePhase::Dragging(source);
        self.last_pointer_at = Some(now);

        self.host.add_listener(WrapperEvent::move_for(source))?;
        self.host.set_transition(false)
    }

    pub fn on_move(&mut self, event: &PointerEvent, now: Instant) -> Result<(), SlideError> {
        self.last_pointer_at = Some(now);
        let offset = self.update_position(event.client_x());
        log::trace!("drag to {} (movement {})", offset, self.dist.movement);
        self.move_slide(offset)
    }

    pub fn on_end(&mut self, event: &PointerEvent) -> Result<(), SlideError> {
        let source = match self.phase {
            GesturePhase::Dragging(source) => source,
            GesturePhase::Idle => {
                log::trace!("{} outside a gesture ignored", event.event);
                return Ok(());
            }
        };

        self.phase = GesturePhase::Idle;
        self.last_pointer_at = None;
        self.host.remove_listener(WrapperEvent::move_for(source))?;
        self.dist.final_position = self.dist.move_position;
        self.host.set_transition(true)?;
        self.change_slide_on_end()
    }

    /// Routes a wrapper event to its handler.
    ///
    /// Move events are only honoured while the matching move listener is
    /// attached, which is how the page would deliver them.
    pub fn handle_event(&mut self, event: &PointerEvent, now: Instant) -> Result<(), SlideError> {
        match event.kind() {
            PointerEventKind::Down => self.on_start(event, now),
            PointerEventKind::Move => {
                if self.phase == GesturePhase::Dragging(event.source()) {
                    self.on_move(event, now)
                } else {
                    Ok(())
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_end(event),
        }
    }

    fn change_slide_on_end(&mut self) -> Result<(), SlideError> {
        let index = self.index.ok_or(SlideError::NotInitialized)?;
        match SnapDecision::decide(self.dist.movement, self.config.swipe_threshold, &index) {
            SnapDecision::Next => self.active_next_slide(),
            SnapDecision::Previous => self.active_prev_slide(),
            SnapDecision::Stay => self.change_slide(index.active),
        }
    }

    // ------------------------------------------------------------------
    // Slide index & layout
    // ------------------------------------------------------------------

    pub fn slide_position(&self, element: &H::Element) -> f32 {
        centered_position(
            self.host.offset_left(element),
            self.host.offset_width(element),
            self.host.container_width(),
        )
    }

    /// Rebuilds the descriptors from the wrapper's current children.
    pub fn slides_config(&mut self) {
        self.slides = self.read_slides();
    }

    fn read_slides(&self) -> Vec<SlideDescriptor<H::Element>> {
        self.host
            .slide_elements()
            .into_iter()
            .map(|element| SlideDescriptor {
                position: self.slide_position(&element),
                element,
            })
            .collect()
    }

    pub fn slides_index_nav(&mut self, index: usize) {
        self.index = Some(SlideIndex::new(index, self.slides.len()));
    }

    pub fn change_slide(&mut self, index: usize) -> Result<(), SlideError> {
        let position = self
            .slides
            .get(index)
            .map(|slide| slide.position)
            .ok_or(SlideError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            })?;

        self.move_slide(position)?;
        self.slides_index_nav(index);
        self.dist.final_position = position;
        self.change_active_class(index)?;
        log::debug!("active slide {} at {}", index, position);
        Ok(())
    }

    fn change_active_class(&mut self, active: usize) -> Result<(), SlideError> {
        for slide in &self.slides {
            self.host.set_class(&slide.element, ACTIVE_CLASS, false)?;
        }
        self.host
            .set_class(&self.slides[active].element, ACTIVE_CLASS, true)
    }

    pub fn active_prev_slide(&mut self) -> Result<(), SlideError> {
        let index = self.index.ok_or(SlideError::NotInitialized)?;
        match index.prev {
            Some(prev) => self.change_slide(prev),
            None => Ok(()),
        }
    }

    pub fn active_next_slide(&mut self) -> Result<(), SlideError> {
        let index = self.index.ok_or(SlideError::NotInitialized)?;
        match index.next {
            Some(next) => self.change_slide(next),
            None => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Resize handling & timers
    // ------------------------------------------------------------------

    /// Raw window resize notification.
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize.call(now, ());
    }

    /// Debounced resize: waits for the layout to settle before reading it.
    pub fn on_resize(&mut self, now: Instant) {
        self.settle.schedule(now, self.config.settle_delay);
    }

    /// Re-reads the layout. An emptied wrapper leaves the previous layout
    /// and index in place.
    fn relayout(&mut self) -> Result<(), SlideError> {
        let active = self.index.ok_or(SlideError::NotInitialized)?.active;
        let slides = self.read_slides();
        if slides.is_empty() {
            return Err(SlideError::NoSlides);
        }
        self.slides = slides;
        let last = self.slides.len() - 1;
        if active > last {
            log::warn!("active slide {} removed; falling back to {}", active, last);
        }
        log::debug!("relayout of {} slides", self.slides.len());
        self.change_slide(active.min(last))
    }

    /// Runs every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Result<(), SlideError> {
        if self.resize.poll(now).is_some() {
            self.on_resize(now);
        }
        let relayout = if self.settle.fire(now) {
            self.relayout()
        } else {
            Ok(())
        };
        let gesture = match (self.config.gesture_timeout, self.last_pointer_at) {
            (Some(timeout), Some(last)) if now >= last + timeout => self.force_end(),
            _ => Ok(()),
        };
        relayout.and(gesture)
    }

    fn force_end(&mut self) -> Result<(), SlideError> {
        let Some(source) = self.phase.source() else {
            return Ok(());
        };
        log::warn!("drag without pointer events timed out; ending it");
        let event = match source {
            PointerSource::Mouse => WrapperEvent::MouseUp,
            PointerSource::Touch => WrapperEvent::TouchCancel,
        };
        let position = Point::new(self.dist.start_x, 0.0);
        self.on_end(&PointerEvent::new(event, position))
    }

    /// Earliest instant at which [`Slide::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let gesture = self
            .config
            .gesture_timeout
            .zip(self.last_pointer_at)
            .map(|(timeout, last)| last + timeout);
        [self.resize.deadline(), self.settle.deadline(), gesture]
            .into_iter()
            .flatten()
            .min()
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    pub fn init(&mut self) -> Result<(), SlideError> {
        if self.initialized {
            return Err(SlideError::AlreadyInitialized);
        }

        for event in WrapperEvent::GESTURE {
            self.host.add_listener(event)?;
        }
        self.slides_config();
        if self.slides.is_empty() {
            return Err(SlideError::NoSlides);
        }
        self.change_slide(0)?;
        self.host.set_transition(true)?;
        self.host.listen_resize()?;
        self.initialized = true;

        log::info!("slide controller ready with {} slides", self.slides.len());
        Ok(())
    }
}

impl<H> std::fmt::Debug for Slide<H>
where
    H: SlideHost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("config", &self.config)
            .field("dist", &self.dist)
            .field("slides", &self.slides.len())
            .field("index", &self.index)
            .field("phase", &self.phase)
            .finish()
    }
}
