//! In-memory page implementing [`SlideHost`].
//!
//! Slides are laid out left to right inside the wrapper with no gaps, the
//! way a flex row of fixed-width children would be. Every effect the
//! controller has on the page is recorded so tests can inspect it.

use slidenav_foundation::{ListenerSet, WrapperEvent};
use slidenav_ui::{SlideError, SlideHost};
use slidenav_ui_graphics::{Point, Rect, Size};

pub type SlideId = usize;

#[derive(Clone, Debug)]
struct FakeSlide {
    bounds: Rect,
    classes: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct FakeDom {
    container: Size,
    slides: Vec<FakeSlide>,
    translate: Option<f32>,
    transform_writes: Vec<f32>,
    transition: bool,
    listeners: ListenerSet,
    listening_resize: bool,
}

impl FakeDom {
    pub fn new(container_width: f32) -> Self {
        Self {
            container: Size::new(container_width, 300.0),
            slides: Vec::new(),
            translate: None,
            transform_writes: Vec::new(),
            transition: false,
            listeners: ListenerSet::new(),
            listening_resize: false,
        }
    }

    /// `count` slides, each as wide as the container.
    pub fn full_width(count: usize, container_width: f32) -> Self {
        (0..count).fold(Self::new(container_width), |dom, _| {
            dom.with_slide(container_width)
        })
    }

    /// Appends a slide after the last one.
    pub fn with_slide(mut self, width: f32) -> Self {
        let left = self
            .slides
            .last()
            .map(|slide| slide.bounds.right())
            .unwrap_or(0.0);
        let size = Size::new(width, self.container.height);
        self.slides.push(FakeSlide {
            bounds: Rect::from_origin_size(Point::new(left, 0.0), size),
            classes: Vec::new(),
        });
        self
    }

    /// Simulates a reflow: new container width, slides re-laid out with the
    /// given widths. Takes effect on the controller's next layout read.
    pub fn reflow(&mut self, container_width: f32, slide_widths: &[f32]) {
        self.container.width = container_width;
        let mut left = 0.0;
        self.slides = slide_widths
            .iter()
            .enumerate()
            .map(|(id, width)| {
                let classes = self
                    .slides
                    .get(id)
                    .map(|slide| slide.classes.clone())
                    .unwrap_or_default();
                let bounds = Rect::from_origin_size(
                    Point::new(left, 0.0),
                    Size::new(*width, self.container.height),
                );
                left += width;
                FakeSlide { bounds, classes }
            })
            .collect();
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_bounds(&self, id: SlideId) -> Option<Rect> {
        self.slides.get(id).map(|slide| slide.bounds)
    }

    /// Current wrapper offset; `None` before anything was written.
    pub fn translate(&self) -> Option<f32> {
        self.translate
    }

    /// The wrapper's inline transform as the browser would see it.
    pub fn wrapper_transform(&self) -> Option<String> {
        self.translate.map(|x| format!("translate3d({}px, 0, 0)", x))
    }

    pub fn transform_writes(&self) -> &[f32] {
        &self.transform_writes
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition
    }

    pub fn is_listening(&self, event: WrapperEvent) -> bool {
        self.listeners.contains(event)
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn is_listening_resize(&self) -> bool {
        self.listening_resize
    }

    pub fn has_class(&self, id: SlideId, class: &str) -> bool {
        self.slides
            .get(id)
            .map(|slide| slide.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn slides_with_class(&self, class: &str) -> Vec<SlideId> {
        (0..self.slides.len())
            .filter(|id| self.has_class(*id, class))
            .collect()
    }
}

impl SlideHost for FakeDom {
    type Element = SlideId;

    fn container_width(&self) -> f32 {
        self.container.width
    }

    fn slide_elements(&self) -> Vec<SlideId> {
        (0..self.slides.len()).collect()
    }

    fn offset_left(&self, element: &SlideId) -> f32 {
        self.slides[*element].bounds.x
    }

    fn offset_width(&self, element: &SlideId) -> f32 {
        self.slides[*element].bounds.width
    }

    fn set_wrapper_translate(&mut self, x: f32) -> Result<(), SlideError> {
        self.translate = Some(x);
        self.transform_writes.push(x);
        Ok(())
    }

    fn set_transition(&mut self, enabled: bool) -> Result<(), SlideError> {
        self.transition = enabled;
        Ok(())
    }

    fn set_class(
        &mut self,
        element: &SlideId,
        class: &str,
        enabled: bool,
    ) -> Result<(), SlideError> {
        let slide = self
            .slides
            .get_mut(*element)
            .ok_or_else(|| SlideError::Platform(format!("slide {} detached", element)))?;
        let present = slide.classes.iter().position(|c| c == class);
        match (enabled, present) {
            (true, None) => slide.classes.push(class.to_string()),
            (false, Some(at)) => {
                slide.classes.remove(at);
            }
            _ => {}
        }
        Ok(())
    }

    fn add_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError> {
        self.listeners.insert(event);
        Ok(())
    }

    fn remove_listener(&mut self, event: WrapperEvent) -> Result<(), SlideError> {
        self.listeners.remove(event);
        Ok(())
    }

    fn listen_resize(&mut self) -> Result<(), SlideError> {
        self.listening_resize = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_are_laid_out_back_to_back() {
        let dom = FakeDom::new(500.0).with_slide(200.0).with_slide(300.0);
        assert_eq!(dom.slide_count(), 2);
        assert_eq!(dom.slide_bounds(1), Some(Rect::new(200.0, 0.0, 300.0, 300.0)));
        assert_eq!(dom.offset_left(&0), 0.0);
        assert_eq!(dom.offset_left(&1), 200.0);
        assert_eq!(dom.offset_width(&1), 300.0);
    }

    #[test]
    fn reflow_keeps_classes() {
        let mut dom = FakeDom::full_width(3, 200.0);
        dom.set_class(&1, "active", true).expect("class set");
        dom.reflow(400.0, &[400.0, 400.0, 400.0]);
        assert!(dom.has_class(1, "active"));
        assert_eq!(dom.offset_left(&2), 800.0);
        assert_eq!(dom.container_width(), 400.0);
    }

    #[test]
    fn wrapper_transform_uses_translate3d() {
        let mut dom = FakeDom::full_width(2, 200.0);
        assert_eq!(dom.wrapper_transform(), None);
        dom.set_wrapper_translate(-200.0).expect("translate");
        assert_eq!(
            dom.wrapper_transform().as_deref(),
            Some("translate3d(-200px, 0, 0)")
        );
    }
}
