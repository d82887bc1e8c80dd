use slidenav_foundation::{PointerEvent, PointerSource, WrapperEvent};
use slidenav_ui_graphics::Point;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Inline `transition` value while programmatic snaps animate.
pub const TRANSITION: &str = "transform .3s";

pub fn translate3d(x: f32) -> String {
    format!("translate3d({}px, 0, 0)", x)
}

/// Reduces a native wrapper event to the record the controller consumes.
///
/// Mouse events read `clientX`/`clientY`; touch events read the first
/// changed touch. Returns `None` for unrelated event types or a touch event
/// without changed touches.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    let kind = WrapperEvent::from_dom_name(&event.type_())?;
    let position = match kind.source() {
        PointerSource::Mouse => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Point::new(mouse.client_x() as f32, mouse.client_y() as f32)
        }
        PointerSource::Touch => {
            let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
            Point::new(touch.client_x() as f32, touch.client_y() as f32)
        }
    };
    Some(PointerEvent::new(kind, position))
}
