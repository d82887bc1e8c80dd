use slidenav_ui_graphics::Point;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// DOM event types the slide controller listens for on the wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapperEvent {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl WrapperEvent {
    pub const ALL: [WrapperEvent; 7] = [
        WrapperEvent::MouseDown,
        WrapperEvent::MouseMove,
        WrapperEvent::MouseUp,
        WrapperEvent::TouchStart,
        WrapperEvent::TouchMove,
        WrapperEvent::TouchEnd,
        WrapperEvent::TouchCancel,
    ];

    /// Listeners attached for the whole lifetime of the controller.
    pub const GESTURE: [WrapperEvent; 5] = [
        WrapperEvent::MouseDown,
        WrapperEvent::TouchStart,
        WrapperEvent::MouseUp,
        WrapperEvent::TouchEnd,
        WrapperEvent::TouchCancel,
    ];

    /// The event type string passed to `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            WrapperEvent::MouseDown => "mousedown",
            WrapperEvent::MouseMove => "mousemove",
            WrapperEvent::MouseUp => "mouseup",
            WrapperEvent::TouchStart => "touchstart",
            WrapperEvent::TouchMove => "touchmove",
            WrapperEvent::TouchEnd => "touchend",
            WrapperEvent::TouchCancel => "touchcancel",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.dom_name() == name)
    }

    pub fn kind(self) -> PointerEventKind {
        match self {
            WrapperEvent::MouseDown | WrapperEvent::TouchStart => PointerEventKind::Down,
            WrapperEvent::MouseMove | WrapperEvent::TouchMove => PointerEventKind::Move,
            WrapperEvent::MouseUp | WrapperEvent::TouchEnd => PointerEventKind::Up,
            WrapperEvent::TouchCancel => PointerEventKind::Cancel,
        }
    }

    pub fn source(self) -> PointerSource {
        match self {
            WrapperEvent::MouseDown | WrapperEvent::MouseMove | WrapperEvent::MouseUp => {
                PointerSource::Mouse
            }
            _ => PointerSource::Touch,
        }
    }

    /// The move listener that belongs to a gesture started from `source`.
    pub fn move_for(source: PointerSource) -> Self {
        match source {
            PointerSource::Mouse => WrapperEvent::MouseMove,
            PointerSource::Touch => WrapperEvent::TouchMove,
        }
    }
}

impl fmt::Display for WrapperEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// A wrapper event reduced to what the controller reads from it.
///
/// `position` holds `clientX`/`clientY` for mouse events and the first
/// changed touch for touch events. The default-prevented flag is shared
/// between copies so the platform can forward it to the native event once
/// the controller has handled the record.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub event: WrapperEvent,
    pub position: Point,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(event: WrapperEvent, position: Point) -> Self {
        Self {
            event,
            position,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn mouse(kind: PointerEventKind, client_x: f32, client_y: f32) -> Self {
        let event = match kind {
            PointerEventKind::Down => WrapperEvent::MouseDown,
            PointerEventKind::Move => WrapperEvent::MouseMove,
            // Mice have no cancel; treat it as a release.
            PointerEventKind::Up | PointerEventKind::Cancel => WrapperEvent::MouseUp,
        };
        Self::new(event, Point::new(client_x, client_y))
    }

    pub fn touch(kind: PointerEventKind, client_x: f32, client_y: f32) -> Self {
        let event = match kind {
            PointerEventKind::Down => WrapperEvent::TouchStart,
            PointerEventKind::Move => WrapperEvent::TouchMove,
            PointerEventKind::Up => WrapperEvent::TouchEnd,
            PointerEventKind::Cancel => WrapperEvent::TouchCancel,
        };
        Self::new(event, Point::new(client_x, client_y))
    }

    pub fn kind(&self) -> PointerEventKind {
        self.event.kind()
    }

    pub fn source(&self) -> PointerSource {
        self.event.source()
    }

    pub fn client_x(&self) -> f32 {
        self.position.x
    }

    /// Suppress the browser's default handling (native image/text drag).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_round_trip() {
        for event in WrapperEvent::ALL {
            assert_eq!(WrapperEvent::from_dom_name(event.dom_name()), Some(event));
        }
        assert_eq!(WrapperEvent::from_dom_name("click"), None);
    }

    #[test]
    fn move_listener_matches_source() {
        assert_eq!(
            WrapperEvent::move_for(WrapperEvent::MouseDown.source()),
            WrapperEvent::MouseMove
        );
        assert_eq!(
            WrapperEvent::move_for(WrapperEvent::TouchStart.source()),
            WrapperEvent::TouchMove
        );
    }

    #[test]
    fn prevent_default_is_shared_between_copies() {
        let event = PointerEvent::mouse(PointerEventKind::Down, 10.0, 0.0);
        let copy = event.clone();
        copy.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn touch_cancel_keeps_its_own_kind() {
        let event = PointerEvent::touch(PointerEventKind::Cancel, 0.0, 0.0);
        assert_eq!(event.event, WrapperEvent::TouchCancel);
        assert_eq!(event.source(), PointerSource::Touch);
    }
}
