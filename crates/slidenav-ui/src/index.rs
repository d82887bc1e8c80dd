/// Neighbours of the active slide.
///
/// `prev` is `None` on the first slide and `next` is `None` on the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    pub prev: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl SlideIndex {
    pub fn new(active: usize, len: usize) -> Self {
        Self {
            prev: active.checked_sub(1),
            active,
            next: (active + 1 < len).then_some(active + 1),
        }
    }

    pub fn is_first(&self) -> bool {
        self.prev.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
