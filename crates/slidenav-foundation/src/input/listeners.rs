//! Bookkeeping of which wrapper listeners are currently attached.

use super::types::WrapperEvent;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default)]
pub struct ListenerSet {
    attached: SmallVec<[WrapperEvent; 8]>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the listener was already attached, matching
    /// `addEventListener`'s handling of a duplicate registration.
    pub fn insert(&mut self, event: WrapperEvent) -> bool {
        if self.contains(event) {
            return false;
        }
        self.attached.push(event);
        true
    }

    pub fn remove(&mut self, event: WrapperEvent) -> bool {
        match self.attached.iter().position(|e| *e == event) {
            Some(index) => {
                self.attached.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, event: WrapperEvent) -> bool {
        self.attached.contains(&event)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = WrapperEvent> + '_ {
        self.attached.iter().copied()
    }
}
