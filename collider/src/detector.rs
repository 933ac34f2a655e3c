use crate::collider::Collider;
use crate::event::ListenerId;

use std::cell::RefCell;
use std::rc::Rc;

/// Records the owners a collider reported during the current frame.
///
/// Recorded owners may belong to entities destroyed later in the same
/// frame, so they are only handed out through [`drain_live`](Self::drain_live).
#[derive(Debug, Default)]
pub struct Detector {
    hits: Rc<RefCell<Vec<u32>>>,
    listener: Option<ListenerId>,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn attach(&mut self, collider: &mut Collider) {
        if self.listener.is_some() {
            return;
        }
        let hits = Rc::clone(&self.hits);
        let id = collider.subscribe(move |_, other| hits.borrow_mut().push(other));
        self.listener = Some(id);
    }

    pub fn detach(&mut self, collider: &mut Collider) {
        if let Some(id) = self.listener.take() {
            collider.unsubscribe(id);
        }
    }

    pub fn len(&self) -> usize {
        self.hits.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.borrow().is_empty()
    }

    /// Returns the recorded owners for which `is_alive` holds and forgets
    /// everything recorded so far.
    pub fn drain_live<F>(&self, mut is_alive: F) -> Vec<u32>
    where
        F: FnMut(u32) -> bool,
    {
        let mut hits = self.hits.borrow_mut();
        let live = hits.drain(..).filter(|&owner| is_alive(owner)).collect();
        live
    }
}
