use std::{cell::RefCell, collections::VecDeque};

/// A single-threaded FIFO queue.
pub struct SyncQueue<T> {
    el: RefCell<VecDeque<T>>,
}

impl<T> Default for SyncQueue<T> {
    fn default() -> Self {
        Self {
            el: Default::default(),
        }
    }
}

impl<T> SyncQueue<T> {
    pub fn push(&self, t: T) {
        self.el.borrow_mut().push_back(t);
    }

    pub fn try_pop(&self) -> Option<T> {
        self.el.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.el.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.el.borrow_mut().clear();
    }
}
