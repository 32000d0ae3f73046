use {
    crate::utils::{clonecell::CloneCell, syncqueue::SyncQueue},
    std::rc::Rc,
};

/// An event queue that pokes a callback whenever an event is enqueued.
///
/// The consumer registers the callback once and drains `events` from its own
/// loop when poked.
pub struct OnChange<T> {
    pub on_change: CloneCell<Option<Rc<dyn Fn()>>>,
    pub events: SyncQueue<T>,
}

impl<T> OnChange<T> {
    pub fn send_event(&self, event: T) {
        self.events.push(event);
        if let Some(cb) = self.on_change.get() {
            cb();
        }
    }

    pub fn clear(&self) {
        self.on_change.take();
        self.events.clear();
    }
}

impl<T> Default for OnChange<T> {
    fn default() -> Self {
        Self {
            on_change: Default::default(),
            events: Default::default(),
        }
    }
}
