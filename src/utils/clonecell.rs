use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    mem,
};

/// A cell for values that are cheap to clone, usually `Option<Rc<T>>`.
///
/// Readers get a clone instead of a borrow so that no borrow is held while
/// calling back into the object graph.
pub struct CloneCell<T: Clone> {
    cell: RefCell<T>,
}

impl<T: Clone> CloneCell<T> {
    pub fn new(t: T) -> Self {
        Self {
            cell: RefCell::new(t),
        }
    }

    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }

    pub fn set(&self, new: T) -> T {
        mem::replace(&mut *self.cell.borrow_mut(), new)
    }
}

impl<T: Clone + Default> CloneCell<T> {
    pub fn take(&self) -> T {
        self.cell.take()
    }
}

impl<T: Clone + Default> Default for CloneCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Debug> Debug for CloneCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.cell.borrow().fmt(f)
    }
}
