use std::{
    cell::Cell,
    fmt::{Debug, Formatter},
    ops::Add,
};

/// A `Cell` for numbers.
#[derive(Default)]
pub struct NumCell<T> {
    cell: Cell<T>,
}

impl<T: Copy> NumCell<T> {
    pub fn new(t: T) -> Self {
        Self { cell: Cell::new(t) }
    }

    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub fn set(&self, n: T) {
        self.cell.set(n);
    }

    pub fn fetch_add(&self, n: T) -> T
    where
        T: Add<Output = T>,
    {
        let old = self.cell.get();
        self.cell.set(old + n);
        old
    }
}

impl<T: Copy + Debug> Debug for NumCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.cell.get().fmt(f)
    }
}
