use {smallvec::SmallVec, std::cell::RefCell};

/// A small association map that stores up to `N` entries inline.
///
/// Lookups are linear. Intended for maps that almost always hold zero or one
/// entry, like the in-flight fetches of a feedback object.
pub struct SmallMap<K, V, const N: usize> {
    m: RefCell<SmallVec<[(K, V); N]>>,
}

impl<K, V, const N: usize> Default for SmallMap<K, V, N> {
    fn default() -> Self {
        Self {
            m: RefCell::new(Default::default()),
        }
    }
}

impl<K: Eq, V, const N: usize> SmallMap<K, V, N> {
    pub fn insert(&self, k: K, v: V) -> Option<V> {
        let mut m = self.m.borrow_mut();
        for (ek, ev) in m.iter_mut() {
            if *ek == k {
                return Some(std::mem::replace(ev, v));
            }
        }
        m.push((k, v));
        None
    }

    pub fn remove(&self, k: &K) -> Option<V> {
        let mut m = self.m.borrow_mut();
        let pos = m.iter().position(|(ek, _)| ek == k)?;
        Some(m.swap_remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.m.borrow().is_empty()
    }

    pub fn take(&self) -> SmallVec<[(K, V); N]> {
        self.m.take()
    }
}
