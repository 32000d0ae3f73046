use {
    ahash::AHashMap,
    std::{
        cell::{RefCell, RefMut},
        fmt::{Debug, Formatter},
        hash::Hash,
    },
};

/// A hash map behind a `RefCell`.
///
/// Accessors never hand out borrows of the values. `get` clones, so handlers
/// can mutate the map while a previously fetched value is still in use.
pub struct CopyHashMap<K, V> {
    map: RefCell<AHashMap<K, V>>,
}

impl<K, V> Default for CopyHashMap<K, V> {
    fn default() -> Self {
        Self {
            map: Default::default(),
        }
    }
}

impl<K: Hash + Eq, V> CopyHashMap<K, V> {
    pub fn set(&self, k: K, v: V) -> Option<V> {
        self.map.borrow_mut().insert(k, v)
    }

    pub fn get(&self, k: &K) -> Option<V>
    where
        V: Clone,
    {
        self.map.borrow().get(k).cloned()
    }

    pub fn remove(&self, k: &K) -> Option<V> {
        self.map.borrow_mut().remove(k)
    }

    pub fn contains(&self, k: &K) -> bool {
        self.map.borrow().contains_key(k)
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn clear(&self) {
        self.map.borrow_mut().clear();
    }

    pub fn take(&self) -> AHashMap<K, V> {
        self.map.take()
    }

    pub fn lock(&self) -> RefMut<'_, AHashMap<K, V>> {
        self.map.borrow_mut()
    }
}

impl<K: Hash + Eq + Debug, V: Debug> Debug for CopyHashMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.map.borrow().fmt(f)
    }
}
