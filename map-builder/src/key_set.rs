#[cfg(test)]
mod tests;

use {
    crate::{keys::Keys, MapBuilder},
    core::{
        fmt::{Debug, Formatter},
        hash::{BuildHasher, Hash},
    },
    hashbrown::Equivalent,
};

/// A read-only view of the keys of a [`MapBuilder`].
///
/// This `struct` is created by the [`key_set`](MapBuilder::key_set) method.
pub struct KeySet<'a, K, V, S> {
    pub(crate) map: &'a MapBuilder<K, V, S>,
}

/// A view of the keys of a [`MapBuilder`] through which entries can be removed.
///
/// This `struct` is created by the [`key_set_mut`](MapBuilder::key_set_mut) method,
/// which fails if the map has been built.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
/// let mut keys = map.key_set_mut().unwrap();
/// keys.retain(|k| *k != 2);
/// assert!(keys.remove(&3));
/// assert!(!keys.remove(&3));
/// assert_eq!(keys.len(), 1);
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a")]);
/// ```
pub struct KeySetMut<'a, K, V, S> {
    pub(crate) map: &'a mut MapBuilder<K, V, S>,
}

impl<'a, K, V, S> KeySet<'a, K, V, S> {
    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn iter(&self) -> Keys<'a, K> {
        self.map.keys()
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Eq + Hash,
        Q: Hash + Equivalent<K> + ?Sized,
        S: BuildHasher,
    {
        self.map.contains_key(key)
    }
}

impl<K, V, S> KeySetMut<'_, K, V, S> {
    /// Returns the number of keys in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn iter(&self) -> Keys<'_, K> {
        self.map.keys()
    }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.map.table.clear();
    }
}

impl<K, V, S> KeySetMut<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the map contains the key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Removes the entry for `key`. Returns whether the key was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        match self.map.find(key) {
            Some(index) => {
                self.map.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Retains only the entries whose key satisfies the predicate.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.retain_unchecked(|k, _| f(k));
    }
}

impl<'a, K, V, S> IntoIterator for &KeySet<'a, K, V, S> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Clone for KeySet<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for KeySet<'_, K, V, S> {}

impl<K, V, S> Debug for KeySet<'_, K, V, S>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, V, S> Debug for KeySetMut<'_, K, V, S>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
