#[cfg(test)]
mod tests;

use {
    crate::{
        entry_ref::{EntryMut, EntryRef},
        iter::Iter,
        iter_mut::IterMut,
        MapBuilder,
    },
    core::{
        fmt::{Debug, Formatter},
        hash::{BuildHasher, Hash},
        iter::FusedIterator,
    },
    hashbrown::Equivalent,
};

/// A read-only view of the entries of a [`MapBuilder`].
///
/// This `struct` is created by the [`entry_set`](MapBuilder::entry_set) method.
pub struct EntrySet<'a, K, V, S> {
    pub(crate) map: &'a MapBuilder<K, V, S>,
}

/// A view of the entries of a [`MapBuilder`] through which values can be replaced and
/// entries can be removed.
///
/// This `struct` is created by the [`entry_set_mut`](MapBuilder::entry_set_mut) method,
/// which fails if the map has been built.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [("a", 1), ("b", 2), ("c", 3)].into();
/// let mut entries = map.entry_set_mut().unwrap();
/// assert!(!entries.remove(&"a", &2));
/// assert!(entries.remove(&"a", &1));
/// entries.retain(|_, v| *v != 3);
/// assert_eq!(map.to_string(), "{b=2}");
/// ```
pub struct EntrySetMut<'a, K, V, S> {
    pub(crate) map: &'a mut MapBuilder<K, V, S>,
}

/// An iterator over the entries of a `MapBuilder` in insertion order.
/// The iterator element type is [`EntryRef<'a, K, V>`](EntryRef).
///
/// This `struct` is created by the [`iter`](EntrySet::iter) method on [`EntrySet`].
pub struct Entries<'a, K, V> {
    iter: Iter<'a, K, V>,
}

/// A mutable iterator over the entries of a `MapBuilder` in insertion order.
/// The iterator element type is [`EntryMut<'a, K, V>`](EntryMut).
///
/// This `struct` is created by the [`iter_mut`](EntrySetMut::iter_mut) method on
/// [`EntrySetMut`].
pub struct EntriesMut<'a, K, V> {
    iter: IterMut<'a, K, V>,
}

impl<'a, K, V, S> EntrySet<'a, K, V, S> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Entries<'a, K, V> {
        Entries {
            iter: self.map.iter(),
        }
    }
}

impl<K, V, S> EntrySet<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the map maps `key` to a value equal to `value`.
    pub fn contains<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: PartialEq,
    {
        self.map.contains_entry(key, value)
    }

    /// Returns `true` if the map contains all of the given entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// let entries = map.entry_set();
    /// assert!(entries.contains_all([(&"a", &1), (&"b", &2)]));
    /// assert!(!entries.contains_all([(&"a", &1), (&"b", &3)]));
    /// ```
    pub fn contains_all<'b, Q, I>(&self, entries: I) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized + 'b,
        V: PartialEq + 'b,
        I: IntoIterator<Item = (&'b Q, &'b V)>,
    {
        entries
            .into_iter()
            .all(|(k, v)| self.map.contains_entry(k, v))
    }
}

impl<K, V, S> EntrySetMut<'_, K, V, S> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            iter: self.map.iter(),
        }
    }

    /// Returns an iterator over the entries in insertion order through which the
    /// values can be replaced.
    pub fn iter_mut(&mut self) -> EntriesMut<'_, K, V> {
        let remaining = self.map.len();
        let (keys, values) = self.map.table.storage_mut().slices_mut();
        EntriesMut {
            iter: IterMut {
                iter: keys.iter().zip(values.iter_mut()),
                remaining,
            },
        }
    }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.map.table.clear();
    }
}

impl<K, V, S> EntrySetMut<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the map maps `key` to a value equal to `value`.
    pub fn contains<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: PartialEq,
    {
        self.map.contains_entry(key, value)
    }

    /// Removes the entry for `key` if its value equals `value`. Returns whether an
    /// entry was removed.
    pub fn remove<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: PartialEq,
    {
        match self.map.find(key) {
            Some(index) if self.map.value_at(index) == value => {
                self.map.remove_at(index);
                true
            }
            _ => false,
        }
    }

    /// Retains only the entries specified by the predicate.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.map.retain_unchecked(|k, v| v.is_none_or(|v| f(k, v)));
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = EntryRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some(EntryRef { key, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> Iterator for EntriesMut<'a, K, V> {
    type Item = EntryMut<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some(EntryMut { key, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, S> IntoIterator for &EntrySet<'a, K, V, S> {
    type Item = EntryRef<'a, K, V>;
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Clone for Entries<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K, V> FusedIterator for EntriesMut<'_, K, V> {}

impl<K, V> ExactSizeIterator for EntriesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K, V, S> Clone for EntrySet<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for EntrySet<'_, K, V, S> {}

impl<K, V> Debug for Entries<'_, K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Debug for EntriesMut<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntriesMut").finish_non_exhaustive()
    }
}

impl<K, V, S> Debug for EntrySet<'_, K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.map.iter()).finish()
    }
}

impl<K, V, S> Debug for EntrySetMut<'_, K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.map.iter()).finish()
    }
}
