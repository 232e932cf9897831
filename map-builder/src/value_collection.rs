
use {
    crate::{values::Values, values_mut::ValuesMut, MapBuilder},
    core::{
        fmt::{Debug, Formatter},
        hash::{BuildHasher, Hash},
    },
};

/// A read-only view of the values of a [`MapBuilder`].
///
/// This `struct` is created by the [`value_collection`](MapBuilder::value_collection)
/// method. Membership tests scan all values.
pub struct ValueCollection<'a, K, V, S> {
    pub(crate) map: &'a MapBuilder<K, V, S>,
}

/// A view of the values of a [`MapBuilder`] through which values can be modified and
/// entries can be removed.
///
/// This `struct` is created by the
/// [`value_collection_mut`](MapBuilder::value_collection_mut) method, which fails if
/// the map has been built.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [("a", 1), ("b", 2), ("c", 1)].into();
/// let mut values = map.value_collection_mut().unwrap();
/// assert!(values.remove(&1));
/// for v in values.iter_mut() {
///     *v *= 10;
/// }
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"a", &10), (&"b", &20)]);
/// ```
pub struct ValueCollectionMut<'a, K, V, S> {
    pub(crate) map: &'a mut MapBuilder<K, V, S>,
}

impl<'a, K, V, S> ValueCollection<'a, K, V, S> {
    /// Returns the number of values in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> Values<'a, V> {
        self.map.values()
    }

    /// Returns `true` if some entry has a value equal to `value`.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.contains_value(value)
    }
}

impl<K, V, S> ValueCollectionMut<'_, K, V, S> {
    /// Returns the number of values in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if some entry has a value equal to `value`.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.contains_value(value)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> Values<'_, V> {
        self.map.values()
    }

    /// Returns an iterator over mutable references to the values in insertion order.
    pub fn iter_mut(&mut self) -> ValuesMut<'_, V> {
        let remaining = self.map.len();
        let (_, values) = self.map.table.storage_mut().slices_mut();
        ValuesMut {
            iter: values.iter_mut(),
            remaining,
        }
    }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.map.table.clear();
    }
}

impl<K, V, S> ValueCollectionMut<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Removes one entry whose value equals `value`. If several entries match, the
    /// most recently inserted one is removed.
    pub fn remove(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self.map.find_value(value) {
            Some(index) => {
                self.map.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Retains only the entries whose value satisfies the predicate.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&V) -> bool,
    {
        self.map.retain_unchecked(|_, v| v.is_none_or(|v| f(v)));
    }
}

impl<'a, K, V, S> IntoIterator for &ValueCollection<'a, K, V, S> {
    type Item = &'a V;
    type IntoIter = Values<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Clone for ValueCollection<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for ValueCollection<'_, K, V, S> {}

impl<K, V, S> Debug for ValueCollection<'_, K, V, S>
where
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V, S> Debug for ValueCollectionMut<'_, K, V, S>
where
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
