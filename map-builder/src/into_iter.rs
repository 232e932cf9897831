#[cfg(test)]
mod tests;

use {
    crate::map::MapBuilder,
    alloc::vec,
    core::{
        fmt::{Debug, Formatter},
        iter::{FusedIterator, Zip},
    },
};

/// An owning iterator over the entries of a `MapBuilder` in insertion order.
/// The iterator element type is `(K, V)`.
///
/// This `struct` is created by the [`into_iter`] method on [`MapBuilder`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: crate::MapBuilder::into_iter
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut iter = map.into_iter();
/// let vec = vec![iter.next(), iter.next(), iter.next()];
/// assert_eq!(vec, [Some((1, "a")), Some((2, "b")), Some((3, "c"))]);
///
/// // It is fused iterator
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), None);
/// ```
pub struct IntoIter<K, V> {
    pub(crate) iter: Zip<vec::IntoIter<Option<K>>, vec::IntoIter<Option<V>>>,
    pub(crate) remaining: usize,
}

impl<K, V, S> IntoIterator for MapBuilder<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Creates a consuming iterator, that is, one that moves each key-value pair out
    /// of the map in insertion order. The map cannot be used after calling this.
    fn into_iter(self) -> Self::IntoIter {
        let (keys, values, remaining) = self.table.into_storage().into_vecs();
        IntoIter {
            iter: keys.into_iter().zip(values),
            remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let (Some(k), Some(v)) = self.iter.next()? {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoIter").finish_non_exhaustive()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}
