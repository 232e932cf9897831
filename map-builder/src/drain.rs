
use core::{
    fmt::{Debug, Formatter},
    iter::{FusedIterator, Zip},
    slice,
};

/// A draining iterator over the entries of a `MapBuilder` in insertion order.
/// The iterator element type is `(K, V)`.
///
/// This `struct` is created by the [`drain`] method on [`MapBuilder`]. See its
/// documentation for more.
///
/// The map is empty as soon as the iterator has been created. Dropping the iterator
/// drops the entries it has not yielded. If the iterator is leaked, those entries stay
/// in memory until the map reuses their slots or is dropped.
///
/// [`drain`]: crate::MapBuilder::drain
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut drain_iter = map.drain().unwrap();
/// let vec = vec![drain_iter.next(), drain_iter.next(), drain_iter.next()];
/// assert_eq!(vec, [Some((1, "a")), Some((2, "b")), Some((3, "c"))]);
///
/// // It is fused iterator
/// assert_eq!(drain_iter.next(), None);
/// assert_eq!(drain_iter.next(), None);
/// ```
pub struct Drain<'a, K, V> {
    pub(crate) iter: Zip<slice::IterMut<'a, Option<K>>, slice::IterMut<'a, Option<V>>>,
    pub(crate) remaining: usize,
}

impl<K, V> Drop for Drain<'_, K, V> {
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
    }
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (k, v) = self.iter.next()?;
            if let (Some(k), Some(v)) = (k.take(), v.take()) {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> Debug for Drain<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Drain").finish_non_exhaustive()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Drain<'_, K, V> {}
