
use {
    alloc::vec,
    core::{
        fmt::{Debug, Formatter},
        iter::FusedIterator,
    },
};

/// An owning iterator over the keys of a `MapBuilder` in insertion order.
/// The iterator element type is `K`.
///
/// This `struct` is created by the [`into_keys`] method on [`MapBuilder`].
/// See its documentation for more.
///
/// [`into_keys`]: crate::MapBuilder::into_keys
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut keys = map.into_keys();
/// let vec = vec![keys.next(), keys.next(), keys.next()];
/// assert_eq!(vec, [Some(1), Some(2), Some(3)]);
///
/// // It is fused iterator
/// assert_eq!(keys.next(), None);
/// assert_eq!(keys.next(), None);
/// ```
pub struct IntoKeys<K> {
    pub(crate) iter: vec::IntoIter<Option<K>>,
    pub(crate) remaining: usize,
}

impl<K> Iterator for IntoKeys<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.iter.next()? {
                self.remaining -= 1;
                return Some(k);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> Debug for IntoKeys<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoKeys").finish_non_exhaustive()
    }
}

impl<K> FusedIterator for IntoKeys<K> {}

impl<K> ExactSizeIterator for IntoKeys<K> {
    fn len(&self) -> usize {
        self.remaining
    }
}
