#[cfg(test)]
mod tests;

use {
    alloc::vec,
    core::{
        fmt::{Debug, Formatter},
        iter::FusedIterator,
    },
};

/// An owning iterator over the values of a `MapBuilder` in insertion order.
/// The iterator element type is `V`.
///
/// This `struct` is created by the [`into_values`] method on [`MapBuilder`].
/// See its documentation for more.
///
/// [`into_values`]: crate::MapBuilder::into_values
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut values = map.into_values();
/// let vec = vec![values.next(), values.next(), values.next()];
/// assert_eq!(vec, [Some("a"), Some("b"), Some("c")]);
///
/// // It is fused iterator
/// assert_eq!(values.next(), None);
/// assert_eq!(values.next(), None);
/// ```
pub struct IntoValues<V> {
    pub(crate) iter: vec::IntoIter<Option<V>>,
    pub(crate) remaining: usize,
}

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.iter.next()? {
                self.remaining -= 1;
                return Some(v);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> Debug for IntoValues<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoValues").finish_non_exhaustive()
    }
}

impl<V> FusedIterator for IntoValues<V> {}

impl<V> ExactSizeIterator for IntoValues<V> {
    fn len(&self) -> usize {
        self.remaining
    }
}
