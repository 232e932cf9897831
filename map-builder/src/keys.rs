#[cfg(test)]
mod tests;

use core::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
    slice,
};

/// An iterator over the keys of a `MapBuilder` in insertion order.
/// The iterator element type is `&'a K`.
///
/// This `struct` is created by the [`keys`] method on [`MapBuilder`]. See its
/// documentation for more.
///
/// [`keys`]: crate::MapBuilder::keys
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut keys = map.keys();
/// let vec = vec![keys.next(), keys.next(), keys.next()];
/// assert_eq!(vec, [Some(&1), Some(&2), Some(&3)]);
///
/// // It is fused iterator
/// assert_eq!(keys.next(), None);
/// assert_eq!(keys.next(), None);
/// ```
pub struct Keys<'a, K> {
    pub(crate) iter: slice::Iter<'a, Option<K>>,
    pub(crate) remaining: usize,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

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

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> Debug for Keys<'_, K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}
