#[cfg(test)]
mod tests;

use core::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
    slice,
};

/// An iterator over the values of a `MapBuilder` in insertion order.
/// The iterator element type is `&'a V`.
///
/// This `struct` is created by the [`values`] method on [`MapBuilder`]. See its
/// documentation for more.
///
/// [`values`]: crate::MapBuilder::values
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [(1, "a"), (2, "b"), (3, "c")].into();
///
/// let mut values = map.values();
/// let vec = vec![values.next(), values.next(), values.next()];
/// assert_eq!(vec, [Some(&"a"), Some(&"b"), Some(&"c")]);
///
/// // It is fused iterator
/// assert_eq!(values.next(), None);
/// assert_eq!(values.next(), None);
/// ```
pub struct Values<'a, V> {
    pub(crate) iter: slice::Iter<'a, Option<V>>,
    pub(crate) remaining: usize,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

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

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            remaining: self.remaining,
        }
    }
}

impl<V> Debug for Values<'_, V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}
