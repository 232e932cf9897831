
use core::{
    fmt::{Debug, Formatter},
    iter::{FusedIterator, Zip},
    slice,
};

/// A mutable iterator over the entries of a `MapBuilder` in insertion order.
/// The iterator element type is `(&'a K, &'a mut V)`.
///
/// This `struct` is created by the [`iter_mut`] method on [`MapBuilder`]. See its
/// documentation for more.
///
/// [`iter_mut`]: crate::MapBuilder::iter_mut
/// [`MapBuilder`]: crate::MapBuilder
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [(1, "One".to_owned()), (2, "Two".into())].into();
///
/// let mut iter = map.iter_mut().unwrap();
/// iter.next().map(|(_, v)| v.push_str(" Mississippi"));
/// iter.next().map(|(_, v)| v.push_str(" Mississippi"));
///
/// // It is fused iterator
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), None);
///
/// assert_eq!(map.get(&1).unwrap(), &"One Mississippi".to_owned());
/// assert_eq!(map.get(&2).unwrap(), &"Two Mississippi".to_owned());
/// ```
pub struct IterMut<'a, K, V> {
    pub(crate) iter: Zip<slice::Iter<'a, Option<K>>, slice::IterMut<'a, Option<V>>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

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

impl<K, V> Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterMut").finish_non_exhaustive()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}
