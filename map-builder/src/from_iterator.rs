#[cfg(test)]
mod tests;

use {
    crate::MapBuilder,
    core::hash::{BuildHasher, Hash},
};

impl<K, V, S> FromIterator<(K, V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut map = Self::with_capacity_and_hasher(lower, S::default());
        for (k, v) in iter {
            map.insert_unchecked(k, v);
        }
        map
    }
}
