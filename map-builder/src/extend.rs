
use {
    crate::MapBuilder,
    core::hash::{BuildHasher, Hash},
};

impl<K, V, S> MapBuilder<K, V, S> {
    #[track_caller]
    fn check_is_extendable(&self) {
        if let Err(e) = self.check_is_mutable() {
            panic!("cannot extend the map: {e}");
        }
    }
}

/// # Panics
///
/// Panics if the map has been built.
impl<'a, K, V, S> Extend<&'a (K, V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    #[track_caller]
    fn extend<T: IntoIterator<Item = &'a (K, V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// # Panics
///
/// Panics if the map has been built.
impl<'a, K, V, S> Extend<(&'a K, &'a V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    #[track_caller]
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// # Panics
///
/// Panics if the map has been built.
impl<K, V, S> Extend<(K, V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[track_caller]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.check_is_extendable();
        for (k, v) in iter {
            self.insert_unchecked(k, v);
        }
    }
}
