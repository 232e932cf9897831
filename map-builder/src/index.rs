
use {
    crate::MapBuilder,
    core::{
        hash::{BuildHasher, Hash},
        ops::Index,
    },
    hashbrown::Equivalent,
};

impl<K, Q, V, S> Index<&Q> for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    Q: Hash + Equivalent<K> + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, index: &Q) -> &Self::Output {
        self.get(index).expect("key not found")
    }
}
