
use {
    crate::MapBuilder,
    core::hash::{BuildHasher, Hash},
};

impl<K, V, S> Eq for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

/// Two maps are equal if they contain the same entries. Insertion order and the sealed
/// state are ignored.
impl<K, V, S> PartialEq for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}
