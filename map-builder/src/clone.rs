
use crate::MapBuilder;

/// Cloning a map yields a mutable copy, even if the cloned map has been built.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let mut map: MapBuilder<_, _> = [(1, "a")].into();
/// map.build().unwrap();
///
/// let mut copy = map.clone();
/// copy.insert(2, "b").unwrap();
/// assert_eq!(copy.len(), 2);
/// assert_eq!(map.len(), 1);
/// ```
impl<K, V, S> Clone for MapBuilder<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hash_builder: self.hash_builder.clone(),
            table: self.table.clone(),
            read_only: false,
        }
    }
}
