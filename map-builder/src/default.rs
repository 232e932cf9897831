use crate::map::MapBuilder;

impl<K, V, S> Default for MapBuilder<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}
