use {
    crate::MapBuilder,
    core::fmt::{Debug, Formatter},
};

impl<K, V, S> Debug for MapBuilder<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self).finish()
    }
}
