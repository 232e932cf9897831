
use {
    crate::MapBuilder,
    core::fmt::{Display, Formatter},
};

/// Formats the map as `{key=value, key=value}` in insertion order.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
/// assert_eq!(map.to_string(), "{a=1, b=2}");
/// ```
impl<K, V, S> Display for MapBuilder<K, V, S>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}
