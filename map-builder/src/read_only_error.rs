use core::fmt::{Display, Formatter};

/// The error returned when a [`MapBuilder`](crate::MapBuilder) or
/// [`SetBuilder`](crate::SetBuilder) is modified after it has been built.
///
/// # Examples
///
/// ```
/// use map_builder::{MapBuilder, ReadOnlyError};
///
/// let mut map = MapBuilder::new();
/// map.insert("a", 1).unwrap();
/// map.build().unwrap();
///
/// assert_eq!(map.insert("b", 2), Err(ReadOnlyError));
/// assert_eq!(map.remove(&"a"), Err(ReadOnlyError));
/// assert_eq!(map.get(&"a"), Some(&1));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ReadOnlyError;

impl Display for ReadOnlyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("the map has been built and is read-only")
    }
}

impl core::error::Error for ReadOnlyError {}
