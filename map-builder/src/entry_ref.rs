#[cfg(test)]
mod tests;

use core::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    mem,
};

/// A shared reference to one entry of a [`MapBuilder`](crate::MapBuilder).
///
/// Entry references are yielded by [`EntrySet::iter`](crate::EntrySet::iter). Two
/// entry references are equal if their keys and their values are equal.
///
/// # Examples
///
/// ```
/// use map_builder::MapBuilder;
///
/// let a: MapBuilder<_, _> = [("x", 1)].into();
/// let b: MapBuilder<_, _> = [("x", 1), ("y", 2)].into();
///
/// let x = a.entry_set().iter().next().unwrap();
/// assert_eq!(x, b.entry_set().iter().next().unwrap());
/// assert_eq!(x.key(), &"x");
/// assert_eq!(x.to_string(), "x=1");
/// ```
pub struct EntryRef<'a, K, V> {
    pub(crate) key: &'a K,
    pub(crate) value: &'a V,
}

/// A reference to one entry of a [`MapBuilder`](crate::MapBuilder) through which the
/// value can be replaced.
///
/// Mutable entry references are yielded by
/// [`EntrySetMut::iter_mut`](crate::EntrySetMut::iter_mut).
pub struct EntryMut<'a, K, V> {
    pub(crate) key: &'a K,
    pub(crate) value: &'a mut V,
}

impl<'a, K, V> EntryRef<'a, K, V> {
    /// Returns the key of the entry.
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// Returns the value of the entry.
    pub fn value(&self) -> &'a V {
        self.value
    }

    /// Returns the key and the value as a tuple.
    pub fn into_pair(self) -> (&'a K, &'a V) {
        (self.key, self.value)
    }
}

impl<'a, K, V> EntryMut<'a, K, V> {
    /// Returns the key of the entry.
    pub fn key(&self) -> &K {
        self.key
    }

    /// Returns the value of the entry.
    pub fn value(&self) -> &V {
        self.value
    }

    /// Returns a mutable reference to the value in the map.
    pub fn value_mut(&mut self) -> &mut V {
        self.value
    }

    /// Replaces the value in the map and returns the old value.
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(self.value, value)
    }

    /// Converts the entry into a mutable reference to the value with the lifetime of
    /// the borrow of the map.
    pub fn into_value_mut(self) -> &'a mut V {
        self.value
    }
}

impl<K, V> Clone for EntryRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntryRef<'_, K, V> {}

impl<K, V> PartialEq for EntryRef<'_, K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K, V> Eq for EntryRef<'_, K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Hash for EntryRef<'_, K, V>
where
    K: Hash,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl<K, V> Debug for EntryRef<'_, K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntryRef")
            .field("key", self.key)
            .field("value", self.value)
            .finish()
    }
}

impl<K, V> Display for EntryRef<'_, K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K, V> Debug for EntryMut<'_, K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntryMut")
            .field("key", self.key)
            .field("value", self.value)
            .finish()
    }
}

impl<K, V> Display for EntryMut<'_, K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
