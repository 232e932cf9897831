
use {
    crate::{
        into_keys::IntoKeys, keys::Keys, map::DEFAULT_CAPACITY, raw_table::AddKey,
        read_only_error::ReadOnlyError, MapBuilder,
    },
    core::{
        fmt::{Debug, Formatter},
        hash::{BuildHasher, Hash},
    },
    hashbrown::{DefaultHashBuilder, Equivalent},
};

/// An insertion-ordered hash set that can be sealed into a read-only set.
///
/// The set uses the same table as [`MapBuilder`] but never allocates storage for
/// values.
///
/// # Examples
///
/// ```
/// use map_builder::{ReadOnlyError, SetBuilder};
///
/// let mut set = SetBuilder::new();
/// assert_eq!(set.insert("b"), Ok(true));
/// assert_eq!(set.insert("a"), Ok(true));
/// assert_eq!(set.insert("b"), Ok(false));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&"b", &"a"]);
///
/// set.build().unwrap();
/// assert_eq!(set.insert("c"), Err(ReadOnlyError));
/// assert!(set.contains("a"));
/// ```
pub struct SetBuilder<K, S = DefaultHashBuilder> {
    pub(crate) map: MapBuilder<K, (), S>,
}

#[cfg(feature = "default-hasher")]
impl<K> SetBuilder<K, DefaultHashBuilder> {
    /// Creates an empty `SetBuilder` with room for 8 elements.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `SetBuilder` with room for exactly `capacity` elements.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, S> SetBuilder<K, S> {
    /// Creates an empty `SetBuilder` with room for 8 elements which will use the given
    /// hash builder to hash elements.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty `SetBuilder` with room for exactly `capacity` elements, using
    /// `hash_builder` to hash the elements.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: MapBuilder::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements the set can hold without growing.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Seals the set. See [`MapBuilder::build`].
    pub fn build(&mut self) -> Result<&Self, ReadOnlyError> {
        self.map.build()?;
        Ok(self)
    }

    /// Returns `true` if [`build`](Self::build) has been called.
    pub fn is_read_only(&self) -> bool {
        self.map.is_read_only()
    }

    /// An iterator visiting all elements in insertion order.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn iter(&self) -> Keys<'_, K> {
        self.map.keys()
    }

    /// Clears the set, removing all elements. Keeps the allocated memory for reuse.
    pub fn clear(&mut self) -> Result<(), ReadOnlyError> {
        self.map.clear()
    }
}

impl<K, S> SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains `value`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. An equal value already in the set
    /// is not replaced.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, value: K) -> Result<bool, ReadOnlyError> {
        Ok(matches!(self.map.add_key(value)?, AddKey::Inserted(_)))
    }

    /// Removes a value from the set. Returns whether the value was present.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove<Q>(&mut self, value: &Q) -> Result<bool, ReadOnlyError>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.check_is_mutable()?;
        Ok(match self.map.find(value) {
            Some(index) => {
                self.map.remove_at(index);
                true
            }
            None => false,
        })
    }

    /// Retains only the elements specified by the predicate, visiting them in
    /// insertion order.
    pub fn retain<F>(&mut self, mut f: F) -> Result<(), ReadOnlyError>
    where
        F: FnMut(&K) -> bool,
    {
        self.map.check_is_mutable()?;
        self.map.retain_unchecked(|k, _| f(k));
        Ok(())
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ReadOnlyError> {
        self.map.reserve(additional)
    }
}

impl<K, S> Clone for SetBuilder<K, S>
where
    K: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K, S> Default for SetBuilder<K, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, S> Debug for SetBuilder<K, S>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> PartialEq for SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|k| other.contains(k))
    }
}

impl<K, S> Eq for SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K, S> FromIterator<K> for SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = Self::with_capacity_and_hasher(lower, S::default());
        for k in iter {
            set.map.add_key_unchecked(k);
        }
        set
    }
}

impl<K, S, const N: usize> From<[K; N]> for SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(value: [K; N]) -> Self {
        value.into_iter().collect()
    }
}

/// # Panics
///
/// Panics if the set has been built.
impl<K, S> Extend<K> for SetBuilder<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[track_caller]
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        if let Err(e) = self.map.check_is_mutable() {
            panic!("cannot extend the set: {e}");
        }
        for k in iter {
            self.map.add_key_unchecked(k);
        }
    }
}

impl<'a, K, S> IntoIterator for &'a SetBuilder<K, S> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, S> IntoIterator for SetBuilder<K, S> {
    type Item = K;
    type IntoIter = IntoKeys<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_keys()
    }
}
