
use {
    crate::{
        drain::Drain,
        entry::{Entry, OccupiedEntry, VacantEntry},
        entry_set::{EntrySet, EntrySetMut},
        into_keys::IntoKeys,
        into_values::IntoValues,
        iter::Iter,
        iter_mut::IterMut,
        key_set::{KeySet, KeySetMut},
        keys::Keys,
        raw_table::{AddKey, RawTable},
        read_only_error::ReadOnlyError,
        value_collection::{ValueCollection, ValueCollectionMut},
        values::Values,
        values_mut::ValuesMut,
    },
    core::hash::{BuildHasher, Hash},
    hashbrown::{DefaultHashBuilder, Equivalent},
};

/// The capacity of a map created without a capacity hint.
pub(crate) const DEFAULT_CAPACITY: usize = 8;

/// An insertion-ordered hash map that can be sealed into a read-only map.
///
/// Keys and values are stored in dense arrays in insertion order. A single
/// open-addressing index maps hashes to positions in these arrays. Removing an entry
/// leaves a gap that is reclaimed when the map needs room, so iteration always follows
/// insertion order of the remaining entries.
///
/// All functions that modify the map return a [`ReadOnlyError`] once
/// [`build`](Self::build) has been called.
///
/// It is a logic error for a key to be modified in such a way that its hash, as
/// determined by the [`Hash`] trait, or its equality, as determined by the [`Eq`]
/// trait, changes while it is in the map. Such a change can make other keys
/// unreachable and causes a panic when the map is rehashed.
///
/// # Example
///
/// The map does not synchronize access. Wrap it in a lock while it is being filled
/// from multiple threads and share it freely once it has been built:
///
/// ```
/// use {
///     map_builder::MapBuilder,
///     parking_lot::Mutex,
///     std::{sync::Arc, thread},
/// };
///
/// let builder = Arc::new(Mutex::new(MapBuilder::new()));
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let builder = builder.clone();
///         thread::spawn(move || {
///             for i in 0..100 {
///                 builder.lock().insert(t * 100 + i, i).unwrap();
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// let mut map = Arc::into_inner(builder).unwrap().into_inner();
/// map.build().unwrap();
/// let map = Arc::new(map);
///
/// let readers: Vec<_> = (0..4)
///     .map(|t| {
///         let map = map.clone();
///         thread::spawn(move || map[&(t * 100 + 7)])
///     })
///     .collect();
/// for reader in readers {
///     assert_eq!(reader.join().unwrap(), 7);
/// }
/// ```
pub struct MapBuilder<K, V, S = DefaultHashBuilder> {
    pub(crate) hash_builder: S,
    pub(crate) table: RawTable<K, V>,
    pub(crate) read_only: bool,
}

#[cfg(feature = "default-hasher")]
impl<K, V> MapBuilder<K, V, DefaultHashBuilder> {
    /// Creates an empty `MapBuilder` with room for 8 entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    /// let map: MapBuilder<&str, i32> = MapBuilder::new();
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), 8);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `MapBuilder` with room for exactly `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if the index for `capacity` entries does not fit in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    /// let map: MapBuilder<&str, i32> = MapBuilder::with_capacity(10);
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), 10);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> MapBuilder<K, V, S> {
    /// Creates an empty `MapBuilder` with room for 8 entries which will use the given
    /// hash builder to hash keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    /// use hashbrown::DefaultHashBuilder;
    ///
    /// let mut map = MapBuilder::with_hasher(DefaultHashBuilder::default());
    /// map.insert(1, 2).unwrap();
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty `MapBuilder` with room for exactly `capacity` entries, using
    /// `hash_builder` to hash the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    /// use hashbrown::DefaultHashBuilder;
    ///
    /// let mut map = MapBuilder::with_capacity_and_hasher(10, DefaultHashBuilder::default());
    /// assert_eq!(map.capacity(), 10);
    /// map.insert(1, 2).unwrap();
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            hash_builder,
            table: RawTable::with_capacity(capacity),
            read_only: false,
        }
    }

    /// Returns the number of entries the map can hold without growing.
    ///
    /// Slots of removed entries count against the capacity until the map compacts
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    /// let map: MapBuilder<i32, i32> = MapBuilder::with_capacity(100);
    /// assert_eq!(map.capacity(), 100);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut a = MapBuilder::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a").unwrap();
    /// assert_eq!(a.len(), 1);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut a = MapBuilder::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a").unwrap();
    /// assert!(!a.is_empty());
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the map's [`BuildHasher`].
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Seals the map.
    ///
    /// Afterwards every function that would modify the map returns a
    /// [`ReadOnlyError`]. Reading and iterating are unaffected. A map can only be
    /// built once.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::{MapBuilder, ReadOnlyError};
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// let built = map.build().unwrap();
    /// assert_eq!(built[&1], "a");
    ///
    /// assert_eq!(map.build().err(), Some(ReadOnlyError));
    /// assert_eq!(map.clear(), Err(ReadOnlyError));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn build(&mut self) -> Result<&Self, ReadOnlyError> {
        self.check_is_mutable()?;
        self.read_only = true;
        Ok(self)
    }

    /// Returns `true` if [`build`](Self::build) has been called.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    pub(crate) fn check_is_mutable(&self) -> Result<(), ReadOnlyError> {
        match self.read_only {
            true => Err(ReadOnlyError),
            false => Ok(()),
        }
    }

    /// Clears the map, removing all entries. Keeps the allocated memory for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut a = MapBuilder::new();
    /// a.insert(1, "a").unwrap();
    /// let capacity_before_clear = a.capacity();
    ///
    /// a.clear().unwrap();
    ///
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), capacity_before_clear);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn clear(&mut self) -> Result<(), ReadOnlyError> {
        self.check_is_mutable()?;
        self.table.clear();
        Ok(())
    }

    /// Clears the map, returning all entries as an iterator in insertion order. Keeps
    /// the allocated memory for reuse.
    ///
    /// If the returned iterator is dropped before being fully consumed, it drops the
    /// remaining entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut a = MapBuilder::new();
    /// a.insert(1, "a").unwrap();
    /// a.insert(2, "b").unwrap();
    ///
    /// let drained: Vec<_> = a.drain().unwrap().collect();
    /// assert_eq!(drained, [(1, "a"), (2, "b")]);
    /// assert!(a.is_empty());
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn drain(&mut self) -> Result<Drain<'_, K, V>, ReadOnlyError> {
        self.check_is_mutable()?;
        let remaining = self.table.len();
        let length = self.table.detach();
        let (keys, values) = self.table.storage_mut().detached_slices_mut(length);
        Ok(Drain {
            iter: keys.iter_mut().zip(values.iter_mut()),
            remaining,
        })
    }

    /// An iterator visiting all keys in insertion order.
    /// The iterator element type is `&'a K`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    /// map.insert("c", 3).unwrap();
    ///
    /// let keys: Vec<_> = map.keys().collect();
    /// assert_eq!(keys, [&"a", &"b", &"c"]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn keys(&self) -> Keys<'_, K> {
        let (keys, _) = self.table.storage().slices();
        Keys {
            iter: keys.iter(),
            remaining: self.len(),
        }
    }

    /// An iterator visiting all values in insertion order.
    /// The iterator element type is `&'a V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    ///
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(values, [&1, &2]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn values(&self) -> Values<'_, V> {
        let (_, values) = self.table.storage().slices();
        Values {
            iter: values.iter(),
            remaining: self.len(),
        }
    }

    /// An iterator visiting all values mutably in insertion order.
    /// The iterator element type is `&'a mut V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    ///
    /// for value in map.values_mut().unwrap() {
    ///     *value += 10;
    /// }
    /// assert_eq!(map[&"a"], 11);
    /// assert_eq!(map[&"b"], 12);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn values_mut(&mut self) -> Result<ValuesMut<'_, V>, ReadOnlyError> {
        self.check_is_mutable()?;
        let remaining = self.len();
        let (_, values) = self.table.storage_mut().slices_mut();
        Ok(ValuesMut {
            iter: values.iter_mut(),
            remaining,
        })
    }

    /// An iterator visiting all entries in insertion order.
    /// The iterator element type is `(&'a K, &'a V)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    /// map.insert("c", 3).unwrap();
    /// map.remove(&"b").unwrap();
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"a", &1), (&"c", &3)]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        let (keys, values) = self.table.storage().slices();
        Iter {
            iter: keys.iter().zip(values.iter()),
            remaining: self.len(),
        }
    }

    /// An iterator visiting all entries in insertion order, with mutable references to
    /// the values.
    /// The iterator element type is `(&'a K, &'a mut V)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    ///
    /// for (_, val) in map.iter_mut().unwrap() {
    ///     *val *= 2;
    /// }
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn iter_mut(&mut self) -> Result<IterMut<'_, K, V>, ReadOnlyError> {
        self.check_is_mutable()?;
        let remaining = self.len();
        let (keys, values) = self.table.storage_mut().slices_mut();
        Ok(IterMut {
            iter: keys.iter().zip(values.iter_mut()),
            remaining,
        })
    }

    /// Creates a consuming iterator visiting all the keys in insertion order.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// let keys: Vec<&str> = map.into_keys().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn into_keys(self) -> IntoKeys<K> {
        let (keys, _, remaining) = self.table.into_storage().into_vecs();
        IntoKeys {
            iter: keys.into_iter(),
            remaining,
        }
    }

    /// Creates a consuming iterator visiting all the values in insertion order.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// let values: Vec<i32> = map.into_values().collect();
    /// assert_eq!(values, [1, 2]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn into_values(self) -> IntoValues<V> {
        let (_, values, remaining) = self.table.into_storage().into_vecs();
        IntoValues {
            iter: values.into_iter(),
            remaining,
        }
    }

    /// A read-only view of the keys of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// let keys = map.key_set();
    /// assert_eq!(keys.len(), 2);
    /// assert!(keys.contains(&"a"));
    /// assert!(!keys.contains(&"c"));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn key_set(&self) -> KeySet<'_, K, V, S> {
        KeySet { map: self }
    }

    /// A view of the keys of the map through which entries can be removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// assert!(map.key_set_mut().unwrap().remove(&"a"));
    /// assert_eq!(map.get(&"a"), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn key_set_mut(&mut self) -> Result<KeySetMut<'_, K, V, S>, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(KeySetMut { map: self })
    }

    /// A read-only view of the values of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// assert!(map.value_collection().contains(&2));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn value_collection(&self) -> ValueCollection<'_, K, V, S> {
        ValueCollection { map: self }
    }

    /// A view of the values of the map through which entries can be removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// assert!(map.value_collection_mut().unwrap().remove(&2));
    /// assert_eq!(map.get(&"b"), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn value_collection_mut(
        &mut self,
    ) -> Result<ValueCollectionMut<'_, K, V, S>, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(ValueCollectionMut { map: self })
    }

    /// A read-only view of the entries of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// let entries = map.entry_set();
    /// assert!(entries.contains(&"a", &1));
    /// assert!(!entries.contains(&"a", &2));
    /// let first = entries.iter().next().unwrap();
    /// assert_eq!(first.to_string(), "a=1");
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn entry_set(&self) -> EntrySet<'_, K, V, S> {
        EntrySet { map: self }
    }

    /// A view of the entries of the map through which values can be replaced and
    /// entries can be removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<_, _> = [("a", 1), ("b", 2)].into();
    /// for mut entry in map.entry_set_mut().unwrap().iter_mut() {
    ///     let doubled = *entry.value() * 2;
    ///     entry.set_value(doubled);
    /// }
    /// assert_eq!(map[&"b"], 4);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn entry_set_mut(&mut self) -> Result<EntrySetMut<'_, K, V, S>, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(EntrySetMut { map: self })
    }

    /// Returns `true` if some entry has a value equal to `value`.
    ///
    /// This scans all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert!(map.contains_value(&"a"));
    /// assert!(!map.contains_value(&"b"));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.find_value(value).is_some()
    }

    /// Returns the dense index of the last entry whose value equals `value`.
    pub(crate) fn find_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        let (keys, values) = self.table.storage().slices();
        (0..values.len()).rev().find(|&i| {
            keys[i].is_some() && values[i].as_ref().is_some_and(|v| v == value)
        })
    }

    /// Returns the value of a live slot.
    pub(crate) fn value_at(&self, index: usize) -> &V {
        match self.table.storage().value(index) {
            Some(value) => value,
            None => unreachable!("live slot {index} has no value"),
        }
    }

    /// Returns the key and the value of a live slot.
    pub(crate) fn key_value_at_mut(&mut self, index: usize) -> (&K, &mut V) {
        match self.table.storage_mut().key_value_mut(index) {
            Some(kv) => kv,
            None => unreachable!("live slot {index} has no value"),
        }
    }
}

impl<K, V, S> MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns the dense index of the key equivalent to `key`.
    #[inline]
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |k| key.equivalent(k))
    }

    /// Stores a key without touching the values array. Returns the dense index and
    /// whether the key is new.
    pub(crate) fn add_key(&mut self, key: K) -> Result<AddKey, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(self.add_key_unchecked(key))
    }

    /// Like [`add_key`](Self::add_key). The caller has checked that the map is mutable.
    pub(crate) fn add_key_unchecked(&mut self, key: K) -> AddKey {
        let hash = self.hash_builder.hash_one(&key);
        let hash_builder = &self.hash_builder;
        self.table.add_key(key, hash, |k| hash_builder.hash_one(k))
    }

    /// Removes the live slot `index`. The caller has checked that the map is mutable.
    pub(crate) fn remove_at(&mut self, index: usize) -> (Option<K>, Option<V>) {
        let hash_builder = &self.hash_builder;
        self.table.remove_at(index, |k| hash_builder.hash_one(k))
    }

    /// Removes all entries for which `f` returns `false`, visiting them in insertion
    /// order. The caller has checked that the map is mutable.
    ///
    /// `f` receives no value for keys of a map whose values array was never allocated.
    pub(crate) fn retain_unchecked(&mut self, mut f: impl FnMut(&K, Option<&mut V>) -> bool) {
        // Removal never moves other slots, so the indices stay valid.
        for index in 0..self.table.storage().length() {
            let storage = self.table.storage_mut();
            let keep = match storage.key_value_mut(index) {
                Some((key, value)) => f(key, Some(value)),
                None => match storage.key(index) {
                    Some(key) => f(key, None),
                    None => continue,
                },
            };
            if !keep {
                self.remove_at(index);
            }
        }
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns `true` if the map maps `key` to a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert!(map.contains_entry(&1, &"a"));
    /// assert!(!map.contains_entry(&1, &"b"));
    /// assert!(!map.contains_entry(&2, &"a"));
    /// ```
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: PartialEq,
    {
        self.get(key) == Some(value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let index = self.find(key)?;
        self.table.storage().value(index)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let index = self.find(key)?;
        let storage = self.table.storage();
        Some((storage.key(index)?, storage.value(index)?))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// if let Some(x) = map.get_mut(&1).unwrap() {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// assert_eq!(map.get_mut(&2), Ok(None));
    /// ```
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<Option<&mut V>, ReadOnlyError>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.check_is_mutable()?;
        Ok(match self.find(key) {
            Some(index) => self.table.storage_mut().value_mut(index),
            None => None,
        })
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, [`None`] is returned and the key is
    /// appended to the insertion order.
    ///
    /// If the map did have this key present, the value is updated in place, and the
    /// old value is returned. The key is not updated and keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// assert_eq!(map.insert(37, "a"), Ok(None));
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b").unwrap();
    /// assert_eq!(map.insert(37, "c"), Ok(Some("b")));
    /// assert_eq!(map[&37], "c");
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(self.insert_unchecked(key, value))
    }

    /// Like [`insert`](Self::insert). The caller has checked that the map is mutable.
    pub(crate) fn insert_unchecked(&mut self, key: K, value: V) -> Option<V> {
        match self.add_key_unchecked(key) {
            AddKey::Inserted(index) => {
                // Any value found here was detached by a leaked drain.
                self.table.storage_mut().replace_value(index, value);
                None
            }
            AddKey::Existing(index) => self.table.storage_mut().replace_value(index, value),
        }
    }

    /// Inserts all entries of an iterator.
    ///
    /// Returns `true` if any entry was added or any value changed. Room for the lower
    /// bound of the iterator's size hint is reserved up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// assert_eq!(map.insert_all([(1, "a"), (2, "b")]), Ok(true));
    /// assert_eq!(map.insert_all([(1, "a")]), Ok(false));
    /// assert_eq!(map.insert_all([(1, "c")]), Ok(true));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert_all<I>(&mut self, iter: I) -> Result<bool, ReadOnlyError>
    where
        I: IntoIterator<Item = (K, V)>,
        V: PartialEq,
    {
        self.check_is_mutable()?;
        let iter = iter.into_iter();
        let (additional, _) = iter.size_hint();
        if additional > 0 {
            self.reserve(additional)?;
        }
        let mut updated = false;
        for (key, value) in iter {
            match self.add_key_unchecked(key) {
                AddKey::Inserted(index) => {
                    self.table.storage_mut().replace_value(index, value);
                    updated = true;
                }
                AddKey::Existing(index) => {
                    if let Some(old) = self.table.storage_mut().value_mut(index) {
                        if *old != value {
                            *old = value;
                            updated = true;
                        }
                    }
                }
            }
        }
        Ok(updated)
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// If enough of the capacity is taken up by removed entries, the map is compacted
    /// instead of grown.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<&str, i32> = MapBuilder::new();
    /// map.reserve(10).unwrap();
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<(), ReadOnlyError> {
        self.check_is_mutable()?;
        let hash_builder = &self.hash_builder;
        self.table
            .ensure_extra_capacity(additional, |k| hash_builder.hash_one(k));
        Ok(())
    }

    /// Removes a key from the map, returning the value at the key if the key was
    /// previously in the map.
    ///
    /// The slot of the entry becomes a gap. The positions of other entries in the
    /// insertion order are unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.remove(&1), Ok(Some("a")));
    /// assert_eq!(map.remove(&1), Ok(None));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, ReadOnlyError>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        Ok(self.remove_entry(key)?.map(|(_, v)| v))
    }

    /// Removes a key from the map, returning the stored key and value if the key was
    /// previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.remove_entry(&1), Ok(Some((1, "a"))));
    /// assert_eq!(map.remove_entry(&1), Ok(None));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>, ReadOnlyError>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.check_is_mutable()?;
        let Some(index) = self.find(key) else {
            return Ok(None);
        };
        Ok(match self.remove_at(index) {
            (Some(k), Some(v)) => Some((k, v)),
            _ => None,
        })
    }

    /// Removes the entry for `key` if its value equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.remove_pair(&1, &"b"), Ok(false));
    /// assert_eq!(map.remove_pair(&1, &"a"), Ok(true));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove_pair<Q>(&mut self, key: &Q, value: &V) -> Result<bool, ReadOnlyError>
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: PartialEq,
    {
        self.check_is_mutable()?;
        let Some(index) = self.find(key) else {
            return Ok(false);
        };
        if self.table.storage().value(index) != Some(value) {
            return Ok(false);
        }
        self.remove_at(index);
        Ok(true)
    }

    /// Removes one entry whose value equals `value`.
    ///
    /// This scans all entries. If several entries match, the most recently inserted
    /// one is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, "a").unwrap();
    /// map.insert(2, "a").unwrap();
    /// assert_eq!(map.remove_value(&"a"), Ok(true));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// assert_eq!(map.remove_value(&"b"), Ok(false));
    /// ```
    pub fn remove_value(&mut self, value: &V) -> Result<bool, ReadOnlyError>
    where
        V: PartialEq,
    {
        self.check_is_mutable()?;
        let Some(index) = self.find_value(value) else {
            return Ok(false);
        };
        self.remove_at(index);
        Ok(true)
    }

    /// Retains only the entries specified by the predicate.
    ///
    /// In other words, removes all pairs `(k, v)` for which `f(&k, &mut v)` returns
    /// `false`. The entries are visited in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0).unwrap();
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [0, 2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F) -> Result<(), ReadOnlyError>
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.check_is_mutable()?;
        self.retain_unchecked(|k, v| match v {
            Some(v) => f(k, v),
            None => true,
        });
        Ok(())
    }

    /// Gets the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut letters = MapBuilder::new();
    ///
    /// for ch in "a short treatise on fungi".chars() {
    ///     let counter = letters.entry(ch).unwrap().or_insert(0);
    ///     *counter += 1;
    /// }
    ///
    /// assert_eq!(letters[&'s'], 2);
    /// assert_eq!(letters[&'t'], 3);
    /// assert_eq!(letters[&'u'], 1);
    /// assert_eq!(letters.get(&'y'), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn entry(&mut self, key: K) -> Result<Entry<'_, K, V, S>, ReadOnlyError> {
        self.check_is_mutable()?;
        Ok(match self.find(&key) {
            Some(index) => Entry::Occupied(OccupiedEntry { map: self, index }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        })
    }
}
