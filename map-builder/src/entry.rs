
use {
    crate::{raw_table::AddKey, MapBuilder},
    core::{
        fmt::{Debug, Formatter},
        hash::{BuildHasher, Hash},
        mem,
    },
};

/// A view into a single entry in a map, which may either be vacant or occupied.
///
/// This `enum` is constructed from the [`entry`] method on [`MapBuilder`].
///
/// [`entry`]: MapBuilder::entry
///
/// # Examples
///
/// ```
/// use map_builder::{Entry, MapBuilder};
///
/// let mut counts = MapBuilder::new();
/// for word in ["to", "be", "or", "not", "to", "be"] {
///     *counts.entry(word).unwrap().or_insert(0) += 1;
/// }
///
/// // Existing keys keep their place in the insertion order.
/// match counts.entry("be").unwrap() {
///     Entry::Occupied(o) => assert_eq!(*o.get(), 2),
///     Entry::Vacant(_) => unreachable!(),
/// }
/// counts.entry("or").unwrap().insert(10);
///
/// let counts: Vec<_> = counts.iter().map(|(&k, &v)| (k, v)).collect();
/// assert_eq!(counts, [("to", 2), ("be", 2), ("or", 10), ("not", 1)]);
/// ```
pub enum Entry<'a, K, V, S> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),
}

/// A view into an occupied entry in a [`MapBuilder`].
/// It is part of the [`Entry`] enum.
///
/// # Examples
///
/// ```
/// use map_builder::{Entry, MapBuilder};
///
/// let mut ports: MapBuilder<_, _> = [("http", 80), ("ssh", 22), ("dns", 53)].into();
///
/// if let Entry::Occupied(mut o) = ports.entry("http").unwrap() {
///     *o.get_mut() += 8000;
///     assert_eq!(o.insert(8080), 8080);
/// }
/// assert_eq!(ports[&"http"], 8080);
///
/// if let Entry::Occupied(o) = ports.entry("ssh").unwrap() {
///     assert_eq!(o.remove_entry(), ("ssh", 22));
/// }
/// let keys: Vec<_> = ports.keys().copied().collect();
/// assert_eq!(keys, ["http", "dns"]);
/// ```
pub struct OccupiedEntry<'a, K, V, S> {
    pub(crate) map: &'a mut MapBuilder<K, V, S>,
    pub(crate) index: usize,
}

/// A view into a vacant entry in a [`MapBuilder`].
/// It is part of the [`Entry`] enum.
///
/// # Examples
///
/// ```
/// use map_builder::{Entry, MapBuilder};
///
/// let mut map = MapBuilder::<String, usize>::new();
/// if let Entry::Vacant(v) = map.entry("key".to_string()).unwrap() {
///     let len = v.key().len();
///     *v.insert(0) = len;
/// }
/// assert_eq!(map["key"], 3);
/// ```
pub struct VacantEntry<'a, K, V, S> {
    pub(crate) map: &'a mut MapBuilder<K, V, S>,
    pub(crate) key: K,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S> {
    /// Gets a reference to the key in the entry.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn key(&self) -> &K {
        match self.map.table.storage().key(self.index) {
            Some(key) => key,
            None => unreachable!("occupied entry refers to a removed slot"),
        }
    }

    /// Gets a reference to the value in the entry.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get(&self) -> &V {
        self.map.value_at(self.index)
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// If you need a reference to the `OccupiedEntry` which may outlive the
    /// destruction of the `Entry` value, see [`into_mut`](Self::into_mut).
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut(&mut self) -> &mut V {
        self.map.key_value_at_mut(self.index).1
    }

    /// Sets the value of the entry, and returns the entry's old value.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Converts the `OccupiedEntry` into a mutable reference to the value in the entry
    /// with a lifetime bound to the map itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::{Entry, MapBuilder};
    ///
    /// let mut map = MapBuilder::new();
    /// map.insert(1, String::from("a")).unwrap();
    ///
    /// let Entry::Occupied(o) = map.entry(1).unwrap() else {
    ///     unreachable!();
    /// };
    /// let value: &mut String = o.into_mut();
    /// value.push('b');
    ///
    /// assert_eq!(map[&1], "ab");
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn into_mut(self) -> &'a mut V {
        self.map.key_value_at_mut(self.index).1
    }
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Takes the value out of the entry, and returns it.
    ///
    /// The slot of the entry becomes a gap in the insertion order.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Takes the key and value out of the entry, and returns them.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove_entry(self) -> (K, V) {
        match self.map.remove_at(self.index) {
            (Some(key), Some(value)) => (key, value),
            _ => unreachable!("occupied entry refers to a removed slot"),
        }
    }
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S> {
    /// Gets a reference to the key that would be used when inserting a value through
    /// the `VacantEntry`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert_index(self, value: V) -> (&'a mut MapBuilder<K, V, S>, usize) {
        let map = self.map;
        let (AddKey::Inserted(index) | AddKey::Existing(index)) =
            map.add_key_unchecked(self.key);
        map.table.storage_mut().replace_value(index, value);
        (map, index)
    }

    /// Sets the value of the entry with the `VacantEntry`'s key, and returns a mutable
    /// reference to it.
    ///
    /// The key is appended to the insertion order.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(self, value: V) -> &'a mut V {
        let (map, index) = self.insert_index(value);
        map.key_value_at_mut(index).1
    }

    /// Sets the value of the entry with the `VacantEntry`'s key, and returns an
    /// `OccupiedEntry`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V, S> {
        let (map, index) = self.insert_index(value);
        OccupiedEntry { map, index }
    }
}

impl<'a, K, V, S> Entry<'a, K, V, S> {
    /// Returns a reference to this entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<&str, u32> = MapBuilder::new();
    /// assert_eq!(map.entry("retries").unwrap().key(), &"retries");
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(e) => e.key(),
            Entry::Vacant(e) => e.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any potential
    /// inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map: MapBuilder<&str, u32> = MapBuilder::new();
    ///
    /// map.entry("retries").unwrap().and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map["retries"], 42);
    ///
    /// map.entry("retries").unwrap().and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(map["retries"], 43);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Sets the value of the entry, and returns an `OccupiedEntry`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(self, value: V) -> OccupiedEntry<'a, K, V, S> {
        match self {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry
            }
            Entry::Vacant(entry) => entry.insert_entry(value),
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty, and returns
    /// a mutable reference to the value in the entry.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default function
    /// if empty, and returns a mutable reference to the value in the entry.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default function
    /// if empty. The function receives a reference to the key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn or_insert_with_key<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce(&K) -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Ensures a value is in the entry by inserting the default value if empty.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

impl<K, V, S> Debug for Entry<'_, K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Entry::Vacant(v) => f.debug_tuple("Entry").field(v).finish(),
            Entry::Occupied(o) => f.debug_tuple("Entry").field(o).finish(),
        }
    }
}

impl<K, V, S> Debug for OccupiedEntry<'_, K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OccupiedEntry")
            .field("key", self.key())
            .field("value", self.get())
            .finish()
    }
}

impl<K, V, S> Debug for VacantEntry<'_, K, V, S>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("VacantEntry").field(self.key()).finish()
    }
}
