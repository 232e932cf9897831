
use {
    crate::probe_index::TOMBSTONE,
    alloc::vec::Vec,
    core::mem,
};

/// The parallel dense arrays of a table.
///
/// Keys and values are appended in insertion order. Removing an entry leaves a gap that
/// is only reclaimed by [`compact`](Self::compact). The values array is allocated on the
/// first write that needs it.
//
// This type upholds the following invariants:
//
// - keys.len() == presence.len() == capacity, and values, if allocated, has the same
//   length.
// - For i < length: keys[i] is Some iff presence[i] != TOMBSTONE.
// - For i >= length: keys[i] and values[i] are None, unless a `Drain` was leaked, in
//   which case they hold entries that are no longer part of the map.
// - size == the number of i < length with presence[i] != TOMBSTONE.
#[derive(Clone, Debug)]
pub(crate) struct DenseStorage<K, V> {
    keys: Vec<Option<K>>,
    values: Option<Vec<Option<V>>>,
    presence: Vec<usize>,
    length: usize,
    size: usize,
}

impl<K, V> DenseStorage<K, V> {
    /// Creates storage with exactly `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut keys = Vec::new();
        keys.resize_with(capacity, || None);
        let mut presence = Vec::new();
        presence.resize(capacity, TOMBSTONE);
        Self {
            keys,
            values: None,
            presence,
            length: 0,
            size: 0,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of claimed slots, including gaps.
    #[inline]
    pub(crate) fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of live entries.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of gaps left behind by removals.
    #[inline]
    pub(crate) fn gaps(&self) -> usize {
        self.length - self.size
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.length == self.capacity()
    }

    /// Returns whether the values array has been allocated.
    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn has_values(&self) -> bool {
        self.values.is_some()
    }

    /// Returns the bucket the live slot `index` is registered under.
    #[inline]
    pub(crate) fn presence(&self, index: usize) -> usize {
        self.presence[index]
    }

    #[inline]
    pub(crate) fn set_presence(&mut self, index: usize, bucket: usize) {
        debug_assert!(self.keys[index].is_some());
        self.presence[index] = bucket;
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)?.as_ref()
    }

    #[inline]
    pub(crate) fn value(&self, index: usize) -> Option<&V> {
        self.values.as_ref()?.get(index)?.as_ref()
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.values.as_mut()?.get_mut(index)?.as_mut()
    }

    /// Returns the key and a mutable reference to the value of a slot.
    #[inline]
    pub(crate) fn key_value_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        let key = self.keys.get(index)?.as_ref()?;
        let value = self.values.as_mut()?.get_mut(index)?.as_mut()?;
        Some((key, value))
    }

    /// Returns the values array, allocating it if necessary.
    pub(crate) fn allocate_values(&mut self) -> &mut [Option<V>] {
        let capacity = self.keys.len();
        self.values.get_or_insert_with(|| {
            let mut values = Vec::new();
            values.resize_with(capacity, || None);
            values
        })
    }

    /// Stores the value of a claimed slot and returns the previous one.
    pub(crate) fn replace_value(&mut self, index: usize, value: V) -> Option<V> {
        debug_assert!(index < self.length);
        mem::replace(&mut self.allocate_values()[index], Some(value))
    }

    /// Claims the next slot for a key registered under `bucket` and returns its index.
    ///
    /// The storage must not be full.
    pub(crate) fn claim(&mut self, key: K, bucket: usize) -> usize {
        let index = self.length;
        debug_assert!(index < self.capacity());
        self.keys[index] = Some(key);
        self.presence[index] = bucket;
        self.length += 1;
        self.size += 1;
        index
    }

    /// Turns a live slot into a gap and returns its contents.
    pub(crate) fn take(&mut self, index: usize) -> (Option<K>, Option<V>) {
        let key = self.keys[index].take();
        let value = self.values.as_mut().and_then(|v| v[index].take());
        if key.is_some() {
            self.presence[index] = TOMBSTONE;
            self.size -= 1;
        }
        (key, value)
    }

    /// Grows the storage to exactly `capacity` slots.
    pub(crate) fn grow(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.capacity());
        self.keys.resize_with(capacity, || None);
        if let Some(values) = &mut self.values {
            values.resize_with(capacity, || None);
        }
        self.presence.resize(capacity, TOMBSTONE);
    }

    /// Moves all live slots to the front, preserving their order, and returns the new
    /// length.
    ///
    /// Presence entries of moved slots are stale afterwards and must be re-registered.
    pub(crate) fn compact(&mut self) -> usize {
        let mut j = 0;
        for i in 0..self.length {
            if self.presence[i] == TOMBSTONE {
                continue;
            }
            if i != j {
                self.keys.swap(i, j);
                if let Some(values) = &mut self.values {
                    values.swap(i, j);
                }
                self.presence[j] = self.presence[i];
                self.presence[i] = TOMBSTONE;
            }
            j += 1;
        }
        debug_assert_eq!(j, self.size);
        self.length = j;
        j
    }

    /// Removes all entries. The capacity and the values array are kept.
    pub(crate) fn clear(&mut self) {
        for key in &mut self.keys[..self.length] {
            *key = None;
        }
        if let Some(values) = &mut self.values {
            for value in &mut values[..self.length] {
                *value = None;
            }
        }
        self.presence[..self.length].fill(TOMBSTONE);
        self.length = 0;
        self.size = 0;
    }

    /// Forgets all entries without dropping them.
    ///
    /// The slots in `0..length` keep their contents; they are dropped when they are
    /// overwritten or when the storage is dropped. Used by `Drain`, which takes them
    /// out one by one.
    pub(crate) fn detach(&mut self) -> usize {
        let length = self.length;
        self.presence[..length].fill(TOMBSTONE);
        self.length = 0;
        self.size = 0;
        length
    }

    /// Returns the claimed prefix of the key and value arrays.
    ///
    /// The value slice is empty if the values array has not been allocated.
    #[inline]
    pub(crate) fn slices(&self) -> (&[Option<K>], &[Option<V>]) {
        let keys = &self.keys[..self.length];
        let values = match &self.values {
            Some(values) => &values[..self.length],
            None => &[],
        };
        (keys, values)
    }

    /// Like [`slices`](Self::slices) but the values are mutable.
    #[inline]
    pub(crate) fn slices_mut(&mut self) -> (&[Option<K>], &mut [Option<V>]) {
        let keys = &self.keys[..self.length];
        let values = match &mut self.values {
            Some(values) => &mut values[..self.length],
            None => &mut [],
        };
        (keys, values)
    }

    /// Like [`slices_mut`](Self::slices_mut) but for slots that have been detached.
    pub(crate) fn detached_slices_mut(
        &mut self,
        length: usize,
    ) -> (&mut [Option<K>], &mut [Option<V>]) {
        let keys = &mut self.keys[..length];
        let values = match &mut self.values {
            Some(values) => &mut values[..length],
            None => &mut [],
        };
        (keys, values)
    }

    /// Consumes the storage and returns the claimed prefix of the key and value arrays.
    pub(crate) fn into_vecs(self) -> (Vec<Option<K>>, Vec<Option<V>>, usize) {
        let mut keys = self.keys;
        keys.truncate(self.length);
        let mut values = self.values.unwrap_or_default();
        values.truncate(self.length);
        (keys, values, self.size)
    }
}

/// Computes the capacity to grow to when at least `min_capacity` slots are needed.
///
/// Grows by half of the old capacity, or to `min_capacity` if that is larger.
pub(crate) fn grown_capacity(old_capacity: usize, min_capacity: usize) -> usize {
    old_capacity
        .saturating_add(old_capacity >> 1)
        .max(min_capacity)
}
