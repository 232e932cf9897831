#[cfg(test)]
mod tests;

use {
    crate::{
        dense_storage::{grown_capacity, DenseStorage},
        probe_index::{capacity_overflow, hash_size_for, ProbeIndex, Slot},
    },
    core::cmp::min,
};

/// The initial bound on the number of probe steps.
const INITIAL_MAX_PROBE_DISTANCE: usize = 2;

/// The outcome of [`RawTable::add_key`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum AddKey {
    /// The key was stored in a new dense slot.
    Inserted(usize),
    /// The key was already stored in this dense slot. The new key was dropped.
    Existing(usize),
}

/// An insertion-ordered hash table without knowledge of how keys are hashed.
///
/// All functions that might move registrations around take a `hasher` closure that
/// returns the raw hash code of a stored key. It must return the same value that was
/// passed when the key was inserted.
//
// This type upholds the following invariants:
//
// - I1: For every live slot i, index.slot(storage.presence(i)) == Occupied(i).
// - I2: The probe sequence from the home bucket of a live key to its registration
//   bucket contains no empty bucket and has at most max_probe_distance steps.
// - I3: Every Occupied(i) in the index refers to a live slot.
#[derive(Clone, Debug)]
pub(crate) struct RawTable<K, V> {
    storage: DenseStorage<K, V>,
    index: ProbeIndex,
    max_probe_distance: usize,
}

impl<K, V> RawTable<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DenseStorage::with_capacity(capacity),
            index: ProbeIndex::new(hash_size_for(capacity)),
            max_probe_distance: INITIAL_MAX_PROBE_DISTANCE,
        }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &DenseStorage<K, V> {
        &self.storage
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut DenseStorage<K, V> {
        &mut self.storage
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.storage.size()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn hash_size(&self) -> usize {
        self.index.len()
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn max_probe_distance(&self) -> usize {
        self.max_probe_distance
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn index_tombstones(&self) -> usize {
        self.index.tombstones()
    }

    fn tentative_max_probe_distance(&self) -> usize {
        min(self.max_probe_distance * 2, self.index.len() / 2)
    }

    /// Returns the dense index of the key for which `eq` returns true.
    pub(crate) fn find(&self, hash: u64, mut eq: impl FnMut(&K) -> bool) -> Option<usize> {
        let mut bucket = self.index.bucket(hash);
        let mut probes_left = self.max_probe_distance;
        loop {
            match self.index.slot(bucket) {
                Slot::Empty => return None,
                Slot::Occupied(i) if self.storage.key(i).is_some_and(&mut eq) => return Some(i),
                _ => {}
            }
            if probes_left == 0 {
                return None;
            }
            probes_left -= 1;
            bucket = self.index.prev(bucket);
        }
    }

    /// Stores a key unless an equal key is already present.
    pub(crate) fn add_key(&mut self, key: K, hash: u64, hasher: impl Fn(&K) -> u64) -> AddKey
    where
        K: Eq,
    {
        'retry: loop {
            let mut bucket = self.index.bucket(hash);
            let tentative_max_probe_distance = self.tentative_max_probe_distance();
            let mut probe_distance = 0;
            // The first tombstone on the way. Reused once the key is known to be absent.
            let mut reusable = None;
            let target = loop {
                match self.index.slot(bucket) {
                    Slot::Empty => break Some(reusable.unwrap_or((bucket, probe_distance))),
                    Slot::Tombstone => {
                        if reusable.is_none() {
                            reusable = Some((bucket, probe_distance));
                        }
                    }
                    Slot::Occupied(i) => {
                        if self.storage.key(i) == Some(&key) {
                            return AddKey::Existing(i);
                        }
                    }
                }
                probe_distance += 1;
                if probe_distance > self.max_probe_distance && reusable.is_some() {
                    // No key is registered farther away than max_probe_distance.
                    break reusable;
                }
                if probe_distance > tentative_max_probe_distance {
                    break None;
                }
                bucket = self.index.prev(bucket);
            };
            let Some((bucket, probe_distance)) = target else {
                // No room within the tentative bound. Grow the index.
                let hash_size = self
                    .index
                    .len()
                    .checked_mul(2)
                    .unwrap_or_else(|| capacity_overflow());
                self.rehash(hash_size, &hasher);
                continue 'retry;
            };
            if self.storage.is_full() {
                self.ensure_extra_capacity(1, &hasher);
                continue 'retry;
            }
            let index = self.storage.claim(key, bucket);
            self.index.occupy(bucket, index);
            if probe_distance > self.max_probe_distance {
                self.max_probe_distance = probe_distance;
            }
            return AddKey::Inserted(index);
        }
    }

    /// Makes room for `n` more insertions, either by compacting or by growing.
    pub(crate) fn ensure_extra_capacity(&mut self, n: usize, hasher: impl Fn(&K) -> u64) {
        if self.should_compact(n) {
            self.rehash(self.index.len(), hasher);
        } else {
            let min_capacity = self
                .storage
                .length()
                .checked_add(n)
                .unwrap_or_else(|| capacity_overflow());
            self.ensure_capacity(min_capacity, hasher);
        }
    }

    fn should_compact(&self, n: usize) -> bool {
        let capacity = self.storage.capacity();
        let spare = capacity - self.storage.length();
        let gaps = self.storage.gaps();
        // No room for n entries, but removing the gaps makes room, and the gaps take
        // up at least a quarter of the capacity.
        spare < n && gaps + spare >= n && gaps >= capacity / 4
    }

    fn ensure_capacity(&mut self, min_capacity: usize, hasher: impl Fn(&K) -> u64) {
        let capacity = self.storage.capacity();
        if min_capacity <= capacity {
            return;
        }
        let new_capacity = grown_capacity(capacity, min_capacity);
        self.storage.grow(new_capacity);
        let hash_size = hash_size_for(new_capacity);
        if hash_size > self.index.len() {
            self.rehash(hash_size, hasher);
        }
    }

    /// Rebuilds the index with `hash_size` buckets, compacting the storage first if it
    /// contains gaps.
    ///
    /// Every key is placed within the current max probe distance, which is left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if a key cannot be placed within the max probe distance. This only
    /// happens if the hash of a stored key has changed.
    pub(crate) fn rehash(&mut self, hash_size: usize, hasher: impl Fn(&K) -> u64) {
        if self.storage.gaps() > 0 {
            self.storage.compact();
        }
        self.index.reset(hash_size);
        for i in 0..self.storage.length() {
            let Some(key) = self.storage.key(i) else {
                continue;
            };
            let hash = hasher(key);
            if !self.put_rehash(i, hash) {
                panic!(
                    "cannot place a key while rehashing with a fixed multiplier and a \
                     grow-only index; has the hash of a key changed?",
                );
            }
        }
    }

    /// Registers a live slot whose key is known to be unique.
    fn put_rehash(&mut self, i: usize, hash: u64) -> bool {
        let mut bucket = self.index.bucket(hash);
        let mut probes_left = self.max_probe_distance;
        loop {
            if self.index.slot(bucket) == Slot::Empty {
                self.index.occupy(bucket, i);
                self.storage.set_presence(i, bucket);
                return true;
            }
            if probes_left == 0 {
                return false;
            }
            probes_left -= 1;
            bucket = self.index.prev(bucket);
        }
    }

    /// Removes the live slot `index` and returns its contents.
    pub(crate) fn remove_at(
        &mut self,
        index: usize,
        hasher: impl Fn(&K) -> u64,
    ) -> (Option<K>, Option<V>) {
        let bucket = self.storage.presence(index);
        let removed = self.storage.take(index);
        self.remove_hash_at(bucket, hasher);
        removed
    }

    /// Repairs the probe chain through the bucket of a removed registration.
    ///
    /// Registrations farther along the chain are moved into the hole when that keeps
    /// them reachable. Gives up after a bounded number of steps and leaves a tombstone.
    fn remove_hash_at(&mut self, removed_bucket: usize, hasher: impl Fn(&K) -> u64) {
        let mut bucket = removed_bucket;
        let mut hole = removed_bucket;
        let mut probe_distance = 0;
        let mut patch_attempts_left = self.tentative_max_probe_distance();
        loop {
            bucket = self.index.prev(bucket);
            probe_distance += 1;
            if probe_distance > self.max_probe_distance {
                // Nothing this far away can have a probe sequence through the hole.
                self.index.release(hole);
                return;
            }
            match self.index.slot(bucket) {
                Slot::Empty => {
                    // End of the chain.
                    self.index.release(hole);
                    return;
                }
                Slot::Tombstone => {
                    // Move the tombstone into the hole.
                    self.index.bury(hole);
                    hole = bucket;
                    probe_distance = 0;
                }
                Slot::Occupied(i) => {
                    let Some(key) = self.storage.key(i) else {
                        unreachable!("the index refers to a removed slot");
                    };
                    let home = self.index.bucket(hasher(key));
                    // The hole lies between the home bucket and this bucket, so the
                    // registration can move into the hole.
                    if self.index.distance(home, bucket) >= probe_distance {
                        self.index.occupy(hole, i);
                        self.storage.set_presence(i, hole);
                        hole = bucket;
                        probe_distance = 0;
                    }
                }
            }
            if patch_attempts_left == 0 {
                self.index.bury(hole);
                return;
            }
            patch_attempts_left -= 1;
        }
    }

    /// Removes all entries. The capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.storage.clear();
        self.index.reset(self.index.len());
    }

    /// Removes all entries from the index and the bookkeeping of the storage without
    /// dropping them. Returns the number of detached slots.
    pub(crate) fn detach(&mut self) -> usize {
        self.index.reset(self.index.len());
        self.storage.detach()
    }

    pub(crate) fn into_storage(self) -> DenseStorage<K, V> {
        self.storage
    }
}
