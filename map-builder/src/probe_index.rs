
use {crate::scrambler::Scrambler, alloc::vec, alloc::vec::Vec};

/// Marks a removed entry, both in the probe index and in the presence array of the
/// dense storage.
pub(crate) const TOMBSTONE: usize = usize::MAX;

const EMPTY: usize = 0;

/// The decoded content of a bucket.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    /// Terminates every probe sequence.
    Empty,
    /// A removed registration. Probing must continue past it.
    Tombstone,
    /// A registration of the dense slot with this index.
    Occupied(usize),
}

/// The open-addressing index of a table.
///
/// Each bucket stores `0` (empty), `TOMBSTONE`, or `i + 1` where `i` is an index into
/// the dense storage. Probing walks backward from the home bucket and wraps around at
/// zero.
//
// The number of buckets is always a power of two greater than one.
#[derive(Clone, Debug)]
pub(crate) struct ProbeIndex {
    buckets: Vec<usize>,
    scrambler: Scrambler,
}

/// Returns the number of buckets used for a dense storage with the given capacity.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`.
pub(crate) fn hash_size_for(capacity: usize) -> usize {
    capacity
        .max(1)
        .checked_mul(3)
        .and_then(usize::checked_next_power_of_two)
        .unwrap_or_else(|| capacity_overflow())
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl ProbeIndex {
    pub(crate) fn new(hash_size: usize) -> Self {
        Self {
            buckets: vec![EMPTY; hash_size],
            scrambler: Scrambler::new(hash_size),
        }
    }

    /// Returns the number of buckets.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the home bucket of a raw hash code.
    #[inline]
    pub(crate) fn bucket(&self, hash: u64) -> usize {
        self.scrambler.bucket(hash)
    }

    /// Returns the bucket probed after `bucket`.
    #[inline]
    pub(crate) fn prev(&self, bucket: usize) -> usize {
        bucket.wrapping_sub(1) & (self.buckets.len() - 1)
    }

    /// Returns how many probe steps separate `bucket` from `home`.
    #[inline]
    pub(crate) fn distance(&self, home: usize, bucket: usize) -> usize {
        home.wrapping_sub(bucket) & (self.buckets.len() - 1)
    }

    #[inline]
    pub(crate) fn slot(&self, bucket: usize) -> Slot {
        match self.buckets[bucket] {
            EMPTY => Slot::Empty,
            TOMBSTONE => Slot::Tombstone,
            n => Slot::Occupied(n - 1),
        }
    }

    #[inline]
    pub(crate) fn occupy(&mut self, bucket: usize, index: usize) {
        debug_assert!(index < TOMBSTONE - 1);
        self.buckets[bucket] = index + 1;
    }

    #[inline]
    pub(crate) fn release(&mut self, bucket: usize) {
        self.buckets[bucket] = EMPTY;
    }

    #[inline]
    pub(crate) fn bury(&mut self, bucket: usize) {
        self.buckets[bucket] = TOMBSTONE;
    }

    /// Empties every bucket and switches to `hash_size` buckets.
    ///
    /// The allocation is reused if the size does not change.
    pub(crate) fn reset(&mut self, hash_size: usize) {
        if hash_size == self.buckets.len() {
            self.buckets.fill(EMPTY);
        } else {
            *self = Self::new(hash_size);
        }
    }

    /// Returns the number of tombstones in the index.
    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn tombstones(&self) -> usize {
        self.buckets.iter().filter(|b| **b == TOMBSTONE).count()
    }
}
