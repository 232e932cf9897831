
use crate::{MapBuilder, SetBuilder};

/// Statistics about the internal layout of a [`MapBuilder`] or [`SetBuilder`].
///
/// Only available with the `stats` feature.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    /// Number of live entries
    pub len: usize,
    /// Number of claimed dense slots, including gaps left by removals
    pub dense_length: usize,
    /// Number of gaps left by removals
    pub gaps: usize,
    /// Number of dense slots
    pub capacity: usize,
    /// Number of buckets in the probe index
    pub hash_size: usize,
    /// Largest number of probe steps any lookup takes
    pub max_probe_distance: usize,
    /// Number of tombstones in the probe index
    pub index_tombstones: usize,
    /// Whether the values array has been allocated
    pub values_allocated: bool,
    /// Load factor (len / capacity)
    pub load_factor: f64,
    /// Index utilization (len / hash_size)
    pub index_utilization: f64,
}

impl<K, V, S> MapBuilder<K, V, S> {
    /// Returns statistics about the internal layout of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_builder::MapBuilder;
    ///
    /// let mut map = MapBuilder::with_capacity(8);
    /// for i in 0..4 {
    ///     map.insert(i, i).unwrap();
    /// }
    /// map.remove(&0).unwrap();
    ///
    /// let stats = map.stats();
    /// assert_eq!(stats.len, 3);
    /// assert_eq!(stats.gaps, 1);
    /// assert_eq!(stats.hash_size, 32);
    /// ```
    pub fn stats(&self) -> TableStats {
        let table = &self.table;
        let storage = table.storage();
        let ratio = |n: usize, d: usize| match d {
            0 => 0.0,
            _ => n as f64 / d as f64,
        };
        TableStats {
            len: storage.size(),
            dense_length: storage.length(),
            gaps: storage.gaps(),
            capacity: storage.capacity(),
            hash_size: table.hash_size(),
            max_probe_distance: table.max_probe_distance(),
            index_tombstones: table.index_tombstones(),
            values_allocated: storage.has_values(),
            load_factor: ratio(storage.size(), storage.capacity()),
            index_utilization: ratio(storage.size(), table.hash_size()),
        }
    }
}

impl<K, S> SetBuilder<K, S> {
    /// Returns statistics about the internal layout of the set.
    pub fn stats(&self) -> TableStats {
        self.map.stats()
    }
}
