//! An insertion-ordered hash map that can be sealed into a read-only map.
//!
//! [`MapBuilder`] stores its keys and values in dense arrays in insertion order and
//! looks them up through a single open-addressing index. It is meant to be filled once
//! and then [built](MapBuilder::build), after which every mutating function returns a
//! [`ReadOnlyError`] and the map can be shared freely. [`SetBuilder`] is the
//! corresponding set, which never allocates storage for values.
//!
//! ```
//! use map_builder::MapBuilder;
//!
//! let mut map = MapBuilder::new();
//! map.insert("b", 2).unwrap();
//! map.insert("a", 1).unwrap();
//! map.insert("c", 3).unwrap();
//! map.remove(&"a").unwrap();
//!
//! let map = map.build().unwrap();
//! assert_eq!(map.to_string(), "{b=2, c=3}");
//! ```

#![no_std]
extern crate alloc;

mod clone;
mod debug;
mod default;
mod dense_storage;
mod display;
mod drain;
mod entry;
mod entry_ref;
mod entry_set;
mod eq;
mod extend;
mod from;
mod from_iterator;
mod index;
mod into_iter;
mod into_keys;
mod into_values;
mod iter;
mod iter_mut;
mod key_set;
mod keys;
mod map;
mod probe_index;
mod raw_table;
mod read_only_error;
mod scrambler;
mod set;
#[cfg(feature = "stats")]
mod stats;
mod value_collection;
mod values;
mod values_mut;

#[cfg(feature = "stats")]
pub use stats::TableStats;
pub use {
    drain::Drain,
    entry::{Entry, OccupiedEntry, VacantEntry},
    entry_ref::{EntryMut, EntryRef},
    entry_set::{Entries, EntriesMut, EntrySet, EntrySetMut},
    into_iter::IntoIter,
    into_keys::IntoKeys,
    into_values::IntoValues,
    iter::Iter,
    iter_mut::IterMut,
    key_set::{KeySet, KeySetMut},
    keys::Keys,
    map::MapBuilder,
    read_only_error::ReadOnlyError,
    set::SetBuilder,
    value_collection::{ValueCollection, ValueCollectionMut},
    values::Values,
    values_mut::ValuesMut,
};
