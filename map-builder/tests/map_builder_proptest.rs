// MapBuilder property tests.
//
// Property 1: a random sequence of operations behaves like a model.
//  - Model: hashbrown::HashMap for contents, Vec of keys for insertion order.
//  - Invariant: len, get, contains_key and iteration order match the model.
//  - Operations: insert, remove, remove_value, get_mut, entry, retain, reserve,
//    clear.
//  - Keys come from a small range so that removals and reinsertions of the same
//    key are frequent.
//
// Property 2: the same with a hasher that maps all keys to three hashes, which
// produces long probe chains and forces chain repair on every removal. The three
// home buckets are a third of the index apart at every index size.
//
// Property 3: after build, every mutator fails and the contents are unchanged.
use {
    core::hash::{BuildHasher, Hasher},
    hashbrown::{DefaultHashBuilder, HashMap},
    map_builder::{MapBuilder, ReadOnlyError},
    proptest::prelude::*,
};

#[derive(Clone, Default)]
struct ThreeHashes;

struct ThreeHashesHasher(u64);

/// The multiplier the map scrambles hashes with.
const MAGIC: u64 = 0x9E37_79B9_7F4A_7C15;

/// Returns the hash whose product with `MAGIC` is `product`.
fn unscramble(product: u64) -> u64 {
    let mut inverse = MAGIC;
    for _ in 0..5 {
        inverse = inverse.wrapping_mul(2u64.wrapping_sub(MAGIC.wrapping_mul(inverse)));
    }
    product.wrapping_mul(inverse)
}

impl Hasher for ThreeHashesHasher {
    fn finish(&self) -> u64 {
        unscramble((self.0 % 3).wrapping_mul(0x5555_5555_5555_5555))
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(b as u64);
        }
    }
}

impl BuildHasher for ThreeHashes {
    type Hasher = ThreeHashesHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ThreeHashesHasher(0)
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
    RemoveValue(u32),
    GetMut(u16, u32),
    Entry(u16, u32),
    Retain(u16),
    Reserve(u8),
    Clear,
}

fn op(keys: u16) -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0..keys, 0u32..16).prop_map(|(k, v)| Op::Insert(k, v)),
        6 => (0..keys).prop_map(Op::Remove),
        1 => (0u32..16).prop_map(Op::RemoveValue),
        2 => (0..keys, 0u32..16).prop_map(|(k, v)| Op::GetMut(k, v)),
        2 => (0..keys, 0u32..16).prop_map(|(k, v)| Op::Entry(k, v)),
        1 => (1..8u16).prop_map(Op::Retain),
        1 => any::<u8>().prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

struct Model {
    map: HashMap<u16, u32>,
    order: Vec<u16>,
}

impl Model {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, k: u16, v: u32) -> Option<u32> {
        let old = self.map.insert(k, v);
        if old.is_none() {
            self.order.push(k);
        }
        old
    }

    fn remove(&mut self, k: u16) -> Option<u32> {
        let old = self.map.remove(&k);
        self.order.retain(|&o| o != k);
        old
    }

    fn entries(&self) -> Vec<(u16, u32)> {
        self.order.iter().map(|k| (*k, self.map[k])).collect()
    }
}

fn run<S: BuildHasher>(mut map: MapBuilder<u16, u32, S>, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut model = Model::new();
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                prop_assert_eq!(map.insert(k, v), Ok(model.insert(k, v)));
            }
            Op::Remove(k) => {
                prop_assert_eq!(map.remove(&k), Ok(model.remove(k)));
            }
            Op::RemoveValue(v) => {
                let last = model.order.iter().rev().find(|k| model.map[*k] == v).copied();
                prop_assert_eq!(map.remove_value(&v), Ok(last.is_some()));
                if let Some(k) = last {
                    model.remove(k);
                }
            }
            Op::GetMut(k, v) => {
                let slot = map.get_mut(&k).unwrap();
                prop_assert_eq!(slot.is_some(), model.map.contains_key(&k));
                if let Some(slot) = slot {
                    *slot = v;
                    model.map.insert(k, v);
                }
            }
            Op::Entry(k, v) => {
                *map.entry(k).unwrap().or_insert(0) += v;
                if !model.map.contains_key(&k) {
                    model.insert(k, 0);
                }
                *model.map.get_mut(&k).unwrap() += v;
            }
            Op::Retain(m) => {
                map.retain(|k, _| k % m != 0).unwrap();
                for k in model.order.clone() {
                    if k % m == 0 {
                        model.remove(k);
                    }
                }
            }
            Op::Reserve(n) => {
                let before = map.capacity();
                map.reserve(n as usize).unwrap();
                prop_assert!(map.capacity() >= before);
            }
            Op::Clear => {
                map.clear().unwrap();
                model = Model::new();
            }
        }
        prop_assert_eq!(map.len(), model.map.len());
    }
    let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    prop_assert_eq!(entries, model.entries());
    for k in 0..128u16 {
        prop_assert_eq!(map.get(&k), model.map.get(&k));
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_matches_model(
        capacity in 0usize..16,
        ops in proptest::collection::vec(op(64), 1..400),
    ) {
        run(MapBuilder::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()), ops)?;
    }

    #[test]
    fn prop_matches_model_with_three_hashes(
        capacity in 0usize..16,
        ops in proptest::collection::vec(op(48), 1..300),
    ) {
        run(MapBuilder::with_capacity_and_hasher(capacity, ThreeHashes), ops)?;
    }

    #[test]
    fn prop_built_map_is_read_only(
        entries in proptest::collection::vec((0u16..100, 0u32..100), 0..50),
    ) {
        let mut map: MapBuilder<u16, u32> = entries.iter().copied().collect();
        let before: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        map.build().unwrap();
        prop_assert_eq!(map.insert(0, 0), Err(ReadOnlyError));
        prop_assert_eq!(map.remove(&0u16), Err(ReadOnlyError));
        prop_assert_eq!(map.clear(), Err(ReadOnlyError));
        prop_assert!(map.entry(0).is_err());
        let after: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
        for (k, _) in &entries {
            prop_assert!(map.contains_key(k));
        }
    }
}
