use {
    crate::{
        probe_index::{Slot, TOMBSTONE},
        raw_table::{AddKey, RawTable},
        scrambler::MAGIC,
    },
    alloc::vec::Vec,
};

/// Returns the hash whose product with `MAGIC` is `product`.
fn unscramble(product: u64) -> u64 {
    // Newton's iteration for the inverse modulo 2^64. An odd number is its own
    // inverse modulo 8, and every step doubles the number of correct bits.
    let mut inverse = MAGIC;
    for _ in 0..5 {
        inverse = inverse.wrapping_mul(2u64.wrapping_sub(MAGIC.wrapping_mul(inverse)));
    }
    product.wrapping_mul(inverse)
}

/// Maps keys to three hashes whose home buckets are a third of the index apart, so
/// the probe chains of different hashes never merge.
fn thirds(k: &u64) -> u64 {
    unscramble((*k % 3).wrapping_mul(0x5555_5555_5555_5555))
}

/// Places key `k` in home bucket `k >> 8` of an index with 64 buckets.
fn home_bucket(k: &u64) -> u64 {
    unscramble((*k >> 8) << 58)
}

fn identity(k: &u64) -> u64 {
    *k
}

fn collide(_: &u64) -> u64 {
    0
}

fn check<V>(t: &RawTable<u64, V>, hasher: impl Fn(&u64) -> u64) {
    let s = t.storage();
    let mut live = 0;
    for i in 0..s.length() {
        let Some(key) = s.key(i) else {
            assert_eq!(s.presence(i), TOMBSTONE);
            continue;
        };
        live += 1;
        let bucket = s.presence(i);
        assert_eq!(t.index.slot(bucket), Slot::Occupied(i));
        let home = t.index.bucket(hasher(key));
        assert!(t.index.distance(home, bucket) <= t.max_probe_distance());
        let mut b = home;
        while b != bucket {
            assert_ne!(t.index.slot(b), Slot::Empty);
            b = t.index.prev(b);
        }
        assert_eq!(t.find(hasher(key), |k| k == key), Some(i));
    }
    for b in 0..t.hash_size() {
        if let Slot::Occupied(i) = t.index.slot(b) {
            assert_eq!(s.presence(i), b);
        }
    }
    assert_eq!(live, t.len());
    assert!(t.len() <= s.length());
    assert!(s.length() <= t.capacity());
    assert!(t.hash_size().is_power_of_two());
    assert!(t.hash_size() >= 3 * t.capacity());
}

fn add(t: &mut RawTable<u64, ()>, key: u64, hasher: impl Fn(&u64) -> u64) -> AddKey {
    t.add_key(key, hasher(&key), hasher)
}

fn remove(t: &mut RawTable<u64, ()>, key: u64, hasher: impl Fn(&u64) -> u64) -> bool {
    match t.find(hasher(&key), |k| *k == key) {
        Some(i) => {
            let (k, _) = t.remove_at(i, hasher);
            assert_eq!(k, Some(key));
            true
        }
        None => false,
    }
}

fn contains(t: &RawTable<u64, ()>, key: u64, hasher: impl Fn(&u64) -> u64) -> bool {
    t.find(hasher(&key), |k| *k == key).is_some()
}

#[test]
fn insert_and_find() {
    let mut t = RawTable::with_capacity(8);
    assert_eq!(add(&mut t, 1, identity), AddKey::Inserted(0));
    assert_eq!(add(&mut t, 2, identity), AddKey::Inserted(1));
    assert_eq!(add(&mut t, 1, identity), AddKey::Existing(0));
    assert_eq!(t.len(), 2);
    assert!(contains(&t, 1, identity));
    assert!(contains(&t, 2, identity));
    assert!(!contains(&t, 3, identity));
    check(&t, identity);
}

#[test]
fn tombstones_do_not_end_probing() {
    let mut t = RawTable::with_capacity(8);
    for k in [10, 20, 30] {
        add(&mut t, k, collide);
    }
    assert_eq!(t.storage().presence(0), 0);
    assert!(remove(&mut t, 20, collide));
    check(&t, collide);
    assert!(contains(&t, 10, collide));
    assert!(contains(&t, 30, collide));
    assert!(!contains(&t, 20, collide));
    assert!(remove(&mut t, 10, collide));
    check(&t, collide);
    assert!(contains(&t, 30, collide));
}

#[test]
fn hashes_land_in_chosen_buckets() {
    let t = RawTable::<u64, ()>::with_capacity(16);
    assert_eq!(t.hash_size(), 64);
    for home in [0, 1, 15, 20, 63] {
        assert_eq!(t.index.bucket(home_bucket(&(home << 8 | 5))), home as usize);
    }
}

#[test]
fn exhausted_patch_budget_leaves_tombstone() {
    let mut t = RawTable::with_capacity(16);
    let a = 20 << 8;
    let b = 20 << 8 | 1;
    let (c, d, e, f, g) = (19 << 8, 18 << 8, 17 << 8, 16 << 8, 15 << 8);
    // Every key but the first sits one bucket past its home: 20..=14.
    for k in [a, b, c, d, e, f, g] {
        add(&mut t, k, home_bucket);
    }
    assert_eq!(t.max_probe_distance(), 2);
    assert_eq!(t.storage().presence(6), 14);

    // Repairing the chain behind `a` takes more steps than the budget of
    // 2 * max_probe_distance, so the last hole becomes a tombstone.
    assert!(remove(&mut t, a, home_bucket));
    assert_eq!(t.index_tombstones(), 1);
    assert_eq!(t.index.slot(15), Slot::Tombstone);
    check(&t, home_bucket);
    for k in [b, c, d, e, f, g] {
        assert!(contains(&t, k, home_bucket));
    }
    assert!(!contains(&t, a, home_bucket));
    // The probe for an existing key passes the tombstone instead of reusing it.
    assert_eq!(add(&mut t, g, home_bucket), AddKey::Existing(6));
    assert_eq!(t.index_tombstones(), 1);

    // Removing the key in front of the tombstone moves the tombstone into its hole
    // and pulls `g` back to its home.
    assert!(remove(&mut t, f, home_bucket));
    assert_eq!(t.index_tombstones(), 1);
    assert_eq!(t.index.slot(16), Slot::Tombstone);
    assert_eq!(t.storage().presence(6), 15);
    check(&t, home_bucket);
    for k in [b, c, d, e, g] {
        assert!(contains(&t, k, home_bucket));
    }

    // A new key with the same home takes over the tombstone.
    let h = 16 << 8 | 7;
    assert_eq!(add(&mut t, h, home_bucket), AddKey::Inserted(7));
    assert_eq!(t.storage().presence(7), 16);
    assert_eq!(t.index_tombstones(), 0);
    check(&t, home_bucket);
}

#[test]
fn removal_repairs_chain() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..4 {
        add(&mut t, k, collide);
    }
    // The chain is buckets 0, h-1, h-2, h-3. Removing the head moves the next
    // registration into the hole.
    remove(&mut t, 0, collide);
    check(&t, collide);
    assert_eq!(t.index_tombstones(), 0);
    let first = t.find(0, |k| *k == 1).unwrap();
    assert_eq!(t.storage().presence(first), 0);
}

#[test]
fn emptied_chain_is_reusable() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..5 {
        add(&mut t, k, collide);
    }
    for k in 0..5 {
        remove(&mut t, k, collide);
        check(&t, collide);
    }
    let hash_size = t.hash_size();
    for k in 5..10 {
        add(&mut t, k, collide);
        check(&t, collide);
    }
    assert_eq!(t.hash_size(), hash_size);
}

#[test]
fn readd_after_remove() {
    let mut t = RawTable::with_capacity(4);
    add(&mut t, 1, identity);
    remove(&mut t, 1, identity);
    assert!(!contains(&t, 1, identity));
    assert_eq!(add(&mut t, 1, identity), AddKey::Inserted(1));
    assert_eq!(t.len(), 1);
    check(&t, identity);
}

#[test]
fn grows_from_zero() {
    let mut t = RawTable::with_capacity(0);
    assert_eq!(t.capacity(), 0);
    add(&mut t, 7, identity);
    assert_eq!(t.capacity(), 1);
    add(&mut t, 8, identity);
    assert_eq!(t.capacity(), 2);
    add(&mut t, 9, identity);
    assert_eq!(t.capacity(), 3);
    check(&t, identity);
}

#[test]
fn growth() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..10_000 {
        assert_eq!(add(&mut t, k, identity), AddKey::Inserted(k as usize));
        assert!(t.hash_size().is_power_of_two());
        assert!(t.hash_size() >= 3 * t.capacity());
    }
    check(&t, identity);
    for k in 0..10_000 {
        assert!(contains(&t, k, identity));
    }
}

#[test]
fn colliding_keys_grow_the_index() {
    let mut t = RawTable::with_capacity(8);
    let hash_size = t.hash_size();
    for k in 0..40 {
        add(&mut t, k, collide);
    }
    check(&t, collide);
    assert!(t.hash_size() > hash_size);
    assert!(t.max_probe_distance() >= 39);
}

#[test]
fn compaction_instead_of_growth() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..8 {
        add(&mut t, k, identity);
    }
    for k in (0..8).step_by(2) {
        remove(&mut t, k, identity);
    }
    assert_eq!(t.storage().length(), 8);
    assert_eq!(t.storage().gaps(), 4);
    add(&mut t, 100, identity);
    assert_eq!(t.capacity(), 8);
    assert_eq!(t.storage().length(), 5);
    assert_eq!(t.storage().gaps(), 0);
    check(&t, identity);
    let keys: Vec<u64> = t.storage().slices().0.iter().flatten().copied().collect();
    assert_eq!(keys, [1, 3, 5, 7, 100]);
}

#[test]
fn few_gaps_grow() {
    let mut t = RawTable::with_capacity(12);
    let hash_size = t.hash_size();
    for k in 0..12 {
        add(&mut t, k, identity);
    }
    remove(&mut t, 3, identity);
    add(&mut t, 100, identity);
    assert_eq!(t.capacity(), 18);
    assert_eq!(t.hash_size(), hash_size);
    assert_eq!(t.storage().gaps(), 1);
    check(&t, identity);
}

#[test]
fn ensure_extra_capacity() {
    let mut t = RawTable::<u64, ()>::with_capacity(8);
    t.ensure_extra_capacity(100, identity);
    assert_eq!(t.capacity(), 100);
    assert!(t.hash_size() >= 300);
    check(&t, identity);
}

#[test]
fn rehash_keeps_order() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..6 {
        add(&mut t, k, identity);
    }
    remove(&mut t, 2, identity);
    let max_probe_distance = t.max_probe_distance();
    t.rehash(t.hash_size() * 4, identity);
    assert_eq!(t.max_probe_distance(), max_probe_distance);
    check(&t, identity);
    let keys: Vec<u64> = t.storage().slices().0.iter().flatten().copied().collect();
    assert_eq!(keys, [0, 1, 3, 4, 5]);
    assert_eq!(t.storage().length(), 5);
}

#[test]
#[should_panic(expected = "has the hash of a key changed")]
fn rehash_does_not_extend_max_probe_distance() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..5 {
        add(&mut t, k, identity);
    }
    assert_eq!(t.max_probe_distance(), 2);
    // Placing five colliding keys needs four steps, which is within twice the max
    // probe distance but beyond the max probe distance itself.
    t.rehash(t.hash_size(), collide);
}

#[test]
#[should_panic(expected = "has the hash of a key changed")]
fn changed_hashes_are_detected() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..8 {
        add(&mut t, k, identity);
    }
    t.rehash(t.hash_size(), collide);
}

#[test]
fn clear() {
    let mut t = RawTable::with_capacity(8);
    for k in 0..5 {
        add(&mut t, k, collide);
    }
    remove(&mut t, 1, collide);
    t.clear();
    assert_eq!(t.len(), 0);
    assert_eq!(t.capacity(), 8);
    assert_eq!(t.index_tombstones(), 0);
    assert!(!contains(&t, 0, collide));
    add(&mut t, 3, collide);
    check(&t, collide);
}

#[test]
fn random_operations_keep_invariants() {
    // Linear congruential generator; the exact sequence does not matter.
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    let mut t = RawTable::with_capacity(2);
    let mut model = Vec::new();
    for _ in 0..3000 {
        let key = next() % 64;
        if next() % 3 == 0 {
            let expected = model.contains(&key);
            assert_eq!(remove(&mut t, key, thirds), expected);
            model.retain(|k| *k != key);
        } else {
            let expected_new = !model.contains(&key);
            let inserted = matches!(add(&mut t, key, thirds), AddKey::Inserted(_));
            assert_eq!(inserted, expected_new);
            if expected_new {
                model.push(key);
            }
        }
        check(&t, thirds);
    }
    let keys: Vec<u64> = t.storage().slices().0.iter().flatten().copied().collect();
    assert_eq!(keys, model);
}
