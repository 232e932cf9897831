use {crate::MapBuilder, alloc::vec::Vec, hashbrown::HashMap};

#[test]
fn array() {
    let map: MapBuilder<_, _> = [(2, 22), (1, 11), (2, 33)].into();
    assert_eq!(map.len(), 2);
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&2, &33), (&1, &11)]);
    assert!(!map.is_read_only());
}

#[test]
fn hash_map() {
    let mut hash_map = HashMap::new();
    hash_map.insert(1, 11);
    hash_map.insert(2, 22);
    let map = MapBuilder::from(hash_map.clone());
    assert_eq!(map.len(), 2);
    assert_eq!(map[&1], 11);
    assert_eq!(map[&2], 22);
    let back = HashMap::from(map);
    assert_eq!(back, hash_map);
}
