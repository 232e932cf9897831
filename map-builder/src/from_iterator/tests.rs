use {crate::MapBuilder, alloc::vec::Vec};

#[test]
fn test() {
    let map: MapBuilder<_, _> = [(3, 33), (1, 11), (3, 34)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&3, &34), (&1, &11)]);
}

#[test]
fn unknown_size() {
    let map: MapBuilder<_, _> = (0..100).filter(|i| i % 3 == 0).map(|i| (i, i)).collect();
    assert_eq!(map.len(), 34);
    assert!(map.iter().all(|(k, v)| k == v));
}
