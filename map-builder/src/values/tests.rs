use {crate::MapBuilder, alloc::vec::Vec};

#[test]
fn test() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.insert(3, 33).unwrap();
    map.remove(&2).unwrap();
    assert_eq!(map.values().len(), 2);
    assert_eq!(map.values().collect::<Vec<_>>(), [&11, &33]);
}

#[test]
fn empty() {
    let map = MapBuilder::<i32, i32>::with_capacity(0);
    assert_eq!(map.values().next(), None);
}
