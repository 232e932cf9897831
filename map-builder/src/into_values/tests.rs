use {crate::MapBuilder, alloc::vec::Vec};

#[test]
fn test() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.insert(3, 33).unwrap();
    map.remove(&3).unwrap();
    let values = map.into_values();
    assert_eq!(values.len(), 2);
    assert_eq!(values.collect::<Vec<_>>(), [11, 22]);
}
