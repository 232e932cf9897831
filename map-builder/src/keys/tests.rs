use {
    crate::MapBuilder,
    alloc::{format, vec::Vec},
};

#[test]
fn test() {
    let mut map = MapBuilder::new();
    map.insert(2, 22).unwrap();
    map.insert(1, 11).unwrap();
    map.insert(3, 33).unwrap();
    map.remove(&1).unwrap();
    let keys = map.keys();
    assert_eq!(keys.len(), 2);
    assert_eq!(format!("{keys:?}"), "[2, 3]");
    assert_eq!(keys.collect::<Vec<_>>(), [&2, &3]);
}
