use {
    crate::MapBuilder,
    alloc::{format, vec::Vec},
};

#[test]
fn read_only_view() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.build().unwrap();
    let keys = map.key_set();
    assert_eq!(keys.len(), 2);
    assert!(!keys.is_empty());
    assert!(keys.contains(&1));
    assert!(!keys.contains(&3));
    assert_eq!(keys.iter().collect::<Vec<_>>(), [&1, &2]);
    assert_eq!((&keys).into_iter().count(), 2);
    assert_eq!(format!("{keys:?}"), "{1, 2}");
}

#[test]
fn remove_writes_through() {
    let mut map = MapBuilder::new();
    for i in 0..6 {
        map.insert(i, i * 11).unwrap();
    }
    {
        let mut keys = map.key_set_mut().unwrap();
        assert!(keys.remove(&0));
        assert!(!keys.remove(&0));
        keys.retain(|k| k % 2 == 1);
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&5));
    }
    assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &3, &5]);
    map.key_set_mut().unwrap().clear();
    assert!(map.is_empty());
}
