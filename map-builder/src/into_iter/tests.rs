use {crate::MapBuilder, alloc::vec::Vec};

#[test]
fn test() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.insert(3, 33).unwrap();
    map.remove(&2).unwrap();
    let iter = map.into_iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), [(1, 11), (3, 33)]);
}

#[test]
fn partially_consumed() {
    let map: MapBuilder<_, _> = (0..10).map(|i| (i, alloc::vec![i; 3])).collect();
    let mut iter = map.into_iter();
    assert_eq!(iter.next(), Some((0, alloc::vec![0; 3])));
    assert_eq!(iter.len(), 9);
    drop(iter);
}
