use {crate::MapBuilder, alloc::vec::Vec};

#[test]
fn test() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.insert(3, 33).unwrap();
    map.remove(&1).unwrap();
    let values = map.values_mut().unwrap().collect::<Vec<_>>();
    assert_eq!(values, [&mut 22, &mut 33]);
    map.values_mut().unwrap().for_each(|v| *v = 0);
    assert_eq!(map.values().collect::<Vec<_>>(), [&0, &0]);
}
