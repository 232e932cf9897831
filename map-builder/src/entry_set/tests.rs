use {
    crate::MapBuilder,
    alloc::{format, string::ToString, vec::Vec},
};

#[test]
fn read_only_view() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    map.build().unwrap();
    let entries = map.entry_set();
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&1, &11));
    assert!(!entries.contains(&1, &22));
    assert!(entries.contains_all([(&1, &11), (&2, &22)]));
    assert!(!entries.contains_all([(&1, &11), (&3, &33)]));
    let iter = entries.iter();
    assert_eq!(iter.len(), 2);
    let pairs: Vec<_> = iter.map(|e| e.into_pair()).collect();
    assert_eq!(pairs, [(&1, &11), (&2, &22)]);
    let rendered: Vec<_> = (&entries).into_iter().map(|e| e.to_string()).collect();
    assert_eq!(rendered, ["1=11", "2=22"]);
    assert_eq!(format!("{entries:?}"), "{(1, 11), (2, 22)}");
}

#[test]
fn mutable_view() {
    let mut map = MapBuilder::new();
    for i in 0..6 {
        map.insert(i, i * 11).unwrap();
    }
    {
        let mut entries = map.entry_set_mut().unwrap();
        assert!(!entries.remove(&0, &1));
        assert!(entries.remove(&0, &0));
        assert!(!entries.remove(&0, &0));
        entries.retain(|k, v| k % 2 == 1 || *v == 22);
        for mut entry in entries.iter_mut() {
            let v = *entry.value();
            entry.set_value(v + 1);
        }
        assert_eq!(entries.len(), 4);
        assert!(entries.contains(&2, &23));
    }
    assert_eq!(map.to_string(), "{1=12, 2=23, 3=34, 5=56}");
    map.entry_set_mut().unwrap().clear();
    assert!(map.is_empty());
}
