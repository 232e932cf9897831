use {
    crate::{entry_ref::EntryRef, MapBuilder},
    alloc::{format, string::ToString},
    core::hash::BuildHasher,
    hashbrown::DefaultHashBuilder,
};

#[test]
fn structural_equality() {
    let a = EntryRef {
        key: &1,
        value: &"x",
    };
    let b = EntryRef {
        key: &1,
        value: &"x",
    };
    let c = EntryRef {
        key: &1,
        value: &"y",
    };
    assert_eq!(a, b);
    assert_ne!(a, c);
    let s = DefaultHashBuilder::default();
    assert_eq!(s.hash_one(a), s.hash_one(b));
}

#[test]
fn display() {
    let entry = EntryRef {
        key: &"k",
        value: &5,
    };
    assert_eq!(entry.to_string(), "k=5");
    assert_eq!(format!("{entry:?}"), r#"EntryRef { key: "k", value: 5 }"#);
}

#[test]
fn set_value_writes_through() {
    let mut map = MapBuilder::new();
    map.insert(1, 11).unwrap();
    map.insert(2, 22).unwrap();
    {
        let mut entries = map.entry_set_mut().unwrap();
        let mut iter = entries.iter_mut();
        let mut first = iter.next().unwrap();
        assert_eq!(first.key(), &1);
        assert_eq!(first.set_value(33), 11);
        assert_eq!(first.value(), &33);
        assert_eq!(first.to_string(), "1=33");
        *iter.next().unwrap().into_value_mut() += 1;
    }
    assert_eq!(map[&1], 33);
    assert_eq!(map[&2], 23);
}
