// Caller errors panic instead of returning under the `assertions` feature.
#![cfg(not(all(feature = "assertions", debug_assertions)))]

use nbt_tree::{Compound, Error, ErrorKind, List, Node, Tag, Value};

fn ints(values: &[i32]) -> List {
    let mut list = List::typed(Tag::Int).unwrap();
    for &value in values {
        list.add(value).unwrap();
    }
    list
}

#[test]
fn test_rejected_add_leaves_list_unchanged() {
    let mut list = ints(&[1, 2, 3]);
    let err = list.add("four").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: Tag::Int,
            found: Tag::String
        }
    ));
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(list, ints(&[1, 2, 3]));
}

#[test]
fn test_add_to_uninitialized_list() {
    let mut list = List::new();
    let err = list.add(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    list.init_item_tag(Tag::Int).unwrap();
    list.add(1).unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn test_end_is_not_an_item_kind() {
    let mut list = List::new();
    assert!(matches!(list.init_item_tag(Tag::End), Err(Error::InvalidOperation(_))));
    assert!(list.is_uninitialized());
}

#[test]
fn test_items_cannot_be_named() {
    let mut list = ints(&[1]);
    let mut item = list.get_mut(0).unwrap();
    assert!(matches!(item.set_name("x"), Err(Error::InvalidOperation(_))));
    item.set_name("").unwrap();
    assert_eq!(item.name(), None);
}

#[test]
fn test_item_kind_is_fixed() {
    let mut list = ints(&[1, 2]);
    let mut item = list.get_mut(1).unwrap();
    item.set_int(20).unwrap();
    assert!(matches!(item.assign(2.0f32), Err(Error::TypeMismatch { .. })));
    assert!(matches!(item.set_long(2), Err(Error::TypeMismatch { .. })));
    assert_eq!(list, ints(&[1, 20]));
}

#[test]
fn test_iter_mut_updates_in_place() {
    let mut list = ints(&[1, 2, 3]);
    for mut item in list.iter_mut() {
        let doubled = item.get_int().unwrap() * 2;
        item.set_int(doubled).unwrap();
    }
    assert_eq!(list, ints(&[2, 4, 6]));
}

#[test]
fn test_list_of_compounds() {
    let mut list = List::typed(Tag::Compound).unwrap();
    for i in 0..3 {
        let entry = list.add(Compound::new()).unwrap().into_compound_mut().unwrap();
        entry.insert("id", i).unwrap();
    }
    assert_eq!(list.back().unwrap().get("id").unwrap().get_int().unwrap(), 2);
    assert!(matches!(list.add(Node::named("named", 1)), Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_take_from_list_item() {
    let mut list = List::typed(Tag::String).unwrap();
    list.add("payload").unwrap();
    let taken = list.get_mut(0).unwrap().take();
    assert_eq!(taken.get_string().unwrap(), "payload");
    assert_eq!(taken.name(), None);
    assert_eq!(list.get(0).unwrap(), &Value::from(""));
}

#[test]
fn test_remove_all_keeps_item_kind() {
    let mut list = ints(&[1, 2]);
    list.remove_all().unwrap();
    assert!(list.is_empty());
    assert_eq!(list.item_tag(), Tag::Int);
    list.add(3).unwrap();
}

#[test]
fn test_out_of_range() {
    let mut list = ints(&[1]);
    let err = list.get(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert!(matches!(list.remove(5), Err(Error::IndexOutOfRange { index: 5, len: 1 })));
    assert!(matches!(list.get_mut(1), Err(Error::IndexOutOfRange { .. })));
}
