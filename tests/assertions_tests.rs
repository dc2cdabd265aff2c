#![cfg(all(feature = "assertions", debug_assertions))]

use nbt_tree::{Compound, Error, List, Node, Tag, Value, from_slice_be};

// ============ Caller errors panic ============

#[test]
#[should_panic(expected = "nbt misuse: type mismatch: expected TAG_Int, found TAG_String")]
fn test_wrong_kind_getter_panics() {
    let _ = Value::from("x").get_int();
}

#[test]
#[should_panic(expected = "nbt misuse")]
fn test_add_to_uninitialized_list_panics() {
    let _ = List::new().add(1);
}

#[test]
#[should_panic(expected = "nbt misuse")]
fn test_wrong_kind_list_item_panics() {
    let mut list = List::typed(Tag::Int).unwrap();
    let _ = list.add(1i64);
}

#[test]
#[should_panic(expected = "nbt misuse")]
fn test_end_child_panics() {
    let _ = Compound::new().insert("end", Value::End);
}

// ============ Everything else still returns ============

#[test]
fn test_malformed_input_returns_error() {
    assert!(matches!(from_slice_be(&[0x0D, 0x00, 0x00]), Err(Error::InvalidTagType(0x0D))));
    assert!(matches!(from_slice_be(&[0x03, 0x00, 0x00, 0x01]), Err(Error::EndOfFile)));
}

#[test]
fn test_lookup_failures_return_error() {
    let mut compound = Compound::new();
    assert!(matches!(compound.get("x"), Err(Error::NotFound(_))));
    assert!(matches!(compound.remove_front(), Err(Error::IndexOutOfRange { index: 0, len: 0 })));

    let list = List::typed(Tag::Int).unwrap();
    assert!(matches!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 0 })));
}

#[test]
fn test_correct_use_does_not_panic() {
    let mut list = List::typed(Tag::Int).unwrap();
    list.add(1).unwrap();
    let mut root = Compound::new();
    root.insert("list", list).unwrap();
    let node = Node::named("root", root);
    assert_eq!(node.get("list").unwrap().get(0).unwrap().get_int().unwrap(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn test_mixed_json_list_returns_error() {
    let err = serde_json::from_str::<Value>(r#"[1, "two"]"#).unwrap_err();
    assert!(err.to_string().contains("type mismatch"), "{err}");
}
