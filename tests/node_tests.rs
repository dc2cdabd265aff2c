// Caller errors panic instead of returning under the `assertions` feature.
#![cfg(not(all(feature = "assertions", debug_assertions)))]

use nbt_tree::{Compound, Error, List, Node, Tag, Value};

// ============ Ownership transfer ============

#[test]
fn test_take_leaves_empty_stand_in() {
    let mut compound = Compound::new();
    compound.insert("k", 1).unwrap();
    let mut node = Node::named("child", compound);

    let mut parent = Compound::new();
    parent.add(node.take()).unwrap();

    assert_eq!(node.tag(), Tag::Compound);
    assert!(node.as_compound().unwrap().is_empty());
    assert_eq!(node.name(), Some("child"));
    let moved = parent.get("child").unwrap();
    assert_eq!(moved.get("k").unwrap().get_int().unwrap(), 1);
}

#[test]
fn test_duplicate_before_add_preserves_original() {
    let mut list = List::typed(Tag::String).unwrap();
    list.add("a").unwrap();
    let node = Node::named("strings", list);

    let mut parent = Compound::new();
    parent.add(node.duplicate()).unwrap();
    parent
        .get_mut("strings")
        .unwrap()
        .list_mut()
        .unwrap()
        .add("b")
        .unwrap();

    assert_eq!(node.as_list().unwrap().len(), 1);
    assert_eq!(parent.get("strings").unwrap().as_list().unwrap().len(), 2);
}

#[test]
fn test_take_list_keeps_item_kind_reset() {
    let mut list = List::typed(Tag::Int).unwrap();
    list.add(1).unwrap();
    let mut node = Node::from(list);
    let taken = node.take();
    assert_eq!(taken.as_list().unwrap().len(), 1);
    assert!(node.as_list().unwrap().is_uninitialized());
}

#[test]
fn test_take_from_compound_entry() {
    let mut compound = Compound::new();
    compound.insert("n", 7i16).unwrap();
    let taken = compound.get_mut("n").unwrap().take();
    assert_eq!(taken.name(), Some("n"));
    assert_eq!(taken.get_short().unwrap(), 7);
    assert_eq!(compound.get("n").unwrap().get_short().unwrap(), 0);
}

#[test]
fn test_duplicate_entry_handle() {
    let mut compound = Compound::new();
    compound.insert("v", vec![1i32, 2]).unwrap();
    let copy = compound.get_mut("v").unwrap().duplicate();
    compound.get_mut("v").unwrap().int_array_mut().unwrap().clear();
    assert_eq!(copy.get_int_array().unwrap(), &[1, 2]);
    assert_eq!(copy.name(), Some("v"));
}

// ============ Type state ============

#[test]
fn test_new_node_has_empty_payload() {
    assert_eq!(Node::new(Tag::Int).get_int().unwrap(), 0);
    assert_eq!(Node::new(Tag::String).get_string().unwrap(), "");
    assert!(Node::new(Tag::LongArray).get_long_array().unwrap().is_empty());
    assert!(Node::new(Tag::End).is_end());
    assert_eq!(Node::default().tag(), Tag::End);
}

#[test]
fn test_wrong_kind_accessors() {
    let mut node = Node::named("s", "text");
    assert!(matches!(
        node.get_byte(),
        Err(Error::TypeMismatch {
            expected: Tag::Byte,
            found: Tag::String
        })
    ));
    assert!(matches!(node.list_mut(), Err(Error::TypeMismatch { .. })));
    assert!(matches!(node.get(0), Err(Error::TypeMismatch { .. })));
    node.string_mut().unwrap().push('!');
    assert_eq!(node.get_string().unwrap(), "text!");
}

#[test]
fn test_list_lookup_by_name_is_invalid() {
    let value = Value::from(List::typed(Tag::Int).unwrap());
    assert!(matches!(value.get("x"), Err(Error::InvalidOperation(_))));
}

#[test]
fn test_end_cannot_be_assigned_into_containers() {
    let mut compound = Compound::new();
    compound.insert("a", 1).unwrap();
    let mut handle = compound.get_mut("a").unwrap();
    assert!(matches!(handle.assign(Value::End), Err(Error::InvalidOperation(_))));
    assert!(matches!(compound.insert("b", Value::End), Err(Error::InvalidOperation(_))));
    assert_eq!(compound.len(), 1);
}

#[test]
fn test_into_value_drops_name() {
    let node = Node::named("gone", 3.5f32);
    assert_eq!(Value::from(node), Value::Float(3.5));
}

#[test]
fn test_string_conversion() {
    let value = Value::from(String::from("owned"));
    assert_eq!(String::try_from(value).unwrap(), "owned");
    assert!(matches!(String::try_from(Value::Int(1)), Err(Error::TypeMismatch { .. })));
}
