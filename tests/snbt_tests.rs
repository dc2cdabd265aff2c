use nbt_tree::{Compound, List, Node, Tag, Value, from_slice_be, to_snbt, to_vec_be};

#[test]
fn test_empty_compound_compact() {
    assert_eq!(to_snbt(&Node::from(Compound::new()), false), "{}");
}

#[test]
fn test_int_list_compact() {
    let mut list = List::typed(Tag::Int).unwrap();
    for i in 1..=3 {
        list.add(i).unwrap();
    }
    assert_eq!(to_snbt(&Node::from(list), false), "[1,2,3]");
}

#[test]
fn test_named_compound_compact() {
    let mut compound = Compound::new();
    compound.insert("greeting", "Hi").unwrap();
    compound.insert("n", 5).unwrap();
    compound.insert("pos", vec![1i32, 2, 3]).unwrap();
    assert_eq!(
        to_snbt(&Node::named("root", compound), false),
        "root:{greeting:\"Hi\",n:5,pos:[I; 1,2,3]}"
    );
}

#[test]
fn test_indented_compound() {
    let mut inner = Compound::new();
    inner.insert("b", 1i8).unwrap();
    let mut compound = Compound::new();
    compound.insert("a", 2i16).unwrap();
    compound.insert("inner", inner).unwrap();
    compound.insert("empty", List::new()).unwrap();
    assert_eq!(
        to_snbt(&Node::from(compound), true),
        "{\n  a: 2s,\n  inner: {\n    b: 1b\n  },\n  empty: []\n}"
    );
}

#[test]
fn test_display_matches_to_snbt() {
    let node = Node::named("x", 1.5f64);
    assert_eq!(node.to_string(), to_snbt(&node, false));
    assert_eq!(format!("{node:#}"), to_snbt(&node, true));
    assert_eq!(node.value().to_string(), "1.5d");
}

#[test]
fn test_rendering_is_reentrant() {
    // Rendering inside a rendering must not disturb the outer indentation.
    struct Nested<'a>(&'a Value);

    impl std::fmt::Display for Nested<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let inner = format!("{:#}", self.0);
            write!(f, "{}|{:#}", inner.len(), self.0)
        }
    }

    let mut compound = Compound::new();
    compound.insert("k", 1).unwrap();
    let value = Value::from(compound);
    assert_eq!(Nested(&value).to_string(), "10|{\n  k: 1\n}");
}

#[test]
fn test_decoded_tree_renders() {
    let data = [
        0x0A, 0x00, 0x00, //
        0x09, 0x00, 0x01, b'l', 0x01, 0x00, 0x00, 0x00, 0x02, 0x07, 0x08, //
        0x00,
    ];
    let node = from_slice_be(&data).unwrap();
    assert_eq!(node.to_string(), "{l:[7b,8b]}");
    assert_eq!(to_vec_be(&node).unwrap(), data);
}
