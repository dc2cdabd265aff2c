use std::ops::Deref;

use crate::{Compound, List, Result, Tag, Value, invalid, mismatch};

/// A standalone NBT tag: an optional name and a [`Value`].
///
/// A node's kind is fixed when it is built. Reads go through [`Deref`] to
/// the value (`node.get_int()`, `node.as_compound()`, ...); writes go through
/// the forwarding setters, none of which can change the kind.
///
/// The empty name means "unnamed": [`Node::name`] returns `None` for it and
/// it is encoded as a zero-length name.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Node {
    name: String,
    value: Value,
}

macro_rules! forward_mut {
    ($($method:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        $(
            #[inline]
            pub fn $method(&mut self, $($arg: $ty),*) -> $ret {
                self.value_mut().$method($($arg),*)
            }
        )*
    };
}

macro_rules! value_setters {
    () => {
        forward_mut! {
            set_byte(value: i8) -> Result<()>;
            set_short(value: i16) -> Result<()>;
            set_int(value: i32) -> Result<()>;
            set_long(value: i64) -> Result<()>;
            set_float(value: f32) -> Result<()>;
            set_double(value: f64) -> Result<()>;
            set_string(value: impl Into<String>) -> Result<()>;
            string_mut() -> Result<&mut String>;
            set_byte_array(values: impl Into<Vec<i8>>) -> Result<()>;
            byte_array_mut() -> Result<&mut Vec<i8>>;
            set_int_array(values: impl Into<Vec<i32>>) -> Result<()>;
            int_array_mut() -> Result<&mut Vec<i32>>;
            set_long_array(values: impl Into<Vec<i64>>) -> Result<()>;
            long_array_mut() -> Result<&mut Vec<i64>>;
            list_mut() -> Result<&mut List>;
            compound_mut() -> Result<&mut Compound>;
        }
    };
}

impl Node {
    /// A fresh unnamed node of the given kind with an empty payload.
    ///
    /// ```
    /// use nbt_tree::{Node, Tag};
    ///
    /// let node = Node::new(Tag::List);
    /// assert!(node.as_list()?.is_uninitialized());
    /// # Ok::<(), nbt_tree::Error>(())
    /// ```
    pub fn new(tag: Tag) -> Self {
        Node {
            name: String::new(),
            value: Value::empty(tag),
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Node {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    /// Renames a standalone node. The empty name makes it unnamed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub(crate) fn parts_mut(&mut self) -> (&str, &mut Value) {
        (&self.name, &mut self.value)
    }

    pub(crate) fn raw_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// A deep copy, independent of wherever `self` lives.
    pub fn duplicate(&self) -> Node {
        self.clone()
    }

    /// Moves the payload into a new node with the same name, leaving `self`
    /// with the empty payload of its kind.
    ///
    /// This is how a caller hands a node to a container while keeping a
    /// (now empty) stand-in behind:
    ///
    /// ```
    /// use nbt_tree::{List, Node, Tag};
    ///
    /// let mut list = List::typed(Tag::String)?;
    /// let mut node = Node::from("payload");
    /// list.add(node.take())?;
    ///
    /// assert_eq!(list.get(0)?.get_string()?, "payload");
    /// assert_eq!(node.tag(), Tag::String);
    /// assert_eq!(node.get_string()?, "");
    /// # Ok::<(), nbt_tree::Error>(())
    /// ```
    pub fn take(&mut self) -> Node {
        Node {
            name: self.name.clone(),
            value: self.value.take(),
        }
    }

    value_setters!();
}

impl Deref for Node {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.value
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node {
            name: String::new(),
            value,
        }
    }
}

macro_rules! node_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::from(Value::from(value))
                }
            }
        )*
    };
}

node_from!(
    bool,
    i8,
    i16,
    i32,
    i64,
    f32,
    f64,
    &str,
    String,
    Vec<i8>,
    Vec<i32>,
    Vec<i64>,
    List,
    Compound
);

#[derive(Debug)]
enum Slot<'a> {
    Item(&'a mut Value),
    Entry {
        compound: &'a mut Compound,
        position: usize,
    },
    // An entry reached while iterating; the compound itself is not borrowed.
    Field {
        name: &'a str,
        value: &'a mut Value,
    },
}

/// A mutable handle to a node that lives inside a [`List`] or [`Compound`].
///
/// The handle keeps the container's invariants: a list item cannot be named
/// and cannot change kind, and renaming a compound entry keeps the
/// compound's names unique. Entries yielded by [`Compound::iter_mut`] can be
/// reassigned but not renamed.
#[derive(Debug)]
pub struct NodeMut<'a> {
    slot: Slot<'a>,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn item(value: &'a mut Value) -> Self {
        NodeMut {
            slot: Slot::Item(value),
        }
    }

    pub(crate) fn entry(compound: &'a mut Compound, position: usize) -> Self {
        NodeMut {
            slot: Slot::Entry { compound, position },
        }
    }

    pub(crate) fn field(name: &'a str, value: &'a mut Value) -> Self {
        NodeMut {
            slot: Slot::Field { name, value },
        }
    }

    #[inline]
    fn value_mut(&mut self) -> &mut Value {
        match &mut self.slot {
            Slot::Item(value) | Slot::Field { value, .. } => value,
            Slot::Entry { compound, position } => compound.value_at_mut(*position),
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self.slot, Slot::Item(_))
    }

    pub fn name(&self) -> Option<&str> {
        match &self.slot {
            Slot::Item(_) => None,
            Slot::Entry { compound, position } => compound.node_at(*position).name(),
            Slot::Field { name, .. } => Some(*name).filter(|name| !name.is_empty()),
        }
    }

    /// Renames the node.
    ///
    /// Fails with [`Error::InvalidOperation`](crate::Error::InvalidOperation)
    /// for a list item (unless `name` is empty, which is a no-op). For a
    /// compound entry, a sibling already carrying `name` is evicted first and
    /// the entry keeps its place among the remaining children. An entry
    /// reached through [`Compound::iter_mut`] can only keep its name; use
    /// [`Compound::rename`] instead.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        match &mut self.slot {
            Slot::Item(_) if name.is_empty() => Ok(()),
            Slot::Item(_) => Err(invalid("list items cannot be named")),
            Slot::Entry { compound, position } => {
                *position = compound.rename_at(*position, name);
                Ok(())
            }
            Slot::Field { name: current, .. } if *current == name => Ok(()),
            Slot::Field { .. } => Err(invalid("compound entries cannot be renamed while iterating")),
        }
    }

    /// Replaces the payload, returning the previous one.
    ///
    /// A list slot only accepts a value of the list's item kind. A compound
    /// entry keeps its name and accepts any kind but End.
    pub fn assign(&mut self, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if value.is_end() {
            return Err(invalid("End cannot be stored in a container"));
        }
        if self.is_list_item() {
            let expected = self.tag();
            if value.tag() != expected {
                return Err(mismatch(expected, value.tag()));
            }
        }
        Ok(std::mem::replace(self.value_mut(), value))
    }

    /// Moves the payload out into a standalone node, leaving the empty
    /// payload of the same kind in the container.
    pub fn take(&mut self) -> Node {
        let name = self.name().unwrap_or_default().to_owned();
        Node::named(name, self.value_mut().take())
    }

    /// A standalone deep copy of the node.
    pub fn duplicate(&self) -> Node {
        Node::named(self.name().unwrap_or_default(), self.deref().clone())
    }

    /// Converts the handle into a borrow of the list it points at, for
    /// building nested trees in one expression.
    pub fn into_list_mut(self) -> Result<&'a mut List> {
        match self.slot {
            Slot::Item(value) | Slot::Field { value, .. } => value.list_mut(),
            Slot::Entry { compound, position } => compound.value_at_mut(position).list_mut(),
        }
    }

    pub fn into_compound_mut(self) -> Result<&'a mut Compound> {
        match self.slot {
            Slot::Item(value) | Slot::Field { value, .. } => value.compound_mut(),
            Slot::Entry { compound, position } => {
                compound.value_at_mut(position).compound_mut()
            }
        }
    }

    value_setters!();
}

impl Deref for NodeMut<'_> {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        match &self.slot {
            Slot::Item(value) | Slot::Field { value, .. } => value,
            Slot::Entry { compound, position } => compound.node_at(*position).value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_unnamed() {
        let mut node = Node::named("", 1i8);
        assert_eq!(node.name(), None);
        node.set_name("a");
        assert_eq!(node.name(), Some("a"));
        node.set_name("");
        assert_eq!(node.name(), None);
    }

    #[cfg(not(all(feature = "assertions", debug_assertions)))]
    #[test]
    fn setters_keep_kind() {
        let mut node = Node::from(2.5f64);
        node.set_double(1.0).unwrap();
        assert!(matches!(node.set_float(1.0), Err(crate::Error::TypeMismatch { .. })));
        assert_eq!(node.get_double().unwrap(), 1.0);
        assert_eq!(node.tag(), Tag::Double);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut compound = Compound::new();
        compound.insert("a", 1).unwrap();
        let mut original = Node::named("root", compound);
        let copy = original.duplicate();
        original.compound_mut().unwrap().insert("b", 2).unwrap();
        assert_eq!(copy.as_compound().unwrap().len(), 1);
        assert_eq!(original.as_compound().unwrap().len(), 2);
        assert_eq!(copy.name(), Some("root"));
    }
}
