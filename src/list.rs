use std::slice;

use crate::{Error, NodeMut, Result, Tag, Value, invalid, mismatch};

/// An ordered sequence of unnamed values that all share one kind.
///
/// A list starts out uninitialized (item kind [`Tag::End`]). Until its item
/// kind is set with [`init_item_tag`](List::init_item_tag), it holds no items
/// and rejects every mutation. Once set, adding a value of any other kind
/// fails with [`Error::TypeMismatch`].
///
/// ```
/// use nbt_tree::{List, Tag};
///
/// let mut list = List::typed(Tag::Int)?;
/// list.add(1)?;
/// list.add(2)?;
/// list.add(3)?;
/// assert_eq!(list.item_tag(), Tag::Int);
/// assert_eq!(list.len(), 3);
/// # Ok::<(), nbt_tree::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct List {
    item: Tag,
    items: Vec<Value>,
}

impl List {
    /// An uninitialized list.
    pub const fn new() -> Self {
        List {
            item: Tag::End,
            items: Vec::new(),
        }
    }

    /// An empty list of the given item kind.
    pub fn typed(item: Tag) -> Result<Self> {
        let mut list = List::new();
        list.init_item_tag(item)?;
        Ok(list)
    }

    pub(crate) fn from_raw(item: Tag, items: Vec<Value>) -> Self {
        debug_assert!(items.iter().all(|value| value.tag() == item));
        List { item, items }
    }

    pub fn item_tag(&self) -> Tag {
        self.item
    }

    pub fn is_uninitialized(&self) -> bool {
        self.item == Tag::End
    }

    /// Sets the item kind. Only valid once, on an uninitialized list.
    pub fn init_item_tag(&mut self, item: Tag) -> Result<()> {
        if !self.is_uninitialized() {
            return Err(invalid("list item kind is already set"));
        }
        if item == Tag::End {
            return Err(invalid("End is not a valid list item kind"));
        }
        self.item = item;
        Ok(())
    }

    /// Drops every item and returns the list to the uninitialized state.
    pub fn reset(&mut self) {
        self.items.clear();
        self.item = Tag::End;
    }

    /// Appends a value, taking ownership of it.
    ///
    /// A [`Node`](crate::Node) loses its name on the way in.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<NodeMut<'_>> {
        let value = value.into();
        if self.is_uninitialized() {
            return Err(invalid("list item kind is not set"));
        }
        if value.tag() != self.item {
            return Err(mismatch(self.item, value.tag()));
        }
        self.items.push(value);
        let last = self.items.len() - 1;
        Ok(NodeMut::item(&mut self.items[last]))
    }

    /// Overwrites the item at `index` with a value of the same kind,
    /// returning the previous item.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        self.get_mut(index)?.assign(value)
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<NodeMut<'_>> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .map(NodeMut::item)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn front(&self) -> Result<&Value> {
        self.get(0)
    }

    pub fn back(&self) -> Result<&Value> {
        self.get(self.items.len().saturating_sub(1))
    }

    /// Removes and returns the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        self.check_mutable()?;
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn remove_front(&mut self) -> Result<Value> {
        self.remove(0)
    }

    pub fn remove_back(&mut self) -> Result<Value> {
        self.check_mutable()?;
        self.items.pop().ok_or(Error::IndexOutOfRange { index: 0, len: 0 })
    }

    /// Drops every item but keeps the item kind.
    pub fn remove_all(&mut self) -> Result<()> {
        self.check_mutable()?;
        self.items.clear();
        Ok(())
    }

    fn check_mutable(&self) -> Result<()> {
        if self.is_uninitialized() {
            return Err(invalid("list item kind is not set"));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = NodeMut<'_>> {
        self.items.iter_mut().map(NodeMut::item)
    }
}

/// Two lists are equal when they hold equal items; the item kind of an empty
/// list does not take part, since it is not preserved on the wire.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.item == other.item && self.items == other.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[cfg(not(all(feature = "assertions", debug_assertions)))]
    #[test]
    fn uninitialized_list_rejects_mutation() {
        let mut list = List::new();
        assert!(matches!(list.add(1), Err(Error::InvalidOperation(_))));
        assert!(matches!(list.remove(0), Err(Error::InvalidOperation(_))));
        assert!(matches!(list.remove_back(), Err(Error::InvalidOperation(_))));
        assert!(matches!(list.remove_all(), Err(Error::InvalidOperation(_))));
        assert!(matches!(list.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
        assert!(matches!(list.front(), Err(Error::IndexOutOfRange { .. })));
    }

    #[cfg(not(all(feature = "assertions", debug_assertions)))]
    #[test]
    fn item_kind_is_set_once() {
        let mut list = List::new();
        list.init_item_tag(Tag::Short).unwrap();
        assert!(matches!(
            list.init_item_tag(Tag::Short),
            Err(Error::InvalidOperation(_))
        ));
        list.reset();
        list.init_item_tag(Tag::Long).unwrap();
        assert_eq!(list.item_tag(), Tag::Long);
        assert!(matches!(List::typed(Tag::End), Err(Error::InvalidOperation(_))));
    }

    #[test]
    fn reset_discards_items() {
        let mut list = List::typed(Tag::Int).unwrap();
        list.add(1).unwrap();
        list.reset();
        assert!(list.is_uninitialized());
        assert!(list.is_empty());
    }

    #[test]
    fn add_strips_names() {
        let mut list = List::typed(Tag::Byte).unwrap();
        let item = list.add(Node::named("dropped", 4i8)).unwrap();
        assert_eq!(item.name(), None);
        assert!(item.is_list_item());
    }

    #[cfg(not(all(feature = "assertions", debug_assertions)))]
    #[test]
    fn set_requires_item_kind() {
        let mut list = List::typed(Tag::Int).unwrap();
        list.add(1).unwrap();
        assert_eq!(list.set(0, 5).unwrap(), Value::Int(1));
        assert!(matches!(
            list.set(0, 5i64),
            Err(Error::TypeMismatch { expected: Tag::Int, found: Tag::Long })
        ));
        assert!(matches!(list.set(3, 5), Err(Error::IndexOutOfRange { index: 3, len: 1 })));
        assert_eq!(list.get(0).unwrap(), &Value::Int(5));
    }

    #[test]
    fn front_back_and_removal() {
        let mut list = List::typed(Tag::String).unwrap();
        for s in ["a", "b", "c"] {
            list.add(s).unwrap();
        }
        assert_eq!(list.front().unwrap().get_string().unwrap(), "a");
        assert_eq!(list.back().unwrap().get_string().unwrap(), "c");
        assert_eq!(list.remove(1).unwrap(), Value::from("b"));
        assert_eq!(list.remove_front().unwrap(), Value::from("a"));
        assert_eq!(list.remove_back().unwrap(), Value::from("c"));
        assert!(matches!(list.remove_back(), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(list.remove(0), Err(Error::IndexOutOfRange { .. })));
        assert_eq!(list.item_tag(), Tag::String);
    }

    #[test]
    fn empty_lists_compare_equal() {
        assert_eq!(List::typed(Tag::Int).unwrap(), List::new());
        let mut ints = List::typed(Tag::Int).unwrap();
        ints.add(0).unwrap();
        assert_ne!(ints, List::new());
    }
}
