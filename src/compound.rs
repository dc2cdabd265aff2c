use std::{collections::HashMap, fmt, mem, slice, vec};

use crate::{Error, Index, Key, Node, NodeMut, Result, Value, invalid};

/// An ordered collection of named children with unique names.
///
/// Children keep their insertion order. Adding a child under a name that is
/// already present replaces the existing child in place, so the compound
/// never holds two children with the same name.
///
/// ```
/// use nbt_tree::{Compound, Node};
///
/// let mut compound = Compound::new();
/// compound.insert("a", 1)?;
/// compound.insert("x", 2)?;
/// compound.insert("b", 3)?;
/// compound.add(Node::named("x", "replaced"))?;
///
/// assert_eq!(compound.len(), 3);
/// assert_eq!(compound.get(1)?.name(), Some("x"));
/// assert_eq!(compound.get("x")?.get_string()?, "replaced");
/// # Ok::<(), nbt_tree::Error>(())
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Compound {
    entries: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Compound {
    pub fn new() -> Self {
        Compound::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Compound {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn position(&self, index: impl Index) -> Result<usize> {
        match index.key() {
            Key::Position(position) if position < self.entries.len() => Ok(position),
            Key::Position(position) => Err(Error::IndexOutOfRange {
                index: position,
                len: self.entries.len(),
            }),
            Key::Name(name) => self
                .index
                .get(name)
                .copied()
                .ok_or_else(|| Error::NotFound(name.to_owned())),
        }
    }

    /// Adds a child, keyed by its name (an unnamed node is keyed by `""`).
    ///
    /// An existing child with the same name is dropped and the new one takes
    /// its position.
    pub fn add(&mut self, node: Node) -> Result<NodeMut<'_>> {
        if node.is_end() {
            return Err(invalid("End cannot be stored in a container"));
        }
        let existing = self.index.get(node.raw_name()).copied();
        let position = match existing {
            Some(position) => {
                self.entries[position] = node;
                position
            }
            None => self.push(node),
        };
        Ok(NodeMut::entry(self, position))
    }

    /// Sets `name` to `value`, returning the child it replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Node>> {
        let node = Node::named(name, value);
        if node.is_end() {
            return Err(invalid("End cannot be stored in a container"));
        }
        match self.index.get(node.raw_name()).copied() {
            Some(position) => Ok(Some(mem::replace(&mut self.entries[position], node))),
            None => {
                self.push(node);
                Ok(None)
            }
        }
    }

    fn push(&mut self, node: Node) -> usize {
        let position = self.entries.len();
        self.index.insert(node.raw_name().to_owned(), position);
        self.entries.push(node);
        position
    }

    pub fn get(&self, index: impl Index) -> Result<&Node> {
        let position = self.position(index)?;
        Ok(&self.entries[position])
    }

    pub fn get_mut(&mut self, index: impl Index) -> Result<NodeMut<'_>> {
        let position = self.position(index)?;
        Ok(NodeMut::entry(self, position))
    }

    pub fn front(&self) -> Result<&Node> {
        self.get(0)
    }

    pub fn back(&self) -> Result<&Node> {
        self.get(self.entries.len().saturating_sub(1))
    }

    /// Removes a child by name or position, keeping the remaining children in
    /// order.
    pub fn remove(&mut self, index: impl Index) -> Result<Node> {
        let position = self.position(index)?;
        let node = self.entries.remove(position);
        self.index.remove(node.raw_name());
        self.reindex_from(position);
        Ok(node)
    }

    pub fn remove_front(&mut self) -> Result<Node> {
        self.remove(0)
    }

    pub fn remove_back(&mut self) -> Result<Node> {
        self.remove(self.entries.len().saturating_sub(1))
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Renames a child. A sibling already named `name` is evicted.
    pub fn rename(&mut self, index: impl Index, name: impl Into<String>) -> Result<()> {
        let position = self.position(index)?;
        self.rename_at(position, name.into());
        Ok(())
    }

    /// Returns the child's position after the rename.
    pub(crate) fn rename_at(&mut self, mut position: usize, name: String) -> usize {
        if self.entries[position].raw_name() == name {
            return position;
        }
        if let Some(evicted) = self.index.remove(&name) {
            self.entries.remove(evicted);
            if evicted < position {
                position -= 1;
            }
            self.reindex_from(evicted);
        }
        self.index.remove(self.entries[position].raw_name());
        self.entries[position].set_name(name.clone());
        self.index.insert(name, position);
        position
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, node) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(node.raw_name()) {
                *slot = position;
            }
        }
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.entries[position]
    }

    pub(crate) fn value_at_mut(&mut self, position: usize) -> &mut Value {
        self.entries[position].value_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.index.reserve(additional);
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.entries.iter()
    }

    /// Mutable handles to every child, in order.
    ///
    /// The handles can reassign payloads but not rename; see
    /// [`NodeMut::set_name`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = NodeMut<'_>> {
        self.entries.iter_mut().map(|node| {
            let (name, value) = node.parts_mut();
            NodeMut::field(name, value)
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Node::raw_name)
    }
}

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|node| (node.raw_name(), node.value())))
            .finish()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Compound {
    type Item = Node;
    type IntoIter = vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Compound {
        let mut compound = Compound::new();
        for (name, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            compound.insert(name, value).unwrap();
        }
        compound
    }

    fn assert_indexed(compound: &Compound) {
        for (position, node) in compound.iter().enumerate() {
            assert_eq!(compound.index[node.raw_name()], position);
        }
        assert_eq!(compound.index.len(), compound.len());
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut compound = sample();
        let removed = compound.remove("b").unwrap();
        assert_eq!(removed.get_int().unwrap(), 2);
        assert_eq!(compound.len(), 3);
        assert_indexed(&compound);
        assert_eq!(compound.get("d").unwrap().get_int().unwrap(), 4);
        assert_eq!(compound.remove(0).unwrap().name(), Some("a"));
        assert_indexed(&compound);
    }

    #[test]
    fn rename_evicts_sibling() {
        let mut compound = sample();
        compound.rename("d", "b").unwrap();
        assert_eq!(compound.len(), 3);
        assert_eq!(compound.keys().collect::<Vec<_>>(), ["a", "c", "b"]);
        assert_eq!(compound.get("b").unwrap().get_int().unwrap(), 4);
        assert_indexed(&compound);
    }

    #[test]
    fn rename_to_own_name_is_noop() {
        let mut compound = sample();
        compound.rename(2, "c").unwrap();
        assert_eq!(compound, sample());
    }

    #[test]
    fn iter_mut_keeps_index_consistent() {
        let mut compound = sample();
        for mut child in compound.iter_mut() {
            let name = child.name().unwrap().to_owned();
            child.set_name(name).unwrap();
            child.assign("text").unwrap();
        }
        assert_indexed(&compound);
        assert_eq!(compound.get("c").unwrap().get_string().unwrap(), "text");
    }

    #[cfg(not(all(feature = "assertions", debug_assertions)))]
    #[test]
    fn end_is_rejected() {
        let mut compound = Compound::new();
        assert!(matches!(
            compound.add(Node::new(crate::Tag::End)),
            Err(Error::InvalidOperation(_))
        ));
        assert!(compound.is_empty());
    }

    #[test]
    fn missing_lookups() {
        let mut compound = sample();
        assert!(matches!(compound.get("zz"), Err(Error::NotFound(name)) if name == "zz"));
        assert!(matches!(compound.get(9), Err(Error::IndexOutOfRange { index: 9, len: 4 })));
        compound.remove_all();
        assert!(matches!(compound.front(), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(compound.remove_back(), Err(Error::IndexOutOfRange { .. })));
    }
}
