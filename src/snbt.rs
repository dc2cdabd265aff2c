//! SNBT, the textual rendering of a tree.
//!
//! `{}` renders compactly, `{:#}` puts every container child on its own line
//! with two spaces of indent per level:
//!
//! ```
//! use nbt_tree::{Compound, List, Node, Tag};
//!
//! let mut list = List::typed(Tag::Int)?;
//! list.add(1)?;
//! list.add(2)?;
//! let mut compound = Compound::new();
//! compound.insert("n", 5i8)?;
//! compound.insert("l", list)?;
//! let node = Node::from(compound);
//!
//! assert_eq!(format!("{node}"), "{n:5b,l:[1,2]}");
//! assert_eq!(format!("{node:#}"), "{\n  n: 5b,\n  l: [\n    1,\n    2\n  ]\n}");
//! # Ok::<(), nbt_tree::Error>(())
//! ```
//!
//! Strings are quoted but not escaped.

use std::fmt::{self, Display, Write};

use crate::{Node, Value};

/// Renders `node`, including its name if it has one.
pub fn to_snbt(node: &Node, indented: bool) -> String {
    if indented {
        format!("{node:#}")
    } else {
        format!("{node}")
    }
}

fn write_indent(out: &mut dyn Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn write_named(
    out: &mut dyn Write,
    name: Option<&str>,
    value: &Value,
    indented: bool,
    depth: usize,
) -> fmt::Result {
    if let Some(name) = name {
        out.write_str(name)?;
        out.write_str(if indented { ": " } else { ":" })?;
    }
    write_value(out, value, indented, depth)
}

fn write_array<T: Display>(out: &mut dyn Write, prefix: char, values: &[T]) -> fmt::Result {
    write!(out, "[{prefix};")?;
    for (i, value) in values.iter().enumerate() {
        out.write_char(if i == 0 { ' ' } else { ',' })?;
        write!(out, "{value}")?;
    }
    out.write_char(']')
}

fn write_children<'a>(
    out: &mut dyn Write,
    brackets: (char, char),
    children: impl Iterator<Item = (Option<&'a str>, &'a Value)>,
    indented: bool,
    depth: usize,
) -> fmt::Result {
    out.write_char(brackets.0)?;
    let mut empty = true;
    for (name, value) in children {
        if !empty {
            out.write_char(',')?;
        }
        empty = false;
        if indented {
            out.write_char('\n')?;
            write_indent(out, depth + 1)?;
        }
        write_named(out, name, value, indented, depth + 1)?;
    }
    if indented && !empty {
        out.write_char('\n')?;
        write_indent(out, depth)?;
    }
    out.write_char(brackets.1)
}

fn write_value(out: &mut dyn Write, value: &Value, indented: bool, depth: usize) -> fmt::Result {
    match value {
        Value::End => Ok(()),
        Value::Byte(value) => write!(out, "{value}b"),
        Value::Short(value) => write!(out, "{value}s"),
        Value::Int(value) => write!(out, "{value}"),
        Value::Long(value) => write!(out, "{value}l"),
        Value::Float(value) => write!(out, "{value}f"),
        Value::Double(value) => write!(out, "{value}d"),
        Value::String(value) => write!(out, "\"{value}\""),
        Value::ByteArray(values) => write_array(out, 'B', values),
        Value::IntArray(values) => write_array(out, 'I', values),
        Value::LongArray(values) => write_array(out, 'L', values),
        Value::List(list) => write_children(
            out,
            ('[', ']'),
            list.iter().map(|item| (None, item)),
            indented,
            depth,
        ),
        Value::Compound(compound) => write_children(
            out,
            ('{', '}'),
            compound.iter().map(|child| (child.name(), child.value())),
            indented,
            depth,
        ),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indented = f.alternate();
        write_value(f, self, indented, 0)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indented = f.alternate();
        write_named(f, self.name(), self.value(), indented, 0)
    }
}
