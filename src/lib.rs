//! An owned NBT (Named Binary Tag) tree.
//!
//! Build a tree out of [`Node`]s, [`List`]s and [`Compound`]s, write it to the
//! binary wire format used by Minecraft (big-endian for Java Edition,
//! little-endian for Bedrock Edition, optionally gzip/zlib-framed), read it
//! back, or render it as SNBT text.
//!
//! ```
//! use nbt_tree::{Compound, Node, from_slice_le, to_vec_le};
//!
//! let mut root = Compound::new();
//! root.insert("greeting", "Hi")?;
//! root.insert("n", 5)?;
//! let root = Node::named("", root);
//!
//! let bytes = to_vec_le(&root)?;
//! let back = from_slice_le(&bytes)?;
//! let compound = back.as_compound()?;
//! assert_eq!(compound.get("greeting")?.get_string()?, "Hi");
//! assert_eq!(compound.get("n")?.get_int()?, 5);
//! # Ok::<(), nbt_tree::Error>(())
//! ```
//!
//! Children are owned by their container, so a tree can never be inserted
//! into one of its own descendants:
//!
//! ```compile_fail
//! use nbt_tree::{Node, Tag};
//!
//! let mut outer = Node::new(Tag::Compound);
//! let inner = outer.compound_mut().unwrap();
//! inner.add(outer).unwrap();
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

pub mod compression;
mod compound;
#[cfg(feature = "serde")]
mod de;
mod error;
mod file;
mod index;
mod list;
mod node;
pub mod num;
mod read;
#[cfg(feature = "serde")]
mod ser;
mod snbt;
mod tag;
mod util;
mod value;
mod write;

pub use compound::*;
pub use error::*;
pub use file::*;
pub use index::*;
pub use list::*;
pub use node::*;
pub use read::*;
pub use snbt::*;
pub use tag::*;
pub use util::*;
pub use value::*;
pub use write::*;
