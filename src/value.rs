use std::mem;

use crate::{Compound, Error, Index, Key, List, Node, Result, Tag, invalid, mismatch};

/// The payload of an NBT value.
///
/// The variant is the value's kind. Accessors fail with
/// [`Error::TypeMismatch`] when called on the wrong kind; they never coerce.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Terminates a compound on the wire. Never stored inside a container.
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The empty payload of a kind: zero, `""`, an empty array, an
    /// uninitialized list or an empty compound.
    pub fn empty(tag: Tag) -> Self {
        match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(0),
            Tag::Short => Value::Short(0),
            Tag::Int => Value::Int(0),
            Tag::Long => Value::Long(0),
            Tag::Float => Value::Float(0.0),
            Tag::Double => Value::Double(0.0),
            Tag::ByteArray => Value::ByteArray(Vec::new()),
            Tag::String => Value::String(String::new()),
            Tag::List => Value::List(List::new()),
            Tag::Compound => Value::Compound(Compound::new()),
            Tag::IntArray => Value::IntArray(Vec::new()),
            Tag::LongArray => Value::LongArray(Vec::new()),
        }
    }

    pub const fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Moves the payload out, leaving the empty payload of the same kind.
    ///
    /// ```
    /// use nbt_tree::Value;
    ///
    /// let mut value = Value::from("moved");
    /// let taken = value.take();
    /// assert_eq!(taken.get_string()?, "moved");
    /// assert_eq!(value.get_string()?, "");
    /// # Ok::<(), nbt_tree::Error>(())
    /// ```
    pub fn take(&mut self) -> Value {
        let empty = Value::empty(self.tag());
        mem::replace(self, empty)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Value::End)
    }

    pub fn is_scalar(&self) -> bool {
        self.tag().is_scalar()
    }

    pub fn is_array(&self) -> bool {
        self.tag().is_array()
    }

    pub fn is_container(&self) -> bool {
        self.tag().is_container()
    }

    /// Looks up a child of a list (by position) or compound (by position or
    /// name).
    ///
    /// ```
    /// use nbt_tree::{Compound, List, Tag, Value};
    ///
    /// let mut list = List::typed(Tag::Int)?;
    /// list.add(7)?;
    /// let mut compound = Compound::new();
    /// compound.insert("items", list)?;
    /// let root = Value::from(compound);
    ///
    /// assert_eq!(root.get("items")?.get(0)?.get_int()?, 7);
    /// # Ok::<(), nbt_tree::Error>(())
    /// ```
    pub fn get(&self, index: impl Index) -> Result<&Value> {
        match self {
            Value::Compound(compound) => compound.get(index).map(Node::value),
            Value::List(list) => match index.key() {
                Key::Position(position) => list.get(position),
                Key::Name(_) => Err(invalid("lists are indexed by position")),
            },
            other => Err(mismatch(Tag::Compound, other.tag())),
        }
    }

    pub fn get_string(&self) -> Result<&str> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(mismatch(Tag::String, other.tag())),
        }
    }

    pub fn set_string(&mut self, value: impl Into<String>) -> Result<()> {
        *self.string_mut()? = value.into();
        Ok(())
    }

    pub fn string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(mismatch(Tag::String, other.tag())),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn as_list(&self) -> Result<&List> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(mismatch(Tag::List, other.tag())),
        }
    }

    pub fn list_mut(&mut self) -> Result<&mut List> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(mismatch(Tag::List, other.tag())),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_compound(&self) -> Result<&Compound> {
        match self {
            Value::Compound(compound) => Ok(compound),
            other => Err(mismatch(Tag::Compound, other.tag())),
        }
    }

    pub fn compound_mut(&mut self) -> Result<&mut Compound> {
        match self {
            Value::Compound(compound) => Ok(compound),
            other => Err(mismatch(Tag::Compound, other.tag())),
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Value::Compound(_))
    }
}

macro_rules! scalar_accessors {
    ($($variant:ident($ty:ty): $is:ident, $get:ident, $set:ident;)*) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Value::$variant(_))
                }

                pub fn $get(&self) -> Result<$ty> {
                    match self {
                        Value::$variant(value) => Ok(*value),
                        other => Err(mismatch(Tag::$variant, other.tag())),
                    }
                }

                pub fn $set(&mut self, value: $ty) -> Result<()> {
                    match self {
                        Value::$variant(slot) => {
                            *slot = value;
                            Ok(())
                        }
                        other => Err(mismatch(Tag::$variant, other.tag())),
                    }
                }
            )*
        }
    };
}

scalar_accessors! {
    Byte(i8): is_byte, get_byte, set_byte;
    Short(i16): is_short, get_short, set_short;
    Int(i32): is_int, get_int, set_int;
    Long(i64): is_long, get_long, set_long;
    Float(f32): is_float, get_float, set_float;
    Double(f64): is_double, get_double, set_double;
}

macro_rules! array_accessors {
    ($($variant:ident($elem:ty): $is:ident, $get:ident, $set:ident, $get_mut:ident;)*) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Value::$variant(_))
                }

                pub fn $get(&self) -> Result<&[$elem]> {
                    match self {
                        Value::$variant(values) => Ok(values),
                        other => Err(mismatch(Tag::$variant, other.tag())),
                    }
                }

                pub fn $set(&mut self, values: impl Into<Vec<$elem>>) -> Result<()> {
                    *self.$get_mut()? = values.into();
                    Ok(())
                }

                pub fn $get_mut(&mut self) -> Result<&mut Vec<$elem>> {
                    match self {
                        Value::$variant(values) => Ok(values),
                        other => Err(mismatch(Tag::$variant, other.tag())),
                    }
                }
            )*
        }
    };
}

array_accessors! {
    ByteArray(i8): is_byte_array, get_byte_array, set_byte_array, byte_array_mut;
    IntArray(i32): is_int_array, get_int_array, set_int_array, int_array_mut;
    LongArray(i64): is_long_array, get_long_array, set_long_array, long_array_mut;
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<i8>> for Value {
    fn from(value: Vec<i8>) -> Self {
        Value::ByteArray(value)
    }
}

impl From<&[i8]> for Value {
    fn from(value: &[i8]) -> Self {
        Value::ByteArray(value.to_vec())
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Value::IntArray(value)
    }
}

impl From<&[i32]> for Value {
    fn from(value: &[i32]) -> Self {
        Value::IntArray(value.to_vec())
    }
}

impl From<Vec<i64>> for Value {
    fn from(value: Vec<i64>) -> Self {
        Value::LongArray(value)
    }
}

impl From<&[i64]> for Value {
    fn from(value: &[i64]) -> Self {
        Value::LongArray(value.to_vec())
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Compound> for Value {
    fn from(value: Compound) -> Self {
        Value::Compound(value)
    }
}

/// Drops the node's name.
impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.into_value()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(value) => Ok(value),
            other => Err(mismatch(Tag::String, other.tag())),
        }
    }
}
