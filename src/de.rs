//! `serde::Deserialize` for the tree, building a [`Value`] out of any
//! self-describing format.
//!
//! Kinds are inferred from the data model: booleans become Byte, signed
//! 8/16-bit integers keep their width, wider integers become Int when they
//! fit and Long otherwise, sequences become lists (every element must infer
//! to the same kind), maps become compounds, byte buffers become ByteArray.
//! Null has no NBT counterpart and is rejected.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

use crate::{Compound, Error, List, Node, Value};

/// Upper bound on preallocation from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an NBT value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i8<E: de::Error>(self, v: i8) -> Result<Value, E> {
        Ok(Value::Byte(v))
    }

    fn visit_i16<E: de::Error>(self, v: i16) -> Result<Value, E> {
        Ok(Value::Short(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(match i32::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Long(v),
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        match i64::try_from(v) {
            Ok(v) => self.visit_i64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Value, E> {
        Ok(Value::ByteArray(v.iter().map(|&b| b as i8).collect()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut list = List::new();
        if let Some(hint) = seq.size_hint() {
            list.reserve(hint.min(MAX_PREALLOC));
        }
        while let Some(item) = seq.next_element::<Value>()? {
            if list.is_uninitialized() {
                list.init_item_tag(item.tag()).map_err(de::Error::custom)?;
            } else if item.tag() != list.item_tag() {
                // Mixed input is a data error, not a caller error.
                return Err(de::Error::custom(Error::TypeMismatch {
                    expected: list.item_tag(),
                    found: item.tag(),
                }));
            }
            list.add(item).map_err(de::Error::custom)?;
        }
        Ok(Value::List(list))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let capacity = map.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut compound = Compound::with_capacity(capacity);
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            compound.insert(name, value).map_err(de::Error::custom)?;
        }
        Ok(Value::Compound(compound))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Node::from)
    }
}
