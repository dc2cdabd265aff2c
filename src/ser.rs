//! `serde::Serialize` for the tree, so it can be dumped through any serde
//! format (JSON for inspection, for instance).
//!
//! Lists and the three array kinds become sequences, compounds become maps
//! in child order, and names of standalone nodes are dropped.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{Compound, List, Node, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(value) => serializer.serialize_i8(*value),
            Value::Short(value) => serializer.serialize_i16(*value),
            Value::Int(value) => serializer.serialize_i32(*value),
            Value::Long(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f32(*value),
            Value::Double(value) => serializer.serialize_f64(*value),
            Value::ByteArray(values) => serializer.collect_seq(values),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(list) => list.serialize(serializer),
            Value::Compound(compound) => compound.serialize(serializer),
            Value::IntArray(values) => serializer.collect_seq(values),
            Value::LongArray(values) => serializer.collect_seq(values),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for child in self {
            map.serialize_entry(child.raw_name(), child.value())?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}
