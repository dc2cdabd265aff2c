use std::io::Write;

use zerocopy::byteorder;

use crate::{
    BigEndian, ByteOrder, Compound, Endian, Error, List, LittleEndian, MAX_DEPTH, Node, Result,
    Tag, Value, cold_path, encode_string, num::Number,
};

fn write_string<O: ByteOrder>(value: &str, out: &mut Vec<u8>) -> Result<()> {
    let encoded = encode_string(value, Endian::of::<O>());
    if encoded.len() > u16::MAX as usize {
        cold_path();
        return Err(Error::LengthOverflow(encoded.len()));
    }
    out.extend_from_slice(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes());
    out.extend_from_slice(&encoded);
    Ok(())
}

fn write_len<O: ByteOrder>(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len > i32::MAX as usize {
        cold_path();
        return Err(Error::LengthOverflow(len));
    }
    (len as i32).write_to::<O>(out);
    Ok(())
}

fn write_array<O: ByteOrder, T: Number>(values: &[T], out: &mut Vec<u8>) -> Result<()> {
    write_len::<O>(values.len(), out)?;
    out.reserve(values.len() * T::SIZE);
    for value in values {
        value.write_to::<O>(out);
    }
    Ok(())
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        cold_path();
        return Err(Error::DepthLimit(MAX_DEPTH));
    }
    Ok(())
}

fn write_list<O: ByteOrder>(list: &List, out: &mut Vec<u8>, depth: usize) -> Result<()> {
    check_depth(depth)?;
    if list.is_empty() {
        out.push(Tag::End as u8);
        return write_len::<O>(0, out);
    }
    out.push(list.item_tag() as u8);
    write_len::<O>(list.len(), out)?;
    for item in list {
        write_payload::<O>(item, out, depth)?;
    }
    Ok(())
}

fn write_compound<O: ByteOrder>(compound: &Compound, out: &mut Vec<u8>, depth: usize) -> Result<()> {
    check_depth(depth)?;
    for child in compound {
        write_tag::<O>(child, out, false, depth)?;
    }
    out.push(Tag::End as u8);
    Ok(())
}

fn write_payload<O: ByteOrder>(value: &Value, out: &mut Vec<u8>, depth: usize) -> Result<()> {
    match value {
        Value::End => {}
        Value::Byte(value) => value.write_to::<O>(out),
        Value::Short(value) => value.write_to::<O>(out),
        Value::Int(value) => value.write_to::<O>(out),
        Value::Long(value) => value.write_to::<O>(out),
        Value::Float(value) => value.write_to::<O>(out),
        Value::Double(value) => value.write_to::<O>(out),
        Value::ByteArray(values) => write_array::<O, i8>(values, out)?,
        Value::String(value) => write_string::<O>(value, out)?,
        Value::List(list) => write_list::<O>(list, out, depth + 1)?,
        Value::Compound(compound) => write_compound::<O>(compound, out, depth + 1)?,
        Value::IntArray(values) => write_array::<O, i32>(values, out)?,
        Value::LongArray(values) => write_array::<O, i64>(values, out)?,
    }
    Ok(())
}

fn write_tag<O: ByteOrder>(
    node: &Node,
    out: &mut Vec<u8>,
    is_list_item: bool,
    depth: usize,
) -> Result<()> {
    if !is_list_item {
        out.push(node.tag() as u8);
        if node.is_end() {
            return Ok(());
        }
        write_string::<O>(node.raw_name(), out)?;
    }
    write_payload::<O>(node.value(), out, depth)
}

/// Appends the encoding of `node` to `out`.
///
/// A list item is written as a bare payload; anything else gets the kind
/// byte and the name first (an End node is the single byte `0`). Trees
/// nested deeper than [`MAX_DEPTH`] fail with [`Error::DepthLimit`], the
/// same limit the decoder applies.
pub fn write_node<O: ByteOrder>(node: &Node, out: &mut Vec<u8>, is_list_item: bool) -> Result<()> {
    write_tag::<O>(node, out, is_list_item, 0)
}

/// Encodes `node` as a complete NBT document.
pub fn to_vec<O: ByteOrder>(node: &Node) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    write_node::<O>(node, &mut out, false)?;
    Ok(out)
}

#[inline]
pub fn to_vec_be(node: &Node) -> Result<Vec<u8>> {
    to_vec::<BigEndian>(node)
}

#[inline]
pub fn to_vec_le(node: &Node) -> Result<Vec<u8>> {
    to_vec::<LittleEndian>(node)
}

/// [`to_vec`] with the byte order chosen at runtime.
pub fn encode(node: &Node, endian: Endian) -> Result<Vec<u8>> {
    match endian {
        Endian::Big => to_vec::<BigEndian>(node),
        Endian::Little => to_vec::<LittleEndian>(node),
    }
}

pub fn to_writer<O: ByteOrder>(node: &Node, mut writer: impl Write) -> Result<()> {
    let bytes = to_vec::<O>(node)?;
    writer.write_all(&bytes).map_err(Error::IO)
}
