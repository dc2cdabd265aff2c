use std::marker::PhantomData;

use zerocopy::byteorder;

use crate::{
    BigEndian, ByteOrder, Compound, Endian, Error, List, LittleEndian, Node, Result, Tag, Value,
    cold_path, decode_string, num::Number,
};

/// Maximum nesting of lists and compounds accepted by the decoder and the encoder.
pub const MAX_DEPTH: usize = 512;

/// A recursive-descent decoder over an in-memory NBT byte sequence.
///
/// Most callers want [`from_slice`] or one of the option-driven entry points
/// in this crate; `Reader` is for decoding several tags back to back or a
/// single list item out of context.
pub struct Reader<'a, O: ByteOrder> {
    data: &'a [u8],
    pos: usize,
    _marker: PhantomData<O>,
}

impl<'a, O: ByteOrder> Reader<'a, O> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader {
            data,
            pos: 0,
            _marker: PhantomData,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Decodes one node.
    ///
    /// With `list_item: None` this reads a full named tag: kind byte, name
    /// and payload; a lone End byte decodes to an End node. With
    /// `list_item: Some(tag)` it reads only a payload of kind `tag`, the way
    /// list items are stored.
    pub fn read_node(&mut self, list_item: Option<Tag>) -> Result<Node> {
        match list_item {
            Some(tag) => Ok(Node::from(self.read_payload(tag, 0)?)),
            None => {
                let tag = self.read_tag()?;
                if tag == Tag::End {
                    return Ok(Node::new(Tag::End));
                }
                let name = self.read_string()?;
                let value = self.read_payload(tag, 0)?;
                Ok(Node::named(name, value))
            }
        }
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    fn read_tag(&mut self) -> Result<Tag> {
        Tag::try_from(self.take(1)?[0])
    }

    #[inline]
    fn read_num<T: Number>(&mut self) -> Result<T> {
        T::read_from::<O>(self.take(T::SIZE)?)
    }

    /// A signed 32-bit count.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_num::<i32>()?;
        if len < 0 {
            cold_path();
            return Err(Error::InvalidLength(len));
        }
        Ok(len as usize)
    }

    fn read_string(&mut self) -> Result<String> {
        let bytes = self.take(2)?;
        let len = byteorder::U16::<O>::from_bytes([bytes[0], bytes[1]]).get() as usize;
        let raw = self.take(len)?;
        Ok(decode_string(raw, Endian::of::<O>()))
    }

    fn read_array<T: Number>(&mut self) -> Result<Vec<T>> {
        let len = self.read_len()?;
        let size = len.checked_mul(T::SIZE).ok_or(Error::EndOfFile)?;
        self.take(size)?
            .chunks_exact(T::SIZE)
            .map(T::read_from::<O>)
            .collect()
    }

    fn read_payload(&mut self, tag: Tag, depth: usize) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.read_num()?),
            Tag::Short => Value::Short(self.read_num()?),
            Tag::Int => Value::Int(self.read_num()?),
            Tag::Long => Value::Long(self.read_num()?),
            Tag::Float => Value::Float(self.read_num()?),
            Tag::Double => Value::Double(self.read_num()?),
            Tag::ByteArray => Value::ByteArray(self.read_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.read_list(depth + 1)?),
            Tag::Compound => Value::Compound(self.read_compound(depth + 1)?),
            Tag::IntArray => Value::IntArray(self.read_array()?),
            Tag::LongArray => Value::LongArray(self.read_array()?),
        })
    }

    fn read_list(&mut self, depth: usize) -> Result<List> {
        if depth > MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimit(MAX_DEPTH));
        }
        let item = self.read_tag()?;
        let len = self.read_len()?;
        if item == Tag::End {
            if len > 0 {
                cold_path();
                return Err(Error::InvalidTagType(0));
            }
            return Ok(List::new());
        }
        // Every item occupies at least one byte, so a count larger than the
        // remaining input fails on the first short read.
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(self.read_payload(item, depth)?);
        }
        Ok(List::from_raw(item, items))
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        if depth > MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimit(MAX_DEPTH));
        }
        let mut compound = Compound::new();
        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                return Ok(compound);
            }
            let name = self.read_string()?;
            let value = self.read_payload(tag, depth)?;
            compound.insert(name, value)?;
        }
    }
}

/// Decodes a complete NBT document: one named root tag and nothing after it.
pub fn from_slice<O: ByteOrder>(data: &[u8]) -> Result<Node> {
    let mut reader = Reader::<O>::new(data);
    let node = reader.read_node(None)?;
    if reader.remaining() > 0 {
        cold_path();
        return Err(Error::TrailingData(reader.remaining()));
    }
    Ok(node)
}

#[inline]
pub fn from_slice_be(data: &[u8]) -> Result<Node> {
    from_slice::<BigEndian>(data)
}

#[inline]
pub fn from_slice_le(data: &[u8]) -> Result<Node> {
    from_slice::<LittleEndian>(data)
}

/// [`from_slice`] with the byte order chosen at runtime.
pub fn decode(data: &[u8], endian: Endian) -> Result<Node> {
    match endian {
        Endian::Big => from_slice::<BigEndian>(data),
        Endian::Little => from_slice::<LittleEndian>(data),
    }
}
