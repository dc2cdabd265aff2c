use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    Endian, Error, Node, Result,
    compression::{self, Compression},
    decode, encode,
};

/// How to turn stored bytes into a tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReadOptions {
    pub endian: Endian,
    /// Bytes to discard before the document, such as the 8-byte header of a
    /// Bedrock `level.dat`.
    pub header_len: usize,
    /// Undo gzip/zlib framing when the input starts with its magic.
    pub decompress: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            endian: Endian::Big,
            header_len: 0,
            decompress: true,
        }
    }
}

/// How to turn a tree into stored bytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WriteOptions {
    pub endian: Endian,
    pub compression: Compression,
}

/// Decodes a stored document: skips the header, strips any compression,
/// then decodes the root tag.
pub fn read_with(data: &[u8], options: &ReadOptions) -> Result<Node> {
    let body = data.get(options.header_len..).ok_or(Error::EndOfFile)?;
    if options.decompress && compression::is_compressed(body) {
        let raw = compression::decompress(body)?;
        decode(&raw, options.endian)
    } else {
        decode(body, options.endian)
    }
}

/// Encodes a document and applies the requested compression.
pub fn write_with(node: &Node, options: &WriteOptions) -> Result<Vec<u8>> {
    let raw = encode(node, options.endian)?;
    match options.compression {
        Compression::None => Ok(raw),
        compression => compression::compress(&raw, compression),
    }
}

/// Reads `reader` to the end and decodes the result with [`read_with`].
pub fn from_reader(mut reader: impl Read, options: &ReadOptions) -> Result<Node> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(Error::IO)?;
    read_with(&data, options)
}

pub fn to_writer_with(node: &Node, mut writer: impl Write, options: &WriteOptions) -> Result<()> {
    let data = write_with(node, options)?;
    writer.write_all(&data).map_err(Error::IO)
}

/// Loads an NBT file.
///
/// A file that cannot be read fails with [`Error::IO`]; a file whose
/// contents are not a valid document fails with one of the malformed-input
/// variants.
pub fn load(path: impl AsRef<Path>, is_big_endian: bool, header_len: usize) -> Result<Node> {
    load_with(
        path,
        &ReadOptions {
            endian: Endian::from_big(is_big_endian),
            header_len,
            decompress: true,
        },
    )
}

pub fn load_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Node> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(Error::IO)?;
    let node = read_with(&data, options)?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        compressed = compression::is_compressed(data.get(options.header_len..).unwrap_or_default()),
        "loaded nbt file"
    );
    Ok(node)
}

/// Saves `node` as an NBT file, gzip-compressed when `compress` is set.
pub fn save(
    node: &Node,
    path: impl AsRef<Path>,
    is_big_endian: bool,
    compress: bool,
) -> Result<()> {
    save_with(
        node,
        path,
        &WriteOptions {
            endian: Endian::from_big(is_big_endian),
            compression: if compress {
                Compression::Gzip
            } else {
                Compression::None
            },
        },
    )
}

pub fn save_with(node: &Node, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let data = write_with(node, options)?;
    fs::write(path, &data).map_err(Error::IO)?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        compression = ?options.compression,
        "saved nbt file"
    );
    Ok(())
}
