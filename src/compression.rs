//! Gzip and zlib framing around encoded NBT documents.
//!
//! Java Edition stores most files gzip-compressed; region chunks use zlib.
//! Framed input is recognised by its magic bytes, so callers rarely need to
//! know which one they are looking at.

use std::io::{Read, Write};

use flate2::{
    read::{GzDecoder, ZlibDecoder},
    write::{GzEncoder, ZlibEncoder},
};

use crate::{Error, Result};

/// Framing applied to an encoded document.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zlib,
}

impl Compression {
    /// Identifies the framing of `data` from its first two bytes.
    ///
    /// ```
    /// use nbt_tree::compression::Compression;
    ///
    /// assert_eq!(Compression::detect(&[0x1F, 0x8B, 0x08]), Compression::Gzip);
    /// assert_eq!(Compression::detect(&[0x78, 0x9C]), Compression::Zlib);
    /// assert_eq!(Compression::detect(&[0x0A, 0x00, 0x00]), Compression::None);
    /// ```
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0x1F, 0x8B, ..] => Compression::Gzip,
            [0x78, 0x01 | 0x5E | 0x9C | 0xDA, ..] => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

pub fn is_compressed(data: &[u8]) -> bool {
    Compression::detect(data) != Compression::None
}

/// Wraps `data` in the given framing. [`Compression::None`] copies it.
pub fn compress(data: &[u8], compression: Compression) -> Result<Vec<u8>> {
    match compression {
        Compression::None => Ok(data.to_vec()),
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(data)?;
            Ok(encoder.finish()?)
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(data)?;
            Ok(encoder.finish()?)
        }
    }
}

/// Strips gzip or zlib framing. Input without a recognised magic is returned
/// unchanged.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 4);
    let read = match Compression::detect(data) {
        Compression::None => return Ok(data.to_vec()),
        Compression::Gzip => GzDecoder::new(data).read_to_end(&mut out),
        Compression::Zlib => ZlibDecoder::new(data).read_to_end(&mut out),
    };
    read.map_err(Error::IO)?;
    Ok(out)
}
