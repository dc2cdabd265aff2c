//! Endian-aware encoding of the fixed-width NBT scalars.
//!
//! Values are read from and written to their wire representation in the
//! requested byte order, regardless of the host's. Floats travel as the
//! IEEE-754 bit pattern of the same-width integer.
//!
//! ```
//! use nbt_tree::{Endian, num};
//!
//! assert_eq!(num::write(0x0102_i16, Endian::Big), [0x01, 0x02]);
//! assert_eq!(num::write(0x0102_i16, Endian::Little), [0x02, 0x01]);
//! assert_eq!(num::read::<i16>(&[0x01, 0x02], Endian::Big)?, 0x0102);
//! # Ok::<(), nbt_tree::Error>(())
//! ```
//!
//! A slice shorter than the scalar is rejected with
//! [`Error::EndOfFile`](crate::Error::EndOfFile); extra trailing bytes are
//! ignored.

use zerocopy::{BigEndian, LittleEndian, byteorder};

use crate::{ByteOrder, Endian, Error, Result, Tag, cold_path};

mod private {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A fixed-width scalar that has an NBT wire representation.
pub trait Number: private::Sealed + Copy + Sized {
    /// Width on the wire.
    const SIZE: usize;
    /// The tag of a standalone value of this type.
    const TAG: Tag;

    /// Decodes the first [`SIZE`](Number::SIZE) bytes of `bytes`.
    fn read_from<O: ByteOrder>(bytes: &[u8]) -> Result<Self>;

    /// Appends the encoding of `self` to `out`.
    fn write_to<O: ByteOrder>(self, out: &mut Vec<u8>);
}

#[inline]
fn head<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    match bytes.get(..N) {
        Some(slice) => {
            let mut buf = [0u8; N];
            buf.copy_from_slice(slice);
            Ok(buf)
        }
        None => {
            cold_path();
            Err(Error::EndOfFile)
        }
    }
}

impl Number for i8 {
    const SIZE: usize = 1;
    const TAG: Tag = Tag::Byte;

    #[inline]
    fn read_from<O: ByteOrder>(bytes: &[u8]) -> Result<Self> {
        Ok(head::<1>(bytes)?[0] as i8)
    }

    #[inline]
    fn write_to<O: ByteOrder>(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }
}

macro_rules! impl_number {
    ($ty:ty, $wire:ident, $size:literal, $tag:ident) => {
        impl Number for $ty {
            const SIZE: usize = $size;
            const TAG: Tag = Tag::$tag;

            #[inline]
            fn read_from<O: ByteOrder>(bytes: &[u8]) -> Result<Self> {
                Ok(byteorder::$wire::<O>::from_bytes(head::<$size>(bytes)?).get())
            }

            #[inline]
            fn write_to<O: ByteOrder>(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&byteorder::$wire::<O>::new(self).to_bytes());
            }
        }
    };
}

impl_number!(i16, I16, 2, Short);
impl_number!(i32, I32, 4, Int);
impl_number!(i64, I64, 8, Long);
impl_number!(f32, F32, 4, Float);
impl_number!(f64, F64, 8, Double);

/// Decodes a `T` from the front of `bytes` in the given byte order.
pub fn read<T: Number>(bytes: &[u8], endian: Endian) -> Result<T> {
    match endian {
        Endian::Big => T::read_from::<BigEndian>(bytes),
        Endian::Little => T::read_from::<LittleEndian>(bytes),
    }
}

/// Encodes `value` in the given byte order.
pub fn write<T: Number>(value: T, endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::SIZE);
    match endian {
        Endian::Big => value.write_to::<BigEndian>(&mut out),
        Endian::Little => value.write_to::<LittleEndian>(&mut out),
    }
    out
}
