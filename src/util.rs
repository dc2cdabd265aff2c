use std::borrow::Cow;

use zerocopy::byteorder::Order;

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Byte order chosen at runtime.
///
/// The generic entry points take a [`ByteOrder`] type parameter
/// ([`BigEndian`](crate::BigEndian) or [`LittleEndian`](crate::LittleEndian));
/// `Endian` is the value-level counterpart used by the option structs.
///
/// The byte order also picks the string encoding: Java Edition documents
/// (big-endian) carry Modified UTF-8, Bedrock Edition documents
/// (little-endian) carry standard UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Endian {
    /// Java Edition.
    #[default]
    Big,
    /// Bedrock Edition.
    Little,
}

impl Endian {
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    pub const fn from_big(is_big_endian: bool) -> Self {
        if is_big_endian {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// The value-level form of a [`ByteOrder`] type.
    ///
    /// ```
    /// use nbt_tree::{BigEndian, Endian, LittleEndian};
    ///
    /// assert_eq!(Endian::of::<BigEndian>(), Endian::Big);
    /// assert_eq!(Endian::of::<LittleEndian>(), Endian::Little);
    /// ```
    pub const fn of<O: ByteOrder>() -> Self {
        match O::ORDER {
            Order::BigEndian => Endian::Big,
            Order::LittleEndian => Endian::Little,
        }
    }

    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }
}

/// Decodes a length-prefixed string payload.
///
/// Big-endian documents use Modified UTF-8, little-endian ones plain UTF-8.
/// Invalid sequences are replaced rather than rejected.
pub(crate) fn decode_string(raw: &[u8], endian: Endian) -> String {
    match endian {
        Endian::Big => simd_cesu8::mutf8::decode_lossy(raw).into_owned(),
        Endian::Little => String::from_utf8_lossy(raw).into_owned(),
    }
}

/// The wire bytes of a string in the encoding of `endian`.
pub(crate) fn encode_string(value: &str, endian: Endian) -> Cow<'_, [u8]> {
    match endian {
        Endian::Big => simd_cesu8::mutf8::encode(value),
        Endian::Little => Cow::Borrowed(value.as_bytes()),
    }
}
