//! Error types for building, reading and writing NBT trees.
//!
//! Every fallible operation in this crate returns [`Result`]. The variants of
//! [`Error`] are grouped into broad categories by [`Error::kind`], which is
//! usually what callers want to branch on:
//!
//! ```
//! use nbt_tree::{ErrorKind, from_slice_be};
//!
//! // A Byte tag whose payload is missing.
//! let err = from_slice_be(&[0x01, 0x00, 0x00]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedInput);
//! ```

use std::fmt::{self, Display};

use crate::Tag;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when building,
/// reading or writing NBT trees.
#[derive(Debug)]
pub enum Error {
    /// A free-form message, produced by serde.
    Message(String),

    /// An I/O error occurred.
    ///
    /// Returned when a file cannot be opened, or when a [`std::io::Read`] or
    /// [`std::io::Write`] implementation fails, or when the compression layer
    /// rejects its input.
    IO(std::io::Error),

    /// The operation requires a value of kind `expected` but the value (or
    /// the list slot) has kind `found`.
    TypeMismatch { expected: Tag, found: Tag },

    /// A structurally illegal request, such as renaming a list item or
    /// adding to a list whose item kind was never set.
    InvalidOperation(&'static str),

    /// No compound entry carries this name.
    NotFound(String),

    /// A positional lookup past the end of a container.
    IndexOutOfRange { index: usize, len: usize },

    /// The input ended unexpectedly.
    EndOfFile,

    /// Extra bytes remain after the root tag.
    TrailingData(usize),

    /// NBT defines tag types 0-12. Any other byte where a tag type is
    /// expected is reported with this variant.
    InvalidTagType(u8),

    /// A length or count prefix on the wire is negative.
    InvalidLength(i32),

    /// The input nests lists and compounds deeper than the decoder allows.
    DepthLimit(usize),

    /// A string, name, array or list is too long to be length-prefixed.
    LengthOverflow(usize),
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidOperation,
    NotFound,
    IndexOutOfRange,
    MalformedInput,
    IOFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidOperation(_) | Error::LengthOverflow(_) => ErrorKind::InvalidOperation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::IO(_) => ErrorKind::IOFailure,
            Error::Message(_)
            | Error::EndOfFile
            | Error::TrailingData(_)
            | Error::InvalidTagType(_)
            | Error::InvalidLength(_)
            | Error::DepthLimit(_) => ErrorKind::MalformedInput,
        }
    }
}

/// Reports a caller error.
///
/// With the `assertions` feature in a debug build this panics at the call
/// site instead of returning.
#[inline]
#[track_caller]
pub(crate) fn misuse(error: Error) -> Error {
    if cfg!(all(feature = "assertions", debug_assertions)) {
        panic!("nbt misuse: {error}");
    }
    error
}

#[inline]
#[track_caller]
pub(crate) fn mismatch(expected: Tag, found: Tag) -> Error {
    misuse(Error::TypeMismatch { expected, found })
}

#[inline]
#[track_caller]
pub(crate) fn invalid(reason: &'static str) -> Error {
    misuse(Error::InvalidOperation(reason))
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => write!(formatter, "i/o error: {error}"),
            Error::TypeMismatch { expected, found } => {
                write!(formatter, "type mismatch: expected {expected}, found {found}")
            }
            Error::InvalidOperation(reason) => write!(formatter, "invalid operation: {reason}"),
            Error::NotFound(name) => write!(formatter, "no entry named {name:?}"),
            Error::IndexOutOfRange { index, len } => {
                write!(formatter, "index {index} out of range for length {len}")
            }
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => write!(
                formatter,
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            ),
            Error::InvalidTagType(tag) => write!(formatter, "invalid NBT tag type: {tag:#04x}"),
            Error::InvalidLength(len) => write!(formatter, "invalid length prefix: {len}"),
            Error::DepthLimit(depth) => write!(formatter, "nesting exceeds depth {depth}"),
            Error::LengthOverflow(len) => write!(formatter, "length too long: {len}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}
