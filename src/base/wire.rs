//! Creating and consuming data in wire format.
//!
//! All multi-octet integers in DNS messages are in network byte order. The
//! functions [`read_u8`], [`read_u16_be`], and [`read_u32_be`] extract such
//! integers from an octets slice at a given offset. They never panic: if
//! the slice is too short, they return a [`ParseError`] that knows where
//! the read happened and how many octets were wanted.
//!
//! The [`Parse`] and [`Compose`] traits do the same for a
//! [`Parser`][octseq::parse::Parser] acting as a cursor over a complete
//! message and for an [`OctetsBuilder`] respectively.

use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::Parser;

//------------ Primitive reads -----------------------------------------------

/// Reads the octet at `offset`.
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, ParseError> {
    let mut parser = Parser::from_ref(buf);
    parser
        .seek(offset)
        .and_then(|_| parser.parse_u8())
        .map_err(|_| ParseError::too_short(offset, 1))
}

/// Reads the big endian 16 bit integer starting at `offset`.
pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, ParseError> {
    let mut parser = Parser::from_ref(buf);
    parser
        .seek(offset)
        .and_then(|_| parser.parse_u16_be())
        .map_err(|_| ParseError::too_short(offset, 2))
}

/// Reads the big endian 32 bit integer starting at `offset`.
pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32, ParseError> {
    let mut parser = Parser::from_ref(buf);
    parser
        .seek(offset)
        .and_then(|_| parser.parse_u32_be())
        .map_err(|_| ParseError::too_short(offset, 4))
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// The parser is a cursor over the complete message. On success, it is
/// left positioned right behind the value. If parsing fails, the position
/// of the parser is undefined.
pub trait Parse: Sized {
    /// Extracts a value from the beginning of `parser`.
    fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError>;
}

macro_rules! parse_be_int {
    ( $type:ident, $read:ident ) => {
        impl Parse for $type {
            fn parse<Octs: AsRef<[u8]> + ?Sized>(
                parser: &mut Parser<'_, Octs>,
            ) -> Result<Self, ParseError> {
                let pos = parser.pos();
                let width = core::mem::size_of::<$type>();

                // Advancing first makes sure we stay within the limits of
                // the parser and not just those of the underlying octets.
                parser
                    .advance(width)
                    .map_err(|_| ParseError::too_short(pos, width))?;
                $read(parser.octets_ref().as_ref(), pos)
            }
        }
    };
}

parse_be_int!(u8, read_u8);
parse_be_int!(u16, read_u16_be);
parse_be_int!(u32, read_u32_be);

//------------ Compose -------------------------------------------------------

/// A type that can append its wire format to an octets builder.
pub trait Compose {
    /// The length of the wire format if it is fixed.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

//============ Error Types ===================================================

//------------ ErrorKind -----------------------------------------------------

/// The category of a parse error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// There weren’t enough octets left for a fixed-size field.
    TooShort {
        /// The number of octets the field needed.
        width: usize,
    },

    /// A variable-length field would extend beyond the end of the message.
    OutOfBounds {
        /// The number of octets the field needed.
        width: usize,
    },

    /// A field has a value outside its permitted range.
    InvalidValue,

    /// A label contains a disallowed octet or misplaced hyphens.
    InvalidLabelSyntax,

    /// Two or more fields contradict each other.
    InconsistentFields,

    /// A domain name contains more compression pointers than allowed.
    RecursivePointer,

    /// The header’s section counts disagree with the message content.
    CountMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ErrorKind::TooShort { .. } => "too short",
            ErrorKind::OutOfBounds { .. } => "out of bounds",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::InvalidLabelSyntax => "invalid label syntax",
            ErrorKind::InconsistentFields => "inconsistent fields",
            ErrorKind::RecursivePointer => "recursive pointer",
            ErrorKind::CountMismatch => "count mismatch",
        })
    }
}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
///
/// The error knows what went wrong, where in the message it went wrong,
/// and carries a static string with a more precise description of the
/// problem for diagnostics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    msg: &'static str,
}

impl ParseError {
    /// Creates a new error.
    pub const fn new(
        kind: ErrorKind,
        offset: usize,
        msg: &'static str,
    ) -> Self {
        ParseError { kind, offset, msg }
    }

    /// Creates an error for a fixed-size field that didn’t fit.
    pub const fn too_short(offset: usize, width: usize) -> Self {
        Self::new(ErrorKind::TooShort { width }, offset, "short input")
    }

    /// Creates an error for variable-length data that didn’t fit.
    pub const fn out_of_bounds(offset: usize, width: usize) -> Self {
        Self::new(
            ErrorKind::OutOfBounds { width },
            offset,
            "data beyond end of message",
        )
    }

    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the offset into the message where the error occurred.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a description of the error.
    pub fn msg(&self) -> &'static str {
        self.msg
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::TooShort { width }
            | ErrorKind::OutOfBounds { width } => write!(
                f,
                "{}: {} octets needed at offset {}",
                self.msg, width, self.offset
            ),
            _ => write!(f, "{} at offset {}", self.msg, self.offset),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The target refused to take more data.
    ShortBuf,

    /// A section holds more items than its 16 bit count can express.
    Counts,

    /// The value can’t be composed by this crate.
    Unsupported(&'static str),
}

impl<T: Into<ShortBuf>> From<T> for ComposeError {
    fn from(_: T) -> Self {
        ComposeError::ShortBuf
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::ShortBuf => f.write_str("buffer size exceeded"),
            ComposeError::Counts => f.write_str("too many items in section"),
            ComposeError::Unsupported(msg) => {
                write!(f, "not supported: {}", msg)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComposeError {}

//============ Testing =======================================================
