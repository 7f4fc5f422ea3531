//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::{ErrorKind, ParseError};
use core::str::FromStr;
use core::{cmp, fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Label ---------------------------------------------------------

/// The content of a domain name label.
///
/// Labels consist of up to 63 octets. Only the letters, digits, and the
/// hyphen of the ‘preferred name syntax’ of [RFC 1035] are allowed. A label
/// must neither start nor end with a hyphen. Hyphens in the third and
/// fourth position are reserved for ACE labels of internationalized domain
/// names, i.e., labels starting with `xn--`.
///
/// Since labels are relatively short, this type doesn’t actually allocate any
/// memory but is a 64 octet array.
///
/// [`Label`] differs from an octets slice in how it compares: as labels are to
/// be case-insensitive, all the comparison traits as well as `Hash` are
/// implemented ignoring ASCII-case.
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
//
//  This keeps the label in wire format, so the first octet is the length
//  octet, the remainder is the content.
#[derive(Clone, Copy)]
pub struct Label([u8; 64]);

/// # Creation
///
impl Label {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from its content.
    pub fn try_new(slice: &[u8]) -> Result<Self, LabelError> {
        check_label(slice)?;
        let mut res = [0; 64];
        res[0] = slice.len() as u8;
        res[1..=slice.len()].copy_from_slice(slice);
        Ok(Label(res))
    }
}

/// # Properties
///
impl Label {
    /// Returns a reference to the content of the label.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0[1..=usize::from(self.0[0])]
    }

    /// Returns a slice that is the wire-representation of the label.
    #[must_use]
    pub fn as_wire_slice(&self) -> &[u8] {
        &self.0[..=usize::from(self.0[0])]
    }

    /// Returns the length of the wire format including the length octet.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        u16::from(self.0[0]) + 1
    }

    /// Returns whether this is the ACE form of an internationalized label.
    #[must_use]
    pub fn is_ace(&self) -> bool {
        is_ace(self.as_slice())
    }

    /// Appends the wire format of the label to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_wire_slice())
    }
}

/// Returns whether a label’s content starts with the ACE prefix.
fn is_ace(slice: &[u8]) -> bool {
    slice.get(..4).map_or(false, |p| p.eq_ignore_ascii_case(b"xn--"))
}

/// Checks that `slice` is acceptable as the content of a label.
fn check_label(slice: &[u8]) -> Result<(), LabelError> {
    let (first, last) = match (slice.first(), slice.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(LabelError::Empty),
    };
    if slice.len() > Label::MAX_LEN {
        return Err(LabelError::Long);
    }
    if !slice.iter().all(|ch| ch.is_ascii_alphanumeric() || *ch == b'-') {
        return Err(LabelError::BadSymbol);
    }
    if first == b'-' || last == b'-' {
        return Err(LabelError::BadHyphen);
    }
    if slice.get(2..4) == Some(&b"--"[..]) && !is_ace(slice) {
        return Err(LabelError::BadHyphen);
    }
    Ok(())
}

//--- FromStr

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s.as_bytes())
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq and Eq

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl Eq for Label {}

//--- PartialOrd and Ord

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    /// Labels are ordered like octet strings except that the case of
    /// ASCII letters is ignored.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice()
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.as_slice().iter().map(u8::to_ascii_lowercase))
    }
}

//--- Hash

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Include the length in the hash so we can simply hash over the
        // labels when building a name’s hash.
        self.0[0].hash(state);
        for c in self.as_slice() {
            c.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // All octets are ASCII letters, digits, or hyphens.
        for &ch in self.as_slice() {
            write!(f, "{}", ch as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Label {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Label {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        crate::base::serde::deserialize_from_str(deserializer)
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label in wire format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// A normal label with its size in octets.
    ///
    /// A size of zero marks the root label ending the name.
    Normal(usize),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Parses the label type at the current position of `parser`.
    ///
    /// Running out of data is an out-of-bounds error since the length
    /// octet belongs to a variable-length field. Label types `0b01` and
    /// `0b10` were never defined for RFC 1035 and are rejected.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let pos = parser.pos();
        let ltype = parser
            .parse_u8()
            .map_err(|_| ParseError::out_of_bounds(pos, 1))?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = parser
                    .parse_u8()
                    .map_err(|_| ParseError::out_of_bounds(pos, 2))?;
                let res =
                    usize::from(res) | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::new(
                ErrorKind::InvalidValue,
                pos,
                "invalid label length",
            )),
        }
    }
}

//------------ LabelError ----------------------------------------------------

/// The content of a label was not acceptable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// The label was empty.
    Empty,

    /// The label was longer than 63 octets.
    Long,

    /// The label contained something other than letters, digits, or hyphens.
    BadSymbol,

    /// The label started or ended with a hyphen or had hyphens in third and
    /// fourth position without being an ACE label.
    BadHyphen,
}

impl LabelError {
    /// Converts the error into a parse error for a label starting at `pos`.
    pub fn at(self, pos: usize) -> ParseError {
        let kind = match self {
            LabelError::Empty | LabelError::Long => ErrorKind::InvalidValue,
            LabelError::BadSymbol | LabelError::BadHyphen => {
                ErrorKind::InvalidLabelSyntax
            }
        };
        ParseError::new(kind, pos, self.as_str())
    }

    fn as_str(self) -> &'static str {
        match self {
            LabelError::Empty => "empty label",
            LabelError::Long => "label exceeds 63 octets",
            LabelError::BadSymbol => "illegal character in label",
            LabelError::BadHyphen => "misplaced hyphen in label",
        }
    }
}

//--- Display and Error

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_new() {
        let label = Label::try_new(b"example").unwrap();
        assert_eq!(label.as_slice(), b"example");
        assert_eq!(label.as_wire_slice(), b"\x07example");
        assert_eq!(label.compose_len(), 8);

        assert!(Label::try_new(b"a").is_ok());
        assert!(Label::try_new(b"0-9").is_ok());
        assert!(Label::try_new(&[b'a'; 63]).is_ok());
        assert_eq!(Label::try_new(b""), Err(LabelError::Empty));
        assert_eq!(Label::try_new(&[b'a'; 64]), Err(LabelError::Long));
        assert_eq!(Label::try_new(b"a_b"), Err(LabelError::BadSymbol));
        assert_eq!(Label::try_new(b"a.b"), Err(LabelError::BadSymbol));
        assert_eq!(Label::try_new(b"\xc3\xa4"), Err(LabelError::BadSymbol));
        assert_eq!(Label::try_new(b"-ab"), Err(LabelError::BadHyphen));
        assert_eq!(Label::try_new(b"ab-"), Err(LabelError::BadHyphen));
    }

    #[test]
    fn ace() {
        assert!(Label::try_new(b"xn--bcher-kva").unwrap().is_ace());
        assert!(Label::try_new(b"XN--bcher-kva").unwrap().is_ace());
        assert!(!Label::try_new(b"a-b--c").unwrap().is_ace());
        assert_eq!(Label::try_new(b"ab--cd"), Err(LabelError::BadHyphen));
        assert_eq!(Label::try_new(b"xy--cd"), Err(LabelError::BadHyphen));
        assert!(Label::try_new(b"abc--d").is_ok());
    }

    #[test]
    #[cfg(feature = "std")]
    fn eq_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash(label: &Label) -> u64 {
            let mut hasher = DefaultHasher::new();
            label.hash(&mut hasher);
            hasher.finish()
        }

        let lower = Label::from_str("example").unwrap();
        let upper = Label::from_str("ExAmPlE").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(hash(&lower), hash(&upper));
        assert_ne!(lower, Label::from_str("exampl").unwrap());
        assert!(
            Label::from_str("a").unwrap() < Label::from_str("B").unwrap()
        );
    }

    #[test]
    fn label_type() {
        let mut parser = Parser::from_ref(&b"\x03\xc0\x0c\x40\xc1"[..]);
        assert_eq!(LabelType::parse(&mut parser), Ok(LabelType::Normal(3)));
        assert_eq!(
            LabelType::parse(&mut parser),
            Ok(LabelType::Compressed(12))
        );
        assert_eq!(
            LabelType::parse(&mut parser).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            LabelType::parse(&mut parser).unwrap_err(),
            ParseError::out_of_bounds(4, 2)
        );
    }

    #[test]
    fn error_kinds() {
        assert_eq!(LabelError::Long.at(3).kind(), ErrorKind::InvalidValue);
        assert_eq!(
            LabelError::BadHyphen.at(3).kind(),
            ErrorKind::InvalidLabelSyntax
        );
        assert_eq!(LabelError::BadSymbol.at(3).offset(), 3);
    }
}
