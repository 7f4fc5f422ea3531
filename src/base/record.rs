//! Resource Records.
//!
//! This module defines types related to DNS resource records. The most
//! complete one is [`ResourceRecord`] which contains a complete record for
//! a certain record type. [`RecordHeader`] contains the data from a
//! record’s header, the first couple of octets common to all records.
//! Finally, [`Ttl`] is the time-to-live of a record.
//!
//! The record data is kept as an opaque octets sequence. Since it may
//! contain compressed domain names for some record types, it is only
//! meaningful within the message it was taken from.

use super::config::ParseConfig;
use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ComposeError, ErrorKind, ParseError};
use crate::utils::base16;
use core::fmt;
use core::time::Duration;
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

//------------ ResourceRecord ------------------------------------------------

/// A DNS resource record.
///
/// All resource records have the same basic structure: an owner domain
/// name, a record type, a class, a time-to-live (TTL), and the record data
/// whose length is given by a 16 bit value in the wire format.
///
/// The record data is kept as an octets sequence of type `Octs`. When
/// parsed from an octets slice, this is a sub-slice of the message.
///
/// Records of type A are required to have exactly four octets of record
/// data. Records violating this can’t be created.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResourceRecord<Octs> {
    /// The owner of the record.
    owner: Name,

    /// The record type.
    rtype: Rtype,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: Ttl,

    /// The record data.
    data: Octs,
}

/// # Creation and Element Access
///
impl<Octs: AsRef<[u8]>> ResourceRecord<Octs> {
    /// Creates a new record from its parts.
    pub fn try_new(
        owner: Name,
        rtype: Rtype,
        class: Class,
        ttl: Ttl,
        data: Octs,
    ) -> Result<Self, RecordError> {
        check_data(rtype, data.as_ref().len())?;
        Ok(ResourceRecord {
            owner,
            rtype,
            class,
            ttl,
            data,
        })
    }

    /// Returns a reference to the owner domain name.
    ///
    /// The owner of a record is the domain name that specifies the node in
    /// the DNS tree this record belongs to.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    ///
    /// The class specifies the namespace this record belongs to. The class
    /// IN is used for the Internet and is by far the most common.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &Octs {
        &self.data
    }

    /// Returns the length of the record data.
    pub fn rdlen(&self) -> u16 {
        // The length has been checked when creating the record.
        self.data.as_ref().len() as u16
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> Octs {
        self.data
    }
}

/// Checks that record data of length `len` is acceptable for `rtype`.
fn check_data(rtype: Rtype, len: usize) -> Result<(), RecordError> {
    if len > usize::from(u16::MAX) {
        Err(RecordError::LongData)
    } else if rtype == Rtype::A && len != 4 {
        Err(RecordError::BadAddressLength)
    } else {
        Ok(())
    }
}

/// # Parsing
///
impl<'a> ResourceRecord<&'a [u8]> {
    /// Parses a record from the current position of `parser`.
    ///
    /// The record data will be a sub-slice of the octets underlying the
    /// parser.
    pub fn parse<Src: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'a, Src>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let header = RecordHeader::parse(parser, config)?;
        let pos = parser.pos();
        let len = usize::from(header.rdlen);
        parser.advance(len).map_err(|_| short_data(pos))?;
        let data = parser
            .octets_ref()
            .as_ref()
            .get(pos..pos + len)
            .ok_or_else(|| short_data(pos))?;
        Ok(header.into_record(data))
    }
}

impl<Octs> ResourceRecord<Octs> {
    /// Parses a record taking the record data from the parser’s octets.
    ///
    /// This allows the record data to be of the octets sequence type used
    /// for ranges of the message, e.g. [`Bytes`](bytes::Bytes).
    pub fn parse_octets<'a, Src>(
        parser: &mut Parser<'a, Src>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError>
    where
        Src: Octets<Range<'a> = Octs> + ?Sized,
    {
        let header = RecordHeader::parse(parser, config)?;
        let pos = parser.pos();
        let data = parser
            .parse_octets(header.rdlen.into())
            .map_err(|_| short_data(pos))?;
        Ok(header.into_record(data))
    }
}

fn short_data(pos: usize) -> ParseError {
    ParseError::new(
        ErrorKind::InconsistentFields,
        pos,
        "RDLENGTH exceeds remaining message",
    )
}

/// # Composing
///
impl<Octs: AsRef<[u8]>> ResourceRecord<Octs> {
    /// Returns the length of the uncompressed wire format.
    pub fn compose_len(&self) -> usize {
        usize::from(self.owner.compose_len())
            + usize::from(RecordHeader::FIXED_LEN)
            + self.data.as_ref().len()
    }

    /// Appends the wire format of the record to `target`.
    ///
    /// The owner name is not compressed. Because record data is kept
    /// opaque, records of types whose data may contain compressed domain
    /// names can’t be reproduced outside their original message. Composing
    /// them fails before anything is appended to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if self.rtype.may_embed_names() {
            return Err(ComposeError::Unsupported(
                "record data may contain compressed domain names",
            ));
        }
        self.owner.compose(target)?;
        self.rtype.compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)?;
        target.append_slice(&self.rdlen().to_be_bytes())?;
        target.append_slice(self.data.as_ref())?;
        Ok(())
    }
}

//--- Display

impl<Octs: AsRef<[u8]>> fmt::Display for ResourceRecord<Octs> {
    /// Formats the record with the record data in the generic format.
    ///
    /// This is the `\#` notation for unknown record types defined in
    /// RFC 3597 since record data isn’t interpreted.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} \\# {}",
            self.owner,
            self.ttl.as_secs(),
            self.class,
            self.rtype,
            self.rdlen()
        )?;
        if !self.data.as_ref().is_empty() {
            f.write_str(" ")?;
            base16::display(self.data.as_ref(), f)?;
        }
        Ok(())
    }
}

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// This type encapsulates the common header of a resource record. It
/// consists of the owner, record type, class, TTL, and the length of the
/// record data. It is effectively a helper type for dealing with resource
/// records encoded in a DNS message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    owner: Name,
    rtype: Rtype,
    class: Class,
    ttl: Ttl,
    rdlen: u16,
}

impl RecordHeader {
    /// The length of the header after the owner name.
    pub const FIXED_LEN: u16 = 10;

    /// Parses a record header from the current position of `parser`.
    ///
    /// Besides the values themselves, this checks that the TTL fits into
    /// 31 bits and that an A record announces four octets of data.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let owner = Name::parse(parser, config)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = Ttl::parse(parser)?;
        let pos = parser.pos();
        let rdlen = <u16 as super::wire::Parse>::parse(parser)?;
        if rtype == Rtype::A && rdlen != 4 {
            return Err(ParseError::new(
                ErrorKind::InconsistentFields,
                pos,
                "A record with RDLENGTH other than 4",
            ));
        }
        Ok(RecordHeader {
            owner,
            rtype,
            class,
            ttl,
            rdlen,
        })
    }

    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type of the record.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Returns the data length of the record.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Completes the record with data already checked against the header.
    fn into_record<Octs>(self, data: Octs) -> ResourceRecord<Octs> {
        ResourceRecord {
            owner: self.owner,
            rtype: self.rtype,
            class: self.class,
            ttl: self.ttl,
            data,
        }
    }
}

//------------ Ttl -----------------------------------------------------------

/// The time-to-live of a resource record in seconds.
///
/// RFC 1035 defines the TTL as a 32 bit unsigned value but RFC 2181 limits
/// it to the values from 0 to 2^31 - 1. Values can only be created within
/// this range and parsing a record with a TTL with the most significant bit
/// set fails.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Ttl(u32);

impl Ttl {
    /// A duration of zero time.
    pub const ZERO: Ttl = Ttl(0);

    /// The largest time-to-live allowed.
    pub const MAX: Ttl = Ttl(0x7FFF_FFFF);

    /// The length of a TTL in wire format.
    pub const COMPOSE_LEN: u16 = 4;

    /// Creates a new value from a number of seconds.
    pub const fn try_from_secs(secs: u32) -> Result<Self, TtlError> {
        if secs > Self::MAX.0 {
            Err(TtlError(()))
        } else {
            Ok(Ttl(secs))
        }
    }

    /// Returns the total time to live in seconds.
    #[must_use]
    pub const fn as_secs(self) -> u32 {
        self.0
    }

    /// Converts a `Ttl` into a [`Duration`].
    #[must_use]
    pub const fn into_duration(self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }

    /// Returns true if this `Ttl` spans no time.
    ///
    /// This usually indicates a given record should not be cached.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parses a TTL, rejecting values with the most significant bit set.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let pos = parser.pos();
        let secs = <u32 as super::wire::Parse>::parse(parser)?;
        Self::try_from_secs(secs).map_err(|_| {
            ParseError::new(
                ErrorKind::InvalidValue,
                pos,
                "TTL exceeds 2^31 - 1 seconds",
            )
        })
    }

    /// Appends the wire format of the TTL to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.0.to_be_bytes())
    }
}

//--- TryFrom and From

impl TryFrom<u32> for Ttl {
    type Error = TtlError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Self::try_from_secs(secs)
    }
}

impl From<Ttl> for u32 {
    fn from(ttl: Ttl) -> Self {
        ttl.as_secs()
    }
}

impl From<Ttl> for Duration {
    fn from(ttl: Ttl) -> Self {
        ttl.into_duration()
    }
}

//--- Display

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//============ Error Types ===================================================

//------------ RecordError ---------------------------------------------------

/// A resource record could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordError {
    /// The record data is longer than 65535 octets.
    LongData,

    /// The record data of an A record isn’t four octets long.
    BadAddressLength,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            RecordError::LongData => "record data exceeds 65535 octets",
            RecordError::BadAddressLength => {
                "A record data must be four octets long"
            }
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecordError {}

//------------ TtlError ------------------------------------------------------

/// A TTL value was larger than 2^31 - 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TtlError(());

impl fmt::Display for TtlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TTL exceeds 2^31 - 1 seconds")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TtlError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;
    use core::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn ttl(secs: u32) -> Ttl {
        Ttl::try_from_secs(secs).unwrap()
    }

    fn parse(
        buf: &[u8],
    ) -> Result<(ResourceRecord<&[u8]>, usize), ParseError> {
        let mut parser = Parser::from_ref(buf);
        let record =
            ResourceRecord::parse(&mut parser, &ParseConfig::default())?;
        Ok((record, parser.pos()))
    }

    /// Returns the wire format of a record owned by the root.
    fn wire(rtype: u16, ttl: u32, rdlen: u16, data: &[u8]) -> Vec<u8> {
        let mut res = Vec::from(&b"\x00"[..]);
        res.extend_from_slice(&rtype.to_be_bytes());
        res.extend_from_slice(b"\x00\x01");
        res.extend_from_slice(&ttl.to_be_bytes());
        res.extend_from_slice(&rdlen.to_be_bytes());
        res.extend_from_slice(data);
        res
    }

    #[test]
    fn ttl_limits() {
        assert_eq!(Ttl::try_from_secs(0x7FFF_FFFF), Ok(Ttl::MAX));
        assert!(Ttl::try_from_secs(0x8000_0000).is_err());
        assert_eq!(ttl(120).into_duration(), Duration::from_secs(120));
        assert!(Ttl::ZERO.is_zero());
    }

    #[test]
    fn parse_a_record() {
        let buf = wire(1, 3600, 4, b"\xc0\x00\x02\x01");
        let (record, len) = parse(&buf).unwrap();
        assert_eq!(len, buf.len());
        assert_eq!(record.owner(), &Name::root());
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), ttl(3600));
        assert_eq!(record.rdlen(), 4);
        assert_eq!(record.data(), &&b"\xc0\x00\x02\x01"[..]);
    }

    #[test]
    fn parse_ttl_bound() {
        assert!(parse(&wire(16, 0x7FFF_FFFF, 0, b"")).is_ok());
        let err = parse(&wire(16, 0x8000_0000, 0, b"")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn parse_a_length() {
        // The length is rejected even if the data is there.
        let err = parse(&wire(1, 0, 5, b"\x01\x02\x03\x04\x05")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InconsistentFields);
        assert_eq!(err.offset(), 9);
        assert!(parse(&wire(1, 0, 3, b"\x01\x02\x03")).is_err());
    }

    #[test]
    fn parse_short_data() {
        let err = parse(&wire(16, 0, 6, b"\x05hell")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InconsistentFields);
        assert_eq!(err.offset(), 11);

        let err = parse(&wire(16, 0, 0, b"")[..9]).unwrap_err();
        assert_eq!(err, ParseError::too_short(9, 2));
    }

    #[test]
    fn parse_octets() {
        let buf = wire(16, 60, 3, b"\x02hi");
        let mut parser = Parser::from_ref(buf.as_slice());
        let record: ResourceRecord<&[u8]> =
            ResourceRecord::parse_octets(&mut parser, &ParseConfig::default())
                .unwrap();
        assert_eq!(record.data(), &&b"\x02hi"[..]);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn try_new() {
        assert!(ResourceRecord::try_new(
            name("example.com"),
            Rtype::A,
            Class::IN,
            Ttl::ZERO,
            [192u8, 0, 2, 1],
        )
        .is_ok());
        assert_eq!(
            ResourceRecord::try_new(
                name("example.com"),
                Rtype::A,
                Class::IN,
                Ttl::ZERO,
                [192u8, 0, 2],
            ),
            Err(RecordError::BadAddressLength)
        );
        assert_eq!(
            ResourceRecord::try_new(
                Name::root(),
                Rtype::NULL,
                Class::IN,
                Ttl::ZERO,
                alloc::vec![0u8; 65536],
            ),
            Err(RecordError::LongData)
        );
    }

    #[test]
    fn compose() {
        let buf = wire(16, 60, 3, b"\x02hi");
        let (record, _) = parse(&buf).unwrap();
        let mut target = Vec::new();
        record.compose(&mut target).unwrap();
        assert_eq!(target, buf);
        assert_eq!(record.compose_len(), buf.len());

        let record = ResourceRecord::try_new(
            name("example.com"),
            Rtype::CNAME,
            Class::IN,
            Ttl::ZERO,
            &b"\xc0\x0c"[..],
        )
        .unwrap();
        let mut target = Vec::new();
        assert!(matches!(
            record.compose(&mut target),
            Err(ComposeError::Unsupported(_))
        ));
        assert!(target.is_empty());
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        let record = ResourceRecord::try_new(
            name("example.com"),
            Rtype::A,
            Class::IN,
            ttl(3600),
            [192u8, 0, 2, 1],
        )
        .unwrap();
        assert_eq!(
            format!("{}", record),
            "example.com. 3600 IN A \\# 4 C0000201"
        );

        let record = ResourceRecord::try_new(
            Name::root(),
            Rtype::NULL,
            Class::IN,
            Ttl::ZERO,
            b"",
        )
        .unwrap();
        assert_eq!(format!("{}", record), ". 0 IN NULL \\# 0");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn ttl_ser_de() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        assert_tokens(&ttl(300), &[Token::U32(300)]);
        assert_de_tokens_error::<Ttl>(
            &[Token::U32(0x8000_0000)],
            "TTL exceeds 2^31 - 1 seconds",
        );
    }
}
