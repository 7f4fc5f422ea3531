//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! The header has been split into two separate types: [`Header`] contains
//! the message ID, flags, opcode, and response code at the beginning and
//! [`HeaderCounts`] contains the section counts. The [`HeaderSection`] type
//! wraps both of them into a single type representing all twelve octets.
//!
//! A [`Header`] can only be created with values that this crate accepts
//! when parsing, so every header that exists can be composed and parsed
//! again without change.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{read_u16_be, read_u8, Compose, ErrorKind, ParseError};
use core::{fmt, str::FromStr};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Header --------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags. It
/// keeps those four octets in wire representation, i.e., in network byte
/// order. The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// Values are immutable. They are created either by parsing a message or
/// through [`try_new`][Self::try_new] which checks that the opcode and
/// response code are among those defined in [RFC 1035], that a query
/// doesn’t claim to be an authoritative answer, and leaves the three
/// Z bits zero.
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Header {
    /// The actual header in its wire format representation.
    ///
    /// This means that the ID field is in big endian.
    inner: [u8; 4],
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header from its fields.
    pub fn try_new(
        id: u16,
        flags: Flags,
        opcode: Opcode,
        rcode: Rcode,
    ) -> Result<Self, HeaderError> {
        let mut res = Header::default();
        res.set_id(id);
        res.set_flags(flags);
        res.set_opcode(opcode);
        res.set_rcode(rcode);
        res.check()?;
        Ok(res)
    }

    /// Creates the header for a standard query with the given ID.
    ///
    /// The query has the RD bit set, which is what a stub resolver would
    /// normally want.
    pub fn query(id: u16) -> Self {
        let mut res = Header::default();
        res.set_id(id);
        res.set_bit(2, 0, true);
        res
    }

    /// Creates the header for a standard query with a random ID.
    ///
    /// When sending a query, the ID should be random to avoid spoofing
    /// through guessing the message ID.
    #[cfg(feature = "rand")]
    pub fn random_query() -> Self {
        Self::query(::rand::random())
    }

    /// Creates a header from its wire representation.
    ///
    /// The four octets are checked in the same order a message is checked
    /// when it is parsed.
    pub fn from_array(inner: [u8; 4]) -> Result<Self, HeaderError> {
        let res = Header { inner };
        res.check()?;
        Ok(res)
    }

    /// Returns a reference to the underlying octets slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    fn check(self) -> Result<(), HeaderError> {
        if !self.opcode().is_supported() {
            Err(HeaderError::Opcode)
        } else if !self.qr() && self.aa() {
            Err(HeaderError::AaInQuery)
        } else if self.z() != 0 {
            Err(HeaderError::Z)
        } else if !self.rcode().is_supported() {
            Err(HeaderError::Rcode)
        } else {
            Ok(())
        }
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub fn id(self) -> u16 {
        u16::from_be_bytes([self.inner[0], self.inner[1]])
    }

    fn set_id(&mut self, value: u16) {
        self.inner[..2].copy_from_slice(&value.to_be_bytes())
    }

    /// Returns whether the [QR](Flags::qr) bit is set.
    pub fn qr(self) -> bool {
        self.get_bit(2, 7)
    }

    /// Returns the value of the Opcode field.
    ///
    /// This field specifies the kind of query a message contains. See
    /// the [`Opcode`] type for more information on the possible values and
    /// their meaning. Normal queries have the variant [`Opcode::QUERY`]
    /// which is also the default value when creating a new header.
    pub fn opcode(self) -> Opcode {
        Opcode::from_int((self.inner[2] >> 3) & 0x0F)
    }

    fn set_opcode(&mut self, opcode: Opcode) {
        self.inner[2] = self.inner[2] & 0x87 | (opcode.to_int() & 0x0F) << 3;
    }

    /// Returns all flags contained in the header.
    ///
    /// This is a virtual field composed of all the flag bits that are
    /// present in the header. The returned [`Flags`] type can be useful
    /// when you’re working with all flags, rather than a single one.
    pub fn flags(self) -> Flags {
        Flags {
            qr: self.qr(),
            aa: self.aa(),
            tc: self.tc(),
            rd: self.rd(),
            ra: self.ra(),
        }
    }

    fn set_flags(&mut self, flags: Flags) {
        self.set_bit(2, 7, flags.qr);
        self.set_bit(2, 2, flags.aa);
        self.set_bit(2, 1, flags.tc);
        self.set_bit(2, 0, flags.rd);
        self.set_bit(3, 7, flags.ra);
    }

    /// Returns whether the [AA](Flags::aa) bit is set.
    pub fn aa(self) -> bool {
        self.get_bit(2, 2)
    }

    /// Returns whether the [TC](Flags::tc) bit is set.
    pub fn tc(self) -> bool {
        self.get_bit(2, 1)
    }

    /// Returns whether the [RD](Flags::rd) bit is set.
    pub fn rd(self) -> bool {
        self.get_bit(2, 0)
    }

    /// Returns whether the [RA](Flags::ra) bit is set.
    pub fn ra(self) -> bool {
        self.get_bit(3, 7)
    }

    /// Returns the three reserved Z bits.
    ///
    /// These bits must be zero in all messages.
    fn z(self) -> u8 {
        (self.inner[3] >> 4) & 0x07
    }

    /// Returns the value of the RCODE field.
    ///
    /// The *response code* is used in a response to indicate what happened
    /// when processing the query. See the [`Rcode`] type for information on
    /// possible values and their meaning.
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.inner[3] & 0x0F)
    }

    fn set_rcode(&mut self, rcode: Rcode) {
        self.inner[3] = self.inner[3] & 0xF0 | (rcode.to_int() & 0x0F);
    }

    //--- Internal helpers

    /// Returns the value of the bit at the given position.
    ///
    /// The argument `offset` gives the byte offset of the underlying bytes
    /// slice and `bit` gives the number of the bit with the most
    /// significant bit being 7.
    fn get_bit(self, offset: usize, bit: usize) -> bool {
        self.inner[offset] & (1 << bit) != 0
    }

    /// Sets or resets the given bit.
    fn set_bit(&mut self, offset: usize, bit: usize, set: bool) {
        if set {
            self.inner[offset] |= 1 << bit
        } else {
            self.inner[offset] &= !(1 << bit)
        }
    }
}

//--- Display

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "opcode: {}, status: {}, id: {}, flags: {}",
            self.opcode(),
            self.rcode(),
            self.id(),
            self.flags()
        )
    }
}

//------------ Flags ---------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This is a utility type that makes it easier to work with flags. It
/// contains the five flags defined in [RFC 1035].
///
/// This type has a text notation and can be created from it as well. Each
/// flags that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name.  If mutliple flags are set, the tokens
/// are separated by space.
///
/// ```
/// use core::str::FromStr;
/// use domain_wire::base::header::Flags;
///
/// let flags = Flags::from_str("QR AA").unwrap();
/// assert!(flags.qr && flags.aa);
/// assert_eq!(format!("{}", flags), "QR AA");
/// ```
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`). In other words, this bit is actually stating whether
    /// the message is *not* a query. So, perhaps it might be good to read ‘QR’
    /// as ‘query response.’
    pub qr: bool,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name, ie., whether this
    /// response is an *authoritative answer.* It must not be set in a query.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available then
    /// fit into the message. This is typically used when employing datagram
    /// transports such as UDP to signal that the answer didn’t fit into a
    /// response and the query should be tried again using a stream transport
    /// such as TCP.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the name
    /// server to try and recursively gather a response if it doesn’t have the
    /// data available locally. The bit’s value is copied into the response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether the
    /// responding name server supports recursion. It has no meaning in a query.
    pub ra: bool,
}

/// # Creation and Conversion
///
impl Flags {
    /// Creates new flags.
    ///
    /// All flags will be unset.
    pub fn new() -> Self {
        Self::default()
    }
}

//--- Display & FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::new();
        for token in s.split(' ') {
            if token.eq_ignore_ascii_case("QR") {
                flags.qr = true
            } else if token.eq_ignore_ascii_case("AA") {
                flags.aa = true
            } else if token.eq_ignore_ascii_case("TC") {
                flags.tc = true
            } else if token.eq_ignore_ascii_case("RD") {
                flags.rd = true
            } else if token.eq_ignore_ascii_case("RA") {
                flags.ra = true
            } else if !token.is_empty() {
                return Err(FlagsFromStrError);
            }
        }
        Ok(flags)
    }
}

//------------ HeaderCounts -------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message. The type contains the sequence of
/// these for values in wire format, i.e., in network byte order.
///
/// The counts are not checked against anything here. When a message is
/// parsed, each count has to match the number of entries actually present
/// in its section.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderCounts {
    /// The actual headers in their wire-format representation.
    ///
    /// Ie., all values are stored big endian.
    inner: [u8; 8],
}

/// # Creation and Conversion
///
impl HeaderCounts {
    /// Creates a new value with all counters set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the raw octets slice of the header counts.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}

/// # Field Access
///
impl HeaderCounts {
    //--- Count fields in regular messages

    /// Returns the value of the QDCOUNT field.
    ///
    /// This field contains the number of questions in the first
    /// section of the message, normally the question section.
    pub fn qdcount(self) -> u16 {
        self.get_u16(0)
    }

    /// Sets the value of the QDCOUNT field.
    pub fn set_qdcount(&mut self, value: u16) {
        self.set_u16(0, value)
    }

    /// Returns the value of the ANCOUNT field.
    ///
    /// This field contains the number of resource records in the second
    /// section of the message, normally the answer section.
    pub fn ancount(self) -> u16 {
        self.get_u16(2)
    }

    /// Sets the value of the ANCOUNT field.
    pub fn set_ancount(&mut self, value: u16) {
        self.set_u16(2, value)
    }

    /// Returns the value of the NSCOUNT field.
    ///
    /// This field contains the number of resource records in the third
    /// section of the message, normally the authority section.
    pub fn nscount(self) -> u16 {
        self.get_u16(4)
    }

    /// Sets the value of the NSCOUNT field.
    pub fn set_nscount(&mut self, value: u16) {
        self.set_u16(4, value)
    }

    /// Returns the value of the ARCOUNT field.
    ///
    /// This field contains the number of resource records in the fourth
    /// section of the message, normally the additional section.
    pub fn arcount(self) -> u16 {
        self.get_u16(6)
    }

    /// Sets the value of the ARCOUNT field.
    pub fn set_arcount(&mut self, value: u16) {
        self.set_u16(6, value)
    }

    //--- Internal helpers

    /// Returns the value of the 16 bit integer starting at a given offset.
    fn get_u16(self, offset: usize) -> u16 {
        u16::from_be_bytes([self.inner[offset], self.inner[offset + 1]])
    }

    /// Sets the value of the 16 bit integer starting at a given offset.
    fn set_u16(&mut self, offset: usize, value: u16) {
        self.inner[offset..offset + 2].copy_from_slice(&value.to_be_bytes())
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
///
/// Consists of a [`Header`] directly followed by a [`HeaderCounts`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

/// # Creation and Conversion
///
impl HeaderSection {
    /// The length of the header section in wire format.
    pub const LEN: usize = 12;

    /// Creates a new header section from its two parts.
    pub fn new(header: Header, counts: HeaderCounts) -> Self {
        HeaderSection { header, counts }
    }

    /// Decodes a header section from an octets slice.
    ///
    /// The slice has to be exactly twelve octets long. The fields are then
    /// checked in order: opcode, the AA bit in queries, the Z bits, and the
    /// response code. The first violation is returned.
    pub fn from_slice(slice: &[u8]) -> Result<Self, ParseError> {
        if slice.len() < Self::LEN {
            return Err(ParseError::too_short(0, Self::LEN));
        }
        if slice.len() > Self::LEN {
            return Err(ParseError::new(
                ErrorKind::InvalidValue,
                Self::LEN,
                "header section must be exactly 12 octets",
            ));
        }
        Self::from_slice_at(slice, 0)
    }

    /// Decodes the header section starting at `start`.
    fn from_slice_at(slice: &[u8], start: usize) -> Result<Self, ParseError> {
        let header = Header::from_array([
            read_u8(slice, start)?,
            read_u8(slice, start + 1)?,
            read_u8(slice, start + 2)?,
            read_u8(slice, start + 3)?,
        ])
        .map_err(|err| err.at(start))?;
        let mut counts = HeaderCounts::new();
        counts.set_qdcount(read_u16_be(slice, start + 4)?);
        counts.set_ancount(read_u16_be(slice, start + 6)?);
        counts.set_nscount(read_u16_be(slice, start + 8)?);
        counts.set_arcount(read_u16_be(slice, start + 10)?);
        Ok(HeaderSection { header, counts })
    }

    /// Returns the wire format of the header section.
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut res = [0u8; 12];
        res[..4].copy_from_slice(self.header.as_slice());
        res[4..].copy_from_slice(self.counts.as_slice());
        res
    }
}

/// # Access to Header and Counts
///
impl HeaderSection {
    /// Returns a reference to the header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a reference to the header counts.
    pub fn counts(&self) -> &HeaderCounts {
        &self.counts
    }

    /// Returns a mutable reference to the header counts.
    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }
}

/// # Parsing and Composing
///
impl HeaderSection {
    /// Parses the header section at the current position of `parser`.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let start = parser.pos();
        parser
            .advance(Self::LEN)
            .map_err(|_| ParseError::too_short(start, Self::LEN))?;
        Self::from_slice_at(parser.octets_ref().as_ref(), start)
    }

    /// Appends the wire format of the header section to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.to_bytes())
    }
}

//--- AsRef

impl AsRef<Header> for HeaderSection {
    fn as_ref(&self) -> &Header {
        &self.header
    }
}

impl AsRef<HeaderCounts> for HeaderSection {
    fn as_ref(&self) -> &HeaderCounts {
        &self.counts
    }
}

//--- Compose

impl Compose for HeaderSection {
    const COMPOSE_LEN: u16 = 12;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        HeaderSection::compose(self, target)
    }
}

//============ Error Types ===================================================

//------------ HeaderError ---------------------------------------------------

/// A header contained values not acceptable in an RFC 1035 message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderError {
    /// The opcode isn’t one of QUERY, IQUERY, or STATUS.
    Opcode,

    /// The AA bit is set in a query.
    AaInQuery,

    /// One of the reserved Z bits is set.
    Z,

    /// The response code is larger than REFUSED.
    Rcode,
}

impl HeaderError {
    /// Converts the error into a parse error for a header at `start`.
    pub fn at(self, start: usize) -> ParseError {
        match self {
            HeaderError::Opcode => ParseError::new(
                ErrorKind::InvalidValue,
                start + 2,
                "unsupported opcode",
            ),
            HeaderError::AaInQuery => ParseError::new(
                ErrorKind::InconsistentFields,
                start + 2,
                "AA bit set in query",
            ),
            HeaderError::Z => ParseError::new(
                ErrorKind::InvalidValue,
                start + 3,
                "reserved Z bits must be zero",
            ),
            HeaderError::Rcode => ParseError::new(
                ErrorKind::InvalidValue,
                start + 3,
                "unsupported response code",
            ),
        }
    }
}

impl From<HeaderError> for ParseError {
    fn from(err: HeaderError) -> Self {
        err.at(0)
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HeaderError::Opcode => "unsupported opcode",
            HeaderError::AaInQuery => "AA bit set in query",
            HeaderError::Z => "reserved Z bits must be zero",
            HeaderError::Rcode => "unsupported response code",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeaderError {}

//------------ FlagsFromStrError --------------------------------------------

/// An error happened when converting string to flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal flags token")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FlagsFromStrError {}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn flags(s: &str) -> Flags {
        Flags::from_str(s).unwrap()
    }

    #[test]
    fn try_new() {
        let h = Header::try_new(
            0x1234,
            flags("QR AA RD RA"),
            Opcode::STATUS,
            Rcode::NXDOMAIN,
        )
        .unwrap();
        assert_eq!(h.id(), 0x1234);
        assert_eq!(h.flags(), flags("QR AA RD RA"));
        assert_eq!(h.opcode(), Opcode::STATUS);
        assert_eq!(h.rcode(), Rcode::NXDOMAIN);
        assert_eq!(h.as_slice(), b"\x12\x34\x95\x83");

        assert_eq!(
            Header::try_new(
                1,
                Flags::new(),
                Opcode::from_int(4),
                Rcode::NOERROR
            ),
            Err(HeaderError::Opcode)
        );
        assert_eq!(
            Header::try_new(1, flags("AA"), Opcode::QUERY, Rcode::NOERROR),
            Err(HeaderError::AaInQuery)
        );
        assert_eq!(
            Header::try_new(
                1,
                flags("QR"),
                Opcode::QUERY,
                Rcode::from_int(6)
            ),
            Err(HeaderError::Rcode)
        );
    }

    #[test]
    fn query() {
        let h = Header::query(12345);
        assert_eq!(h.id(), 12345);
        assert_eq!(h.flags(), flags("RD"));
        assert_eq!(h.opcode(), Opcode::QUERY);
        assert_eq!(h.rcode(), Rcode::NOERROR);
    }

    #[test]
    fn counts() {
        let mut c = HeaderCounts {
            inner: [1, 2, 3, 4, 5, 6, 7, 8],
        };
        assert_eq!(c.qdcount(), 0x0102);
        assert_eq!(c.ancount(), 0x0304);
        assert_eq!(c.nscount(), 0x0506);
        assert_eq!(c.arcount(), 0x0708);
        c.set_qdcount(0x0807);
        c.set_ancount(0x0605);
        c.set_nscount(0x0403);
        c.set_arcount(0x0201);
        assert_eq!(c.inner, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn from_slice() {
        let section = HeaderSection::from_slice(
            b"\x30\x39\x01\x00\x00\x01\x00\x02\x00\x03\x00\x04",
        )
        .unwrap();
        assert_eq!(section.header().id(), 12345);
        assert!(!section.header().qr());
        assert!(section.header().rd());
        assert_eq!(section.counts().qdcount(), 1);
        assert_eq!(section.counts().ancount(), 2);
        assert_eq!(section.counts().nscount(), 3);
        assert_eq!(section.counts().arcount(), 4);
        assert_eq!(
            &section.to_bytes(),
            b"\x30\x39\x01\x00\x00\x01\x00\x02\x00\x03\x00\x04"
        );
    }

    #[test]
    fn from_slice_length() {
        assert_eq!(
            HeaderSection::from_slice(b"\x30\x39\x01").unwrap_err().kind(),
            ErrorKind::TooShort { width: 12 }
        );
        assert_eq!(
            HeaderSection::from_slice(&[0u8; 13]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn validation_order() {
        // Opcode 3 and AA in a query and Z and rcode 6: opcode wins.
        let err = HeaderSection::from_slice(
            b"\0\0\x1c\x76\0\0\0\0\0\0\0\0",
        )
        .unwrap_err();
        assert_eq!(err.msg(), "unsupported opcode");
        assert_eq!(err.offset(), 2);

        // AA in a query and Z and rcode 6.
        let err = HeaderSection::from_slice(
            b"\0\0\x04\x76\0\0\0\0\0\0\0\0",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InconsistentFields);

        // Z and rcode 6.
        let err = HeaderSection::from_slice(
            b"\0\0\x80\x76\0\0\0\0\0\0\0\0",
        )
        .unwrap_err();
        assert_eq!(err.msg(), "reserved Z bits must be zero");
        assert_eq!(err.offset(), 3);

        // Only rcode 6.
        let err = HeaderSection::from_slice(
            b"\0\0\x80\x06\0\0\0\0\0\0\0\0",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.msg(), "unsupported response code");
    }

    #[test]
    fn parse_at_offset() {
        let buf = b"\xff\xff\x30\x39\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00";
        let mut parser = Parser::from_ref(&buf[..]);
        parser.advance(2).unwrap();
        let section = HeaderSection::parse(&mut parser).unwrap();
        assert_eq!(section.header().id(), 12345);
        assert_eq!(parser.pos(), 14);

        let mut parser = Parser::from_ref(&buf[..]);
        parser.advance(3).unwrap();
        assert_eq!(
            HeaderSection::parse(&mut parser),
            Err(ParseError::too_short(3, 12))
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn flags_display() {
        let f = Flags::new();
        assert_eq!(format!("{}", f), "");
        let f = Flags {
            qr: true,
            aa: true,
            tc: true,
            rd: true,
            ra: true,
        };
        assert_eq!(format!("{}", f), "QR AA TC RD RA");
        let mut f = Flags::new();
        f.rd = true;
        f.ra = true;
        assert_eq!(format!("{}", f), "RD RA");
    }

    #[test]
    fn flags_from_str() {
        assert_eq!(flags(""), Flags::new());
        assert_eq!(
            flags("tC Aa rd"),
            Flags {
                aa: true,
                tc: true,
                rd: true,
                ..Default::default()
            }
        );
        assert!(Flags::from_str("AD").is_err());
        assert!(Flags::from_str("XXXX").is_err());
    }
}
