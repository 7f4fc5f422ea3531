//! A single question in a DNS message.
//!
//! This module defines the type [`Question`] which represents an entry in
//! the question section of a DNS message.

use super::config::ParseConfig;
use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{ErrorKind, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// The record type has to be one of the types defined in RFC 1035, i.e.,
/// A through TXT, or one of the query types AXFR, MAILB, MAILA, and ANY.
/// The class has to be IN, CH, HS, or ANY. Values violating these rules
/// can’t be created.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn try_new(
        qname: Name,
        qtype: Rtype,
        qclass: Class,
    ) -> Result<Self, QuestionError> {
        if !qtype.is_valid_qtype() {
            return Err(QuestionError::Qtype);
        }
        if !qclass.is_valid_qclass() {
            return Err(QuestionError::Qclass);
        }
        Ok(Question {
            qname,
            qtype,
            qclass,
        })
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: Name, qtype: Rtype) -> Result<Self, QuestionError> {
        Self::try_new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Parses a question at the current position of `parser`.
    ///
    /// The name may be compressed. Afterwards the parser is positioned
    /// right after the QCLASS field.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let qname = Name::parse(parser, config)?;
        let pos = parser.pos();
        let qtype = Rtype::parse(parser)?;
        if !qtype.is_valid_qtype() {
            return Err(ParseError::new(
                ErrorKind::InvalidValue,
                pos,
                "invalid QTYPE",
            ));
        }
        let pos = parser.pos();
        let qclass = Class::parse(parser)?;
        if !qclass.is_valid_qclass() {
            return Err(ParseError::new(
                ErrorKind::InvalidValue,
                pos,
                "invalid QCLASS",
            ));
        }
        Ok(Question {
            qname,
            qtype,
            qclass,
        })
    }

    /// Returns the length of the uncompressed wire format.
    pub fn compose_len(&self) -> u16 {
        self.qname.compose_len() + Rtype::COMPOSE_LEN + Class::COMPOSE_LEN
    }

    /// Appends the wire format of the question to `target`.
    ///
    /// The name is never compressed.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//------------ QuestionError -------------------------------------------------

/// A question could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionError {
    /// The record type can’t be used in a question.
    Qtype,

    /// The class can’t be used in a question.
    Qclass,
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            QuestionError::Qtype => "invalid QTYPE",
            QuestionError::Qclass => "invalid QCLASS",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuestionError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;
    use core::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn parse(buf: &[u8]) -> Result<(Question, usize), ParseError> {
        let mut parser = Parser::from_ref(buf);
        let question = Question::parse(&mut parser, &ParseConfig::default())?;
        Ok((question, parser.pos()))
    }

    #[test]
    fn try_new() {
        let q = Question::new_in(name("example.com"), Rtype::MX).unwrap();
        assert_eq!(q.qname(), &name("example.com"));
        assert_eq!(q.qtype(), Rtype::MX);
        assert_eq!(q.qclass(), Class::IN);

        assert_eq!(
            Question::new_in(Name::root(), Rtype::AAAA),
            Err(QuestionError::Qtype)
        );
        assert_eq!(
            Question::try_new(Name::root(), Rtype::A, Class::CS),
            Err(QuestionError::Qclass)
        );
        assert!(
            Question::try_new(Name::root(), Rtype::ANY, Class::ANY).is_ok()
        );
    }

    #[test]
    fn parse_and_compose() {
        let wire = b"\x07example\x03com\x00\x00\x01\x00\x01";
        let (q, len) = parse(wire).unwrap();
        assert_eq!(len, 17);
        assert_eq!(q.qname(), &name("example.com"));
        assert_eq!(q.qtype(), Rtype::A);
        assert_eq!(q.qclass(), Class::IN);

        let mut buf = Vec::new();
        q.compose(&mut buf).unwrap();
        assert_eq!(buf, wire);
        assert_eq!(q.compose_len(), 17);
    }

    #[test]
    fn parse_bad_fields() {
        let err = parse(b"\x00\x00\x1c\x00\x01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.offset(), 1);

        let err = parse(b"\x00\x00\xfc\x00\x02").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.offset(), 3);

        assert_eq!(
            parse(b"\x00\x00\x01\x00").unwrap_err(),
            ParseError::too_short(3, 2)
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        let q = Question::new_in(name("example.com"), Rtype::A).unwrap();
        assert_eq!(format!("{}", q), "example.com.\tIN\tA");
    }
}
