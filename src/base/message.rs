//! Accessing and assembling complete DNS messages.
//!
//! This module defines the [`Message`] type. It holds the header section
//! and the decoded content of all four sections of a message. A message is
//! either decoded from its wire format via [`Message::from_slice`] (or
//! [`Message::from_bytes`] with the `bytes` feature) or assembled from its
//! parts via [`Message::from_parts`].
//!
//! Decoding is all or nothing. The header’s four counts determine how many
//! questions and records are read from the message. If any of them fails
//! to decode or if the message ends too early, decoding fails as a whole.
//! Decoded messages therefore always have exactly as many items in each
//! section as the header announces.

use super::config::ParseConfig;
use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Rtype;
use super::question::Question;
use super::record::ResourceRecord;
use super::wire::{ComposeError, ErrorKind, ParseError};
use alloc::vec::Vec;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use tracing::{debug, trace};

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The type is generic over the octets sequence holding the record data.
/// A message decoded from an octets slice keeps sub-slices of that slice,
/// so the message can’t outlive it. A message decoded from a
/// [`Bytes`][bytes::Bytes] value keeps cheap clones instead.
///
/// Domain names, on the other hand, are always decompressed while decoding
/// and don’t refer to the original message anymore.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message<Octs> {
    header: HeaderSection,
    question: Vec<Question>,
    answer: Vec<ResourceRecord<Octs>>,
    authority: Vec<ResourceRecord<Octs>>,
    additional: Vec<ResourceRecord<Octs>>,
}

/// # Creation and Conversion
///
impl<'a> Message<&'a [u8]> {
    /// Decodes a message from an octets slice.
    ///
    /// The slice has to contain exactly one complete message.
    pub fn from_slice(slice: &'a [u8]) -> Result<Self, ParseError> {
        Self::from_slice_with_config(slice, &ParseConfig::default())
    }

    /// Decodes a message from an octets slice using the given config.
    pub fn from_slice_with_config(
        slice: &'a [u8],
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        Self::assemble(
            &mut Parser::from_ref(slice),
            config,
            ResourceRecord::parse,
        )
    }
}

#[cfg(feature = "bytes")]
impl Message<bytes::Bytes> {
    /// Decodes a message from a bytes value.
    ///
    /// The record data of all records will be slices of `bytes`.
    pub fn from_bytes(bytes: &bytes::Bytes) -> Result<Self, ParseError> {
        Self::from_bytes_with_config(bytes, &ParseConfig::default())
    }

    /// Decodes a message from a bytes value using the given config.
    pub fn from_bytes_with_config(
        bytes: &bytes::Bytes,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        Self::assemble(
            &mut Parser::from_ref(bytes),
            config,
            ResourceRecord::parse_octets,
        )
    }
}

impl<Octs: AsRef<[u8]>> Message<Octs> {
    /// Creates a message from a header and the content of all sections.
    ///
    /// The counts of the header section are taken from the length of the
    /// sections. If any section is too long to be counted, returns
    /// [`ComposeError::Counts`].
    pub fn from_parts(
        header: Header,
        question: Vec<Question>,
        answer: Vec<ResourceRecord<Octs>>,
        authority: Vec<ResourceRecord<Octs>>,
        additional: Vec<ResourceRecord<Octs>>,
    ) -> Result<Self, ComposeError> {
        fn count(len: usize) -> Result<u16, ComposeError> {
            u16::try_from(len).map_err(|_| ComposeError::Counts)
        }

        let mut counts = HeaderCounts::new();
        counts.set_qdcount(count(question.len())?);
        counts.set_ancount(count(answer.len())?);
        counts.set_nscount(count(authority.len())?);
        counts.set_arcount(count(additional.len())?);
        Ok(Message {
            header: HeaderSection::new(header, counts),
            question,
            answer,
            authority,
            additional,
        })
    }
}

impl<Octs> Message<Octs> {
    /// Trades the message for the content of its four sections.
    #[allow(clippy::type_complexity)]
    pub fn into_sections(
        self,
    ) -> (
        Vec<Question>,
        Vec<ResourceRecord<Octs>>,
        Vec<ResourceRecord<Octs>>,
        Vec<ResourceRecord<Octs>>,
    ) {
        (self.question, self.answer, self.authority, self.additional)
    }
}

/// # Decoding
///
impl<Octs> Message<Octs> {
    /// Assembles a message from the start of `parser`.
    ///
    /// Records are decoded via `parse_record`, which decides what octets
    /// sequence the record data ends up in.
    fn assemble<'a, Src, F>(
        parser: &mut Parser<'a, Src>,
        config: &ParseConfig,
        mut parse_record: F,
    ) -> Result<Self, ParseError>
    where
        Src: AsRef<[u8]> + ?Sized,
        F: FnMut(
            &mut Parser<'a, Src>,
            &ParseConfig,
        ) -> Result<ResourceRecord<Octs>, ParseError>,
    {
        let res = Self::assemble_sections(parser, config, &mut parse_record);
        if let Err(ref err) = res {
            debug!(
                kind = %err.kind(),
                offset = err.offset(),
                msg = err.msg(),
                "rejecting malformed message"
            );
        }
        res
    }

    fn assemble_sections<'a, Src, F>(
        parser: &mut Parser<'a, Src>,
        config: &ParseConfig,
        parse_record: &mut F,
    ) -> Result<Self, ParseError>
    where
        Src: AsRef<[u8]> + ?Sized,
        F: FnMut(
            &mut Parser<'a, Src>,
            &ParseConfig,
        ) -> Result<ResourceRecord<Octs>, ParseError>,
    {
        let header = HeaderSection::parse(parser)?;
        let counts = *header.counts();

        let mut question = Vec::new();
        for _ in 0..counts.qdcount() {
            check_more(parser, "question section")?;
            question.push(Question::parse(parser, config)?);
        }
        trace!(
            count = question.len(),
            end = parser.pos(),
            "decoded question section"
        );

        let answer = parse_section(
            parser,
            config,
            counts,
            Section::Answer,
            parse_record,
        )?;
        let authority = parse_section(
            parser,
            config,
            counts,
            Section::Authority,
            parse_record,
        )?;
        let additional = parse_section(
            parser,
            config,
            counts,
            Section::Additional,
            parse_record,
        )?;

        if parser.remaining() > 0 && !config.allow_trailing_data() {
            return Err(ParseError::new(
                ErrorKind::CountMismatch,
                parser.pos(),
                "trailing data after last record",
            ));
        }

        Ok(Message {
            header,
            question,
            answer,
            authority,
            additional,
        })
    }
}

/// Parses `count` records for `section`.
fn parse_section<'a, Src, Octs, F>(
    parser: &mut Parser<'a, Src>,
    config: &ParseConfig,
    counts: HeaderCounts,
    section: Section,
    parse_record: &mut F,
) -> Result<Vec<ResourceRecord<Octs>>, ParseError>
where
    Src: AsRef<[u8]> + ?Sized,
    F: FnMut(
        &mut Parser<'a, Src>,
        &ParseConfig,
    ) -> Result<ResourceRecord<Octs>, ParseError>,
{
    // The count is attacker controlled, so don’t preallocate.
    let mut res = Vec::new();
    for _ in 0..section.count(counts) {
        check_more(parser, section.as_str())?;
        res.push(parse_record(parser, config)?);
    }
    trace!(
        section = section.as_str(),
        count = res.len(),
        end = parser.pos(),
        "decoded record section"
    );
    Ok(res)
}

/// Checks that the parser hasn’t reached the end of the message yet.
fn check_more<Src: AsRef<[u8]> + ?Sized>(
    parser: &Parser<'_, Src>,
    section: &'static str,
) -> Result<(), ParseError> {
    if parser.remaining() == 0 {
        debug!(section, "message ended before the header count was reached");
        Err(ParseError::new(
            ErrorKind::CountMismatch,
            parser.pos(),
            "header count exceeds message content",
        ))
    } else {
        Ok(())
    }
}

/// # Header and Section Access
///
impl<Octs> Message<Octs> {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        *self.header.header()
    }

    /// Returns the header counts of the message.
    pub fn header_counts(&self) -> HeaderCounts {
        *self.header.counts()
    }

    /// Returns the entire header section.
    pub fn header_section(&self) -> HeaderSection {
        self.header
    }

    /// Returns the question section.
    pub fn question(&self) -> &[Question] {
        &self.question
    }

    /// Returns the answer section.
    pub fn answer(&self) -> &[ResourceRecord<Octs>] {
        &self.answer
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[ResourceRecord<Octs>] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[ResourceRecord<Octs>] {
        &self.additional
    }

    /// Returns the given record section.
    pub fn section(&self, section: Section) -> &[ResourceRecord<Octs>] {
        match section {
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    /// Returns an iterator over the records of all three record sections.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord<Octs>> {
        self.answer
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}

/// # Helpers for Common Tasks
///
impl<Octs> Message<Octs> {
    /// Returns whether this is the answer to some other message.
    ///
    /// The method checks whether the ID fields of the headers are the same,
    /// whether the QR flag is set in this message, and whether the questions
    /// are the same.
    pub fn is_answer<Other>(&self, query: &Message<Other>) -> bool {
        self.header().qr()
            && self.header().id() == query.header().id()
            && self.question == query.question
    }

    /// Returns the first question, if there is any.
    pub fn first_question(&self) -> Option<&Question> {
        self.question.first()
    }

    /// Returns the query type of the first question, if any.
    pub fn qtype(&self) -> Option<Rtype> {
        self.first_question().map(Question::qtype)
    }
}

/// # Composing
///
impl<Octs: AsRef<[u8]>> Message<Octs> {
    /// Returns the length of the uncompressed wire format.
    pub fn compose_len(&self) -> usize {
        HeaderSection::LEN
            + self
                .question
                .iter()
                .map(|q| usize::from(q.compose_len()))
                .sum::<usize>()
            + self.records().map(ResourceRecord::compose_len).sum::<usize>()
    }

    /// Appends the wire format of the message to `target`.
    ///
    /// Domain names are not compressed. Since record data is opaque, this
    /// fails for records whose data may contain compressed names. See
    /// [`ResourceRecord::compose`] for details. In this case, part of the
    /// message may already have been appended to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.header.compose(target)?;
        for question in &self.question {
            question.compose(target)?;
        }
        for record in self.records() {
            record.compose(target)?;
        }
        Ok(())
    }

    /// Returns the wire format of the message in a new vec.
    pub fn to_vec(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.compose_len());
        self.compose(&mut res)?;
        Ok(res)
    }
}

//--- Display

impl<Octs: AsRef<[u8]>> fmt::Display for Message<Octs> {
    /// Formats the message similar to the output of `dig`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = self.header();
        let counts = self.header_counts();
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            header.opcode(),
            header.rcode(),
            header.id()
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, \
             ADDITIONAL: {}",
            header.flags(),
            counts.qdcount(),
            counts.ancount(),
            counts.nscount(),
            counts.arcount()
        )?;

        writeln!(f, "\n;; QUESTION SECTION:")?;
        for question in &self.question {
            writeln!(f, ";{}", question)?;
        }

        for section in
            [Section::Answer, Section::Authority, Section::Additional]
        {
            let records = self.section(section);
            if records.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {} SECTION:", section)?;
            for record in records {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}

//------------ Section -------------------------------------------------------

/// Names one of the three record sections of a message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// Returns the correct record count for this section.
    fn count(self, counts: HeaderCounts) -> u16 {
        match self {
            Section::Answer => counts.ancount(),
            Section::Authority => counts.nscount(),
            Section::Additional => counts.arcount(),
        }
    }

    /// Returns the name of the section as it appears in presentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Answer => "ANSWER",
            Section::Authority => "AUTHORITY",
            Section::Additional => "ADDITIONAL",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::name::Name;
    use crate::base::record::Ttl;
    use core::str::FromStr;

    /// A query for example.com A with ID 12345.
    const QUERY: &[u8] = b"\x30\x39\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
        \x07example\x03com\x00\x00\x01\x00\x01";

    /// The answer to `QUERY` with one A record using a pointer.
    const ANSWER: &[u8] = b"\x30\x39\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
        \x07example\x03com\x00\x00\x01\x00\x01\
        \xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\xc0\x00\x02\x01";

    #[test]
    fn decode_query() {
        let msg = Message::from_slice(QUERY).unwrap();
        assert_eq!(msg.header().id(), 12345);
        assert!(!msg.header().qr());
        assert!(msg.header().rd());
        assert_eq!(msg.question().len(), 1);
        let question = msg.first_question().unwrap();
        assert_eq!(question.qname(), &Name::from_str("example.com").unwrap());
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(question.qclass(), Class::IN);
        assert!(msg.answer().is_empty());
        assert_eq!(msg.qtype(), Some(Rtype::A));
    }

    #[test]
    fn decode_answer() {
        let msg = Message::from_slice(ANSWER).unwrap();
        let query = Message::from_slice(QUERY).unwrap();
        assert!(msg.is_answer(&query));
        assert!(!query.is_answer(&msg));
        assert_eq!(msg.answer().len(), 1);
        let record = &msg.section(Section::Answer)[0];
        assert_eq!(record.owner(), msg.question()[0].qname());
        assert_eq!(record.ttl(), Ttl::try_from_secs(3600).unwrap());
        assert_eq!(record.data(), &&b"\xc0\x00\x02\x01"[..]);
        assert_eq!(msg.records().count(), 1);
    }

    #[test]
    fn count_mismatch() {
        // Claim two questions but only have one.
        let mut buf = Vec::from(QUERY);
        buf[5] = 2;
        let err = Message::from_slice(&buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CountMismatch);
        assert_eq!(err.offset(), QUERY.len());

        // Claim an answer that isn’t there.
        let mut buf = Vec::from(QUERY);
        buf[7] = 1;
        let err = Message::from_slice(&buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CountMismatch);
    }

    #[test]
    fn trailing_data() {
        let mut buf = Vec::from(QUERY);
        buf.push(0);
        assert_eq!(
            Message::from_slice(&buf).unwrap(),
            Message::from_slice(QUERY).unwrap()
        );

        let mut config = ParseConfig::default();
        config.set_allow_trailing_data(false);
        let err = Message::from_slice_with_config(&buf, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CountMismatch);
        assert_eq!(err.offset(), QUERY.len());
    }

    #[test]
    fn from_parts_and_compose() {
        let question = Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::A,
        )
        .unwrap();
        let msg = Message::<&[u8]>::from_parts(
            Header::query(12345),
            alloc::vec![question],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(msg.header_counts().qdcount(), 1);
        assert_eq!(msg.to_vec().unwrap(), QUERY);
        assert_eq!(msg.compose_len(), QUERY.len());
    }

    #[test]
    fn compose_decompresses() {
        let msg = Message::from_slice(ANSWER).unwrap();
        let wire = msg.to_vec().unwrap();
        assert_eq!(wire.len(), ANSWER.len() + 11);
        assert_eq!(Message::from_slice(&wire).unwrap(), msg);
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        let msg = Message::from_slice(ANSWER).unwrap();
        assert_eq!(
            format!("{}", msg),
            ";; ->>HEADER<<- opcode: QUERY, rcode: NOERROR, id: 12345\n\
             ;; flags: QR RD RA; QUERY: 1, ANSWER: 1, AUTHORITY: 0, \
             ADDITIONAL: 0\n\
             \n\
             ;; QUESTION SECTION:\n\
             ;example.com.\tIN\tA\n\
             \n\
             ;; ANSWER SECTION:\n\
             example.com. 3600 IN A \\# 4 C0000201\n"
        );
    }

    #[test]
    #[cfg(feature = "bytes")]
    fn from_bytes() {
        let bytes = bytes::Bytes::from_static(ANSWER);
        let msg = Message::from_bytes(&bytes).unwrap();
        assert_eq!(&msg.answer()[0].data()[..], b"\xc0\x00\x02\x01");
        assert_eq!(
            msg.question(),
            Message::from_slice(ANSWER).unwrap().question()
        );
    }
}
