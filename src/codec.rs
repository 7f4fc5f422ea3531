//! The codec entry points.
//!
//! These functions decode the parts of a DNS message found at a given
//! offset into a complete message and encode them again. They are thin
//! wrappers around the `parse` and `compose` methods of the types in
//! [`base`][crate::base]. Decoding functions that may follow compression
//! pointers return the number of octets consumed at `offset` alongside the
//! value. This is the number of octets the caller needs to skip to get to
//! whatever follows in the message.
//!
//! Each decoding function has a `_with_config` variant that takes a
//! [`ParseConfig`]. The plain variant uses the default configuration.

use crate::base::config::ParseConfig;
use crate::base::header::HeaderSection;
use crate::base::message::Message;
use crate::base::name::Name;
use crate::base::question::Question;
use crate::base::record::ResourceRecord;
use crate::base::wire::ParseError;
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Header --------------------------------------------------------

/// Decodes a header section from exactly twelve octets.
pub fn decode_header(buf: &[u8]) -> Result<HeaderSection, ParseError> {
    HeaderSection::from_slice(buf)
}

/// Encodes a header section.
pub fn encode_header(header: &HeaderSection) -> [u8; 12] {
    header.to_bytes()
}

//------------ Name ----------------------------------------------------------

/// Decodes the possibly compressed domain name starting at `offset`.
///
/// `buf` must be the complete message since compression pointers refer
/// to positions relative to its start.
pub fn decode_name(
    buf: &[u8],
    offset: usize,
) -> Result<(Name, usize), ParseError> {
    decode_name_with_config(buf, offset, &ParseConfig::default())
}

/// Decodes a domain name using the given config.
pub fn decode_name_with_config(
    buf: &[u8],
    offset: usize,
    config: &ParseConfig,
) -> Result<(Name, usize), ParseError> {
    decode_at(buf, offset, |parser| Name::parse(parser, config))
}

/// Encodes a domain name without compression.
pub fn encode_name(name: &Name) -> Vec<u8> {
    name.to_vec()
}

//------------ Question ------------------------------------------------------

/// Decodes the question starting at `offset`.
pub fn decode_question(
    buf: &[u8],
    offset: usize,
) -> Result<(Question, usize), ParseError> {
    decode_question_with_config(buf, offset, &ParseConfig::default())
}

/// Decodes a question using the given config.
pub fn decode_question_with_config(
    buf: &[u8],
    offset: usize,
    config: &ParseConfig,
) -> Result<(Question, usize), ParseError> {
    decode_at(buf, offset, |parser| Question::parse(parser, config))
}

//------------ ResourceRecord ------------------------------------------------

/// Decodes the resource record starting at `offset`.
///
/// The record data of the returned record is a sub-slice of `buf`.
pub fn decode_resource_record(
    buf: &[u8],
    offset: usize,
) -> Result<(ResourceRecord<&[u8]>, usize), ParseError> {
    decode_resource_record_with_config(buf, offset, &ParseConfig::default())
}

/// Decodes a resource record using the given config.
pub fn decode_resource_record_with_config<'a>(
    buf: &'a [u8],
    offset: usize,
    config: &ParseConfig,
) -> Result<(ResourceRecord<&'a [u8]>, usize), ParseError> {
    decode_at(buf, offset, |parser| ResourceRecord::parse(parser, config))
}

//------------ Message -------------------------------------------------------

/// Decodes a complete message.
pub fn decode_message(buf: &[u8]) -> Result<Message<&[u8]>, ParseError> {
    Message::from_slice(buf)
}

/// Decodes a complete message using the given config.
pub fn decode_message_with_config<'a>(
    buf: &'a [u8],
    config: &ParseConfig,
) -> Result<Message<&'a [u8]>, ParseError> {
    Message::from_slice_with_config(buf, config)
}

//------------ Helpers -------------------------------------------------------

/// Runs `op` on a parser positioned at `offset`.
///
/// Returns the value and the number of octets the parser moved forward.
fn decode_at<'a, T, F>(
    buf: &'a [u8],
    offset: usize,
    op: F,
) -> Result<(T, usize), ParseError>
where
    F: FnOnce(&mut Parser<'a, [u8]>) -> Result<T, ParseError>,
{
    let mut parser = Parser::from_ref(buf);
    parser
        .seek(offset)
        .map_err(|_| ParseError::out_of_bounds(offset, 1))?;
    let res = op(&mut parser)?;
    Ok((res, parser.pos() - offset))
}

//============ Testing =======================================================
