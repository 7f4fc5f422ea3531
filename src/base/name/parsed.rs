//! Parsing possibly compressed domain names.
//!
//! This is a private module. It only adds to the [`Name`] type.

use super::super::config::ParseConfig;
use super::super::wire::{ErrorKind, ParseError};
use super::absolute::Name;
use super::label::{Label, LabelType};
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Name ----------------------------------------------------------

/// # Parsing
///
impl Name {
    /// Parses a possibly compressed domain name.
    ///
    /// The parser needs to cover the complete message since compression
    /// pointers refer to positions relative to its start. On success, the
    /// parser is left right behind the name as it appears at its original
    /// position, i.e., behind the root label or behind the first
    /// compression pointer. The labels found elsewhere in the message don’t
    /// count.
    ///
    /// Each compression pointer must point to a position before the start
    /// of the part of the name currently being read. This means that the
    /// first pointer points to somewhere before the name and each further
    /// pointer points further backwards still. At most
    /// [`config.max_pointer_hops()`][ParseConfig::max_pointer_hops]
    /// pointers are followed. With the default configuration, a pointer
    /// leading to another pointer is rejected.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let mut labels = Vec::new();

        // Include the root label right away.
        let mut name_len = 1;

        // Where the part of the name currently read starts and where the
        // name ends at its original position once we know it.
        let mut segment_start = parser.pos();
        let mut end = None;
        let mut hops = 0;

        // We are going to work on a temporary parser so we can jump around.
        // Because parsers are copy, dereferencing them clones them.
        let mut tmp = *parser;
        loop {
            match LabelType::parse(&mut tmp)? {
                LabelType::Normal(0) => break,
                LabelType::Normal(len) => {
                    let pos = tmp.pos();
                    tmp.advance(len)
                        .map_err(|_| ParseError::out_of_bounds(pos, len))?;
                    let content = tmp
                        .octets_ref()
                        .as_ref()
                        .get(pos..pos + len)
                        .ok_or(ParseError::out_of_bounds(pos, len))?;
                    let label =
                        Label::try_new(content).map_err(|err| err.at(pos))?;
                    name_len += len + 1;
                    if name_len > Name::MAX_LEN {
                        return Err(ParseError::new(
                            ErrorKind::InvalidValue,
                            pos - 1,
                            "domain name exceeds 255 octets",
                        ));
                    }
                    labels.push(label);
                }
                LabelType::Compressed(target) => {
                    let pos = tmp.pos() - 2;
                    if hops >= config.max_pointer_hops() {
                        return Err(ParseError::new(
                            ErrorKind::RecursivePointer,
                            pos,
                            "too many compression pointers",
                        ));
                    }
                    if target >= segment_start {
                        return Err(ParseError::new(
                            ErrorKind::InvalidValue,
                            pos,
                            "compression pointer does not point backwards",
                        ));
                    }
                    hops += 1;
                    if end.is_none() {
                        end = Some(tmp.pos());
                    }
                    segment_start = target;
                    tmp.seek(target)
                        .map_err(|_| ParseError::out_of_bounds(pos, 2))?;
                }
            }
        }

        let end = end.unwrap_or_else(|| tmp.pos());
        parser
            .seek(end)
            .map_err(|_| ParseError::out_of_bounds(end, 0))?;
        Ok(Name::from_labels_unchecked(labels))
    }
}

//============ Testing =======================================================
