//! Basics.
//!
//! This module provides the types for working with DNS messages in their
//! wire format as defined in [RFC 1035]. Crucially, it provides the means
//! to extract the data from wire-format DNS messages and to produce such
//! messages again.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Parsing always happens on a buffer holding a complete DNS message since
//! domain names may be compressed by referencing other parts of the
//! message. The cursor for parsing is octseq’s
//! [`Parser`][octseq::parse::Parser]. Each type has a `parse` function
//! that takes such a parser positioned at the start of the value and
//! leaves it right behind it. Composing appends the wire format to an
//! [`OctetsBuilder`][octseq::builder::OctetsBuilder] via a `compose`
//! method. Names are never compressed when composing.
//!
//! The [`Message`] type takes the binary data of a DNS message and
//! decodes all four sections. Decoding is all or nothing: any malformed
//! part of the message makes decoding fail as a whole with a
//! [`ParseError`] that tells what went wrong and where.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [name] for domain names and their labels,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [message] for complete messages.
//!
//! The [iana] module contains types for the various registry values used in
//! DNS messages, such as record types or response codes. The [wire] module
//! contains the basic reading functions and the error types. Finally, the
//! [config] module contains [`ParseConfig`] to tweak how lenient parsing is.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

//--- Re-exports

pub use self::config::ParseConfig;
pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::{Message, Section};
pub use self::name::{Label, Name};
pub use self::question::Question;
pub use self::record::{RecordHeader, ResourceRecord, Ttl};
pub use self::wire::{ComposeError, ErrorKind, ParseError};

//--- Modules

pub mod config;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod serde;
pub mod wire;
