//! Decoding and encoding DNS messages in their wire format.
//!
//! This crate provides a codec for DNS messages as defined in [RFC 1035]:
//! a fixed 12 octet header followed by the question section and three
//! sections of resource records. It is meant for anything that needs to
//! look at real DNS traffic, such as resolvers, proxies, test harnesses, or
//! protocol analyzers. The crate never performs any I/O itself.
//!
//! Decoding is careful about its input since DNS messages usually arrive
//! from untrusted sources. Every malformed message is rejected with a
//! [`ParseError`][base::ParseError] that names the kind of problem and the
//! offset into the message where it was found. Decoding never panics and
//! its work is bounded by the size of the message. In particular,
//! compression pointers in domain names must point backwards and only a
//! configurable, small number of them is followed for a single name.
//!
//! # Modules
//!
//! * [base] contains the types for the parts of a message together with
//!   their `parse` and `compose` functions, and
//! * [utils] contains a few helpers.
//!
//! The functions at the top of the crate, such as [`decode_message`] or
//! [`decode_name`], are convenient entry points for decoding the various
//! parts of a message from an octets slice.
//!
//! ```
//! let wire = b"\x30\x39\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
//!              \x07example\x03com\x00\x00\x01\x00\x01";
//! let msg = domain_wire::decode_message(wire).unwrap();
//! assert_eq!(msg.header().id(), 12345);
//! assert_eq!(msg.question()[0].qname().to_string(), "example.com.");
//! ```
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables decoding messages from the `Bytes` type of the
//!   [bytes](https://github.com/tokio-rs/bytes) crate so that record data
//!   is kept as `Bytes` values.
//! * `rand`: Enables a number of methods that rely on a random number
//!   generator being available in the system.
//! * `serde`: Enables serde serialization for a number of basic types.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod base;
pub mod utils;

mod codec;

pub use self::codec::{
    decode_header, decode_message, decode_message_with_config, decode_name,
    decode_name_with_config, decode_question, decode_question_with_config,
    decode_resource_record, decode_resource_record_with_config,
    encode_header, encode_name,
};
