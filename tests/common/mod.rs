//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::vec::Vec;
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the codec and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why messages are rejected:
///   RUST_LOG=domain_wire=DEBUG
///
/// Or to follow section decoding:
///   RUST_LOG=domain_wire::base::message=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A query for `example.com. IN A` with ID 12345 and RD set.
pub const QUERY: &[u8] = b"\x30\x39\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
    \x07example\x03com\x00\x00\x01\x00\x01";

/// The response to [`QUERY`].
///
/// It has one A record in the answer section whose owner is a pointer to
/// the question name, one NS record in the authority section, and one TXT
/// record in the additional section.
pub const RESPONSE: &[u8] = b"\x30\x39\x81\x80\x00\x01\x00\x01\
    \x00\x01\x00\x01\x07example\x03com\x00\x00\x01\x00\x01\
    \xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\xc0\x00\x02\x01\
    \xc0\x14\x00\x02\x00\x01\x00\x01\x51\x80\x00\x06\x03ns1\xc0\x0c\
    \x03txt\xc0\x0c\x00\x10\x00\x01\x00\x00\x00\x00\x00\x03\x02hi";

/// Returns the wire format of a domain name with labels of the given sizes.
///
/// All labels consist of the letter `a`.
pub fn name_wire(label_lens: &[usize]) -> Vec<u8> {
    let mut res = Vec::new();
    for &len in label_lens {
        res.push(len as u8);
        res.extend(std::iter::repeat(b'a').take(len));
    }
    res.push(0);
    res
}
