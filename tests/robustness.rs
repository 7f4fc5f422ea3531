//! Feeding mangled messages to the decoder.
//!
//! The decoder must reject or accept every input without panicking. This
//! mutates valid messages deterministically octet by octet, so failures are
//! reproducible.

mod common;

use std::vec::Vec;

use rstest::rstest;

use common::{init_logging, name_wire, QUERY, RESPONSE};
use domain_wire::base::ParseConfig;
use domain_wire::{decode_message, decode_message_with_config, decode_name};

/// The replacement values tried for every octet.
///
/// They cover zero, the pointer and label length boundaries, and values
/// with the high bit set.
const MUTATIONS: &[u8] =
    &[0x00, 0x01, 0x3f, 0x40, 0x7f, 0x80, 0xbf, 0xc0, 0xff];

/// Decodes `wire` twice and checks that the outcomes agree.
fn check(wire: &[u8], config: &ParseConfig) {
    let first = decode_message_with_config(wire, config);
    let second = decode_message_with_config(wire, config);
    assert_eq!(first, second);

    if let Ok(msg) = first {
        // Whatever was accepted must be consistent with its header.
        let counts = msg.header_counts();
        assert_eq!(usize::from(counts.qdcount()), msg.question().len());
        assert_eq!(usize::from(counts.ancount()), msg.answer().len());
        assert_eq!(usize::from(counts.nscount()), msg.authority().len());
        assert_eq!(usize::from(counts.arcount()), msg.additional().len());
    }
}

fn configs() -> Vec<ParseConfig> {
    let mut lenient = ParseConfig::new();
    lenient.set_max_pointer_hops(16);
    let mut strict = ParseConfig::new();
    strict.set_allow_trailing_data(false);
    vec![ParseConfig::new(), lenient, strict]
}

#[rstest]
#[case::query(QUERY)]
#[case::response(RESPONSE)]
fn single_octet_mutations(#[case] original: &[u8]) {
    init_logging();
    for config in configs() {
        let mut wire = Vec::from(original);
        for pos in 0..wire.len() {
            let saved = wire[pos];
            for &value in MUTATIONS {
                wire[pos] = value;
                check(&wire, &config);
            }
            wire[pos] = saved ^ 0x01;
            check(&wire, &config);
            wire[pos] = saved;
        }
    }
}

#[rstest]
#[case::query(QUERY)]
#[case::response(RESPONSE)]
fn octet_pair_mutations(#[case] original: &[u8]) {
    // Every position paired with its neighbour set to a pointer. This
    // creates lots of pointers into all parts of the message.
    let mut wire = Vec::from(original);
    for pos in 0..wire.len() - 1 {
        let saved = (wire[pos], wire[pos + 1]);
        for target in [0u8, 12, 13, 0x14, 0x1d, 0xff] {
            wire[pos] = 0xc0;
            wire[pos + 1] = target;
            check(&wire, &ParseConfig::new());
        }
        wire[pos] = saved.0;
        wire[pos + 1] = saved.1;
    }
}

#[test]
fn random_garbage() {
    // A simple linear congruential generator keeps this deterministic.
    let mut state = 0x2545_f491_u32;
    let mut next = move || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (state >> 16) as u8
    };
    for len in 0..300 {
        let mut wire: Vec<u8> = (0..len).map(|_| next()).collect();
        check(&wire, &ParseConfig::new());

        // Plausible headers make it past the first step.
        if wire.len() >= 12 {
            wire[2] &= 0x87;
            wire[3] &= 0x83;
            check(&wire, &ParseConfig::new());
        }
    }
}

#[test]
fn pointer_chain_is_bounded() {
    // A long chain of pointers each pointing to the one before it. With
    // the largest hop limit, decoding must still stop.
    let mut wire = name_wire(&[1]);
    let mut target = 0u16;
    for _ in 0..100 {
        let pos = wire.len() as u16;
        wire.extend_from_slice(&(0xc000 | target).to_be_bytes());
        target = pos;
    }
    let mut config = ParseConfig::new();
    config.set_max_pointer_hops(16);
    let start = wire.len() - 2;
    assert!(decode_name(&wire, start).is_err());
    assert!(domain_wire::decode_name_with_config(&wire, start, &config)
        .is_err());

    // The first pointer points to the name and works.
    assert!(decode_name(&wire, 3).is_ok());
}

#[test]
fn header_only() {
    let wire = &QUERY[..12];
    let mut empty = Vec::from(wire);
    empty[5] = 0;
    let msg = decode_message(&empty).unwrap();
    assert!(msg.question().is_empty());
}
