#![no_main]

//! Fuzz target for dialect negotiation.
//!
//! Drives both the record-level entry point and the list lookups with
//! arbitrary offers and configured ranges; a selected dialect must always lie
//! inside the range.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use protocol::{
    DialectIndex, ProtocolRange, lookup_smb1_dialect, lookup_smb2_dialect, negotiate_dialect,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    min: u8,
    max: u8,
    smb2_offer: Vec<u16>,
    smb1_offer: &'a [u8],
    record: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let range = match (DialectIndex::new(input.min % 7), DialectIndex::new(input.max % 7)) {
        (Some(min), Some(max)) => ProtocolRange::new(min, max).unwrap_or_default(),
        _ => ProtocolRange::default(),
    };

    if let Ok(negotiated) = lookup_smb2_dialect(input.smb2_offer.iter().copied(), &range) {
        assert!(range.contains(negotiated.index()));
    }
    if let Ok(negotiated) = lookup_smb1_dialect(input.smb1_offer, &range) {
        assert!(range.contains(negotiated.index()));
    }
    if let Ok(negotiated) = negotiate_dialect(input.record, &range) {
        assert!(range.contains(negotiated.index()));
    }
});
