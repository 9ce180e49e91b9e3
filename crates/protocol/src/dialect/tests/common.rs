use super::{DialectIndex, ProtocolRange, SMB2_DIALECTS};

/// Straightforward model of SMB2 selection: the highest allowed index among
/// the offered ids.
pub(super) fn reference_smb2_selection(offered: &[u16], range: &ProtocolRange) -> Option<u16> {
    SMB2_DIALECTS
        .iter()
        .filter(|dialect| range.contains(dialect.index()) && offered.contains(&dialect.prot_id()))
        .max_by_key(|dialect| dialect.index())
        .map(|dialect| dialect.prot_id())
}

/// Every valid range on the full ordinal scale.
pub(super) fn all_ranges() -> Vec<ProtocolRange> {
    let mut ranges = Vec::new();
    for min in DialectIndex::ALL {
        for max in DialectIndex::ALL {
            if let Ok(range) = ProtocolRange::new(min, max) {
                ranges.push(range);
            }
        }
    }
    ranges
}
