//! Static dialect descriptor tables.

use core::fmt;

use crate::error::BAD_PROT_ID;

/// Negotiation id answered for the legacy `NT LM 0.12` dialect.
pub const SMB10_PROT_ID: u16 = 0x0000;
/// Negotiation id of SMB 2.0.2.
pub const SMB20_PROT_ID: u16 = 0x0202;
/// Negotiation id of SMB 2.1.
pub const SMB21_PROT_ID: u16 = 0x0210;
/// Wildcard id of the multi-protocol SMB 2.??? dialect.
pub const SMB2X_PROT_ID: u16 = 0x02FF;
/// Negotiation id of SMB 3.0.
pub const SMB30_PROT_ID: u16 = 0x0300;
/// Negotiation id of SMB 3.0.2.
pub const SMB302_PROT_ID: u16 = 0x0302;
/// Negotiation id of SMB 3.1.1.
pub const SMB311_PROT_ID: u16 = 0x0311;

/// Position of a dialect on the single ordinal scale shared by both tables.
///
/// Higher indices are newer dialects; the configured [`super::ProtocolRange`]
/// bounds are expressed on this scale.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DialectIndex(u8);

impl DialectIndex {
    /// `NT LM 0.12`
    #[doc(alias = "NT1")]
    pub const SMB1: Self = Self(0);
    /// SMB 2.0.2
    pub const SMB2_02: Self = Self(1);
    /// SMB 2.1
    pub const SMB2_10: Self = Self(2);
    /// SMB 2.???
    pub const SMB2_22: Self = Self(3);
    /// SMB 3.0
    pub const SMB3_00: Self = Self(4);
    /// SMB 3.0.2
    pub const SMB3_02: Self = Self(5);
    /// SMB 3.1.1
    pub const SMB3_11: Self = Self(6);

    /// Every index, oldest first.
    pub const ALL: [Self; 7] = [
        Self::SMB1,
        Self::SMB2_02,
        Self::SMB2_10,
        Self::SMB2_22,
        Self::SMB3_00,
        Self::SMB3_02,
        Self::SMB3_11,
    ];

    /// Returns the index with ordinal `value`, if one exists.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::SMB3_11.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the ordinal value.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns the short name of the dialect at this position, e.g. `SMB3_11`.
    ///
    /// The name is fixed even when the legacy descriptor is compiled out.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self.0 {
            0 => "NT1",
            1 => "SMB2_02",
            2 => "SMB2_10",
            3 => "SMB2_22",
            4 => "SMB3_00",
            5 => "SMB3_02",
            _ => "SMB3_11",
        }
    }

    /// Returns the descriptor for this index, skipping the legacy placeholder.
    #[must_use]
    pub fn dialect(self) -> Option<&'static Dialect> {
        SMB1_DIALECTS
            .iter()
            .chain(SMB2_DIALECTS.iter())
            .find(|dialect| dialect.index == self && !dialect.is_placeholder())
    }
}

impl fmt::Display for DialectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A negotiable dialect.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Dialect {
    index: DialectIndex,
    name: &'static [u8],
    prot: &'static str,
    prot_id: u16,
}

impl Dialect {
    const fn new(index: DialectIndex, name: &'static [u8], prot: &'static str, prot_id: u16) -> Self {
        Self {
            index,
            name,
            prot,
            prot_id,
        }
    }

    /// Ordinal position of the dialect.
    #[must_use]
    pub const fn index(&self) -> DialectIndex {
        self.index
    }

    /// Dialect string as a legacy client sends it, including the leading `0x02`.
    #[must_use]
    pub const fn wire_name(&self) -> &'static [u8] {
        self.name
    }

    /// Short name used in configuration, e.g. `SMB2_10`.
    #[must_use]
    pub const fn prot(&self) -> &'static str {
        self.prot
    }

    /// 16-bit id exchanged during negotiation.
    #[must_use]
    pub const fn prot_id(&self) -> u16 {
        self.prot_id
    }

    /// Returns `true` for the entry standing in for a compiled-out dialect.
    ///
    /// Placeholders never match a name or a client offer.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.prot_id == BAD_PROT_ID
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prot)
    }
}

#[cfg(feature = "smb1")]
const LEGACY_TABLE: [Dialect; 1] = [Dialect::new(
    DialectIndex::SMB1,
    b"\x02NT LM 0.12",
    "NT1",
    SMB10_PROT_ID,
)];

// NT LM 0.12 is compiled out; the single entry never matches.
#[cfg(not(feature = "smb1"))]
const LEGACY_TABLE: [Dialect; 1] = [Dialect::new(DialectIndex::SMB1, b"", "", BAD_PROT_ID)];

const MODERN_TABLE: [Dialect; 6] = [
    Dialect::new(DialectIndex::SMB2_02, b"\x02SMB 2.002", "SMB2_02", SMB20_PROT_ID),
    Dialect::new(DialectIndex::SMB2_10, b"\x02SMB 2.1", "SMB2_10", SMB21_PROT_ID),
    Dialect::new(DialectIndex::SMB2_22, b"\x02SMB 2.???", "SMB2_22", SMB2X_PROT_ID),
    Dialect::new(DialectIndex::SMB3_00, b"\x02SMB 3.0", "SMB3_00", SMB30_PROT_ID),
    Dialect::new(DialectIndex::SMB3_02, b"\x02SMB 3.02", "SMB3_02", SMB302_PROT_ID),
    Dialect::new(DialectIndex::SMB3_11, b"\x02SMB 3.1.1", "SMB3_11", SMB311_PROT_ID),
];

/// Legacy dialects, oldest first.
pub static SMB1_DIALECTS: [Dialect; 1] = LEGACY_TABLE;

/// SMB2 and SMB3 dialects, oldest first.
pub static SMB2_DIALECTS: [Dialect; 6] = MODERN_TABLE;

/// Lowest index the server can negotiate.
#[must_use]
pub const fn min_protocol() -> DialectIndex {
    if cfg!(feature = "smb1") {
        DialectIndex::SMB1
    } else {
        DialectIndex::SMB2_02
    }
}

/// Highest index the server can negotiate.
#[must_use]
pub const fn max_protocol() -> DialectIndex {
    MODERN_TABLE[MODERN_TABLE.len() - 1].index
}

/// Resolves a configured short name to its index.
///
/// `name` may abbreviate a short name: the newest dialect whose short name
/// starts with it wins, so `"SMB3"` resolves to `SMB3_11`. The modern table is
/// searched before the legacy one. Empty names resolve to nothing.
#[must_use]
pub fn get_protocol_idx(name: &str) -> Option<DialectIndex> {
    if name.is_empty() {
        return None;
    }

    SMB2_DIALECTS
        .iter()
        .rev()
        .chain(SMB1_DIALECTS.iter().rev())
        .filter(|dialect| !dialect.is_placeholder())
        .find(|dialect| dialect.prot.starts_with(name))
        .map(|dialect| {
            logging::trace_negotiate!(
                "selected {} dialect idx = {}",
                dialect.prot,
                dialect.index.as_u8()
            );
            dialect.index
        })
}

const fn validate_dialect_tables() {
    let mut position = 0usize;
    while position < MODERN_TABLE.len() {
        let dialect = &MODERN_TABLE[position];
        assert!(
            dialect.index.0 as usize == position + 1,
            "modern dialects must follow the legacy index in order",
        );
        assert!(
            dialect.prot_id != BAD_PROT_ID,
            "modern dialects must carry a real negotiation id",
        );
        position += 1;
    }
    assert!(
        LEGACY_TABLE[0].index.0 == DialectIndex::SMB1.0,
        "legacy table must hold the legacy index",
    );
    assert!(
        max_protocol().0 == DialectIndex::SMB3_11.0,
        "newest modern dialect must be the maximum",
    );
}

const _: () = validate_dialect_tables();
