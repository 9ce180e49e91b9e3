//! Selection of the dialect answered to a client's negotiate request.

use logging::trace_negotiate;
use memchr::memchr;

use super::descriptor::{Dialect, DialectIndex, SMB1_DIALECTS, SMB2_DIALECTS};
use super::range::ProtocolRange;
use crate::dispatch::ProtocolFamily;
use crate::envelope::TransportHeader;
use crate::error::NegotiationError;
use crate::smb1::Smb1Header;
use crate::smb2::{NEGOTIATE_DIALECT_COUNT_OFFSET, NEGOTIATE_DIALECTS_OFFSET};
use crate::wire::read_u16_le;

/// Outcome of a successful negotiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NegotiatedDialect {
    dialect: &'static Dialect,
    wire_value: u16,
}

impl NegotiatedDialect {
    /// Descriptor of the selected dialect.
    #[must_use]
    pub const fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Ordinal index of the selected dialect.
    #[must_use]
    pub const fn index(&self) -> DialectIndex {
        self.dialect.index()
    }

    /// Value written into the negotiate response.
    ///
    /// This is the dialect's negotiation id, except for `NT LM 0.12` where it
    /// is the position of the matching string in the client's list.
    #[must_use]
    pub const fn wire_value(&self) -> u16 {
        self.wire_value
    }
}

/// Iterator over the NUL-terminated strings of a legacy dialect region.
///
/// A trailing string without its terminator still counts.
#[derive(Clone, Debug)]
struct ClientDialects<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for ClientDialects<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (dialect, rest) = match memchr(0, self.rest) {
            Some(nul) => {
                let (dialect, tail) = self.rest.split_at(nul);
                (dialect, tail.get(1..).unwrap_or_default())
            }
            None => (self.rest, &[][..]),
        };
        self.rest = rest;
        Some(dialect)
    }
}

/// Picks the newest legacy dialect offered in `dialects` that `range` allows.
///
/// `dialects` is the byte region of a legacy negotiate request: a sequence
/// of NUL-terminated strings such as `"\x02NT LM 0.12\0"`. Strings must match
/// a wire name exactly.
pub fn lookup_smb1_dialect(
    dialects: &[u8],
    range: &ProtocolRange,
) -> Result<NegotiatedDialect, NegotiationError> {
    for dialect in SMB1_DIALECTS.iter().rev() {
        if dialect.is_placeholder() {
            continue;
        }

        let offered = ClientDialects { rest: dialects };
        for (requested, position) in offered.zip(0u16..) {
            trace_negotiate!("client requested dialect {}", requested.escape_ascii());
            if requested != dialect.wire_name() || !range.contains(dialect.index()) {
                continue;
            }

            trace_negotiate!("selected {} dialect", dialect);
            let wire_value = if dialect.index() == DialectIndex::SMB1 {
                position
            } else {
                dialect.prot_id()
            };
            return Ok(NegotiatedDialect {
                dialect,
                wire_value,
            });
        }
    }

    Err(NegotiationError::NoMutualDialect)
}

/// Picks the newest SMB2/SMB3 dialect offered in `dialects` that `range` allows.
///
/// ```
/// use protocol::{DialectIndex, ProtocolRange, lookup_smb2_dialect};
///
/// let range = ProtocolRange::new(DialectIndex::SMB2_02, DialectIndex::SMB2_02).unwrap();
/// let negotiated = lookup_smb2_dialect([0x0202, 0x0210], &range).unwrap();
/// assert_eq!(negotiated.wire_value(), 0x0202);
/// ```
pub fn lookup_smb2_dialect<I>(
    dialects: I,
    range: &ProtocolRange,
) -> Result<NegotiatedDialect, NegotiationError>
where
    I: IntoIterator<Item = u16>,
    I::IntoIter: Clone,
{
    let offered = dialects.into_iter();

    for dialect in SMB2_DIALECTS.iter().rev() {
        if dialect.is_placeholder() || !range.contains(dialect.index()) {
            continue;
        }

        for requested in offered.clone() {
            trace_negotiate!("client requested dialect 0x{:x}", requested);
            if requested == dialect.prot_id() {
                trace_negotiate!("selected {} dialect", dialect);
                return Ok(NegotiatedDialect {
                    dialect,
                    wire_value: dialect.prot_id(),
                });
            }
        }
    }

    Err(NegotiationError::NoMutualDialect)
}

/// Negotiates the dialect for a complete negotiate request record.
///
/// The signature picks the table: legacy requests are matched by their
/// dialect strings, SMB2 requests by their dialect id array. The string
/// region of a legacy request is bounded by its byte count and by the bytes
/// actually received.
pub fn negotiate_dialect(
    record: &[u8],
    range: &ProtocolRange,
) -> Result<NegotiatedDialect, NegotiationError> {
    let result = match ProtocolFamily::detect(record) {
        ProtocolFamily::Smb1 => {
            let (_, message) = TransportHeader::split(record)?;
            let hdr = Smb1Header::parse(message)?;
            lookup_smb1_dialect(legacy_dialect_region(&hdr)?, range)
        }
        ProtocolFamily::Smb2 => {
            let (_, message) = TransportHeader::split(record)?;
            let count = read_u16_le(message, NEGOTIATE_DIALECT_COUNT_OFFSET).ok_or(
                NegotiationError::TruncatedRequest {
                    needed: NEGOTIATE_DIALECT_COUNT_OFFSET + 2,
                    available: message.len(),
                },
            )?;
            let end = NEGOTIATE_DIALECTS_OFFSET + 2 * usize::from(count);
            let ids = message.get(NEGOTIATE_DIALECTS_OFFSET..end).ok_or(
                NegotiationError::TruncatedRequest {
                    needed: end,
                    available: message.len(),
                },
            )?;
            lookup_smb2_dialect(
                ids.chunks_exact(2)
                    .map(|id| u16::from_le_bytes([id[0], id[1]])),
                range,
            )
        }
        ProtocolFamily::Unknown => Err(NegotiationError::UnrecognizedProtocol),
    };

    if let Err(err) = &result {
        trace_negotiate!("negotiation failed: {}", err);
    }
    result
}

// A legacy NEGOTIATE carries no parameter words, so the byte count sits
// right after the word count field.
fn legacy_dialect_region<'a>(hdr: &Smb1Header<'a>) -> Result<&'a [u8], NegotiationError> {
    if hdr.word_count() != 0 {
        trace_negotiate!("negotiate request with word count {}", hdr.word_count());
        return Err(NegotiationError::MalformedRequest);
    }

    let byte_count = usize::from(hdr.raw_byte_count()?);
    let message = hdr.as_bytes();
    let start = hdr.byte_count_offset() + 2;
    let region = message.get(start..).unwrap_or_default();
    Ok(region.get(..byte_count).unwrap_or(region))
}
