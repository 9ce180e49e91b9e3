use core::convert::TryFrom;

use super::PAYLOAD_MASK;
use super::constants::{HEADER_LEN, MAX_PAYLOAD_LENGTH};
use super::error::EnvelopeError;
use super::record_type::RecordType;

/// A decoded RFC 1002 framing header.
///
/// The first byte carries the session record type and the remaining three
/// bytes the big-endian length of the SMB message that follows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransportHeader {
    record_type: RecordType,
    length: u32,
}

impl TransportHeader {
    /// Creates a header for `record_type` declaring `length` message bytes.
    ///
    /// Lengths wider than 24 bits are masked to the representable range.
    #[must_use]
    pub const fn new(record_type: RecordType, length: u32) -> Self {
        Self {
            record_type,
            length: length & PAYLOAD_MASK,
        }
    }

    /// Parses a header from the beginning of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        let Some(prefix) = bytes.first_chunk::<HEADER_LEN>() else {
            return Err(EnvelopeError::TruncatedHeader {
                actual: bytes.len(),
            });
        };

        Ok(Self::from_raw(u32::from_be_bytes(*prefix)))
    }

    /// Splits a received record into its header and the declared message bytes.
    ///
    /// Bytes past the declared length are ignored; a record shorter than its
    /// declared length is rejected.
    pub fn split(record: &[u8]) -> Result<(Self, &[u8]), EnvelopeError> {
        let header = Self::decode(record)?;
        let needed = HEADER_LEN + header.length_usize();
        let message = record
            .get(HEADER_LEN..needed)
            .ok_or(EnvelopeError::TruncatedMessage {
                needed,
                available: record.len(),
            })?;

        Ok((header, message))
    }

    /// Constructs a header from the raw 32-bit big-endian representation.
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            record_type: RecordType::from_initial_byte((raw >> 24) as u8),
            length: raw & PAYLOAD_MASK,
        }
    }

    /// Encodes this header into the big-endian format used on the wire.
    #[must_use]
    pub const fn encode(self) -> [u8; HEADER_LEN] {
        let raw = ((self.record_type.as_u8() as u32) << 24) | (self.length & PAYLOAD_MASK);
        raw.to_be_bytes()
    }

    /// Returns the session record type.
    #[must_use]
    #[inline]
    pub const fn record_type(self) -> RecordType {
        self.record_type
    }

    /// Returns the declared length of the message that follows the header.
    #[must_use]
    #[inline]
    pub const fn length(self) -> u32 {
        self.length
    }

    /// Returns the declared message length as a native pointer-sized value.
    #[must_use]
    #[inline]
    pub fn length_usize(self) -> usize {
        #[allow(clippy::assertions_on_constants)]
        {
            debug_assert!(
                usize::BITS >= 24,
                "transport lengths require pointer widths of at least 24 bits"
            );
        }
        debug_assert!(self.length <= MAX_PAYLOAD_LENGTH);
        self.length as usize
    }
}

impl TryFrom<&[u8]> for TransportHeader {
    type Error = EnvelopeError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}
