use ::core::fmt;

use super::constants::HEADER_LEN;

/// Failures encountered while decoding the transport framing header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EnvelopeError {
    /// Fewer than [`HEADER_LEN`] bytes were provided when attempting to decode a header.
    TruncatedHeader {
        /// Number of bytes that were available when decoding began.
        actual: usize,
    },
    /// The record holds fewer message bytes than its header declares.
    TruncatedMessage {
        /// Record length implied by the header, framing included.
        needed: usize,
        /// Number of record bytes actually received.
        available: usize,
    },
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader { actual } => {
                write!(
                    f,
                    "transport header truncated: expected {HEADER_LEN} bytes, got {actual}"
                )
            }
            Self::TruncatedMessage { needed, available } => {
                write!(
                    f,
                    "transport record truncated: header declares {needed} bytes, got {available}"
                )
            }
        }
    }
}

impl std::error::Error for EnvelopeError {}
