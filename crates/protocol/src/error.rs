use std::io;

use thiserror::Error;

use crate::envelope::{EnvelopeError, HEADER_LEN};

/// Reasons a received request is refused by the message checkers.
///
/// Every variant means "drop this request"; the variants exist so the cause
/// can be logged and counted. [`CheckError::UnsupportedCommand`] is kept apart
/// from genuinely malformed input because it flags a command this layer does
/// not validate yet rather than a hostile frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CheckError {
    /// Wrong protocol signature, or a response was sent where a request was expected.
    #[error("malformed SMB header")]
    MalformedHeader,
    /// The command code has no entry in the structure-size table.
    #[error("unsupported SMB1 command 0x{command:02x}")]
    UnsupportedCommand {
        /// Raw command byte from the header.
        command: u8,
    },
    /// The parameter word count does not match the command's rule.
    #[error("invalid word count {actual} for command 0x{command:02x}")]
    StructureMismatch {
        /// Raw command byte from the header.
        command: u8,
        /// Word count found in the header.
        actual: u8,
    },
    /// The trailing byte count violates the command's rule.
    #[error("invalid byte count {actual} for command 0x{command:02x}")]
    ByteCountViolation {
        /// Raw command byte from the header.
        command: u8,
        /// Byte count found after the parameter words.
        actual: u16,
    },
    /// The data region referenced by the parameter block extends past the envelope.
    #[error(
        "data region ends at {required} but envelope declares {declared} bytes (command 0x{command:02x})"
    )]
    SecondaryRegionOverrun {
        /// Raw command byte from the header.
        command: u8,
        /// End offset of the data region claimed by the parameter block.
        required: u64,
        /// Length declared by the transport envelope.
        declared: u32,
    },
    /// The computed message size differs from the envelope's declared length.
    #[error("request length {declared} does not match computed {computed} (command 0x{command:02x})")]
    LengthMismatch {
        /// Raw command byte from the header.
        command: u8,
        /// Size computed from the header fields.
        computed: u32,
        /// Length declared by the transport envelope.
        declared: u32,
    },
    /// A field lies beyond the received bytes or the declared message length.
    #[error("request truncated: need {needed} bytes, have {available}")]
    Truncated {
        /// Number of bytes required to read the field.
        needed: usize,
        /// Number of bytes that were available.
        available: usize,
    },
}

impl CheckError {
    /// Returns `true` when the request was refused only because its command is
    /// not in the validation tables.
    #[must_use]
    pub const fn is_unsupported_command(&self) -> bool {
        matches!(self, Self::UnsupportedCommand { .. })
    }

    /// Returns the command byte the error refers to, when one was read.
    #[must_use]
    pub const fn command(&self) -> Option<u8> {
        match self {
            Self::UnsupportedCommand { command }
            | Self::StructureMismatch { command, .. }
            | Self::ByteCountViolation { command, .. }
            | Self::SecondaryRegionOverrun { command, .. }
            | Self::LengthMismatch { command, .. } => Some(*command),
            Self::MalformedHeader | Self::Truncated { .. } => None,
        }
    }
}

impl From<EnvelopeError> for CheckError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::TruncatedHeader { actual } => Self::Truncated {
                needed: HEADER_LEN,
                available: actual,
            },
            EnvelopeError::TruncatedMessage { needed, available } => {
                Self::Truncated { needed, available }
            }
        }
    }
}

impl From<CheckError> for io::Error {
    fn from(err: CheckError) -> Self {
        Self::new(io::ErrorKind::InvalidData, err)
    }
}

/// Sentinel written in place of a dialect when negotiation fails.
pub const BAD_PROT_ID: u16 = 0xFFFF;

/// Errors that end a dialect negotiation without a selection.
///
/// Callers answer all of these with an explicit negotiation failure rather
/// than dropping the connection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum NegotiationError {
    /// None of the client's dialects is both known and inside the configured range.
    #[error("no mutually supported SMB dialect")]
    NoMutualDialect,
    /// The negotiate request is too short to hold the dialect list it declares.
    #[error("negotiate request truncated: need {needed} bytes, have {available}")]
    TruncatedRequest {
        /// Number of bytes required to read the dialect list.
        needed: usize,
        /// Number of bytes that were available.
        available: usize,
    },
    /// The SMB1 negotiate header failed its guard, for example because the
    /// response flag is set.
    #[error("malformed negotiate request")]
    MalformedRequest,
    /// The request carries neither the SMB1 nor the SMB2 signature.
    #[error("negotiate request has no SMB protocol signature")]
    UnrecognizedProtocol,
}

impl NegotiationError {
    /// Returns the value placed on the wire for a failed negotiation.
    #[must_use]
    pub const fn wire_value(&self) -> u16 {
        BAD_PROT_ID
    }
}

impl From<CheckError> for NegotiationError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::Truncated { needed, available } => {
                Self::TruncatedRequest { needed, available }
            }
            _ => Self::MalformedRequest,
        }
    }
}

impl From<EnvelopeError> for NegotiationError {
    fn from(err: EnvelopeError) -> Self {
        CheckError::from(err).into()
    }
}

impl From<NegotiationError> for io::Error {
    fn from(err: NegotiationError) -> Self {
        Self::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_unsupported_command() {
        let err = CheckError::UnsupportedCommand { command: 0xff };
        assert_eq!(err.to_string(), "unsupported SMB1 command 0xff");
    }

    #[test]
    fn display_formats_length_mismatch() {
        let err = CheckError::LengthMismatch {
            command: 0x04,
            computed: 41,
            declared: 40,
        };
        assert_eq!(
            err.to_string(),
            "request length 40 does not match computed 41 (command 0x04)"
        );
    }

    #[test]
    fn accessors_expose_variant_context() {
        assert!(CheckError::UnsupportedCommand { command: 0x99 }.is_unsupported_command());
        assert!(!CheckError::MalformedHeader.is_unsupported_command());
        assert_eq!(
            CheckError::StructureMismatch {
                command: 0x04,
                actual: 2
            }
            .command(),
            Some(0x04)
        );
        assert_eq!(
            CheckError::Truncated {
                needed: 4,
                available: 1
            }
            .command(),
            None
        );
    }

    #[test]
    fn envelope_errors_become_truncation() {
        assert_eq!(
            CheckError::from(EnvelopeError::TruncatedHeader { actual: 1 }),
            CheckError::Truncated {
                needed: HEADER_LEN,
                available: 1
            }
        );
        assert_eq!(
            CheckError::from(EnvelopeError::TruncatedMessage {
                needed: 40,
                available: 12
            }),
            CheckError::Truncated {
                needed: 40,
                available: 12
            }
        );
    }

    #[test]
    fn negotiation_failures_map_to_bad_protocol_id() {
        for err in [
            NegotiationError::NoMutualDialect,
            NegotiationError::UnrecognizedProtocol,
            NegotiationError::MalformedRequest,
            NegotiationError::TruncatedRequest {
                needed: 2,
                available: 0,
            },
        ] {
            assert_eq!(err.wire_value(), BAD_PROT_ID);
        }
    }

    #[test]
    fn header_failures_during_negotiation_keep_truncation_context() {
        assert_eq!(
            NegotiationError::from(CheckError::Truncated {
                needed: 33,
                available: 20
            }),
            NegotiationError::TruncatedRequest {
                needed: 33,
                available: 20
            }
        );
        assert_eq!(
            NegotiationError::from(CheckError::MalformedHeader),
            NegotiationError::MalformedRequest
        );
        assert_eq!(
            NegotiationError::from(EnvelopeError::TruncatedHeader { actual: 0 }),
            NegotiationError::TruncatedRequest {
                needed: HEADER_LEN,
                available: 0
            }
        );
    }

    #[test]
    fn converts_into_invalid_data_io_errors() {
        let io_err: io::Error = CheckError::MalformedHeader.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let io_err: io::Error = NegotiationError::NoMutualDialect.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
