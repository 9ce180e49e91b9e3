use core::fmt;

use super::constants::{SESSION_KEEP_ALIVE, SESSION_MESSAGE};

/// Classification of the first byte of a transport record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RecordType {
    /// `RFC1002_SESSION_MESSAGE`: the record carries an SMB message.
    SessionMessage,
    /// `RFC1002_SESSION_KEEP_ALIVE`: a keep-alive with no message.
    KeepAlive,
    /// Any other record type; never dispatched.
    Other(u8),
}

impl RecordType {
    /// Classifies the first byte of a transport record.
    #[must_use]
    #[inline]
    pub const fn from_initial_byte(byte: u8) -> Self {
        match byte {
            SESSION_MESSAGE => Self::SessionMessage,
            SESSION_KEEP_ALIVE => Self::KeepAlive,
            other => Self::Other(other),
        }
    }

    /// Returns the byte that encodes this record type on the wire.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::SessionMessage => SESSION_MESSAGE,
            Self::KeepAlive => SESSION_KEEP_ALIVE,
            Self::Other(byte) => byte,
        }
    }

    /// Reports whether the record carries a dispatchable SMB message.
    #[must_use]
    #[inline]
    pub const fn is_session_message(self) -> bool {
        matches!(self, Self::SessionMessage)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionMessage => f.write_str("session message"),
            Self::KeepAlive => f.write_str("session keep alive"),
            Self::Other(byte) => write!(f, "unknown record type 0x{byte:x}"),
        }
    }
}

/// Reports whether `record` is a regular SMB request.
///
/// Keep-alives and unrecognised record types are logged and reported as
/// `false`; neither is an error, the caller simply has nothing to dispatch.
/// An empty record is likewise not a request.
#[must_use]
pub fn is_smb_request(record: &[u8]) -> bool {
    let Some(&first) = record.first() else {
        return false;
    };

    match RecordType::from_initial_byte(first) {
        RecordType::SessionMessage => true,
        RecordType::KeepAlive => {
            logging::trace_frame!("RFC 1002 session keep alive");
            false
        }
        RecordType::Other(byte) => {
            logging::trace_frame!("RFC 1002 unknown request type 0x{:x}", byte);
            false
        }
    }
}
