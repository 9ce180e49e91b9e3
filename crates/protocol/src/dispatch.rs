//! Routing of received records to the checker of their protocol family.

use core::fmt;

use crate::envelope::HEADER_LEN;
use crate::error::CheckError;
use crate::smb1::{SMB1_PROTOCOL_ID, check_smb1_message};
use crate::smb2::{SMB2_PROTOCOL_ID, Smb2MessageCheck};

/// Protocol family announced by the signature at the start of an SMB message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProtocolFamily {
    /// `0xFF 'S' 'M' 'B'`
    Smb1,
    /// `0xFE 'S' 'M' 'B'`
    Smb2,
    /// Anything else, including records too short to hold a signature.
    Unknown,
}

impl ProtocolFamily {
    /// Classifies a complete transport record by its message signature.
    #[must_use]
    pub fn detect(record: &[u8]) -> Self {
        match record
            .get(HEADER_LEN..)
            .and_then(<[u8]>::first_chunk::<4>)
        {
            Some(id) if *id == SMB2_PROTOCOL_ID => Self::Smb2,
            Some(id) if *id == SMB1_PROTOCOL_ID => Self::Smb1,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ProtocolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Smb1 => "SMB1",
            Self::Smb2 => "SMB2",
            Self::Unknown => "unknown",
        })
    }
}

/// Checks one received request before any further processing.
///
/// Records carrying the SMB2 signature go to `smb2` and its verdict is
/// returned unchanged. Everything else takes the SMB1 path, whose header guard
/// rejects a foreign signature; this function never rejects on its own.
pub fn check_message<C>(record: &[u8], smb2: &C) -> Result<(), CheckError>
where
    C: Smb2MessageCheck + ?Sized,
{
    if ProtocolFamily::detect(record) == ProtocolFamily::Smb2 {
        logging::trace_dispatch!("got SMB2 command");
        return smb2.check_message(record);
    }

    check_smb1_message(record)
}
