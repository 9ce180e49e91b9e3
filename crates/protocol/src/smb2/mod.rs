//! Modern (SMB2/SMB3) signature and negotiate request layout.
//!
//! Validation of SMB2 message bodies lives outside this crate; the dispatcher
//! hands those frames to an [`Smb2MessageCheck`] implementation supplied by
//! the caller.

use crate::error::CheckError;

/// `SMB2_PROTO_NUMBER`: `0xFE 'S' 'M' 'B'`.
pub const SMB2_PROTOCOL_ID: [u8; 4] = [0xFE, b'S', b'M', b'B'];

/// Length of the fixed SMB2 header.
pub const SMB2_HEADER_LEN: usize = 64;

/// Offset of `DialectCount` in an SMB2 `NEGOTIATE` request.
pub(crate) const NEGOTIATE_DIALECT_COUNT_OFFSET: usize = SMB2_HEADER_LEN + 2;

/// Offset of the `Dialects` array in an SMB2 `NEGOTIATE` request.
pub(crate) const NEGOTIATE_DIALECTS_OFFSET: usize = SMB2_HEADER_LEN + 36;

/// Validity check for SMB2 frames.
///
/// Implementations receive the complete transport record, framing included,
/// and follow the same accept/reject contract as
/// [`check_smb1_message`](crate::smb1::check_smb1_message).
pub trait Smb2MessageCheck {
    /// Accepts or rejects one SMB2 transport record.
    fn check_message(&self, record: &[u8]) -> Result<(), CheckError>;
}

impl<F> Smb2MessageCheck for F
where
    F: Fn(&[u8]) -> Result<(), CheckError>,
{
    fn check_message(&self, record: &[u8]) -> Result<(), CheckError> {
        self(record)
    }
}
