#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Request validation and dialect negotiation for an SMB file server.
//!
//! Every record read from a client socket passes through this crate before
//! any command handler sees it. [`check_message`] routes a record by its
//! protocol signature: SMB2/SMB3 frames go to the caller's
//! [`Smb2MessageCheck`], legacy frames are validated here against a per
//! command table of parameter word counts and byte counts, combined with
//! length checks against the transport header. [`negotiate_dialect`] picks the
//! newest dialect offered by the client that the server's [`ProtocolRange`]
//! allows.
//!
//! All checks borrow the received bytes and never read past them; a frame
//! that is shorter than what its fields claim is reported as
//! [`CheckError::Truncated`].
//!
//! # Examples
//!
//! Validate an SMB1 `CLOSE` request: three parameter words, no data bytes.
//!
//! ```
//! use protocol::{CheckError, check_message};
//!
//! let mut message = vec![0xFF, b'S', b'M', b'B', 0x04];
//! message.resize(32, 0);
//! message.push(3); // word count
//! message.extend_from_slice(&[0; 6]);
//! message.extend_from_slice(&0u16.to_le_bytes()); // byte count
//!
//! let mut record = (message.len() as u32).to_be_bytes().to_vec();
//! record.extend_from_slice(&message);
//!
//! let smb2 = |_: &[u8]| -> Result<(), CheckError> { unreachable!() };
//! assert_eq!(check_message(&record, &smb2), Ok(()));
//! ```
//!
//! Negotiate an SMB2 dialect under a configured range.
//!
//! ```
//! use protocol::{DialectIndex, ProtocolRange, lookup_smb2_dialect};
//!
//! let range = ProtocolRange::from_names("SMB2_10", "SMB3_02").unwrap();
//! let negotiated = lookup_smb2_dialect([0x0202, 0x0210, 0x0311], &range).unwrap();
//! assert_eq!(negotiated.index(), DialectIndex::SMB2_10);
//! assert_eq!(negotiated.wire_value(), 0x0210);
//! ```

mod dialect;
mod dispatch;
mod envelope;
mod error;
mod smb1;
mod smb2;
mod wire;

#[cfg(test)]
mod test_support;

pub use dialect::{
    Dialect, DialectIndex, NegotiatedDialect, ProtocolRange, RangeError, SMB1_DIALECTS,
    SMB2_DIALECTS, SMB2X_PROT_ID, SMB10_PROT_ID, SMB20_PROT_ID, SMB21_PROT_ID, SMB30_PROT_ID,
    SMB302_PROT_ID, SMB311_PROT_ID, get_protocol_idx, lookup_smb1_dialect, lookup_smb2_dialect,
    max_protocol, min_protocol, negotiate_dialect,
};
pub use dispatch::{ProtocolFamily, check_message};
pub use envelope::{
    EnvelopeError, HEADER_LEN as TRANSPORT_HEADER_LEN, MAX_PAYLOAD_LENGTH, RecordType,
    TransportHeader, is_smb_request,
};
pub use error::{BAD_PROT_ID, CheckError, NegotiationError};
pub use smb1::{
    ByteCountRule, CommandRules, ParseCommandError, SMB1_HEADER_LEN, SMB1_MIN_MESSAGE_LEN,
    SMB1_PROTOCOL_ID, SMBFLG_RESPONSE, SMBFLG2_UNICODE, Smb1Command, Smb1Header, WordCountRule,
    check_smb1_hdr, check_smb1_message,
};
pub use smb2::{SMB2_HEADER_LEN, SMB2_PROTOCOL_ID, Smb2MessageCheck};
