//! RFC 1002 session framing that precedes every SMB message on the wire.
//!
//! Only the record type byte and the 24-bit length are interpreted here; the
//! payload is handed to the dialect checkers untouched.

mod constants;
mod error;
mod header;
mod record_type;

pub use constants::{HEADER_LEN, MAX_PAYLOAD_LENGTH};
pub use error::EnvelopeError;
pub use header::TransportHeader;
pub use record_type::{RecordType, is_smb_request};

pub(crate) use constants::PAYLOAD_MASK;
