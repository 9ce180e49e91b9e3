//! Legacy (SMB1) request validation.
//!
//! The checker never trusts a length field it has not bounded first: the
//! header view is limited to the message length declared by the transport
//! header, and every field access past that limit is reported as truncation.

mod check;
mod command;
mod constants;
mod header;
mod rules;

pub use check::check_smb1_message;
pub use command::{ParseCommandError, Smb1Command};
pub use constants::{
    SMB1_HEADER_LEN, SMB1_MIN_MESSAGE_LEN, SMB1_PROTOCOL_ID, SMBFLG_RESPONSE, SMBFLG2_UNICODE,
};
pub use header::{Smb1Header, check_smb1_hdr};
pub use rules::{ByteCountRule, CommandRules, WordCountRule};

#[cfg(test)]
mod tests;
