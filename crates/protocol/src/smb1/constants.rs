//! Wire layout of the SMB1 header.
//!
//! Offsets are relative to the first byte of the SMB message, i.e. after the
//! four transport framing bytes.

/// `SMB1_PROTO_NUMBER`: `0xFF 'S' 'M' 'B'`.
pub const SMB1_PROTOCOL_ID: [u8; 4] = [0xFF, b'S', b'M', b'B'];

/// Length of the fixed header including the word count byte.
pub const SMB1_HEADER_LEN: usize = 33;

/// Smallest possible SMB1 request: fixed header plus the byte count field.
pub const SMB1_MIN_MESSAGE_LEN: usize = SMB1_HEADER_LEN + BYTE_COUNT_LEN;

/// `SMBFLG_RESPONSE` bit in the flags byte.
pub const SMBFLG_RESPONSE: u8 = 0x80;

/// `SMBFLG2_UNICODE` bit in the flags2 word.
pub const SMBFLG2_UNICODE: u16 = 0x8000;

pub(crate) const PROTOCOL_OFFSET: usize = 0;
pub(crate) const COMMAND_OFFSET: usize = 4;
pub(crate) const FLAGS_OFFSET: usize = 9;
pub(crate) const FLAGS2_OFFSET: usize = 10;
pub(crate) const WORD_COUNT_OFFSET: usize = 32;
pub(crate) const PARAMETER_WORDS_OFFSET: usize = SMB1_HEADER_LEN;
pub(crate) const BYTE_COUNT_LEN: usize = 2;

/// Field offsets inside the `WRITE_ANDX` parameter block.
pub(crate) mod write_andx {
    pub(crate) const DATA_LENGTH_HIGH: usize = 18;
    pub(crate) const DATA_LENGTH_LOW: usize = 20;
    pub(crate) const DATA_OFFSET: usize = 22;
}

/// Field offsets shared by the `TRANSACTION` and `TRANSACTION2` parameter blocks.
pub(crate) mod transaction {
    pub(crate) const DATA_COUNT: usize = 22;
    pub(crate) const DATA_OFFSET: usize = 24;
}
