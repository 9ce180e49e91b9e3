//! Record builders shared by the integration tests.

#![allow(dead_code)]

use protocol::{SMB1_PROTOCOL_ID, SMB2_PROTOCOL_ID, SMBFLG2_UNICODE, SMBFLG_RESPONSE};

/// Prefixes `message` with an RFC 1002 session message header declaring `declared` bytes.
pub fn frame_with_length(message: &[u8], declared: u32) -> Vec<u8> {
    let mut record = declared.to_be_bytes().to_vec();
    record[0] = 0x00;
    record.extend_from_slice(message);
    record
}

/// Prefixes `message` with a header declaring its exact length.
pub fn frame(message: &[u8]) -> Vec<u8> {
    frame_with_length(message, message.len() as u32)
}

/// Field values of a hand-built SMB1 request.
#[derive(Clone, Debug, Default)]
pub struct Smb1Fields {
    pub command: u8,
    pub response: bool,
    pub unicode: bool,
    pub words: Vec<u16>,
    pub byte_count: Option<u16>,
    pub data: Vec<u8>,
}

impl Smb1Fields {
    pub fn new(command: u8, word_count: u8) -> Self {
        Self {
            command,
            words: vec![0; usize::from(word_count)],
            ..Self::default()
        }
    }

    pub fn message(&self) -> Vec<u8> {
        let mut message = SMB1_PROTOCOL_ID.to_vec();
        message.push(self.command);
        message.resize(9, 0);
        message.push(if self.response { SMBFLG_RESPONSE } else { 0 });
        let flags2 = if self.unicode { SMBFLG2_UNICODE } else { 0 };
        message.extend_from_slice(&flags2.to_le_bytes());
        message.resize(32, 0);
        message.push(self.words.len() as u8);
        for word in &self.words {
            message.extend_from_slice(&word.to_le_bytes());
        }
        let byte_count = self.byte_count.unwrap_or(self.data.len() as u16);
        message.extend_from_slice(&byte_count.to_le_bytes());
        message.extend_from_slice(&self.data);
        message
    }

    pub fn record(&self) -> Vec<u8> {
        frame(&self.message())
    }
}

/// SMB1 `NEGOTIATE` request offering `dialects`, each NUL-terminated.
pub fn smb1_negotiate(dialects: &[&[u8]]) -> Vec<u8> {
    let mut fields = Smb1Fields::new(0x72, 0);
    for dialect in dialects {
        fields.data.extend_from_slice(dialect);
        fields.data.push(0);
    }
    fields.record()
}

/// SMB2 `NEGOTIATE` request offering `dialects`.
pub fn smb2_negotiate(dialects: &[u16]) -> Vec<u8> {
    let mut message = SMB2_PROTOCOL_ID.to_vec();
    message.extend_from_slice(&64u16.to_le_bytes());
    message.resize(64, 0);
    message.extend_from_slice(&36u16.to_le_bytes());
    message.extend_from_slice(&(dialects.len() as u16).to_le_bytes());
    message.resize(100, 0);
    for dialect in dialects {
        message.extend_from_slice(&dialect.to_le_bytes());
    }
    frame(&message)
}
