//! Builders for hand-crafted transport records used across the unit tests.

use crate::envelope::{RecordType, TransportHeader};
use crate::smb1::{SMB1_PROTOCOL_ID, SMBFLG_RESPONSE, SMBFLG2_UNICODE, Smb1Command};
use crate::smb2::{SMB2_HEADER_LEN, SMB2_PROTOCOL_ID};

/// Builds an SMB1 request record field by field.
#[derive(Clone, Debug)]
pub(crate) struct Smb1Request {
    protocol: [u8; 4],
    command: u8,
    flags: u8,
    flags2: u16,
    words: Vec<u16>,
    byte_count: Option<u16>,
    data: Vec<u8>,
    declared_len: Option<u32>,
}

impl Smb1Request {
    pub(crate) fn new(command: u8) -> Self {
        Self {
            protocol: SMB1_PROTOCOL_ID,
            command,
            flags: 0,
            flags2: 0,
            words: Vec::new(),
            byte_count: None,
            data: Vec::new(),
            declared_len: None,
        }
    }

    /// A request for `command` that satisfies its word and byte count rules
    /// with the smallest values they accept.
    pub(crate) fn minimal(command: Smb1Command) -> Self {
        let rules = command.rules();
        let word_count = match rules.word_count {
            crate::smb1::WordCountRule::Exact(n)
            | crate::smb1::WordCountRule::Either(n, _)
            | crate::smb1::WordCountRule::AtLeast(n) => n,
        };
        let byte_count = rules.byte_count.minimum(false);

        Self::new(command.as_u8())
            .words(word_count)
            .data(&vec![0; usize::from(byte_count)])
    }

    pub(crate) fn protocol(mut self, protocol: [u8; 4]) -> Self {
        self.protocol = protocol;
        self
    }

    pub(crate) fn response(mut self) -> Self {
        self.flags |= SMBFLG_RESPONSE;
        self
    }

    pub(crate) fn unicode(mut self) -> Self {
        self.flags2 |= SMBFLG2_UNICODE;
        self
    }

    /// Sets the number of parameter words, zero-filled.
    pub(crate) fn words(mut self, count: u8) -> Self {
        self.words = vec![0; usize::from(count)];
        self
    }

    /// Stores `value` at byte `offset` of the parameter block.
    pub(crate) fn param(mut self, offset: usize, value: u16) -> Self {
        assert_eq!(offset % 2, 0, "parameter fields are word aligned");
        self.words[offset / 2] = value;
        self
    }

    pub(crate) fn data(mut self, data: &[u8]) -> Self {
        self.data = data.to_vec();
        self
    }

    /// Overrides the byte count field; the data bytes are left unchanged.
    pub(crate) fn byte_count(mut self, byte_count: u16) -> Self {
        self.byte_count = Some(byte_count);
        self
    }

    /// Overrides the length declared by the transport header.
    pub(crate) fn declared_len(mut self, len: u32) -> Self {
        self.declared_len = Some(len);
        self
    }

    pub(crate) fn message(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(&self.protocol);
        message.push(self.command);
        message.extend_from_slice(&[0; 4]);
        message.push(self.flags);
        message.extend_from_slice(&self.flags2.to_le_bytes());
        message.extend_from_slice(&[0; 20]);
        message.push(self.words.len() as u8);
        for word in &self.words {
            message.extend_from_slice(&word.to_le_bytes());
        }
        let byte_count = self.byte_count.unwrap_or(self.data.len() as u16);
        message.extend_from_slice(&byte_count.to_le_bytes());
        message.extend_from_slice(&self.data);
        message
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        frame(&self.message(), self.declared_len)
    }
}

/// Builds an SMB1 `NEGOTIATE` request offering `dialects` in order.
pub(crate) fn smb1_negotiate(dialects: &[&[u8]]) -> Vec<u8> {
    let mut data = Vec::new();
    for dialect in dialects {
        data.extend_from_slice(dialect);
        data.push(0);
    }
    Smb1Request::new(Smb1Command::Negotiate.as_u8())
        .data(&data)
        .build()
}

/// Builds an SMB2 `NEGOTIATE` request offering `dialects`.
pub(crate) fn smb2_negotiate(dialects: &[u16]) -> Vec<u8> {
    let mut message = vec![0u8; SMB2_HEADER_LEN];
    message[..4].copy_from_slice(&SMB2_PROTOCOL_ID);
    message[4..6].copy_from_slice(&64u16.to_le_bytes());

    let mut body = vec![0u8; 36];
    body[..2].copy_from_slice(&36u16.to_le_bytes());
    body[2..4].copy_from_slice(&(dialects.len() as u16).to_le_bytes());
    message.extend_from_slice(&body);
    for dialect in dialects {
        message.extend_from_slice(&dialect.to_le_bytes());
    }

    frame(&message, None)
}

/// Prefixes `message` with a session message header.
pub(crate) fn frame(message: &[u8], declared_len: Option<u32>) -> Vec<u8> {
    let len = declared_len.unwrap_or(message.len() as u32);
    let mut record = TransportHeader::new(RecordType::SessionMessage, len)
        .encode()
        .to_vec();
    record.extend_from_slice(message);
    record
}
