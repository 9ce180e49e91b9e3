use crate::error::CheckError;
use crate::wire;

use super::command::Smb1Command;
use super::constants::{
    BYTE_COUNT_LEN, COMMAND_OFFSET, FLAGS_OFFSET, FLAGS2_OFFSET, PARAMETER_WORDS_OFFSET,
    PROTOCOL_OFFSET, SMB1_HEADER_LEN, SMB1_MIN_MESSAGE_LEN, SMB1_PROTOCOL_ID, SMBFLG_RESPONSE,
    SMBFLG2_UNICODE, WORD_COUNT_OFFSET, transaction, write_andx,
};

/// Validates the SMB1 signature and that `message` is a request.
///
/// `message` starts at the SMB header, after the transport framing. Only the
/// signature and the flags byte are read, so a frame with a bad signature or
/// the response bit set is refused before any command-specific field is
/// trusted.
pub fn check_smb1_hdr(message: &[u8]) -> Result<(), CheckError> {
    let protocol = message
        .get(PROTOCOL_OFFSET..PROTOCOL_OFFSET + SMB1_PROTOCOL_ID.len())
        .ok_or(CheckError::Truncated {
            needed: PROTOCOL_OFFSET + SMB1_PROTOCOL_ID.len(),
            available: message.len(),
        })?;
    if protocol != SMB1_PROTOCOL_ID {
        logging::reject_smb1!("Bad protocol string signature header {:02x?}", protocol);
        return Err(CheckError::MalformedHeader);
    }

    let flags = read_u8(message, FLAGS_OFFSET)?;
    if flags & SMBFLG_RESPONSE != 0 {
        logging::reject_smb1!("Client sent response, not request");
        return Err(CheckError::MalformedHeader);
    }

    Ok(())
}

/// Borrowed view over an SMB1 request whose header has passed
/// [`check_smb1_hdr`].
///
/// The view is bounded by the message length declared in the transport
/// header, so every accessor fails with [`CheckError::Truncated`] instead of
/// reading past it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Smb1Header<'a> {
    message: &'a [u8],
}

impl<'a> Smb1Header<'a> {
    /// Checks the header guard and wraps `message`.
    pub fn parse(message: &'a [u8]) -> Result<Self, CheckError> {
        check_smb1_hdr(message)?;
        if message.len() < SMB1_HEADER_LEN {
            return Err(CheckError::Truncated {
                needed: SMB1_HEADER_LEN,
                available: message.len(),
            });
        }

        Ok(Self { message })
    }

    /// Returns the message bytes covered by this view.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.message
    }

    /// Returns the raw command byte.
    #[must_use]
    pub fn command_code(&self) -> u8 {
        self.fixed_u8(COMMAND_OFFSET)
    }

    /// Returns the command when it is one the checker knows.
    #[must_use]
    pub fn command(&self) -> Option<Smb1Command> {
        Smb1Command::from_u8(self.command_code())
    }

    /// Returns the flags byte.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.fixed_u8(FLAGS_OFFSET)
    }

    /// Returns the flags2 word.
    #[must_use]
    pub fn flags2(&self) -> u16 {
        let low = self.fixed_u8(FLAGS2_OFFSET);
        let high = self.fixed_u8(FLAGS2_OFFSET + 1);
        u16::from_le_bytes([low, high])
    }

    /// Reports whether strings in the request are UTF-16 encoded.
    #[must_use]
    pub fn is_unicode(&self) -> bool {
        self.flags2() & SMBFLG2_UNICODE != 0
    }

    /// Returns the number of 16-bit parameter words following the header.
    #[must_use]
    pub fn word_count(&self) -> u8 {
        self.fixed_u8(WORD_COUNT_OFFSET)
    }

    /// Offset of the byte count field, right after the parameter words.
    #[must_use]
    pub fn byte_count_offset(&self) -> usize {
        PARAMETER_WORDS_OFFSET + 2 * usize::from(self.word_count())
    }

    /// Reads the raw byte count field without applying the command's rule.
    pub fn raw_byte_count(&self) -> Result<u16, CheckError> {
        read_u16_le(self.message, self.byte_count_offset())
    }

    /// Looks the command up in the structure-size table and checks the word count.
    ///
    /// Returns the word count on success. Commands missing from the table
    /// yield [`CheckError::UnsupportedCommand`].
    pub fn req_struct_size(&self) -> Result<u8, CheckError> {
        let command = self.command_code();
        let word_count = self.word_count();
        let Some(known) = Smb1Command::from_u8(command) else {
            return Err(CheckError::UnsupportedCommand { command });
        };

        if known.rules().word_count.accepts(word_count) {
            Ok(word_count)
        } else {
            Err(CheckError::StructureMismatch {
                command,
                actual: word_count,
            })
        }
    }

    /// Reads the byte count and checks it against the command's rule.
    pub fn byte_count(&self) -> Result<u16, CheckError> {
        let byte_count = self.raw_byte_count()?;
        let Some(command) = self.command() else {
            return Ok(byte_count);
        };

        if command
            .rules()
            .byte_count
            .accepts(byte_count, self.is_unicode())
        {
            Ok(byte_count)
        } else {
            Err(CheckError::ByteCountViolation {
                command: command.as_u8(),
                actual: byte_count,
            })
        }
    }

    /// Computes the on-wire length the header implies:
    /// fixed header, byte count field, parameter words and byte region.
    pub fn calc_size(&self) -> Result<u32, CheckError> {
        let struct_size = 2 * u32::from(self.word_count());
        let byte_count = self.byte_count()?;
        logging::trace_smb1!(
            "SMB1 byte count {}, struct size : {}",
            byte_count,
            struct_size
        );

        let len = SMB1_MIN_MESSAGE_LEN as u32 + struct_size + u32::from(byte_count);
        logging::trace_smb1!("SMB1 len {}", len);
        Ok(len)
    }

    /// Returns the end offset of the data region referenced from the
    /// parameter block, or zero for commands without one.
    ///
    /// The sum is formed in 64 bits so that no combination of 16-bit fields
    /// can wrap before it is compared with the envelope length.
    pub fn data_region_end(&self) -> Result<u64, CheckError> {
        match self.command() {
            Some(Smb1Command::WriteAndx) => {
                let low = self.parameter_u16(write_andx::DATA_LENGTH_LOW)?;
                let high = self.parameter_u16(write_andx::DATA_LENGTH_HIGH)?;
                let offset = self.parameter_u16(write_andx::DATA_OFFSET)?;
                let length = (u64::from(high) << 16) | u64::from(low);
                Ok(length + u64::from(offset))
            }
            Some(Smb1Command::Transaction | Smb1Command::Transaction2) => {
                let offset = self.parameter_u16(transaction::DATA_OFFSET)?;
                let count = self.parameter_u16(transaction::DATA_COUNT)?;
                Ok(u64::from(offset) + u64::from(count))
            }
            _ => Ok(0),
        }
    }

    /// Reads a little-endian word at `offset` bytes into the parameter block.
    pub fn parameter_u16(&self, offset: usize) -> Result<u16, CheckError> {
        read_u16_le(self.message, PARAMETER_WORDS_OFFSET + offset)
    }

    /// Reads the byte region that follows the byte count field.
    pub fn data(&self) -> Result<&'a [u8], CheckError> {
        let start = self.byte_count_offset() + BYTE_COUNT_LEN;
        let end = start + usize::from(self.raw_byte_count()?);
        self.message.get(start..end).ok_or(CheckError::Truncated {
            needed: end,
            available: self.message.len(),
        })
    }

    fn fixed_u8(&self, offset: usize) -> u8 {
        debug_assert!(offset < SMB1_HEADER_LEN);
        self.message.get(offset).copied().unwrap_or_default()
    }
}

fn read_u8(bytes: &[u8], offset: usize) -> Result<u8, CheckError> {
    bytes.get(offset).copied().ok_or(CheckError::Truncated {
        needed: offset + 1,
        available: bytes.len(),
    })
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16, CheckError> {
    wire::read_u16_le(bytes, offset).ok_or(CheckError::Truncated {
        needed: offset + 2,
        available: bytes.len(),
    })
}
