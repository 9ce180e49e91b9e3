use logging::{reject_smb1, trace_smb1};

use crate::envelope::TransportHeader;
use crate::error::CheckError;

use super::command::Smb1Command;
use super::header::Smb1Header;

/// Decides whether a received transport record holds a well-formed SMB1 request.
///
/// `record` is the complete record including its four framing bytes. The
/// gates run in order and the first failure is returned:
///
/// 1. signature and request direction ([`super::check_smb1_hdr`]);
/// 2. the command's parameter word count;
/// 3. the data region referenced by `WRITE_ANDX` / `TRANSACTION` /
///    `TRANSACTION2` must lie inside the declared length;
/// 4. the byte count rule, and the computed size must equal the declared
///    length.
///
/// `WRITE_ANDX` requests whose computed size differs from the declared length
/// are still accepted: smbclient reports an inconsistent byte count for them,
/// and gate 3 has already bounded the payload.
///
/// Every rejection is also reported at error level on the `smb::smb1` target.
pub fn check_smb1_message(record: &[u8]) -> Result<(), CheckError> {
    run_gates(record).inspect_err(|err| {
        if let CheckError::Truncated { needed, available } = err {
            reject_smb1!(
                "cli req truncated, need {} bytes, have {}",
                needed,
                available
            );
        }
    })
}

fn run_gates(record: &[u8]) -> Result<(), CheckError> {
    let (transport, message) = TransportHeader::split(record)?;
    let len = transport.length();

    let hdr = Smb1Header::parse(message)?;
    let command = hdr.command_code();

    match hdr.req_struct_size() {
        Ok(_) => {}
        Err(err @ CheckError::UnsupportedCommand { .. }) => {
            reject_smb1!("Not support cmd {:x}", command);
            return Err(err);
        }
        Err(err) => {
            reject_smb1!(
                "Invalid word count {} for cmd {:x}",
                hdr.word_count(),
                command
            );
            return Err(err);
        }
    }

    let data_len = hdr.data_region_end()?;
    if u64::from(len) < data_len {
        reject_smb1!(
            "Invalid data area length {} not {}. cmd : {:x}",
            len,
            data_len,
            command
        );
        return Err(CheckError::SecondaryRegionOverrun {
            command,
            required: data_len,
            declared: len,
        });
    }

    let clc_len = hdr.calc_size().inspect_err(|err| {
        if let CheckError::ByteCountViolation { actual, .. } = err {
            reject_smb1!("Invalid byte count {} for cmd {:x}", actual, command);
        }
    })?;

    if len != clc_len {
        if hdr.command() == Some(Smb1Command::WriteAndx) {
            trace_smb1!(
                "accepting write with length {} not {} (inconsistent byte count)",
                len,
                clc_len
            );
            return Ok(());
        }

        reject_smb1!(
            "cli req too short, len {} not {}. cmd:{:x}",
            len,
            clc_len,
            command
        );
        return Err(CheckError::LengthMismatch {
            command,
            computed: clc_len,
            declared: len,
        });
    }

    Ok(())
}
