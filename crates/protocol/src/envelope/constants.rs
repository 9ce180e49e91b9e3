/// Number of framing bytes preceding each SMB message.
pub const HEADER_LEN: usize = 4;

/// Maximum message length representable in the 24-bit length field.
pub const MAX_PAYLOAD_LENGTH: u32 = 0x00FF_FFFF;

pub(crate) const PAYLOAD_MASK: u32 = 0x00FF_FFFF;

/// `RFC1002_SESSION_MESSAGE`
pub(crate) const SESSION_MESSAGE: u8 = 0x00;
/// `RFC1002_SESSION_KEEP_ALIVE`
pub(crate) const SESSION_KEEP_ALIVE: u8 = 0x85;
