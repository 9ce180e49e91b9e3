//! Little-endian field reads over untrusted buffers.

/// Reads a little-endian `u16` at `offset`, or `None` when it does not fit.
#[inline]
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    bytes
        .get(offset..offset.checked_add(2)?)
        .and_then(<[u8]>::first_chunk::<2>)
        .map(|field| u16::from_le_bytes(*field))
}
