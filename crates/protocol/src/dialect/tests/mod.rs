pub(super) use super::{
    Dialect, DialectIndex, NegotiatedDialect, ProtocolRange, RangeError, SMB1_DIALECTS,
    SMB2_DIALECTS, get_protocol_idx, lookup_smb1_dialect, lookup_smb2_dialect, max_protocol,
    min_protocol, negotiate_dialect,
};

mod common;
