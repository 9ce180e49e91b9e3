//! Dialect descriptors, the configured protocol range, and negotiation.
//!
//! Both descriptor tables share one ordinal scale ([`DialectIndex`]): the
//! legacy `NT LM 0.12` dialect sits at zero and SMB2/SMB3 dialects follow in
//! release order. Negotiation walks the tables newest first, so the result is
//! always the newest dialect both sides accept, regardless of the order the
//! client lists them in.

mod descriptor;
mod negotiate;
mod range;

pub use descriptor::{
    Dialect, DialectIndex, SMB1_DIALECTS, SMB2_DIALECTS, SMB2X_PROT_ID, SMB10_PROT_ID,
    SMB20_PROT_ID, SMB21_PROT_ID, SMB30_PROT_ID, SMB302_PROT_ID, SMB311_PROT_ID,
    get_protocol_idx, max_protocol, min_protocol,
};
pub use negotiate::{
    NegotiatedDialect, lookup_smb1_dialect, lookup_smb2_dialect, negotiate_dialect,
};
pub use range::{ProtocolRange, RangeError};

#[cfg(test)]
mod tests;
