//! crates/logging/src/tracing_macros.rs
//! Convenience macros for SMB validation tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with the fixed targets consumed by [`crate::Subsystem`].

/// Emit a transport record classification trace.
///
/// # Example
/// ```ignore
/// trace_frame!("RFC 1002 session keep alive");
/// ```
#[macro_export]
macro_rules! trace_frame {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "smb::frame", $($arg)*);
    };
}

/// Emit a legacy (SMB1) header check trace.
///
/// # Example
/// ```ignore
/// trace_smb1!("SMB1 len {}", len);
/// ```
#[macro_export]
macro_rules! trace_smb1 {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "smb::smb1", $($arg)*);
    };
}

/// Report why a legacy (SMB1) request was rejected.
///
/// # Example
/// ```ignore
/// reject_smb1!("Not support cmd {:x}", command);
/// ```
#[macro_export]
macro_rules! reject_smb1 {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "smb::smb1", $($arg)*);
    };
}

/// Emit a protocol dispatch trace.
///
/// # Example
/// ```ignore
/// trace_dispatch!("got SMB2 command");
/// ```
#[macro_export]
macro_rules! trace_dispatch {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "smb::dispatch", $($arg)*);
    };
}

/// Emit a dialect negotiation trace.
///
/// # Example
/// ```ignore
/// trace_negotiate!("selected {} dialect", name);
/// ```
#[macro_export]
macro_rules! trace_negotiate {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "smb::negotiate", $($arg)*);
    };
}
