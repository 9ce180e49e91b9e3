//! crates/logging/src/subsystem.rs
//! Diagnostic categories and their tracing targets.

use std::fmt;

/// Diagnostic categories emitted by the validation and negotiation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Transport record classification.
    Frame,
    /// Legacy (SMB1) message checks.
    Smb1,
    /// Routing between the legacy and modern checkers.
    Dispatch,
    /// Dialect negotiation.
    Negotiate,
}

impl Subsystem {
    /// All categories in declaration order.
    pub const ALL: [Self; 4] = [Self::Frame, Self::Smb1, Self::Dispatch, Self::Negotiate];

    /// Returns the tracing target used by the macros for this category.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Frame => "smb::frame",
            Self::Smb1 => "smb::smb1",
            Self::Dispatch => "smb::dispatch",
            Self::Negotiate => "smb::negotiate",
        }
    }

    /// Maps a tracing target back to its category.
    ///
    /// Only exact targets are recognised so that unrelated crates whose module
    /// paths happen to contain `smb` are not captured.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.target() == target)
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}
