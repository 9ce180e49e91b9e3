#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the diagnostic side channel of the SMB validation layer.
//! Rejections never travel as strings through the return values of the
//! checkers; instead every cause is emitted as a [`tracing`] event on one of a
//! small set of fixed targets described by [`Subsystem`].
//!
//! # Design
//!
//! - The `trace_*!` and `reject_smb1!` macros wrap the standard tracing macros
//!   with the right target, so call sites stay one-liners.
//! - `init_tracing` installs a process-wide `fmt` subscriber driven by an
//!   `EnvFilter` directive. It is available with the `subscriber` feature,
//!   which is on by default.
//! - [`CaptureLayer`] and [`capture_events`] collect events into a
//!   thread-local buffer for tests.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, capture_events, trace_negotiate};
//!
//! let ((), events) = capture_events(|| {
//!     trace_negotiate!("selected {} dialect", "SMB3_11");
//! });
//! assert_eq!(events[0].subsystem, Subsystem::Negotiate);
//! assert_eq!(events[0].message, "selected SMB3_11 dialect");
//! ```

mod capture;
#[cfg(feature = "subscriber")]
mod init;
mod subsystem;
mod tracing_macros;

pub use capture::{CaptureLayer, CapturedEvent, capture_events, drain_events};
#[cfg(feature = "subscriber")]
pub use init::{DEFAULT_FILTER, init_tracing};
pub use subsystem::Subsystem;
pub use tracing::Level;
