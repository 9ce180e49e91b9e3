//! crates/logging/src/init.rs
//! Process-wide subscriber installation.

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Default directive used when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_FILTER: &str = "smb=warn";

/// Installs a formatting subscriber filtered by `filter`.
///
/// The directive syntax is the one accepted by [`EnvFilter`], e.g.
/// `"smb::smb1=debug,smb::negotiate=info"`. When `filter` is `None` the
/// `RUST_LOG` environment variable is consulted and [`DEFAULT_FILTER`] is used
/// as the fallback. Fails if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,ignore
/// logging::init_tracing(Some("smb=debug"))?;
/// ```
pub fn init_tracing(filter: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
