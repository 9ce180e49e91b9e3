use core::fmt;

use thiserror::Error;

use super::descriptor::{DialectIndex, get_protocol_idx, max_protocol, min_protocol};

/// Errors produced while building a [`ProtocolRange`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    /// The lower bound is newer than the upper bound.
    #[error("minimum protocol {min} is newer than maximum protocol {max}")]
    Inverted {
        /// Requested lower bound.
        min: DialectIndex,
        /// Requested upper bound.
        max: DialectIndex,
    },
    /// A bound lies outside what this build can negotiate.
    #[error("protocol {0} is not available in this build")]
    Unavailable(DialectIndex),
    /// A configured name does not resolve to any dialect.
    #[error("unknown protocol name \"{0}\"")]
    UnknownName(String),
}

/// Inclusive range of dialects the server is configured to negotiate.
///
/// ```
/// use protocol::{DialectIndex, ProtocolRange};
///
/// let range = ProtocolRange::from_names("SMB2_10", "SMB3_11").unwrap();
/// assert!(range.contains(DialectIndex::SMB3_00));
/// assert!(!range.contains(DialectIndex::SMB2_02));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeNames", into = "RangeNames")
)]
pub struct ProtocolRange {
    min: DialectIndex,
    max: DialectIndex,
}

impl ProtocolRange {
    /// Builds a range, checking that `min <= max` and that both bounds lie
    /// within [`min_protocol`]`..=`[`max_protocol`].
    pub fn new(min: DialectIndex, max: DialectIndex) -> Result<Self, RangeError> {
        for bound in [min, max] {
            if bound < min_protocol() || bound > max_protocol() {
                return Err(RangeError::Unavailable(bound));
            }
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    /// Builds a range from configured short names, resolved with
    /// [`get_protocol_idx`].
    pub fn from_names(min: &str, max: &str) -> Result<Self, RangeError> {
        let resolve =
            |name: &str| get_protocol_idx(name).ok_or_else(|| RangeError::UnknownName(name.to_owned()));
        Self::new(resolve(min)?, resolve(max)?)
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> DialectIndex {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> DialectIndex {
        self.max
    }

    /// Returns `true` when `index` may be negotiated.
    #[doc(alias = "supported_protocol")]
    #[must_use]
    pub const fn contains(&self, index: DialectIndex) -> bool {
        self.min.as_u8() <= index.as_u8() && index.as_u8() <= self.max.as_u8()
    }
}

impl Default for ProtocolRange {
    fn default() -> Self {
        Self {
            min: min_protocol(),
            max: max_protocol(),
        }
    }
}

impl fmt::Display for ProtocolRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeNames {
    min: String,
    max: String,
}

#[cfg(feature = "serde")]
impl From<ProtocolRange> for RangeNames {
    fn from(range: ProtocolRange) -> Self {
        Self {
            min: range.min.short_name().to_owned(),
            max: range.max.short_name().to_owned(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RangeNames> for ProtocolRange {
    type Error = RangeError;

    fn try_from(names: RangeNames) -> Result<Self, Self::Error> {
        Self::from_names(&names.min, &names.max)
    }
}
