//! crates/logging/src/verbosity.rs
//! Threshold policy deciding whether a message is emitted.

use crate::levels::VerboseLevel;

/// Returns `true` when a message at `level` passes `threshold`.
///
/// A message is emitted iff it is at least as urgent as the threshold, so a
/// level equal to the threshold is emitted.
///
/// # Examples
///
/// ```
/// use logging::{VerboseLevel, should_emit};
///
/// assert!(should_emit(VerboseLevel::Warning, VerboseLevel::Error));
/// assert!(should_emit(VerboseLevel::Warning, VerboseLevel::Warning));
/// assert!(!should_emit(VerboseLevel::Warning, VerboseLevel::Info));
/// ```
#[must_use]
#[inline]
pub const fn should_emit(threshold: VerboseLevel, level: VerboseLevel) -> bool {
    level.weight() >= threshold.weight()
}

/// Emission policy holding a configured threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VerbosityPolicy {
    threshold: VerboseLevel,
}

impl VerbosityPolicy {
    /// Creates a policy that emits `threshold` and everything more urgent.
    #[must_use]
    pub const fn new(threshold: VerboseLevel) -> Self {
        Self { threshold }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(self) -> VerboseLevel {
        self.threshold
    }

    /// Reports whether a message at `level` is emitted under this policy.
    #[must_use]
    #[inline]
    pub const fn allows(self, level: VerboseLevel) -> bool {
        should_emit(self.threshold, level)
    }

    /// Iterates over the levels this policy emits, noisiest first.
    pub fn emitted_levels(self) -> impl Iterator<Item = VerboseLevel> {
        VerboseLevel::ALL
            .into_iter()
            .filter(move |level| self.allows(*level))
    }
}

impl From<VerboseLevel> for VerbosityPolicy {
    fn from(threshold: VerboseLevel) -> Self {
        Self::new(threshold)
    }
}
