//! crates/logging/src/identity.rs
//! Identity recorded as a session's owner.

/// Returns the identity of the caller starting a session.
///
/// On unix this is the real user id; elsewhere it is the process id.
#[cfg(unix)]
#[must_use]
pub fn current_identity() -> u32 {
    rustix::process::getuid().as_raw()
}

/// Returns the identity of the caller starting a session.
///
/// On unix this is the real user id; elsewhere it is the process id.
#[cfg(not(unix))]
#[must_use]
pub fn current_identity() -> u32 {
    std::process::id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_stable_within_a_process() {
        assert_eq!(current_identity(), current_identity());
    }
}
