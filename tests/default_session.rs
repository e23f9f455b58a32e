//! Integration tests for the process-wide default session.
//!
//! The default session is shared by every test in this binary, so only
//! `default_session_lifecycle` mutates it, under a lock shared with the
//! tests that read its configuration.

use std::sync::Mutex;
use std::thread;

use sessionlog::{
    DEFAULT_SESSION_NAME, ENV_LOGGING, ENV_MODE, ENV_NAME, ENV_THRESHOLD, Emission, Mode,
    SessionError, SessionPhase, VerboseLevel, default_session,
};

static TEST_LOCK: Mutex<()> = Mutex::new(());

fn environment_is_clean() -> bool {
    [ENV_NAME, ENV_MODE, ENV_LOGGING, ENV_THRESHOLD]
        .iter()
        .all(|key| std::env::var_os(key).is_none())
}

// ============================================================================
// Initialization Tests
// ============================================================================

/// Verifies that every caller observes the same session.
#[test]
fn concurrent_first_use_yields_one_session() {
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| std::ptr::from_ref(default_session()) as usize))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

/// Verifies the bootstrap configuration when no overrides are set.
#[test]
fn default_configuration_without_environment() {
    let _lock = TEST_LOCK.lock().unwrap();
    if !environment_is_clean() {
        return;
    }
    let session = default_session();
    assert_eq!(session.name(), DEFAULT_SESSION_NAME);
    assert_eq!(session.mode(), Mode::Development);
    assert!(!session.logging_enabled());
    assert!(session.owner_id().is_some());
    assert!(session.started_at().is_some());
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Verifies facade emission across stop and restart.
#[test]
fn default_session_lifecycle() {
    let _lock = TEST_LOCK.lock().unwrap();
    let session = default_session();
    session.start("facade", Mode::Development, false, VerboseLevel::Error);
    assert_eq!(session.phase(), SessionPhase::Active);

    assert_eq!(
        sessionlog::emit!(VerboseLevel::Info, "suppressed").unwrap(),
        Emission::Suppressed
    );
    assert_eq!(
        sessionlog::emit!(VerboseLevel::Critical, "facade", "emitted").unwrap(),
        Emission::Emitted
    );
    assert_eq!(
        sessionlog::emit_framed(VerboseLevel::Error, &[&"framed"]).unwrap(),
        Emission::Emitted
    );

    session.stop();
    assert!(matches!(
        sessionlog::emit(VerboseLevel::Critical, &[&"late"]),
        Err(SessionError::Inactive)
    ));
    sessionlog::critical!("ignored while stopped");

    session.start_with(sessionlog::SessionConfig::default());
    assert!(session.is_active());
    assert_eq!(session.ended_at(), None);
}
