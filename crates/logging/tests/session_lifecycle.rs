//! Integration tests for the session lifecycle.
//!
//! These tests drive a session through start, stop, and restart and check
//! that emission is accepted only while active, that timestamps stay
//! ordered, and that a restart fully replaces the configuration.

use std::thread;
use std::time::Duration;

use logging::{
    Emission, Mode, Session, SessionConfig, SessionError, SessionPhase, VerboseLevel,
    current_identity,
};
use logging_sink::SharedBuffer;

fn session() -> (Session, SharedBuffer) {
    let output = SharedBuffer::new();
    (Session::with_writer(output.clone()), output)
}

// ============================================================================
// Inactive Session Tests
// ============================================================================

/// Verifies that no level is written before the first start.
#[test]
fn nothing_is_written_before_start() {
    let (session, output) = session();
    for level in VerboseLevel::ALL {
        let result = session.emit(level, &[&"early"]);
        assert!(result.is_err_and(|err| err.is_inactive()));
    }
    assert!(output.is_empty());
}

/// Verifies that no level is written after stop.
#[test]
fn nothing_is_written_after_stop() {
    let (session, output) = session();
    session.start("svc", Mode::Development, true, VerboseLevel::Trace);
    session.stop();
    for level in VerboseLevel::ALL {
        assert!(matches!(
            session.emit(level, &[&"late"]),
            Err(SessionError::Inactive)
        ));
    }
    assert!(output.is_empty());
}

/// Verifies the inactive error message.
#[test]
fn inactive_error_message() {
    let (session, _) = session();
    let err = session
        .emit(VerboseLevel::Info, &[&"x"])
        .expect_err("session never started");
    assert_eq!(err.to_string(), "cannot emit while the session is not active");
}

// ============================================================================
// Phase Transition Tests
// ============================================================================

/// Verifies every phase transition in order.
#[test]
fn phases_follow_start_and_stop() {
    let (session, _) = session();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);

    session.stop();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);

    session.start("svc", Mode::Development, false, VerboseLevel::Info);
    assert_eq!(session.phase(), SessionPhase::Active);

    session.start("svc", Mode::Development, false, VerboseLevel::Info);
    assert_eq!(session.phase(), SessionPhase::Active);

    session.stop();
    assert_eq!(session.phase(), SessionPhase::Stopped);

    session.stop();
    assert_eq!(session.phase(), SessionPhase::Stopped);

    session.start("svc", Mode::Development, false, VerboseLevel::Info);
    assert_eq!(session.phase(), SessionPhase::Active);
}

/// Verifies that stopping leaves `ended_at` at or after `started_at`.
#[test]
fn end_is_never_before_start() {
    let (session, _) = session();
    session.start("svc", Mode::Production, false, VerboseLevel::Warning);
    thread::sleep(Duration::from_millis(2));
    session.stop();

    let snapshot = session.snapshot();
    let started = snapshot.started_at.expect("started");
    let ended = snapshot.ended_at.expect("ended");
    assert!(ended >= started);
}

/// Verifies that a restart clears the end time and moves the start time.
#[test]
fn restart_moves_start_and_clears_end() {
    let (session, output) = session();
    session.start("first", Mode::Development, false, VerboseLevel::Error);
    let first_start = session.started_at().expect("started");
    session.stop();
    thread::sleep(Duration::from_millis(2));

    session.start("second", Mode::Production, false, VerboseLevel::Trace);
    assert_eq!(session.ended_at(), None);
    assert!(session.started_at().expect("restarted") >= first_start);

    assert_eq!(
        session.emit(VerboseLevel::Trace, &[&"again"]).unwrap(),
        Emission::Emitted
    );
    assert_eq!(output.contents(), "again\n");
}

/// Verifies that start records the caller identity.
#[test]
fn start_records_owner() {
    let (session, _) = session();
    assert_eq!(session.owner_id(), None);
    session.start_with(SessionConfig::default());
    assert_eq!(session.owner_id(), Some(current_identity()));
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Verifies that a restart replaces every configured field.
#[test]
fn restart_replaces_configuration() {
    let (session, _) = session();
    session.start("first", Mode::Development, true, VerboseLevel::Critical);
    session.start("second", Mode::Production, false, VerboseLevel::Trace);

    let config = session.config();
    assert_eq!(config.name, "second");
    assert_eq!(config.mode, Mode::Production);
    assert!(!config.logging_enabled);
    assert_eq!(config.threshold, VerboseLevel::Trace);
}

/// Verifies that threshold changes take effect without restarting.
#[test]
fn threshold_change_applies_immediately() {
    let (session, output) = session();
    session.start("svc", Mode::Development, false, VerboseLevel::Critical);
    assert_eq!(
        session.emit(VerboseLevel::Warning, &[&"hidden"]).unwrap(),
        Emission::Suppressed
    );

    session.set_threshold(VerboseLevel::Warning);
    assert_eq!(
        session.emit(VerboseLevel::Warning, &[&"shown"]).unwrap(),
        Emission::Emitted
    );
    assert_eq!(output.contents(), "shown\n");
}

/// Verifies that configuration parsed from option tokens starts a session.
#[test]
fn session_starts_from_parsed_options() {
    let (session, output) = session();
    let config =
        SessionConfig::from_options(["name=cli", "mode=prod", "threshold=warning"]).unwrap();
    session.start_with(config);

    assert_eq!(session.name(), "cli");
    assert_eq!(session.mode(), Mode::Production);
    session.emit(VerboseLevel::Info, &[&"quiet"]).unwrap();
    session.emit(VerboseLevel::Error, &[&"loud"]).unwrap();
    assert_eq!(output.contents(), "loud\n");
}
