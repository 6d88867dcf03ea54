// Unit tests for logger module initialization logic
// Tests focus on repeat calls and error handling

use crate::logger::{initialize, terminal_level};

use std::path::PathBuf;

use log::LevelFilter;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Tests and the binary may both initialize logging. If the
/// second call panics, fern's global logger would crash the process.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), false);
    let result2 = initialize(temp_dir.path(), true);

    // THEN: Both return Ok (the second only logs a warning)
    assert!(result1.is_ok() || result2.is_ok());
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: The terminal stays silent unless `--verbose` is passed.
///
/// **WHY THIS MATTERS**: Command output goes to stdout and errors are printed as
/// one sentence. Log lines on top would bury both.
///
/// **BUG THIS CATCHES**: Would catch the verbose flag being ignored.
#[test]
fn given_verbose_flag_when_terminal_level_then_only_verbose_shows_logs() {
    assert_eq!(terminal_level(false), LevelFilter::Off);
    assert!(terminal_level(true) >= LevelFilter::Info);
}

#[test]
fn given_unwritable_log_dir_when_initialized_first_then_returns_error_or_is_already_set() {
    // GIVEN: A path that cannot hold a log file
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Calling initialize
    let result = initialize(&invalid_dir, false);

    // THEN: Either the guard already tripped in another test (Ok) or creation failed
    if let Err(err) = result {
        assert!(format!("{err:?}").contains("Fyw"));
    }
}
