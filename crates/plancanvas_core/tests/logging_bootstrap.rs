use plancanvas_core::{default_log_level, init_logging, logging_status};

// Logging state is process-global, so the whole lifecycle lives in one test.
#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    // The logger holds its file open for the rest of the process, so the
    // directory must outlive the TempDir guard.
    let log_dir = tempfile::tempdir().unwrap().into_path();
    let log_dir_str = log_dir.to_str().unwrap().to_string();

    assert!(["debug", "info"].contains(&default_log_level()));

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("info", &log_dir_str).expect("same config should be idempotent");
    init_logging(" INFO ", &log_dir_str).expect("level matching is case-insensitive");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let other_dir = tempfile::tempdir().unwrap();
    let dir_error = init_logging("info", other_dir.path().to_str().unwrap())
        .expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir);
}

#[test]
fn invalid_inputs_are_rejected_with_readable_errors() {
    let err = init_logging("loud", "/tmp").expect_err("unknown level must fail");
    assert!(err.contains("unsupported log level"));

    let err = init_logging("info", "relative/logs").expect_err("relative dir must fail");
    assert!(err.contains("absolute"));
}
