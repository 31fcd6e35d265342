use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_marks-predictor"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_artifact_halts_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("model file 'ols_model.json' not found"), "{stderr}");
    assert!(stderr.contains("Please provide the model file."), "{stderr}");

    let log = fs::read_to_string(dir.path().join("marks-predictor.log")).unwrap();
    assert!(!log.contains("predicted"), "{log}");
}

#[test]
fn corrupt_artifact_halts_without_upload_hint() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ols_model.json"), "{ not json").unwrap();

    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("model file 'ols_model.json' is not a valid artifact"), "{stderr}");
    assert!(!stderr.contains("Please provide the model file."), "{stderr}");
}

#[test]
fn configured_artifact_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("marks-predictor.json"),
        r#"{ "artifact_path": "models/marks.json" }"#,
    )
    .unwrap();

    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("model file 'models/marks.json' not found"), "{stderr}");
}
