use std::process::Command;

fn generate_images() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_generate-images"));
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn missing_api_key_exits_with_status_one() {
    let cwd = tempfile::tempdir().unwrap();
    let output = generate_images()
        .current_dir(cwd.path())
        .args(["--delay-ms", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GEMINI_API_KEY or API_KEY not found"),
        "stderr was: {stderr}"
    );
    // nothing is created relative to where the tool was started
    assert_eq!(std::fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn empty_api_key_is_treated_as_missing() {
    let output = generate_images()
        .env("GEMINI_API_KEY", "   ")
        .arg("list-models")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
