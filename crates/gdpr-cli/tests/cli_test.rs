use std::path::Path;
use std::process::{Command, Output};

fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("config.toml");
    let content = format!(
        "[store]\nbackend = \"local\"\nroot = {:?}\n\n[redaction]\ndefault_fields = [\"email\"]\n",
        dir.join("store").display().to_string()
    );
    std::fs::write(&config_path, content).unwrap();
    config_path
}

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gdpr-obfuscator"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn test_obfuscate_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let bucket = dir.path().join("store/bucket");
    std::fs::create_dir_all(&bucket).unwrap();
    std::fs::write(bucket.join("people.csv"), "id,name,email\n1,John Smith,j@x.com\n").unwrap();

    let output = run(
        &config,
        &[
            "obfuscate",
            "--request",
            r#"{"file_to_obfuscate": "s3://bucket/people.csv", "pii_fields": ["name", "email"]}"#,
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "id,name,email\n1,***,***\n");
}

#[test]
fn test_obfuscate_back_into_store_with_default_fields() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let bucket = dir.path().join("store/bucket");
    std::fs::create_dir_all(&bucket).unwrap();
    std::fs::write(
        bucket.join("people.json"),
        r#"[{"id":1,"email":"a@x.com"},{"id":2}]"#,
    )
    .unwrap();

    let output = run(
        &config,
        &[
            "obfuscate",
            "--location",
            "s3://bucket/people.json",
            "--output",
            "s3://bucket/clean/people.json",
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let written = std::fs::read_to_string(bucket.join("clean/people.json")).unwrap();
    assert_eq!(written, r#"[{"id":1,"email":"***"},{"id":2}]"#);
}

#[test]
fn test_invalid_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let output = run(&config, &["obfuscate", "--location", "invalid_url", "-f", "name"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid S3 URL"));
}
