use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_saltybox"))
}

fn run(args: &[&str], passphrase: &str) -> std::process::Output {
    Command::new(bin())
        .args(args)
        .env("SALTYBOX_PASSPHRASE", passphrase)
        .output()
        .expect("spawn saltybox")
}

#[test]
fn test_encrypt_decrypt_update_flow() {
    let dir = tempdir().expect("create temp dir");
    let plain = dir.path().join("plain");
    let encrypted = dir.path().join("encrypted");
    let recovered = dir.path().join("recovered");

    fs::write(&plain, b"super secret").expect("write plaintext");

    let output = run(
        &[
            "encrypt",
            "-i",
            plain.to_str().unwrap(),
            "-o",
            encrypted.to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success(), "encrypt failed: {:?}", output);
    assert!(fs::read_to_string(&encrypted)
        .expect("read encrypted")
        .starts_with("saltybox1:"));

    let output = run(
        &[
            "decrypt",
            "-i",
            encrypted.to_str().unwrap(),
            "-o",
            recovered.to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success(), "decrypt failed: {:?}", output);
    assert_eq!(fs::read(&recovered).expect("read recovered"), b"super secret");

    // Update with the wrong passphrase must fail and leave the file alone.
    let new_plain = dir.path().join("newplain");
    fs::write(&new_plain, b"updated secret").expect("write new plaintext");
    let before = fs::read(&encrypted).expect("read encrypted");

    let output = run(
        &[
            "update",
            "-i",
            new_plain.to_str().unwrap(),
            "-o",
            encrypted.to_str().unwrap(),
        ],
        "wrong",
    );
    assert!(!output.status.success());
    assert_eq!(fs::read(&encrypted).expect("read encrypted"), before);

    // Update with the right passphrase replaces the contents.
    let output = run(
        &[
            "update",
            "-i",
            new_plain.to_str().unwrap(),
            "-o",
            encrypted.to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success(), "update failed: {:?}", output);

    let output = run(
        &[
            "decrypt",
            "-i",
            encrypted.to_str().unwrap(),
            "-o",
            recovered.to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success());
    assert_eq!(fs::read(&recovered).expect("read recovered"), b"updated secret");
}

#[test]
fn test_wrong_passphrase_exits_nonzero_with_message() {
    let dir = tempdir().expect("create temp dir");
    let plain = dir.path().join("plain");
    let encrypted = dir.path().join("encrypted");
    let recovered = dir.path().join("recovered");

    fs::write(&plain, b"secret").expect("write plaintext");
    let output = run(
        &[
            "encrypt",
            "-i",
            plain.to_str().unwrap(),
            "-o",
            encrypted.to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success());

    let output = run(
        &[
            "decrypt",
            "-i",
            encrypted.to_str().unwrap(),
            "-o",
            recovered.to_str().unwrap(),
        ],
        "wrong",
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad passphrase"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file_exits_nonzero() {
    let dir = tempdir().expect("create temp dir");
    let output = run(
        &[
            "encrypt",
            "-i",
            dir.path().join("missing").to_str().unwrap(),
            "-o",
            dir.path().join("out").to_str().unwrap(),
        ],
        "test",
    );
    assert!(!output.status.success());
}

#[test]
fn test_passphrase_read_from_stdin_when_not_a_terminal() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = tempdir().expect("create temp dir");
    let plain = dir.path().join("plain");
    let encrypted = dir.path().join("encrypted");

    fs::write(&plain, b"secret").expect("write plaintext");

    // No SALTYBOX_PASSPHRASE and no TTY: the passphrase comes from stdin.
    let mut child = Command::new(bin())
        .args([
            "encrypt",
            "-i",
            plain.to_str().unwrap(),
            "-o",
            encrypted.to_str().unwrap(),
        ])
        .env_remove("SALTYBOX_PASSPHRASE")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn saltybox");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"test")
        .expect("write passphrase");
    let status = child.wait().expect("wait for saltybox");
    assert!(status.success());

    let output = run(
        &[
            "decrypt",
            "-i",
            encrypted.to_str().unwrap(),
            "-o",
            dir.path().join("recovered").to_str().unwrap(),
        ],
        "test",
    );
    assert!(output.status.success());
    assert_eq!(
        fs::read(dir.path().join("recovered")).expect("read recovered"),
        b"secret"
    );
}
