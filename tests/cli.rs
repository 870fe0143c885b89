use std::fs;
use std::process::Command;

const RECORD: usize = 94;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ach-toggle"))
}

#[test]
fn test_no_argument_is_silent_success() {
    let dir = tempfile::tempdir().unwrap();
    let out = bin().current_dir(dir.path()).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_toggles_file_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.ach");
    let content = format!("{}{}", "1".repeat(RECORD), "9".repeat(RECORD));
    fs::write(&path, &content).unwrap();

    let out = bin().arg(&path).output().unwrap();

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("unsplit -> split"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\n{}\n", "1".repeat(RECORD), "9".repeat(RECORD))
    );
}

#[test]
fn test_short_file_message_and_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.ach");
    fs::write(&path, "X".repeat(50)).unwrap();

    let out = bin().arg(&path).output().unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Nothing to do"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "X".repeat(50));
}

#[cfg(unix)]
#[test]
fn test_missing_file_exits_with_os_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ach");

    let out = bin().arg(&path).output().unwrap();

    // ENOENT
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}

#[test]
fn test_crlf_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.ach");
    fs::write(&path, format!("{}{}", "1".repeat(RECORD), "5".repeat(RECORD))).unwrap();

    let out = bin().arg("--crlf").arg(&path).output().unwrap();

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\r\n{}\r\n", "1".repeat(RECORD), "5".repeat(RECORD))
    );
}
