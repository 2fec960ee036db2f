use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALUES: &str = r#"
alertmanager:
  enabled: false
  namespaceOverride: ""
  annotations:
    snooze: true
  apiVersion: "v2"
"#;

fn write_values(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("values.yaml");
    fs::write(&path, VALUES).unwrap();
    path
}

/// Runs the binary with an isolated HOME so no user config leaks in.
fn yamlflat(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yamlflat").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_flattens_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);

    yamlflat(&dir)
        .arg("-f")
        .arg(&path)
        .args(["-e", "alertmanager"])
        .assert()
        .success()
        .stdout(
            "alertmanager.enabled: false\nalertmanager.annotations.snooze: true\nalertmanager.apiVersion: v2\n",
        );
}

#[test]
fn test_cli_equals_separator_and_depth() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);

    yamlflat(&dir)
        .arg("--file")
        .arg(&path)
        .args(["--symbol", "=", "--depth", "1"])
        .assert()
        .success()
        .stdout("alertmanager=<object>\n");
}

#[test]
fn test_cli_negative_depth_is_unlimited() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);

    yamlflat(&dir)
        .arg("-f")
        .arg(&path)
        .args(["-d", "-1", "-A"])
        .assert()
        .success()
        .stdout(
            "alertmanager.enabled: false\nalertmanager.namespaceOverride: \nalertmanager.annotations.snooze: true\nalertmanager.apiVersion: v2\n",
        );
}

#[test]
fn test_cli_rejects_bad_separator() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);

    yamlflat(&dir)
        .arg("-f")
        .arg(&path)
        .args(["-s", "->"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_cli_missing_key_fails_without_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);
    let output = dir.path().join("out.txt");

    yamlflat(&dir)
        .arg("-f")
        .arg(&path)
        .args(["-e", "alertmanager.missing"])
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_values(&dir);
    let output = dir.path().join("out.txt");

    yamlflat(&dir)
        .arg("-f")
        .arg(&path)
        .args(["-e", "alertmanager.annotations"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "alertmanager.annotations.snooze: true\n"
    );
}

#[test]
fn test_cli_reads_stdin() {
    let dir = TempDir::new().unwrap();

    yamlflat(&dir)
        .args(["-e", "a"])
        .write_stdin("a:\n  b: [1, 2]\n")
        .assert()
        .success()
        .stdout("a.b[0]: 1\na.b[1]: 2\n");
}

#[test]
fn test_cli_strict_index() {
    let dir = TempDir::new().unwrap();

    yamlflat(&dir)
        .args(["-e", "a[x]"])
        .write_stdin("a: [1, 2]\n")
        .assert()
        .success()
        .stdout("a[x]: 1\n");

    yamlflat(&dir)
        .args(["-e", "a[x]", "--strict-index"])
        .write_stdin("a: [1, 2]\n")
        .assert()
        .failure();
}

#[test]
fn test_cli_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("yamlflat");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "separator = \"=\"\n").unwrap();

    yamlflat(&dir)
        .write_stdin("a: 1\n")
        .assert()
        .success()
        .stdout("a=1\n");

    yamlflat(&dir)
        .args(["-s", ": "])
        .write_stdin("a: 1\n")
        .assert()
        .success()
        .stdout("a: 1\n");
}
