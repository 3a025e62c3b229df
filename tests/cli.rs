use assert_cmd::Command;
use cloc_tree::TreeNode;
use std::fs;

fn cloc_tree() -> Command {
    Command::cargo_bin("cloc-tree").unwrap()
}

#[test]
fn test_cli_help() {
    let output = cloc_tree().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--origin"));
    assert!(stdout.contains("<BASE>"));
}

#[test]
fn test_cli_version() {
    let output = cloc_tree().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_rejects_unknown_origin() {
    let output = cloc_tree().args(["--origin", "tokei", "base"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("tokei"));
}

#[test]
fn test_cli_requires_one_argument() {
    let output = cloc_tree().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<BASE>"));
    assert!(stderr.contains("Usage"));

    let output = cloc_tree().args(["one", "two"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("two"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_cli_converts_wc() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("repo.wc"), "10 a/b.txt\n5 a/c.txt\n15 total\n").unwrap();

    cloc_tree()
        .arg(dir.path().join("repo"))
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("repo.json")).unwrap();
    let tree: TreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(tree.name, "root");
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.total_size(), 15);
}

#[test]
fn test_cli_converts_cloc_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.csv");
    let output = dir.path().join("tree.json");
    fs::write(
        &input,
        "language,filename,blank,comment,code\nRust,src/lib.rs,1,2,30\nSUM,,1,2,30\n",
    )
    .unwrap();

    cloc_tree()
        .args(["--origin", "CLOC", "--pretty", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg(dir.path().join("unused"))
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["children"][0]["name"], "src");
    assert_eq!(value["children"][0]["children"][0]["codelang"], "Rust");
    assert_eq!(value["children"][0]["children"][0]["size"], 30);
}

#[test]
fn test_cli_empty_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("blank.wc"), "\n  \n").unwrap();

    cloc_tree()
        .arg(dir.path().join("blank"))
        .assert()
        .success();
    assert!(!dir.path().join("blank.json").exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cloc_tree()
        .arg(dir.path().join("missing"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read file"));
}
