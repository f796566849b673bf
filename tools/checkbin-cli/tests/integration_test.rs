//! Integration tests for the checkbin binary
//!
//! Tests the full pipeline: write input -> pack -> extract -> verify output

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn checkbin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_checkbin"))
        .args(args)
        .output()
        .expect("Failed to run checkbin")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Test text -> .bin -> JSON on stdout
#[test]
fn test_pack_then_extract_stdout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let list = dir.path().join("paths.txt");
    let bin = dir.path().join("check.bin");
    std::fs::write(&list, "a\n\nbb\n").unwrap();

    let pack = checkbin(&["pack", path_str(&list), path_str(&bin)]);
    assert!(pack.status.success(), "pack failed: {:?}", pack);

    let data = std::fs::read(&bin).expect("Failed to read packed file");
    assert_eq!(data.len(), 552);
    assert_eq!(
        &data[..16],
        &[
            0xD8, 0x07, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x02, 0x00,
            0x00, 0x00
        ]
    );

    let extract = checkbin(&["extract", path_str(&bin)]);
    assert!(extract.status.success(), "extract failed: {:?}", extract);

    let stdout = String::from_utf8(extract.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "header": { "magic": 2008, "version": 1, "flags": 7, "count": 2 },
            "entries": ["a", "bb"],
            "metadata": [0, 0]
        })
    );
}

/// Test extract -o output can be packed again byte-for-byte
#[test]
fn test_extract_document_repacks_identically() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json = dir.path().join("in.json");
    let first = dir.path().join("first.bin");
    let doc = dir.path().join("doc.json");
    let second = dir.path().join("second.bin");
    std::fs::write(
        &json,
        r#"{"paths": ["data/ü.pak", "data/b.pak"], "metadata": [1, 2]}"#,
    )
    .unwrap();

    let header = ["--header", "5", "6", "7"];
    let mut args = vec!["pack", path_str(&json), path_str(&first)];
    args.extend(header);
    assert!(checkbin(&args).status.success());

    let extract = checkbin(&["extract", path_str(&first), "-o", path_str(&doc)]);
    assert!(extract.status.success());
    assert!(extract.stdout.is_empty(), "nothing on stdout with -o");

    let mut args = vec!["pack", path_str(&doc), path_str(&second)];
    args.extend(header);
    assert!(checkbin(&args).status.success());

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

/// Test codec failures exit non-zero
#[test]
fn test_failures_exit_nonzero() {
    let dir = tempdir().expect("Failed to create temp dir");

    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "   \n").unwrap();
    let out = dir.path().join("never.bin");
    let pack = checkbin(&["pack", path_str(&empty), path_str(&out)]);
    assert!(!pack.status.success());
    assert!(String::from_utf8_lossy(&pack.stderr).contains("No entries found to pack"));
    assert!(!out.exists());

    let long = dir.path().join("long.txt");
    std::fs::write(&long, "x".repeat(261)).unwrap();
    let pack = checkbin(&["pack", path_str(&long), path_str(&out)]);
    assert!(!pack.status.success());

    let broken = dir.path().join("broken.bin");
    std::fs::write(&broken, [0u8; 10]).unwrap();
    let extract = checkbin(&["extract", path_str(&broken)]);
    assert!(!extract.status.success());
    assert!(extract.stdout.is_empty());
}

/// Test a repeated --header keeps the last triple
#[test]
fn test_repeated_header_last_wins() {
    let dir = tempdir().expect("Failed to create temp dir");
    let list = dir.path().join("paths.txt");
    let bin = dir.path().join("check.bin");
    std::fs::write(&list, "only\n").unwrap();

    let pack = checkbin(&[
        "pack",
        path_str(&list),
        path_str(&bin),
        "--header",
        "1",
        "2",
        "3",
        "--header",
        "4",
        "5",
        "6",
    ]);
    assert!(pack.status.success(), "pack failed: {:?}", pack);

    let data = std::fs::read(&bin).unwrap();
    assert_eq!(
        &data[..16],
        &[4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0, 0]
    );
}

/// Test info prints the header summary
#[test]
fn test_info() {
    let dir = tempdir().expect("Failed to create temp dir");
    let list = dir.path().join("paths.txt");
    let bin = dir.path().join("check.bin");
    std::fs::write(&list, "one\ntwo\nthree\n").unwrap();
    assert!(checkbin(&["pack", path_str(&list), path_str(&bin)])
        .status
        .success());

    let info = checkbin(&["info", path_str(&bin)]);
    assert!(info.status.success());
    let stdout = String::from_utf8(info.stdout).unwrap();
    assert!(stdout.contains("Entries:  3"));
    assert!(stdout.contains(&format!("Size:     {} bytes", 16 + 3 * 264)));
}
