use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn crcgen(args: &[&str], cwd: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crcgen"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GOPACKAGE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn crcgen")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("crcgen_cli_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_writes_default_file() {
    let dir = scratch_dir("default");
    let out = crcgen(&["--size", "8", "--poly", "0x9B", "--package", "crc"], &dir);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let src = fs::read_to_string(dir.join("crc8_table.rs")).unwrap();
    assert!(src.starts_with("// Code generated by \"crcgen --size 8 --poly 0x9B --package crc\"; DO NOT EDIT.\n"));
    assert!(src.contains("pub mod crc {"));
    assert!(src.contains("        0x00, 0x9B, 0xAD, 0x36, 0xC1, 0x5A, 0x6C, 0xF7,\n"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_package_from_environment() {
    let dir = scratch_dir("env");
    let out = Command::new(env!("CARGO_BIN_EXE_crcgen"))
        .args(["--size", "16", "--poly", "4129", "--lang", "go", "-o", "-"])
        .current_dir(&dir)
        .env("GOPACKAGE", "checksum")
        .output()
        .unwrap();
    assert!(out.status.success());

    let src = String::from_utf8(out.stdout).unwrap();
    assert!(src.contains("\npackage checksum\n"));
    assert!(src.contains("with polynomial 0x1021."));
    assert!(src.contains("var crc16Table = []uint16{\n"));
    assert!(fs::read_dir(&dir).unwrap().next().is_none(), "stdout mode wrote a file");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_usage_errors_exit_with_status_2() {
    let dir = scratch_dir("usage");
    let cases: &[&[&str]] = &[
        &["--size", "12", "--poly", "7", "--package", "crc"],
        &["--size", "8", "--poly", "0", "--package", "crc"],
        &["--size", "8", "--poly", "0x107", "--package", "crc"],
        &["--size", "8", "--poly", "7", "--package", "crc-8"],
        &["--size", "8", "--poly", "7"],
        &["--poly", "7", "--package", "crc"],
    ];
    for args in cases {
        let out = crcgen(args, &dir);
        assert_eq!(out.status.code(), Some(2), "{:?}: {}", args, String::from_utf8_lossy(&out.stderr));
    }
    assert!(fs::read_dir(&dir).unwrap().next().is_none(), "usage error wrote a file");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unwritable_destination_fails() {
    let dir = scratch_dir("unwritable");
    let target = dir.join("crc8_table.rs");
    fs::create_dir_all(target.join("occupied")).unwrap();

    let out = crcgen(&["--size", "8", "--poly", "7", "--package", "crc"], &dir);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot write"));
    assert!(target.is_dir());
    let _ = fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_output_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = scratch_dir("non_utf8");
    let name = OsStr::from_bytes(b"t\xff.rs");
    let out = Command::new(env!("CARGO_BIN_EXE_crcgen"))
        .args(["--size", "8", "--poly", "7", "--package", "crc", "-o"])
        .arg(name)
        .current_dir(&dir)
        .env_remove("GOPACKAGE")
        .output()
        .unwrap();
    assert!(out.status.success(), "{:?}: {}", out.status, String::from_utf8_lossy(&out.stderr));

    let src = fs::read_to_string(dir.join(name)).unwrap();
    assert!(src.starts_with("// Code generated by \"crcgen --size 8 --poly 7 --package crc -o t\u{FFFD}.rs\"; DO NOT EDIT.\n"));
    let _ = fs::remove_dir_all(&dir);
}
