use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn bitveil() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bitveil"))
}

/// Only the pixel data offset of the header is interpreted, the rest may stay zero.
fn write_carrier(path: &Path, pixel_bytes: usize) {
    let mut bitmap = vec![0u8; 54];
    bitmap[..2].copy_from_slice(b"BM");
    bitmap[10..14].copy_from_slice(&54u32.to_le_bytes());
    bitmap.extend((0..pixel_bytes).map(|i| (i * 7 % 256) as u8));
    fs::write(path, bitmap).unwrap();
}

#[test]
fn encode_then_decode_a_message() {
    let dir = TempDir::new().unwrap();
    let carrier = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.bmp");
    let unveiled = dir.path().join("message.txt");
    write_carrier(&carrier, 256);

    let status = bitveil()
        .args(["encode", "-m", "Hi"])
        .arg(&carrier)
        .arg(&secret)
        .status()
        .unwrap();
    assert!(status.success());

    let status = bitveil()
        .arg("decode")
        .arg(&secret)
        .arg(&unveiled)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&unveiled).unwrap(), b"Hi");
}

#[test]
fn decode_prints_to_stdout_without_output() {
    let dir = TempDir::new().unwrap();
    let carrier = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.bmp");
    let message_file = dir.path().join("message.txt");
    write_carrier(&carrier, 256);
    fs::write(&message_file, "from a file").unwrap();

    let status = bitveil()
        .arg("encode")
        .arg(&carrier)
        .arg(&secret)
        .arg("--message-file")
        .arg(&message_file)
        .status()
        .unwrap();
    assert!(status.success());

    let output = bitveil().arg("decode").arg(&secret).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"from a file");
}

#[test]
fn capacity_prints_bytes() {
    let dir = TempDir::new().unwrap();
    let carrier = dir.path().join("carrier.bmp");
    write_carrier(&carrier, 84);

    let output = bitveil().arg("capacity").arg(&carrier).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "10");
}

#[test]
fn capacity_failures_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let carrier = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.bmp");
    write_carrier(&carrier, 8);

    let output = bitveil()
        .args(["encode", "--message", "far too long"])
        .arg(&carrier)
        .arg(&secret)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Capacity"));
    assert!(!secret.exists());
}

#[test]
fn missing_input_exits_with_one() {
    let dir = TempDir::new().unwrap();

    let output = bitveil()
        .arg("decode")
        .arg(dir.path().join("missing.bmp"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
