#![cfg(feature = "io-jsonl")]

use anyhow::Result;
use lazyseq::testing::*;
use std::process::Command;

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stream_demo"))
}

#[test]
fn demo_succeeds_and_prints_file_lines() -> Result<()> {
    let file = write_temp_lines(&["first demo line", "second demo line"])?;
    let output = demo()
        .arg("--lines-path")
        .arg(file.path())
        .args(["--seed", "7", "--limit", "3"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("second demo line"));
    assert!(stdout.contains("sum of ages: 109"));
    Ok(())
}

#[test]
fn demo_fails_when_lines_file_is_missing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = demo()
        .arg("--lines-path")
        .arg(dir.path().join("missing.txt"))
        .output()?;

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn demo_reads_people_from_jsonl() -> Result<()> {
    let lines = write_temp_lines(&["x"])?;
    let people = write_temp_lines(&[r#"{"name":"Ann","age":40}"#, r#"{"name":"Ben","age":2}"#])?;
    let output = demo()
        .arg("--lines-path")
        .arg(lines.path())
        .arg("--people")
        .arg(people.path())
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("sum of ages: 42"));
    Ok(())
}
