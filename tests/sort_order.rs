// tests/sort_order.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, tscribe_cmd};
use filetime::{set_file_mtime, FileTime};
use tempfile::tempdir;

fn headings(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.starts_with("### "))
        .map(|l| l.trim_start_matches("### ").to_string())
        .collect()
}

#[test]
fn test_alpha_sort_orders_by_basename() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "z.ts", "z")?;
    create_file(temp.path(), "a.ts", "a")?;
    create_file(temp.path(), "m.ts", "m")?;

    let output = tscribe_cmd()
        .args(["--sort", "alpha"])
        .current_dir(temp.path())
        .output()?;
    output.clone().assert().success();
    assert_eq!(headings(&output.stdout), vec!["a.ts", "m.ts", "z.ts"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_alpha_sort_is_numeric_aware() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "file10.ts", "10")?;
    create_file(temp.path(), "file2.ts", "2")?;
    create_file(temp.path(), "nested/file1.ts", "1")?;

    let output = tscribe_cmd()
        .args(["--sort", "alpha", "--no-fast-path"])
        .current_dir(temp.path())
        .output()?;
    output.clone().assert().success();
    assert_eq!(
        headings(&output.stdout),
        vec!["nested/file1.ts", "file2.ts", "file10.ts"]
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_mtime_sort_oldest_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    for (name, secs) in [("1.ts", 2_000), ("2.ts", 1_000), ("3.ts", 3_000)] {
        create_file(temp.path(), name, name)?;
        set_file_mtime(temp.path().join(name), FileTime::from_unix_time(secs, 0))?;
    }

    let output = tscribe_cmd()
        .args(["--sort", "mtime"])
        .current_dir(temp.path())
        .output()?;
    output.clone().assert().success();
    assert_eq!(headings(&output.stdout), vec!["2.ts", "1.ts", "3.ts"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_path_sort_is_repeatable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "b/b.ts", "b")?;
    create_file(temp.path(), "a/a.ts", "a")?;
    create_file(temp.path(), "c/c.ts", "c")?;

    let first = tscribe_cmd().current_dir(temp.path()).output()?;
    let second = tscribe_cmd().current_dir(temp.path()).output()?;
    first.clone().assert().success();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(headings(&first.stdout).len(), 3);

    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_sort_mode_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    tscribe_cmd()
        .args(["--sort", "size"])
        .current_dir(temp.path())
        .assert()
        .failure();
    temp.close()?;
    Ok(())
}
