// tests/filter_ignore.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, tscribe_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_ignore_skips_node_modules_and_dist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/app.ts", "app")?;
    create_file(temp.path(), "node_modules/x/y.ts", "dependency")?;
    create_file(temp.path(), "packages/web/node_modules/z.ts", "nested dependency")?;
    create_file(temp.path(), "dist/app.js.ts", "build output")?;

    tscribe_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### src/app.ts"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("dist").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_globstar_pattern_under_both_strategies() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "top.ts", "top")?;
    create_file(temp.path(), "node_modules/x/y.ts", "dependency")?;

    for extra in [None, Some("--no-fast-path")] {
        let mut cmd = tscribe_cmd();
        cmd.args(["--ignore", "node_modules/**"]).current_dir(temp.path());
        if let Some(flag) = extra {
            cmd.arg(flag);
        }
        cmd.assert()
            .success()
            .stdout("### top.ts\n\ntop");
    }

    temp.close()?;
    Ok(())
}

#[test]
fn test_brace_group_and_star_patterns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.ts", "a")?;
    create_file(temp.path(), "src/a.test.ts", "test")?;
    create_file(temp.path(), "src/a.spec.ts", "spec")?;
    create_file(temp.path(), "gen/out.ts", "generated")?;

    tscribe_cmd()
        .args(["--ignore", "**/*.{test,spec}.ts, gen/*"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("### src/a.ts\n\na");

    temp.close()?;
    Ok(())
}

#[test]
fn test_blank_ignore_keeps_everything() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "node_modules/x.ts", "dependency")?;

    tscribe_cmd()
        .args(["--ignore", ""])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### node_modules/x.ts"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_hidden_files_are_included() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), ".config/settings.ts", "hidden")?;

    tscribe_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### .config/settings.ts"));

    temp.close()?;
    Ok(())
}
