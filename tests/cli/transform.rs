use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"import { Log } from 'bulbul';

export function login(user) {
  Log.traceable('User logged in', user.id);
  console.log('not touched');
}
"#;

#[test]
fn test_transform_dry_run_lists_call_sites() -> Result<()> {
    let test = CliTest::with_file("src/auth.js", APP)?;

    let output = test.transform_command().output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    src/auth.js
      + src/auth.js:4
    Would rewrite 1 call site(s) in 1 file(s). Run with --apply to write changes.
    ");
    assert_eq!(test.read_file("src/auth.js")?, APP);

    Ok(())
}

#[test]
fn test_transform_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("src/auth.js", APP)?;
    test.write_file("src/nested/page.tsx", "export const P = () => <b>{Log.traceable()}</b>;\n")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rewrote 2 call site(s) in 2 file(s)"));

    assert_eq!(
        test.read_file("src/auth.js")?,
        APP.replace(
            "Log.traceable('User logged in', user.id);",
            "Log.traceable('User logged in', user.id, 'src/auth.js', 4);"
        )
    );
    assert_eq!(
        test.read_file("src/nested/page.tsx")?,
        "export const P = () => <b>{Log.traceable('src/nested/page.tsx', 1)}</b>;\n"
    );

    Ok(())
}

#[test]
fn test_transform_apply_twice_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/auth.js", APP)?;

    test.transform_command().arg("--apply").output()?;
    let once = test.read_file("src/auth.js")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(stdout(&output).contains("No Log.traceable() calls to rewrite"));
    assert_eq!(test.read_file("src/auth.js")?, once);

    Ok(())
}

#[test]
fn test_transform_explicit_paths() -> Result<()> {
    let test = CliTest::with_file("lib/a.js", "Log.traceable('a');")?;
    test.write_file("lib/b.js", "Log.traceable('b');")?;
    test.write_file("src/c.js", "Log.traceable('c');")?;

    let output = test.transform_command().args(["lib/a.js", "--apply"]).output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("lib/a.js")?, "Log.traceable('a', 'lib/a.js', 1);");
    assert_eq!(test.read_file("lib/b.js")?, "Log.traceable('b');");
    assert_eq!(test.read_file("src/c.js")?, "Log.traceable('c');");

    Ok(())
}

#[test]
fn test_transform_respects_config() -> Result<()> {
    let test = CliTest::with_file(
        ".bulbulrc.json",
        r#"{ "includes": ["app"], "ignores": ["**/generated/**"], "extensions": ["js"], "cwd": "app" }"#,
    )?;
    test.write_file("app/main.js", "Log.traceable('main');")?;
    test.write_file("app/generated/out.js", "Log.traceable('gen');")?;
    test.write_file("app/types.ts", "Log.traceable('ts');")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("app/main.js")?, "Log.traceable('main', 'main.js', 1);");
    assert_eq!(test.read_file("app/generated/out.js")?, "Log.traceable('gen');");
    assert_eq!(test.read_file("app/types.ts")?, "Log.traceable('ts');");

    Ok(())
}

#[test]
fn test_transform_reports_parse_errors_and_continues() -> Result<()> {
    let test = CliTest::with_file("src/good.js", "Log.traceable('ok');")?;
    test.write_file("src/bad.js", "Log.traceable(")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not be transformed"));
    assert_eq!(test.read_file("src/good.js")?, "Log.traceable('ok', 'src/good.js', 1);");
    assert_eq!(test.read_file("src/bad.js")?, "Log.traceable(");

    Ok(())
}

#[test]
fn test_transform_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.transform_command().arg("nope").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path does not exist"));

    Ok(())
}

#[test]
fn test_transform_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".bulbulrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.transform_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}
