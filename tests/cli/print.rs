use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_print_transformed_source() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.js",
        "\n\n\n\n\n\n\n\n\nLog.traceable('hello');\n",
    )?;

    let output = test.print_command().arg("src/a.js").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\n\n\n\n\n\n\n\n\nLog.traceable('hello', 'src/a.js', 10);\n"
    );
    // print never touches the file
    assert_eq!(
        test.read_file("src/a.js")?,
        "\n\n\n\n\n\n\n\n\nLog.traceable('hello');\n"
    );

    Ok(())
}

#[test]
fn test_print_with_cwd_override() -> Result<()> {
    let test = CliTest::with_file("packages/web/src/b.ts", "Log.traceable(1 as number);")?;

    let output = test
        .print_command()
        .args(["packages/web/src/b.ts", "--cwd", "packages/web"])
        .output()?;
    assert_eq!(stdout(&output), "Log.traceable(1 as number, 'src/b.ts', 1);");

    Ok(())
}

#[test]
fn test_print_uses_config_directory_as_root() -> Result<()> {
    let test = CliTest::with_file("app/.bulbulrc.json", "{}")?;
    test.write_file("app/src/c.js", "Log.traceable();")?;

    let output = test
        .print_command()
        .current_dir(test.root().join("app/src"))
        .arg("c.js")
        .output()?;
    assert_eq!(stdout(&output), "Log.traceable('src/c.js', 1);");

    Ok(())
}

#[test]
fn test_print_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "Log.traceable(")?;

    let output = test.print_command().arg("src/broken.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse"));

    Ok(())
}

#[test]
fn test_print_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.print_command().arg("nope.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));

    Ok(())
}
