use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .bulbulrc.json"));

    let content = test.read_file(".bulbulrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"], serde_json::json!(["src"]));
    assert!(parsed.get("extensions").is_some());
    assert!(parsed.get("cwd").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".bulbulrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file(".bulbulrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.js", "Log.traceable('ready');\n")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/app.js")?,
        "Log.traceable('ready', 'src/app.js', 1);\n"
    );

    Ok(())
}
