// Integration test for config-driven time fields
use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use walktime::commands::parse;
use walktime::config::ClockFormat;
use walktime::{Config, FieldError, ParsedTime, TimeField};

#[test]
fn test_optional_field_from_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[field]
required = false
invalid_message = "Try something like 9:30am."

[output]
format = "12h"
"#,
    )?;

    let config = Config::load_from(&config_path)?;
    let field = TimeField::from_config(&config.field);

    assert_eq!(field.clean("")?, None);
    assert_eq!(field.clean("9:30am")?, ParsedTime::from_hms(9, 30, 0));

    let err = field.clean("half nine").unwrap_err();
    assert!(matches!(err, FieldError::Invalid { .. }));
    assert_eq!(err.to_string(), "Try something like 9:30am.");

    let mut out = Vec::new();
    let inputs = vec!["1930".to_string(), " ".to_string()];
    parse::execute(&field, &inputs, config.output.format, false, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "\"1930\" => 7:30 PM\n\" \" => (no value)\n");

    Ok(())
}

#[test]
fn test_required_field_reports_blank_lines_in_parse() {
    let field = TimeField::default();
    let inputs = vec!["".to_string()];
    let mut out = Vec::new();

    let result = parse::execute(&field, &inputs, ClockFormat::TwentyFour, false, &mut out);
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "\"\" => error: This field is required.\n");
}
