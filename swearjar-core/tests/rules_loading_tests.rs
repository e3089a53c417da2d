// swearjar-core/tests/rules_loading_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use swearjar_core::{Engine, RuleSet, RuleStore, SwearjarError};

fn write_rules(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_rules(
        r#"
simple:
  Frak: [inappropriate]
regex:
  "fel+gercarb": [inappropriate]
"#,
    )?;
    let rules = RuleSet::load_from_file(file.path())?;
    assert_eq!(rules.simple_len(), 1);
    assert!(rules.lookup("frak").is_some());
    assert_eq!(rules.patterns().len(), 1);

    let engine = Engine::new(rules);
    assert!(engine.profane("FRAK"));
    assert!(engine.profane("felllgercarb"));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = RuleSet::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, SwearjarError::Io { .. }));
}

#[test]
fn test_missing_regex_section_is_config_error() -> Result<()> {
    let file = write_rules("simple:\n  frak: [inappropriate]\n")?;
    let err = RuleSet::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SwearjarError::Config(_)));
    Ok(())
}

#[test]
fn test_wrong_shape_is_config_error() -> Result<()> {
    let file = write_rules("simple: [frak]\nregex:\n  x: [y]\n")?;
    assert!(matches!(
        RuleSet::load_from_file(file.path()),
        Err(SwearjarError::Config(_))
    ));
    Ok(())
}

#[test]
fn test_malformed_yaml_is_config_error() {
    assert!(matches!(
        RuleSet::from_yaml_str("simple: {unterminated"),
        Err(SwearjarError::Config(_))
    ));
}

#[test]
fn test_bad_pattern_is_pattern_error() {
    let err = RuleSet::from_yaml_str("simple:\n  a: [x]\nregex:\n  \"[oops\": [x]\n").unwrap_err();
    assert!(err.is_pattern_error());
    assert!(err.to_string().contains("[oops"));
}

#[test]
fn test_custom_tags_are_opaque() {
    let rules = RuleSet::from_yaml_str("simple:\n  gorp: [Spicy]\nregex:\n  zz+: [mild]\n").unwrap();
    let engine = Engine::new(rules);
    assert_eq!(engine.scorecard("gorp").get("Spicy"), Some(&1));
    assert!(engine.contains_type("zzz", ["MILD"]));
}

#[test]
fn test_store_reload_from_file() -> Result<()> {
    let store = RuleStore::with_default_rules()?;
    let old = store.snapshot();
    let file = write_rules("simple:\n  frak: [inappropriate]\nregex:\n  zz+: [x]\n")?;

    store.reload_from_file(file.path())?;

    assert!(old.lookup("fuck").is_some());
    assert!(store.snapshot().lookup("fuck").is_none());
    assert!(store.snapshot().lookup("frak").is_some());
    Ok(())
}
