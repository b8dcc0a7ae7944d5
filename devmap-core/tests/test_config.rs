use cfg_format::parse;
use devmap_core::{ConfigError, DeviceConfig, ValueSpec};
use pretty_assertions::assert_eq;

const FULL_CONFIG: &str = "\
[Banks]
[[Bank 1]]
Thresh = Threshold
Ratio = *
Makeup =
[[Bank 2]]
Attack = Attack Time
[ParameterValues]
Ratio = 2:1, 4:1, 8:1
Attack = AttackTimes
[ParameterValueTypes]
AttackTimes = Fast||0.0, Slow||1.0
[Config]
Ignore = False
Cache = True
";

#[test]
fn test_from_document_full() {
    let doc = parse(FULL_CONFIG).unwrap();
    let config = DeviceConfig::from_document(&doc).unwrap();

    assert_eq!(config.banks.len(), 2);
    assert_eq!(config.banks[0].name, "Bank 1");
    let tokens: Vec<&str> = config.banks[0]
        .entries
        .iter()
        .map(|e| e.token.as_str())
        .collect();
    assert_eq!(tokens, vec!["Thresh", "Ratio", "Makeup"]);
    assert_eq!(config.banks[0].entries[0].directive, "Threshold");
    assert_eq!(config.banks[0].entries[1].directive, "*");
    assert_eq!(config.banks[0].entries[2].directive, "");

    assert_eq!(
        config.values_for("Ratio"),
        Some(&ValueSpec::Inline(vec![
            "2:1".to_string(),
            "4:1".to_string(),
            "8:1".to_string()
        ]))
    );
    assert_eq!(
        config.values_for("Attack"),
        Some(&ValueSpec::Alias("AttackTimes".to_string()))
    );
    assert_eq!(
        config.value_type("AttackTimes"),
        Some(&["Fast||0.0".to_string(), "Slow||1.0".to_string()][..])
    );

    assert!(!config.ignore);
    assert!(config.cache);
}

#[test]
fn test_missing_banks_is_an_error() {
    let doc = parse("[Config]\nIgnore = False\n").unwrap();
    let err = DeviceConfig::from_document(&doc).unwrap_err();
    assert!(matches!(err, ConfigError::MissingBanks));
}

#[test]
fn test_missing_optional_sections_default() {
    let doc = parse("[Banks]\n[[Bank 1]]\nGain = \n").unwrap();
    let config = DeviceConfig::from_document(&doc).unwrap();
    assert!(config.parameter_values.is_empty());
    assert!(config.value_types.is_empty());
    assert!(!config.ignore);
    assert!(!config.cache);
}

#[test]
fn test_document_roundtrip_preserves_order() {
    let doc = parse(FULL_CONFIG).unwrap();
    let config = DeviceConfig::from_document(&doc).unwrap();

    let rendered = config.to_document();
    let reparsed = DeviceConfig::from_document(&rendered).unwrap();
    assert_eq!(config, reparsed);
}
