use resattr::AppConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_named(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_yaml_and_json_configs_are_equivalent() {
    let yaml = write_named(
        "application:\n  name: checkout\n  group: payments\nresource_attributes:\n  region: eu-west-1\n  deployment.environment: staging\n",
        ".yaml",
    );
    let json = write_named(
        r#"{"application":{"name":"checkout","group":"payments"},"resource_attributes":{"region":"eu-west-1","deployment.environment":"staging"}}"#,
        ".json",
    );

    let from_yaml = AppConfig::from_file(yaml.path()).unwrap();
    let from_json = AppConfig::from_file(json.path()).unwrap();
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.application.name(), Some("checkout"));
}

#[test]
fn test_attribute_order_follows_the_file() {
    let yaml = write_named(
        "resource_attributes:\n  zebra: last-alphabetically\n  alpha: first-alphabetically\n  middle: m\n",
        ".yml",
    );
    let config = AppConfig::from_file(yaml.path()).unwrap();
    let keys: Vec<&str> = config.resource_attributes.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
}

#[test]
fn test_missing_file_reports_path() {
    let err = AppConfig::from_file("does/not/exist.yaml").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.yaml"));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let yaml = write_named("application: [not, a, mapping\n", ".yaml");
    assert!(AppConfig::from_file(yaml.path()).is_err());
}

#[test]
fn test_empty_json_object_is_a_valid_config() {
    let json = write_named("{}", ".json");
    let config = AppConfig::from_file(json.path()).unwrap();
    assert!(config.resource_attributes.is_empty());
    assert_eq!(config.application.name(), None);
    assert_eq!(config.application.group(), None);
}
