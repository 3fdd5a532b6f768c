/*!
 * Tests for app configuration functionality
 */

use yawtai::app_config::{Config, LogLevel};

#[test]
fn test_default_config_shouldMatchTheDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.translation.model, "gpt-3.5-turbo");
    assert_eq!(config.translation.temperature, 0.0);
    assert_eq!(config.translation.endpoint, "https://api.openai.com");
    assert_eq!(config.translation.timeout_secs, 120);
    assert_eq!(config.chunk_size, 3500);
    assert_eq!(config.max_workers, 4);
    assert_eq!(config.output_dir, "translated");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_default_config_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_withZeroChunkSize_shouldFail() {
    let mut config = Config::default();
    config.chunk_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroWorkers_shouldFail() {
    let mut config = Config::default();
    config.max_workers = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withOutOfRangeTemperature_shouldFail() {
    let mut config = Config::default();
    config.translation.temperature = 3.0;
    assert!(config.validate().is_err());

    config.translation.temperature = -0.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    config.translation.model = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_fromEmptyJson_shouldFillEveryDefault() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.chunk_size, 3500);
    assert_eq!(config.translation.model, "gpt-3.5-turbo");
}

#[test]
fn test_config_fromPartialJson_shouldKeepOverridesAndDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"chunk_size": 1000, "translation": {"model": "gpt-4"}}"#).unwrap();

    assert_eq!(config.chunk_size, 1000);
    assert_eq!(config.translation.model, "gpt-4");
    assert_eq!(config.max_workers, 4);
    assert_eq!(config.translation.temperature, 0.0);
}

#[test]
fn test_config_withLowercaseLogLevel_shouldDeserialize() {
    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_config_shouldRoundTripThroughSerde() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.chunk_size, config.chunk_size);
    assert_eq!(parsed.translation.model, config.translation.model);
    assert_eq!(parsed.output_dir, config.output_dir);
}

#[test]
fn test_api_key_or_env_withConfiguredKey_shouldPreferTheConfig() {
    let mut config = Config::default();
    config.translation.api_key = "configured-key".to_string();
    assert_eq!(config.translation.api_key_or_env(), "configured-key");
}
