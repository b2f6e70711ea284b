/*!
 * Tests for application configuration functionality
 */

use scriptmine::app_config::{Config, FilterConfig, LogLevel, ParserConfig};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    // Extraction thresholds
    assert_eq!(config.parser.minimum_replies, 1);
    assert_eq!(config.parser.minimum_characters, 5);
    assert_eq!(config.parser.reformat_line_threshold, 10);

    // Blacklists ship populated
    assert!(!config.filter.character_blacklist.is_empty());
    assert!(!config.filter.reply_blacklist.is_empty());
    assert!(config.filter.character_blacklist.iter().all(|w| !w.is_empty()));
    assert!(config.filter.reply_blacklist.iter().all(|w| !w.is_empty()));

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default blacklists carry the expected vocabulary
#[test]
fn test_default_blacklists_shouldContainSceneVocabulary() {
    let filter = FilterConfig::default();

    let has = |list: &[String], word: &str| list.iter().any(|w| w == word);

    assert!(has(&filter.character_blacklist, "FADE OUT"));
    assert!(has(&filter.character_blacklist, "EXT."));
    assert!(has(&filter.character_blacklist, " END."));
    assert!(has(&filter.character_blacklist, "DAY"));

    assert!(has(&filter.reply_blacklist, "CUT TO"));
    assert!(has(&filter.reply_blacklist, " DAY"));
    assert!(has(&filter.reply_blacklist, "SHOOTING SCRIPT"));
}

/// Test that an empty JSON object deserializes to the defaults
#[test]
fn test_config_deserialize_withEmptyObject_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.parser, ParserConfig::default());
    assert_eq!(config.filter, FilterConfig::default());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that partially specified sections keep defaults for the rest
#[test]
fn test_config_deserialize_withPartialParser_shouldFillRemainder() {
    let config: Config =
        serde_json::from_str(r#"{"parser": {"minimum_characters": 3}}"#).unwrap();

    assert_eq!(config.parser.minimum_characters, 3);
    assert_eq!(config.parser.minimum_replies, 1);
    assert_eq!(config.parser.reformat_line_threshold, 10);
}

/// Test that log levels use lowercase names in JSON
#[test]
fn test_config_deserialize_withLogLevel_shouldAcceptLowercase() {
    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);

    let bad = serde_json::from_str::<Config>(r#"{"log_level": "verbose"}"#);
    assert!(bad.is_err());
}

/// Test that a serialized configuration reads back unchanged
#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.parser.minimum_characters = 7;
    config.filter.reply_blacklist = vec!["NOISE".to_string()];
    config.log_level = LogLevel::Trace;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(back.parser, config.parser);
    assert_eq!(back.filter, config.filter);
    assert_eq!(back.log_level, LogLevel::Trace);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // An empty character blacklist entry would match every name
    config.filter.character_blacklist.push(String::new());
    assert!(config.validate().is_err());
    config.filter.character_blacklist.pop();
    assert!(config.validate().is_ok());

    // Same for reply blacklist entries
    config.filter.reply_blacklist.push(String::new());
    assert!(config.validate().is_err());
    config.filter.reply_blacklist.pop();
    assert!(config.validate().is_ok());

    // Empty lists themselves are fine, they just filter nothing
    config.filter.character_blacklist.clear();
    config.filter.reply_blacklist.clear();
    assert!(config.validate().is_ok());
}
