//! Configuration validation.
//!
//! Validates every config field before a dataset is fetched.

use crate::domain::error::MacroSignalError;
use crate::ports::config_port::ConfigPort;

pub const SOURCE_SECTION: &str = "source";
pub const RULES_SECTION: &str = "rules";
pub const SIGNAL_SECTION: &str = "signal";

pub const THRESHOLD_KEYS: [&str; 5] = [
    "gdp_solid_min",
    "inflation_min",
    "inflation_max",
    "policy_rate_max",
    "unemployment_max",
];

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    validate_source(config)?;
    validate_rules(config)?;
    validate_signal(config)?;
    Ok(())
}

pub fn validate_source(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    validate_single_source(config)?;
    validate_column_name(config, "label_column")?;
    validate_column_name(config, "value_column")?;
    validate_delimiter(config)?;
    Ok(())
}

pub fn validate_rules(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    for key in THRESHOLD_KEYS {
        validate_finite(config, RULES_SECTION, key)?;
    }

    let min = config.get_double(RULES_SECTION, "inflation_min", -1.0);
    let max = config.get_double(RULES_SECTION, "inflation_max", 3.0);
    if min > max {
        return Err(invalid(
            RULES_SECTION,
            "inflation_min",
            format!("inflation_min ({min}) must not exceed inflation_max ({max})"),
        ));
    }
    Ok(())
}

pub fn validate_signal(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    let Some(raw) = config.get_string(SIGNAL_SECTION, "buy_min_score") else {
        return Ok(());
    };
    match raw.trim().parse::<i32>() {
        Ok(v) if v >= 1 => Ok(()),
        Ok(_) => Err(invalid(
            SIGNAL_SECTION,
            "buy_min_score",
            "buy_min_score must be at least 1",
        )),
        Err(_) => Err(invalid(
            SIGNAL_SECTION,
            "buy_min_score",
            format!("buy_min_score must be an integer between 1 and {}", i32::MAX),
        )),
    }
}

fn validate_single_source(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    let set: Vec<&str> = ["path", "url", "sheet_id"]
        .into_iter()
        .filter(|key| {
            config
                .get_string(SOURCE_SECTION, key)
                .is_some_and(|v| !v.trim().is_empty())
        })
        .collect();

    if set.len() > 1 {
        return Err(invalid(
            SOURCE_SECTION,
            set[1],
            format!("only one of path, url, sheet_id may be set (found {})", set.join(", ")),
        ));
    }
    Ok(())
}

fn validate_column_name(config: &dyn ConfigPort, key: &str) -> Result<(), MacroSignalError> {
    match config.get_string(SOURCE_SECTION, key) {
        Some(name) if name.trim().is_empty() => {
            Err(invalid(SOURCE_SECTION, key, format!("{key} must not be blank")))
        }
        _ => Ok(()),
    }
}

fn validate_delimiter(config: &dyn ConfigPort) -> Result<(), MacroSignalError> {
    let Some(raw) = config.get_string(SOURCE_SECTION, "delimiter") else {
        return Ok(());
    };
    match parse_delimiter(&raw) {
        Some(_) => Ok(()),
        None => Err(invalid(
            SOURCE_SECTION,
            "delimiter",
            format!(
                "delimiter must be a single ASCII character or one of comma, semicolon, tab, \
                 pipe, got '{raw}'"
            ),
        )),
    }
}

/// A single ASCII character, or a name for one that INI values cannot carry
/// (`tab` is trimmed away, `#` starts a comment).
pub fn parse_delimiter(raw: &str) -> Option<u8> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "comma" => Some(b','),
        "semicolon" => Some(b';'),
        "tab" => Some(b'\t'),
        "pipe" => Some(b'|'),
        other if other.len() == 1 && other.is_ascii() => Some(raw.trim().as_bytes()[0]),
        _ => None,
    }
}

fn validate_finite(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), MacroSignalError> {
    let Some(raw) = config.get_string(section, key) else {
        return Ok(());
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(()),
        _ => Err(invalid(
            section,
            key,
            format!("{key} must be a finite number, got '{raw}'"),
        )),
    }
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> MacroSignalError {
    MacroSignalError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;
    use std::collections::HashMap;

    fn config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    fn invalid_key(result: Result<(), MacroSignalError>) -> String {
        match result {
            Err(MacroSignalError::ConfigInvalid { key, .. }) => key,
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(validate_config(&config("")).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let content = r#"
[source]
path = data/indicators.csv
label_column = Indicateur
value_column = Valeur
delimiter = |

[rules]
gdp_solid_min = 2.5
inflation_min = -1
inflation_max = 3
policy_rate_max = 3.0
unemployment_max = 12

[signal]
buy_min_score = 2
"#;
        assert!(validate_config(&config(content)).is_ok());
    }

    #[test]
    fn two_sources_rejected() {
        let cfg = config("[source]\npath = a.csv\nurl = https://example.com/a.csv\n");
        assert_eq!(invalid_key(validate_config(&cfg)), "url");
    }

    struct MapConfig(HashMap<(String, String), String>);

    impl ConfigPort for MapConfig {
        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.0.get(&(section.to_string(), key.to_string())).cloned()
        }
        fn get_int(&self, _section: &str, _key: &str, default: i64) -> i64 {
            default
        }
        fn get_double(&self, _section: &str, _key: &str, default: f64) -> f64 {
            default
        }
    }

    #[test]
    fn blank_column_name_rejected() {
        let mut map = HashMap::new();
        map.insert(("source".to_string(), "value_column".to_string()), "  ".to_string());
        assert_eq!(invalid_key(validate_config(&MapConfig(map))), "value_column");
    }

    #[test]
    fn multi_char_delimiter_rejected() {
        let cfg = config("[source]\ndelimiter = ||\n");
        assert_eq!(invalid_key(validate_config(&cfg)), "delimiter");
    }

    #[test]
    fn semicolon_delimiter_accepted() {
        let cfg = config("[source]\ndelimiter = ;\n");
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(parse_delimiter(&cfg.get_string("source", "delimiter").unwrap()), Some(b';'));
    }

    #[test]
    fn named_delimiters() {
        assert_eq!(parse_delimiter("tab"), Some(b'\t'));
        assert_eq!(parse_delimiter("Semicolon"), Some(b';'));
        assert_eq!(parse_delimiter("comma"), Some(b','));
        assert_eq!(parse_delimiter("pipe"), Some(b'|'));
        assert_eq!(parse_delimiter("space"), None);
        assert_eq!(parse_delimiter(""), None);
        assert_eq!(parse_delimiter("é"), None);
    }

    #[test]
    fn non_numeric_threshold_rejected() {
        let cfg = config("[rules]\ngdp_solid_min = three\n");
        assert_eq!(invalid_key(validate_config(&cfg)), "gdp_solid_min");
    }

    #[test]
    fn infinite_threshold_rejected() {
        let cfg = config("[rules]\nunemployment_max = inf\n");
        assert_eq!(invalid_key(validate_config(&cfg)), "unemployment_max");
    }

    #[test]
    fn inverted_inflation_band_rejected() {
        let cfg = config("[rules]\ninflation_min = 4\ninflation_max = 2\n");
        assert_eq!(invalid_key(validate_config(&cfg)), "inflation_min");
    }

    #[test]
    fn inflation_band_may_collapse_to_a_point() {
        let cfg = config("[rules]\ninflation_min = 2\ninflation_max = 2\n");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn buy_min_score_must_be_positive_integer() {
        assert_eq!(
            invalid_key(validate_config(&config("[signal]\nbuy_min_score = 0\n"))),
            "buy_min_score"
        );
        assert_eq!(
            invalid_key(validate_config(&config("[signal]\nbuy_min_score = 1.5\n"))),
            "buy_min_score"
        );
        assert!(validate_config(&config("[signal]\nbuy_min_score = 3\n")).is_ok());
    }

    #[test]
    fn buy_min_score_beyond_i32_rejected() {
        assert_eq!(
            invalid_key(validate_config(&config("[signal]\nbuy_min_score = 3000000000\n"))),
            "buy_min_score"
        );
    }
}
