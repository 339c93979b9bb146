use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::ValidationError;
use crate::model::parse_use_by_date;

/// Runtime settings for the finder
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Line printed when no recipe can be made
    #[serde(default = "default_no_match_message")]
    pub no_match_message: String,
    /// Pin "today" to a DD/MM/YYYY date instead of reading the system clock
    #[serde(default)]
    pub today: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            no_match_message: default_no_match_message(),
            today: None,
        }
    }
}

fn default_no_match_message() -> String {
    "no match available".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__NO_MATCH_MESSAGE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Clock to check expiry against: the pinned date if set, else the system date
    pub fn clock(&self) -> Result<Box<dyn Clock>, ValidationError> {
        match self.today.as_deref() {
            Some(text) => Ok(Box::new(FixedClock(parse_use_by_date(text)?))),
            None => Ok(Box::new(SystemClock)),
        }
    }
}

/// Load configuration from `recipe-finder.toml` and `RECIPE_FINDER__*` variables
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        .add_source(Environment::with_prefix("RECIPE_FINDER").separator("__"))
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use config::FileFormat;

    fn from_toml(toml: &str) -> FinderConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.no_match_message, "no match available");
        assert!(config.today.is_none());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        assert_eq!(from_toml(""), FinderConfig::default());
    }

    #[test]
    fn test_values_from_toml() {
        let config = from_toml(
            r#"
            no_match_message = "Order Takeout"
            today = "21/10/2016"
            "#,
        );
        assert_eq!(config.no_match_message, "Order Takeout");
        assert_eq!(config.today.as_deref(), Some("21/10/2016"));
    }

    #[test]
    fn test_pinned_clock() {
        let config = FinderConfig {
            today: Some("21/10/2016".to_string()),
            ..Default::default()
        };
        let clock = config.clock().unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2016, 10, 21).unwrap());
    }

    #[test]
    fn test_pinned_clock_rejects_bad_date() {
        let config = FinderConfig {
            today: Some("2016-10-21".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.clock().unwrap_err(),
            ValidationError::UnsupportedDateFormat
        );
    }
}
