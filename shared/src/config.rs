use anyhow::{Context, Result};
use log::Level;
use serde::{Deserialize, Serialize};

use crate::validation::{Validatable, Value};

/// Constraints for one form field, see [`Validatable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRules {
    pub fn apply(&self, value: impl Into<Value>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        FormRules {
            title: FieldRules {
                required: true,
                ..Default::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(5),
                ..Default::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(5.0),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub rules: FormRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            rules: FormRules::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid configuration")
    }

    /// Unknown level names fall back to `Error`.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level(), Level::Info);
    }

    #[test]
    fn partial_rules_keep_other_defaults() {
        let config = AppConfig::from_json(
            r#"{ "rules": { "people": { "required": true, "max": 10 } } }"#,
        )
        .unwrap();

        assert_eq!(config.rules.title, FormRules::default().title);
        assert_eq!(config.rules.people.max, Some(10.0));
        assert_eq!(config.rules.people.min, None);
    }

    #[test]
    fn level_names() {
        let config = AppConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level(), Level::Debug);

        let config = AppConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.level(), Level::Error);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AppConfig::from_json("{ rules: ").unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration");
    }

    #[test]
    fn field_rules_use_camel_case() {
        let rules: FieldRules =
            serde_json::from_str(r#"{ "minLength": 3, "maxLength": 8 }"#).unwrap();
        assert_eq!(rules.min_length, Some(3));
        assert_eq!(rules.max_length, Some(8));
        assert!(!rules.required);
    }
}
