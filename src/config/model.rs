//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::calc::number::{format_number, parse_float};
use crate::calc::{ButtonAction, DispatchError};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub help: HelpConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Extra key bindings, key -> action tag (`"x" = "operator:multiply"`).
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
}

/// Spin easter egg settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_spin_ms")]
    pub spin_ms: u64,
    #[serde(default = "default_unwind_ms")]
    pub unwind_ms: u64,
    #[serde(default = "default_triggers")]
    pub triggers: Vec<String>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spin_ms: default_spin_ms(),
            unwind_ms: default_unwind_ms(),
            triggers: default_triggers(),
        }
    }
}

impl AnimationConfig {
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_ms)
    }

    pub fn unwind_duration(&self) -> Duration {
        Duration::from_millis(self.unwind_ms)
    }
}

/// Help box settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpConfig {
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
    #[serde(default)]
    pub show_on_start: bool,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
            show_on_start: false,
        }
    }
}

impl HelpConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log settings. The log goes to a file since the terminal is
/// owned by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("trigger `{0}` is not a number the display can show")]
    InvalidTrigger(String),
    #[error("key binding `{0}` must be a single character")]
    InvalidKey(String),
    #[error("key binding `{key}`: {source}")]
    InvalidBinding {
        key: String,
        #[source]
        source: DispatchError,
    },
}

impl AppConfig {
    /// Check values serde cannot: non-zero timings, triggers the display can
    /// actually reach, parseable key bindings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("animation.spin_ms", self.animation.spin_ms),
            ("animation.unwind_ms", self.animation.unwind_ms),
            ("help.auto_hide_ms", self.help.auto_hide_ms),
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ZeroDuration { field: *field });
        }

        for trigger in &self.animation.triggers {
            if !is_display_literal(trigger) {
                return Err(ConfigError::InvalidTrigger(trigger.clone()));
            }
        }

        self.key_bindings().map(|_| ())
    }

    /// Parsed `[keys]` table.
    pub fn key_bindings(&self) -> Result<Vec<(char, ButtonAction)>, ConfigError> {
        self.keys
            .iter()
            .map(|(key, tag)| {
                let mut chars = key.chars();
                let c = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(ConfigError::InvalidKey(key.clone())),
                };
                let action = tag.parse::<ButtonAction>().map_err(|source| {
                    ConfigError::InvalidBinding {
                        key: key.clone(),
                        source,
                    }
                })?;
                Ok((c, action))
            })
            .collect()
    }
}

/// A trigger can reach the display if it is a typed literal (`0.607`) or the
/// canonical string of a number (`8008`).
fn is_display_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let typed = !unsigned.is_empty()
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    typed || format_number(parse_float(text)) == text
}

fn default_true() -> bool {
    true
}
fn default_spin_ms() -> u64 {
    2000
}
fn default_unwind_ms() -> u64 {
    500
}
fn default_triggers() -> Vec<String> {
    [
        "8008", "5328008", "0.607", "707", "376676", "0.7734", "55378008", "217", "58008",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_auto_hide_ms() -> u64 {
    3000
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/crabcalc/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.animation.spin_duration(), Duration::from_millis(2000));
        assert_eq!(cfg.animation.unwind_duration(), Duration::from_millis(500));
        assert_eq!(cfg.help.auto_hide(), Duration::from_millis(3000));
        assert_eq!(cfg.animation.triggers.len(), 9);
        assert!(cfg.animation.triggers.contains(&"0.7734".to_string()));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [animation]
            spin_ms = 1000

            [keys]
            "x" = "operator:multiply"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.animation.spin_ms, 1000);
        assert_eq!(cfg.animation.unwind_ms, 500);
        assert_eq!(cfg.animation.triggers, default_triggers());
        assert_eq!(cfg.help.auto_hide_ms, 3000);
        assert_eq!(
            cfg.key_bindings().unwrap(),
            vec![('x', ButtonAction::Operator(crate::calc::Operator::Multiply))]
        );
    }

    #[test]
    fn test_rejects_zero_duration() {
        let mut cfg = AppConfig::default();
        cfg.animation.unwind_ms = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroDuration {
                field: "animation.unwind_ms"
            })
        );
    }

    #[test]
    fn test_rejects_unreachable_trigger() {
        let mut cfg = AppConfig::default();
        cfg.animation.triggers.push("BOOB".to_string());
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidTrigger("BOOB".to_string()))
        );
        cfg.animation.triggers = vec!["1e+21".to_string(), "-5".to_string(), "3.".to_string()];
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_bindings() {
        let mut cfg = AppConfig::default();
        cfg.keys.insert("xy".into(), "equals".into());
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidKey("xy".into())));

        let mut cfg = AppConfig::default();
        cfg.keys.insert("r".into(), "root".into());
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidBinding { ref key, .. }) if key == "r"
        ));
    }
}
