//! Runtime configuration read from the environment (and `.env`, loaded in `main`).

use crate::constants::{DEFAULT_STT_LANGUAGE, DEFAULT_STT_MODEL};
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected {0} in the environment or .env file")]
    Missing(&'static str),
    #[error("{name} must be a numeric id, got `{value}`")]
    InvalidId { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub discord_token: String,
    pub openai_api_key: Option<String>,
    /// Slash commands are registered on this guild only when set, globally otherwise.
    pub guild_id: Option<u64>,
    /// Guild channel whose messages are read as utterances. Direct messages always are.
    pub shopping_channel_id: Option<u64>,
    pub stt_model: String,
    pub stt_language: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token =
            non_empty("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let id = |name: &'static str| -> Result<Option<u64>, ConfigError> {
            non_empty(name)
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|id| *id != 0)
                        .ok_or_else(|| ConfigError::InvalidId {
                            name,
                            value: value.clone(),
                        })
                })
                .transpose()
        };

        Ok(Self {
            discord_token,
            openai_api_key: non_empty("OPENAI_API_KEY"),
            guild_id: id("GUILD_ID")?,
            shopping_channel_id: id("SHOPPING_CHANNEL_ID")?,
            stt_model: non_empty("STT_MODEL").unwrap_or_else(|| DEFAULT_STT_MODEL.to_string()),
            stt_language: non_empty("STT_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_STT_LANGUAGE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DISCORD_TOKEN"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(cfg.stt_model, "whisper-1");
        assert_eq!(cfg.stt_language, "pt");
        assert_eq!(cfg.openai_api_key, None);
        assert_eq!(cfg.guild_id, None);
    }

    #[test]
    fn ids_must_be_numeric() {
        let err = BotConfig::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "casa"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidId { name: "GUILD_ID", .. }));

        let err = BotConfig::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("SHOPPING_CHANNEL_ID", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidId { .. }));

        let cfg = BotConfig::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("SHOPPING_CHANNEL_ID", "123"),
        ]))
        .unwrap();
        assert_eq!(cfg.shopping_channel_id, Some(123));
    }
}
