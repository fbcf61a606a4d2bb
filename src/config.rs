use poise::serenity_prelude::ChannelId;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATS_API_URL: &str = "https://api.craftstats.gg";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("{0} environment variable is not a valid {1}")]
    Invalid(&'static str, &'static str),
}

/// Process-scoped configuration, read once at startup. A missing required
/// variable aborts the process before the gateway connects.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub input_channel: ChannelId,
    pub output_channel: ChannelId,
    pub port: u16,
    pub stats_api_url: String,
    pub stats_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token: required("DISCORD_TOKEN")?,
            input_channel: channel("INPUT_CHANNEL_ID")?,
            output_channel: channel("OUTPUT_CHANNEL_ID")?,
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", "port number"))?,
                Err(_) => DEFAULT_PORT,
            },
            stats_api_url: std::env::var("STATS_API_URL")
                .unwrap_or_else(|_| DEFAULT_STATS_API_URL.to_string()),
            stats_api_key: required("STATS_API_KEY")?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn channel(name: &'static str) -> Result<ChannelId, ConfigError> {
    required(name)?
        .parse()
        .map_err(|_| ConfigError::Invalid(name, "channel id"))
}
