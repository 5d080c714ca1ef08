use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// "Publish to web" CSV link of the inventory sheet. Unset or blank disables loading.
    #[serde(default)]
    pub sheet_csv_url: Option<String>,
    /// 0 means reload once and exit.
    pub check_interval_seconds: u64,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_csv_url: None,
            check_interval_seconds: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: 25,
        }
    }
}

impl Config {
    /// Defaults, then `listings.{toml,json,yaml,...}` if present, then `LISTINGS_*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("LISTINGS")
    }

    fn load_with_env(env: config::Environment) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::with_name("listings").required(false))
            .add_source(env);

        Self::from_builder(builder)
    }

    /// Load from a TOML string layered over the defaults. Environment is not consulted.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Config::default();

        Ok(config::Config::builder()
            .set_default("check_interval_seconds", defaults.check_interval_seconds as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("request_timeout_seconds", defaults.request_timeout_seconds as i64)?)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The configured sheet URL, or `None` when unset or blank.
    pub fn sheet_url(&self) -> Option<&str> {
        self.sheet_csv_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = self.sheet_url() {
            Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                url: url.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
