//! Content lake connection settings.

use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2025-01-08";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_PROJECT_ID: &str = "SANITY_PROJECT_ID";
pub const ENV_DATASET: &str = "SANITY_DATASET";
pub const ENV_API_VERSION: &str = "SANITY_API_VERSION";
pub const ENV_TOKEN: &str = "SANITY_TOKEN";
pub const ENV_API_HOST: &str = "SANITY_API_HOST";
pub const ENV_TIMEOUT_SECS: &str = "SANITY_TIMEOUT_SECS";

/// Prefix of the legacy variable names, still accepted as a fallback.
const LEGACY_PREFIX: &str = "NEXT_PUBLIC_";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Validated settings for one dataset.
///
/// Constructing a `CmsConfig` is the only place these values are checked; a
/// client built from one never has to re-check them.
#[derive(Clone, PartialEq, Eq)]
pub struct CmsConfig {
    project_id: String,
    dataset: String,
    api_version: String,
    token: String,
    api_host: Option<String>,
    timeout: Duration,
}

impl CmsConfig {
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let project_id = project_id.into();
        let dataset = dataset.into();
        let token = token.into();

        check_project_id(&project_id)?;
        check_dataset(&dataset)?;
        if token.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_TOKEN));
        }

        Ok(Self {
            project_id,
            dataset,
            api_version: DEFAULT_API_VERSION.to_string(),
            token,
            api_host: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Pin the API version (`YYYY-MM-DD`, optionally prefixed with `v`, or `1`).
    pub fn with_api_version(mut self, version: &str) -> Result<Self, ConfigError> {
        let version = version.trim().trim_start_matches('v');
        if version != "1" && NaiveDate::parse_from_str(version, "%Y-%m-%d").is_err() {
            return Err(ConfigError::invalid(
                ENV_API_VERSION,
                format!("expected YYYY-MM-DD, got {version:?}"),
            ));
        }
        self.api_version = version.to_string();
        Ok(self)
    }

    /// Send requests to `host` (scheme + authority) instead of the project's
    /// public API host.
    pub fn with_api_host(mut self, host: &str) -> Result<Self, ConfigError> {
        let host = host.trim().trim_end_matches('/');
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Err(ConfigError::invalid(ENV_API_HOST, "must start with http:// or https://"));
        }
        self.api_host = Some(host.to_string());
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup` (variable name → value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .or_else(|| lookup(&format!("{LEGACY_PREFIX}{name}")))
                .filter(|v| !v.trim().is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let mut config = Self::new(
            require(ENV_PROJECT_ID)?,
            require(ENV_DATASET)?,
            require(ENV_TOKEN)?,
        )?;

        if let Some(version) = get(ENV_API_VERSION) {
            config = config.with_api_version(&version)?;
        }
        if let Some(host) = get(ENV_API_HOST) {
            config = config.with_api_host(&host)?;
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(ENV_TIMEOUT_SECS, "expected whole seconds"))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    /// Endpoint accepting mutations for the configured dataset.
    pub fn mutate_url(&self) -> String {
        format!(
            "{}/v{}/data/mutate/{}",
            self.base_url(),
            self.api_version,
            self.dataset
        )
    }
}

impl core::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn check_project_id(id: &str) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::Missing(ENV_PROJECT_ID));
    }
    if !id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(ConfigError::invalid(
            ENV_PROJECT_ID,
            "only lowercase letters, digits and dashes are allowed",
        ));
    }
    Ok(())
}

fn check_dataset(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Missing(ENV_DATASET));
    }
    if name.len() > 64 {
        return Err(ConfigError::invalid(ENV_DATASET, "at most 64 characters"));
    }
    let valid = name.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !valid {
        return Err(ConfigError::invalid(
            ENV_DATASET,
            "must start with a letter or digit and use only a-z, 0-9, _ and -",
        ));
    }
    Ok(())
}
