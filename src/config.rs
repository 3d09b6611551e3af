//! Site configuration baked in at build time.
//!
//! The page has no server to read settings from, so values come from
//! environment variables captured by `option_env!` when the WASM bundle is
//! compiled. All of them are optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_OWNER_HANDLE: &str = "niks1107";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

/// GitHub's limit on username length.
const MAX_OWNER_HANDLE_LEN: usize = 39;

/// Errors produced while parsing build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORTFOLIO_GITHUB_USER '{0}'")]
    InvalidOwnerHandle(String),

    #[error("invalid PORTFOLIO_GITHUB_API '{0}' (expected an http:// or https:// URL)")]
    InvalidApiBase(String),

    #[error("invalid PORTFOLIO_FETCH_TIMEOUT_MS '{0}' (expected 1 to 4294967295 milliseconds)")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// GitHub user whose repositories fill the projects section.
    pub owner_handle: String,
    pub api_base_url: String,
    /// Browser timers take a 32-bit millisecond delay.
    pub fetch_timeout_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_handle: DEFAULT_OWNER_HANDLE.to_owned(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl SiteConfig {
    /// Build typed config from values captured at compile time.
    ///
    /// Optional:
    /// - `PORTFOLIO_GITHUB_USER`: default `niks1107`
    /// - `PORTFOLIO_GITHUB_API`: default `https://api.github.com`
    /// - `PORTFOLIO_FETCH_TIMEOUT_MS`: default 10000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first value that fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("PORTFOLIO_GITHUB_USER"),
            option_env!("PORTFOLIO_GITHUB_API"),
            option_env!("PORTFOLIO_FETCH_TIMEOUT_MS"),
        )
    }

    /// Build config from raw optional values. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first value that fails to parse.
    pub fn from_values(
        owner_handle: Option<&str>,
        api_base_url: Option<&str>,
        fetch_timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            owner_handle: parse_owner_handle(non_empty(owner_handle))?,
            api_base_url: parse_api_base(non_empty(api_base_url))?,
            fetch_timeout_ms: parse_timeout(non_empty(fetch_timeout_ms))?,
        })
    }

    /// [`Self::from_build_env`], falling back to defaults when a value is
    /// invalid. A bad build setting must not take the page down.
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => {
                log::info!("portfolio configured for {}", config.owner_handle);
                config
            }
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// GitHub handle rules: 1-39 ASCII alphanumerics or single hyphens, not at
/// either end.
pub fn is_valid_owner_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle.len() <= MAX_OWNER_HANDLE_LEN
        && handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !handle.starts_with('-')
        && !handle.ends_with('-')
        && !handle.contains("--")
}

fn parse_owner_handle(raw: Option<&str>) -> Result<String, ConfigError> {
    let handle = raw.unwrap_or(DEFAULT_OWNER_HANDLE);
    if is_valid_owner_handle(handle) {
        Ok(handle.to_owned())
    } else {
        Err(ConfigError::InvalidOwnerHandle(handle.to_owned()))
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let base = raw.unwrap_or(DEFAULT_API_BASE_URL).trim_end_matches('/');
    let host = base.strip_prefix("https://").or_else(|| base.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(base.to_owned()),
        _ => Err(ConfigError::InvalidApiBase(base.to_owned())),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_FETCH_TIMEOUT_MS);
    };
    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
