/// Backend address used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the backend address
pub const API_BASE_URL_VAR: &str = "APPOINTMENTS_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            api_base_url: trimmed.to_string(),
        }
    }

    /// Applies an optional override, e.g. one baked in with `option_env!`
    pub fn from_override(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    /// Reads `APPOINTMENTS_API_BASE_URL` at run time
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_BASE_URL_VAR).ok().as_deref())
    }
}
