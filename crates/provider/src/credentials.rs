//! Decides between demo and live mode for a single request.
//!
//! The key is resolved per call from the request and the server configuration;
//! nothing is cached in process-wide state.

const PLACEHOLDER_KEY: &str = "sk-your-api-key-here";

/// A key that passed the format check.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts keys that start with `sk-` and are not the sample placeholder.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() || !key.starts_with("sk-") || key == PLACEHOLDER_KEY {
            return None;
        }
        Some(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Live(ApiKey),
}

impl Mode {
    /// A non-blank request key wins over the server key, even when it is invalid.
    pub fn resolve(request_key: Option<&str>, server_key: Option<&str>) -> Self {
        let candidate = request_key
            .filter(|key| !key.trim().is_empty())
            .or(server_key);

        match candidate.and_then(ApiKey::parse) {
            Some(key) => Mode::Live(key),
            None => Mode::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Mode::Demo)
    }
}
