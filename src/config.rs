use serde::{Deserialize, Serialize};

use crate::util;

pub const DEFAULT_API_VERSION: &str = "api.frameweld-v1";

/// Caller-owned settings shared by every request a client signs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL relative request paths are joined onto. Empty means request
    /// URLs are used as given.
    pub api_server_url: String,
    /// API version advertised in the `Accept` header.
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_server_url: String::new(),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_server_url: impl Into<String>) -> Self {
        ClientConfig {
            api_server_url: api_server_url.into(),
            ..Self::default()
        }
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Full target URL for a request path.
    pub fn resolve_url(&self, path: &str) -> String {
        util::join_url(&self.api_server_url, path)
    }

    /// Value of the `Accept` header sent alongside the Authorization header.
    pub fn accept_header(&self) -> String {
        format!("application/json+{}", self.api_version)
    }
}
