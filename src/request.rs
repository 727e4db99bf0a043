use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// HTTP methods the API accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(HttpMethod::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(HttpMethod::Post)
        } else {
            Err(Error::UnsupportedMethod(s.to_string()))
        }
    }
}

/// One request to sign. `url` is either a path relative to the configured
/// API server or an absolute URL, and may carry a query string.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningRequest {
    pub method: HttpMethod,
    pub url: String,
    pub public_key: String,
    pub private_key: String,
}

impl SigningRequest {
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        SigningRequest {
            method,
            url: url.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Fails with [`Error::MissingInput`] for the first empty required field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("url", &self.url),
            ("public key", &self.public_key),
            ("private key", &self.private_key),
        ];
        match required.into_iter().find(|(_, v)| v.is_empty()) {
            Some((field, _)) => Err(Error::MissingInput { field }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for SigningRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        match "DELETE".parse::<HttpMethod>() {
            Err(Error::UnsupportedMethod(m)) => assert_eq!(m, "DELETE"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_validate() {
        let ok = SigningRequest::new(HttpMethod::Get, "/x", "pub", "secret");
        assert!(ok.validate().is_ok());

        for (req, expected) in vec![
            (SigningRequest::new(HttpMethod::Get, "", "pub", "secret"), "url"),
            (SigningRequest::new(HttpMethod::Get, "/x", "", "secret"), "public key"),
            (SigningRequest::new(HttpMethod::Get, "/x", "pub", ""), "private key"),
        ] {
            match req.validate() {
                Err(Error::MissingInput { field }) => assert_eq!(field, expected),
                other => panic!("unexpected: {:?}", other),
            }
        }
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let req = SigningRequest::new(HttpMethod::Post, "/x", "pub", "very-secret");
        let debug = format!("{:?}", req);
        assert!(debug.contains("pub"));
        assert!(!debug.contains("very-secret"));
    }
}
