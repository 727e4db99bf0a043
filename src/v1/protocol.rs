use crate::parameters::ParameterSet;
use crate::v1::*;

/// The `oauth_*` fields added to every signed request.
///
/// `new` draws a fresh nonce and timestamp; override them with
/// [`oauth_nonce`](Self::oauth_nonce) and
/// [`oauth_timestamp`](Self::oauth_timestamp) to reproduce a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolParameters {
    consumer_key: String,
    nonce: String,
    timestamp: i64,
}

impl ProtocolParameters {
    pub fn new(consumer_key: impl Into<String>) -> Self {
        ProtocolParameters {
            consumer_key: consumer_key.into(),
            nonce: nonce::nonce(),
            timestamp: nonce::timestamp(),
        }
    }

    pub fn oauth_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    pub fn oauth_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Raw (unencoded) parameters ready to merge over the query parameters.
    pub fn to_parameter_set(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert(OAUTH_PARAM_KEY_VERSION, OAUTH_VALUE_VERSION);
        params.insert(OAUTH_PARAM_KEY_NONCE, self.nonce.as_str());
        params.insert(OAUTH_PARAM_KEY_TIMESTAMP, self.timestamp.to_string());
        params.insert(OAUTH_PARAM_KEY_CONSUMER_KEY, self.consumer_key.as_str());
        params.insert(OAUTH_PARAM_KEY_SIGNATURE_METHOD, OAUTH_VALUE_SIGMETHOD_HMACSHA1);
        params
    }
}
