pub const OAUTH_VALUE_VERSION: &str = "1.0";

pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";

pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

/// Parameters whose name starts with this go into the Authorization header.
pub const OAUTH_PARAM_PREFIX: &str = "oauth";

pub const OAUTH_HEADER: &str = "OAuth";
pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";
