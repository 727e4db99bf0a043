use std::fmt;

use crate::encoder::encode;
use crate::error::{Error, Result};
use crate::parameters::{ParameterSet, ParameterValue};
use crate::v1::*;

/// A signed `Authorization` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationHeader {
    value: String,
    signature: String,
}

impl AuthorizationHeader {
    /// Header value, `OAuth oauth_consumer_key="...",...`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The base64 signature before percent-encoding.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Renders the full header line, `Authorization: OAuth ...`.
impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", AUTHORIZATION_HEADER_NAME, self.value)
    }
}

/// Serialize the `oauth*` entries of `params` plus `signature` into a header.
///
/// `params` is the encoded set returned by
/// [`build_base_string`](crate::v1::build_base_string). Every key and value
/// is percent-encoded again on the way into the header; `signature` goes in
/// raw and ends up encoded once. Pairs follow sorted key order.
pub fn build_header(params: &ParameterSet, signature: &str) -> Result<AuthorizationHeader> {
    let mut oauth_params = params
        .iter()
        .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect::<ParameterSet>();
    oauth_params.insert(OAUTH_PARAM_KEY_SIGNATURE, signature);

    let pairs = oauth_params
        .iter()
        .map(|(k, v)| match v {
            ParameterValue::Single(v) => Ok(format!("{}=\"{}\"", encode(k), encode(v))),
            ParameterValue::Multi(_) => Err(Error::UnsupportedParameterShape { key: k.into() }),
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(AuthorizationHeader {
        value: format!("{} {}", OAUTH_HEADER, pairs.join(",")),
        signature: signature.into(),
    })
}
