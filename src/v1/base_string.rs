use crate::encoder::encode;
use crate::error::Result;
use crate::parameters::ParameterSet;
use crate::request::HttpMethod;
use crate::util;
use crate::v1::ProtocolParameters;

/// Canonical string to sign, plus what went into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureBase {
    /// Normalized `scheme://host[:port]path`.
    pub endpoint: String,
    /// `METHOD&encoded endpoint&encoded parameter string`.
    pub base_string: String,
    /// Query and protocol parameters after merging and percent-encoding.
    pub parameters: ParameterSet,
}

/// Build the signature base string for `method` on the absolute `url`.
///
/// Query parameters already on `url` are merged with `protocol`, protocol
/// parameters winning on collision. Keys and values are then encoded and
/// sorted byte-wise.
pub fn build_base_string(
    method: HttpMethod,
    url: &str,
    protocol: &ProtocolParameters,
) -> Result<SignatureBase> {
    let (endpoint, mut params) = util::url_to_endpoint_and_queries(url)?;
    params.merge(protocol.to_parameter_set());

    let parameters = params.encoded();
    let param_str = parameters.to_signable_string();

    let base_string = format!(
        "{}&{}&{}",
        encode(method.as_str()),
        encode(&endpoint),
        encode(&param_str)
    );
    tracing::trace!(%base_string, "built signature base string");

    Ok(SignatureBase {
        endpoint,
        base_string,
        parameters,
    })
}
