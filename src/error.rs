//! Error types returned by the signing pipeline.

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced to the caller of the signing pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was absent or empty.
    #[error("{field} has to be set")]
    MissingInput {
        /// Which input was missing.
        field: &'static str,
    },

    /// An `oauth*` parameter carried several values and cannot go into a header.
    #[error("parameter `{key}` has multiple values; arrays are not supported in headers")]
    UnsupportedParameterShape {
        /// The encoded parameter name.
        key: String,
    },

    /// The resolved target URL could not be parsed.
    #[error("invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Only GET and POST are signed.
    #[error("unsupported HTTP method `{0}`; only GET and POST are accepted")]
    UnsupportedMethod(String),

    /// reqwest refused a header value built by the signer.
    #[cfg(feature = "reqwest")]
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}
