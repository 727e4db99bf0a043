//! OAuth 1.0 HMAC-SHA1 request signing.
//!
//! [`OAuthClient`] runs the whole pipeline: merge query and protocol
//! parameters, build the base string, sign it and serialize the
//! `Authorization` header. The stages are public for callers that need
//! them separately.

mod base_string;
mod client;
mod header;
pub mod nonce;
mod protocol;
pub mod signer;
mod values;

pub use base_string::{build_base_string, SignatureBase};
pub use client::OAuthClient;
pub use header::{build_header, AuthorizationHeader};
pub use protocol::ProtocolParameters;
pub use values::*;
