//! OAuth 1.0 Authorization header signer for the Frameweld API.
//!
//! ```no_run
//! use frameweld_oauth::{ClientConfig, HttpMethod, OAuthClient, SigningRequest};
//!
//! let client = OAuthClient::new(ClientConfig::new("http://api.recapd.com/"));
//! let request = SigningRequest::new(HttpMethod::Get, "/v1/videos?page=2", "public", "private");
//! let header = client.authorize(&request)?;
//! println!("{}", header);
//! # Ok::<(), frameweld_oauth::Error>(())
//! ```

pub mod config;
pub mod encoder;
pub mod error;
pub mod parameters;
pub mod request;
pub mod v1;

mod util;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use parameters::{ParameterSet, ParameterValue};
pub use request::{HttpMethod, SigningRequest};
pub use util::{join_url, parse_query, url_to_endpoint_and_queries};
pub use v1::{AuthorizationHeader, OAuthClient, ProtocolParameters};
