use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::SigningRequest;
use crate::v1::*;

/// OAuth 1.0 Authorization header generator for one API server.
///
/// Holds only caller-supplied configuration; every call builds its own
/// parameters, so a client can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct OAuthClient {
    config: ClientConfig,
}

impl OAuthClient {
    pub fn new(config: ClientConfig) -> Self {
        OAuthClient { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sign `request` with a fresh nonce and the current timestamp.
    pub fn authorize(&self, request: &SigningRequest) -> Result<AuthorizationHeader> {
        request.validate()?;
        self.sign_impl(request, &ProtocolParameters::new(request.public_key.as_str()))
    }

    /// Sign `request` with caller-chosen protocol parameters.
    ///
    /// Identical inputs produce an identical header.
    pub fn authorize_with(
        &self,
        request: &SigningRequest,
        protocol: &ProtocolParameters,
    ) -> Result<AuthorizationHeader> {
        request.validate()?;
        self.sign_impl(request, protocol)
    }

    /// Value of the `Accept` header to send with every signed request.
    pub fn accept_header(&self) -> String {
        self.config.accept_header()
    }

    fn sign_impl(
        &self,
        request: &SigningRequest,
        protocol: &ProtocolParameters,
    ) -> Result<AuthorizationHeader> {
        let url = self.config.resolve_url(&request.url);
        let base = build_base_string(request.method, &url, protocol)?;
        let signature = signer::sign(&base.base_string, &request.private_key);
        let header = build_header(&base.parameters, &signature)?;
        tracing::debug!(
            method = %request.method,
            endpoint = %base.endpoint,
            consumer_key = protocol.consumer_key(),
            "signed request"
        );
        Ok(header)
    }
}

#[cfg(feature = "reqwest")]
impl OAuthClient {
    /// Build a `reqwest` request for `request` with the `Authorization` and
    /// `Accept` headers attached. Sending it is up to the caller.
    pub fn request(
        &self,
        client: &reqwest::Client,
        request: &SigningRequest,
    ) -> Result<reqwest::RequestBuilder> {
        use crate::request::HttpMethod;
        use crate::util::with_default_scheme;
        use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};

        let header = self.authorize(request)?;
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let url = url::Url::parse(&with_default_scheme(&self.config.resolve_url(&request.url)))?;
        Ok(client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_str(&self.accept_header())?)
            .header(AUTHORIZATION, HeaderValue::from_str(header.value())?))
    }
}
