use crate::oauth1::{sign, LegacyNonce, NonceSource, OAuthRequest};
use crate::Credential;
use async_trait::async_trait;
use chirpsign_core::time::{now, unix_timestamp, DateTime};
use chirpsign_core::{Context, Error, Result, SignRequest};
use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;
use std::time::Duration;

/// RequestSigner for twitter OAuth 1.0a signatures.
#[derive(Debug)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Box<dyn NonceSource>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer using [`LegacyNonce`].
    pub fn new() -> Self {
        Self {
            time: None,
            nonce: Box::new(LegacyNonce),
        }
    }

    /// Use another nonce source, for example [`RandomNonce`](crate::RandomNonce).
    pub fn with_nonce(mut self, nonce: impl NonceSource) -> Self {
        self.nonce = Box::new(nonce);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "oauth 1.0a requests can't be presigned, expires_in must be None",
            ));
        }
        let Some(cred) = credential else {
            return Err(Error::config_invalid(
                "no twitter credential could be loaded",
            ));
        };

        let oauth = OAuthRequest::from_parts(req)?;
        let signing_time = self.get_time();
        let auth = sign(
            &oauth,
            cred,
            || unix_timestamp(signing_time),
            |c, ts| self.nonce.nonce(c, ts),
        )?;
        debug!(
            "signed {} {} with {} query parameters",
            oauth.method(),
            oauth.base_url(),
            oauth.query().len()
        );

        let mut value: HeaderValue = auth.parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}
