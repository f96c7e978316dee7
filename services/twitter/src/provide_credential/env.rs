use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use chirpsign_core::{Context, ProvideCredential, Result};
use log::debug;

/// EnvCredentialProvider loads twitter credentials from environment variables.
///
/// - [`TWITTER_CONSUMER_KEY`] or [`GATSBY_TWITTER_KEY`]
/// - [`TWITTER_CONSUMER_SECRET`] or [`GATSBY_TWITTER_SECRET`]
/// - [`TWITTER_ACCESS_TOKEN`] or [`GATSBY_TWITTER_TOKEN`]
/// - [`TWITTER_ACCESS_TOKEN_SECRET`] or [`GATSBY_TWITTER_TOKEN_SECRET`]
///
/// All four must be present.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let non_empty = |name: &str| ctx.env_var(name).filter(|v| !v.is_empty());
        let get = |name: &str, fallback: &str| non_empty(name).or_else(|| non_empty(fallback));

        let values = (
            get(TWITTER_CONSUMER_KEY, GATSBY_TWITTER_KEY),
            get(TWITTER_CONSUMER_SECRET, GATSBY_TWITTER_SECRET),
            get(TWITTER_ACCESS_TOKEN, GATSBY_TWITTER_TOKEN),
            get(TWITTER_ACCESS_TOKEN_SECRET, GATSBY_TWITTER_TOKEN_SECRET),
        );

        match values {
            (Some(ck), Some(cs), Some(at), Some(ats)) => {
                Ok(Some(Credential::new(ck, cs, at, ats)))
            }
            (None, None, None, None) => Ok(None),
            _ => {
                debug!("twitter credential is only partially set in env, skipping");
                Ok(None)
            }
        }
    }
}
