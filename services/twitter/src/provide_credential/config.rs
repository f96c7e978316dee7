use crate::{Config, Credential};
use async_trait::async_trait;
use chirpsign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider returns the credential carried by a [`Config`].
///
/// Call [`Config::from_env`] first to merge in environment values.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        let c = &self.config;
        match (
            &c.consumer_key,
            &c.consumer_secret,
            &c.access_token,
            &c.access_token_secret,
        ) {
            (Some(ck), Some(cs), Some(at), Some(ats)) => {
                Ok(Some(Credential::new(ck, cs, at, ats)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use chirpsign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_config_loader_with_credentials() -> Result<()> {
        let config = Config {
            consumer_key: Some("ck".to_string()),
            consumer_secret: Some("cs".to_string()),
            access_token: Some("at".to_string()),
            access_token_secret: Some("ats".to_string()),
            ..Default::default()
        };

        let loader = ConfigCredentialProvider::new(Arc::new(config));
        let cred = loader.provide_credential(&Context::new()).await?;

        assert_eq!(cred, Some(Credential::new("ck", "cs", "at", "ats")));
        Ok(())
    }

    #[tokio::test]
    async fn test_config_loader_merged_with_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (GATSBY_TWITTER_TOKEN.to_string(), "at".to_string()),
                (GATSBY_TWITTER_TOKEN_SECRET.to_string(), "ats".to_string()),
            ]),
        });
        let config = Config {
            consumer_key: Some("ck".to_string()),
            consumer_secret: Some("cs".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        let loader = ConfigCredentialProvider::new(Arc::new(config));
        let cred = loader.provide_credential(&ctx).await?;

        assert_eq!(cred, Some(Credential::new("ck", "cs", "at", "ats")));
        Ok(())
    }

    #[tokio::test]
    async fn test_config_loader_without_credentials() -> Result<()> {
        let loader = ConfigCredentialProvider::new(Arc::new(Config::default()));
        let cred = loader.provide_credential(&Context::new()).await?;

        assert!(cred.is_none());
        Ok(())
    }
}
