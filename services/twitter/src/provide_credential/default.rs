use crate::provide_credential::{EnvCredentialProvider, ProfileCredentialProvider};
use crate::Credential;
use async_trait::async_trait;
use chirpsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Environment variables
/// 2. Profile file (`~/.config/chirpsign/credentials.toml`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(ProfileCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chirpsign_twitter::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("ck", "cs", "at", "ats"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use chirpsign_core::StaticEnv;
    use chirpsign_file_read_tokio::TokioFileRead;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn ctx(envs: HashMap<String, String>) -> Context {
        Context::new().with_file_read(TokioFileRead).with_env(StaticEnv {
            home_dir: None,
            envs,
        })
    }

    #[tokio::test]
    async fn test_default_loader_without_env() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx(HashMap::new()))
            .await?;
        assert!(cred.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_default_loader_env_before_profile() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[default]\nconsumer_key = \"file-ck\"\nconsumer_secret = \"file-cs\"\n\
             access_token = \"file-at\"\naccess_token_secret = \"file-ats\""
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let only_file = HashMap::from([(TWITTER_CONFIG_FILE.to_string(), path.clone())]);
        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx(only_file))
            .await?;
        assert_eq!(cred.map(|c| c.consumer_key), Some("file-ck".to_string()));

        let both = HashMap::from([
            (TWITTER_CONFIG_FILE.to_string(), path),
            (TWITTER_CONSUMER_KEY.to_string(), "env-ck".to_string()),
            (TWITTER_CONSUMER_SECRET.to_string(), "env-cs".to_string()),
            (TWITTER_ACCESS_TOKEN.to_string(), "env-at".to_string()),
            (TWITTER_ACCESS_TOKEN_SECRET.to_string(), "env-ats".to_string()),
        ]);
        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx(both))
            .await?;
        assert_eq!(cred.map(|c| c.consumer_key), Some("env-ck".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_push_front() -> Result<()> {
        let envs = HashMap::from([
            (TWITTER_CONSUMER_KEY.to_string(), "env-ck".to_string()),
            (TWITTER_CONSUMER_SECRET.to_string(), "env-cs".to_string()),
            (TWITTER_ACCESS_TOKEN.to_string(), "env-at".to_string()),
            (TWITTER_ACCESS_TOKEN_SECRET.to_string(), "env-ats".to_string()),
        ]);

        let cred = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("ck", "cs", "at", "ats"))
            .provide_credential(&ctx(envs))
            .await?;
        assert_eq!(cred, Some(Credential::new("ck", "cs", "at", "ats")));
        Ok(())
    }

    #[tokio::test]
    async fn test_with_chain() -> Result<()> {
        let chain = ProvideCredentialChain::new()
            .push(StaticCredentialProvider::new("ck", "cs", "at", "ats"));
        let provider = DefaultCredentialProvider::with_chain(chain);

        let cred = provider.provide_credential(&Context::new()).await?;
        assert!(cred.is_some());
        Ok(())
    }
}
