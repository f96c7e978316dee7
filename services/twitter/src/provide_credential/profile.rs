use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use chirpsign_core::{Context, Error, ProvideCredential, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

/// ProfileCredentialProvider loads twitter credentials from a TOML file.
///
/// ```toml
/// [default]
/// consumer_key = "..."
/// consumer_secret = "..."
/// access_token = "..."
/// access_token_secret = "..."
/// ```
///
/// The file is taken from:
/// 1. The path specified via `with_config_file()`
/// 2. The `TWITTER_CONFIG_FILE` environment variable
/// 3. Default to `~/.config/chirpsign/credentials.toml`
///
/// The profile is taken from:
/// 1. The profile specified via `with_profile()`
/// 2. The `TWITTER_PROFILE` environment variable
/// 3. Default to "default"
///
/// A missing file or profile yields no credential. A file that is not
/// valid TOML fails with `ConfigInvalid`.
#[derive(Debug, Default, Clone)]
pub struct ProfileCredentialProvider {
    profile: Option<String>,
    config_file: Option<String>,
}

#[derive(Deserialize)]
struct ProfileEntry {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    access_token_secret: Option<String>,
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name to use.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the path to the credentials file.
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let profile = self
            .profile
            .clone()
            .or_else(|| ctx.env_var(TWITTER_PROFILE))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        let path = self
            .config_file
            .clone()
            .or_else(|| ctx.env_var(TWITTER_CONFIG_FILE))
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let expanded_path = if path.starts_with("~/") {
            match ctx.expand_home_dir(&path) {
                Some(expanded) => expanded,
                None => {
                    debug!("failed to expand homedir for path: {path}");
                    return Ok(None);
                }
            }
        } else {
            path
        };

        let content = match ctx.file_read_as_string(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read twitter credentials file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let mut profiles: HashMap<String, ProfileEntry> =
            toml::from_str(&content).map_err(|e| {
                Error::config_invalid(format!(
                    "failed to parse twitter credentials file {expanded_path}"
                ))
                .with_source(anyhow::Error::new(e))
            })?;

        let Some(entry) = profiles.remove(&profile) else {
            debug!("profile {profile} not found in {expanded_path}");
            return Ok(None);
        };

        match entry {
            ProfileEntry {
                consumer_key: Some(ck),
                consumer_secret: Some(cs),
                access_token: Some(at),
                access_token_secret: Some(ats),
            } => Ok(Some(Credential::new(ck, cs, at, ats))),
            _ => {
                debug!("profile {profile} in {expanded_path} is incomplete");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpsign_core::{ErrorKind, StaticEnv};
    use chirpsign_file_read_tokio::TokioFileRead;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const CREDENTIALS: &str = r#"
[default]
consumer_key = "ck"
consumer_secret = "cs"
access_token = "at"
access_token_secret = "ats"

[site]
consumer_key = "site-ck"
consumer_secret = "site-cs"
access_token = "site-at"
access_token_secret = "site-ats"

[broken]
consumer_key = "only-key"
"#;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(PathBuf::from("/nonexistent-home")),
                envs: HashMap::from_iter(
                    envs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
                ),
            })
    }

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_profile_default() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let file = credentials_file(CREDENTIALS);
        let provider =
            ProfileCredentialProvider::new().with_config_file(file.path().to_string_lossy());

        let cred = provider.provide_credential(&ctx(&[])).await?;
        assert_eq!(cred, Some(Credential::new("ck", "cs", "at", "ats")));
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_from_env() -> Result<()> {
        let file = credentials_file(CREDENTIALS);
        let path = file.path().to_string_lossy().to_string();
        let ctx = ctx(&[(TWITTER_CONFIG_FILE, &path), (TWITTER_PROFILE, "site")]);

        let cred = ProfileCredentialProvider::new()
            .provide_credential(&ctx)
            .await?;
        assert_eq!(
            cred,
            Some(Credential::new("site-ck", "site-cs", "site-at", "site-ats"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_profile_beats_env() -> Result<()> {
        let file = credentials_file(CREDENTIALS);
        let path = file.path().to_string_lossy().to_string();
        let ctx = ctx(&[(TWITTER_CONFIG_FILE, &path), (TWITTER_PROFILE, "site")]);

        let cred = ProfileCredentialProvider::new()
            .with_profile("default")
            .provide_credential(&ctx)
            .await?;
        assert_eq!(cred, Some(Credential::new("ck", "cs", "at", "ats")));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_or_incomplete_profile() -> Result<()> {
        let file = credentials_file(CREDENTIALS);
        let path = file.path().to_string_lossy().to_string();

        for profile in ["unknown", "broken"] {
            let cred = ProfileCredentialProvider::new()
                .with_config_file(&path)
                .with_profile(profile)
                .provide_credential(&ctx(&[]))
                .await?;
            assert_eq!(cred, None, "profile {profile}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file() -> Result<()> {
        let cred = ProfileCredentialProvider::new()
            .provide_credential(&ctx(&[]))
            .await?;
        assert_eq!(cred, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_toml() {
        let file = credentials_file("[default\nconsumer_key = ");
        let err = ProfileCredentialProvider::new()
            .with_config_file(file.path().to_string_lossy())
            .provide_credential(&ctx(&[]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
