use crate::constants::*;
use chirpsign_core::utils::Redact;
use chirpsign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for twitter credentials.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_CONSUMER_KEY`]
    /// - env value: [`GATSBY_TWITTER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_CONSUMER_SECRET`]
    /// - env value: [`GATSBY_TWITTER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_ACCESS_TOKEN`]
    /// - env value: [`GATSBY_TWITTER_TOKEN`]
    pub access_token: Option<String>,
    /// `access_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_ACCESS_TOKEN_SECRET`]
    /// - env value: [`GATSBY_TWITTER_TOKEN_SECRET`]
    pub access_token_secret: Option<String>,
    /// `profile` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_PROFILE`]
    /// - default to `default`
    pub profile: Option<String>,
    /// `config_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TWITTER_CONFIG_FILE`]
    /// - default to `~/.config/chirpsign/credentials.toml`
    pub config_file: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("access_token_secret", &Redact::from(&self.access_token_secret))
            .field("profile", &self.profile)
            .field("config_file", &self.config_file)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let non_empty = |name: &str| ctx.env_var(name).filter(|v| !v.is_empty());
        let pairs = [
            (&mut self.consumer_key, TWITTER_CONSUMER_KEY, GATSBY_TWITTER_KEY),
            (
                &mut self.consumer_secret,
                TWITTER_CONSUMER_SECRET,
                GATSBY_TWITTER_SECRET,
            ),
            (&mut self.access_token, TWITTER_ACCESS_TOKEN, GATSBY_TWITTER_TOKEN),
            (
                &mut self.access_token_secret,
                TWITTER_ACCESS_TOKEN_SECRET,
                GATSBY_TWITTER_TOKEN_SECRET,
            ),
        ];
        for (field, name, fallback) in pairs {
            if let Some(v) = non_empty(name).or_else(|| non_empty(fallback)) {
                field.get_or_insert(v);
            }
        }

        if let Some(v) = non_empty(TWITTER_PROFILE) {
            self.profile.get_or_insert(v);
        }
        if let Some(v) = non_empty(TWITTER_CONFIG_FILE) {
            self.config_file.get_or_insert(v);
        }

        self
    }
}
