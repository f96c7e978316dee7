use chirpsign_core::utils::Redact;
use chirpsign_core::{Error, Result, SigningCredential};
use std::fmt::{Debug, Formatter};

/// Credential holds the long-lived keys of a twitter app and the user it
/// acts for.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Consumer (API) key of the app.
    pub consumer_key: String,
    /// Consumer (API) secret of the app.
    pub consumer_secret: String,
    /// Access token of the user.
    pub access_token: String,
    /// Access token secret of the user.
    pub access_token_secret: String,
}

impl Credential {
    /// Create a new credential from its four parts.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Check that every part is present.
    ///
    /// Returns a [`ErrorKind::ConfigInvalid`](chirpsign_core::ErrorKind::ConfigInvalid)
    /// error naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ];

        match fields.iter().find(|(_, v)| v.is_empty()) {
            Some((name, _)) => Err(Error::config_invalid(format!(
                "twitter credential field {name} is empty"
            ))),
            None => Ok(()),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("access_token_secret", &Redact::from(&self.access_token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpsign_core::ErrorKind;
    use test_case::test_case;

    fn full() -> Credential {
        Credential::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
    }

    #[test]
    fn test_full_credential_is_valid() {
        assert!(full().is_valid());
        assert!(full().validate().is_ok());
    }

    #[test_case(|c: &mut Credential| c.consumer_key.clear(), "consumer_key"; "consumer key")]
    #[test_case(|c: &mut Credential| c.consumer_secret.clear(), "consumer_secret"; "consumer secret")]
    #[test_case(|c: &mut Credential| c.access_token.clear(), "access_token"; "access token")]
    #[test_case(|c: &mut Credential| c.access_token_secret.clear(), "access_token_secret"; "token secret")]
    fn test_empty_field_is_config_error(clear: fn(&mut Credential), field: &str) {
        let mut cred = full();
        clear(&mut cred);

        assert!(!cred.is_valid());
        let err = cred.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let out = format!("{:?}", full());
        assert!(!out.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
        assert!(out.contains("kAc***kBw"));
    }
}
