//! OAuth 1.0a one-legged HMAC-SHA1 signing.
//!
//! - [RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849)
//! - [Creating a signature](https://developer.twitter.com/en/docs/authentication/oauth-1-0a/creating-a-signature)

use crate::constants::*;
use crate::Credential;
use chirpsign_core::hash::{base64_encode, base64_hmac_sha1};
use chirpsign_core::{Error, Result};
use http::{Method, Uri};
use log::debug;
use percent_encoding::{percent_decode_str, percent_encode as encode_bytes, utf8_percent_encode};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Write};

/// A request to be signed: method, base URL and query parameters.
///
/// The query is kept apart from the URL so the canonical form can be
/// rebuilt deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    method: Method,
    base_url: String,
    query: Vec<(String, String)>,
}

impl OAuthRequest {
    /// Create a request without parameters.
    pub fn new(method: Method, base_url: impl Into<String>) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            query: Vec::new(),
        }
    }

    /// Create a `GET` request without parameters.
    pub fn get(base_url: impl Into<String>) -> Self {
        Self::new(Method::GET, base_url)
    }

    /// Append a query parameter.
    ///
    /// Values go through `Display`, so `10` becomes `"10"` and `true`
    /// becomes `"true"`.
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push_param(key, value);
        self
    }

    /// Append a query parameter in place.
    pub fn push_param(&mut self, key: impl Into<String>, value: impl Display) {
        self.query.push((key.into(), value.to_string()));
    }

    /// HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL of this request without the query.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query parameters in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Build a request out of the parts of an `http::Request`.
    ///
    /// Query values are kept as they appear on the wire; they are decoded
    /// once during canonicalization.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;
        let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
            return Err(Error::request_invalid(format!(
                "request uri {uri} must be absolute to be signed"
            )));
        };

        let mut query = Vec::new();
        for pair in uri.query().unwrap_or_default().split('&') {
            if pair.is_empty() {
                continue;
            }
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode_str(k).decode_utf8().map_err(|e| {
                Error::request_invalid(format!("query key {k} is not valid utf-8"))
                    .with_source(e)
            })?;
            query.push((key.into_owned(), v.to_string()));
        }

        Ok(Self {
            method: parts.method.clone(),
            base_url: format!("{scheme}://{authority}{}", uri.path()),
            query,
        })
    }

    /// Render the full URI with every query value percent encoded.
    pub fn to_uri(&self) -> Result<Uri> {
        if self.query.is_empty() {
            return Ok(self.base_url.parse()?);
        }

        let mut s = self.base_url.clone();
        s.push('?');
        for (i, (k, v)) in self.query.iter().enumerate() {
            if i > 0 {
                s.push('&');
            }
            write!(s, "{}={}", percent_encode(k), percent_encode(v))?;
        }

        Ok(s.parse()?)
    }

    fn validate(&self) -> Result<()> {
        if self.method.as_str().bytes().any(|b| b.is_ascii_lowercase()) {
            return Err(Error::request_invalid(format!(
                "http method {} must be uppercase",
                self.method
            )));
        }

        let uri: Uri = self.base_url.parse()?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::request_invalid(format!(
                "base url {} must be absolute",
                self.base_url
            )));
        }
        if uri.query().is_some() {
            return Err(Error::request_invalid(format!(
                "base url {} must not carry a query, pass parameters separately",
                self.base_url
            )));
        }

        Ok(())
    }
}

/// Percent encode `s` with the OAuth 1.0a unreserved set.
///
/// ```
/// use chirpsign_twitter::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("(it's)*!"), "%28it%27s%29%2A%21");
/// ```
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, &OAUTH1_ENCODE_SET).to_string()
}

/// Build the canonical parameter string.
///
/// Caller parameters are decoded and then encoded again so that values
/// arriving already encoded are not encoded twice. Both steps work on bytes,
/// so an escape like `%FF` that is not valid UTF-8 is signed as sent. The
/// reserved `oauth_*`
/// parameters are encoded directly and replace caller parameters of the
/// same name. Keys are sorted by byte order and emitted as is.
pub fn canonical_parameters(query: &[(String, String)], oauth: &[(&str, &str)]) -> String {
    let mut merged: BTreeMap<&str, String> = BTreeMap::new();
    for (k, v) in query {
        let decoded: Vec<u8> = percent_decode_str(v).collect();
        merged.insert(k, encode_bytes(&decoded, &OAUTH1_ENCODE_SET).to_string());
    }
    for (k, v) in oauth {
        if merged.insert(k, percent_encode(v)).is_some() {
            debug!("query parameter {k} collides with a reserved oauth parameter, oauth value wins");
        }
    }

    let mut s = String::with_capacity(256);
    for (i, (k, v)) in merged.iter().enumerate() {
        if i > 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

/// Build the signature base string: `METHOD&url&parameters`.
pub fn base_string(method: &Method, base_url: &str, canonical_parameters: &str) -> String {
    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(base_url),
        percent_encode(canonical_parameters)
    )
}

/// Build the HMAC key: `consumer_secret&access_token_secret`, not encoded.
pub fn signing_key(cred: &Credential) -> String {
    format!("{}&{}", cred.consumer_secret, cred.access_token_secret)
}

/// Nonce scheme of the original site: `base64(consumer_key:timestamp)`.
///
/// # Security
///
/// This nonce is deterministic and guessable. It is kept because existing
/// consumers expect it; use [`RandomNonce`] for anything new.
pub fn legacy_nonce(cred: &Credential, timestamp: i64) -> String {
    base64_encode(format!("{}:{}", cred.consumer_key, timestamp).as_bytes())
}

/// Sign `req` and return the value of the `Authorization` header.
///
/// `clock` returns seconds since the unix epoch and `nonce` derives the
/// `oauth_nonce` from the credential and that timestamp. Both are injected
/// so the result is deterministic under test.
///
/// Fails with `ConfigInvalid` when any credential part is empty and with
/// `RequestInvalid` when the request is malformed.
///
/// ```
/// use chirpsign_twitter::{sign, Credential, OAuthRequest};
///
/// let req = OAuthRequest::get("https://api.twitter.com/1.1/statuses/user_timeline.json")
///     .param("username", "yuschick")
///     .param("count", 10);
/// let cred = Credential::new("consumer-key", "consumer-secret", "access-token", "access-token-secret");
///
/// let header = sign(&req, &cred, || 1609459200, |_, _| "fixed-nonce-seed".to_string()).unwrap();
/// assert!(header.starts_with("OAuth oauth_consumer_key=\"consumer-key\""));
/// assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
/// ```
pub fn sign<C, N>(req: &OAuthRequest, cred: &Credential, clock: C, nonce: N) -> Result<String>
where
    C: FnOnce() -> i64,
    N: FnOnce(&Credential, i64) -> String,
{
    cred.validate()?;
    req.validate()?;

    let timestamp = clock();
    let nonce = nonce(cred, timestamp);
    let timestamp = timestamp.to_string();

    let canonical = canonical_parameters(
        &req.query,
        &[
            (OAUTH_CONSUMER_KEY, cred.consumer_key.as_str()),
            (OAUTH_NONCE, nonce.as_str()),
            (OAUTH_SIGNATURE_METHOD, HMAC_SHA1),
            (OAUTH_TIMESTAMP, timestamp.as_str()),
            (OAUTH_TOKEN, cred.access_token.as_str()),
            (OAUTH_VERSION, OAUTH_VERSION_1_0),
        ],
    );
    let base = base_string(&req.method, &req.base_url, &canonical);
    debug!("calculated signature base string: {base}");

    let signature = base64_hmac_sha1(signing_key(cred).as_bytes(), base.as_bytes());

    // The header order is fixed and independent of the canonical sort.
    let fields = [
        (OAUTH_CONSUMER_KEY, cred.consumer_key.as_str()),
        (OAUTH_TOKEN, cred.access_token.as_str()),
        (OAUTH_SIGNATURE_METHOD, HMAC_SHA1),
        (OAUTH_TIMESTAMP, timestamp.as_str()),
        (OAUTH_NONCE, nonce.as_str()),
        (OAUTH_VERSION, OAUTH_VERSION_1_0),
        (OAUTH_SIGNATURE, signature.as_str()),
    ];
    let mut header = String::from("OAuth ");
    for (i, (k, v)) in fields.iter().enumerate() {
        if i > 0 {
            header.push(',');
        }
        write!(header, "{k}=\"{}\"", percent_encode(v))?;
    }

    Ok(header)
}

/// NonceSource produces the `oauth_nonce` for a signing operation.
pub trait NonceSource: Debug + Send + Sync + 'static {
    /// Produce a nonce for `cred` at `timestamp`.
    fn nonce(&self, cred: &Credential, timestamp: i64) -> String;
}

/// The original `base64(consumer_key:timestamp)` nonce. See [`legacy_nonce`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyNonce;

impl NonceSource for LegacyNonce {
    fn nonce(&self, cred: &Credential, timestamp: i64) -> String {
        legacy_nonce(cred, timestamp)
    }
}

/// 32 random alphanumeric characters from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn nonce(&self, _: &Credential, _: i64) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    }
}

/// Always the same nonce. Only useful for reproducing a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNonce(pub String);

impl NonceSource for FixedNonce {
    fn nonce(&self, _: &Credential, _: i64) -> String {
        self.0.clone()
    }
}
