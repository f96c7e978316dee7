//! Twitter API request signing and tweet rendering for chirpsign.
//!
//! This crate signs Twitter v1.1 API requests with OAuth 1.0a (HMAC-SHA1)
//! and turns tweet text into plain and linked segments.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chirpsign_core::{Context, OsEnv, Result, Signer};
//! use chirpsign_file_read_tokio::TokioFileRead;
//! use chirpsign_http_send_reqwest::ReqwestHttpSend;
//! use chirpsign_twitter::{DefaultCredentialProvider, RequestSigner, TimelineClient, UserTimeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!     let client = TimelineClient::new(signer);
//!
//!     for tweet in client.fetch(&UserTimeline::new("yuschick")).await? {
//!         for segment in tweet.segments()? {
//!             print!("{}", segment.text());
//!         }
//!         println!();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Signing without a context
//!
//! [`sign`] is a pure function. Clock and nonce are passed in, which makes
//! it easy to reproduce a signature:
//!
//! ```
//! use chirpsign_twitter::{legacy_nonce, sign, Credential, OAuthRequest};
//!
//! let cred = Credential::new("consumer-key", "consumer-secret", "access-token", "access-token-secret");
//! let req = OAuthRequest::get("https://api.twitter.com/1.1/statuses/user_timeline.json")
//!     .param("screen_name", "yuschick")
//!     .param("count", 10);
//!
//! let header = sign(&req, &cred, || 1609459200, legacy_nonce).unwrap();
//! assert!(header.starts_with("OAuth "));
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export TWITTER_CONSUMER_KEY=your-consumer-key
//! export TWITTER_CONSUMER_SECRET=your-consumer-secret
//! export TWITTER_ACCESS_TOKEN=your-access-token
//! export TWITTER_ACCESS_TOKEN_SECRET=your-access-token-secret
//! ```
//!
//! `GATSBY_TWITTER_KEY`, `GATSBY_TWITTER_SECRET`, `GATSBY_TWITTER_TOKEN` and
//! `GATSBY_TWITTER_TOKEN_SECRET` are read when the names above are unset.
//!
//! ### Profile File
//!
//! `~/.config/chirpsign/credentials.toml` (or `TWITTER_CONFIG_FILE`), one
//! table per profile, selected by `TWITTER_PROFILE`.
//!
//! ## Nonces
//!
//! [`RequestSigner`] uses [`LegacyNonce`] by default, which derives the
//! nonce from the consumer key and timestamp. It is predictable; switch to
//! [`RandomNonce`] with [`RequestSigner::with_nonce`] unless you need to
//! match existing signatures.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod oauth1;
pub use oauth1::{
    base_string, canonical_parameters, legacy_nonce, percent_encode, sign, signing_key,
    FixedNonce, LegacyNonce, NonceSource, OAuthRequest, RandomNonce,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

mod entity;
pub use entity::{splice_entities, EntityCategory, EntityRange, TextSegment};

mod tweet;
pub use tweet::{Entities, Hashtag, Media, Tweet, UrlEntity, User, UserMention};

mod timeline;
pub use timeline::{TimelineClient, UserTimeline};
