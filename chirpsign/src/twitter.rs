//! Twitter support with convenience APIs
//!
//! This module re-exports `chirpsign-twitter` and adds a ready to use
//! signer.

pub use chirpsign_twitter::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default twitter Signer type with commonly used components
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default twitter signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (with Tokio file reader, reqwest HTTP client, OS environment)
/// - Default credential provider (env vars, then `~/.config/chirpsign/credentials.toml`)
/// - Request signer using random nonces
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> chirpsign::Result<()> {
/// let signer = chirpsign::twitter::default_signer();
///
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri("https://api.twitter.com/1.1/statuses/user_timeline.json?screen_name=yuschick")
///     .body(())
///     .unwrap()
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req, None).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new().with_nonce(RandomNonce);
    Signer::new(ctx, provider, signer)
}

/// Create a default client for fetching user timelines.
#[cfg(feature = "default-context")]
pub fn default_client() -> TimelineClient {
    TimelineClient::new(default_signer())
}
