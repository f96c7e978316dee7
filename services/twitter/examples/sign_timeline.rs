//! Sign a user timeline request and print it as a curl command.
//!
//! ```bash
//! TWITTER_CONSUMER_KEY=.. TWITTER_CONSUMER_SECRET=.. \
//! TWITTER_ACCESS_TOKEN=.. TWITTER_ACCESS_TOKEN_SECRET=.. \
//! cargo run --example sign_timeline -- yuschick
//! ```

use chirpsign_core::{Context, OsEnv, Signer};
use chirpsign_file_read_tokio::TokioFileRead;
use chirpsign_twitter::{DefaultCredentialProvider, RandomNonce, RequestSigner, UserTimeline};
use http::header::AUTHORIZATION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let screen_name = std::env::args().nth(1).unwrap_or_else(|| "yuschick".to_string());

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new().with_nonce(RandomNonce),
    );

    let (mut parts, _) = UserTimeline::new(screen_name).to_http_request()?.into_parts();
    signer.sign(&mut parts, None).await?;

    println!(
        "curl -H 'Authorization: {}' '{}'",
        parts.headers[AUTHORIZATION].to_str()?,
        parts.uri
    );
    Ok(())
}
