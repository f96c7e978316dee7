//! Building and fetching a user timeline.

use crate::constants::USER_TIMELINE_ENDPOINT;
use crate::oauth1::OAuthRequest;
use crate::{Credential, Tweet};
use bytes::Bytes;
use chirpsign_core::{Error, Result, Signer};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Method;
use log::debug;

/// Query for `statuses/user_timeline.json`.
///
/// Defaults match what a portfolio page wants: the ten latest tweets in
/// extended mode, without replies or retweets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTimeline {
    screen_name: String,
    count: u32,
    exclude_replies: bool,
    include_rts: bool,
}

impl UserTimeline {
    /// Timeline of `screen_name` with default options.
    pub fn new(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            count: 10,
            exclude_replies: true,
            include_rts: false,
        }
    }

    /// Number of tweets to request.
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Whether replies are left out.
    pub fn exclude_replies(mut self, exclude_replies: bool) -> Self {
        self.exclude_replies = exclude_replies;
        self
    }

    /// Whether retweets are included.
    pub fn include_rts(mut self, include_rts: bool) -> Self {
        self.include_rts = include_rts;
        self
    }

    /// The request to sign.
    pub fn to_oauth_request(&self) -> OAuthRequest {
        OAuthRequest::get(USER_TIMELINE_ENDPOINT)
            .param("screen_name", &self.screen_name)
            .param("count", self.count)
            .param("tweet_mode", "extended")
            .param("exclude_replies", self.exclude_replies)
            .param("include_rts", self.include_rts)
    }

    /// An unsigned `GET` request ready for [`Signer::sign`].
    pub fn to_http_request(&self) -> Result<http::Request<Bytes>> {
        Ok(http::Request::builder()
            .method(Method::GET)
            .uri(self.to_oauth_request().to_uri()?)
            .header(ACCEPT, "application/json")
            .body(Bytes::new())?)
    }
}

/// TimelineClient signs timeline requests and sends them through the
/// signer's [`Context`](chirpsign_core::Context).
#[derive(Debug, Clone)]
pub struct TimelineClient {
    signer: Signer<Credential>,
}

impl TimelineClient {
    /// Create a client on top of a twitter signer.
    pub fn new(signer: Signer<Credential>) -> Self {
        Self { signer }
    }

    /// Fetch the tweets of a timeline.
    pub async fn fetch(&self, timeline: &UserTimeline) -> Result<Vec<Tweet>> {
        let (mut parts, body) = timeline.to_http_request()?.into_parts();
        self.signer.sign(&mut parts, None).await?;

        let resp = self
            .signer
            .context()
            .http_send(http::Request::from_parts(parts, body))
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = String::from_utf8_lossy(resp.body());
            return Err(Error::unexpected(format!(
                "user timeline request failed with {status}: {body}"
            )));
        }
        if let Some(ct) = resp.headers().get(CONTENT_TYPE) {
            debug!("user timeline responded with content type {ct:?}");
        }

        let tweets: Vec<Tweet> = serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected("failed to parse user timeline response").with_source(e)
        })?;
        debug!("fetched {} tweets", tweets.len());
        Ok(tweets)
    }
}
