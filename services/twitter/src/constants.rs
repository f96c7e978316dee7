use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the twitter credential providers.
pub const TWITTER_CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
pub const TWITTER_CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";
pub const TWITTER_ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";
pub const TWITTER_ACCESS_TOKEN_SECRET: &str = "TWITTER_ACCESS_TOKEN_SECRET";
pub const TWITTER_PROFILE: &str = "TWITTER_PROFILE";
pub const TWITTER_CONFIG_FILE: &str = "TWITTER_CONFIG_FILE";

// Names the gatsby site exposed its keys under; still honored as fallbacks.
pub const GATSBY_TWITTER_KEY: &str = "GATSBY_TWITTER_KEY";
pub const GATSBY_TWITTER_SECRET: &str = "GATSBY_TWITTER_SECRET";
pub const GATSBY_TWITTER_TOKEN: &str = "GATSBY_TWITTER_TOKEN";
pub const GATSBY_TWITTER_TOKEN_SECRET: &str = "GATSBY_TWITTER_TOKEN_SECRET";

pub const DEFAULT_CONFIG_FILE: &str = "~/.config/chirpsign/credentials.toml";
pub const DEFAULT_PROFILE: &str = "default";

// OAuth 1.0a protocol values.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const OAUTH_VERSION_1_0: &str = "1.0";

// Twitter endpoints.
pub const USER_TIMELINE_ENDPOINT: &str = "https://api.twitter.com/1.1/statuses/user_timeline.json";
pub const HASHTAG_URL_PREFIX: &str = "https://twitter.com/hashtag/";
pub const PROFILE_URL_PREFIX: &str = "https://twitter.com/";

/// AsciiSet for [OAuth 1.0a percent encoding](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `!`, `*`, `(`, `)` and `'` are escaped too, unlike `encodeURIComponent`.
pub static OAUTH1_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
