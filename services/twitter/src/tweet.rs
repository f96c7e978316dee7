//! Subset of the v1.1 tweet object used for rendering a timeline.

use crate::constants::PROFILE_URL_PREFIX;
use crate::entity::{splice_entities, EntityRange, TextSegment};
use chirpsign_core::time::{parse_with_offset, DateTime};
use chirpsign_core::Result;
use serde::{Deserialize, Serialize};

const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Creation time, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
    pub created_at: String,
    /// Tweet id as a string.
    pub id_str: String,
    /// Untruncated text. Falls back to `text` for compat-mode payloads.
    #[serde(alias = "text")]
    pub full_text: String,
    /// Entities annotated on `full_text`.
    #[serde(default)]
    pub entities: Entities,
    /// Author.
    #[serde(default)]
    pub user: User,
}

/// Entities of a tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    /// `#hashtags`
    pub hashtags: Vec<Hashtag>,
    /// `@mentions`
    pub user_mentions: Vec<UserMention>,
    /// Attached photos and videos.
    pub media: Vec<Media>,
    /// Links.
    pub urls: Vec<UrlEntity>,
}

/// A hashtag entity. `text` is without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    /// Tag text.
    pub text: String,
    /// Char range in `full_text`.
    pub indices: [usize; 2],
}

/// A mention entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMention {
    /// Id of the mentioned user.
    #[serde(default)]
    pub id_str: String,
    /// Display name of the mentioned user.
    #[serde(default)]
    pub name: String,
    /// Handle without the `@`.
    pub screen_name: String,
    /// Char range in `full_text`.
    pub indices: [usize; 2],
}

/// A media entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Direct https link to the media.
    pub media_url_https: String,
    /// The `t.co` link found in the text.
    pub url: String,
    /// Char range in `full_text`.
    pub indices: [usize; 2],
}

/// A link entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntity {
    /// The `t.co` link found in the text.
    pub url: String,
    /// The resolved link.
    #[serde(default)]
    pub expanded_url: String,
    /// Shortened link for display.
    #[serde(default)]
    pub display_url: String,
    /// Char range in `full_text`.
    pub indices: [usize; 2],
}

/// Author of a tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Handle without the `@`.
    pub screen_name: String,
    /// Avatar.
    pub profile_image_url_https: String,
}

impl Tweet {
    /// Parse `created_at`.
    pub fn created_time(&self) -> Result<DateTime> {
        parse_with_offset(&self.created_at, CREATED_AT_FORMAT)
    }

    /// Link to this tweet on twitter.com.
    pub fn permalink(&self) -> String {
        format!(
            "{PROFILE_URL_PREFIX}{}/status/{}",
            self.user.screen_name, self.id_str
        )
    }

    /// Collect every entity as a range for [`splice_entities`].
    ///
    /// Hashtags and mentions link by text. Urls link to `expanded_url` and
    /// media to `media_url_https`. When two entities share a range the
    /// first one collected is kept.
    pub fn entity_ranges(&self) -> Vec<EntityRange> {
        let e = &self.entities;
        let all = e
            .hashtags
            .iter()
            .map(|h| EntityRange::from(h.indices))
            .chain(e.user_mentions.iter().map(|m| EntityRange::from(m.indices)))
            .chain(e.urls.iter().map(|u| {
                let target = if u.expanded_url.is_empty() {
                    &u.url
                } else {
                    &u.expanded_url
                };
                EntityRange::from(u.indices).with_url(target)
            }))
            .chain(
                e.media
                    .iter()
                    .map(|m| EntityRange::from(m.indices).with_url(&m.media_url_https)),
            );

        let mut ranges: Vec<EntityRange> = Vec::new();
        for r in all {
            if !ranges.iter().any(|x| x.start == r.start && x.end == r.end) {
                ranges.push(r);
            }
        }
        ranges
    }

    /// Splice `full_text` with its own entities.
    pub fn segments(&self) -> Result<Vec<TextSegment>> {
        splice_entities(&self.full_text, &self.entity_ranges())
    }
}
