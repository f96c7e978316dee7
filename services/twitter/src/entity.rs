//! Splice tweet text into plain and linked segments.

use crate::constants::{HASHTAG_URL_PREFIX, PROFILE_URL_PREFIX};
use chirpsign_core::{Error, Result};
use serde::Serialize;

/// What an entity slice links to, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// Starts with `#`.
    Hashtag,
    /// Starts with `@`.
    Mention,
    /// Anything else, usually a `t.co` link.
    Media,
}

impl EntityCategory {
    /// Classify an entity slice.
    pub fn classify(slice: &str) -> Self {
        match slice.chars().next() {
            Some('#') => Self::Hashtag,
            Some('@') => Self::Mention,
            _ => Self::Media,
        }
    }
}

/// Half-open `[start, end)` range of an entity, counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRange {
    /// First char of the entity.
    pub start: usize,
    /// One past the last char of the entity.
    pub end: usize,
    /// Link target for media and url entities.
    pub url: Option<String>,
}

impl EntityRange {
    /// Create a range without a link target.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            url: None,
        }
    }

    /// Attach a link target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl From<[usize; 2]> for EntityRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self::new(start, end)
    }
}

/// A piece of spliced text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TextSegment {
    /// Text outside of any entity.
    Plain {
        /// The slice.
        text: String,
    },
    /// An entity and where it links to.
    Entity {
        /// The slice, including its `#` or `@`.
        text: String,
        /// Kind of the entity.
        category: EntityCategory,
        /// Hyperlink target.
        target_url: String,
    },
}

impl TextSegment {
    /// The slice of source text this segment covers.
    pub fn text(&self) -> &str {
        match self {
            TextSegment::Plain { text } => text,
            TextSegment::Entity { text, .. } => text,
        }
    }

    fn entity(text: &str, url: Option<&str>) -> Self {
        let category = EntityCategory::classify(text);
        let target_url = match category {
            EntityCategory::Hashtag => format!("{HASHTAG_URL_PREFIX}{}", &text[1..]),
            EntityCategory::Mention => format!("{PROFILE_URL_PREFIX}{}", &text[1..]),
            EntityCategory::Media => url.unwrap_or(text).to_string(),
        };

        TextSegment::Entity {
            text: text.to_string(),
            category,
            target_url,
        }
    }
}

/// Split `text` into plain and entity segments.
///
/// Offsets count chars, not bytes. Ranges may come in any order but must
/// not overlap, and each must satisfy `start < end <= text.chars().count()`.
/// A bad range fails the whole call with `RangeInvalid`.
///
/// ```
/// use chirpsign_twitter::{splice_entities, EntityRange, TextSegment};
///
/// let segments = splice_entities(
///     "check #horror out @yuschick",
///     &[EntityRange::new(6, 13), EntityRange::new(18, 27)],
/// )
/// .unwrap();
///
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[1].text(), "#horror");
/// let joined: String = segments.iter().map(TextSegment::text).collect();
/// assert_eq!(joined, "check #horror out @yuschick");
/// ```
pub fn splice_entities(text: &str, ranges: &[EntityRange]) -> Result<Vec<TextSegment>> {
    if ranges.is_empty() {
        return Ok(vec![TextSegment::Plain {
            text: text.to_string(),
        }]);
    }

    // Byte offset of every char boundary, including the end of text.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut sorted: Vec<&EntityRange> = ranges.iter().collect();
    sorted.sort_by_key(|r| (r.start, r.end));

    let mut previous_end = 0;
    for (i, r) in sorted.iter().enumerate() {
        if r.start >= r.end || r.end > char_len {
            return Err(Error::range_invalid(format!(
                "entity range [{}, {}) is invalid for text of {char_len} chars",
                r.start, r.end
            )));
        }
        if i > 0 && r.start < previous_end {
            return Err(Error::range_invalid(format!(
                "entity range [{}, {}) overlaps a range ending at {previous_end}",
                r.start, r.end
            )));
        }
        previous_end = r.end;
    }

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;
    for r in sorted {
        let (start, end) = (boundaries[r.start], boundaries[r.end]);
        if start > cursor {
            segments.push(TextSegment::Plain {
                text: text[cursor..start].to_string(),
            });
        }
        segments.push(TextSegment::entity(&text[start..end], r.url.as_deref()));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(TextSegment::Plain {
            text: text[cursor..].to_string(),
        });
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn plain(text: &str) -> TextSegment {
        TextSegment::Plain {
            text: text.to_string(),
        }
    }

    fn entity(text: &str, category: EntityCategory, target_url: &str) -> TextSegment {
        TextSegment::Entity {
            text: text.to_string(),
            category,
            target_url: target_url.to_string(),
        }
    }

    fn joined(segments: &[TextSegment]) -> String {
        segments.iter().map(TextSegment::text).collect()
    }

    #[test_case("#horror", EntityCategory::Hashtag)]
    #[test_case("@yuschick", EntityCategory::Mention)]
    #[test_case("https://t.co/abc", EntityCategory::Media)]
    #[test_case("", EntityCategory::Media)]
    fn test_classify(slice: &str, expected: EntityCategory) {
        assert_eq!(EntityCategory::classify(slice), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("no entities here"; "ascii")]
    #[test_case("päivää 🎃"; "multibyte")]
    fn test_no_ranges_is_identity(text: &str) {
        assert_eq!(splice_entities(text, &[]).unwrap(), vec![plain(text)]);
    }

    #[test]
    fn test_hashtag_and_mention() {
        let segments = splice_entities(
            "check #horror out @yuschick",
            &[EntityRange::new(6, 13), EntityRange::new(18, 27)],
        )
        .unwrap();

        assert_eq!(
            segments,
            vec![
                plain("check "),
                entity(
                    "#horror",
                    EntityCategory::Hashtag,
                    "https://twitter.com/hashtag/horror"
                ),
                plain(" out "),
                entity(
                    "@yuschick",
                    EntityCategory::Mention,
                    "https://twitter.com/yuschick"
                ),
            ]
        );
    }

    #[test]
    fn test_unsorted_ranges_are_sorted() {
        let text = "check #horror out @yuschick";
        let sorted = splice_entities(text, &[EntityRange::new(6, 13), EntityRange::new(18, 27)]);
        let reversed = splice_entities(text, &[EntityRange::new(18, 27), EntityRange::new(6, 13)]);
        assert_eq!(sorted.unwrap(), reversed.unwrap());
    }

    #[test]
    fn test_adjacent_ranges_emit_no_empty_plain() {
        let segments = splice_entities(
            "#a#b",
            &[EntityRange::new(0, 2), EntityRange::new(2, 4)],
        )
        .unwrap();

        assert_eq!(segments.len(), 2);
        assert!(segments
            .iter()
            .all(|s| matches!(s, TextSegment::Entity { .. })));
    }

    #[test]
    fn test_media_uses_supplied_url() {
        let text = "new post https://t.co/xyz";
        let segments = splice_entities(
            text,
            &[EntityRange::new(9, 25).with_url("https://pbs.twimg.com/media/xyz.jpg")],
        )
        .unwrap();

        assert_eq!(
            segments,
            vec![
                plain("new post "),
                entity(
                    "https://t.co/xyz",
                    EntityCategory::Media,
                    "https://pbs.twimg.com/media/xyz.jpg"
                ),
            ]
        );
    }

    #[test]
    fn test_media_without_url_links_to_slice() {
        let segments = splice_entities("see https://t.co/xyz", &[EntityRange::new(4, 20)]).unwrap();
        assert_eq!(
            segments[1],
            entity("https://t.co/xyz", EntityCategory::Media, "https://t.co/xyz")
        );
    }

    #[test]
    fn test_offsets_count_chars() {
        let text = "🎃 spooky #horror ☠ @yuschick!";
        let segments = splice_entities(
            text,
            &[EntityRange::new(9, 16), EntityRange::new(19, 28)],
        )
        .unwrap();

        assert_eq!(segments[1].text(), "#horror");
        assert_eq!(segments[3].text(), "@yuschick");
        assert_eq!(segments[4], plain("!"));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_concatenation_reconstructs_text() {
        let text = "@a likes #b and #c, see https://t.co/d";
        let ranges = [
            EntityRange::new(0, 2),
            EntityRange::new(9, 11),
            EntityRange::new(16, 18),
            EntityRange::new(24, 38),
        ];
        assert_eq!(joined(&splice_entities(text, &ranges).unwrap()), text);
    }

    #[test_case(EntityRange::new(3, 3); "empty range")]
    #[test_case(EntityRange::new(4, 2); "reversed")]
    #[test_case(EntityRange::new(0, 7); "past end")]
    #[test_case(EntityRange::new(6, 7); "start past end")]
    fn test_malformed_range_is_rejected(range: EntityRange) {
        let err = splice_entities("#hello", &[range]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeInvalid);
    }

    #[test]
    fn test_range_checked_in_chars_not_bytes() {
        // 4 chars, 8 bytes.
        let err = splice_entities("ääää", &[EntityRange::new(0, 5)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeInvalid);
        assert!(splice_entities("ääää", &[EntityRange::new(0, 4)]).is_ok());
    }

    #[test]
    fn test_overlapping_ranges_are_rejected() {
        let err = splice_entities(
            "check #horror out",
            &[EntityRange::new(6, 13), EntityRange::new(10, 16)],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeInvalid);
    }

    #[test]
    fn test_segment_serializes_with_kind_tag() {
        let value = serde_json::to_value(entity(
            "#horror",
            EntityCategory::Hashtag,
            "https://twitter.com/hashtag/horror",
        ))
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "entity",
                "text": "#horror",
                "category": "hashtag",
                "target_url": "https://twitter.com/hashtag/horror",
            })
        );
        assert_eq!(
            serde_json::to_value(plain("hi")).unwrap(),
            serde_json::json!({"kind": "plain", "text": "hi"})
        );
    }
}
