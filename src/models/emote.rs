/// An emote ready for display: its Twitch id, the code it replaced in the
/// message text, and the resolved CDN image URL.
#[derive(Clone, Debug, PartialEq)]
pub struct Emote {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Emote {
    pub fn from_id(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            url: emote_url(id),
        }
    }
}

pub fn emote_url(id: &str) -> String {
    format!("https://static-cdn.jtvnw.net/emoticons/v1/{id}/1.0")
}

/// One emote id plus the character ranges it covers in the message text.
///
/// Ranges are inclusive and index Unicode scalar values, in the order the
/// `emotes=` tag listed them.
#[derive(Clone, Debug, PartialEq)]
pub struct EmoteSpan {
    pub id: String,
    pub ranges: Vec<(usize, usize)>,
}

/// Parses the raw `emotes=` message tag, e.g. `25:0-4,12-16/1902:6-10`.
/// Malformed pieces are skipped rather than rejected wholesale.
pub fn parse_emote_tag(tag: &str) -> Vec<EmoteSpan> {
    let mut spans = Vec::new();
    for part in tag.split('/') {
        let Some((id, positions)) = part.split_once(':') else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let mut ranges = Vec::new();
        for position in positions.split(',') {
            let Some((start, end)) = position.split_once('-') else {
                continue;
            };
            let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
                continue;
            };
            if end < start {
                continue;
            }
            ranges.push((start, end));
        }
        if !ranges.is_empty() {
            spans.push(EmoteSpan {
                id: id.to_owned(),
                ranges,
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_emote() {
        let spans = parse_emote_tag("25:6-10");
        assert_eq!(
            spans,
            vec![EmoteSpan {
                id: "25".to_owned(),
                ranges: vec![(6, 10)],
            }]
        );
    }

    #[test]
    fn parses_multiple_ids_and_ranges() {
        let spans = parse_emote_tag("25:0-4,12-16/1902:6-10");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].id, "25");
        assert_eq!(spans[0].ranges, vec![(0, 4), (12, 16)]);
        assert_eq!(spans[1].id, "1902");
        assert_eq!(spans[1].ranges, vec![(6, 10)]);
    }

    #[test]
    fn skips_malformed_pieces() {
        assert!(parse_emote_tag("").is_empty());
        assert!(parse_emote_tag("25").is_empty());
        assert!(parse_emote_tag("25:").is_empty());
        assert!(parse_emote_tag("25:a-b").is_empty());
        assert!(parse_emote_tag("25:10-4").is_empty());

        // A bad range does not take down the rest of the tag.
        let spans = parse_emote_tag("25:10-4,6-10");
        assert_eq!(spans[0].ranges, vec![(6, 10)]);
    }

    #[test]
    fn emote_url_uses_v1_template() {
        assert_eq!(
            emote_url("25"),
            "https://static-cdn.jtvnw.net/emoticons/v1/25/1.0"
        );
    }
}
