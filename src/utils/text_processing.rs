use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::emote::{Emote, EmoteSpan};
use crate::models::message::MessageFragment;

// Private-use delimiters keep placeholders from colliding with chat text.
const MARK_START: char = '\u{E000}';
const MARK_END: char = '\u{E001}';

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{E000}[^\u{E001}]*\u{E001}").unwrap());

/// Splits a message into plain-text and emote fragments.
///
/// Twitch tags an emote with the character ranges it covers; only the first
/// range of each id is used to extract the emote's code, and every textual
/// occurrence of that code is then replaced. When the same code also
/// appears as ordinary text it becomes an emote too — that matches how the
/// overlay has always rendered, so it stays.
pub fn message_fragments(text: &str, emotes: &[EmoteSpan]) -> Vec<MessageFragment> {
    if emotes.is_empty() {
        return vec![MessageFragment::Text(text.to_owned())];
    }

    let chars: Vec<char> = text.chars().collect();

    // Substitute left to right by first tagged position, so the result is
    // stable regardless of tag order.
    let mut spans: Vec<&EmoteSpan> = emotes.iter().filter(|s| !s.ranges.is_empty()).collect();
    spans.sort_by_key(|span| span.ranges[0].0);

    let mut templated = text.to_owned();
    let mut codes: Vec<(String, String)> = Vec::new();
    for span in spans {
        let (start, end) = span.ranges[0];
        if start >= chars.len() {
            tracing::debug!(id = %span.id, start, "emote range outside message text");
            continue;
        }
        let end = end.min(chars.len() - 1);
        let code: String = chars[start..=end].iter().collect();
        let placeholder = format!("{MARK_START}{}{MARK_END}", span.id);
        templated = templated.replace(&code, &placeholder);
        codes.push((span.id.clone(), code));
    }

    let mut fragments = Vec::new();
    let mut last_end = 0;
    for mat in PLACEHOLDER_REGEX.find_iter(&templated) {
        if mat.start() > last_end {
            fragments.push(MessageFragment::Text(
                templated[last_end..mat.start()].to_owned(),
            ));
        }
        let id = mat
            .as_str()
            .trim_start_matches(MARK_START)
            .trim_end_matches(MARK_END);
        let name = codes
            .iter()
            .find(|(code_id, _)| code_id == id)
            .map(|(_, code)| code.as_str())
            .unwrap_or(id);
        fragments.push(MessageFragment::Emote(Emote::from_id(id, name)));
        last_end = mat.end();
    }
    if last_end < templated.len() {
        fragments.push(MessageFragment::Text(templated[last_end..].to_owned()));
    }

    fragments
}
