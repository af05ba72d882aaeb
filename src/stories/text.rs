//! Pure text computations derived from story content.

/// Fixed reading speed used for the minutes estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Default preview length, in characters.
pub const PREVIEW_MAX_LENGTH: usize = 150;

// A sentence-boundary cut is only used when it lands past this share of the
// preview window; earlier cuts would make previews uselessly short.
const SENTENCE_CUT_RATIO: f64 = 0.7;

/// Whitespace-delimited word count, empty tokens excluded.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated minutes to read `content` at a fixed speed, rounded up, never
/// less than one minute.
pub fn calculate_reading_time(content: &str) -> u32 {
    let words = word_count(content);
    if words == 0 {
        return 1;
    }
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}

/// Truncates `content` to a preview of at most `max_length` characters.
///
/// Short content is returned unchanged (trimmed). Longer content is cut after
/// the last sentence-ending punctuation inside the window when that cut is
/// not too early; otherwise at the last word boundary, with a trailing
/// ellipsis.
pub fn format_story_preview(content: &str, max_length: usize) -> String {
    let content = content.trim();
    if content.chars().count() <= max_length {
        return content.to_string();
    }

    let window_end = content
        .char_indices()
        .nth(max_length)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());
    let window = &content[..window_end];

    if let Some(punct_idx) = window.rfind(['.', '?', '!']) {
        let chars_kept = window[..=punct_idx].chars().count();
        if chars_kept as f64 > max_length as f64 * SENTENCE_CUT_RATIO {
            return window[..=punct_idx].to_string();
        }
    }

    match window.rfind(' ') {
        Some(space_idx) => format!("{}...", &window[..space_idx]),
        None => format!("{}...", window),
    }
}
