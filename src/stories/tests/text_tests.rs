// src/stories/tests/text_tests.rs

use crate::stories::text::*;

// ============================================================================
// Reading time
// ============================================================================

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn reading_time_is_at_least_one_minute() {
    assert_eq!(calculate_reading_time(""), 1);
    assert_eq!(calculate_reading_time("   "), 1);
    assert_eq!(calculate_reading_time("just a few words"), 1);
}

#[test]
fn reading_time_rounds_up_at_the_speed_boundary() {
    assert_eq!(calculate_reading_time(&words(200)), 1);
    assert_eq!(calculate_reading_time(&words(201)), 2);
    assert_eq!(calculate_reading_time(&words(1000)), 5);
}

#[test]
fn reading_time_is_monotonic_in_word_count() {
    let mut previous = 0;
    for n in (0..2000).step_by(37) {
        let estimate = calculate_reading_time(&words(n));
        assert!(
            estimate >= previous,
            "estimate dropped from {previous} to {estimate} at {n} words"
        );
        previous = estimate;
    }
}

#[test]
fn word_count_ignores_extra_whitespace() {
    assert_eq!(word_count("  one\t two \n three  "), 3);
    assert_eq!(word_count(""), 0);
}

// ============================================================================
// Preview formatting
// ============================================================================

#[test]
fn short_content_is_returned_unchanged() {
    let content = "A short tale.";
    assert_eq!(format_story_preview(content, PREVIEW_MAX_LENGTH), content);
}

#[test]
fn short_content_is_trimmed() {
    assert_eq!(
        format_story_preview("  A short tale.  ", PREVIEW_MAX_LENGTH),
        "A short tale."
    );
}

#[test]
fn prefers_a_late_sentence_boundary() {
    // The last period inside the window lands past 70% of the window.
    let head = words(20); // 99 chars
    let content = format!("{head} end. And then the story keeps going for a long while after");
    let preview = format_story_preview(&content, 120);
    assert_eq!(preview, format!("{head} end."));
}

#[test]
fn early_sentence_boundary_falls_back_to_word_cut() {
    // Only sentence end is at position 8 of a 100-char window, well before 70%.
    let content = format!("Too soon. {}", words(40));
    let preview = format_story_preview(&content, 100);
    assert!(preview.ends_with("..."), "expected ellipsis, got {preview:?}");
    assert!(!preview.ends_with(" ..."), "cut should land on a word boundary");
    assert!(preview.chars().count() <= 103);
}

#[test]
fn word_cut_never_splits_a_word() {
    let content = words(60);
    let preview = format_story_preview(&content, 150);
    let body = preview.trim_end_matches("...");
    for token in body.split_whitespace() {
        assert_eq!(token, "word");
    }
}

#[test]
fn preview_handles_multibyte_content() {
    let content = "día ".repeat(100);
    let preview = format_story_preview(&content, 150);
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() <= 153);
}
