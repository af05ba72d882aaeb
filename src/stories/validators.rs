// src/stories/validators.rs

use crate::common::{ValidationResult, Validator};

use super::models::{CreateStory, UpdateStory};

// ============================================================================
// Limits
// ============================================================================

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_CONTENT_LENGTH: usize = 50_000;
pub const MAX_COMMENT_LENGTH: usize = 1_000;
pub const MAX_PROMPT_LENGTH: usize = 1_000;

// ============================================================================
// Story Draft Validator
// ============================================================================

pub struct StoryDraftValidator;

impl StoryDraftValidator {
    fn validate_fields(title: &str, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();

        if title.trim().is_empty() {
            result.add_error("title", "Title is required");
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            result.add_error("title", "Title must be less than 100 characters");
        }

        if content.trim().is_empty() {
            result.add_error("content", "Content is required");
        } else if content.chars().count() > MAX_CONTENT_LENGTH {
            result.add_error("content", "Content must be less than 50000 characters");
        }

        result
    }
}

impl Validator<CreateStory> for StoryDraftValidator {
    fn validate(&self, data: &CreateStory) -> ValidationResult {
        Self::validate_fields(&data.title, &data.content)
    }
}

impl Validator<UpdateStory> for StoryDraftValidator {
    fn validate(&self, data: &UpdateStory) -> ValidationResult {
        Self::validate_fields(&data.title, &data.content)
    }
}

// ============================================================================
// Free-text validators
// ============================================================================

pub fn validate_comment(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if content.trim().is_empty() {
        result.add_error("content", "Comment content is required");
    } else if content.chars().count() > MAX_COMMENT_LENGTH {
        result.add_error("content", "Comment must be less than 1000 characters");
    }
    result
}

pub fn validate_prompt(prompt: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if prompt.trim().is_empty() {
        result.add_error("prompt", "Story prompt is required");
    } else if prompt.chars().count() > MAX_PROMPT_LENGTH {
        result.add_error("prompt", "Prompt must be less than 1000 characters");
    }
    result
}
