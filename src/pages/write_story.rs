//! Write page: manual story authoring.

use std::sync::Arc;

use crate::common::{ApiError, ValidationResult};
use crate::stories::models::CreateStory;
use crate::stories::text::word_count;
use crate::stories::{Genre, StoryService};

use super::PageOutcome;

/// Minimum words before a manually written story may be published.
pub const MIN_STORY_WORDS: usize = 100;

/// Draft form shared by the write and edit pages.
#[derive(Debug, Clone, Default)]
pub struct StoryDraftForm {
    pub title: String,
    pub genre: Option<Genre>,
    pub content: String,
}

impl StoryDraftForm {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.title.trim().is_empty() {
            result.add_error("title", "Please provide a title for your story");
        }
        if self.genre.is_none() {
            result.add_error("genre", "Please select a genre for your story");
        }
        if word_count(&self.content) < MIN_STORY_WORDS {
            result.add_error("content", "Story must be at least 100 words long");
        }
        result
    }

    pub(super) fn genre_or_validation_error(&self) -> Result<Genre, ApiError> {
        self.genre.ok_or_else(|| {
            ApiError::Validation("Please select a genre for your story".to_string())
        })
    }
}

pub struct WriteStoryPage {
    stories: Arc<StoryService>,
}

impl WriteStoryPage {
    pub fn new(stories: Arc<StoryService>) -> Self {
        Self { stories }
    }

    pub async fn submit(&self, form: &StoryDraftForm) -> Result<PageOutcome, ApiError> {
        form.validate().into_result()?;

        let draft = CreateStory {
            title: form.title.trim().to_string(),
            genre: form.genre_or_validation_error()?,
            content: form.content.trim().to_string(),
            is_ai_generated: false,
            image: None,
        };
        let story = self.stories.create_story(&draft).await?;
        Ok(PageOutcome::Redirect(format!("/story/{}", story.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_words(words: usize) -> StoryDraftForm {
        StoryDraftForm {
            title: "The Lighthouse".to_string(),
            genre: Some(Genre::Mystery),
            content: "word ".repeat(words).trim().to_string(),
        }
    }

    #[test]
    fn accepts_hundred_word_story() {
        assert!(form_with_words(100).validate().is_valid());
    }

    #[test]
    fn rejects_ninety_nine_word_story() {
        let result = form_with_words(99).validate();
        assert_eq!(
            result.messages()[0],
            "Story must be at least 100 words long"
        );
    }

    #[test]
    fn requires_title_and_genre() {
        let form = StoryDraftForm {
            title: "  ".to_string(),
            genre: None,
            content: "word ".repeat(100),
        };
        let messages = form.validate().messages();
        assert!(messages.contains(&"Please provide a title for your story".to_string()));
        assert!(messages.contains(&"Please select a genre for your story".to_string()));
    }
}
