//! Edit page: author-only story editing.

use std::sync::Arc;

use tracing::warn;

use crate::auth::models::User;
use crate::common::ApiError;
use crate::stories::models::UpdateStory;
use crate::stories::StoryService;

use super::write_story::StoryDraftForm;
use super::PageOutcome;

pub struct EditStoryPage {
    stories: Arc<StoryService>,
}

impl EditStoryPage {
    pub fn new(stories: Arc<StoryService>) -> Self {
        Self { stories }
    }

    /// Loads the story into an editable form. Only the author may edit; the
    /// server enforces this too, but failing here avoids a doomed round trip.
    pub async fn load(&self, id: &str, editor: &User) -> Result<StoryDraftForm, ApiError> {
        let story = self.stories.get_story_by_id(id).await?;
        if !story.is_authored_by(&editor.id) {
            warn!(story_id = %id, user_id = %editor.id, "edit refused for non-author");
            return Err(ApiError::Forbidden(
                "You can only edit your own stories".to_string(),
            ));
        }
        Ok(StoryDraftForm {
            title: story.title,
            genre: Some(story.genre),
            content: story.content,
        })
    }

    pub async fn submit(&self, id: &str, form: &StoryDraftForm) -> Result<PageOutcome, ApiError> {
        form.validate().into_result()?;

        let update = UpdateStory {
            title: form.title.trim().to_string(),
            genre: form.genre_or_validation_error()?,
            content: form.content.trim().to_string(),
        };
        let story = self.stories.update_story(id, &update).await?;
        Ok(PageOutcome::Redirect(format!("/story/{}", story.id)))
    }
}
