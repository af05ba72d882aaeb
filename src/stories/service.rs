//! Typed wrappers around the `/stories/*` endpoints.
//!
//! Every write-path operation validates client-side before sending; the
//! server remains authoritative. The only silent degradation in the system
//! lives here: a failed user-story listing becomes an empty listing so
//! aggregate computations stay safe.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::common::{ApiClient, ApiError, Validator};

use super::models::{
    AddCommentRequest, Comment, CreateStory, GenerateStoryRequest, GeneratedStory, LikeResult,
    Story, StoryListing, StoryQuery, UpdateStory, UserStories, UserStoriesPayload,
};
use super::validators::{validate_comment, validate_prompt, StoryDraftValidator};

pub struct StoryService {
    client: Arc<ApiClient>,
}

impl StoryService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST /stories
    pub async fn create_story(&self, draft: &CreateStory) -> Result<Story, ApiError> {
        StoryDraftValidator.validate(draft).into_result()?;

        let url = self.client.endpoints().stories();
        let story: Story = self.client.post(&url, draft).await?.into_data()?;
        info!(story_id = %story.id, ai_generated = story.is_ai_generated, "story created");
        Ok(story)
    }

    /// GET /stories with sanitized listing filters.
    pub async fn get_stories(&self, query: &StoryQuery) -> Result<StoryListing, ApiError> {
        let url = self.client.endpoints().stories();
        let listing: StoryListing = self
            .client
            .get(&url, &query.to_query_pairs())
            .await?
            .into_data()?;
        debug!(
            count = listing.stories.len(),
            page = listing.page,
            total = listing.total,
            "fetched story catalog page"
        );
        Ok(listing)
    }

    /// GET /stories/:id
    pub async fn get_story_by_id(&self, id: &str) -> Result<Story, ApiError> {
        require_id(id, "Story ID is required")?;
        let url = self.client.endpoints().story(id);
        self.client.get(&url, &[]).await?.into_data()
    }

    /// PUT /stories/:id
    pub async fn update_story(&self, id: &str, update: &UpdateStory) -> Result<Story, ApiError> {
        require_id(id, "Story ID is required")?;
        StoryDraftValidator.validate(update).into_result()?;

        let url = self.client.endpoints().story(id);
        let story: Story = self.client.put(&url, update).await?.into_data()?;
        info!(story_id = %story.id, "story updated");
        Ok(story)
    }

    /// DELETE /stories/:id
    pub async fn delete_story(&self, id: &str) -> Result<String, ApiError> {
        require_id(id, "Story ID is required")?;
        let url = self.client.endpoints().story(id);
        let envelope = self.client.delete::<serde_json::Value>(&url).await?;
        info!(story_id = %id, "story deleted");
        Ok(envelope.into_message())
    }

    /// POST /stories/:id/like — idempotent per-user toggle.
    pub async fn toggle_like(&self, id: &str) -> Result<LikeResult, ApiError> {
        require_id(id, "Story ID is required")?;
        let url = self.client.endpoints().like_story(id);
        let result: LikeResult = self.client.post(&url, &()).await?.into_data()?;
        debug!(story_id = %id, liked = result.is_liked, "like toggled");
        Ok(result)
    }

    /// POST /stories/:id/comments
    pub async fn add_comment(&self, id: &str, content: &str) -> Result<Comment, ApiError> {
        require_id(id, "Story ID is required")?;
        validate_comment(content).into_result()?;

        let url = self.client.endpoints().comment_story(id);
        let request = AddCommentRequest {
            content: content.trim().to_string(),
        };
        self.client.post(&url, &request).await?.into_data()
    }

    /// GET /stories/user/:userId, normalized to `UserStories`.
    ///
    /// A request failure degrades to an empty listing (logged, not surfaced)
    /// so per-user aggregates never see a partial shape.
    pub async fn get_user_stories(
        &self,
        user_id: &str,
        query: &StoryQuery,
    ) -> Result<UserStories, ApiError> {
        require_id(user_id, "User ID is required")?;

        let url = self.client.endpoints().user_stories(user_id);
        let pairs = [
            ("page", query.page.unwrap_or(1).max(1).to_string()),
            ("limit", query.limit.unwrap_or(10).max(1).to_string()),
        ];

        match self
            .client
            .get::<UserStoriesPayload>(&url, &pairs)
            .await
            .and_then(|envelope| match envelope.data {
                Some(payload) => Ok(UserStories::from(payload)),
                None => Ok(UserStories::default()),
            }) {
            Ok(listing) => Ok(listing),
            Err(err) => {
                warn!(error = %err, "user story listing failed, degrading to empty");
                Ok(UserStories::default())
            }
        }
    }

    /// POST /stories/generate
    pub async fn generate_ai_story(&self, prompt: &str) -> Result<GeneratedStory, ApiError> {
        validate_prompt(prompt).into_result()?;

        info!("requesting AI story generation");
        let url = self.client.endpoints().generate_story();
        let request = GenerateStoryRequest {
            prompt: prompt.trim().to_string(),
        };
        let generated: GeneratedStory = self.client.post(&url, &request).await?.into_data()?;
        debug!(
            content_chars = generated.content.chars().count(),
            "AI story generated"
        );
        Ok(generated)
    }
}

fn require_id(id: &str, message: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}
