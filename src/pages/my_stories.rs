//! My-stories page: the signed-in user's own catalog, with deletion.

use std::sync::Arc;

use crate::common::ApiError;
use crate::session::SessionProvider;
use crate::stories::{StoryQuery, StoryService};

use super::browse::StoryCard;

#[derive(Debug, Clone, Default)]
pub struct MyStoriesView {
    pub cards: Vec<StoryCard>,
}

pub struct MyStoriesPage {
    stories: Arc<StoryService>,
    session: Arc<SessionProvider>,
}

impl MyStoriesPage {
    pub fn new(stories: Arc<StoryService>, session: Arc<SessionProvider>) -> Self {
        Self { stories, session }
    }

    /// Loads the current user's stories. The listing itself degrades to
    /// empty on request failure inside the service, so this only errors when
    /// there is no signed-in user at all.
    pub async fn load(&self) -> Result<MyStoriesView, ApiError> {
        let user = self.session.current_user().ok_or_else(|| {
            ApiError::Unauthorized("Please log in to see your stories".to_string())
        })?;

        let listing = self
            .stories
            .get_user_stories(&user.id, &StoryQuery::default())
            .await?;
        Ok(MyStoriesView {
            cards: listing.stories.iter().map(StoryCard::from_story).collect(),
        })
    }

    /// Deletes one of the user's stories and returns the server message.
    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::Unauthorized(
                "Please log in to manage your stories".to_string(),
            ));
        }
        self.stories.delete_story(id).await
    }
}
