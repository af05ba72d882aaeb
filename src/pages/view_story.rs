//! Story detail page: full content plus the like and comment actions.

use std::sync::Arc;

use crate::auth::models::User;
use crate::common::ApiError;
use crate::session::SessionProvider;
use crate::stories::models::{Comment, LikeResult};
use crate::stories::text::calculate_reading_time;
use crate::stories::{Story, StoryService};

/// Everything the detail screen renders, resolved against the viewer.
#[derive(Debug, Clone)]
pub struct StoryView {
    pub story: Story,
    pub reading_minutes: u32,
    pub is_liked: bool,
    pub can_edit: bool,
}

impl StoryView {
    pub fn assemble(story: Story, viewer: Option<&User>) -> Self {
        let (is_liked, can_edit) = match viewer {
            Some(user) => (story.is_liked_by(&user.id), story.is_authored_by(&user.id)),
            None => (false, false),
        };
        Self {
            reading_minutes: calculate_reading_time(&story.content),
            is_liked,
            can_edit,
            story,
        }
    }
}

pub struct ViewStoryPage {
    stories: Arc<StoryService>,
    session: Arc<SessionProvider>,
}

impl ViewStoryPage {
    pub fn new(stories: Arc<StoryService>, session: Arc<SessionProvider>) -> Self {
        Self { stories, session }
    }

    pub async fn load(&self, id: &str) -> Result<StoryView, ApiError> {
        let story = self.stories.get_story_by_id(id).await?;
        Ok(StoryView::assemble(story, self.session.current_user().as_ref()))
    }

    /// Toggles the viewer's like. Reading is public; liking is not.
    pub async fn toggle_like(&self, id: &str) -> Result<LikeResult, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::Unauthorized(
                "Please log in to like stories".to_string(),
            ));
        }
        self.stories.toggle_like(id).await
    }

    pub async fn add_comment(&self, id: &str, content: &str) -> Result<Comment, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::Unauthorized(
                "Please log in to comment".to_string(),
            ));
        }
        self.stories.add_comment(id, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::models::StoryAuthor;
    use crate::stories::Genre;

    fn story() -> Story {
        Story {
            id: "s-1".to_string(),
            title: "The Lighthouse".to_string(),
            genre: Genre::Mystery,
            content: "word ".repeat(250).trim().to_string(),
            image: None,
            is_ai_generated: false,
            author: StoryAuthor {
                id: "u-1".to_string(),
                username: "nia".to_string(),
                profile_picture: None,
            },
            likes: vec!["u-2".to_string()],
            comments: Vec::new(),
            word_count: Some(250),
            created_at: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            profile_picture: None,
            created_at: None,
        }
    }

    #[test]
    fn anonymous_viewer_gets_neutral_flags() {
        let view = StoryView::assemble(story(), None);
        assert!(!view.is_liked);
        assert!(!view.can_edit);
        assert_eq!(view.reading_minutes, 2);
    }

    #[test]
    fn author_can_edit_but_is_not_liked_by_default() {
        let view = StoryView::assemble(story(), Some(&user("u-1")));
        assert!(view.can_edit);
        assert!(!view.is_liked);
    }

    #[test]
    fn liker_sees_liked_state() {
        let view = StoryView::assemble(story(), Some(&user("u-2")));
        assert!(view.is_liked);
        assert!(!view.can_edit);
    }
}
