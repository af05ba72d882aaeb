//! Browse page: the paginated story catalog with genre and search filters.
//!
//! Filter changes can overlap in flight; each load takes a ticket from the
//! page's fetch coordinator and a superseded load returns `None` instead of
//! clobbering the newer view.

use std::sync::Arc;

use tracing::debug;

use crate::common::{ApiError, FetchCoordinator};
use crate::stories::text::{calculate_reading_time, format_story_preview, PREVIEW_MAX_LENGTH};
use crate::stories::{Genre, Story, StoryQuery, StoryService};

#[derive(Debug, Clone, Default)]
pub struct BrowseFilters {
    pub page: u32,
    pub genre: Option<Genre>,
    pub search: Option<String>,
}

impl BrowseFilters {
    fn to_query(&self) -> StoryQuery {
        StoryQuery {
            page: Some(self.page.max(1)),
            limit: None,
            genre: self.genre,
            search: self.search.clone(),
        }
    }
}

/// Catalog card: everything the listing renders for one story.
#[derive(Debug, Clone)]
pub struct StoryCard {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub author: String,
    pub preview: String,
    pub reading_minutes: u32,
    pub like_count: usize,
    pub comment_count: usize,
    pub is_ai_generated: bool,
}

impl StoryCard {
    pub fn from_story(story: &Story) -> Self {
        Self {
            id: story.id.clone(),
            title: story.title.clone(),
            genre: story.genre,
            author: story.author.username.clone(),
            preview: format_story_preview(&story.content, PREVIEW_MAX_LENGTH),
            reading_minutes: calculate_reading_time(&story.content),
            like_count: story.likes.len(),
            comment_count: story.comments.len(),
            is_ai_generated: story.is_ai_generated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowseView {
    pub cards: Vec<StoryCard>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

pub struct BrowsePage {
    stories: Arc<StoryService>,
    fetches: FetchCoordinator,
}

impl BrowsePage {
    pub fn new(stories: Arc<StoryService>) -> Self {
        Self {
            stories,
            fetches: FetchCoordinator::new(),
        }
    }

    /// Loads a catalog page. Returns `Ok(None)` when a newer load was started
    /// while this one was in flight.
    pub async fn load(&self, filters: &BrowseFilters) -> Result<Option<BrowseView>, ApiError> {
        let ticket = self.fetches.begin();
        let listing = self.stories.get_stories(&filters.to_query()).await?;

        if !ticket.is_current() {
            debug!(page = filters.page, "dropping superseded catalog load");
            return Ok(None);
        }

        Ok(Some(BrowseView {
            cards: listing.stories.iter().map(StoryCard::from_story).collect(),
            page: listing.page,
            pages: listing.pages,
            total: listing.total,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::models::StoryAuthor;

    fn story_with_content(content: &str) -> Story {
        Story {
            id: "s-1".to_string(),
            title: "The Lighthouse".to_string(),
            genre: Genre::Mystery,
            content: content.to_string(),
            image: None,
            is_ai_generated: false,
            author: StoryAuthor {
                id: "u-1".to_string(),
                username: "nia".to_string(),
                profile_picture: None,
            },
            likes: vec!["u-2".to_string(), "u-3".to_string()],
            comments: Vec::new(),
            word_count: None,
            created_at: None,
        }
    }

    #[test]
    fn card_summarizes_story() {
        let content = "word ".repeat(450);
        let card = StoryCard::from_story(&story_with_content(&content));
        assert_eq!(card.author, "nia");
        assert_eq!(card.like_count, 2);
        // 450 words at 200 wpm rounds up to 3 minutes.
        assert_eq!(card.reading_minutes, 3);
        assert!(card.preview.chars().count() <= PREVIEW_MAX_LENGTH + 3);
    }

    #[test]
    fn filters_clamp_page_to_one() {
        let filters = BrowseFilters {
            page: 0,
            ..BrowseFilters::default()
        };
        let pairs = filters.to_query().to_query_pairs();
        assert!(pairs.contains(&("page", "1".to_string())));
    }

    #[test]
    fn filters_pass_genre_and_search_through() {
        let filters = BrowseFilters {
            page: 2,
            genre: Some(Genre::Horror),
            search: Some("  lighthouse ".to_string()),
        };
        let pairs = filters.to_query().to_query_pairs();
        assert!(pairs.contains(&("genre", "horror".to_string())));
        assert!(pairs.contains(&("search", "lighthouse".to_string())));
    }
}
