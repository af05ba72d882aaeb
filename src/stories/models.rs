//! Story data models and wire shapes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Genre
// ============================================================================

/// Closed set of story genres recognized by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fantasy,
    Romance,
    Mystery,
    ScienceFiction,
    Horror,
    Thriller,
    HistoricalFiction,
    Adventure,
    YoungAdult,
    LiteraryFiction,
    Dystopian,
    Paranormal,
    Contemporary,
    Crime,
    Drama,
    Comedy,
    Action,
    SliceOfLife,
    Supernatural,
    Psychological,
}

impl Genre {
    pub const ALL: [Genre; 20] = [
        Genre::Fantasy,
        Genre::Romance,
        Genre::Mystery,
        Genre::ScienceFiction,
        Genre::Horror,
        Genre::Thriller,
        Genre::HistoricalFiction,
        Genre::Adventure,
        Genre::YoungAdult,
        Genre::LiteraryFiction,
        Genre::Dystopian,
        Genre::Paranormal,
        Genre::Contemporary,
        Genre::Crime,
        Genre::Drama,
        Genre::Comedy,
        Genre::Action,
        Genre::SliceOfLife,
        Genre::Supernatural,
        Genre::Psychological,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::Romance => "romance",
            Genre::Mystery => "mystery",
            Genre::ScienceFiction => "science-fiction",
            Genre::Horror => "horror",
            Genre::Thriller => "thriller",
            Genre::HistoricalFiction => "historical-fiction",
            Genre::Adventure => "adventure",
            Genre::YoungAdult => "young-adult",
            Genre::LiteraryFiction => "literary-fiction",
            Genre::Dystopian => "dystopian",
            Genre::Paranormal => "paranormal",
            Genre::Contemporary => "contemporary",
            Genre::Crime => "crime",
            Genre::Drama => "drama",
            Genre::Comedy => "comedy",
            Genre::Action => "action",
            Genre::SliceOfLife => "slice-of-life",
            Genre::Supernatural => "supernatural",
            Genre::Psychological => "psychological",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown genre '{}'", s))
    }
}

// ============================================================================
// Story and related entities
// ============================================================================

/// Author reference embedded in story payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<StoryAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "isAIGenerated", default)]
    pub is_ai_generated: bool,
    pub author: StoryAuthor,
    /// User ids that have liked this story; toggle-idempotent per user.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Server-computed; absent on older stories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author.id == user_id
    }
}

// ============================================================================
// Request shapes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStory {
    pub title: String,
    pub genre: Genre,
    pub content: String,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStory {
    pub title: String,
    pub genre: Genre,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateStoryRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Catalog listing filters; sanitized before they become query parameters.
#[derive(Debug, Clone, Default)]
pub struct StoryQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub genre: Option<Genre>,
    pub search: Option<String>,
}

impl StoryQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.unwrap_or(1).max(1).to_string()),
            ("limit", self.limit.unwrap_or(10).max(1).to_string()),
        ];
        if let Some(genre) = self.genre {
            pairs.push(("genre", genre.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            let search = search.trim();
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        pairs
    }
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct StoryListing {
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
}

fn default_page() -> u32 {
    1
}

/// Normalized user-story listing: always an object with a `stories` vec,
/// regardless of how the backend shaped the payload.
#[derive(Debug, Clone, Default)]
pub struct UserStories {
    pub stories: Vec<Story>,
}

/// Raw shapes the backend has been observed to return for a user's stories.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserStoriesPayload {
    Wrapped { stories: Vec<Story> },
    List(Vec<Story>),
    Single(Box<Story>),
}

impl From<UserStoriesPayload> for UserStories {
    fn from(payload: UserStoriesPayload) -> Self {
        let stories = match payload {
            UserStoriesPayload::Wrapped { stories } => stories,
            UserStoriesPayload::List(stories) => stories,
            UserStoriesPayload::Single(story) => vec![*story],
        };
        UserStories { stories }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeResult {
    #[serde(rename = "isLiked")]
    pub is_liked: bool,
    #[serde(default)]
    pub likes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedStory {
    pub content: String,
}
