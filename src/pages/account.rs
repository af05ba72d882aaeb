//! Account page: profile details, password change, picture upload, and the
//! writing statistics panel.

use std::sync::Arc;

use crate::auth::models::{UpdateProfileRequest, User};
use crate::auth::validators::validate_new_password;
use crate::common::{ApiError, ValidationResult};
use crate::session::SessionProvider;
use crate::stories::text::word_count;
use crate::stories::{Story, StoryQuery, StoryService};

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.username.trim().is_empty() {
            result.add_error("username", "Username is required");
        }
        if self.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        }
        result
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.current_password.is_empty() {
            result.add_error("currentPassword", "Current password is required");
        }
        validate_new_password(&self.new_password, &mut result);
        if self.new_password != self.confirm_password {
            result.add_error("confirmPassword", "New passwords do not match");
        }
        result
    }
}

/// Aggregates over the user's stories shown on the account page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountStats {
    pub total_stories: usize,
    pub total_likes: usize,
    pub total_words: u64,
}

impl AccountStats {
    /// Sums over the normalized listing. Stories without a server word count
    /// fall back to counting their content locally.
    pub fn from_stories(stories: &[Story]) -> Self {
        Self {
            total_stories: stories.len(),
            total_likes: stories.iter().map(|story| story.likes.len()).sum(),
            total_words: stories
                .iter()
                .map(|story| {
                    story
                        .word_count
                        .unwrap_or_else(|| word_count(&story.content) as u64)
                })
                .sum(),
        }
    }
}

pub struct AccountPage {
    session: Arc<SessionProvider>,
    stories: Arc<StoryService>,
}

impl AccountPage {
    pub fn new(session: Arc<SessionProvider>, stories: Arc<StoryService>) -> Self {
        Self { session, stories }
    }

    pub async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError> {
        form.validate().into_result()?;
        self.session
            .update_profile(&UpdateProfileRequest {
                username: Some(form.username.trim().to_string()),
                email: Some(form.email.trim().to_string()),
                ..UpdateProfileRequest::default()
            })
            .await
    }

    pub async fn change_password(&self, form: &PasswordChangeForm) -> Result<User, ApiError> {
        form.validate().into_result()?;
        self.session
            .update_profile(&UpdateProfileRequest {
                current_password: Some(form.current_password.clone()),
                new_password: Some(form.new_password.clone()),
                ..UpdateProfileRequest::default()
            })
            .await
    }

    /// Uploads a new profile picture and returns its served URL.
    pub async fn upload_picture(&self, filename: &str, image: Vec<u8>) -> Result<String, ApiError> {
        self.session.update_profile_picture(filename, image).await
    }

    pub async fn stats(&self) -> Result<AccountStats, ApiError> {
        let user = self
            .session
            .current_user()
            .ok_or_else(|| ApiError::Unauthorized("Please log in to view your account".to_string()))?;

        let listing = self
            .stories
            .get_user_stories(&user.id, &StoryQuery::default())
            .await?;
        Ok(AccountStats::from_stories(&listing.stories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::models::StoryAuthor;
    use crate::stories::Genre;

    fn story(likes: usize, word_count: Option<u64>, content: &str) -> Story {
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
            likes: (0..likes).map(|i| format!("u-{i}")).collect(),
            comments: Vec::new(),
            word_count,
            created_at: None,
        }
    }

    #[test]
    fn password_change_enforces_all_rules() {
        let form = PasswordChangeForm {
            current_password: String::new(),
            new_password: "five5".to_string(),
            confirm_password: "other".to_string(),
        };
        let messages = form.validate().messages();
        assert!(messages.contains(&"Current password is required".to_string()));
        assert!(messages.contains(&"New password must be at least 6 characters long".to_string()));
        assert!(messages.contains(&"New passwords do not match".to_string()));
    }

    #[test]
    fn password_change_accepts_valid_input() {
        let form = PasswordChangeForm {
            current_password: "hunter22".to_string(),
            new_password: "hunter23".to_string(),
            confirm_password: "hunter23".to_string(),
        };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn stats_sum_likes_and_words() {
        let stories = [
            story(3, Some(500), "ignored"),
            story(1, None, "one two three four five"),
        ];
        let stats = AccountStats::from_stories(&stories);
        assert_eq!(stats.total_stories, 2);
        assert_eq!(stats.total_likes, 4);
        // 500 from the server plus 5 counted locally.
        assert_eq!(stats.total_words, 505);
    }

    #[test]
    fn stats_default_to_zero_for_empty_listing() {
        assert_eq!(AccountStats::from_stories(&[]), AccountStats::default());
    }
}
