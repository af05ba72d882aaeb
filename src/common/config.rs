// API endpoint configuration. The base URL is environment-driven so the same
// binary can point at a local or deployed backend.

use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Reads `STORYLOOM_API_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        Self::new(env::var("STORYLOOM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Auth endpoints
    // ------------------------------------------------------------------

    pub fn register(&self) -> String {
        format!("{}/users/register", self.base_url)
    }

    pub fn login(&self) -> String {
        format!("{}/users/login", self.base_url)
    }

    pub fn forgot_password(&self) -> String {
        format!("{}/users/forgot-password", self.base_url)
    }

    pub fn reset_password(&self) -> String {
        format!("{}/users/reset-password", self.base_url)
    }

    pub fn profile(&self) -> String {
        format!("{}/users/profile", self.base_url)
    }

    pub fn profile_picture(&self) -> String {
        format!("{}/users/profile/picture", self.base_url)
    }

    // ------------------------------------------------------------------
    // Story endpoints
    // ------------------------------------------------------------------

    pub fn stories(&self) -> String {
        format!("{}/stories", self.base_url)
    }

    pub fn story(&self, id: &str) -> String {
        format!("{}/stories/{}", self.base_url, urlencoding::encode(id))
    }

    pub fn user_stories(&self, user_id: &str) -> String {
        format!(
            "{}/stories/user/{}",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }

    pub fn like_story(&self, id: &str) -> String {
        format!("{}/stories/{}/like", self.base_url, urlencoding::encode(id))
    }

    pub fn comment_story(&self, id: &str) -> String {
        format!(
            "{}/stories/{}/comments",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    pub fn generate_story(&self) -> String {
        format!("{}/stories/generate", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("https://example.com/api/");
        assert_eq!(config.stories(), "https://example.com/api/stories");
    }

    #[test]
    fn story_ids_are_url_encoded() {
        let config = ApiConfig::new("http://localhost:5000/api");
        assert_eq!(
            config.story("abc/../def"),
            "http://localhost:5000/api/stories/abc%2F..%2Fdef"
        );
    }

    #[test]
    fn endpoint_paths_match_backend_contract() {
        let config = ApiConfig::new("http://localhost:5000/api");
        assert_eq!(
            config.register(),
            "http://localhost:5000/api/users/register"
        );
        assert_eq!(
            config.profile_picture(),
            "http://localhost:5000/api/users/profile/picture"
        );
        assert_eq!(
            config.like_story("42"),
            "http://localhost:5000/api/stories/42/like"
        );
        assert_eq!(
            config.generate_story(),
            "http://localhost:5000/api/stories/generate"
        );
    }
}
