//! Application shell: route table, service wiring, and page construction.

use std::sync::Arc;

use tracing::info;

use crate::auth::AuthService;
use crate::common::{ApiClient, ApiConfig, ApiError};
use crate::pages::account::AccountPage;
use crate::pages::browse::BrowsePage;
use crate::pages::create_story::CreateStoryPage;
use crate::pages::edit_story::EditStoryPage;
use crate::pages::login::LoginPage;
use crate::pages::my_stories::MyStoriesPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::signup::SignupPage;
use crate::pages::view_story::ViewStoryPage;
use crate::pages::write_story::WriteStoryPage;
use crate::session::{GuardDecision, RouteGuard, SessionProvider, SessionStore};
use crate::stories::StoryService;

// ============================================================================
// Routes
// ============================================================================

/// Every navigable screen. Paths mirror the web frontend's URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    ResetPassword,
    Browse,
    Create,
    Write,
    MyStories,
    Account,
    ViewStory(String),
    EditStory(String),
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/reset-password" => Some(Route::ResetPassword),
            "/browse" => Some(Route::Browse),
            "/create" => Some(Route::Create),
            "/write" => Some(Route::Write),
            "/my-stories" => Some(Route::MyStories),
            "/account" => Some(Route::Account),
            _ => {
                let rest = path.strip_prefix("/story/")?;
                match rest.split_once('/') {
                    None if !rest.is_empty() => Some(Route::ViewStory(rest.to_string())),
                    Some((id, "edit")) if !id.is_empty() => Some(Route::EditStory(id.to_string())),
                    _ => None,
                }
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Browse => "/browse".to_string(),
            Route::Create => "/create".to_string(),
            Route::Write => "/write".to_string(),
            Route::MyStories => "/my-stories".to_string(),
            Route::Account => "/account".to_string(),
            Route::ViewStory(id) => format!("/story/{id}"),
            Route::EditStory(id) => format!("/story/{id}/edit"),
        }
    }

    /// Routes behind the guard. Reading is public, writing is not.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Create
                | Route::Write
                | Route::MyStories
                | Route::Account
                | Route::EditStory(_)
        )
    }
}

// ============================================================================
// App wiring
// ============================================================================

/// Owns the shared client, services, and session; hands out page controllers.
pub struct App {
    auth: Arc<AuthService>,
    stories: Arc<StoryService>,
    session: Arc<SessionProvider>,
    guard: RouteGuard,
}

impl App {
    /// Builds the full object graph from the environment: config, session
    /// store, shared HTTP client, services, provider, and guard.
    pub fn from_env() -> Self {
        let config = ApiConfig::from_env();
        info!(base_url = %config.base_url(), "starting client");

        let store = Arc::new(SessionStore::from_env());
        let client = Arc::new(ApiClient::new(config, store.clone()));
        let auth = Arc::new(AuthService::new(client.clone()));
        let stories = Arc::new(StoryService::new(client));
        let session = Arc::new(SessionProvider::new(store, auth.clone()));
        let guard = RouteGuard::new(session.clone());

        Self {
            auth,
            stories,
            session,
            guard,
        }
    }

    /// Restores and revalidates any persisted session.
    pub async fn initialize(&self) -> Result<(), ApiError> {
        self.session.initialize().await
    }

    pub fn session(&self) -> &Arc<SessionProvider> {
        &self.session
    }

    /// Runs the guard for a protected route. Public routes pass through.
    pub async fn authorize(&self, route: &Route) -> Option<GuardDecision> {
        if !route.requires_auth() {
            return None;
        }
        Some(self.guard.authorize(&route.path()).await)
    }

    // ------------------------------------------------------------------
    // Page construction
    // ------------------------------------------------------------------

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.session.clone())
    }

    pub fn signup_page(&self) -> SignupPage {
        SignupPage::new(self.session.clone())
    }

    pub fn reset_password_page(&self) -> ResetPasswordPage {
        ResetPasswordPage::new(self.auth.clone())
    }

    pub fn browse_page(&self) -> BrowsePage {
        BrowsePage::new(self.stories.clone())
    }

    pub fn view_story_page(&self) -> ViewStoryPage {
        ViewStoryPage::new(self.stories.clone(), self.session.clone())
    }

    pub fn write_story_page(&self) -> WriteStoryPage {
        WriteStoryPage::new(self.stories.clone())
    }

    pub fn create_story_page(&self) -> CreateStoryPage {
        CreateStoryPage::new(self.stories.clone())
    }

    pub fn edit_story_page(&self) -> EditStoryPage {
        EditStoryPage::new(self.stories.clone())
    }

    pub fn my_stories_page(&self) -> MyStoriesPage {
        MyStoriesPage::new(self.stories.clone(), self.session.clone())
    }

    pub fn account_page(&self) -> AccountPage {
        AccountPage::new(self.session.clone(), self.stories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/browse"), Some(Route::Browse));
        assert_eq!(Route::parse("/my-stories/"), Some(Route::MyStories));
        assert_eq!(Route::parse("/nowhere"), None);
    }

    #[test]
    fn parses_story_routes() {
        assert_eq!(
            Route::parse("/story/abc123"),
            Some(Route::ViewStory("abc123".to_string()))
        );
        assert_eq!(
            Route::parse("/story/abc123/edit"),
            Some(Route::EditStory("abc123".to_string()))
        );
        assert_eq!(Route::parse("/story/"), None);
        assert_eq!(Route::parse("/story/abc123/share"), None);
    }

    #[test]
    fn route_paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Browse,
            Route::Account,
            Route::ViewStory("abc123".to_string()),
            Route::EditStory("abc123".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn write_paths_are_protected_and_reads_are_public() {
        for route in [
            Route::Create,
            Route::Write,
            Route::MyStories,
            Route::Account,
            Route::EditStory("abc123".to_string()),
        ] {
            assert!(route.requires_auth(), "{route:?} should be protected");
        }
        for route in [
            Route::Home,
            Route::Login,
            Route::Browse,
            Route::ViewStory("abc123".to_string()),
        ] {
            assert!(!route.requires_auth(), "{route:?} should be public");
        }
    }
}
