//! # Pages Module
//!
//! One controller per screen. Controllers validate user input, call the
//! services, and hand back view models plus a navigation outcome. They never
//! touch the session store directly; all auth state goes through the
//! session provider.

pub mod account;
pub mod browse;
pub mod create_story;
pub mod edit_story;
pub mod login;
pub mod my_stories;
pub mod reset_password;
pub mod signup;
pub mod view_story;
pub mod write_story;

pub use browse::{BrowseFilters, BrowsePage, BrowseView, StoryCard};
pub use login::{LoginForm, LoginPage};
pub use write_story::StoryDraftForm;

/// Where the app should navigate after a page action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Stay,
    Redirect(String),
}
