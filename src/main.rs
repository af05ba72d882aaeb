mod app;
mod auth;
mod common;
mod pages;
mod session;
mod stories;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Route};
use crate::auth::models::User;
use crate::pages::account::{PasswordChangeForm, ProfileForm};
use crate::pages::browse::{BrowseFilters, StoryCard};
use crate::pages::create_story::{CreateStoryWizard, StoryLength};
use crate::pages::login::LoginForm;
use crate::pages::reset_password::ResetPasswordForm;
use crate::pages::signup::SignupForm;
use crate::pages::write_story::StoryDraftForm;
use crate::pages::PageOutcome;
use crate::session::GuardDecision;
use crate::stories::Genre;

#[derive(Parser)]
#[command(name = "storyloom", version, about = "Story sharing client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    Signup {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    /// Sign in with email and password
    Login {
        email: String,
        password: String,
        /// Path to return to after login, as carried by a guard redirect
        #[arg(long)]
        redirect: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Request a password reset email
    ForgotPassword { email: String },
    /// Complete a password reset with the emailed token
    ResetPassword {
        token: String,
        new_password: String,
        confirm_password: String,
    },
    /// List the supported genres
    Genres,
    /// Browse the story catalog
    Browse {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        genre: Option<Genre>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Read a story
    Read { id: String },
    /// Toggle your like on a story
    Like { id: String },
    /// Comment on a story
    Comment { id: String, content: String },
    /// Publish a story written by hand
    Write {
        #[arg(long)]
        title: String,
        #[arg(long)]
        genre: Genre,
        /// File containing the story text
        #[arg(long)]
        content: PathBuf,
    },
    /// Generate and publish a story with AI
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        genre: Genre,
        #[arg(long, default_value = "medium")]
        length: StoryLength,
        #[arg(long)]
        prompt: String,
    },
    /// Edit one of your stories
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        genre: Option<Genre>,
        /// File containing the replacement story text
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// List your own stories
    Mine,
    /// Delete one of your stories
    Delete { id: String },
    /// Show account details and writing statistics
    Account {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change your password
    Passwd {
        current_password: String,
        new_password: String,
        confirm_password: String,
    },
    /// Upload a new profile picture
    Avatar { image: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let app = App::from_env();
    app.initialize().await?;

    run(&app, cli.command).await
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Signup {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
                confirm_password,
            };
            app.signup_page().submit(&form).await?;
            println!("Welcome aboard. You are now signed in.");
        }

        Command::Login {
            email,
            password,
            redirect,
        } => {
            let form = LoginForm {
                email,
                password,
                redirect,
            };
            let outcome = app.login_page().submit(&form).await?;
            match outcome {
                PageOutcome::Redirect(path) => println!("Signed in. Continue at {path}"),
                PageOutcome::Stay => println!("Signed in."),
            }
        }

        Command::Logout => {
            app.session().logout();
            println!("Signed out.");
        }

        Command::Whoami => match app.session().current_user() {
            Some(user) => println!("{} <{}>", user.username, user.email),
            None => println!("Not signed in."),
        },

        Command::ForgotPassword { email } => {
            let message = app.reset_password_page().request_reset(&email).await?;
            println!("{message}");
        }

        Command::ResetPassword {
            token,
            new_password,
            confirm_password,
        } => {
            let form = ResetPasswordForm {
                token,
                new_password,
                confirm_password,
            };
            let message = app.reset_password_page().complete(&form).await?;
            println!("{message}");
            println!("You can now log in with your new password.");
        }

        Command::Genres => {
            for genre in Genre::ALL {
                println!("{genre}");
            }
        }

        Command::Browse {
            page,
            genre,
            search,
        } => {
            let filters = BrowseFilters {
                page,
                genre,
                search,
            };
            if let Some(view) = app.browse_page().load(&filters).await? {
                for card in &view.cards {
                    print_card(card);
                }
                println!(
                    "Page {} of {} ({} stories total)",
                    view.page, view.pages, view.total
                );
            }
        }

        Command::Read { id } => {
            let view = app.view_story_page().load(&id).await?;
            let story = &view.story;
            println!("{} [{}]", story.title, story.genre);
            println!(
                "by {} | {} min read | {} likes | {} comments{}",
                story.author.username,
                view.reading_minutes,
                story.likes.len(),
                story.comments.len(),
                if story.is_ai_generated { " | AI" } else { "" }
            );
            println!();
            println!("{}", story.content);
            if !story.comments.is_empty() {
                println!();
                println!("Comments:");
                for comment in &story.comments {
                    let author = comment
                        .author
                        .as_ref()
                        .map(|a| a.username.as_str())
                        .unwrap_or("anonymous");
                    println!("  {author}: {}", comment.content);
                }
            }
        }

        Command::Like { id } => {
            let result = app.view_story_page().toggle_like(&id).await?;
            if result.is_liked {
                println!("Liked ({} total).", result.likes.len());
            } else {
                println!("Like removed ({} total).", result.likes.len());
            }
        }

        Command::Comment { id, content } => {
            app.view_story_page().add_comment(&id, &content).await?;
            println!("Comment added.");
        }

        Command::Write {
            title,
            genre,
            content,
        } => {
            if require_user(app, Route::Write).await?.is_none() {
                return Ok(());
            }
            let text = std::fs::read_to_string(&content)
                .with_context(|| format!("failed to read {}", content.display()))?;
            let form = StoryDraftForm {
                title,
                genre: Some(genre),
                content: text,
            };
            report_outcome(
                app.write_story_page().submit(&form).await?,
                "Story published.",
            );
        }

        Command::Create {
            title,
            genre,
            length,
            prompt,
        } => {
            if require_user(app, Route::Create).await?.is_none() {
                return Ok(());
            }
            let mut wizard = CreateStoryWizard::new();
            wizard.title = title;
            wizard.genre = Some(genre);
            wizard.length = length;
            wizard.next()?;
            wizard.prompt = prompt;

            let page = app.create_story_page();
            println!("Generating story, this can take a while...");
            page.generate(&mut wizard).await?;
            if let Some(content) = &wizard.generated {
                println!();
                println!("{content}");
                println!();
            }
            report_outcome(page.save(&wizard).await?, "Story published.");
        }

        Command::Edit {
            id,
            title,
            genre,
            content,
        } => {
            let Some(user) = require_user(app, Route::EditStory(id.clone())).await? else {
                return Ok(());
            };
            let page = app.edit_story_page();
            let mut form = page.load(&id, &user).await?;
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(genre) = genre {
                form.genre = Some(genre);
            }
            if let Some(path) = content {
                form.content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
            }
            report_outcome(page.submit(&id, &form).await?, "Story updated.");
        }

        Command::Mine => {
            if require_user(app, Route::MyStories).await?.is_none() {
                return Ok(());
            }
            let view = app.my_stories_page().load().await?;
            if view.cards.is_empty() {
                println!("You have not published any stories yet.");
            }
            for card in &view.cards {
                print_card(card);
            }
        }

        Command::Delete { id } => {
            if require_user(app, Route::MyStories).await?.is_none() {
                return Ok(());
            }
            let message = app.my_stories_page().delete(&id).await?;
            println!("{message}");
        }

        Command::Account { username, email } => {
            let Some(user) = require_user(app, Route::Account).await? else {
                return Ok(());
            };
            let page = app.account_page();

            if username.is_some() || email.is_some() {
                let form = ProfileForm {
                    username: username.unwrap_or_else(|| user.username.clone()),
                    email: email.unwrap_or_else(|| user.email.clone()),
                };
                let updated = page.update_profile(&form).await?;
                println!("Profile updated: {} <{}>", updated.username, updated.email);
            } else {
                println!("{} <{}>", user.username, user.email);
                if let Some(picture) = &user.profile_picture {
                    println!("Picture: {picture}");
                }
                let stats = page.stats().await?;
                println!(
                    "{} stories, {} likes received, {} words written",
                    stats.total_stories, stats.total_likes, stats.total_words
                );
            }
        }

        Command::Passwd {
            current_password,
            new_password,
            confirm_password,
        } => {
            if require_user(app, Route::Account).await?.is_none() {
                return Ok(());
            }
            let form = PasswordChangeForm {
                current_password,
                new_password,
                confirm_password,
            };
            app.account_page().change_password(&form).await?;
            println!("Password changed.");
        }

        Command::Avatar { image } => {
            if require_user(app, Route::Account).await?.is_none() {
                return Ok(());
            }
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;
            let filename = image
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("avatar")
                .to_string();
            let url = app.account_page().upload_picture(&filename, bytes).await?;
            println!("Picture uploaded: {url}");
        }
    }

    Ok(())
}

/// Runs the route guard for a protected screen. Prints the guard's answer and
/// returns `None` when the command should not proceed.
async fn require_user(app: &App, route: Route) -> anyhow::Result<Option<User>> {
    match app.authorize(&route).await {
        None => Ok(app.session().current_user()),
        Some(GuardDecision::Allow(user)) => Ok(Some(user)),
        Some(GuardDecision::Redirect { to, .. }) => {
            println!("Please log in first ({to}).");
            Ok(None)
        }
        Some(GuardDecision::Degraded { message }) => {
            println!("{message}");
            Ok(None)
        }
    }
}

fn report_outcome(outcome: PageOutcome, message: &str) {
    match outcome {
        PageOutcome::Redirect(path) => println!("{message} View at {path}"),
        PageOutcome::Stay => println!("{message}"),
    }
}

fn print_card(card: &StoryCard) {
    println!(
        "[{}] {} by {}{}",
        card.genre,
        card.title,
        card.author,
        if card.is_ai_generated { " (AI)" } else { "" }
    );
    println!(
        "    {} min read | {} likes | {} comments",
        card.reading_minutes, card.like_count, card.comment_count
    );
    println!("    {}", card.preview);
    println!("    id: {}", card.id);
}
