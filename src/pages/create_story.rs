//! Create page: the three-step AI story wizard.
//!
//! Details (title, genre, length) -> Prompt (write prompt, generate) ->
//! Review (read result, save or go back and regenerate). The wizard state is
//! a plain struct so step transitions stay testable without any network.

use std::sync::Arc;

use tracing::info;

use crate::common::ApiError;
use crate::stories::models::CreateStory;
use crate::stories::{Genre, StoryService};

use super::PageOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Prompt,
    Review,
}

/// Requested length of the generated story, folded into the prompt as a
/// word-count target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    pub fn target_words(&self) -> usize {
        match self {
            StoryLength::Short => 500,
            StoryLength::Medium => 1000,
            StoryLength::Long => 2000,
        }
    }
}

impl std::str::FromStr for StoryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(StoryLength::Short),
            "medium" => Ok(StoryLength::Medium),
            "long" => Ok(StoryLength::Long),
            other => Err(format!("Unknown length '{other}' (short, medium, long)")),
        }
    }
}

#[derive(Debug)]
pub struct CreateStoryWizard {
    step: WizardStep,
    pub title: String,
    pub genre: Option<Genre>,
    pub length: StoryLength,
    pub prompt: String,
    pub generated: Option<String>,
}

impl Default for CreateStoryWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Details,
            title: String::new(),
            genre: None,
            length: StoryLength::Medium,
            prompt: String::new(),
            generated: None,
        }
    }
}

impl CreateStoryWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advances to the next step, enforcing that step's requirements.
    pub fn next(&mut self) -> Result<(), ApiError> {
        match self.step {
            WizardStep::Details => {
                if self.title.trim().is_empty() {
                    return Err(ApiError::Validation("Please provide a title".to_string()));
                }
                if self.genre.is_none() {
                    return Err(ApiError::Validation("Please select a genre".to_string()));
                }
                self.step = WizardStep::Prompt;
                Ok(())
            }
            WizardStep::Prompt => {
                if self.generated.is_none() {
                    return Err(ApiError::Validation(
                        "Please generate a story first".to_string(),
                    ));
                }
                self.step = WizardStep::Review;
                Ok(())
            }
            WizardStep::Review => Ok(()),
        }
    }

    /// Steps back without losing any entered state.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Details => WizardStep::Details,
            WizardStep::Prompt => WizardStep::Details,
            WizardStep::Review => WizardStep::Prompt,
        };
    }

    /// The prompt actually sent for generation: the user's prompt framed with
    /// the title, genre, and length target from the details step.
    pub fn composed_prompt(&self) -> Result<String, ApiError> {
        if self.prompt.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please provide a story prompt".to_string(),
            ));
        }
        let genre = self
            .genre
            .ok_or_else(|| ApiError::Validation("Please select a genre".to_string()))?;
        Ok(format!(
            "Write a {} story titled \"{}\", around {} words. {}",
            genre,
            self.title.trim(),
            self.length.target_words(),
            self.prompt.trim()
        ))
    }

    /// The final draft for saving. Requires generated content.
    pub fn build_draft(&self) -> Result<CreateStory, ApiError> {
        let content = self
            .generated
            .as_deref()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                ApiError::Validation("Please generate a story before saving".to_string())
            })?;
        Ok(CreateStory {
            title: self.title.trim().to_string(),
            genre: self
                .genre
                .ok_or_else(|| ApiError::Validation("Please select a genre".to_string()))?,
            content: content.to_string(),
            is_ai_generated: true,
            image: None,
        })
    }
}

pub struct CreateStoryPage {
    stories: Arc<StoryService>,
}

impl CreateStoryPage {
    pub fn new(stories: Arc<StoryService>) -> Self {
        Self { stories }
    }

    /// Generates story content for the wizard's prompt and advances it to the
    /// review step.
    pub async fn generate(&self, wizard: &mut CreateStoryWizard) -> Result<(), ApiError> {
        let prompt = wizard.composed_prompt()?;
        let generated = self.stories.generate_ai_story(&prompt).await?;
        wizard.generated = Some(generated.content);
        wizard.next()?;
        info!("generated draft ready for review");
        Ok(())
    }

    pub async fn save(&self, wizard: &CreateStoryWizard) -> Result<PageOutcome, ApiError> {
        let draft = wizard.build_draft()?;
        let story = self.stories.create_story(&draft).await?;
        Ok(PageOutcome::Redirect(format!("/story/{}", story.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_with_details() -> CreateStoryWizard {
        CreateStoryWizard {
            title: "The Lighthouse".to_string(),
            genre: Some(Genre::Mystery),
            ..CreateStoryWizard::new()
        }
    }

    #[test]
    fn starts_on_details() {
        assert_eq!(CreateStoryWizard::new().step(), WizardStep::Details);
    }

    #[test]
    fn details_step_requires_title_then_genre() {
        let mut wizard = CreateStoryWizard::new();
        let err = wizard.next().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a title");

        wizard.title = "The Lighthouse".to_string();
        let err = wizard.next().unwrap_err();
        assert_eq!(err.to_string(), "Please select a genre");

        wizard.genre = Some(Genre::Mystery);
        wizard.next().expect("complete details should advance");
        assert_eq!(wizard.step(), WizardStep::Prompt);
    }

    #[test]
    fn prompt_step_requires_generated_content() {
        let mut wizard = wizard_with_details();
        wizard.next().expect("advance to prompt");
        let err = wizard.next().unwrap_err();
        assert_eq!(err.to_string(), "Please generate a story first");

        wizard.generated = Some("Once upon a time.".to_string());
        wizard.next().expect("advance to review");
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn back_retains_state_and_never_underflows() {
        let mut wizard = wizard_with_details();
        wizard.prompt = "A keeper hears knocking".to_string();
        wizard.next().expect("advance to prompt");

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.prompt, "A keeper hears knocking");

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[test]
    fn composed_prompt_carries_length_target() {
        let mut wizard = wizard_with_details();
        wizard.length = StoryLength::Long;
        wizard.prompt = "A keeper hears knocking from the lamp room.".to_string();

        let prompt = wizard.composed_prompt().expect("composed prompt");
        assert!(prompt.contains("around 2000 words"));
        assert!(prompt.contains("mystery"));
        assert!(prompt.contains("The Lighthouse"));
    }

    #[test]
    fn composed_prompt_requires_a_prompt() {
        let wizard = wizard_with_details();
        let err = wizard.composed_prompt().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a story prompt");
    }

    #[test]
    fn draft_requires_generated_content() {
        let wizard = wizard_with_details();
        assert!(wizard.build_draft().is_err());

        let mut wizard = wizard_with_details();
        wizard.generated = Some("Once upon a time.".to_string());
        let draft = wizard.build_draft().expect("draft");
        assert!(draft.is_ai_generated);
        assert_eq!(draft.title, "The Lighthouse");
    }
}
