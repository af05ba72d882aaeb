// src/stories/mod.rs

pub mod models;
pub mod service;
pub mod text;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::{Genre, Story, StoryQuery};
pub use service::StoryService;
