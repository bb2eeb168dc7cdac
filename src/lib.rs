//! docker-android-build library
//!
//! Resolves image names and tags for the docker-android variants and drives
//! the docker CLI through build, test and push.

pub mod catalog;
pub mod config;
pub mod docker;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod prompt;
pub mod resolver;
pub mod runner;
pub mod tasks;

// Re-export commonly used types
pub use catalog::{AndroidVersion, Choice, Project, Task};
pub use config::Config;
pub use resolver::{BuildConfig, Selection};
