//! The represented person: name plus loaded background documents.
//!
//! Built once at startup and immutable for the process lifetime.

use crate::documents::{self, PersonaDocs};
use crate::prompts;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Persona {
    pub name: String,
    pub summary: String,
    pub linkedin: String,
    pub resume: String,
}

impl Persona {
    /// Load the persona's documents from the data directory. Failure here is
    /// fatal: without the background data there is no persona to represent.
    pub fn load(name: &str, data_dir: &Path) -> Result<Self> {
        let PersonaDocs {
            summary,
            linkedin,
            resume,
        } = documents::load(data_dir)?;

        Ok(Self {
            name: name.to_string(),
            summary,
            linkedin,
            resume,
        })
    }

    /// The system instruction injected at the head of every turn.
    pub fn system_prompt(&self) -> String {
        prompts::build_system_prompt(self)
    }
}
