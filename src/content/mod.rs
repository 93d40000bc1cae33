//! The text each command prints.
//!
//! Content is opaque markup: the engine appends whatever string it finds here
//! verbatim. A built-in set ships with the binary; a JSON file can override
//! any subset of it.
mod builtin;
mod loader;

use serde::{Deserialize, Serialize};

/// Markup for the banner and every content-producing command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Content {
    /// Shown once at startup.
    pub banner: String,
    /// Trailing line of the `help` listing.
    pub help_hint: String,
    pub about: String,
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub contact: String,
}

impl Content {
    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            banner: builtin::BANNER.to_string(),
            help_hint: builtin::HELP_HINT.to_string(),
            about: builtin::ABOUT.to_string(),
            skills: builtin::SKILLS.to_string(),
            projects: builtin::PROJECTS.to_string(),
            experience: builtin::EXPERIENCE.to_string(),
            contact: builtin::CONTACT.to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}
