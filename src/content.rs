//! Quiz bank and memory symbols.
//!
//! The built-in set is embedded at compile time. A `content.json` in
//! `~/.playground/` replaces it when present and valid.

use crate::config;
use crate::games::QuizQuestion;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub memory_symbols: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Content {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let content: Content = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        content.validate()?;
        Ok(content)
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The embedded content set.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CONTENT) {
            Ok(content) => content,
            Err(e) => {
                log::error!("embedded content is invalid: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> io::Result<()> {
        if self.memory_symbols.is_empty() {
            return Err(invalid("memory_symbols must not be empty"));
        }
        for (i, q) in self.quiz.iter().enumerate() {
            if !q.options.iter().any(|o| o == &q.answer) {
                return Err(invalid(&format!(
                    "quiz question {} answer {:?} is not among its options",
                    i + 1,
                    q.answer
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

/// Load the override from `~/.playground/content.json`, falling back to the
/// built-in set if it is missing or invalid.
pub fn load_content() -> Content {
    let path = match config::content_path() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("content override unavailable: {}", e);
            return Content::builtin();
        }
    };
    if !path.exists() {
        return Content::builtin();
    }
    match Content::load_from(&path) {
        Ok(content) => {
            log::info!("loaded content from {}", path.display());
            content
        }
        Err(e) => {
            log::warn!(
                "ignoring {}: {}; using built-in content",
                path.display(),
                e
            );
            Content::builtin()
        }
    }
}
