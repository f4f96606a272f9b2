//! Shelves: one searchable page section per content kind.
//!
//! The six kinds are a closed set, so strategy selection is a sum type with
//! pattern-matched dispatch rather than a string-keyed registry. The one
//! fallible edge is parsing a tag out of configuration or the CLI, which
//! names the offending tag in its error.

mod collection;
mod strategy;

pub use collection::Collection;
pub use strategy::{
    BlogStrategy, BookStrategy, HobbyStrategy, MediaStrategy, PaperStrategy, ProjectStrategy,
    ShelfStrategy,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlcoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Book,
    Paper,
    Anime,
    Blog,
    Project,
    Hobby,
}

impl ContentKind {
    pub const ALL: &'static [ContentKind] = &[
        ContentKind::Book,
        ContentKind::Paper,
        ContentKind::Anime,
        ContentKind::Blog,
        ContentKind::Project,
        ContentKind::Hobby,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ContentKind::Book => "book",
            ContentKind::Paper => "paper",
            ContentKind::Anime => "anime",
            ContentKind::Blog => "blog",
            ContentKind::Project => "project",
            ContentKind::Hobby => "hobby",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ContentKind {
    type Err = AlcoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" => Ok(ContentKind::Book),
            "paper" => Ok(ContentKind::Paper),
            "anime" => Ok(ContentKind::Anime),
            "blog" => Ok(ContentKind::Blog),
            "project" => Ok(ContentKind::Project),
            "hobby" => Ok(ContentKind::Hobby),
            other => Err(AlcoveError::UnknownKind(other.to_string())),
        }
    }
}

/// Static configuration for one shelf page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfConfig {
    pub title: String,
    pub description: String,
    /// Decorative prompt line shown in the shelf header.
    pub command: String,
    pub search_placeholder: String,
    pub kind: ContentKind,
}

impl ShelfConfig {
    fn new(
        title: &str,
        description: &str,
        command: &str,
        search_placeholder: &str,
        kind: ContentKind,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            command: command.to_string(),
            search_placeholder: search_placeholder.to_string(),
            kind,
        }
    }
}

/// The built-in shelf set, in sidebar order.
pub fn builtin_shelves() -> Vec<ShelfConfig> {
    vec![
        ShelfConfig::new(
            "Bookshelf",
            "Books that left a mark",
            "$ ls ~/shelf/books",
            "search title or author...",
            ContentKind::Book,
        ),
        ShelfConfig::new(
            "Papers",
            "Papers worth a slow read",
            "$ ls ~/shelf/papers",
            "search title...",
            ContentKind::Paper,
        ),
        ShelfConfig::new(
            "Watch Log",
            "Anime, movies, and web series",
            "$ ls ~/shelf/media",
            "search title...",
            ContentKind::Anime,
        ),
        ShelfConfig::new(
            "Blog",
            "Occasional writing",
            "$ ls ~/blog",
            "search posts...",
            ContentKind::Blog,
        ),
        ShelfConfig::new(
            "Projects",
            "Things I have shipped or abandoned honorably",
            "$ ls ~/src",
            "search title, description, or tech...",
            ContentKind::Project,
        ),
        ShelfConfig::new(
            "Hobbies",
            "Away from the keyboard, mostly",
            "$ ls ~/life",
            "search hobbies...",
            ContentKind::Hobby,
        ),
    ]
}
