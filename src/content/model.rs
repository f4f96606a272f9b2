//! Content records backing the shelves.
//!
//! All of these are plain denormalized data: created by editing the JSON
//! files under `content/`, deserialized once at startup, and never mutated
//! at runtime. Required fields are enforced by serde; optional fields
//! default.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Anime,
    Movie,
    WebSeries,
}

impl MediaKind {
    /// Section heading used when a shelf groups entries by kind.
    pub fn section_heading(&self) -> &'static str {
        match self {
            MediaKind::Anime => "Anime",
            MediaKind::Movie => "Movies",
            MediaKind::WebSeries => "Web Series",
        }
    }

    pub const ALL: &'static [MediaKind] =
        &[MediaKind::Anime, MediaKind::Movie, MediaKind::WebSeries];
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.section_heading())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Watching,
    Completed,
    #[serde(alias = "plan_to_watch")]
    Planning,
}

impl WatchStatus {
    /// Group label inside a media section. Rendered order follows `ALL`.
    pub fn group_label(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Watched",
            WatchStatus::Planning => "Plan to Watch",
        }
    }

    pub const ALL: &'static [WatchStatus] = &[
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::Planning,
    ];
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.group_label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub title: String,
    pub kind: MediaKind,
    pub status: WatchStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Year-prefixed date string ("2024-03-17"); sortable lexicographically.
    pub date: String,
    pub title: String,
    /// Unique identifier; doubles as the post's path on the published site.
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Closed set of hobby icons. Unknown names in the JSON fall back to
/// `Other`, the one open edge for external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HobbyIcon {
    Music,
    Photography,
    Climbing,
    Gaming,
    Cooking,
    Reading,
    Travel,
    Chess,
    Other,
}

impl HobbyIcon {
    pub fn name(&self) -> &'static str {
        match self {
            HobbyIcon::Music => "music",
            HobbyIcon::Photography => "photography",
            HobbyIcon::Climbing => "climbing",
            HobbyIcon::Gaming => "gaming",
            HobbyIcon::Cooking => "cooking",
            HobbyIcon::Reading => "reading",
            HobbyIcon::Travel => "travel",
            HobbyIcon::Chess => "chess",
            HobbyIcon::Other => "other",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            HobbyIcon::Music => "♫",
            HobbyIcon::Photography => "📷",
            HobbyIcon::Climbing => "⛰",
            HobbyIcon::Gaming => "🎮",
            HobbyIcon::Cooking => "🍳",
            HobbyIcon::Reading => "📚",
            HobbyIcon::Travel => "✈",
            HobbyIcon::Chess => "♞",
            HobbyIcon::Other => "✦",
        }
    }
}

impl From<String> for HobbyIcon {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "music" => HobbyIcon::Music,
            "photography" => HobbyIcon::Photography,
            "climbing" => HobbyIcon::Climbing,
            "gaming" => HobbyIcon::Gaming,
            "cooking" => HobbyIcon::Cooking,
            "reading" => HobbyIcon::Reading,
            "travel" => HobbyIcon::Travel,
            "chess" => HobbyIcon::Chess,
            _ => HobbyIcon::Other,
        }
    }
}

impl From<HobbyIcon> for String {
    fn from(icon: HobbyIcon) -> Self {
        icon.name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
    pub description: String,
    pub icon: HobbyIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub org: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_book_optional_fields_default() {
        let book: Book =
            serde_json::from_str(r#"{"title": "Clean Code", "author": "Robert C. Martin"}"#)
                .unwrap();
        assert_eq!(book.title, "Clean Code");
        assert!(book.cover.is_none());
        assert!(book.notes.is_none());
        assert!(!book.recommended);
    }

    #[test]
    fn test_book_missing_required_field_is_an_error() {
        let result: Result<Book, _> = serde_json::from_str(r#"{"title": "No Author"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_media_entry_tags() {
        let entry: MediaEntry = serde_json::from_str(
            r#"{"title": "Frieren", "kind": "anime", "status": "completed", "notes": "rewatch soon"}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, MediaKind::Anime);
        assert_eq!(entry.status, WatchStatus::Completed);
        assert_eq!(entry.notes.as_deref(), Some("rewatch soon"));
    }

    #[test]
    fn test_watch_status_plan_to_watch_alias() {
        let entry: MediaEntry = serde_json::from_str(
            r#"{"title": "Dune", "kind": "movie", "status": "plan_to_watch"}"#,
        )
        .unwrap();
        assert_eq!(entry.status, WatchStatus::Planning);
        assert_eq!(entry.status.group_label(), "Plan to Watch");
    }

    #[test]
    fn test_hobby_icon_unknown_falls_back_to_other() {
        let hobby: Hobby = serde_json::from_str(
            r#"{"name": "Beekeeping", "description": "weekend apiary", "icon": "bees"}"#,
        )
        .unwrap();
        assert_eq!(hobby.icon, HobbyIcon::Other);
        assert_eq!(hobby.icon.glyph(), "✦");
    }

    #[test]
    fn test_section_and_group_labels() {
        assert_eq!(MediaKind::Movie.section_heading(), "Movies");
        assert_eq!(MediaKind::WebSeries.section_heading(), "Web Series");
        assert_eq!(WatchStatus::Completed.group_label(), "Watched");
    }
}
