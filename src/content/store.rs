//! Content loading.
//!
//! One JSON file per shelf, read from a content directory when one is
//! configured and from the data compiled into the binary otherwise. Loaders
//! return `Result` and never panic; `ContentStore::load` absorbs every
//! failure into an empty collection with a warning, so a broken file
//! degrades to an empty shelf instead of taking the app down.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use url::Url;

use super::model::{BlogPost, Book, Hobby, MediaEntry, Paper, Profile, Project};
use crate::error::{AlcoveError, Result};

const BOOKS_FILE: &str = "books.json";
const PAPERS_FILE: &str = "papers.json";
const MEDIA_FILE: &str = "media.json";
const BLOG_FILE: &str = "blog.json";
const HOBBIES_FILE: &str = "hobbies.json";
const PROJECTS_FILE: &str = "projects.json";
const PROFILE_FILE: &str = "profile.json";

const EMBEDDED_BOOKS: &str = include_str!("../../content/books.json");
const EMBEDDED_PAPERS: &str = include_str!("../../content/papers.json");
const EMBEDDED_MEDIA: &str = include_str!("../../content/media.json");
const EMBEDDED_BLOG: &str = include_str!("../../content/blog.json");
const EMBEDDED_HOBBIES: &str = include_str!("../../content/hobbies.json");
const EMBEDDED_PROJECTS: &str = include_str!("../../content/projects.json");
const EMBEDDED_PROFILE: &str = include_str!("../../content/profile.json");

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub books: Vec<Book>,
    pub papers: Vec<Paper>,
    pub media: Vec<MediaEntry>,
    pub blog: Vec<BlogPost>,
    pub hobbies: Vec<Hobby>,
    pub projects: Vec<Project>,
    pub profile: Profile,
}

impl ContentStore {
    /// Load every collection, substituting an empty one for any that fails.
    pub fn load(content_dir: Option<&Path>) -> Self {
        let mut papers: Vec<Paper> =
            Self::load_or_empty(content_dir, PAPERS_FILE, EMBEDDED_PAPERS, "papers");
        papers.retain(|p| Self::link_ok(&p.url, &p.title));

        let mut projects: Vec<Project> =
            Self::load_or_empty(content_dir, PROJECTS_FILE, EMBEDDED_PROJECTS, "projects");
        projects.retain(|p| Self::link_ok(&p.link, &p.title));

        let mut blog: Vec<BlogPost> =
            Self::load_or_empty(content_dir, BLOG_FILE, EMBEDDED_BLOG, "blog posts");
        // Dates are year-prefixed strings; newest first.
        blog.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            books: Self::load_or_empty(content_dir, BOOKS_FILE, EMBEDDED_BOOKS, "books"),
            papers,
            media: Self::load_or_empty(content_dir, MEDIA_FILE, EMBEDDED_MEDIA, "media entries"),
            blog,
            hobbies: Self::load_or_empty(content_dir, HOBBIES_FILE, EMBEDDED_HOBBIES, "hobbies"),
            projects,
            profile: Self::load_profile(content_dir),
        }
    }

    fn load_or_empty<T: DeserializeOwned>(
        dir: Option<&Path>,
        file: &str,
        embedded: &str,
        what: &str,
    ) -> Vec<T> {
        match Self::load_collection(dir, file, embedded) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "loaded {}", what);
                items
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", what, e);
                Vec::new()
            }
        }
    }

    fn load_collection<T: DeserializeOwned>(
        dir: Option<&Path>,
        file: &str,
        embedded: &str,
    ) -> Result<Vec<T>> {
        match dir {
            Some(dir) => Self::read_json_file(&dir.join(file)),
            None => serde_json::from_str(embedded).map_err(|e| AlcoveError::ContentParse {
                path: PathBuf::from(file),
                source: e,
            }),
        }
    }

    fn load_profile(dir: Option<&Path>) -> Profile {
        let loaded: Result<Profile> = match dir {
            Some(dir) => Self::read_json_file(&dir.join(PROFILE_FILE)),
            None => serde_json::from_str(EMBEDDED_PROFILE).map_err(|e| {
                AlcoveError::ContentParse {
                    path: PathBuf::from(PROFILE_FILE),
                    source: e,
                }
            }),
        };
        match loaded {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("failed to load profile: {}", e);
                Profile::default()
            }
        }
    }

    fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
        if !path.exists() {
            return Err(AlcoveError::ContentNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| AlcoveError::ContentParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn link_ok(link: &str, title: &str) -> bool {
        match Url::parse(link) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("dropping \"{}\": bad link {}: {}", title, link, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let store = ContentStore::load(None);
        assert!(!store.books.is_empty());
        assert!(!store.papers.is_empty());
        assert!(!store.media.is_empty());
        assert!(!store.blog.is_empty());
        assert!(!store.hobbies.is_empty());
        assert!(!store.projects.is_empty());
        assert!(!store.profile.name.is_empty());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "books.json",
            r#"[{"title": "Refactoring", "author": "Martin Fowler"}]"#,
        );

        let store = ContentStore::load(Some(dir.path()));
        assert_eq!(store.books.len(), 1);
        assert_eq!(store.books[0].author, "Martin Fowler");
        // Everything else is missing from the directory and degrades to empty.
        assert!(store.papers.is_empty());
        assert!(store.media.is_empty());
    }

    #[test]
    fn test_corrupt_file_becomes_empty_collection() {
        let dir = TempDir::new().unwrap();
        write(&dir, "books.json", "not json at all {");

        let store = ContentStore::load(Some(dir.path()));
        assert!(store.books.is_empty());
    }

    #[test]
    fn test_read_json_file_missing_is_typed_error() {
        let dir = TempDir::new().unwrap();
        let result: Result<Vec<Book>> =
            ContentStore::read_json_file(&dir.path().join("books.json"));
        assert!(matches!(result, Err(AlcoveError::ContentNotFound { .. })));
    }

    #[test]
    fn test_read_json_file_corrupt_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "papers.json", "[{]");
        let result: Result<Vec<Paper>> =
            ContentStore::read_json_file(&dir.path().join("papers.json"));
        assert!(matches!(result, Err(AlcoveError::ContentParse { .. })));
    }

    #[test]
    fn test_invalid_links_are_dropped() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "papers.json",
            r#"[
                {"title": "Good", "url": "https://example.com/p.pdf"},
                {"title": "Bad", "url": "not a url"}
            ]"#,
        );

        let store = ContentStore::load(Some(dir.path()));
        assert_eq!(store.papers.len(), 1);
        assert_eq!(store.papers[0].title, "Good");
    }

    #[test]
    fn test_blog_sorted_newest_first() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "blog.json",
            r#"[
                {"date": "2022-01-05", "title": "Old", "slug": "old"},
                {"date": "2024-11-20", "title": "New", "slug": "new"},
                {"date": "2023-06-01", "title": "Mid", "slug": "mid"}
            ]"#,
        );

        let store = ContentStore::load(Some(dir.path()));
        let titles: Vec<_> = store.blog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }
}
