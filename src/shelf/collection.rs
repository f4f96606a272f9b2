//! A typed collection for one shelf, with pattern-matched strategy dispatch.

use ratatui::text::Text;

use crate::config::Theme;
use crate::content::{BlogPost, Book, ContentStore, Hobby, MediaEntry, Paper, Project};
use crate::shelf::strategy::{
    BlogStrategy, BookStrategy, HobbyStrategy, MediaStrategy, PaperStrategy, ProjectStrategy,
    ShelfStrategy,
};
use crate::shelf::ContentKind;

#[derive(Debug, Clone)]
pub enum Collection {
    Books(Vec<Book>),
    Papers(Vec<Paper>),
    Media(Vec<MediaEntry>),
    Blog(Vec<BlogPost>),
    Projects(Vec<Project>),
    Hobbies(Vec<Hobby>),
}

impl Collection {
    /// Pull the collection for `kind` out of a loaded store.
    pub fn for_kind(kind: ContentKind, store: &ContentStore) -> Self {
        match kind {
            ContentKind::Book => Collection::Books(store.books.clone()),
            ContentKind::Paper => Collection::Papers(store.papers.clone()),
            ContentKind::Anime => Collection::Media(store.media.clone()),
            ContentKind::Blog => Collection::Blog(store.blog.clone()),
            ContentKind::Project => Collection::Projects(store.projects.clone()),
            ContentKind::Hobby => Collection::Hobbies(store.hobbies.clone()),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Collection::Books(_) => BookStrategy.kind(),
            Collection::Papers(_) => PaperStrategy.kind(),
            Collection::Media(_) => MediaStrategy.kind(),
            Collection::Blog(_) => BlogStrategy.kind(),
            Collection::Projects(_) => ProjectStrategy.kind(),
            Collection::Hobbies(_) => HobbyStrategy.kind(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Books(items) => items.len(),
            Collection::Papers(items) => items.len(),
            Collection::Media(items) => items.len(),
            Collection::Blog(items) => items.len(),
            Collection::Projects(items) => items.len(),
            Collection::Hobbies(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many items survive the filter.
    pub fn filtered_len(&self, query: &str) -> usize {
        match self {
            Collection::Books(items) => BookStrategy.filter(items, query).len(),
            Collection::Papers(items) => PaperStrategy.filter(items, query).len(),
            Collection::Media(items) => MediaStrategy.filter(items, query).len(),
            Collection::Blog(items) => BlogStrategy.filter(items, query).len(),
            Collection::Projects(items) => ProjectStrategy.filter(items, query).len(),
            Collection::Hobbies(items) => HobbyStrategy.filter(items, query).len(),
        }
    }

    /// Filter then render through the kind's strategy. `None` when nothing
    /// survives the filter (or the shelf was empty to begin with).
    pub fn render(&self, query: &str, theme: &Theme) -> Option<Text<'static>> {
        match self {
            Collection::Books(items) => {
                BookStrategy.render_list(&BookStrategy.filter(items, query), theme)
            }
            Collection::Papers(items) => {
                PaperStrategy.render_list(&PaperStrategy.filter(items, query), theme)
            }
            Collection::Media(items) => {
                MediaStrategy.render_list(&MediaStrategy.filter(items, query), theme)
            }
            Collection::Blog(items) => {
                BlogStrategy.render_list(&BlogStrategy.filter(items, query), theme)
            }
            Collection::Projects(items) => {
                ProjectStrategy.render_list(&ProjectStrategy.filter(items, query), theme)
            }
            Collection::Hobbies(items) => {
                HobbyStrategy.render_list(&HobbyStrategy.filter(items, query), theme)
            }
        }
    }

    /// Line offset of the `index`-th filtered item within the rendered
    /// text, for kinds whose display order equals filter order. Media
    /// renders grouped, so its offset is not derivable from the index and
    /// callers fall back to manual scrolling.
    pub fn line_offset(&self, query: &str, index: usize, theme: &Theme) -> Option<usize> {
        fn offset<S: ShelfStrategy>(
            strategy: &S,
            items: &[S::Item],
            query: &str,
            index: usize,
            theme: &Theme,
        ) -> usize {
            strategy
                .filter(items, query)
                .iter()
                .take(index)
                .map(|item| strategy.render_item(item, 0, theme).len())
                .sum()
        }

        match self {
            Collection::Books(items) => Some(offset(&BookStrategy, items, query, index, theme)),
            Collection::Papers(items) => Some(offset(&PaperStrategy, items, query, index, theme)),
            Collection::Media(_) => None,
            Collection::Blog(items) => Some(offset(&BlogStrategy, items, query, index, theme)),
            Collection::Projects(items) => {
                Some(offset(&ProjectStrategy, items, query, index, theme))
            }
            Collection::Hobbies(items) => Some(offset(&HobbyStrategy, items, query, index, theme)),
        }
    }

    /// The link carried by the `index`-th filtered item, for kinds that
    /// have one.
    pub fn link_at(&self, query: &str, index: usize) -> Option<String> {
        match self {
            Collection::Papers(items) => PaperStrategy
                .filter(items, query)
                .get(index)
                .map(|paper| paper.url.clone()),
            Collection::Projects(items) => ProjectStrategy
                .filter(items, query)
                .get(index)
                .map(|project| project.link.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn papers() -> Collection {
        Collection::Papers(vec![
            Paper {
                title: "Out of the Tar Pit".into(),
                url: "https://example.com/tarpit.pdf".into(),
            },
            Paper {
                title: "The Byzantine Generals Problem".into(),
                url: "https://example.com/byz.pdf".into(),
            },
        ])
    }

    #[test]
    fn test_filtered_len_tracks_query() {
        let collection = papers();
        assert_eq!(collection.filtered_len(""), 2);
        assert_eq!(collection.filtered_len("byzantine"), 1);
        assert_eq!(collection.filtered_len("nope"), 0);
    }

    #[test]
    fn test_render_none_when_nothing_survives() {
        let collection = papers();
        let theme = Theme::default();
        assert!(collection.render("nope", &theme).is_none());
        assert!(collection.render("", &theme).is_some());
    }

    #[test]
    fn test_link_at_respects_filter() {
        let collection = papers();
        assert_eq!(
            collection.link_at("byzantine", 0).as_deref(),
            Some("https://example.com/byz.pdf")
        );
        assert_eq!(
            collection.link_at("", 0).as_deref(),
            Some("https://example.com/tarpit.pdf")
        );
        assert!(collection.link_at("", 5).is_none());
    }

    #[test]
    fn test_link_at_none_for_linkless_kinds() {
        let collection = Collection::Books(vec![]);
        assert!(collection.link_at("", 0).is_none());
    }

    #[test]
    fn test_projects_expose_links() {
        let collection = Collection::Projects(vec![Project {
            title: "alcove".into(),
            description: "terminal portfolio".into(),
            tech: vec![],
            link: "https://example.com/alcove".into(),
        }]);
        assert_eq!(
            collection.link_at("", 0).as_deref(),
            Some("https://example.com/alcove")
        );
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(Collection::Books(vec![]).is_empty());
        assert_eq!(papers().len(), 2);
        assert!(!papers().is_empty());
    }

    #[test]
    fn test_line_offset_counts_rendered_lines() {
        let collection = papers();
        let theme = Theme::default();
        // Each paper renders as two lines (title + url).
        assert_eq!(collection.line_offset("", 0, &theme), Some(0));
        assert_eq!(collection.line_offset("", 1, &theme), Some(2));
    }

    #[test]
    fn test_line_offset_unavailable_for_grouped_media() {
        let collection = Collection::Media(vec![]);
        let theme = Theme::default();
        assert_eq!(collection.line_offset("", 0, &theme), None);
    }

    #[test]
    fn test_kind_round_trip() {
        let store = ContentStore::default();
        for kind in ContentKind::ALL {
            assert_eq!(Collection::for_kind(*kind, &store).kind(), *kind);
        }
    }
}
