//! Per-kind strategies: how one content kind filters and renders.
//!
//! Filtering is a case-insensitive substring scan over a small, fixed set of
//! fields per kind. Collections here are tens of items, so a linear pass is
//! the right tool; there is no ranking — survivors keep their input order.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::config::Theme;
use crate::content::{BlogPost, Book, Hobby, MediaEntry, MediaKind, Paper, Project, WatchStatus};
use crate::shelf::ContentKind;

pub trait ShelfStrategy {
    type Item;

    fn kind(&self) -> ContentKind;

    /// Whether `item` matches `query`. The query is already trimmed,
    /// lowercased, and non-empty; implementations match it against their
    /// kind's search fields, any-of.
    fn matches(&self, item: &Self::Item, query: &str) -> bool;

    /// One item's visual, deterministic in (item, index).
    fn render_item(&self, item: &Self::Item, index: usize, theme: &Theme) -> Vec<Line<'static>>;

    /// The whole list, or `None` when there is nothing to show.
    fn render_list(&self, items: &[&Self::Item], theme: &Theme) -> Option<Text<'static>> {
        if items.is_empty() {
            return None;
        }
        let mut lines = Vec::new();
        for (index, item) in items.iter().enumerate() {
            lines.extend(self.render_item(item, index, theme));
        }
        Some(Text::from(lines))
    }

    /// Order-preserving filter. A blank query returns everything.
    fn filter<'a>(&self, items: &'a [Self::Item], query: &str) -> Vec<&'a Self::Item> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return items.iter().collect();
        }
        items.iter().filter(|item| self.matches(item, &query)).collect()
    }
}

fn contains(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

// ─────────────────────────────────────────────────────────────────────────────
// Books: spine-shelf list, matched on title or author
// ─────────────────────────────────────────────────────────────────────────────

pub struct BookStrategy;

impl ShelfStrategy for BookStrategy {
    type Item = Book;

    fn kind(&self) -> ContentKind {
        ContentKind::Book
    }

    fn matches(&self, item: &Book, query: &str) -> bool {
        contains(&item.title, query) || contains(&item.author, query)
    }

    fn render_item(&self, item: &Book, index: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut title_spans = vec![
            Span::styled("▐ ", Style::default().fg(theme.spine_color(index))),
            Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(theme.shelf.title_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {}", item.author),
                Style::default().fg(theme.shelf.meta_fg.to_color()),
            ),
        ];
        if item.recommended {
            title_spans.push(Span::styled(
                " ★",
                Style::default().fg(theme.shelf.recommended_fg.to_color()),
            ));
        }

        let mut lines = vec![Line::from(title_spans)];
        if let Some(notes) = &item.notes {
            lines.push(Line::from(Span::styled(
                format!("  {}", notes),
                Style::default()
                    .fg(theme.shelf.note_fg.to_color())
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Papers: numbered list with links, matched on title
// ─────────────────────────────────────────────────────────────────────────────

pub struct PaperStrategy;

impl ShelfStrategy for PaperStrategy {
    type Item = Paper;

    fn kind(&self) -> ContentKind {
        ContentKind::Paper
    }

    fn matches(&self, item: &Paper, query: &str) -> bool {
        contains(&item.title, query)
    }

    fn render_item(&self, item: &Paper, index: usize, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", index + 1),
                    Style::default().fg(theme.shelf.meta_fg.to_color()),
                ),
                Span::styled(
                    item.title.clone(),
                    Style::default().fg(theme.shelf.title_fg.to_color()),
                ),
            ]),
            Line::from(Span::styled(
                format!("    {}", item.url),
                Style::default().fg(theme.shelf.link_fg.to_color()),
            )),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Media: grouped by kind then watch status, matched on title
// ─────────────────────────────────────────────────────────────────────────────

pub struct MediaStrategy;

impl ShelfStrategy for MediaStrategy {
    type Item = MediaEntry;

    fn kind(&self) -> ContentKind {
        ContentKind::Anime
    }

    fn matches(&self, item: &MediaEntry, query: &str) -> bool {
        contains(&item.title, query)
    }

    fn render_item(&self, item: &MediaEntry, _index: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut title_spans = vec![
            Span::styled("  • ", Style::default().fg(theme.shelf.meta_fg.to_color())),
            Span::styled(
                item.title.clone(),
                Style::default().fg(theme.shelf.title_fg.to_color()),
            ),
        ];
        if item.recommended {
            title_spans.push(Span::styled(
                " ★",
                Style::default().fg(theme.shelf.recommended_fg.to_color()),
            ));
        }

        let mut lines = vec![Line::from(title_spans)];
        if let Some(notes) = &item.notes {
            lines.push(Line::from(Span::styled(
                format!("    └ {}", notes),
                Style::default().fg(theme.shelf.note_fg.to_color()),
            )));
        }
        lines
    }

    /// Sections per media kind, subdivided by watch status. Empty sections
    /// and groups are omitted entirely.
    fn render_list(&self, items: &[&MediaEntry], theme: &Theme) -> Option<Text<'static>> {
        if items.is_empty() {
            return None;
        }

        let section_style = Style::default()
            .fg(theme.shelf.section_fg.to_color())
            .add_modifier(Modifier::BOLD);
        let group_style = Style::default().fg(theme.shelf.meta_fg.to_color());

        let mut lines: Vec<Line<'static>> = Vec::new();
        for kind in MediaKind::ALL {
            let in_section: Vec<&MediaEntry> =
                items.iter().copied().filter(|e| e.kind == *kind).collect();
            if in_section.is_empty() {
                continue;
            }

            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                kind.section_heading().to_string(),
                section_style,
            )));

            for status in WatchStatus::ALL {
                let in_group: Vec<&MediaEntry> = in_section
                    .iter()
                    .copied()
                    .filter(|e| e.status == *status)
                    .collect();
                if in_group.is_empty() {
                    continue;
                }

                lines.push(Line::from(Span::styled(
                    format!(" {}", status.group_label()),
                    group_style,
                )));
                for entry in in_group {
                    lines.extend(self.render_item(entry, 0, theme));
                }
            }
        }

        Some(Text::from(lines))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Blog: date-prefixed rows, matched on title or excerpt
// ─────────────────────────────────────────────────────────────────────────────

pub struct BlogStrategy;

impl ShelfStrategy for BlogStrategy {
    type Item = BlogPost;

    fn kind(&self) -> ContentKind {
        ContentKind::Blog
    }

    fn matches(&self, item: &BlogPost, query: &str) -> bool {
        contains(&item.title, query)
            || item
                .excerpt
                .as_deref()
                .is_some_and(|excerpt| contains(excerpt, query))
    }

    fn render_item(&self, item: &BlogPost, _index: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}  ", item.date),
                Style::default().fg(theme.shelf.meta_fg.to_color()),
            ),
            Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(theme.shelf.title_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        if let Some(excerpt) = &item.excerpt {
            lines.push(Line::from(Span::styled(
                format!("            {}", excerpt),
                Style::default().fg(theme.shelf.note_fg.to_color()),
            )));
        }
        lines
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hobbies: glyph rows, matched on name or description
// ─────────────────────────────────────────────────────────────────────────────

pub struct HobbyStrategy;

impl ShelfStrategy for HobbyStrategy {
    type Item = Hobby;

    fn kind(&self) -> ContentKind {
        ContentKind::Hobby
    }

    fn matches(&self, item: &Hobby, query: &str) -> bool {
        contains(&item.name, query) || contains(&item.description, query)
    }

    fn render_item(&self, item: &Hobby, _index: usize, theme: &Theme) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled(
                format!("{} ", item.icon.glyph()),
                Style::default().fg(theme.shelf.tag_fg.to_color()),
            ),
            Span::styled(
                item.name.clone(),
                Style::default()
                    .fg(theme.shelf.title_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {}", item.description),
                Style::default().fg(theme.shelf.note_fg.to_color()),
            ),
        ])]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects: title + tech tags + link, matched on title, description, or tag
// ─────────────────────────────────────────────────────────────────────────────

pub struct ProjectStrategy;

impl ShelfStrategy for ProjectStrategy {
    type Item = Project;

    fn kind(&self) -> ContentKind {
        ContentKind::Project
    }

    fn matches(&self, item: &Project, query: &str) -> bool {
        contains(&item.title, query)
            || contains(&item.description, query)
            || item.tech.iter().any(|tag| contains(tag, query))
    }

    fn render_item(&self, item: &Project, _index: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut title_spans = vec![Span::styled(
            item.title.clone(),
            Style::default()
                .fg(theme.shelf.title_fg.to_color())
                .add_modifier(Modifier::BOLD),
        )];
        for tag in &item.tech {
            title_spans.push(Span::styled(
                format!(" [{}]", tag),
                Style::default().fg(theme.shelf.tag_fg.to_color()),
            ));
        }

        vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                format!("  {}", item.description),
                Style::default().fg(theme.shelf.note_fg.to_color()),
            )),
            Line::from(Span::styled(
                format!("  {}", item.link),
                Style::default().fg(theme.shelf.link_fg.to_color()),
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn book(title: &str, author: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            cover: None,
            notes: None,
            recommended: false,
        }
    }

    fn bookshelf() -> Vec<Book> {
        vec![
            book("The Pragmatic Programmer", "Andy Hunt"),
            book("Clean Code", "Robert C. Martin"),
            book("Refactoring", "Martin Fowler"),
        ]
    }

    fn media(title: &str, kind: MediaKind, status: WatchStatus, notes: Option<&str>) -> MediaEntry {
        MediaEntry {
            title: title.to_string(),
            kind,
            status,
            notes: notes.map(str::to_string),
            image: None,
            recommended: false,
        }
    }

    fn rendered_strings(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn test_blank_query_returns_everything_in_order(#[case] query: &str) {
        let books = bookshelf();
        let filtered = BookStrategy.filter(&books, query);
        let titles: Vec<_> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["The Pragmatic Programmer", "Clean Code", "Refactoring"]
        );
    }

    #[test]
    fn test_author_match_preserves_order() {
        let books = bookshelf();
        let filtered = BookStrategy.filter(&books, "martin");
        let titles: Vec<_> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Clean Code", "Refactoring"]);
    }

    #[test]
    fn test_title_match() {
        let books = bookshelf();
        let filtered = BookStrategy.filter(&books, "pragmatic");
        let titles: Vec<_> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Pragmatic Programmer"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let books = bookshelf();
        let upper = BookStrategy.filter(&books, "MARTIN");
        let lower = BookStrategy.filter(&books, "martin");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_filter_output_is_subset_of_input() {
        let books = bookshelf();
        for query in ["a", "e", "zzz", "code", "THE"] {
            let filtered = BookStrategy.filter(&books, query);
            assert!(filtered.len() <= books.len());
            for item in filtered {
                assert!(books.iter().any(|b| std::ptr::eq(b, item)));
            }
        }
    }

    #[test]
    fn test_no_match_yields_empty() {
        let books = bookshelf();
        assert!(BookStrategy.filter(&books, "nonexistent").is_empty());
    }

    #[rstest]
    #[case("frieren", 1)]
    #[case("FRIEREN", 1)]
    #[case("e", 2)]
    #[case("nothing here", 0)]
    fn test_media_filter_matches_title_only(#[case] query: &str, #[case] expected: usize) {
        let entries = vec![
            media("Frieren", MediaKind::Anime, WatchStatus::Completed, None),
            media("Perfect Blue", MediaKind::Movie, WatchStatus::Planning, None),
        ];
        assert_eq!(MediaStrategy.filter(&entries, query).len(), expected);
    }

    #[test]
    fn test_blog_matches_title_or_excerpt() {
        let posts = vec![
            BlogPost {
                date: "2024-01-01".into(),
                title: "On shelves".into(),
                slug: "on-shelves".into(),
                excerpt: Some("curation beats feeds".into()),
            },
            BlogPost {
                date: "2024-02-01".into(),
                title: "Unrelated".into(),
                slug: "unrelated".into(),
                excerpt: None,
            },
        ];
        assert_eq!(BlogStrategy.filter(&posts, "shelves").len(), 1);
        assert_eq!(BlogStrategy.filter(&posts, "curation").len(), 1);
        assert_eq!(BlogStrategy.filter(&posts, "feeds beat").len(), 0);
    }

    #[test]
    fn test_project_matches_tech_tags() {
        let projects = vec![Project {
            title: "alcove".into(),
            description: "terminal portfolio".into(),
            tech: vec!["rust".into(), "ratatui".into()],
            link: "https://example.com".into(),
        }];
        assert_eq!(ProjectStrategy.filter(&projects, "ratatui").len(), 1);
        assert_eq!(ProjectStrategy.filter(&projects, "portfolio").len(), 1);
        assert_eq!(ProjectStrategy.filter(&projects, "python").len(), 0);
    }

    #[test]
    fn test_render_list_empty_is_none_for_every_strategy() {
        let theme = Theme::default();
        assert!(BookStrategy.render_list(&[], &theme).is_none());
        assert!(PaperStrategy.render_list(&[], &theme).is_none());
        assert!(MediaStrategy.render_list(&[], &theme).is_none());
        assert!(BlogStrategy.render_list(&[], &theme).is_none());
        assert!(HobbyStrategy.render_list(&[], &theme).is_none());
        assert!(ProjectStrategy.render_list(&[], &theme).is_none());
    }

    #[test]
    fn test_render_item_is_deterministic() {
        let theme = Theme::default();
        let item = book("Clean Code", "Robert C. Martin");
        let a = BookStrategy.render_item(&item, 3, &theme);
        let b = BookStrategy.render_item(&item, 3, &theme);
        assert_eq!(a, b);
    }

    #[test]
    fn test_media_groups_by_kind_then_status() {
        let theme = Theme::default();
        let entries = vec![
            media(
                "Frieren",
                MediaKind::Anime,
                WatchStatus::Completed,
                Some("Quiet and devastating."),
            ),
            media("Mushishi", MediaKind::Anime, WatchStatus::Planning, None),
            media("EEAAO", MediaKind::Movie, WatchStatus::Completed, None),
            media("Perfect Blue", MediaKind::Movie, WatchStatus::Planning, None),
        ];
        let refs: Vec<&MediaEntry> = entries.iter().collect();
        let text = MediaStrategy.render_list(&refs, &theme).unwrap();
        let lines = rendered_strings(&text);

        let pos = |needle: &str| {
            lines
                .iter()
                .position(|l| l.trim() == needle)
                .unwrap_or_else(|| panic!("missing line: {needle:?}"))
        };

        // Section order: Anime before Movies, each with Watched then Plan to Watch.
        let anime = pos("Anime");
        let movies = pos("Movies");
        assert!(anime < movies);

        let watched: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.trim() == "Watched")
            .map(|(i, _)| i)
            .collect();
        let planned: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.trim() == "Plan to Watch")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(watched.len(), 2);
        assert_eq!(planned.len(), 2);
        assert!(anime < watched[0] && watched[0] < planned[0] && planned[0] < movies);
        assert!(movies < watched[1] && watched[1] < planned[1]);

        // No Watching entries, so no Watching group.
        assert!(!lines.iter().any(|l| l.trim() == "Watching"));

        // Note text rendered verbatim.
        assert!(lines.iter().any(|l| l.contains("Quiet and devastating.")));
    }

    #[test]
    fn test_media_note_follows_its_entry() {
        let theme = Theme::default();
        let entries = vec![media(
            "Scavengers Reign",
            MediaKind::WebSeries,
            WatchStatus::Completed,
            Some("Alien ecology done right."),
        )];
        let refs: Vec<&MediaEntry> = entries.iter().collect();
        let lines = rendered_strings(&MediaStrategy.render_list(&refs, &theme).unwrap());
        let title = lines
            .iter()
            .position(|l| l.contains("Scavengers Reign"))
            .unwrap();
        assert!(lines[title + 1].contains("Alien ecology done right."));
    }

    #[test]
    fn test_paper_render_numbers_follow_filtered_order() {
        let theme = Theme::default();
        let papers = vec![
            Paper {
                title: "Out of the Tar Pit".into(),
                url: "https://example.com/tarpit.pdf".into(),
            },
            Paper {
                title: "End-to-End Arguments".into(),
                url: "https://example.com/e2e.pdf".into(),
            },
        ];
        let filtered = PaperStrategy.filter(&papers, "end-to-end");
        let lines = rendered_strings(&PaperStrategy.render_list(&filtered, &theme).unwrap());
        assert!(lines[0].starts_with(" 1. "));
        assert!(lines[0].contains("End-to-End Arguments"));
    }
}
