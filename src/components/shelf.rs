//! The shelf container: one searchable page section for one content kind.
//!
//! Owns a `ShelfConfig`, the kind's collection, and the query string. The
//! filtered view is recomputed from (collection, query) on every render;
//! there is no cached filter state to fall out of sync.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::search::{SearchBar, SearchState};
use crate::components::Component;
use crate::config::Theme;
use crate::shelf::{Collection, ShelfConfig};

pub struct Shelf {
    config: ShelfConfig,
    collection: Collection,
    search: SearchState,
    selected: usize,
    manual_scroll: u16,
}

impl Shelf {
    pub fn new(config: ShelfConfig, collection: Collection) -> Self {
        Self {
            config,
            collection,
            search: SearchState::new(),
            selected: 0,
            manual_scroll: 0,
        }
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn filtered_len(&self) -> usize {
        self.collection.filtered_len(self.query())
    }

    /// Link of the currently selected item, when this kind carries links.
    pub fn selected_link(&self) -> Option<String> {
        self.collection.link_at(self.query(), self.selected)
    }

    fn select_next(&mut self) {
        let len = self.filtered_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
        self.manual_scroll = self.manual_scroll.saturating_add(1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.manual_scroll = self.manual_scroll.saturating_sub(1);
    }

    fn reset_position(&mut self) {
        self.selected = 0;
        self.manual_scroll = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollToBottom),
            KeyCode::PageDown => Some(Action::ScrollDown(10)),
            KeyCode::PageUp => Some(Action::ScrollUp(10)),
            KeyCode::Char('/') => Some(Action::SearchStart),
            KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopyLink),
            _ => None,
        }
    }

    fn empty_message(&self) -> String {
        let query = self.query().trim();
        if query.is_empty() {
            "nothing on this shelf yet".to_string()
        } else {
            format!("no items found matching \"{}\"", query)
        }
    }
}

impl Component for Shelf {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::SelectNext => self.select_next(),
            Action::SelectPrev => self.select_prev(),
            Action::ScrollToTop => self.reset_position(),
            Action::ScrollToBottom => {
                self.selected = self.filtered_len().saturating_sub(1);
                self.manual_scroll = u16::MAX / 2;
            }
            Action::ScrollDown(n) => {
                self.manual_scroll = self.manual_scroll.saturating_add(*n);
            }
            Action::ScrollUp(n) => {
                self.manual_scroll = self.manual_scroll.saturating_sub(*n);
            }
            Action::SearchChanged | Action::SearchClose => self.clamp_selection(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .title(format!(" {} ", self.config.title))
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let total = self.collection.len();
        let filtered = self.filtered_len();
        let has_link = self.selected_link().is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                       // command prompt line
                Constraint::Length(1),                       // description + count
                Constraint::Length(SearchBar::height()),     // search input
                Constraint::Min(1),                          // list / empty state
                Constraint::Length(if has_link { 1 } else { 0 }),
            ])
            .split(inner);

        let prompt = Line::from(Span::styled(
            self.config.command.clone(),
            Style::default()
                .fg(theme.colors.secondary.to_color())
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(prompt), chunks[0]);

        let count_text = if self.query().trim().is_empty() {
            format!("{} items", total)
        } else {
            format!("{}/{} items", filtered, total)
        };
        let meta = Line::from(vec![
            Span::styled(
                self.config.description.clone(),
                Style::default().fg(theme.colors.muted.to_color()),
            ),
            Span::styled(
                format!(" · {}", count_text),
                Style::default().fg(theme.colors.accent.to_color()),
            ),
        ]);
        frame.render_widget(Paragraph::new(meta), chunks[1]);

        SearchBar::new(
            &self.search,
            theme,
            &self.config.search_placeholder,
            filtered,
            total,
        )
        .render(frame, chunks[2]);

        match self.collection.render(self.query(), theme) {
            Some(text) => {
                let scroll = self
                    .collection
                    .line_offset(self.query(), self.selected, theme)
                    .map(|offset| {
                        let half = (chunks[3].height / 2) as usize;
                        offset.saturating_sub(half).min(u16::MAX as usize) as u16
                    })
                    .unwrap_or(self.manual_scroll);
                let max_scroll = text
                    .lines
                    .len()
                    .saturating_sub(chunks[3].height as usize)
                    .min(u16::MAX as usize) as u16;
                let scroll = scroll.min(max_scroll);
                frame.render_widget(Paragraph::new(text).scroll((scroll, 0)), chunks[3]);
            }
            None => {
                let message = Line::from(Span::styled(
                    self.empty_message(),
                    Style::default()
                        .fg(theme.shelf.empty_fg.to_color())
                        .add_modifier(Modifier::ITALIC),
                ));
                frame.render_widget(Paragraph::new(message), chunks[3]);
            }
        }

        if let Some(link) = self.selected_link() {
            let footer = Line::from(vec![
                Span::styled(
                    format!("└ {} ", link),
                    Style::default().fg(theme.shelf.link_fg.to_color()),
                ),
                Span::styled(
                    format!("[{}/{} · c to copy]", self.selected + 1, filtered),
                    Style::default().fg(theme.colors.muted.to_color()),
                ),
            ]);
            frame.render_widget(Paragraph::new(footer), chunks[4]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Book, Paper};
    use crate::shelf::{builtin_shelves, ContentKind};
    use pretty_assertions::assert_eq;

    fn shelf_config(kind: ContentKind) -> ShelfConfig {
        builtin_shelves()
            .into_iter()
            .find(|s| s.kind == kind)
            .unwrap()
    }

    fn book_shelf() -> Shelf {
        let books = vec![
            Book {
                title: "The Pragmatic Programmer".into(),
                author: "Andy Hunt".into(),
                cover: None,
                notes: None,
                recommended: false,
            },
            Book {
                title: "Clean Code".into(),
                author: "Robert C. Martin".into(),
                cover: None,
                notes: None,
                recommended: false,
            },
            Book {
                title: "Refactoring".into(),
                author: "Martin Fowler".into(),
                cover: None,
                notes: None,
                recommended: false,
            },
        ];
        Shelf::new(shelf_config(ContentKind::Book), Collection::Books(books))
    }

    #[test]
    fn test_filtered_len_follows_query() {
        let mut shelf = book_shelf();
        assert_eq!(shelf.filtered_len(), 3);

        shelf.search_mut().set_query("martin".into());
        assert_eq!(shelf.filtered_len(), 2);

        shelf.search_mut().set_query("pragmatic".into());
        assert_eq!(shelf.filtered_len(), 1);

        shelf.search_mut().set_query("nope".into());
        assert_eq!(shelf.filtered_len(), 0);
    }

    #[test]
    fn test_empty_message_quotes_query() {
        let mut shelf = book_shelf();
        shelf.search_mut().set_query("zzz".into());
        assert_eq!(shelf.empty_message(), "no items found matching \"zzz\"");

        shelf.search_mut().clear_query();
        assert_eq!(shelf.empty_message(), "nothing on this shelf yet");
    }

    #[test]
    fn test_selection_clamped_to_filtered_set() {
        let mut shelf = book_shelf();
        shelf.update(&Action::SelectNext);
        shelf.update(&Action::SelectNext);
        assert_eq!(shelf.selected, 2);

        // Narrowing the filter pulls the selection back into range.
        shelf.search_mut().set_query("martin".into());
        shelf.update(&Action::SearchChanged);
        assert_eq!(shelf.selected, 1);

        shelf.search_mut().set_query("nope".into());
        shelf.update(&Action::SearchChanged);
        assert_eq!(shelf.selected, 0);
    }

    #[test]
    fn test_selection_stops_at_last_item() {
        let mut shelf = book_shelf();
        for _ in 0..10 {
            shelf.update(&Action::SelectNext);
        }
        assert_eq!(shelf.selected, 2);
    }

    #[test]
    fn test_selected_link_for_papers() {
        let papers = vec![Paper {
            title: "Out of the Tar Pit".into(),
            url: "https://example.com/tarpit.pdf".into(),
        }];
        let shelf = Shelf::new(
            shelf_config(ContentKind::Paper),
            Collection::Papers(papers),
        );
        assert_eq!(
            shelf.selected_link().as_deref(),
            Some("https://example.com/tarpit.pdf")
        );
    }

    #[test]
    fn test_books_have_no_link() {
        let shelf = book_shelf();
        assert!(shelf.selected_link().is_none());
    }

    #[test]
    fn test_slash_enters_search() {
        let mut shelf = book_shelf();
        let key = KeyEvent::new(KeyCode::Char('/'), crossterm::event::KeyModifiers::NONE);
        let action = shelf.handle_event(&Event::Key(key));
        assert_eq!(action, Some(Action::SearchStart));
    }
}
