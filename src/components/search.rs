//! Query input state for a shelf's search box.
//!
//! Holds the single piece of container state the shelf owns: the current
//! query string. Filtering itself happens in the shelf from this query, so
//! there is nothing to debounce or cancel here.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Theme;

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    active: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Leave search entry but keep the query applied.
    pub fn accept(&mut self) {
        self.active = false;
    }

    /// Leave search entry and drop the query.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            KeyCode::Esc => {
                self.deactivate();
                SearchAction::Close
            }
            KeyCode::Enter => {
                self.accept();
                SearchAction::Accept
            }
            KeyCode::Backspace => {
                self.pop_char();
                SearchAction::Changed
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                SearchAction::Changed
            }
            _ => SearchAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    None,
    Close,
    Accept,
    Changed,
}

pub struct SearchBar<'a> {
    search_state: &'a SearchState,
    theme: &'a Theme,
    placeholder: &'a str,
    match_count: usize,
    total: usize,
}

impl<'a> SearchBar<'a> {
    pub fn new(
        search_state: &'a SearchState,
        theme: &'a Theme,
        placeholder: &'a str,
        match_count: usize,
        total: usize,
    ) -> Self {
        Self {
            search_state,
            theme,
            placeholder,
            match_count,
            total,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.search_state.is_active() {
            self.theme.colors.primary.to_color()
        } else {
            self.theme.colors.muted.to_color()
        };

        let match_info = if self.search_state.query().is_empty() {
            String::new()
        } else {
            format!(" ({}/{})", self.match_count, self.total)
        };

        let title = format!(" Search{} ", match_info);

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let body = if self.search_state.query().is_empty() && !self.search_state.is_active() {
            Line::from(Span::styled(
                self.placeholder.to_string(),
                Style::default()
                    .fg(self.theme.colors.muted.to_color())
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let cursor = if self.search_state.is_active() { "▌" } else { "" };
            Line::from(vec![
                Span::styled(
                    "/",
                    Style::default()
                        .fg(self.theme.colors.accent.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}{}", self.search_state.query(), cursor),
                    Style::default().fg(self.theme.colors.foreground.to_color()),
                ),
            ])
        };

        frame.render_widget(Paragraph::new(body).block(block), area);
    }

    pub fn height() -> u16 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_push_pop_char() {
        let mut state = SearchState::new();

        state.push_char('a');
        state.push_char('b');
        state.push_char('c');
        assert_eq!(state.query(), "abc");

        state.pop_char();
        assert_eq!(state.query(), "ab");

        state.pop_char();
        state.pop_char();
        state.pop_char();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_escape_clears_query() {
        let mut state = SearchState::new();
        state.activate();
        state.push_char('x');

        let action = state.handle_key(key(KeyCode::Esc));
        assert_eq!(action, SearchAction::Close);
        assert!(!state.is_active());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_enter_keeps_query_applied() {
        let mut state = SearchState::new();
        state.activate();
        state.push_char('m');

        let action = state.handle_key(key(KeyCode::Enter));
        assert_eq!(action, SearchAction::Accept);
        assert!(!state.is_active());
        assert_eq!(state.query(), "m");
    }

    #[test]
    fn test_typing_reports_changed() {
        let mut state = SearchState::new();
        state.activate();
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), SearchAction::Changed);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), SearchAction::Changed);
        assert_eq!(state.handle_key(key(KeyCode::Tab)), SearchAction::None);
    }
}
