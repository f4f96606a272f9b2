use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::action::Action;
use crate::components::shelf::Shelf;
use crate::components::Component;
use crate::config::Theme;

/// One row in the sidebar: the about page, then one row per shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    About,
    Shelf(usize),
}

pub struct Sidebar {
    selected: usize,
    entry_count: usize,
    inner_area: Rect,
}

impl Sidebar {
    pub fn new(shelf_count: usize) -> Self {
        Self {
            selected: 1.min(shelf_count), // first shelf, About above it
            entry_count: shelf_count + 1,
            inner_area: Rect::default(),
        }
    }

    pub fn set_inner_area(&mut self, area: Rect) {
        self.inner_area = area;
    }

    pub fn selected_entry(&self) -> SidebarEntry {
        if self.selected == 0 {
            SidebarEntry::About
        } else {
            SidebarEntry::Shelf(self.selected - 1)
        }
    }

    pub fn select_entry(&mut self, entry: SidebarEntry) {
        self.selected = match entry {
            SidebarEntry::About => 0,
            SidebarEntry::Shelf(idx) => (idx + 1).min(self.entry_count.saturating_sub(1)),
        };
    }

    fn select_next(&mut self) {
        if self.entry_count > 0 {
            self.selected = (self.selected + 1) % self.entry_count;
        }
    }

    fn select_prev(&mut self) {
        if self.entry_count > 0 {
            if self.selected == 0 {
                self.selected = self.entry_count - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SidebarSelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SidebarSelectPrev),
            KeyCode::Enter | KeyCode::Char('l') => Some(Action::SidebarActivate),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if !self.inner_area.contains((mouse.column, mouse.row).into()) {
            return None;
        }

        let relative_y = mouse.row.saturating_sub(self.inner_area.y) as usize;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if relative_y < self.entry_count {
                    self.selected = relative_y;
                    return Some(Action::SidebarActivate);
                }
                None
            }
            MouseEventKind::ScrollUp => Some(Action::SidebarSelectPrev),
            MouseEventKind::ScrollDown => Some(Action::SidebarSelectNext),
            _ => None,
        }
    }

    /// Render with live shelf data so rows can show item counts and mark
    /// the page currently open.
    pub fn render_with_shelves(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        shelves: &[Shelf],
        active: SidebarEntry,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(" alcove ")
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        let marker = |entry: SidebarEntry| {
            if entry == active {
                Span::styled(
                    format!("{} ", theme.focus.focus_indicator),
                    Style::default().fg(theme.sidebar.active_marker_fg.to_color()),
                )
            } else {
                Span::raw("  ")
            }
        };

        let mut items: Vec<ListItem> = Vec::with_capacity(self.entry_count);
        items.push(ListItem::new(Line::from(vec![
            marker(SidebarEntry::About),
            Span::styled(
                "about",
                Style::default().fg(theme.sidebar.item_fg.to_color()),
            ),
        ])));

        for (idx, shelf) in shelves.iter().enumerate() {
            items.push(ListItem::new(Line::from(vec![
                marker(SidebarEntry::Shelf(idx)),
                Span::styled(
                    shelf.config().title.to_lowercase(),
                    Style::default().fg(theme.sidebar.item_fg.to_color()),
                ),
                Span::styled(
                    format!(" {}", shelf.collection().len()),
                    Style::default().fg(theme.sidebar.count_fg.to_color()),
                ),
            ])));
        }

        let mut state = ListState::default();
        if focused {
            state.select(Some(self.selected));
        }

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(theme.sidebar.selected_bg.to_color())
                .fg(theme.sidebar.selected_fg.to_color())
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for Sidebar {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::SidebarSelectNext => self.select_next(),
            Action::SidebarSelectPrev => self.select_prev(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        // Sidebar needs shelf data for counts; the app calls
        // render_with_shelves instead. This renders the frame only.
        let block = Block::default()
            .title(" alcove ")
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        frame.render_widget(block, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_shelf() {
        let sidebar = Sidebar::new(6);
        assert_eq!(sidebar.selected_entry(), SidebarEntry::Shelf(0));
    }

    #[test]
    fn test_selection_wraps_through_about() {
        let mut sidebar = Sidebar::new(2);
        sidebar.select_entry(SidebarEntry::About);

        sidebar.update(&Action::SidebarSelectPrev);
        assert_eq!(sidebar.selected_entry(), SidebarEntry::Shelf(1));

        sidebar.update(&Action::SidebarSelectNext);
        assert_eq!(sidebar.selected_entry(), SidebarEntry::About);

        sidebar.update(&Action::SidebarSelectNext);
        assert_eq!(sidebar.selected_entry(), SidebarEntry::Shelf(0));
    }

    #[test]
    fn test_select_entry_clamps() {
        let mut sidebar = Sidebar::new(2);
        sidebar.select_entry(SidebarEntry::Shelf(99));
        assert_eq!(sidebar.selected_entry(), SidebarEntry::Shelf(1));
    }
}
