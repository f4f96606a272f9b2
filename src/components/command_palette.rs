// Command palette with nucleo fuzzy matching

use crossterm::event::{Event, KeyCode, KeyModifiers};
use nucleo::{Config, Matcher, Utf32String};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::config::Theme;
use crate::shelf::ShelfConfig;

/// A command that can be executed from the palette
#[derive(Debug, Clone)]
pub struct Command {
    pub id: String,
    pub name: String,
    pub description: String,
    pub action: Action,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            action,
        }
    }
}

pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Build the registry for a shelf set: one navigation command per
    /// shelf, plus the fixed application commands.
    pub fn for_shelves(shelves: &[ShelfConfig]) -> Self {
        let mut commands = vec![
            Command::new("about", "About", "Open the about page", Action::ShowAbout),
            Command::new(
                "copy_link",
                "Copy Link",
                "Copy the selected item's link to the clipboard",
                Action::CopyLink,
            ),
            Command::new(
                "theme_reload",
                "Reload Theme",
                "Re-read theme.toml from the config directory",
                Action::ThemeReload,
            ),
            Command::new(
                "focus_next",
                "Focus Next",
                "Cycle focus between sidebar and page",
                Action::FocusNext,
            ),
            Command::new(
                "focus_sidebar",
                "Focus Sidebar",
                "Move focus to the navigation sidebar",
                Action::FocusArea(crate::input::focus::FocusArea::Sidebar),
            ),
            Command::new(
                "focus_page",
                "Focus Page",
                "Move focus to the open page",
                Action::FocusArea(crate::input::focus::FocusArea::Page),
            ),
            Command::new("quit", "Quit", "Exit alcove", Action::Quit),
        ];

        for shelf in shelves {
            commands.push(Command::new(
                format!("shelf:{}", shelf.kind),
                format!("Go to {}", shelf.title),
                shelf.description.clone(),
                Action::ShelfSelect(shelf.kind),
            ));
        }

        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Fuzzy matcher result with score and indices
struct MatchResult {
    command_idx: usize,
    score: u32,
    indices: Vec<u32>,
}

pub struct CommandPalette {
    visible: bool,
    query: String,
    registry: CommandRegistry,
    matcher: Matcher,
    filtered_results: Vec<MatchResult>,
    list_state: ListState,
}

impl CommandPalette {
    pub fn new(registry: CommandRegistry) -> Self {
        let config = Config::DEFAULT;
        Self {
            visible: false,
            query: String::new(),
            registry,
            matcher: Matcher::new(config),
            filtered_results: Vec::new(),
            list_state: ListState::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.query.clear();
        self.update_filtered_results();
        if !self.filtered_results.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.query.clear();
        self.filtered_results.clear();
        self.list_state.select(None);
    }

    fn update_filtered_results(&mut self) {
        self.filtered_results.clear();

        if self.query.is_empty() {
            // Show all commands when no query
            for (idx, _) in self.registry.commands().iter().enumerate() {
                self.filtered_results.push(MatchResult {
                    command_idx: idx,
                    score: 0,
                    indices: Vec::new(),
                });
            }
        } else {
            let pattern = nucleo::pattern::Pattern::parse(
                &self.query,
                nucleo::pattern::CaseMatching::Smart,
                nucleo::pattern::Normalization::Smart,
            );

            for (idx, cmd) in self.registry.commands().iter().enumerate() {
                // Match against both name and description
                let name_utf32: Utf32String = cmd.name.as_str().into();
                let desc_utf32: Utf32String = cmd.description.as_str().into();

                let mut indices = Vec::new();
                let name_score =
                    pattern.indices(name_utf32.slice(..), &mut self.matcher, &mut indices);

                let desc_score = if name_score.is_none() {
                    let mut desc_indices = Vec::new();
                    pattern.indices(desc_utf32.slice(..), &mut self.matcher, &mut desc_indices)
                } else {
                    None
                };

                if let Some(score) = name_score.or(desc_score) {
                    self.filtered_results.push(MatchResult {
                        command_idx: idx,
                        score,
                        indices,
                    });
                }
            }

            // Higher score first
            self.filtered_results.sort_by(|a, b| b.score.cmp(&a.score));
        }

        if !self.filtered_results.is_empty() {
            self.list_state.select(Some(0));
        } else {
            self.list_state.select(None);
        }
    }

    fn select_next(&mut self) {
        if self.filtered_results.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1) % self.filtered_results.len();
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.filtered_results.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.filtered_results.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    fn execute_selected(&mut self) -> Option<Action> {
        let selected_idx = self.list_state.selected()?;
        let result = self.filtered_results.get(selected_idx)?;
        let cmd = self.registry.commands().get(result.command_idx)?;
        let action = cmd.action.clone();
        self.hide();
        Some(action)
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        if !self.visible {
            return None;
        }

        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Esc => {
                    self.hide();
                    return Some(Action::PaletteHide);
                }
                KeyCode::Enter => {
                    return self.execute_selected();
                }
                KeyCode::Up | KeyCode::BackTab => {
                    self.select_prev();
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.select_next();
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.select_next();
                }
                KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.select_prev();
                }
                KeyCode::Char(c) => {
                    self.query.push(c);
                    self.update_filtered_results();
                }
                KeyCode::Backspace => {
                    self.query.pop();
                    self.update_filtered_results();
                }
                _ => {}
            }
        }

        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }

        let dialog_width = (area.width * 60 / 100).clamp(40, 90);
        let dialog_height = (area.height * 50 / 100).clamp(10, 24);

        let dialog_x = (area.width.saturating_sub(dialog_width)) / 2;
        let dialog_y = (area.height.saturating_sub(dialog_height)) / 2;

        let dialog_area = Rect::new(dialog_x, dialog_y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Command Palette ")
            .title_style(
                Style::default()
                    .fg(theme.command_palette.border.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.command_palette.border.to_color()));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Input
                Constraint::Length(1), // Separator/info
                Constraint::Min(1),    // Results
            ])
            .split(inner);

        let input_line = Line::from(vec![
            Span::styled(
                ": ",
                Style::default()
                    .fg(theme.colors.primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.query.clone(),
                Style::default().fg(theme.command_palette.input_fg.to_color()),
            ),
            Span::styled("▎", Style::default().fg(theme.colors.primary.to_color())),
        ]);
        frame.render_widget(Paragraph::new(input_line), chunks[0]);

        let count = self.filtered_results.len();
        let total = self.registry.commands().len();
        let info = if self.query.is_empty() {
            format!("{} commands", total)
        } else {
            format!("{}/{} matching", count, total)
        };
        let info_line = Paragraph::new(info)
            .style(Style::default().fg(theme.command_palette.description_fg.to_color()))
            .alignment(Alignment::Right);
        frame.render_widget(info_line, chunks[1]);

        let items: Vec<ListItem> = self
            .filtered_results
            .iter()
            .map(|result| {
                let cmd = &self.registry.commands()[result.command_idx];
                self.render_command_item(cmd, &result.indices, theme)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(theme.command_palette.selected_bg.to_color())
                    .fg(theme.command_palette.selected_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    fn render_command_item(&self, cmd: &Command, indices: &[u32], theme: &Theme) -> ListItem<'_> {
        let mut name_spans = Vec::new();

        if indices.is_empty() {
            name_spans.push(Span::styled(
                cmd.name.clone(),
                Style::default().fg(theme.command_palette.item_fg.to_color()),
            ));
        } else {
            let chars: Vec<char> = cmd.name.chars().collect();
            let indices_set: std::collections::HashSet<u32> = indices.iter().copied().collect();

            for (i, ch) in chars.iter().enumerate() {
                let style = if indices_set.contains(&(i as u32)) {
                    Style::default()
                        .fg(theme.command_palette.match_highlight.to_color())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.command_palette.item_fg.to_color())
                };
                name_spans.push(Span::styled(ch.to_string(), style));
            }
        }

        name_spans.push(Span::styled(
            format!("  {}", cmd.description),
            Style::default().fg(theme.command_palette.description_fg.to_color()),
        ));

        ListItem::new(Line::from(name_spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shelf::builtin_shelves;

    fn palette() -> CommandPalette {
        CommandPalette::new(CommandRegistry::for_shelves(&builtin_shelves()))
    }

    #[test]
    fn test_registry_has_one_command_per_shelf() {
        let registry = CommandRegistry::for_shelves(&builtin_shelves());
        let shelf_commands = registry
            .commands()
            .iter()
            .filter(|c| c.id.starts_with("shelf:"))
            .count();
        assert_eq!(shelf_commands, builtin_shelves().len());

        let quit = registry.commands().iter().find(|c| c.id == "quit");
        assert!(quit.is_some());
    }

    #[test]
    fn test_palette_visibility() {
        let mut palette = palette();
        assert!(!palette.is_visible());

        palette.show();
        assert!(palette.is_visible());

        palette.hide();
        assert!(!palette.is_visible());
    }

    #[test]
    fn test_fuzzy_filtering() {
        let mut palette = palette();
        palette.show();

        let initial_count = palette.filtered_results.len();
        assert!(initial_count > 0);

        palette.query = "quit".to_string();
        palette.update_filtered_results();

        assert!(palette.filtered_results.len() <= initial_count);
        assert!(!palette.filtered_results.is_empty());
    }

    #[test]
    fn test_selection_navigation() {
        let mut palette = palette();
        palette.show();

        assert_eq!(palette.list_state.selected(), Some(0));

        palette.select_next();
        assert_eq!(palette.list_state.selected(), Some(1));

        palette.select_prev();
        assert_eq!(palette.list_state.selected(), Some(0));

        palette.select_prev();
        assert_eq!(
            palette.list_state.selected(),
            Some(palette.filtered_results.len() - 1)
        );
    }

    #[test]
    fn test_execute_returns_the_command_action() {
        let mut palette = palette();
        palette.show();
        palette.query = "quit".to_string();
        palette.update_filtered_results();

        let action = palette.handle_event(&Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        )));
        assert_eq!(action, Some(Action::Quit));
        assert!(!palette.is_visible());
    }
}
