use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Theme;
use crate::input::mode::InputMode;

const TIPS: &[&str] = &[
    "press / to search the open shelf",
    "press : for the command palette",
    "tab moves focus between sidebar and page",
    "c copies the selected item's link",
    "edit theme.toml and watch the colors change live",
];

pub struct StatusBar {
    tip: &'static str,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            tip: TIPS[fastrand::usize(..TIPS.len())],
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, mode: InputMode, theme: &Theme) {
        let bar_style = Style::default()
            .bg(theme.status_bar.bg.to_color())
            .fg(theme.status_bar.fg.to_color());

        let hints = match mode {
            InputMode::Normal => "q quit · / search · : palette · tab focus",
            InputMode::Search => "esc clear · enter apply",
            InputMode::Palette => "esc close · enter run",
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", mode.label()),
                Style::default()
                    .fg(theme.status_bar.mode_fg.to_color())
                    .bg(theme.status_bar.bg.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {} ", hints), bar_style),
            Span::styled(
                format!("· {}", self.tip),
                Style::default()
                    .fg(theme.status_bar.tip_fg.to_color())
                    .bg(theme.status_bar.bg.to_color()),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).style(bar_style), area);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_comes_from_the_fixed_set() {
        let bar = StatusBar::new();
        assert!(TIPS.contains(&bar.tip));
    }
}
