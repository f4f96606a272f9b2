use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;
use crate::content::Profile;

pub struct About {
    profile: Profile,
    scroll: u16,
}

impl About {
    pub fn new(profile: Profile) -> Self {
        Self { profile, scroll: 0 }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp(1)),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollToTop),
            KeyCode::PageDown => Some(Action::ScrollDown(10)),
            KeyCode::PageUp => Some(Action::ScrollUp(10)),
            _ => None,
        }
    }

    fn body(&self, theme: &Theme) -> Text<'static> {
        let heading = Style::default()
            .fg(theme.colors.accent.to_color())
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme.colors.muted.to_color());
        let body = Style::default().fg(theme.colors.foreground.to_color());

        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                self.profile.name.clone(),
                Style::default()
                    .fg(theme.colors.primary.to_color())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.profile.tagline.clone(), muted)),
            Line::default(),
        ];

        for paragraph in &self.profile.bio {
            lines.push(Line::from(Span::styled(paragraph.clone(), body)));
            lines.push(Line::default());
        }

        if !self.profile.experience.is_empty() {
            lines.push(Line::from(Span::styled("Experience".to_string(), heading)));
            for entry in &self.profile.experience {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} · {}", entry.role, entry.org),
                        Style::default()
                            .fg(theme.colors.foreground.to_color())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", entry.period), muted),
                ]));
                if !entry.summary.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", entry.summary),
                        muted,
                    )));
                }
            }
            lines.push(Line::default());
        }

        if !self.profile.links.is_empty() {
            lines.push(Line::from(Span::styled("Links".to_string(), heading)));
            for link in &self.profile.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<10}", link.label), body),
                    Span::styled(
                        link.url.clone(),
                        Style::default().fg(theme.shelf.link_fg.to_color()),
                    ),
                ]));
            }
        }

        Text::from(lines)
    }
}

impl Component for About {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::ScrollDown(n) => self.scroll = self.scroll.saturating_add(*n),
            Action::ScrollUp(n) => self.scroll = self.scroll.saturating_sub(*n),
            Action::ScrollToTop => self.scroll = 0,
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .title(" About ")
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        let paragraph = Paragraph::new(self.body(theme))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ExperienceEntry, ProfileLink};

    fn profile() -> Profile {
        Profile {
            name: "Riley Okabe".into(),
            tagline: "systems programmer".into(),
            bio: vec!["First paragraph.".into()],
            experience: vec![ExperienceEntry {
                role: "Engineer".into(),
                org: "Ridgetop".into(),
                period: "2021 — present".into(),
                summary: "Storage plumbing.".into(),
            }],
            links: vec![ProfileLink {
                label: "github".into(),
                url: "https://github.com/ridgetop".into(),
            }],
        }
    }

    #[test]
    fn test_body_includes_all_sections() {
        let about = About::new(profile());
        let theme = Theme::default();
        let text = about.body(&theme);
        let flat: Vec<String> = text
            .lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        assert!(flat.iter().any(|l| l.contains("Riley Okabe")));
        assert!(flat.iter().any(|l| l.contains("First paragraph.")));
        assert!(flat.iter().any(|l| l == "Experience"));
        assert!(flat.iter().any(|l| l.contains("Engineer · Ridgetop")));
        assert!(flat.iter().any(|l| l == "Links"));
        assert!(flat.iter().any(|l| l.contains("github.com/ridgetop")));
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut about = About::new(profile());
        about.update(&Action::ScrollUp(5));
        assert_eq!(about.scroll, 0);

        about.update(&Action::ScrollDown(3));
        about.update(&Action::ScrollUp(1));
        assert_eq!(about.scroll, 2);
    }
}
