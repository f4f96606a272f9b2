// Rendering - draw() method and UI layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::{App, Page};
use crate::components::sidebar::SidebarEntry;
use crate::components::Component;
use crate::error::Result;
use crate::input::focus::FocusArea;

const SIDEBAR_WIDTH: u16 = 24;

impl App {
    pub(super) fn draw(&mut self) -> Result<()> {
        let theme = self.config_manager.theme().clone();
        let mode = self.input_mode;
        let page = self.page;
        let focus_sidebar = self.focus.is_focused(FocusArea::Sidebar);
        let focus_page = self.focus.is_focused(FocusArea::Page);
        let active_entry = match page {
            Page::About => SidebarEntry::About,
            Page::Shelf(idx) => SidebarEntry::Shelf(idx),
        };

        let Self {
            terminal,
            sidebar,
            shelves,
            about,
            command_palette,
            status_bar,
            ..
        } = self;

        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .split(rows[0]);

            // Inside the sidebar's border, for mouse hit-testing.
            sidebar.set_inner_area(Rect {
                x: columns[0].x.saturating_add(1),
                y: columns[0].y.saturating_add(1),
                width: columns[0].width.saturating_sub(2),
                height: columns[0].height.saturating_sub(2),
            });
            sidebar.render_with_shelves(
                frame,
                columns[0],
                focus_sidebar,
                shelves,
                active_entry,
                &theme,
            );

            match page {
                Page::About => about.render(frame, columns[1], focus_page, &theme),
                Page::Shelf(idx) => {
                    if let Some(shelf) = shelves.get(idx) {
                        shelf.render(frame, columns[1], focus_page, &theme);
                    }
                }
            }

            status_bar.render(frame, rows[1], mode, &theme);

            // Palette overlays everything when open.
            command_palette.render(frame, area, &theme);
        })?;

        Ok(())
    }
}
