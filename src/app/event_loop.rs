// Event loop - main run() method and config watcher polling

use std::time::Duration;

use crossterm::event;

use super::App;
use crate::action::Action;
use crate::config::ConfigEvent;
use crate::error::Result;

impl App {
    /// Drain pending config watcher events. Returns true if any arrived.
    pub(super) fn poll_config_events(&mut self) -> Result<bool> {
        let events = match &mut self.config_watcher {
            Some(watcher) => watcher.poll_events(),
            None => Vec::new(),
        };

        if events.is_empty() {
            return Ok(false);
        }

        for event in events {
            match event {
                ConfigEvent::Changed(path) => {
                    self.dispatch(Action::ConfigChanged(path))?;
                }
                ConfigEvent::Error(message) => {
                    tracing::warn!("config watcher error: {}", message);
                }
            }
        }

        Ok(true)
    }

    pub fn run(&mut self) -> Result<()> {
        let tick_interval =
            Duration::from_millis(self.config_manager.app_config().general.tick_interval_ms);

        while !self.should_quit {
            if self.poll_config_events()? {
                self.mark_dirty();
            }

            if event::poll(tick_interval)? {
                let input = event::read()?;
                if let Some(action) = self.route_event(&input) {
                    self.dispatch(action)?;
                    self.mark_dirty();
                }
            } else {
                self.dispatch(Action::Tick)?;
            }

            if self.dirty {
                self.draw()?;
                self.dirty = false;
            }
        }

        Ok(())
    }
}
