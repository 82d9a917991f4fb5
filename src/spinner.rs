/*
   Copyright (C) 2026 l5yth

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Spinner sub-model: a cyclic frame counter driven by its own tick.

use std::time::Duration;

use ratatui::prelude::{Color, Span, Style};

use crate::types::{Cmd, Event};

/// Braille dot animation frames, advanced one per tick.
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Delay between animation frames.
pub const INTERVAL: Duration = Duration::from_millis(100);

/// Spinner animation state.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Index of the current frame glyph.
    pub frame: usize,
    /// Style applied to the rendered glyph.
    pub style: Style,
}

impl Spinner {
    /// Advance the frame on the spinner's tick and re-arm it; ignore
    /// everything else.
    pub fn update(&mut self, event: &Event) -> Vec<Cmd> {
        match event {
            Event::Tick => {
                self.frame = (self.frame + 1) % FRAMES.len();
                vec![Cmd::Tick(INTERVAL)]
            }
            _ => Vec::new(),
        }
    }

    /// The current frame glyph, styled.
    pub fn frame_span(&self) -> Span<'static> {
        Span::styled(FRAMES[self.frame], self.style)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frame: 0,
            style: Style::default().fg(Color::Indexed(205)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_frame_and_rearms_tick() {
        let mut spinner = Spinner::default();
        for expected in 1..=FRAMES.len() {
            let cmds = spinner.update(&Event::Tick);
            assert_eq!(cmds, vec![Cmd::Tick(INTERVAL)]);
            assert_eq!(spinner.frame, expected % FRAMES.len());
        }
        // A full cycle wraps back to the first frame.
        assert_eq!(spinner.frame, 0);
    }

    #[test]
    fn non_tick_events_are_ignored() {
        let mut spinner = Spinner::default();
        let cmds = spinner.update(&Event::BackgroundColor { is_dark: true });
        assert!(cmds.is_empty());
        assert_eq!(spinner.frame, 0);
    }

    #[test]
    fn frame_span_carries_the_spinner_style() {
        let spinner = Spinner::default();
        let span = spinner.frame_span();
        assert_eq!(span.content, FRAMES[0]);
        assert_eq!(span.style, spinner.style);
    }
}
