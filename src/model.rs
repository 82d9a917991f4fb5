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

//! Application state and the event-driven update function.

use crate::help::HelpStyles;
use crate::keymap::Keymap;
use crate::spinner::{self, Spinner};
use crate::types::{Cmd, Event};

/// The whole application state. Owned by the driver; changed only by
/// [`App::update`], which consumes the previous value and returns the next.
#[derive(Debug)]
pub struct App {
    /// Spinner animation state.
    pub spinner: Spinner,
    /// The fixed key bindings.
    pub keymap: Keymap,
    /// Legend styles; `None` until the first background reply arrives.
    pub help: Option<HelpStyles>,
    /// Set once a quit key was pressed.
    pub quitting: bool,
    /// Last in-loop error; takes over the view when set.
    pub err: Option<anyhow::Error>,
}

impl App {
    /// Initial state plus the two startup requests: the background query and
    /// the first spinner tick.
    pub fn init() -> (Self, Vec<Cmd>) {
        let app = Self {
            spinner: Spinner::default(),
            keymap: Keymap::default(),
            help: None,
            quitting: false,
            err: None,
        };
        (app, vec![Cmd::QueryBackground, Cmd::Tick(spinner::INTERVAL)])
    }

    /// Apply one event and return the next state with any follow-up commands.
    ///
    /// Key presses are checked against the bindings in fixed order (quit,
    /// interrupt, suspend); the first match wins. Events not handled here
    /// fall through to the spinner sub-model.
    pub fn update(mut self, event: Event) -> (Self, Vec<Cmd>) {
        match event {
            Event::BackgroundColor { is_dark } => {
                self.help = Some(HelpStyles::new(is_dark));
                (self, Vec::new())
            }
            Event::Key(key) => {
                if self.keymap.quit.matches(&key) {
                    self.quitting = true;
                    return (self, vec![Cmd::Quit]);
                }
                if self.keymap.interrupt.matches(&key) {
                    return (self, vec![Cmd::Interrupt]);
                }
                if self.keymap.suspend.matches(&key) {
                    return (self, vec![Cmd::Suspend]);
                }
                (self, Vec::new())
            }
            Event::Error(err) => {
                self.err = Some(err);
                (self, Vec::new())
            }
            other => {
                let cmds = self.spinner.update(&other);
                (self, cmds)
            }
        }
    }
}
