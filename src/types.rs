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

//! Shared event and command types.

use std::time::Duration;

use crossterm::event::KeyEvent;

/// Inbound event delivered to the update function by the driver.
#[derive(Debug)]
pub enum Event {
    /// A key press, already filtered to `KeyEventKind::Press`.
    Key(KeyEvent),
    /// The spinner's recurring animation tick.
    Tick,
    /// Reply to the terminal background query.
    BackgroundColor {
        /// Whether the terminal background is dark.
        is_dark: bool,
    },
    /// An error surfaced from inside the event loop.
    Error(anyhow::Error),
}

/// Follow-up request returned by the update function for the driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Leave the event loop and exit normally.
    Quit,
    /// Leave the event loop and report the run as interrupted.
    Interrupt,
    /// Stop the process with `SIGTSTP`, resuming the loop on `SIGCONT`.
    Suspend,
    /// Arm the next animation tick after the given delay.
    Tick(Duration),
    /// Ask the driver for the terminal background darkness.
    QueryBackground,
}
