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

//! Static key bindings and their help labels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One logical action bound to a fixed set of key presses.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    keys: &'static [(KeyModifiers, KeyCode)],
    /// Key label shown in the help legend, e.g. `ctrl+c`.
    pub key_label: &'static str,
    /// Short action description shown in the help legend.
    pub desc: &'static str,
}

impl Binding {
    /// Whether the key press matches one of this binding's key sequences.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|(modifiers, code)| key.modifiers == *modifiers && key.code == *code)
    }
}

/// The program's three fixed bindings, checked in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Keymap {
    /// Exit the program normally.
    pub quit: Binding,
    /// Raise an interrupt signal.
    pub interrupt: Binding,
    /// Suspend the process.
    pub suspend: Binding,
}

impl Keymap {
    /// Bindings in the order they appear in the help legend.
    pub fn short_help(&self) -> [&Binding; 3] {
        [&self.quit, &self.interrupt, &self.suspend]
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            quit: Binding {
                keys: &[
                    (KeyModifiers::NONE, KeyCode::Char('q')),
                    (KeyModifiers::NONE, KeyCode::Esc),
                ],
                key_label: "q",
                desc: "quit",
            },
            interrupt: Binding {
                keys: &[(KeyModifiers::CONTROL, KeyCode::Char('c'))],
                key_label: "ctrl+c",
                desc: "interrupt",
            },
            suspend: Binding {
                keys: &[(KeyModifiers::CONTROL, KeyCode::Char('z'))],
                key_label: "ctrl+z",
                desc: "suspend",
            },
        }
    }
}
