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

//! Help legend rendering and background-adaptive styling.

use ratatui::prelude::{Color, Line, Span, Style};

use crate::keymap::Binding;

/// Separator between legend entries.
const SEPARATOR: &str = " • ";

/// Two-toned style set for the help legend, picked per terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpStyles {
    /// Style for key labels.
    pub key: Style,
    /// Style for action descriptions.
    pub desc: Style,
    /// Style for the entry separator.
    pub separator: Style,
}

impl HelpStyles {
    /// Styles matching the reported background darkness.
    pub fn new(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }

    /// Muted grays readable on a dark background.
    pub fn dark() -> Self {
        Self {
            key: Style::default().fg(Color::Rgb(0x62, 0x62, 0x62)),
            desc: Style::default().fg(Color::Rgb(0x4a, 0x4a, 0x4a)),
            separator: Style::default().fg(Color::Rgb(0x3c, 0x3c, 0x3c)),
        }
    }

    /// Muted grays readable on a light background.
    pub fn light() -> Self {
        Self {
            key: Style::default().fg(Color::Rgb(0x90, 0x90, 0x90)),
            desc: Style::default().fg(Color::Rgb(0xb2, 0xb2, 0xb2)),
            separator: Style::default().fg(Color::Rgb(0xdd, 0xda, 0xda)),
        }
    }
}

/// Build the one-line legend for the given bindings. Falls back to unstyled
/// text while the background darkness is still unknown.
pub fn legend(bindings: &[&Binding], styles: Option<&HelpStyles>) -> Line<'static> {
    let unstyled = HelpStyles {
        key: Style::default(),
        desc: Style::default(),
        separator: Style::default(),
    };
    let styles = styles.copied().unwrap_or(unstyled);

    let mut spans = Vec::with_capacity(bindings.len() * 4);
    for (idx, binding) in bindings.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(SEPARATOR, styles.separator));
        }
        spans.push(Span::styled(binding.key_label, styles.key));
        spans.push(Span::styled(" ", styles.desc));
        spans.push(Span::styled(binding.desc, styles.desc));
    }
    Line::from(spans)
}

/// Interpret a `COLORFGBG` value (e.g. `15;0`) as a darkness hint. The last
/// field is the background color number; 0-6 and 8 are the dark half of the
/// classic 16-color palette.
pub fn is_dark_hint(colorfgbg: &str) -> Option<bool> {
    let bg = colorfgbg.rsplit(';').next()?;
    let bg: u8 = bg.trim().parse().ok()?;
    Some(bg <= 6 || bg == 8)
}
