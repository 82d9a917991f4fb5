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

//! Pure view: application state to displayable text.

use ratatui::prelude::{Frame, Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::help;
use crate::model::App;

/// Caption next to the spinner glyph.
const CAPTION: &str = " Loading forever...";

/// Render the state as text. A recorded error replaces the whole view with
/// its message; otherwise the spinner line and the help legend are shown.
pub fn view(app: &App) -> Text<'static> {
    if let Some(err) = &app.err {
        return Text::from(err.to_string());
    }

    let spinner_line = Line::from(vec![
        Span::raw("  "),
        app.spinner.frame_span(),
        Span::raw(CAPTION),
    ]);
    Text::from(vec![
        Line::default(),
        spinner_line,
        Line::default(),
        help::legend(&app.keymap.short_help(), app.help.as_ref()),
    ])
}

/// Render one UI frame from the current state.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    f.render_widget(Paragraph::new(view(app)), f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::HelpStyles;
    use crate::types::Event;
    use anyhow::anyhow;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn error_text_replaces_the_entire_view() {
        let (app, _) = App::init();
        let (mut app, _) = app.update(Event::Error(anyhow!("boom")));
        app.quitting = true;
        app.spinner.frame = 3;
        app.help = Some(HelpStyles::dark());
        assert_eq!(view(&app), Text::from("boom"));
    }

    #[test]
    fn normal_view_has_spinner_caption_and_legend() {
        let (app, _) = App::init();
        let text = view(&app);
        assert_eq!(text.lines.len(), 4);
        assert_eq!(text.lines[0], Line::default());
        assert_eq!(text.lines[2], Line::default());

        let spinner_line: String = text.lines[1]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(spinner_line, "  ⣾ Loading forever...");

        let legend: String = text.lines[3]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(legend, "q quit • ctrl+c interrupt • ctrl+z suspend");
    }

    #[test]
    fn view_is_deterministic_for_a_given_state() {
        let (app, _) = App::init();
        let (app, _) = app.update(Event::Tick);
        assert_eq!(view(&app), view(&app));
    }

    #[test]
    fn legend_picks_up_dark_styles_after_background_reply() {
        let (app, _) = App::init();
        let (app, _) = app.update(Event::BackgroundColor { is_dark: true });
        let text = view(&app);
        assert_eq!(text.lines[3].spans[0].style, HelpStyles::dark().key);
    }

    #[test]
    fn draw_renders_both_normal_and_error_states() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).expect("terminal");

        let (app, _) = App::init();
        terminal.draw(|f| draw(f, &app)).expect("draw");

        let (app, _) = app.update(Event::Error(anyhow!("boom")));
        terminal.draw(|f| draw(f, &app)).expect("draw");
    }
}
