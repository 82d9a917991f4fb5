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

//! Terminal runtime: owns the terminal, delivers events, executes commands.
//!
//! Events are delivered one at a time in arrival order and a frame is drawn
//! after every processed event, so the view only ever sees the state that
//! event produced. Queued replies are drained before the tick deadline, and
//! the tick deadline before the input poll.

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nix::sys::signal::{Signal, raise};
use ratatui::prelude::*;
use std::{
    collections::VecDeque,
    env, io,
    time::{Duration, Instant},
};

use crate::{
    help,
    model::App,
    types::{Cmd, Event},
    view,
};

/// Upper bound for one input poll, so queued work stays responsive.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Tty = Terminal<CrosstermBackend<io::Stdout>>;

/// Why the event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// A quit binding was pressed.
    Quit,
    /// An interrupt binding was pressed; reported as a run error.
    Interrupted,
}

fn setup_terminal() -> Result<Tty> {
    enable_raw_mode().context("enable_raw_mode failed")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("EnterAlternateScreen failed")?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tty) -> Result<()> {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    Ok(())
}

/// Run the interactive spinner screen. An interrupt key ends the run as an
/// error, so the caller reports it on stderr and exits non-zero.
pub fn run() -> Result<()> {
    let mut terminal = setup_terminal()?;
    let res = drive(&mut terminal);
    restore_terminal(&mut terminal)?;
    match res? {
        Exit::Quit => Ok(()),
        Exit::Interrupted => Err(anyhow!("interrupted")),
    }
}

/// Draw, wait for the next event, update, execute commands; repeat until a
/// terminating command was executed.
fn drive(terminal: &mut Tty) -> Result<Exit> {
    let (mut app, init_cmds) = App::init();
    let mut queue: VecDeque<Event> = VecDeque::new();
    let mut next_tick: Option<Instant> = None;
    let mut exit: Option<Exit> = None;

    run_cmds(init_cmds, terminal, &mut queue, &mut next_tick, &mut exit)?;

    loop {
        terminal.draw(|f| view::draw(f, &app))?;
        if let Some(exit) = exit {
            return Ok(exit);
        }

        let Some(event) = next_event(&mut queue, &mut next_tick) else {
            continue;
        };
        log::debug!("event: {event:?}");

        let (next, cmds) = app.update(event);
        app = next;
        run_cmds(cmds, terminal, &mut queue, &mut next_tick, &mut exit)?;
    }
}

/// Produce the next event: queued replies first, then a due tick, then a
/// bounded poll for key presses. Poll and read failures are delivered as
/// error events instead of ending the loop.
fn next_event(queue: &mut VecDeque<Event>, next_tick: &mut Option<Instant>) -> Option<Event> {
    if let Some(event) = queue.pop_front() {
        return Some(event);
    }

    if let Some(due) = *next_tick
        && Instant::now() >= due
    {
        *next_tick = None;
        return Some(Event::Tick);
    }

    let timeout = next_tick
        .map(|due| due.saturating_duration_since(Instant::now()).min(POLL_INTERVAL))
        .unwrap_or(POLL_INTERVAL);

    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                Some(Event::Key(key))
            }
            Ok(_) => None,
            Err(e) => Some(Event::Error(e.into())),
        },
        Ok(false) => None,
        Err(e) => Some(Event::Error(e.into())),
    }
}

/// Execute follow-up commands returned by the update function.
fn run_cmds(
    cmds: Vec<Cmd>,
    terminal: &mut Tty,
    queue: &mut VecDeque<Event>,
    next_tick: &mut Option<Instant>,
    exit: &mut Option<Exit>,
) -> Result<()> {
    for cmd in cmds {
        log::debug!("command: {cmd:?}");
        match cmd {
            Cmd::Quit => *exit = Some(Exit::Quit),
            Cmd::Interrupt => *exit = Some(Exit::Interrupted),
            Cmd::Suspend => suspend(terminal)?,
            Cmd::Tick(delay) => *next_tick = Some(Instant::now() + delay),
            Cmd::QueryBackground => queue.push_back(Event::BackgroundColor {
                is_dark: detect_dark_background(),
            }),
        }
    }
    Ok(())
}

/// Stop the process with `SIGTSTP`, handing the terminal back to the shell;
/// execution continues here after `SIGCONT`.
fn suspend(terminal: &mut Tty) -> Result<()> {
    restore_terminal(terminal)?;
    raise(Signal::SIGTSTP).context("raising SIGTSTP failed")?;
    enable_raw_mode().context("enable_raw_mode failed")?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)
        .context("EnterAlternateScreen failed")?;
    terminal.clear().context("terminal clear failed")?;
    Ok(())
}

/// Resolve the terminal background darkness from the environment. Most dark
/// terminals either set `COLORFGBG` accordingly or not at all, so an absent
/// or unparseable value counts as dark.
fn detect_dark_background() -> bool {
    env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(help::is_dark_hint)
        .unwrap_or(true)
}
