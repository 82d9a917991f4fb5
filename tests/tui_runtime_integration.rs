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

use std::process::Command;

fn has_script_pty() -> bool {
    Command::new("sh")
        .arg("-c")
        .arg("command -v script >/dev/null 2>&1")
        .status()
        .expect("check script availability")
        .success()
}

/// Run the binary on a pty fed by the given shell command; `script -e`
/// propagates the binary's exit code.
fn run_with_pty_feed(feed: &str) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_whirl");
    let cmd = format!("{{ {feed}; }} | script -qefc '{bin}' /dev/null");
    Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .output()
        .expect("run tui with pty")
}

#[test]
fn tui_process_quits_cleanly_on_q() {
    if !has_script_pty() {
        return;
    }
    let output = run_with_pty_feed("printf q");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn tui_process_quits_cleanly_on_escape() {
    if !has_script_pty() {
        return;
    }
    let output = run_with_pty_feed("printf '\\033'");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn tui_process_exits_nonzero_on_interrupt_key() {
    if !has_script_pty() {
        return;
    }
    // The pause lets the program enter raw mode first, so the byte arrives
    // as a ctrl+c key press rather than a tty-generated SIGINT.
    let output = run_with_pty_feed("sleep 1; printf '\\003'");
    assert_eq!(output.status.code(), Some(1));
}
