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

//! App entry module.
//!
//! The terminal runtime only exists in non-test builds; unit tests cover the
//! pure update, view, and spinner modules, which never touch the terminal.

#[cfg(not(test))]
pub mod tui;

#[cfg(not(test))]
pub use self::tui::run;

#[cfg(test)]
/// Test-only runner stub standing in for the spinner screen.
pub fn run() -> anyhow::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn runner_stub_reports_a_clean_quit() {
        assert!(super::run().is_ok());
    }
}
