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

//! Binary entry point. There are no flags or subcommands; running the
//! program starts the interactive screen directly.

mod app;
mod help;
mod keymap;
mod model;
mod spinner;
mod types;
mod view;

/// Write debug traces to `whirl.log` in opt-in debug builds.
#[cfg(feature = "debug_log")]
fn init_debug_log() {
    use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(file) = std::fs::File::create("whirl.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, config, file);
    }
}

fn main() {
    #[cfg(feature = "debug_log")]
    init_debug_log();

    if let Err(e) = app::run() {
        eprintln!("Error while running program: {e:#}");
        std::process::exit(1);
    }
}
