// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::procs::{CommandSpec, Process};

/// The optional web UI
///
/// Rules:
/// - started before the main application
/// - never awaited, its exit status has no effect on the launcher
/// - keeps running if the launcher exits first
#[derive(Debug)]
pub struct WebServer {
    command: CommandSpec,
}

impl WebServer {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Process for WebServer {
    const NAME: &'static str = "web-ui";

    fn command(&self) -> &CommandSpec {
        &self.command
    }
}
