// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::procs::{CommandSpec, Process};

/// The main application
///
/// Rules:
/// - always started, in the foreground
/// - the launcher waits for it and exits with its status
#[derive(Debug)]
pub struct MainApp {
    command: CommandSpec,
}

impl MainApp {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Process for MainApp {
    const NAME: &'static str = "main";

    fn command(&self) -> &CommandSpec {
        &self.command
    }
}
