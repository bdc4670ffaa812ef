// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::Write;

use tracing::{debug, error, info};

use crate::config::{LauncherConfig, WebUiMode, WEB_UI_PORT};
use crate::fork::{new_process, ExitCode};
use crate::procs::{MainApp, Process, WebServer};
use crate::Error;

pub const WEB_UI_DISABLED_MSG: &str = "Web UI disabled, starting only the main application";

pub fn web_ui_enabled_msg() -> String {
    format!("Starting with Web UI enabled on port {}", WEB_UI_PORT)
}

/// Launch programs
///
/// Rules:
/// - starts the web UI first, without waiting on it, if enabled
/// - always starts the main application and waits on it
/// - the main application's exit status is the launcher's
#[derive(Debug)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Announce the branch on `out`, start the children, and wait on the main application.
    ///
    /// A web UI that fails to start is logged and otherwise ignored. A main
    /// application that fails to start is returned as an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ExitCode, Error> {
        // the announcement must land before any child output
        match self.config.web_ui {
            WebUiMode::Enabled => writeln!(out, "{}", web_ui_enabled_msg())?,
            WebUiMode::Disabled => writeln!(out, "{}", WEB_UI_DISABLED_MSG)?,
        }
        out.flush()?;

        if self.config.web_ui.is_enabled() {
            let web_server = WebServer::new(self.config.web_ui_command.clone());
            match new_process(&web_server) {
                Ok(child) => {
                    let _reaper = child.detach();
                }
                Err(err) => error!(process = WebServer::NAME, %err, "continuing without the web UI"),
            }
        }

        let main_app = MainApp::new(self.config.main_command.clone());
        let child = new_process(&main_app)?;
        info!(process = MainApp::NAME, pid = ?child.id(), "waiting on main application");

        let code = child.wait().await?;
        debug!(process = MainApp::NAME, %code, "main application exited");

        Ok(code)
    }
}
