// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::EXIT_FAILURE;
use crate::procs::Process;
use crate::Error;

/// Offset shells add to a signal number to report a signalled child
const SIGNAL_EXIT_BASE: i32 = 128;

/// Exit status of a child, in the form a shell would report it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code = status
            .code()
            .or_else(|| status.signal().map(|signal| SIGNAL_EXIT_BASE + signal))
            .unwrap_or(EXIT_FAILURE);

        Self(code)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct Child {
    name: &'static str,
    pid: Option<u32>,
    child: tokio::process::Child,
}

impl Child {
    pub fn id(&self) -> Option<u32> {
        self.pid
    }

    /// Block until the child exits
    pub async fn wait(mut self) -> Result<ExitCode, Error> {
        let status = self.child.wait().await?;
        Ok(ExitCode::from(status))
    }

    /// Stop tracking the child, a background task reaps it when it exits.
    ///
    /// Must be called from within a tokio runtime. The child is not killed
    /// if the runtime shuts down first.
    pub fn detach(self) -> JoinHandle<()> {
        let name = self.name;
        let pid = self.pid;

        tokio::spawn(async move {
            match self.wait().await {
                Ok(code) if code.success() => debug!(process = name, ?pid, "background process exited"),
                Ok(code) => warn!(process = name, ?pid, %code, "background process exited with failure"),
                Err(err) => warn!(process = name, ?pid, %err, "failed to wait on background process"),
            }
        })
    }
}

/// Spawn the process, sharing the launcher's stdio
pub fn new_process<P>(process: &P) -> Result<Child, Error>
where
    P: Process,
{
    let command = process.command();

    // env, working directory and stdio are inherited from the launcher
    let child = Command::new(command.program())
        .args(command.args())
        .kill_on_drop(false)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|err| Error::spawn(P::NAME, command.program().to_owned(), err))?;

    let pid = child.id();
    debug!(process = P::NAME, ?pid, program = ?command.program(), "started child process");

    Ok(Child {
        name: P::NAME,
        pid,
        child,
    })
}
