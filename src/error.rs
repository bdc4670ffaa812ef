// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;
use std::io;

use thiserror::Error;

/// Exit code used by shells when a command could not be found
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code used by shells when a command was found but could not be executed
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Generic failure
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
    #[error("failed to start {name} ({program:?}): {source}")]
    SpawnError {
        name: &'static str,
        program: OsString,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub fn spawn(name: &'static str, program: OsString, source: io::Error) -> Self {
        Self::from_kind(ErrorKind::SpawnError {
            name,
            program,
            source,
        })
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::from_kind(ErrorKind::ConfigError(msg.into()))
    }

    /// The status the launcher should exit with when this error ends it
    pub fn exit_code(&self) -> i32 {
        match &self.0 {
            ErrorKind::SpawnError { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_FAILURE,
            },
            _ => EXIT_FAILURE,
        }
    }
}

impl<E> From<E> for Error
where
    E: Into<ErrorKind>,
{
    fn from(err: E) -> Self {
        Self::from_kind(err.into())
    }
}
