// Copyright 2019 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

mod main_app;
mod web_server;

pub use main_app::MainApp;
pub use web_server::WebServer;

use std::ffi::{OsStr, OsString};

use crate::Error;

/// A trait to define common construction of a process
pub trait Process: Send + 'static {
    const NAME: &'static str;

    /// The program and arguments to execute
    fn command(&self) -> &CommandSpec;
}

/// A program with its arguments, as it will be passed to exec
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace, the first word is the program.
    ///
    /// Quotes and escapes are not interpreted.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut words = line.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::config(format!("empty command line: {:?}", line)))?;

        Ok(Self::new(program, words))
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let spec = CommandSpec::parse("python3  web_server.py\t--verbose").unwrap();

        assert_eq!(spec.program(), "python3");
        assert_eq!(
            spec.args(),
            &[OsString::from("web_server.py"), OsString::from("--verbose")][..]
        );
    }

    #[test]
    fn test_parse_program_only() {
        let spec = CommandSpec::parse("/usr/bin/huntarr").unwrap();

        assert_eq!(spec.program(), "/usr/bin/huntarr");
        assert!(spec.args().is_empty());
    }

    #[test]
    fn test_parse_blank() {
        assert!(CommandSpec::parse("").is_err());
        assert!(CommandSpec::parse(" \t ").is_err());
    }

    #[test]
    fn test_quotes_are_literal() {
        let spec = CommandSpec::parse("sh -c 'exit 3'").unwrap();

        assert_eq!(spec.args().len(), 3);
        assert_eq!(spec.args()[1], OsString::from("'exit"));
    }
}
