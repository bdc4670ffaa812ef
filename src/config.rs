// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Startup configuration, read once from the environment

use std::ffi::OsString;

use crate::procs::CommandSpec;
use crate::Error;

pub const ENABLE_WEB_UI: &str = "ENABLE_WEB_UI";
pub const DEBUG_MODE: &str = "DEBUG_MODE";
pub const WEB_UI_CMD: &str = "HUNTARR_WEB_UI_CMD";
pub const MAIN_CMD: &str = "HUNTARR_MAIN_CMD";

pub const DEFAULT_ENABLE_WEB_UI: &str = "true";
pub const DEFAULT_DEBUG_MODE: &str = "false";
pub const DEFAULT_WEB_UI_CMD: &str = "python3 web_server.py";
pub const DEFAULT_MAIN_CMD: &str = "python3 main.py";

/// Port the web server listens on, only used for the startup message
pub const WEB_UI_PORT: u16 = 8988;

/// Whether the web server is started next to the main application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebUiMode {
    Enabled,
    Disabled,
}

impl WebUiMode {
    /// Interpret a raw `ENABLE_WEB_UI` value.
    ///
    /// Unset and empty both mean `"true"`. Anything that isn't `"true"` once
    /// lowercased is `Disabled`, so `"yes"`, `"1"` and `" true"` all disable.
    pub fn from_value(value: Option<&str>) -> Self {
        if flag_is_true(value, DEFAULT_ENABLE_WEB_UI) {
            WebUiMode::Enabled
        } else {
            WebUiMode::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == WebUiMode::Enabled
    }
}

/// Literal flag check used for every boolean-ish env var: default when unset or empty, lowercase, compare to `"true"`
fn flag_is_true(value: Option<&str>, default: &str) -> bool {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    };

    value.to_lowercase() == "true"
}

#[derive(Clone, Debug)]
pub struct LauncherConfig {
    pub web_ui: WebUiMode,
    pub debug: bool,
    pub web_ui_command: CommandSpec,
    pub main_command: CommandSpec,
}

impl LauncherConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Lookups returning `None` are treated as unset. Flag values that are
    /// not UTF-8 can never equal `"true"`; command lines must be UTF-8.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let flag = |key: &str| lookup(key).map(|v: OsString| v.to_string_lossy().into_owned());

        let web_ui = WebUiMode::from_value(flag(ENABLE_WEB_UI).as_deref());
        let debug = flag_is_true(flag(DEBUG_MODE).as_deref(), DEFAULT_DEBUG_MODE);

        let web_ui_command =
            command_or_default(WEB_UI_CMD, lookup(WEB_UI_CMD), DEFAULT_WEB_UI_CMD)?;
        let main_command = command_or_default(MAIN_CMD, lookup(MAIN_CMD), DEFAULT_MAIN_CMD)?;

        Ok(Self {
            web_ui,
            debug,
            web_ui_command,
            main_command,
        })
    }

    /// Replace the commands with ones given on the command line, if any
    pub fn with_overrides(
        mut self,
        web_ui_command: Option<&str>,
        main_command: Option<&str>,
    ) -> Result<Self, Error> {
        if let Some(cmd) = web_ui_command {
            self.web_ui_command = CommandSpec::parse(cmd)?;
        }
        if let Some(cmd) = main_command {
            self.main_command = CommandSpec::parse(cmd)?;
        }

        Ok(self)
    }
}

// an empty override is an error, not a fallback, unlike ENABLE_WEB_UI
fn command_or_default(
    key: &str,
    value: Option<OsString>,
    default: &str,
) -> Result<CommandSpec, Error> {
    match value {
        Some(cmd) => {
            let cmd = cmd
                .into_string()
                .map_err(|cmd| Error::config(format!("{} is not valid UTF-8: {:?}", key, cmd)))?;
            CommandSpec::parse(&cmd)
        }
        None => CommandSpec::parse(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::os::unix::ffi::OsStringExt;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(*v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn not_utf8() -> OsString {
        OsString::from_vec(vec![b'/', b'b', b'i', b'n', b'/', 0xff])
    }

    #[test]
    fn test_non_utf8_command_is_rejected() {
        let result = LauncherConfig::from_lookup(|key: &str| {
            if key == MAIN_CMD {
                Some(not_utf8())
            } else {
                None
            }
        });

        let err = result.unwrap_err();
        assert!(err.to_string().contains("HUNTARR_MAIN_CMD is not valid UTF-8"), "{}", err);
    }

    #[test]
    fn test_non_utf8_flag_disables() {
        let config = LauncherConfig::from_lookup(|key: &str| {
            if key == ENABLE_WEB_UI {
                Some(not_utf8())
            } else {
                None
            }
        })
        .unwrap();

        assert_eq!(config.web_ui, WebUiMode::Disabled);
    }

    #[test]
    fn test_true_any_case() {
        for value in &["true", "True", "TRUE", "TrUe"] {
            assert_eq!(WebUiMode::from_value(Some(*value)), WebUiMode::Enabled, "{}", value);
        }
    }

    #[test]
    fn test_unset_or_empty_defaults_to_enabled() {
        assert_eq!(WebUiMode::from_value(None), WebUiMode::Enabled);
        assert_eq!(WebUiMode::from_value(Some("")), WebUiMode::Enabled);
    }

    #[test]
    fn test_everything_else_disables() {
        for value in &["false", "FALSE", "yes", "1", "on", " true", "true ", "ture"] {
            assert_eq!(WebUiMode::from_value(Some(*value)), WebUiMode::Disabled, "{:?}", value);
        }
    }

    #[test]
    fn test_defaults() {
        let config = LauncherConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.web_ui, WebUiMode::Enabled);
        assert!(!config.debug);
        assert_eq!(config.web_ui_command, CommandSpec::parse(DEFAULT_WEB_UI_CMD).unwrap());
        assert_eq!(config.main_command, CommandSpec::parse(DEFAULT_MAIN_CMD).unwrap());
    }

    #[test]
    fn test_env_values() {
        let config = LauncherConfig::from_lookup(lookup_from(&[
            (ENABLE_WEB_UI, "False"),
            (DEBUG_MODE, "TRUE"),
            (WEB_UI_CMD, "/srv/web --port 8988"),
            (MAIN_CMD, "/srv/main"),
        ]))
        .unwrap();

        assert_eq!(config.web_ui, WebUiMode::Disabled);
        assert!(config.debug);
        assert_eq!(config.web_ui_command.program(), "/srv/web");
        assert_eq!(config.web_ui_command.args().len(), 2);
        assert_eq!(config.main_command.program(), "/srv/main");
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(LauncherConfig::from_lookup(lookup_from(&[(MAIN_CMD, "  ")])).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = LauncherConfig::from_lookup(lookup_from(&[(MAIN_CMD, "/env/main")]))
            .unwrap()
            .with_overrides(Some("/cli/web"), Some("/cli/main"))
            .unwrap();

        assert_eq!(config.web_ui_command.program(), "/cli/web");
        assert_eq!(config.main_command.program(), "/cli/main");
    }
}
