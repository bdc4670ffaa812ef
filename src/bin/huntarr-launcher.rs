// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io;
use std::process;

use clap::{App, Arg, ArgMatches};
use tokio::runtime;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use huntarr_launcher::{Error, Launcher, LauncherConfig};

const WEB_UI_CMD_ARG: &str = "web-ui-cmd";
const MAIN_CMD_ARG: &str = "main-cmd";

fn app() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name(WEB_UI_CMD_ARG)
                .long(WEB_UI_CMD_ARG)
                .value_name("CMD")
                .takes_value(true)
                .help("web UI command line, split on whitespace")
                .long_help(concat!(
                    "web UI command line, split on whitespace. Overrides HUNTARR_WEB_UI_CMD, ",
                    "defaults to `python3 web_server.py`"
                )),
        )
        .arg(
            Arg::with_name(MAIN_CMD_ARG)
                .long(MAIN_CMD_ARG)
                .value_name("CMD")
                .takes_value(true)
                .help("main application command line, split on whitespace")
                .long_help(concat!(
                    "main application command line, split on whitespace. Overrides HUNTARR_MAIN_CMD, ",
                    "defaults to `python3 main.py`"
                )),
        )
}

fn main() {
    let args = app().get_matches();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => exit_with(err),
    };

    init_logging(config.debug);
    tracing::debug!(
        web_ui = ?config.web_ui,
        web_ui_command = ?config.web_ui_command,
        main_command = ?config.main_command,
        "configuration loaded"
    );

    let runtime = match runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => exit_with(Error::from(err)),
    };

    let result = runtime.block_on(async move {
        let launcher = Launcher::new(config);
        launcher.run(&mut io::stdout()).await
    });

    match result {
        Ok(code) => process::exit(code.code()),
        Err(err) => exit_with(err),
    }
}

fn load_config(args: &ArgMatches<'_>) -> Result<LauncherConfig, Error> {
    LauncherConfig::from_env()?
        .with_overrides(args.value_of(WEB_UI_CMD_ARG), args.value_of(MAIN_CMD_ARG))
}

/// Diagnostics go to stderr, stdout only carries the startup announcement
fn init_logging(debug: bool) {
    let default_filter = if debug {
        "huntarr_launcher=debug"
    } else {
        "huntarr_launcher=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn exit_with(err: Error) -> ! {
    error!(%err, "launcher failed");
    eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
    process::exit(err.exit_code())
}
