use std::env;
use std::process;

use clap::Parser;
use tracing::debug;

use kit_core::{kit_error, kit_error_hint, user_paths};
use kit_messages::{msg, MESSAGES};

mod cli;
mod commands;
mod error;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // CLI tests compare stdout and stderr, so no subscriber in test mode
    let log_guard = if env::var_os("KIT_TEST_MODE").is_none() {
        if args.debug && env::var_os("KIT_LOG_LEVEL").is_none() {
            env::set_var("KIT_LOG_LEVEL", "debug");
        }
        let log_file = user_paths::data_file("kit.log").unwrap_or_else(|_| "kit.log".into());
        kit_logging::init_subscriber(&log_file)
    } else {
        None
    };

    debug!(command = ?args.command, "starting kit");

    let code = match execute_command(args) {
        Ok(()) => 0,
        Err(e) => {
            kit_error!("{}", msg!(MESSAGES.common.error_generic, error = e.to_string()));
            if let Some(hint) = e.hint() {
                kit_error_hint!("{}", hint);
            }
            1
        }
    };

    drop(log_guard);
    process::exit(code);
}
