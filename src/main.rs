use std::env;
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process;

use clap::{App, AppSettings, Arg};
use log::{debug, error};

use snekoban::config::Command;
use snekoban::handler::{self, CommandErr, DebugData, Response};

fn main() {
    // logs go to stderr, stdout is only for the response
    env_logger::init();

    let matches = App::new("snekoban")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads a JSON request from stdin and writes a JSON response to stdout")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("command")
                .required(true)
                .help("new_game, dump_game, victory_check, step_game or solve_puzzle"),
        )
        .get_matches_from(normalize_args(env::args_os()));

    let command = matches.value_of("command").unwrap_or_default();
    debug!("Command: {}", command);

    let mut input = String::new();
    let response = match io::stdin().read_to_string(&mut input) {
        Ok(_) => handler::respond(command, &input),
        Err(err) => Response::from_result(Err(CommandErr::from(err)), DebugData::new()),
    };

    let output = serde_json::to_string(&response).unwrap_or_else(|err| {
        error!("Failed to serialize response: {}", err);
        process::exit(1);
    });
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        error!("Failed to write response: {}", err);
        process::exit(1);
    }
}

/// Old callers pass the command as `-new_game`,
/// strip the dash so clap doesn't try to read it as a group of short flags.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            let is_dashed_command = arg
                .to_str()
                .map_or(false, |s| s.starts_with('-') && s.parse::<Command>().is_ok());
            if is_dashed_command {
                OsString::from(&arg.to_string_lossy()[1..])
            } else {
                arg
            }
        })
        .collect()
}
