use std::{env, process::ExitCode};

use decay_cli::{ArgsError, Outcome, logging, report::Scientific};
use log::{debug, warn};

/// Exit status for a wrong argument count, the unsigned form of `-1`.
const USAGE_EXIT: u8 = 255;

/// Exit status for arguments that fail to parse or validate.
const INVALID_EXIT: u8 = 1;

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("decay: logging unavailable: {err}");
    }

    let raw = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    match decay_cli::run(raw) {
        Ok(Outcome::Evaluated(evaluation)) => {
            println!("{}", Scientific(evaluation.error));
            ExitCode::SUCCESS
        }
        Ok(Outcome::UnknownScheme(unknown)) => {
            warn!("{unknown}; nothing computed");
            ExitCode::SUCCESS
        }
        Err(err @ ArgsError::Usage { .. }) => {
            debug!("{err}");
            ExitCode::from(USAGE_EXIT)
        }
        Err(err) => {
            eprintln!("decay: {err}");
            ExitCode::from(INVALID_EXIT)
        }
    }
}
