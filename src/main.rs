use std::io;
use std::process::ExitCode;

use parakeet::{logger, Shell};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("$ERROR: could not install logger: {e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
