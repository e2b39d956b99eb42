//! Binary entrypoint for the `gradewatch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A local .env may carry endpoint and roster overrides.
    let _ = dotenvy::dotenv();
    match gradewatch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
