//! quickjump - directory jumping for the shell

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = quickjump::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
