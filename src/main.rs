use intl_options::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments and process the command
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
