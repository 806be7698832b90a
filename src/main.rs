//! journaltxt - Build Jekyll blog posts from Journal.TXT journals

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = journaltxt::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
