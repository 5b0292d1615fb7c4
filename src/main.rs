use std::process;
use yon::cli;

fn main() {
    if let Err(code) = cli::run_main() {
        process::exit(code);
    }
}
