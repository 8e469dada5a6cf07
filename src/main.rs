//! keysort binary: build the configuration from the argument list, hand it
//! immutably to the engine, map failures to diagnostics and exit codes.

use std::process;

use keysort::{config::Config, EXIT_SUCCESS};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    match keysort::sort(&config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
