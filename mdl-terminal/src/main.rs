/// MDL Terminal - renders the demo scene
///
/// Usage: mdl-terminal [--headless] [--out FILE]
///   --headless  skip the terminal preview
///   --out FILE  where the scene is saved (format from the extension)
///
/// Set RUST_LOG=debug to trace every operation.

use mdl_terminal::{AppError, Options};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(AppError::Usage(usage)) => {
            eprintln!("{usage}");
            return ExitCode::from(2);
        }
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match mdl_terminal::run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
