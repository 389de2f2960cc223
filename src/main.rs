use std::{path::Path, process::ExitCode};

use polyspin::Options;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match std::env::args_os().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    };

    match options.and_then(polyspin::native::run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
