use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{LevelFilter, SetLoggerError};
use u_cpusched::report::render_input;
use u_cpusched::scheduler::Simulator;
use u_cpusched::SimError;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

fn init_logger() -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .try_init()
}

fn run(input: PathBuf, output: PathBuf) -> Result<(), SimError> {
    let text = fs::read_to_string(&input).map_err(|source| SimError::UnreadableSource {
        path: input.clone(),
        source,
    })?;

    let report = render_input(&text, &Simulator::default())?;

    fs::write(&output, report).map_err(|source| SimError::UnwritableSink {
        path: output.clone(),
        source,
    })?;
    log::info!("report written to {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("logger unavailable: {e}");
    }

    let mut args = env::args_os().skip(1);
    let input = args.next().map_or_else(|| PathBuf::from(DEFAULT_INPUT), PathBuf::from);
    let output = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    match run(input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_installs_once() {
        assert!(init_logger().is_ok());
        log::info!("logger ready");
        assert!(init_logger().is_err());
    }

    #[test]
    fn test_missing_input_is_unreadable() {
        let dir = env::temp_dir();
        let input = dir.join("u-cpusched-missing-input.txt");
        let output = dir.join("u-cpusched-unused-output.txt");
        match run(input.clone(), output.clone()).unwrap_err() {
            SimError::UnreadableSource { path, .. } => assert_eq!(path, input),
            other => panic!("unexpected error: {other}"),
        }
    }
}
