use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};

use journal::{Journal, LogFile};
use scheduler::{RoundRobin, Scheduler, SchedulerError, Script, Summary};

mod config;
mod error;
mod loader;

use config::{Command, Config};
use error::ConfigError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match config::from_env() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            config::print_usage();
            return ExitCode::SUCCESS;
        }
        Err(error @ ConfigError::UnknownArgument(_)) => {
            eprintln!("error: {error}");
            eprintln!();
            config::print_usage();
            return ExitCode::from(2);
        }
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the inputs, runs the simulation and saves the journal.
///
/// Returns the path of the journal. A run aborted by a faulty program still
/// saves its journal before the error is returned.
fn run(config: &Config) -> anyhow::Result<PathBuf> {
    let quantum = loader::load_quantum(&config.quantum_file)?;
    let programs = loader::discover_programs(&config.programs_dir)?;
    let scripts = loader::load_programs(&programs);
    info!("quantum {quantum}, {} programs", scripts.len());

    let mut journal = Journal::new();
    let outcome = simulate(quantum, scripts, &mut journal);

    let mut file = LogFile::create(&config.logs_dir, quantum)
        .with_context(|| format!("cannot create a log in {}", config.logs_dir.display()))?;
    file.write_entries(journal.entries())
        .with_context(|| format!("cannot write {}", file.path().display()))?;

    outcome?;
    Ok(file.path().to_path_buf())
}

/// Admits the scripts in order and runs them to completion, recording the
/// summary, or the error that aborted the run, in the journal.
fn simulate(
    quantum: NonZeroUsize,
    scripts: Vec<Script>,
    journal: &mut Journal,
) -> Result<Summary, SchedulerError> {
    let mut scheduler = RoundRobin::with_scripts(quantum, scripts, journal);
    match scheduler.run(journal) {
        Ok(summary) => {
            journal.record_summary(summary);
            Ok(summary)
        }
        Err(error) => {
            journal.record_error(&error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests;
