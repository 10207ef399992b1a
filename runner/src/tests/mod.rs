use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use journal::{format_logs, Journal};
use scheduler::{SchedulerError, Script, Summary};

use super::simulate;

mod blocking;
mod errors;

fn reference_path(folder: &str, name: &str, quantum: usize) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../outputs")
        .join(folder)
        .join(format!("{name}___{quantum}.log"))
}

fn write_logs(folder: &str, name: &str, quantum: usize, logs: &str) {
    let path = reference_path(folder, name, quantum);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, logs).unwrap();
}

fn read_logs(folder: &str, name: &str, quantum: usize) -> String {
    fs::read_to_string(reference_path(folder, name, quantum)).unwrap()
}

/// Simulates `scripts` and compares the rendered journal with the
/// reference log. Set `WRITE_OUTPUT` to regenerate the reference instead.
fn run(
    folder: &str,
    name: &str,
    quantum: usize,
    scripts: Vec<Script>,
) -> Result<Summary, SchedulerError> {
    let mut journal = Journal::new();
    let outcome = simulate(NonZeroUsize::new(quantum).unwrap(), scripts, &mut journal);
    let output = format_logs(journal.entries());

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, quantum, &output);
    } else {
        let reference = read_logs(folder, name, quantum);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
    outcome
}

fn script(name: &str, lines: &[&str]) -> Script {
    Script::new(name, lines.iter().copied())
}
