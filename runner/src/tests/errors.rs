use core::module_path;
use std::fs;
use std::path::Path;

use function_name::named;
use scheduler::SchedulerError;

use super::{run, script};
use crate::config::Config;
use crate::error::ConfigError;

#[test]
#[named]
pub fn unknown_instruction() {
    let error = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        2,
        vec![
            script("GOOD", &["A=1", "SAIDA"]),
            script("BAD", &["COM", "XYZ"]),
            script("LATER", &["B=1"]),
        ],
    )
    .unwrap_err();

    assert!(matches!(
        error,
        SchedulerError::Instruction { program_counter: 1, .. }
    ));
}

fn layout(root: &Path, quantum: &str, programs: &[(&str, &str)]) -> Config {
    let config = Config {
        quantum_file: root.join("quantum").join("quantum.txt"),
        programs_dir: root.join("inserts"),
        logs_dir: root.join("logs"),
    };
    fs::create_dir_all(config.quantum_file.parent().unwrap()).unwrap();
    fs::create_dir_all(&config.programs_dir).unwrap();
    fs::write(&config.quantum_file, quantum).unwrap();
    for (file, contents) in programs {
        fs::write(config.programs_dir.join(file), contents).unwrap();
    }
    config
}

#[test]
fn saves_the_journal() {
    let root = tempfile::tempdir().unwrap();
    let config = layout(
        root.path(),
        "2\n",
        &[
            ("prog_02.txt", "P2\nB=2\n"),
            ("prog_01.txt", "P1\nA=1\nCOM\nCOM\n"),
            ("prog_03.txt", ""),
        ],
    );

    let path = crate::run(&config).unwrap();

    assert!(path.starts_with(&config.logs_dir));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "Carregando P1\n\
         Carregando P2\n\
         Executando P1\n\
         Interrompendo P1 após 2 instruções\n\
         Executando P2\n\
         P2 terminado. A=0. B=2. C=0. D=0\n\
         Executando P1\n\
         P1 terminado. A=1. B=0. C=0. D=0\n\
         MÉDIA DE TROCAS: 1.50\n\
         MÉDIA DE INSTRUÇÕES: 1.33\n\
         QUANTUM: 2\n"
    );
}

#[test]
fn aborted_run_still_saves_the_journal() {
    let root = tempfile::tempdir().unwrap();
    let config = layout(root.path(), "4", &[("bad.txt", "BAD\nA=1\nJMP\n")]);

    let error = crate::run(&config).unwrap_err();
    assert!(error.downcast_ref::<SchedulerError>().is_some());

    let logs: Vec<_> = fs::read_dir(&config.logs_dir).unwrap().collect();
    assert_eq!(logs.len(), 1);
    let journal = fs::read_to_string(logs[0].as_ref().unwrap().path()).unwrap();
    let failure = "[ERRO] process 1 (BAD) failed at instruction 1: unknown instruction `JMP`\n";
    assert!(journal.ends_with(failure));
    assert!(!journal.contains("terminado"));
}

#[test]
fn malformed_quantum_stops_before_scheduling() {
    let root = tempfile::tempdir().unwrap();
    let config = layout(root.path(), "two", &[("p.txt", "P\nCOM\n")]);

    let error = crate::run(&config).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::QuantumMalformed { .. })
    ));
    assert!(!config.logs_dir.exists());
}
