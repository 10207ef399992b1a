use core::module_path;
use function_name::named;

use super::{run, script};

#[test]
#[named]
pub fn every_process_blocked() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        2,
        vec![script("IO1", &["E/S", "A=1"]), script("IO2", &["E/S", "B=2"])],
    )
    .unwrap();
}

#[test]
#[named]
pub fn io_between_compute() {
    let summary = run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        2,
        vec![
            script("CPU", &["COM", "COM", "COM", "COM", "COM"]),
            script("IO", &["A=1", "E/S", "B=2", "E/S", "C=3"]),
        ],
    )
    .unwrap();

    assert_eq!(summary.average_switches, 3.0);
    assert!((summary.average_instructions - 8.0 / 6.0).abs() < 1e-9);
}
