//! Klaus Dormann's 6502 functional and decimal tests.
//!
//! Binaries are assembled with load address $0000 and signal their result
//! by trapping: a branch or jump to itself. Place them in `tests/data/`.

use std::path::Path;

use emu_core::{Bus, SimpleBus};
use mos_6502::{Mos6502, System};

/// Run until the program traps and return the trap address.
fn run_to_trap(system: &mut System<SimpleBus>, limit: u64) -> Option<u16> {
    let mut prev_pc = system.pins.address;
    let mut same_pc_count = 0;

    for instructions in 0..limit {
        system.step_instruction();
        // PC of the instruction about to run is on the bus at each SYNC.
        let pc = system.pins.address;
        if pc == prev_pc {
            same_pc_count += 1;
            if same_pc_count > 2 {
                eprintln!(
                    "Trapped at ${pc:04X} after {instructions} instructions ({} cycles)",
                    system.cycles().get()
                );
                return Some(pc);
            }
        } else {
            same_pc_count = 0;
            prev_pc = pc;
        }
    }
    eprintln!("No trap within {limit} instructions");
    None
}

fn load(name: &str, entry: u16) -> Option<System<SimpleBus>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
    let Ok(binary) = std::fs::read(&path) else {
        eprintln!("{} not found, skipping", path.display());
        return None;
    };
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &binary);
    let mut system = System::new(Mos6502::new(), bus);
    system.start_at(entry);
    Some(system)
}

#[test]
#[ignore = "requires tests/data/6502_functional_test.bin"]
fn dormann_functional() {
    let Some(mut system) = load("6502_functional_test.bin", 0x0400) else {
        return;
    };
    let trap = run_to_trap(&mut system, 100_000_000);
    assert_eq!(trap, Some(0x3469), "functional test failed");
}

#[test]
#[ignore = "requires tests/data/6502_decimal_test.bin"]
fn dormann_decimal() {
    let Some(mut system) = load("6502_decimal_test.bin", 0x0200) else {
        return;
    };
    let trap = run_to_trap(&mut system, 50_000_000);
    assert!(trap.is_some(), "decimal test never finished");
    // $0B holds the error flag.
    let error = system.bus.read(0x000B);
    assert_eq!(error, 0, "decimal test reported an error");
}
