//! Cycle-accurate, pin-level MOS 6502 CPU core.
//!
//! The CPU is a pure function of its internal state and the pins handed to
//! it each cycle: `tick()` consumes one cycle's pins and returns the pins
//! for the next bus transaction. Memory, I/O and interrupt sources live
//! outside the core. [`System`] is the smallest board that wires a core to
//! an [`emu_core::Bus`].
//!
//! All 256 opcodes are implemented with NMOS timing, including the
//! undocumented ones and the twelve JAM encodings.
//!
//! ```no_run
//! use emu_core::SimpleBus;
//! use mos_6502::{Mos6502, System};
//!
//! let mut bus = SimpleBus::new();
//! bus.load(0xFFFC, &[0x00, 0x80]);
//! let mut system = System::new(Mos6502::new(), bus);
//! system.step_instruction(); // reset sequence
//! ```

mod addressing;
mod alu;
mod config;
mod cpu;
mod decode;
mod error;
pub mod flags;
pub mod interrupt;
mod pins;
mod registers;
mod system;

pub use config::Variant;
pub use cpu::Mos6502;
pub use decode::{AddrMode, INSTRUCTIONS, Instruction, MemAccess, Mnemonic, decode};
pub use error::{Error, Result};
pub use flags::Status;
pub use interrupt::Interrupts;
pub use pins::Pins;
pub use registers::Registers;
pub use system::System;
