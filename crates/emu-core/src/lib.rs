//! Core traits and types for cycle-accurate emulation.
//!
//! A CPU core advances one clock cycle per `tick()` and talks to the outside
//! world only through its pins. Memory and peripherals live behind [`Bus`].

mod bus;
mod cpu;
mod observable;
mod tickable;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
