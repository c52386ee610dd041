//! CPU core trait.

/// A pin-level CPU core.
///
/// The CPU owns its registers and nothing else. Each call to `tick` takes
/// the pin state the outside world presents (data bus on read cycles,
/// interrupt and ready lines) and returns the pins the CPU drives for the
/// next bus transaction. The caller services that transaction before the
/// next tick.
pub trait Cpu {
    /// The pin bundle exchanged every cycle.
    type Pins: Copy;

    /// The type used for register inspection.
    type Registers;

    /// Advance the CPU by exactly one clock cycle.
    fn tick(&mut self, pins: Self::Pins) -> Self::Pins;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU has stopped fetching instructions.
    fn is_halted(&self) -> bool;

    /// Return to power-on state. The returned pins start the reset sequence.
    fn reset(&mut self) -> Self::Pins;
}
