//! Minimal board: a CPU wired straight to a bus.
//!
//! Services one bus transaction per tick. Interrupt and ready lines are
//! left to the caller, who can set them on `pins` between steps.

use emu_core::{Bus, Tickable, Ticks};

use crate::{Error, Mos6502, Pins, Result};

/// A 6502 attached to a [`Bus`].
pub struct System<B: Bus> {
    pub cpu: Mos6502,
    /// Pins after the last serviced transaction. Set `irq`, `nmi`, `res`
    /// or `rdy` here to drive the CPU's inputs.
    pub pins: Pins,
    pub bus: B,
    cycles: Ticks,
}

impl<B: Bus> System<B> {
    /// Power on. The first step runs the reset sequence.
    pub fn new(cpu: Mos6502, bus: B) -> Self {
        let pins = cpu.power_on_pins();
        let mut system = Self {
            cpu,
            pins,
            bus,
            cycles: Ticks::ZERO,
        };
        system.service();
        system
    }

    /// Drop whatever is in flight and fetch the next opcode from `pc`.
    pub fn start_at(&mut self, pc: u16) {
        self.pins = self.cpu.fetch_at(pc);
        self.service();
    }

    /// Copy `program` into memory at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProgramTooLarge`] if the program would run past
    /// $FFFF.
    pub fn load(&mut self, origin: u16, program: &[u8]) -> Result<()> {
        if usize::from(origin) + program.len() > 0x1_0000 {
            return Err(Error::ProgramTooLarge {
                origin,
                len: program.len(),
            });
        }
        for (address, &byte) in (origin..=u16::MAX).zip(program) {
            self.bus.write(address, byte);
        }
        Ok(())
    }

    /// Run one clock cycle.
    pub fn step(&mut self) {
        self.pins = self.cpu.tick(self.pins);
        self.service();
        self.cycles += Ticks::new(1);
    }

    /// Run until the next opcode fetch and return the cycles taken.
    ///
    /// Returns after a single cycle if the CPU has jammed. Holding RDY
    /// forever never returns.
    pub fn step_instruction(&mut self) -> Ticks {
        let start = self.cycles;
        loop {
            self.step();
            if self.pins.sync || self.cpu.is_halted() {
                break;
            }
        }
        self.cycles - start
    }

    /// Cycles run since power-on.
    #[must_use]
    pub fn cycles(&self) -> Ticks {
        self.cycles
    }

    fn service(&mut self) {
        if self.pins.rw {
            self.bus.write(self.pins.address, self.pins.data);
        } else {
            self.pins.data = self.bus.read(self.pins.address);
        }
    }
}

impl<B: Bus> Tickable for System<B> {
    fn tick(&mut self) {
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::SimpleBus;

    #[test]
    fn boots_through_reset_vector() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFC, &[0x00, 0x80]);
        bus.load(0x8000, &[0xA9, 0x01]);
        let mut system = System::new(Mos6502::new(), bus);

        assert_eq!(system.step_instruction(), Ticks::new(7));
        assert_eq!(system.cpu.regs.pc, 0x8000);
        assert_eq!(system.step_instruction(), Ticks::new(2));
        assert_eq!(system.cpu.regs.a, 0x01);
        assert_eq!(system.cycles(), Ticks::new(9));
    }

    #[test]
    fn tick_n_matches_steps() {
        let mut system = System::new(Mos6502::new(), SimpleBus::new());
        system.load(0x0200, &[0xE8; 8]).unwrap();
        system.start_at(0x0200);
        system.tick_n(Ticks::new(10));
        assert_eq!(system.cpu.regs.x, 5);
    }

    #[test]
    fn load_rejects_overflow() {
        let mut system = System::new(Mos6502::new(), SimpleBus::new());
        assert!(system.load(0xFFFF, &[0xEA]).is_ok());
        let err = system.load(0xFFFF, &[0xEA, 0xEA]).unwrap_err();
        assert!(matches!(err, Error::ProgramTooLarge { origin: 0xFFFF, len: 2 }));
    }
}
