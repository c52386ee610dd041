//! The 6502 pin bundle.
//!
//! The CPU sees the outside world only through these lines. All control
//! signals are active-high here, whatever their polarity on the real chip.

/// Address, data and control lines exchanged with the CPU every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pins {
    /// Address bus, driven by the CPU.
    pub address: u16,
    /// Data bus. Driven by the CPU on write cycles, by memory on reads.
    pub data: u8,
    /// Read/write line: false = read, true = write.
    pub rw: bool,
    /// High exactly on opcode-fetch cycles.
    pub sync: bool,
    /// Interrupt request (level-triggered).
    pub irq: bool,
    /// Non-maskable interrupt (edge-triggered on assertion).
    pub nmi: bool,
    /// Reset request, recognised at the next opcode fetch.
    pub res: bool,
    /// Ready. While asserted the CPU stalls on read cycles.
    pub rdy: bool,
}

impl Pins {
    /// Pins as seen right after power-on: SYNC and RES asserted, so the
    /// first tick enters the reset sequence.
    #[must_use]
    pub const fn power_on() -> Self {
        Self {
            address: 0,
            data: 0,
            rw: false,
            sync: true,
            irq: false,
            nmi: false,
            res: true,
            rdy: false,
        }
    }

    /// True if the CPU is driving the data bus this cycle.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        self.rw
    }

    /// Put an address on the bus.
    pub fn set_address(&mut self, address: u16) {
        self.address = address;
    }

    /// Put an address and a data byte on the bus.
    pub fn set_address_data(&mut self, address: u16, data: u8) {
        self.address = address;
        self.data = data;
    }

    /// Put a data byte on the bus.
    pub fn set_data(&mut self, data: u8) {
        self.data = data;
    }

    /// The byte currently on the data bus.
    #[must_use]
    pub const fn get_data(&self) -> u8 {
        self.data
    }

    /// Mark this cycle as a write.
    pub fn write(&mut self) {
        self.rw = true;
    }

    /// Mark this cycle as a read.
    pub fn read(&mut self) {
        self.rw = false;
    }

    /// Drive an opcode fetch from `pc`.
    pub fn fetch(&mut self, pc: u16) {
        self.address = pc;
        self.sync = true;
    }
}
