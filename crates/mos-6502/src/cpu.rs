//! 6502 CPU implementation.
//!
//! Pin-level and cycle-accurate: each `tick()` is one clock cycle and one
//! bus transaction. The CPU never touches memory itself. It receives the
//! pins (with the data bus filled in by whoever serviced the previous
//! cycle) and returns the pins for the next one.
//!
//! Execution state is a single instruction register, `opcode << 3 | step`.
//! The step counts up each tick and the whole register is reloaded from
//! the data bus on SYNC cycles.

use emu_core::{Cpu, Observable, Value};
use log::{debug, trace, warn};

use crate::alu;
use crate::decode::{Instruction, Mnemonic, INSTRUCTIONS};
use crate::flags::{C, D, I, N, V, Z};
use crate::interrupt::Interrupts;
use crate::{Pins, Registers, Status, Variant};

/// The MOS 6502 CPU.
#[derive(Debug, Clone)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,

    /// Instruction register: opcode in bits 3..11, step in bits 0..3.
    pub(crate) ir: u16,

    /// ADL/ADH scratch latch for partial addresses and RMW operands.
    pub(crate) ad: u16,

    /// IRQ detection history, one bit per cycle.
    irq_pip: u16,

    /// NMI edge history, one bit per cycle.
    nmi_pip: u16,

    /// NMI level on the previous tick, for edge detection.
    prev_nmi: bool,

    /// Interrupts recognised at the last opcode fetch.
    pending: Interrupts,

    /// Set once a JAM opcode has frozen the bus.
    halted: bool,

    variant: Variant,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create a stock NMOS 6502 in power-on state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_variant(Variant::default())
    }

    /// Create a CPU of the given variant in power-on state.
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            regs: Registers::new(),
            ir: 0,
            ad: 0,
            irq_pip: 0,
            nmi_pip: 0,
            prev_nmi: false,
            pending: Interrupts::empty(),
            halted: false,
            variant,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Pins to feed the first tick after power-on. RES and SYNC are high,
    /// so the CPU runs the reset sequence and jumps through $FFFC.
    #[must_use]
    pub fn power_on_pins(&self) -> Pins {
        Pins::power_on()
    }

    /// Skip the reset sequence and start fetching at `pc`.
    ///
    /// Registers other than PC are left alone, which lets tests set up
    /// state before the first instruction.
    pub fn fetch_at(&mut self, pc: u16) -> Pins {
        self.regs.pc = pc;
        self.pending = Interrupts::empty();
        self.halted = false;
        let mut pins = Pins::default();
        pins.fetch(pc);
        pins
    }

    /// Return to power-on state, keeping the variant.
    pub fn reset(&mut self) -> Pins {
        *self = Self::with_variant(self.variant);
        self.power_on_pins()
    }

    /// The raw instruction register.
    #[must_use]
    pub fn ir(&self) -> u16 {
        self.ir
    }

    /// Opcode currently executing.
    #[must_use]
    pub fn opcode(&self) -> u8 {
        (self.ir >> 3) as u8
    }

    /// Cycle within the current instruction, counted from the cycle after
    /// the opcode fetch.
    #[must_use]
    pub fn step(&self) -> u8 {
        (self.ir & 7) as u8
    }

    /// Decoded form of the current opcode.
    #[must_use]
    pub fn instruction(&self) -> &'static Instruction {
        &INSTRUCTIONS[usize::from(self.opcode())]
    }

    /// Interrupts being serviced by the current BRK sequence.
    #[must_use]
    pub fn pending_interrupts(&self) -> Interrupts {
        self.pending
    }

    /// True once a JAM opcode has locked up the CPU.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Advance one clock cycle.
    pub fn tick(&mut self, mut pins: Pins) -> Pins {
        // NMI latches on the rising edge, IRQ on level while I is clear.
        if pins.nmi && !self.prev_nmi {
            self.nmi_pip |= 1;
        }
        if pins.irq && !self.regs.p.is_set(I) {
            self.irq_pip |= 1;
        }
        self.prev_nmi = pins.nmi;

        // RDY only stalls read cycles. IRQ history keeps ageing.
        if pins.rdy && !pins.rw {
            self.irq_pip <<= 1;
            return pins;
        }

        if pins.sync {
            self.latch_opcode(&mut pins);
        }

        pins.read();
        self.execute(&mut pins);
        self.ir = self.ir.wrapping_add(1);
        self.irq_pip <<= 1;
        self.nmi_pip <<= 1;
        pins
    }

    // ========================================================================
    // Sequencing
    // ========================================================================

    /// Load the opcode on the data bus, or divert to the interrupt
    /// sequence if an interrupt is due.
    fn latch_opcode(&mut self, pins: &mut Pins) {
        self.ir = u16::from(pins.data) << 3;
        pins.sync = false;

        if self.irq_pip & 4 != 0 {
            self.pending |= Interrupts::IRQ;
        }
        if self.nmi_pip & 0xFFFC != 0 {
            self.pending |= Interrupts::NMI;
        }
        if pins.res {
            self.pending |= Interrupts::RESET;
        }
        self.irq_pip &= 3;
        self.nmi_pip &= 3;

        if self.pending.is_empty() {
            self.regs.pc = self.regs.pc.wrapping_add(1);
            trace!(
                "{:04X}  {:02X}  {}",
                pins.address,
                pins.data,
                INSTRUCTIONS[usize::from(pins.data)]
            );
        } else {
            // The fetched byte is discarded and PC stays on it.
            self.ir = 0;
            pins.res = false;
            debug!(
                "{:?} recognised at ${:04X}",
                self.pending, self.regs.pc
            );
        }
    }

    /// Run one step of the current instruction.
    fn execute(&mut self, pins: &mut Pins) {
        let inst = *self.instruction();
        let step = self.step();

        if inst.mnemonic == Mnemonic::Jam {
            self.jam(step, pins);
            return;
        }

        let addr_steps = inst.mode.steps();
        let body_steps = inst.body_steps();

        if step < addr_steps {
            self.address_step(inst.mode, inst.access, step, pins);
            if inst.mnemonic.is_store() && step + 1 == addr_steps {
                self.store(inst.mnemonic, pins);
            }
        } else if step < addr_steps + body_steps {
            self.body(inst, step - addr_steps, pins);
        }

        let last = addr_steps + body_steps - 1;
        let fetch_step = if inst.fetch_is_fused() { last } else { last + 1 };
        if step == fetch_step {
            pins.fetch(self.regs.pc);
        }
    }

    /// JAM: one dummy read, then the bus freezes at $FFFF/$FF forever.
    fn jam(&mut self, step: u8, pins: &mut Pins) {
        if step == 0 {
            pins.set_address(self.regs.pc);
            return;
        }
        pins.set_address_data(0xFFFF, 0xFF);
        self.ir = self.ir.wrapping_sub(1);
        if !self.halted {
            self.halted = true;
            warn!(
                "CPU jammed by opcode ${:02X} at ${:04X}",
                self.opcode(),
                self.regs.pc.wrapping_sub(1)
            );
        }
    }

    fn decimal(&self) -> bool {
        self.variant.has_decimal_mode() && self.regs.p.is_set(D)
    }

    // ========================================================================
    // Instruction bodies
    // ========================================================================

    /// Drive the data bus for a store on its final addressing cycle.
    fn store(&mut self, mnemonic: Mnemonic, pins: &mut Pins) {
        // Unstable stores AND the value with the target high byte plus one.
        let high = ((pins.address >> 8) as u8).wrapping_add(1);
        let regs = &mut self.regs;
        let value = match mnemonic {
            Mnemonic::Sta => regs.a,
            Mnemonic::Stx => regs.x,
            Mnemonic::Sty => regs.y,
            Mnemonic::Sax => regs.a & regs.x,
            Mnemonic::Sha => regs.a & regs.x & high,
            Mnemonic::Shx => regs.x & high,
            Mnemonic::Shy => regs.y & high,
            Mnemonic::Shs => {
                regs.s = regs.a & regs.x;
                regs.s & high
            }
            _ => return,
        };
        pins.set_data(value);
        pins.write();
    }

    /// Run body step `step` (counted from the end of addressing).
    fn body(&mut self, inst: Instruction, step: u8, pins: &mut Pins) {
        let data = pins.data;
        let decimal = self.decimal();
        let regs = &mut self.regs;

        match inst.mnemonic {
            Mnemonic::Brk => self.interrupt_sequence(step, pins),
            Mnemonic::Jsr => self.jsr(step, pins),
            Mnemonic::Rts => self.rts(step, pins),
            Mnemonic::Rti => self.rti(step, pins),
            Mnemonic::Jmp => self.jmp(step, pins),
            Mnemonic::JmpIndirect => self.jmp_indirect(step, pins),
            Mnemonic::Php => {
                let addr = regs.push();
                pins.set_address_data(addr, regs.p.to_byte_brk());
                pins.write();
            }
            Mnemonic::Pha => {
                let addr = regs.push();
                pins.set_address_data(addr, regs.a);
                pins.write();
            }
            Mnemonic::Plp | Mnemonic::Pla => match step {
                0 => pins.set_address(regs.pull()),
                1 => pins.set_address(regs.stack_addr()),
                _ => {
                    if inst.mnemonic == Mnemonic::Plp {
                        regs.p = Status::from_byte(data);
                    } else {
                        regs.a = data;
                        regs.p.update_nz(data);
                    }
                }
            },
            m if m.is_branch() => self.branch(m, step, pins),

            // Read-modify-write: dummy write of the unmodified value, then
            // the real write.
            Mnemonic::Asl
            | Mnemonic::Lsr
            | Mnemonic::Rol
            | Mnemonic::Ror
            | Mnemonic::Inc
            | Mnemonic::Dec
            | Mnemonic::Slo
            | Mnemonic::Rla
            | Mnemonic::Sre
            | Mnemonic::Rra
            | Mnemonic::Dcp
            | Mnemonic::Isb
                if inst.body_steps() == 2 =>
            {
                if step == 0 {
                    self.ad = u16::from(data);
                    pins.write();
                } else {
                    let value = self.modify(inst.mnemonic, self.ad as u8, decimal);
                    pins.set_data(value);
                    pins.write();
                }
            }

            // Accumulator shifts.
            Mnemonic::Asl => regs.a = alu::asl(regs.a, &mut regs.p),
            Mnemonic::Lsr => regs.a = alu::lsr(regs.a, &mut regs.p),
            Mnemonic::Rol => regs.a = alu::rol(regs.a, &mut regs.p),
            Mnemonic::Ror => regs.a = alu::ror(regs.a, &mut regs.p),

            Mnemonic::Lda => {
                regs.a = data;
                regs.p.update_nz(data);
            }
            Mnemonic::Ldx => {
                regs.x = data;
                regs.p.update_nz(data);
            }
            Mnemonic::Ldy => {
                regs.y = data;
                regs.p.update_nz(data);
            }
            Mnemonic::Lax => {
                regs.a = data;
                regs.x = data;
                regs.p.update_nz(data);
            }
            Mnemonic::Ora => {
                regs.a |= data;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::And => {
                regs.a &= data;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Eor => {
                regs.a ^= data;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Adc => regs.a = alu::adc(regs.a, data, &mut regs.p, decimal),
            Mnemonic::Sbc => regs.a = alu::sbc(regs.a, data, &mut regs.p, decimal),
            Mnemonic::Cmp => alu::compare(regs.a, data, &mut regs.p),
            Mnemonic::Cpx => alu::compare(regs.x, data, &mut regs.p),
            Mnemonic::Cpy => alu::compare(regs.y, data, &mut regs.p),
            Mnemonic::Bit => alu::bit(regs.a, data, &mut regs.p),

            Mnemonic::Inx => {
                regs.x = regs.x.wrapping_add(1);
                regs.p.update_nz(regs.x);
            }
            Mnemonic::Iny => {
                regs.y = regs.y.wrapping_add(1);
                regs.p.update_nz(regs.y);
            }
            Mnemonic::Dex => {
                regs.x = regs.x.wrapping_sub(1);
                regs.p.update_nz(regs.x);
            }
            Mnemonic::Dey => {
                regs.y = regs.y.wrapping_sub(1);
                regs.p.update_nz(regs.y);
            }
            Mnemonic::Tax => {
                regs.x = regs.a;
                regs.p.update_nz(regs.x);
            }
            Mnemonic::Tay => {
                regs.y = regs.a;
                regs.p.update_nz(regs.y);
            }
            Mnemonic::Txa => {
                regs.a = regs.x;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Tya => {
                regs.a = regs.y;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Tsx => {
                regs.x = regs.s;
                regs.p.update_nz(regs.x);
            }
            Mnemonic::Txs => regs.s = regs.x,

            Mnemonic::Clc => regs.p.clear(C),
            Mnemonic::Sec => regs.p.set(C),
            Mnemonic::Cli => regs.p.clear(I),
            Mnemonic::Sei => regs.p.set(I),
            Mnemonic::Cld => regs.p.clear(D),
            Mnemonic::Sed => regs.p.set(D),
            Mnemonic::Clv => regs.p.clear(V),

            // Undocumented immediates.
            Mnemonic::Anc => {
                regs.a &= data;
                regs.p.update_nz(regs.a);
                regs.p.set_if(C, regs.a & 0x80 != 0);
            }
            Mnemonic::Asr => {
                regs.a &= data;
                regs.a = alu::lsr(regs.a, &mut regs.p);
            }
            Mnemonic::Arr => {
                regs.a &= data;
                regs.a = alu::arr(regs.a, &mut regs.p, decimal);
            }
            Mnemonic::Ane => {
                regs.a = (regs.a | 0xEE) & regs.x & data;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Lxa => {
                regs.a = (regs.a | 0xEE) & data;
                regs.x = regs.a;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Las => {
                regs.a = data & regs.s;
                regs.x = regs.a;
                regs.s = regs.a;
                regs.p.update_nz(regs.a);
            }
            Mnemonic::Sbx => regs.x = alu::sbx(regs.a, regs.x, data, &mut regs.p),

            _ => {}
        }
    }

    /// Compute the written-back value of a read-modify-write instruction.
    /// The combined undocumented ops also fold it into A.
    fn modify(&mut self, mnemonic: Mnemonic, value: u8, decimal: bool) -> u8 {
        let regs = &mut self.regs;
        match mnemonic {
            Mnemonic::Asl => alu::asl(value, &mut regs.p),
            Mnemonic::Lsr => alu::lsr(value, &mut regs.p),
            Mnemonic::Rol => alu::rol(value, &mut regs.p),
            Mnemonic::Ror => alu::ror(value, &mut regs.p),
            Mnemonic::Inc => {
                let result = value.wrapping_add(1);
                regs.p.update_nz(result);
                result
            }
            Mnemonic::Dec => {
                let result = value.wrapping_sub(1);
                regs.p.update_nz(result);
                result
            }
            Mnemonic::Slo => {
                let result = alu::asl(value, &mut regs.p);
                regs.a |= result;
                regs.p.update_nz(regs.a);
                result
            }
            Mnemonic::Rla => {
                let result = alu::rol(value, &mut regs.p);
                regs.a &= result;
                regs.p.update_nz(regs.a);
                result
            }
            Mnemonic::Sre => {
                let result = alu::lsr(value, &mut regs.p);
                regs.a ^= result;
                regs.p.update_nz(regs.a);
                result
            }
            Mnemonic::Rra => {
                let result = alu::ror(value, &mut regs.p);
                regs.a = alu::adc(regs.a, result, &mut regs.p, decimal);
                result
            }
            Mnemonic::Dcp => {
                let result = value.wrapping_sub(1);
                alu::compare(regs.a, result, &mut regs.p);
                result
            }
            Mnemonic::Isb => {
                let result = value.wrapping_add(1);
                regs.a = alu::sbc(regs.a, result, &mut regs.p, decimal);
                result
            }
            _ => value,
        }
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// Shared BRK / IRQ / NMI / RESET sequence, six cycles after the
    /// addressing dummy read.
    fn interrupt_sequence(&mut self, step: u8, pins: &mut Pins) {
        let pending = self.pending;
        match step {
            0 => {
                if !pending.keeps_pc() {
                    self.regs.pc = self.regs.pc.wrapping_add(1);
                }
                let addr = self.regs.push();
                pins.set_address_data(addr, (self.regs.pc >> 8) as u8);
                if !pending.suppresses_writes() {
                    pins.write();
                }
            }
            1 => {
                let addr = self.regs.push();
                pins.set_address_data(addr, self.regs.pc as u8);
                if !pending.suppresses_writes() {
                    pins.write();
                }
            }
            2 => {
                let status = if pending.is_hardware() {
                    self.regs.p.to_byte_irq()
                } else {
                    self.regs.p.to_byte_brk()
                };
                let addr = self.regs.push();
                pins.set_address_data(addr, status);
                if !pending.suppresses_writes() {
                    pins.write();
                }
                self.ad = pending.vector();
            }
            3 => {
                pins.set_address(self.ad);
                self.ad = self.ad.wrapping_add(1);
                self.regs.p.set(I);
                self.pending = Interrupts::empty();
            }
            4 => {
                pins.set_address(self.ad);
                self.ad = u16::from(pins.data);
            }
            _ => self.regs.pc = (u16::from(pins.data) << 8) | self.ad,
        }
    }

    fn jsr(&mut self, step: u8, pins: &mut Pins) {
        match step {
            0 => {
                pins.set_address(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(1);
            }
            // Dummy stack read while the low target byte sits in ADL.
            1 => {
                pins.set_address(self.regs.stack_addr());
                self.ad = u16::from(pins.data);
            }
            2 => {
                let addr = self.regs.push();
                pins.set_address_data(addr, (self.regs.pc >> 8) as u8);
                pins.write();
            }
            3 => {
                let addr = self.regs.push();
                pins.set_address_data(addr, self.regs.pc as u8);
                pins.write();
            }
            4 => pins.set_address(self.regs.pc),
            _ => self.regs.pc = (u16::from(pins.data) << 8) | self.ad,
        }
    }

    fn rts(&mut self, step: u8, pins: &mut Pins) {
        match step {
            0 | 1 => pins.set_address(self.regs.pull()),
            2 => {
                pins.set_address(self.regs.stack_addr());
                self.ad = u16::from(pins.data);
            }
            3 => {
                self.regs.pc = (u16::from(pins.data) << 8) | self.ad;
                pins.set_address(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(1);
            }
            _ => {}
        }
    }

    fn rti(&mut self, step: u8, pins: &mut Pins) {
        match step {
            0 | 1 => pins.set_address(self.regs.pull()),
            2 => {
                pins.set_address(self.regs.pull());
                self.regs.p = Status::from_byte(pins.data);
            }
            3 => {
                pins.set_address(self.regs.stack_addr());
                self.ad = u16::from(pins.data);
            }
            _ => self.regs.pc = (u16::from(pins.data) << 8) | self.ad,
        }
    }

    fn jmp(&mut self, step: u8, pins: &mut Pins) {
        match step {
            0 => {
                pins.set_address(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(1);
            }
            1 => {
                pins.set_address(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(1);
                self.ad = u16::from(pins.data);
            }
            _ => self.regs.pc = (u16::from(pins.data) << 8) | self.ad,
        }
    }

    /// JMP ($nnnn). The pointer high byte never carries out of its page.
    fn jmp_indirect(&mut self, step: u8, pins: &mut Pins) {
        match step {
            0 | 1 => self.jmp(step, pins),
            2 => {
                self.ad |= u16::from(pins.data) << 8;
                pins.set_address(self.ad);
            }
            3 => {
                pins.set_address((self.ad & 0xFF00) | (self.ad.wrapping_add(1) & 0x00FF));
                self.ad = u16::from(pins.data);
            }
            _ => self.regs.pc = (u16::from(pins.data) << 8) | self.ad,
        }
    }

    fn branch(&mut self, mnemonic: Mnemonic, step: u8, pins: &mut Pins) {
        match step {
            0 => {
                pins.set_address(self.regs.pc);
                let offset = pins.data as i8;
                self.ad = self.regs.pc.wrapping_add_signed(i16::from(offset));
                if !self.branch_taken(mnemonic) {
                    pins.fetch(self.regs.pc);
                }
            }
            1 => {
                let pc = self.regs.pc;
                pins.set_address((pc & 0xFF00) | (self.ad & 0x00FF));
                if (self.ad & 0xFF00) == (pc & 0xFF00) {
                    // A taken branch that stays in its page delays
                    // interrupt recognition by one instruction.
                    self.regs.pc = self.ad;
                    self.irq_pip >>= 1;
                    self.nmi_pip >>= 1;
                    pins.fetch(self.regs.pc);
                }
            }
            _ => self.regs.pc = self.ad,
        }
    }

    fn branch_taken(&self, mnemonic: Mnemonic) -> bool {
        let p = self.regs.p;
        match mnemonic {
            Mnemonic::Bpl => !p.is_set(N),
            Mnemonic::Bmi => p.is_set(N),
            Mnemonic::Bvc => !p.is_set(V),
            Mnemonic::Bvs => p.is_set(V),
            Mnemonic::Bcc => !p.is_set(C),
            Mnemonic::Bcs => p.is_set(C),
            Mnemonic::Bne => !p.is_set(Z),
            Mnemonic::Beq => p.is_set(Z),
            _ => false,
        }
    }
}

impl Cpu for Mos6502 {
    type Pins = Pins;
    type Registers = Registers;

    fn tick(&mut self, pins: Pins) -> Pins {
        Mos6502::tick(self, pins)
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn reset(&mut self) -> Pins {
        Mos6502::reset(self)
    }
}

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "s" | "sp" => Some(self.regs.s.into()),
            "p" | "status" => Some(self.regs.p.0.into()),
            "flags.c" | "c" => Some(self.regs.p.is_set(C).into()),
            "flags.z" | "z" => Some(self.regs.p.is_set(Z).into()),
            "flags.i" | "i" => Some(self.regs.p.is_set(I).into()),
            "flags.d" | "d" => Some(self.regs.p.is_set(D).into()),
            "flags.v" | "v" => Some(self.regs.p.is_set(V).into()),
            "flags.n" | "n" => Some(self.regs.p.is_set(N).into()),
            "ir" => Some(self.ir.into()),
            "opcode" => Some(self.opcode().into()),
            "step" => Some(self.step().into()),
            "instruction" => Some(self.instruction().to_string().into()),
            "variant" => Some(self.variant.to_string().into()),
            "halted" => Some(self.halted.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc",
            "a",
            "x",
            "y",
            "s",
            "p",
            "flags.c",
            "flags.z",
            "flags.i",
            "flags.d",
            "flags.v",
            "flags.n",
            "ir",
            "opcode",
            "step",
            "instruction",
            "variant",
            "halted",
        ]
    }
}
