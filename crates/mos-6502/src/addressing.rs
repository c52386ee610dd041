//! Addressing-phase micro-ops.
//!
//! Each addressing mode is a short run of cycles that leaves the operand
//! address on the bus. Cycles are numbered from zero, starting with the
//! cycle after the opcode fetch. The ADL/ADH scratch latch carries partial
//! addresses between cycles.

use crate::decode::{AddrMode, MemAccess};
use crate::{Mos6502, Pins};

impl AddrMode {
    /// Number of addressing cycles before the instruction body starts.
    #[must_use]
    pub const fn steps(self) -> u8 {
        match self {
            Self::Jmp | Self::Jsr | Self::Invalid => 0,
            Self::Implied | Self::Immediate => 1,
            Self::ZeroPage => 2,
            Self::ZeroPageX | Self::ZeroPageY | Self::Absolute => 3,
            Self::AbsoluteX | Self::AbsoluteY => 4,
            Self::IndexedIndirect | Self::IndirectIndexed => 5,
        }
    }

    /// Indexed reads skip the high-byte fixup cycle when no page is crossed.
    #[must_use]
    pub const fn may_skip_fixup(self, access: MemAccess) -> bool {
        matches!(access, MemAccess::Read)
            && matches!(
                self,
                Self::AbsoluteX | Self::AbsoluteY | Self::IndirectIndexed
            )
    }
}

impl Mos6502 {
    /// Run addressing cycle `step` for `mode`.
    pub(crate) fn address_step(
        &mut self,
        mode: AddrMode,
        access: MemAccess,
        step: u8,
        pins: &mut Pins,
    ) {
        let data = u16::from(pins.data);
        match (mode, step) {
            (AddrMode::Implied, 0) => pins.set_address(self.regs.pc),
            (
                AddrMode::Immediate
                | AddrMode::ZeroPage
                | AddrMode::ZeroPageX
                | AddrMode::ZeroPageY
                | AddrMode::Absolute
                | AddrMode::AbsoluteX
                | AddrMode::AbsoluteY
                | AddrMode::IndexedIndirect
                | AddrMode::IndirectIndexed,
                0,
            ) => self.operand_byte(pins),

            (AddrMode::ZeroPage, 1) => pins.set_address(data),

            // Zero page indexed: dummy read of the unindexed address, then
            // the indexed one with the carry dropped.
            (AddrMode::ZeroPageX | AddrMode::ZeroPageY, 1) => {
                self.ad = data;
                pins.set_address(self.ad);
            }
            (AddrMode::ZeroPageX, 2) => {
                pins.set_address(self.ad.wrapping_add(u16::from(self.regs.x)) & 0x00FF);
            }
            (AddrMode::ZeroPageY, 2) => {
                pins.set_address(self.ad.wrapping_add(u16::from(self.regs.y)) & 0x00FF);
            }

            (AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY, 1) => {
                self.operand_byte(pins);
                self.ad = data;
            }
            (AddrMode::Absolute, 2) => pins.set_address((data << 8) | self.ad),

            (AddrMode::AbsoluteX, 2) => {
                self.ad |= data << 8;
                self.indexed_fixup(self.regs.x, access, pins);
            }
            (AddrMode::AbsoluteY, 2) => {
                self.ad |= data << 8;
                self.indexed_fixup(self.regs.y, access, pins);
            }
            (AddrMode::AbsoluteX, 3) => {
                pins.set_address(self.ad.wrapping_add(u16::from(self.regs.x)));
            }
            (AddrMode::AbsoluteY, 3) => {
                pins.set_address(self.ad.wrapping_add(u16::from(self.regs.y)));
            }

            // ($nn,X)
            (AddrMode::IndexedIndirect | AddrMode::IndirectIndexed, 1) => {
                self.ad = data;
                pins.set_address(self.ad);
            }
            (AddrMode::IndexedIndirect, 2) => {
                self.ad = self.ad.wrapping_add(u16::from(self.regs.x)) & 0x00FF;
                pins.set_address(self.ad);
            }
            (AddrMode::IndexedIndirect, 3) => {
                pins.set_address(self.ad.wrapping_add(1) & 0x00FF);
                self.ad = data;
            }
            (AddrMode::IndexedIndirect, 4) => pins.set_address((data << 8) | self.ad),

            // ($nn),Y
            (AddrMode::IndirectIndexed, 2) => {
                pins.set_address(self.ad.wrapping_add(1) & 0x00FF);
                self.ad = data;
            }
            (AddrMode::IndirectIndexed, 3) => {
                self.ad |= data << 8;
                self.indexed_fixup(self.regs.y, access, pins);
            }
            (AddrMode::IndirectIndexed, 4) => {
                pins.set_address(self.ad.wrapping_add(u16::from(self.regs.y)));
            }

            _ => {}
        }
    }

    /// Read the next operand byte and advance PC.
    fn operand_byte(&mut self, pins: &mut Pins) {
        pins.set_address(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
    }

    /// Put the indexed address with an unfixed high byte on the bus. Reads
    /// that stay in the page are already correct, so the fixup cycle is
    /// skipped.
    fn indexed_fixup(&mut self, index: u8, access: MemAccess, pins: &mut Pins) {
        let effective = self.ad.wrapping_add(u16::from(index));
        pins.set_address((self.ad & 0xFF00) | (effective & 0x00FF));
        if matches!(access, MemAccess::Read) && (self.ad & 0xFF00) == (effective & 0xFF00) {
            self.ir += 1;
        }
    }
}
