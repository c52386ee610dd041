//! Opcode decoding.
//!
//! The 6502 opcode byte splits into three fields, `aaa bbb cc`. `cc` and
//! `bbb` mostly select the addressing mode and `aaa` the operation, but the
//! encoding is irregular enough that the mnemonic needs a decision tree
//! rather than a straight lookup. Both are evaluated at compile time into
//! [`INSTRUCTIONS`].

use std::fmt;

/// How an instruction computes its operand address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// No operand. The CPU still performs a dummy read at PC.
    Implied,
    /// `#$nn`
    Immediate,
    /// `$nn`
    ZeroPage,
    /// `$nn,X`, wrapping in page zero.
    ZeroPageX,
    /// `$nn,Y`, wrapping in page zero.
    ZeroPageY,
    /// `$nnnn`
    Absolute,
    /// `$nnnn,X`
    AbsoluteX,
    /// `$nnnn,Y`
    AbsoluteY,
    /// `($nn,X)`
    IndexedIndirect,
    /// `($nn),Y`
    IndirectIndexed,
    /// JMP: operand fetch is part of the instruction itself.
    Jmp,
    /// JSR: operand fetch is interleaved with the stack pushes.
    Jsr,
    /// Not a valid encoding. The CPU jams.
    Invalid,
}

impl AddrMode {
    /// Operand syntax as it would appear in a disassembly.
    #[must_use]
    pub const fn syntax(self) -> &'static str {
        match self {
            Self::Implied | Self::Jmp | Self::Jsr => "",
            Self::Immediate => "#",
            Self::ZeroPage => "zp",
            Self::ZeroPageX => "zp,X",
            Self::ZeroPageY => "zp,Y",
            Self::Absolute => "abs",
            Self::AbsoluteX => "abs,X",
            Self::AbsoluteY => "abs,Y",
            Self::IndexedIndirect => "(zp,X)",
            Self::IndirectIndexed => "(zp),Y",
            Self::Invalid => "INVALID",
        }
    }
}

/// What the addressing phase does with memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemAccess {
    None,
    Read,
    Write,
    ReadModifyWrite,
}

/// Every operation the NMOS 6502 can perform, documented or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    JmpIndirect,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented.
    Anc,
    Ane,
    Arr,
    Asr,
    Dcp,
    Isb,
    Jam,
    Las,
    Lax,
    Lxa,
    Rla,
    Rra,
    Sax,
    Sbx,
    Sha,
    Shs,
    Shx,
    Shy,
    Slo,
    Sre,
}

impl Mnemonic {
    /// Upper-case assembler name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adc => "ADC",
            Self::And => "AND",
            Self::Asl => "ASL",
            Self::Bcc => "BCC",
            Self::Bcs => "BCS",
            Self::Beq => "BEQ",
            Self::Bit => "BIT",
            Self::Bmi => "BMI",
            Self::Bne => "BNE",
            Self::Bpl => "BPL",
            Self::Brk => "BRK",
            Self::Bvc => "BVC",
            Self::Bvs => "BVS",
            Self::Clc => "CLC",
            Self::Cld => "CLD",
            Self::Cli => "CLI",
            Self::Clv => "CLV",
            Self::Cmp => "CMP",
            Self::Cpx => "CPX",
            Self::Cpy => "CPY",
            Self::Dec => "DEC",
            Self::Dex => "DEX",
            Self::Dey => "DEY",
            Self::Eor => "EOR",
            Self::Inc => "INC",
            Self::Inx => "INX",
            Self::Iny => "INY",
            Self::Jmp | Self::JmpIndirect => "JMP",
            Self::Jsr => "JSR",
            Self::Lda => "LDA",
            Self::Ldx => "LDX",
            Self::Ldy => "LDY",
            Self::Lsr => "LSR",
            Self::Nop => "NOP",
            Self::Ora => "ORA",
            Self::Pha => "PHA",
            Self::Php => "PHP",
            Self::Pla => "PLA",
            Self::Plp => "PLP",
            Self::Rol => "ROL",
            Self::Ror => "ROR",
            Self::Rti => "RTI",
            Self::Rts => "RTS",
            Self::Sbc => "SBC",
            Self::Sec => "SEC",
            Self::Sed => "SED",
            Self::Sei => "SEI",
            Self::Sta => "STA",
            Self::Stx => "STX",
            Self::Sty => "STY",
            Self::Tax => "TAX",
            Self::Tay => "TAY",
            Self::Tsx => "TSX",
            Self::Txa => "TXA",
            Self::Txs => "TXS",
            Self::Tya => "TYA",
            Self::Anc => "ANC",
            Self::Ane => "ANE",
            Self::Arr => "ARR",
            Self::Asr => "ASR",
            Self::Dcp => "DCP",
            Self::Isb => "ISB",
            Self::Jam => "JAM",
            Self::Las => "LAS",
            Self::Lax => "LAX",
            Self::Lxa => "LXA",
            Self::Rla => "RLA",
            Self::Rra => "RRA",
            Self::Sax => "SAX",
            Self::Sbx => "SBX",
            Self::Sha => "SHA",
            Self::Shs => "SHS",
            Self::Shx => "SHX",
            Self::Shy => "SHY",
            Self::Slo => "SLO",
            Self::Sre => "SRE",
        }
    }

    /// Conditional branches.
    #[must_use]
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::Bpl
                | Self::Bmi
                | Self::Bvc
                | Self::Bvs
                | Self::Bcc
                | Self::Bcs
                | Self::Bne
                | Self::Beq
        )
    }

    /// Instructions whose only work is driving the data bus on the final
    /// addressing cycle.
    #[must_use]
    pub const fn is_store(self) -> bool {
        matches!(
            self,
            Self::Sta
                | Self::Stx
                | Self::Sty
                | Self::Sax
                | Self::Sha
                | Self::Shx
                | Self::Shy
                | Self::Shs
        )
    }

    /// Shift/rotate family, which also exists in an accumulator form.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Asl | Self::Lsr | Self::Rol | Self::Ror)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mode: AddrMode,
    pub access: MemAccess,
    pub mnemonic: Mnemonic,
    undocumented: bool,
}

impl Instruction {
    /// True for opcodes outside the published instruction set.
    #[must_use]
    pub const fn is_undocumented(&self) -> bool {
        self.undocumented
    }

    /// Cycles spent in instruction-specific work after the addressing phase.
    #[must_use]
    pub const fn body_steps(&self) -> u8 {
        match self.mnemonic {
            Mnemonic::Brk | Mnemonic::Jsr => 6,
            Mnemonic::Rts | Mnemonic::Rti | Mnemonic::JmpIndirect => 5,
            Mnemonic::Jmp | Mnemonic::Pla | Mnemonic::Plp => 3,
            Mnemonic::Inc
            | Mnemonic::Dec
            | Mnemonic::Slo
            | Mnemonic::Rla
            | Mnemonic::Sre
            | Mnemonic::Rra
            | Mnemonic::Dcp
            | Mnemonic::Isb
            | Mnemonic::Jam => 2,
            m if m.is_branch() => 3,
            m if m.is_store() => 0,
            m if m.is_shift() && !matches!(self.mode, AddrMode::Implied) => 2,
            _ => 1,
        }
    }

    /// Read and no-access instructions overlap the next opcode fetch with
    /// their last cycle. Writes need a cycle of their own for it.
    #[must_use]
    pub const fn fetch_is_fused(&self) -> bool {
        matches!(self.access, MemAccess::None | MemAccess::Read)
    }

    /// Cycles from opcode fetch to the next opcode fetch, ignoring page
    /// crossings and taken branches. `None` for JAM.
    #[must_use]
    pub const fn base_cycles(&self) -> Option<u8> {
        if matches!(self.mnemonic, Mnemonic::Jam) {
            return None;
        }
        if self.mnemonic.is_branch() {
            return Some(2);
        }
        let mut cycles = self.mode.steps() + self.body_steps();
        if !self.fetch_is_fused() {
            cycles += 1;
        }
        if self.mode.may_skip_fixup(self.access) {
            cycles -= 1;
        }
        Some(cycles)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = match self.mnemonic {
            m if m.is_branch() => "rel",
            Mnemonic::Jmp | Mnemonic::Jsr => "abs",
            Mnemonic::JmpIndirect => "(abs)",
            m if m.is_shift() && matches!(self.mode, AddrMode::Implied) => "A",
            Mnemonic::Jam => "",
            _ => self.mode.syntax(),
        };
        f.write_str(self.mnemonic.name())?;
        if !operand.is_empty() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

use AddrMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Immediate as IMM, Implied as IMP,
    IndexedIndirect as IZX, IndirectIndexed as IZY, Invalid as INV, Jmp as JMP, Jsr as JSR,
    ZeroPage as ZPG, ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use MemAccess::{None as NA, Read as R, ReadModifyWrite as RW, Write as W};

/// `(mode, access)` for every opcode, indexed `[cc][bbb][aaa]`.
#[rustfmt::skip]
const MODES: [[[(AddrMode, MemAccess); 8]; 8]; 4] = [
    // cc = 00
    [
        // ---        BIT         JMP         JMP()       STY         LDY         CPY         CPX
        [(IMP, NA), (JSR, R),  (IMP, R),  (IMP, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R)],
        [(ZPG, R),  (ZPG, R),  (ZPG, R),  (ZPG, R),  (ZPG, W),  (ZPG, R),  (ZPG, R),  (ZPG, R)],
        [(IMP, W),  (IMP, NA), (IMP, W),  (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA)],
        [(ABS, R),  (ABS, R),  (JMP, R),  (JMP, R),  (ABS, W),  (ABS, R),  (ABS, R),  (ABS, R)],
        // relative branches
        [(IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R)],
        [(ZPX, R),  (ZPX, R),  (ZPX, R),  (ZPX, R),  (ZPX, W),  (ZPX, R),  (ZPX, R),  (ZPX, R)],
        [(IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA)],
        [(ABX, R),  (ABX, R),  (ABX, R),  (ABX, R),  (ABX, W),  (ABX, R),  (ABX, R),  (ABX, R)],
    ],
    // cc = 01
    [
        // ORA        AND         EOR         ADC         STA         LDA         CMP         SBC
        [(IZX, R),  (IZX, R),  (IZX, R),  (IZX, R),  (IZX, W),  (IZX, R),  (IZX, R),  (IZX, R)],
        [(ZPG, R),  (ZPG, R),  (ZPG, R),  (ZPG, R),  (ZPG, W),  (ZPG, R),  (ZPG, R),  (ZPG, R)],
        [(IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R)],
        [(ABS, R),  (ABS, R),  (ABS, R),  (ABS, R),  (ABS, W),  (ABS, R),  (ABS, R),  (ABS, R)],
        [(IZY, R),  (IZY, R),  (IZY, R),  (IZY, R),  (IZY, W),  (IZY, R),  (IZY, R),  (IZY, R)],
        [(ZPX, R),  (ZPX, R),  (ZPX, R),  (ZPX, R),  (ZPX, W),  (ZPX, R),  (ZPX, R),  (ZPX, R)],
        [(ABY, R),  (ABY, R),  (ABY, R),  (ABY, R),  (ABY, W),  (ABY, R),  (ABY, R),  (ABY, R)],
        [(ABX, R),  (ABX, R),  (ABX, R),  (ABX, R),  (ABX, W),  (ABX, R),  (ABX, R),  (ABX, R)],
    ],
    // cc = 10
    [
        // ASL        ROL         LSR         ROR         STX         LDX         DEC         INC
        [(INV, RW), (INV, RW), (INV, RW), (INV, RW), (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R)],
        [(ZPG, RW), (ZPG, RW), (ZPG, RW), (ZPG, RW), (ZPG, W),  (ZPG, R),  (ZPG, RW), (ZPG, RW)],
        [(IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA), (IMP, NA)],
        [(ABS, RW), (ABS, RW), (ABS, RW), (ABS, RW), (ABS, W),  (ABS, R),  (ABS, RW), (ABS, RW)],
        [(INV, RW), (INV, RW), (INV, RW), (INV, RW), (INV, W),  (INV, R),  (INV, RW), (INV, RW)],
        [(ZPX, RW), (ZPX, RW), (ZPX, RW), (ZPX, RW), (ZPY, W),  (ZPY, R),  (ZPX, RW), (ZPX, RW)],
        [(IMP, R),  (IMP, R),  (IMP, R),  (IMP, R),  (IMP, NA), (IMP, NA), (IMP, R),  (IMP, R)],
        [(ABX, RW), (ABX, RW), (ABX, RW), (ABX, RW), (ABY, W),  (ABY, R),  (ABX, RW), (ABX, RW)],
    ],
    // cc = 11
    [
        // SLO        RLA         SRE         RRA         SAX         LAX         DCP         ISB
        [(IZX, RW), (IZX, RW), (IZX, RW), (IZX, RW), (IZX, W),  (IZX, R),  (IZX, RW), (IZX, RW)],
        [(ZPG, RW), (ZPG, RW), (ZPG, RW), (ZPG, RW), (ZPG, W),  (ZPG, R),  (ZPG, RW), (ZPG, RW)],
        [(IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R),  (IMM, R)],
        [(ABS, RW), (ABS, RW), (ABS, RW), (ABS, RW), (ABS, W),  (ABS, R),  (ABS, RW), (ABS, RW)],
        [(IZY, RW), (IZY, RW), (IZY, RW), (IZY, RW), (IZY, RW), (IZY, R),  (IZY, RW), (IZY, RW)],
        [(ZPX, RW), (ZPX, RW), (ZPX, RW), (ZPX, RW), (ZPY, W),  (ZPY, R),  (ZPX, RW), (ZPX, RW)],
        [(ABY, RW), (ABY, RW), (ABY, RW), (ABY, RW), (ABY, W),  (ABY, R),  (ABY, RW), (ABY, RW)],
        [(ABX, RW), (ABX, RW), (ABX, RW), (ABX, RW), (ABY, W),  (ABY, R),  (ABX, RW), (ABX, RW)],
    ],
];

const fn documented(m: Mnemonic) -> (Mnemonic, bool) {
    (m, false)
}

/// Pick the operation for an opcode triple. Returns the mnemonic and
/// whether the encoding is undocumented.
const fn mnemonic(cc: u8, bbb: u8, aaa: u8) -> (Mnemonic, bool) {
    use Mnemonic as M;
    match (cc, aaa, bbb) {
        (0, 0, 0) => documented(M::Brk),
        (0, 0, 2) => documented(M::Php),
        (0, 0, 4) => documented(M::Bpl),
        (0, 0, 6) => documented(M::Clc),
        (0, 1, 0) => documented(M::Jsr),
        (0, 1, 2) => documented(M::Plp),
        (0, 1, 4) => documented(M::Bmi),
        (0, 1, 6) => documented(M::Sec),
        (0, 1, 1 | 3) => documented(M::Bit),
        (0, 2, 0) => documented(M::Rti),
        (0, 2, 2) => documented(M::Pha),
        (0, 2, 3) => documented(M::Jmp),
        (0, 2, 4) => documented(M::Bvc),
        (0, 2, 6) => documented(M::Cli),
        (0, 3, 0) => documented(M::Rts),
        (0, 3, 2) => documented(M::Pla),
        (0, 3, 3) => documented(M::JmpIndirect),
        (0, 3, 4) => documented(M::Bvs),
        (0, 3, 6) => documented(M::Sei),
        (0, 4, 2) => documented(M::Dey),
        (0, 4, 4) => documented(M::Bcc),
        (0, 4, 6) => documented(M::Tya),
        (0, 4, 7) => (M::Shy, true),
        (0, 4, 1 | 3 | 5) => documented(M::Sty),
        (0, 5, 2) => documented(M::Tay),
        (0, 5, 4) => documented(M::Bcs),
        (0, 5, 6) => documented(M::Clv),
        (0, 5, _) => documented(M::Ldy),
        (0, 6, 2) => documented(M::Iny),
        (0, 6, 4) => documented(M::Bne),
        (0, 6, 6) => documented(M::Cld),
        (0, 6, 0 | 1 | 3) => documented(M::Cpy),
        (0, 7, 2) => documented(M::Inx),
        (0, 7, 4) => documented(M::Beq),
        (0, 7, 6) => documented(M::Sed),
        (0, 7, 0 | 1 | 3) => documented(M::Cpx),
        (0, _, _) => (M::Nop, true),

        (1, 0, _) => documented(M::Ora),
        (1, 1, _) => documented(M::And),
        (1, 2, _) => documented(M::Eor),
        (1, 3, _) => documented(M::Adc),
        (1, 4, 2) => (M::Nop, true),
        (1, 4, _) => documented(M::Sta),
        (1, 5, _) => documented(M::Lda),
        (1, 6, _) => documented(M::Cmp),
        (1, _, _) => documented(M::Sbc),

        (2, 0..=3, 6) => (M::Nop, true),
        (2, 0, _) => documented(M::Asl),
        (2, 1, _) => documented(M::Rol),
        (2, 2, _) => documented(M::Lsr),
        (2, 3, _) => documented(M::Ror),
        (2, 4, 0) => (M::Nop, true),
        (2, 4, 2) => documented(M::Txa),
        (2, 4, 6) => documented(M::Txs),
        (2, 4, 7) => (M::Shx, true),
        (2, 4, _) => documented(M::Stx),
        (2, 5, 2) => documented(M::Tax),
        (2, 5, 6) => documented(M::Tsx),
        (2, 5, _) => documented(M::Ldx),
        (2, 6, 2) => documented(M::Dex),
        (2, 6, 0 | 6) => (M::Nop, true),
        (2, 6, _) => documented(M::Dec),
        (2, 7, 2) => documented(M::Nop),
        (2, 7, 0 | 6) => (M::Nop, true),
        (2, _, _) => documented(M::Inc),

        (_, 0 | 1, 2) => (M::Anc, true),
        (_, 0, _) => (M::Slo, true),
        (_, 1, _) => (M::Rla, true),
        (_, 2, 2) => (M::Asr, true),
        (_, 2, _) => (M::Sre, true),
        (_, 3, 2) => (M::Arr, true),
        (_, 3, _) => (M::Rra, true),
        (_, 4, 2) => (M::Ane, true),
        (_, 4, 6) => (M::Shs, true),
        (_, 4, 4 | 7) => (M::Sha, true),
        (_, 4, _) => (M::Sax, true),
        (_, 5, 2) => (M::Lxa, true),
        (_, 5, 6) => (M::Las, true),
        (_, 5, _) => (M::Lax, true),
        (_, 6, 2) => (M::Sbx, true),
        (_, 6, _) => (M::Dcp, true),
        (_, _, 2) => (M::Sbc, true),
        (_, _, _) => (M::Isb, true),
    }
}

/// Decode a single opcode byte.
#[must_use]
pub const fn decode(opcode: u8) -> Instruction {
    let cc = opcode & 3;
    let bbb = (opcode >> 2) & 7;
    let aaa = (opcode >> 5) & 7;
    let (mode, access) = MODES[cc as usize][bbb as usize][aaa as usize];
    let (mnemonic, undocumented) = if matches!(mode, AddrMode::Invalid) {
        (Mnemonic::Jam, true)
    } else {
        mnemonic(cc, bbb, aaa)
    };
    Instruction {
        opcode,
        mode,
        access,
        mnemonic,
        undocumented,
    }
}

const fn build_table() -> [Instruction; 256] {
    let mut table = [decode(0); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

/// Every opcode, decoded at compile time.
pub static INSTRUCTIONS: [Instruction; 256] = build_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jam_set_is_the_twelve_invalid_encodings() {
        let jams: Vec<u8> = (0..=0xFF_u8)
            .filter(|&op| INSTRUCTIONS[op as usize].mnemonic == Mnemonic::Jam)
            .collect();
        assert_eq!(
            jams,
            [0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2]
        );
    }

    #[test]
    fn documented_opcode_count() {
        let documented = INSTRUCTIONS.iter().filter(|i| !i.is_undocumented()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn spot_check_matrix() {
        let cases = [
            (0x00, Mnemonic::Brk, AddrMode::Implied, MemAccess::None),
            (0x10, Mnemonic::Bpl, AddrMode::Immediate, MemAccess::Read),
            (0x20, Mnemonic::Jsr, AddrMode::Jsr, MemAccess::Read),
            (0x4C, Mnemonic::Jmp, AddrMode::Jmp, MemAccess::Read),
            (0x6C, Mnemonic::JmpIndirect, AddrMode::Jmp, MemAccess::Read),
            (0x91, Mnemonic::Sta, AddrMode::IndirectIndexed, MemAccess::Write),
            (0x96, Mnemonic::Stx, AddrMode::ZeroPageY, MemAccess::Write),
            (0xB6, Mnemonic::Ldx, AddrMode::ZeroPageY, MemAccess::Read),
            (0xBE, Mnemonic::Ldx, AddrMode::AbsoluteY, MemAccess::Read),
            (0x0A, Mnemonic::Asl, AddrMode::Implied, MemAccess::None),
            (0x1E, Mnemonic::Asl, AddrMode::AbsoluteX, MemAccess::ReadModifyWrite),
            (0xEA, Mnemonic::Nop, AddrMode::Implied, MemAccess::None),
            (0x93, Mnemonic::Sha, AddrMode::IndirectIndexed, MemAccess::ReadModifyWrite),
            (0x9B, Mnemonic::Shs, AddrMode::AbsoluteY, MemAccess::Write),
            (0x9C, Mnemonic::Shy, AddrMode::AbsoluteX, MemAccess::Write),
            (0x9E, Mnemonic::Shx, AddrMode::AbsoluteY, MemAccess::Write),
            (0xBB, Mnemonic::Las, AddrMode::AbsoluteY, MemAccess::Read),
            (0xCB, Mnemonic::Sbx, AddrMode::Immediate, MemAccess::Read),
            (0xEB, Mnemonic::Sbc, AddrMode::Immediate, MemAccess::Read),
            (0xC7, Mnemonic::Dcp, AddrMode::ZeroPage, MemAccess::ReadModifyWrite),
        ];
        for (opcode, mnemonic, mode, access) in cases {
            let inst = INSTRUCTIONS[opcode as usize];
            assert_eq!(inst.mnemonic, mnemonic, "opcode ${opcode:02X}");
            assert_eq!(inst.mode, mode, "opcode ${opcode:02X}");
            assert_eq!(inst.access, access, "opcode ${opcode:02X}");
        }
        assert!(INSTRUCTIONS[0xEB].is_undocumented());
        assert!(!INSTRUCTIONS[0xE9].is_undocumented());
        assert!(INSTRUCTIONS[0x1A].is_undocumented());
    }

    #[test]
    fn display_reads_like_a_disassembly() {
        assert_eq!(INSTRUCTIONS[0xB5].to_string(), "LDA zp,X");
        assert_eq!(INSTRUCTIONS[0x6A].to_string(), "ROR A");
        assert_eq!(INSTRUCTIONS[0x6C].to_string(), "JMP (abs)");
        assert_eq!(INSTRUCTIONS[0xD0].to_string(), "BNE rel");
        assert_eq!(INSTRUCTIONS[0xA9].to_string(), "LDA #");
        assert_eq!(INSTRUCTIONS[0x60].to_string(), "RTS");
        assert_eq!(INSTRUCTIONS[0x02].to_string(), "JAM");
    }

    #[test]
    fn base_cycles_for_representative_opcodes() {
        let cases = [
            (0x00, 7),
            (0x08, 3),
            (0x28, 4),
            (0x20, 6),
            (0x60, 6),
            (0x4C, 3),
            (0x6C, 5),
            (0xA9, 2),
            (0xBD, 4),
            (0x9D, 5),
            (0xB1, 5),
            (0x91, 6),
            (0xFE, 7),
            (0xD3, 8),
            (0xF0, 2),
        ];
        for (opcode, cycles) in cases {
            assert_eq!(
                INSTRUCTIONS[opcode as usize].base_cycles(),
                Some(cycles),
                "opcode ${opcode:02X}"
            );
        }
        assert_eq!(INSTRUCTIONS[0x02].base_cycles(), None);
    }
}
