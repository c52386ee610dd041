//! Pending interrupt bookkeeping.
//!
//! Hardware interrupts hijack the BRK microcode. When one is recognised at
//! an opcode fetch the fetched byte is discarded, the instruction register
//! is forced to BRK and these flags steer the shared sequence: whether PC
//! is advanced, whether the stack writes reach the bus, what B looks like
//! in the pushed status and which vector is loaded.

use bitflags::bitflags;

/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ and BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

bitflags! {
    /// Interrupts latched at the last opcode fetch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interrupts: u8 {
        const IRQ = 1 << 0;
        const NMI = 1 << 1;
        const RESET = 1 << 2;
    }
}

impl Interrupts {
    /// True for a hardware interrupt. A software BRK has nothing pending.
    #[must_use]
    pub const fn is_hardware(self) -> bool {
        !self.is_empty()
    }

    /// IRQ and NMI re-execute the interrupted instruction, so PC must not
    /// step over a signature byte as BRK does.
    #[must_use]
    pub const fn keeps_pc(self) -> bool {
        self.intersects(Self::IRQ.union(Self::NMI))
    }

    /// Reset runs the push cycles as reads.
    #[must_use]
    pub const fn suppresses_writes(self) -> bool {
        self.contains(Self::RESET)
    }

    /// Vector for the sequence. Reset beats NMI beats IRQ/BRK.
    #[must_use]
    pub const fn vector(self) -> u16 {
        if self.contains(Self::RESET) {
            RESET_VECTOR
        } else if self.contains(Self::NMI) {
            NMI_VECTOR
        } else {
            IRQ_VECTOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_priority() {
        assert_eq!(Interrupts::empty().vector(), IRQ_VECTOR);
        assert_eq!(Interrupts::IRQ.vector(), IRQ_VECTOR);
        assert_eq!((Interrupts::IRQ | Interrupts::NMI).vector(), NMI_VECTOR);
        assert_eq!(Interrupts::all().vector(), RESET_VECTOR);
    }

    #[test]
    fn brk_advances_pc_and_reset_does_too() {
        assert!(!Interrupts::empty().keeps_pc());
        assert!(!Interrupts::RESET.keeps_pc());
        assert!(Interrupts::NMI.keeps_pc());
        assert!(Interrupts::RESET.suppresses_writes());
        assert!(!Interrupts::IRQ.suppresses_writes());
    }
}
