//! 6502 CPU registers.

use crate::Status;
use crate::flags::{U, Z};

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - S: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (points to next free location, stack at $0100-$01FF).
    pub s: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in power-on state.
    ///
    /// Everything is zero except P, which holds the unused bit and Z. The
    /// reset sequence that follows power-on moves S down by three to $FD and
    /// sets I.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0,
            pc: 0,
            p: Status(U | Z),
        }
    }

    /// Return the stack address for a push, then decrement S.
    pub fn push(&mut self) -> u16 {
        let addr = self.stack_addr();
        self.s = self.s.wrapping_sub(1);
        addr
    }

    /// Return the current stack address, then increment S.
    ///
    /// Pulls take two cycles: a dummy read at the old top, then the real
    /// read at `stack_addr()` once S has moved.
    pub fn pull(&mut self) -> u16 {
        let addr = self.stack_addr();
        self.s = self.s.wrapping_add(1);
        addr
    }

    /// Get the current stack address without modifying S.
    #[must_use]
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | (self.s as u16)
    }
}
