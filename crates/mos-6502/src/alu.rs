//! Arithmetic and flag logic.
//!
//! Pure functions: each takes operands and the status register, updates the
//! flags it affects and returns the result. Nothing here touches the bus.

use crate::Status;
use crate::flags::{C, N, V, Z};

/// Add with carry.
///
/// With `decimal` set the operands are treated as packed BCD. N, V and Z
/// follow the NMOS behaviour of deriving them from intermediate sums, so for
/// non-BCD inputs they are not meaningful, but the result is always defined.
pub fn adc(a: u8, val: u8, p: &mut Status, decimal: bool) -> u8 {
    let carry = u8::from(p.is_set(C));
    if decimal {
        p.clear(N | V | Z | C);
        let mut lo = (a & 0x0F) + (val & 0x0F) + carry;
        if lo > 9 {
            lo += 6;
        }
        let mut hi = (a >> 4) + (val >> 4) + u8::from(lo > 0x0F);
        if a.wrapping_add(val).wrapping_add(carry) == 0 {
            p.set(Z);
        } else if hi & 0x08 != 0 {
            p.set(N);
        }
        if !(a ^ val) & (a ^ (hi << 4)) & 0x80 != 0 {
            p.set(V);
        }
        if hi > 9 {
            hi += 6;
        }
        if hi > 15 {
            p.set(C);
        }
        (hi << 4) | (lo & 0x0F)
    } else {
        let sum = u16::from(a) + u16::from(val) + u16::from(carry);
        let result = sum as u8;
        p.update_nz(result);
        p.set_if(V, !(a ^ val) & (a ^ result) & 0x80 != 0);
        p.set_if(C, sum > 0xFF);
        result
    }
}

/// Subtract with borrow (carry clear means borrow).
///
/// Decimal corner cases behave as described for [`adc`].
pub fn sbc(a: u8, val: u8, p: &mut Status, decimal: bool) -> u8 {
    let borrow = u8::from(!p.is_set(C));
    let diff = u16::from(a)
        .wrapping_sub(u16::from(val))
        .wrapping_sub(u16::from(borrow));
    if decimal {
        p.clear(N | V | Z | C);
        let mut lo = (a & 0x0F).wrapping_sub(val & 0x0F).wrapping_sub(borrow);
        if (lo as i8) < 0 {
            lo = lo.wrapping_sub(6);
        }
        let mut hi = (a >> 4)
            .wrapping_sub(val >> 4)
            .wrapping_sub(u8::from((lo as i8) < 0));
        if diff as u8 == 0 {
            p.set(Z);
        } else if diff & 0x80 != 0 {
            p.set(N);
        }
        if (a ^ val) & (a ^ diff as u8) & 0x80 != 0 {
            p.set(V);
        }
        if diff & 0xFF00 == 0 {
            p.set(C);
        }
        if hi & 0x80 != 0 {
            hi = hi.wrapping_sub(6);
        }
        (hi << 4) | (lo & 0x0F)
    } else {
        let result = diff as u8;
        p.update_nz(result);
        p.set_if(V, (a ^ val) & (a ^ result) & 0x80 != 0);
        p.set_if(C, diff & 0xFF00 == 0);
        result
    }
}

/// CMP/CPX/CPY: subtract without storing. C set when `reg >= val`.
pub fn compare(reg: u8, val: u8, p: &mut Status) {
    let diff = u16::from(reg).wrapping_sub(u16::from(val));
    p.update_nz(diff as u8);
    p.set_if(C, diff & 0xFF00 == 0);
}

/// Arithmetic shift left. Bit 7 goes to carry.
pub fn asl(val: u8, p: &mut Status) -> u8 {
    let result = val << 1;
    p.set_if(C, val & 0x80 != 0);
    p.update_nz(result);
    result
}

/// Logical shift right. Bit 0 goes to carry.
pub fn lsr(val: u8, p: &mut Status) -> u8 {
    let result = val >> 1;
    p.set_if(C, val & 0x01 != 0);
    p.update_nz(result);
    result
}

/// Rotate left through carry.
pub fn rol(val: u8, p: &mut Status) -> u8 {
    let result = (val << 1) | u8::from(p.is_set(C));
    p.set_if(C, val & 0x80 != 0);
    p.update_nz(result);
    result
}

/// Rotate right through carry.
pub fn ror(val: u8, p: &mut Status) -> u8 {
    let result = (val >> 1) | (u8::from(p.is_set(C)) << 7);
    p.set_if(C, val & 0x01 != 0);
    p.update_nz(result);
    result
}

/// BIT: Z from `a & val`, N and V straight from bits 7 and 6 of `val`.
pub fn bit(a: u8, val: u8, p: &mut Status) {
    p.set_if(Z, a & val == 0);
    p.set_if(N, val & 0x80 != 0);
    p.set_if(V, val & 0x40 != 0);
}

/// ARR (undocumented): rotate right the already-ANDed accumulator, with the
/// odd V/C rules of the adder being half-engaged.
pub fn arr(and: u8, p: &mut Status, decimal: bool) -> u8 {
    let carry = p.is_set(C);
    p.clear(N | V | Z | C);
    let mut result = (and >> 1) | (u8::from(carry) << 7);
    p.update_nz(result);
    if decimal {
        if (result ^ and) & 0x40 != 0 {
            p.set(V);
        }
        if and & 0x0F >= 5 {
            result = (result.wrapping_add(6) & 0x0F) | (result & 0xF0);
        }
        if and & 0xF0 >= 0x50 {
            result = result.wrapping_add(0x60);
            p.set(C);
        }
    } else {
        if result & 0x40 != 0 {
            p.set(V | C);
        }
        if result & 0x20 != 0 {
            p.0 ^= V;
        }
    }
    result
}

/// SBX (undocumented): `(a & x) - val` without borrow, flags as CMP.
pub fn sbx(a: u8, x: u8, val: u8, p: &mut Status) -> u8 {
    let diff = u16::from(a & x).wrapping_sub(u16::from(val));
    p.update_nz(diff as u8);
    p.set_if(C, diff & 0xFF00 == 0);
    diff as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{D, I};

    fn status(flags: u8) -> Status {
        Status::from_byte(flags)
    }

    #[test]
    fn adc_binary_signed_overflow() {
        let mut p = status(0);
        let a = adc(0x50, 0x50, &mut p, false);
        assert_eq!(a, 0xA0);
        assert!(p.is_set(N));
        assert!(p.is_set(V));
        assert!(!p.is_set(C));
        assert!(!p.is_set(Z));
    }

    #[test]
    fn adc_binary_carry_out_and_zero() {
        let mut p = status(C);
        let a = adc(0xFF, 0x00, &mut p, false);
        assert_eq!(a, 0x00);
        assert!(p.is_set(C));
        assert!(p.is_set(Z));
        assert!(!p.is_set(V));
    }

    #[test]
    fn sbc_binary_uses_inverted_borrow() {
        let mut p = status(C);
        assert_eq!(sbc(0x50, 0x10, &mut p, false), 0x40);
        assert!(p.is_set(C));

        let mut p = status(0);
        assert_eq!(sbc(0x50, 0x10, &mut p, false), 0x3F);
        assert!(p.is_set(C));

        let mut p = status(C);
        assert_eq!(sbc(0x50, 0xB0, &mut p, false), 0xA0);
        assert!(!p.is_set(C));
        assert!(p.is_set(V));
        assert!(p.is_set(N));
    }

    #[test]
    fn adc_decimal() {
        let mut p = status(D);
        assert_eq!(adc(0x15, 0x27, &mut p, true), 0x42);
        assert!(!p.is_set(C));

        let mut p = status(D | C);
        assert_eq!(adc(0x58, 0x46, &mut p, true), 0x05);
        assert!(p.is_set(C));

        let mut p = status(D);
        assert_eq!(adc(0x99, 0x01, &mut p, true), 0x00);
        assert!(p.is_set(C));
    }

    #[test]
    fn sbc_decimal() {
        let mut p = status(D | C);
        assert_eq!(sbc(0x46, 0x12, &mut p, true), 0x34);
        assert!(p.is_set(C));

        let mut p = status(D | C);
        assert_eq!(sbc(0x40, 0x01, &mut p, true), 0x39);
        assert!(p.is_set(C));

        let mut p = status(D | C);
        assert_eq!(sbc(0x00, 0x01, &mut p, true), 0x99);
        assert!(!p.is_set(C));
    }

    #[test]
    fn decimal_with_invalid_bcd_does_not_panic() {
        for a in 0..=0xFF_u8 {
            for val in [0x00, 0x0F, 0x9A, 0xFF] {
                for carry in [0, C] {
                    let mut p = status(D | carry);
                    let _ = adc(a, val, &mut p, true);
                    let mut p = status(D | carry);
                    let _ = sbc(a, val, &mut p, true);
                    let mut p = status(D | carry);
                    let _ = arr(a, &mut p, true);
                }
            }
        }
    }

    #[test]
    fn compare_sets_carry_when_greater_or_equal() {
        let mut p = status(0);
        compare(0x40, 0x40, &mut p);
        assert!(p.is_set(C) && p.is_set(Z) && !p.is_set(N));
        compare(0x40, 0x41, &mut p);
        assert!(!p.is_set(C) && !p.is_set(Z) && p.is_set(N));
        compare(0x41, 0x40, &mut p);
        assert!(p.is_set(C) && !p.is_set(Z));
    }

    #[test]
    fn shifts_and_rotates() {
        let mut p = status(0);
        assert_eq!(asl(0x81, &mut p), 0x02);
        assert!(p.is_set(C));
        assert_eq!(rol(0x40, &mut p), 0x81);
        assert!(!p.is_set(C) && p.is_set(N));
        assert_eq!(lsr(0x01, &mut p), 0x00);
        assert!(p.is_set(C) && p.is_set(Z));
        assert_eq!(ror(0x02, &mut p), 0x81);
        assert!(!p.is_set(C));
    }

    #[test]
    fn bit_copies_operand_bits() {
        let mut p = status(0);
        bit(0x00, 0xC0, &mut p);
        assert!(p.is_set(Z));
        assert!(p.is_set(N));
        assert!(p.is_set(V));

        bit(0xFF, 0x01, &mut p);
        assert!(!p.is_set(Z));
        assert!(!p.is_set(N));
        assert!(!p.is_set(V));
    }

    #[test]
    fn arr_binary_flags() {
        let mut p = status(C);
        assert_eq!(arr(0xFF, &mut p, false), 0xFF);
        assert!(p.is_set(C));
        assert!(!p.is_set(V));
        assert!(p.is_set(N));

        let mut p = status(0);
        assert_eq!(arr(0x80, &mut p, false), 0x40);
        assert!(p.is_set(C));
        assert!(p.is_set(V));
    }

    #[test]
    fn sbx_ands_then_subtracts() {
        let mut p = status(I);
        assert_eq!(sbx(0xF0, 0x3C, 0x10, &mut p), 0x20);
        assert!(p.is_set(C));
        assert_eq!(sbx(0x0F, 0x0F, 0x10, &mut p), 0xFF);
        assert!(!p.is_set(C) && p.is_set(N));
        assert!(p.is_set(I));
    }
}
