//! Pure ALU helpers.
//!
//! Every function takes its operands (plus the incoming flags where some
//! flag is left unaffected or feeds in as a carry) and returns the result
//! together with the new flags. Nothing here touches CPU state.

use super::Flags;
use crate::decode::{AluOp, ShiftOp};

/// 8-bit increment. C is unaffected.
#[inline]
pub fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let flags = Flags {
        z: result == 0,
        n: false,
        h: (value & 0x0F) == 0x0F,
        c: flags.c,
    };
    (result, flags)
}

/// 8-bit decrement. C is unaffected.
#[inline]
pub fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let flags = Flags {
        z: result == 0,
        n: true,
        h: (value & 0x0F) == 0,
        c: flags.c,
    };
    (result, flags)
}

fn add_with_carry(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let wide = u16::from(a) + u16::from(b) + u16::from(carry_in);
    let result = wide as u8;
    let flags = Flags {
        z: result == 0,
        n: false,
        h: (u16::from(a) ^ u16::from(b) ^ wide) & 0x10 != 0,
        c: wide & 0x100 != 0,
    };
    (result, flags)
}

fn sub_with_borrow(a: u8, b: u8, borrow_in: bool) -> (u8, Flags) {
    let wide = u16::from(a)
        .wrapping_sub(u16::from(b))
        .wrapping_sub(u16::from(borrow_in));
    let result = wide as u8;
    let flags = Flags {
        z: result == 0,
        n: true,
        h: (u16::from(a) ^ u16::from(b) ^ wide) & 0x10 != 0,
        c: wide & 0x100 != 0,
    };
    (result, flags)
}

#[inline]
pub fn add8(a: u8, b: u8) -> (u8, Flags) {
    add_with_carry(a, b, false)
}

#[inline]
pub fn adc8(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    add_with_carry(a, b, carry_in)
}

#[inline]
pub fn sub8(a: u8, b: u8) -> (u8, Flags) {
    sub_with_borrow(a, b, false)
}

#[inline]
pub fn sbc8(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    sub_with_borrow(a, b, carry_in)
}

#[inline]
pub fn and8(a: u8, b: u8) -> (u8, Flags) {
    let result = a & b;
    (result, Flags::new(result == 0, false, true, false))
}

#[inline]
pub fn xor8(a: u8, b: u8) -> (u8, Flags) {
    let result = a ^ b;
    (result, Flags::new(result == 0, false, false, false))
}

#[inline]
pub fn or8(a: u8, b: u8) -> (u8, Flags) {
    let result = a | b;
    (result, Flags::new(result == 0, false, false, false))
}

/// Apply one of the eight accumulator operations. For `CP` the returned
/// value is the unchanged accumulator.
pub fn alu8(op: AluOp, a: u8, b: u8, flags: Flags) -> (u8, Flags) {
    match op {
        AluOp::Add => add8(a, b),
        AluOp::Adc => adc8(a, b, flags.c),
        AluOp::Sub => sub8(a, b),
        AluOp::Sbc => sbc8(a, b, flags.c),
        AluOp::And => and8(a, b),
        AluOp::Xor => xor8(a, b),
        AluOp::Or => or8(a, b),
        AluOp::Cp => (a, sub8(a, b).1),
    }
}

/// `ADD HL,r16`: H from bit 11, C from bit 15, Z unaffected.
#[inline]
pub fn add16(hl: u16, rhs: u16, flags: Flags) -> (u16, Flags) {
    let wide = u32::from(hl) + u32::from(rhs);
    let flags = Flags {
        z: flags.z,
        n: false,
        h: (u32::from(hl) ^ u32::from(rhs) ^ wide) & 0x1000 != 0,
        c: wide & 0x1_0000 != 0,
    };
    (wide as u16, flags)
}

/// `SP + e8` as used by `ADD SP,e8` and `LD HL,SP+e8`.
///
/// H and C come from the low byte only (carry out of bits 3 and 7), not
/// from the 16-bit sum.
#[inline]
pub fn add_sp_signed8(sp: u16, e8: u8) -> (u16, Flags) {
    let sp = i32::from(sp);
    let offset = i32::from(e8 as i8);
    let wide = sp + offset;
    let carries = sp ^ offset ^ wide;
    let flags = Flags {
        z: false,
        n: false,
        h: carries & 0x10 != 0,
        c: carries & 0x100 != 0,
    };
    (wide as u16, flags)
}

/// Decimal-adjust A after a BCD addition or subtraction. N is unaffected,
/// H is cleared.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut adjust = 0u8;
    if flags.h {
        adjust |= 0x06;
    }
    if flags.c {
        adjust |= 0x60;
    }

    let result = if flags.n {
        a.wrapping_sub(adjust)
    } else {
        if (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    };

    let flags = Flags {
        z: result == 0,
        n: flags.n,
        h: false,
        c: adjust >= 0x60,
    };
    (result, flags)
}

#[inline]
pub fn cpl(a: u8, flags: Flags) -> (u8, Flags) {
    (!a, Flags::new(flags.z, true, true, flags.c))
}

#[inline]
pub fn scf(flags: Flags) -> Flags {
    Flags::new(flags.z, false, false, true)
}

#[inline]
pub fn ccf(flags: Flags) -> Flags {
    Flags::new(flags.z, false, false, !flags.c)
}

/// CB-prefixed rotate/shift. Z from the result, N=H=0, C from the bit
/// shifted out (cleared by SWAP).
pub fn shift(op: ShiftOp, value: u8, flags: Flags) -> (u8, Flags) {
    let (result, carry) = match op {
        ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        ShiftOp::Rl => ((value << 1) | u8::from(flags.c), value & 0x80 != 0),
        ShiftOp::Rr => ((value >> 1) | (u8::from(flags.c) << 7), value & 0x01 != 0),
        ShiftOp::Sla => (value << 1, value & 0x80 != 0),
        ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        ShiftOp::Swap => (value.rotate_left(4), false),
        ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
    };
    (result, Flags::new(result == 0, false, false, carry))
}

/// `RLCA/RRCA/RLA/RRA`: the CB rotate on A, except Z is always cleared.
#[inline]
pub fn rotate_a(op: ShiftOp, a: u8, flags: Flags) -> (u8, Flags) {
    let (result, flags) = shift(op, a, flags);
    (result, Flags { z: false, ..flags })
}

/// `BIT b,r`: Z set when the bit is clear, N=0, H=1, C unaffected.
#[inline]
pub fn bit(index: u8, value: u8, flags: Flags) -> Flags {
    Flags::new(value & (1 << index) == 0, false, true, flags.c)
}
