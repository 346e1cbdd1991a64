use super::{Bus, Cpu, Signals};
use crate::decode::{Cond, R16, R16Stk, R8};
use crate::{IE_ADDR, IF_ADDR};

impl Cpu {
    /// Advance the CPU clock by `cycles` and let the bus catch up by the
    /// scaled amount.
    #[inline]
    pub(super) fn tick<B: Bus>(&mut self, bus: &mut B, cycles: u32) {
        let scaled = self.clock.tick(cycles);
        let mut signals = Signals {
            irq: &mut self.irq,
            clock: &mut self.clock,
        };
        bus.tick(scaled, &mut signals);
    }

    /// One internal step with no memory access.
    #[inline]
    pub(super) fn idle<B: Bus>(&mut self, bus: &mut B) {
        self.tick(bus, 4);
    }

    /// Perform a single bus read cycle. IF and IE are served by the
    /// interrupt controller instead of the bus.
    #[inline]
    pub(super) fn read_cycle<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u8 {
        let value = match addr {
            IF_ADDR => self.irq.read_if(),
            IE_ADDR => self.irq.read_ie(),
            _ => bus.read8(addr),
        };
        self.tick(bus, 4);
        value
    }

    /// Perform a single bus write cycle.
    #[inline]
    pub(super) fn write_cycle<B: Bus>(&mut self, bus: &mut B, addr: u16, value: u8) {
        match addr {
            IF_ADDR => self.irq.write_if(value),
            IE_ADDR => self.irq.write_ie(value),
            _ => bus.write8(addr, value),
        }
        self.tick(bus, 4);
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = self.read_cycle(bus, self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Store `value` below SP, high byte first, so that memory[SP] = low
    /// and memory[SP+1] = high afterwards.
    pub(super) fn push_bytes<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, lo);
    }

    /// PUSH as used by instructions: one internal step (the SP
    /// pre-decrement) followed by the two stores.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        self.idle(bus);
        self.push_bytes(bus, value);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.read_cycle(bus, self.regs.sp);
        let hi = self.read_cycle(bus, self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Read an 8-bit operand. `[HL]` costs one bus access.
    #[inline]
    pub(super) fn read_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlInd => self.read_cycle(bus, self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    /// Write an 8-bit operand; the encoding matches `read_r8`.
    #[inline]
    pub(super) fn write_r8<B: Bus>(&mut self, bus: &mut B, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlInd => self.write_cycle(bus, self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn r16(&self, rr: R16) -> u16 {
        match rr {
            R16::BC => self.regs.bc(),
            R16::DE => self.regs.de(),
            R16::HL => self.regs.hl(),
            R16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_r16(&mut self, rr: R16, value: u16) {
        match rr {
            R16::BC => self.regs.set_bc(value),
            R16::DE => self.regs.set_de(value),
            R16::HL => self.regs.set_hl(value),
            R16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn r16stk(&self, rr: R16Stk) -> u16 {
        match rr {
            R16Stk::BC => self.regs.bc(),
            R16Stk::DE => self.regs.de(),
            R16Stk::HL => self.regs.hl(),
            R16Stk::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn set_r16stk(&mut self, rr: R16Stk, value: u16) {
        match rr {
            R16Stk::BC => self.regs.set_bc(value),
            R16Stk::DE => self.regs.set_de(value),
            R16Stk::HL => self.regs.set_hl(value),
            R16Stk::AF => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: Cond) -> bool {
        match cc {
            Cond::NZ => !self.regs.f.z,
            Cond::Z => self.regs.f.z,
            Cond::NC => !self.regs.f.c,
            Cond::C => self.regs.f.c,
        }
    }
}
