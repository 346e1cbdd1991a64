use crate::cpu::alu;
use crate::cpu::{Bus, Cpu};
use crate::decode::{R16, R8};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let (result, flags) = alu::inc8(value, self.regs.f);
        self.regs.f = flags;
        self.write_r8(bus, reg, result);
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let (result, flags) = alu::dec8(value, self.regs.f);
        self.regs.f = flags;
        self.write_r8(bus, reg, result);
    }

    // 16-bit INC/DEC go through the address incrementer: no flags, one
    // internal step.
    pub(super) fn exec_inc16<B: Bus>(&mut self, bus: &mut B, rr: R16) {
        let value = self.r16(rr).wrapping_add(1);
        self.set_r16(rr, value);
        self.idle(bus);
    }

    pub(super) fn exec_dec16<B: Bus>(&mut self, bus: &mut B, rr: R16) {
        let value = self.r16(rr).wrapping_sub(1);
        self.set_r16(rr, value);
        self.idle(bus);
    }

    pub(super) fn exec_add_hl<B: Bus>(&mut self, bus: &mut B, rr: R16) {
        let (result, flags) = alu::add16(self.regs.hl(), self.r16(rr), self.regs.f);
        self.regs.set_hl(result);
        self.regs.f = flags;
        self.idle(bus);
    }
}
