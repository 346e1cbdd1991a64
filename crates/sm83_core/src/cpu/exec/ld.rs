use crate::cpu::alu;
use crate::cpu::{Bus, Cpu};
use crate::decode::{R16Mem, R16, R8};

impl Cpu {
    pub(super) fn exec_ld_r16_imm<B: Bus>(&mut self, bus: &mut B, rr: R16) {
        let value = self.fetch16(bus);
        self.set_r16(rr, value);
    }

    pub(super) fn exec_ld_r8_imm<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.fetch8(bus);
        self.write_r8(bus, reg, value);
    }

    pub(super) fn exec_ld_r8_r8<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) {
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
    }

    /// Address for an `[r16mem]` operand, applying the HL post-increment
    /// or post-decrement.
    fn r16mem_addr(&mut self, mem: R16Mem) -> u16 {
        match mem {
            R16Mem::BC => self.regs.bc(),
            R16Mem::DE => self.regs.de(),
            R16Mem::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            R16Mem::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_r16mem_a<B: Bus>(&mut self, bus: &mut B, mem: R16Mem) {
        let addr = self.r16mem_addr(mem);
        self.write_cycle(bus, addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_r16mem<B: Bus>(&mut self, bus: &mut B, mem: R16Mem) {
        let addr = self.r16mem_addr(mem);
        self.regs.a = self.read_cycle(bus, addr);
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        self.write_cycle(bus, addr, lo);
        self.write_cycle(bus, addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.write_cycle(bus, addr, self.regs.a);
    }

    pub(super) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.regs.a = self.read_cycle(bus, addr);
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.write_cycle(bus, addr, self.regs.a);
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.regs.a = self.read_cycle(bus, addr);
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.write_cycle(bus, addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = self.read_cycle(bus, addr);
    }

    pub(super) fn exec_add_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let e8 = self.fetch8(bus);
        let (result, flags) = alu::add_sp_signed8(self.regs.sp, e8);
        self.regs.sp = result;
        self.regs.f = flags;
        self.idle(bus);
        self.idle(bus);
    }

    pub(super) fn exec_ld_hl_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let e8 = self.fetch8(bus);
        let (result, flags) = alu::add_sp_signed8(self.regs.sp, e8);
        self.regs.set_hl(result);
        self.regs.f = flags;
        self.idle(bus);
    }

    pub(super) fn exec_ld_sp_hl<B: Bus>(&mut self, bus: &mut B) {
        self.regs.sp = self.regs.hl();
        self.idle(bus);
    }
}
