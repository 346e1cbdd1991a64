use crate::cpu::{Bus, Cpu};
use crate::decode::Cond;

impl Cpu {
    /// `JR e8` / `JR cc,e8`. The offset is relative to the address
    /// following the operand.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let offset = self.fetch8(bus) as i8;
        if cond.map_or(true, |cc| self.condition(cc)) {
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
            self.idle(bus);
        }
    }

    /// `JP a16` / `JP cc,a16`. The immediate is always fetched.
    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let addr = self.fetch16(bus);
        if cond.map_or(true, |cc| self.condition(cc)) {
            self.regs.pc = addr;
            self.idle(bus);
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let addr = self.fetch16(bus);
        if cond.map_or(true, |cc| self.condition(cc)) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.idle(bus);
    }

    pub(super) fn exec_ret_cond<B: Bus>(&mut self, bus: &mut B, cc: Cond) {
        // The condition check itself takes an internal step.
        self.idle(bus);
        if self.condition(cc) {
            self.exec_ret(bus);
        }
    }

    /// `RETI`: return and re-enable interrupts with no delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.exec_ret(bus);
        self.ime = true;
        self.ime_next = true;
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, target: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(target);
    }
}
