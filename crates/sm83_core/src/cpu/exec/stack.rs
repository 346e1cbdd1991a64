use crate::cpu::{Bus, Cpu};
use crate::decode::R16Stk;

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, rr: R16Stk) {
        let value = self.r16stk(rr);
        self.push_u16(bus, value);
    }

    /// `POP AF` drops the low nibble of F.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, rr: R16Stk) {
        let value = self.pop_u16(bus);
        self.set_r16stk(rr, value);
    }
}
