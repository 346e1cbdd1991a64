use super::alu;
use super::{Bus, Cpu};
use crate::decode::{cb_opcode, Instr};
use crate::error::CpuError;

impl Cpu {
    /// Fetch the byte after a 0xCB prefix and run the CB-table instruction.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> Result<(), CpuError> {
        let op = self.fetch8(bus);
        self.exec_cb(bus, op, cb_opcode(op).instr)
    }

    /// Bit operations, shifts and rotates. `[HL]` operands are read, then
    /// written back (except for BIT, which only reads).
    ///
    /// Anything outside those four families faults at the prefix byte.
    pub(super) fn exec_cb<B: Bus>(
        &mut self,
        bus: &mut B,
        op: u8,
        instr: Instr,
    ) -> Result<(), CpuError> {
        match instr {
            Instr::Shift { op, reg } => {
                let value = self.read_r8(bus, reg);
                let (result, flags) = alu::shift(op, value, self.regs.f);
                self.regs.f = flags;
                self.write_r8(bus, reg, result);
            }
            Instr::Bit { bit, reg } => {
                let value = self.read_r8(bus, reg);
                self.regs.f = alu::bit(bit, value, self.regs.f);
            }
            Instr::Res { bit, reg } => {
                let value = self.read_r8(bus, reg);
                self.write_r8(bus, reg, value & !(1 << bit));
            }
            Instr::Set { bit, reg } => {
                let value = self.read_r8(bus, reg);
                self.write_r8(bus, reg, value | (1 << bit));
            }
            _ => {
                return Err(CpuError::IllegalOpcode {
                    opcode: op,
                    pc: self.regs.pc.wrapping_sub(2),
                });
            }
        }
        Ok(())
    }
}
