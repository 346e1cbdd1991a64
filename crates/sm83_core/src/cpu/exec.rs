mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};
use crate::decode::Instr;
use crate::error::CpuError;

impl Cpu {
    /// Execute one decoded instruction whose opcode byte has already been
    /// fetched. Cycles are charged through the bus as the instruction runs.
    ///
    /// On error nothing beyond the opcode fetch has happened.
    pub(super) fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        instr: Instr,
    ) -> Result<(), CpuError> {
        match instr {
            Instr::Nop => {}
            Instr::Stop => self.exec_stop()?,
            Instr::Halt => self.exec_halt(),
            Instr::Di => self.exec_di(),
            Instr::Ei => self.exec_ei(),
            Instr::Daa => self.exec_daa(),
            Instr::Cpl => self.exec_cpl(),
            Instr::Scf => self.exec_scf(),
            Instr::Ccf => self.exec_ccf(),
            Instr::Rlca | Instr::Rrca | Instr::Rla | Instr::Rra => self.exec_rotate_a(instr),

            Instr::LdR16Imm(rr) => self.exec_ld_r16_imm(bus, rr),
            Instr::LdR16MemA(mem) => self.exec_ld_r16mem_a(bus, mem),
            Instr::LdAR16Mem(mem) => self.exec_ld_a_r16mem(bus, mem),
            Instr::LdImm16Sp => self.exec_ld_a16_sp(bus),
            Instr::IncR16(rr) => self.exec_inc16(bus, rr),
            Instr::DecR16(rr) => self.exec_dec16(bus, rr),
            Instr::AddHlR16(rr) => self.exec_add_hl(bus, rr),
            Instr::IncR8(reg) => self.exec_inc8(bus, reg),
            Instr::DecR8(reg) => self.exec_dec8(bus, reg),
            Instr::LdR8Imm(reg) => self.exec_ld_r8_imm(bus, reg),
            Instr::Jr => self.exec_jr(bus, None),
            Instr::JrCond(cc) => self.exec_jr(bus, Some(cc)),

            Instr::LdR8R8 { dst, src } => self.exec_ld_r8_r8(bus, dst, src),
            Instr::AluR8 { op, src } => {
                let value = self.read_r8(bus, src);
                self.exec_alu(op, value);
            }

            Instr::RetCond(cc) => self.exec_ret_cond(bus, cc),
            Instr::Ret => self.exec_ret(bus),
            Instr::Reti => self.exec_reti(bus),
            Instr::JpCond(cc) => self.exec_jp(bus, Some(cc)),
            Instr::Jp => self.exec_jp(bus, None),
            Instr::JpHl => self.regs.pc = self.regs.hl(),
            Instr::CallCond(cc) => self.exec_call(bus, Some(cc)),
            Instr::Call => self.exec_call(bus, None),
            Instr::Rst(target) => self.exec_rst(bus, target),
            Instr::Pop(rr) => self.exec_pop(bus, rr),
            Instr::Push(rr) => self.exec_push(bus, rr),
            Instr::AluImm(op) => {
                let value = self.fetch8(bus);
                self.exec_alu(op, value);
            }
            Instr::LdhCA => self.exec_ldh_c_a(bus),
            Instr::LdhImmA => self.exec_ldh_a8_a(bus),
            Instr::LdImm16A => self.exec_ld_a16_a(bus),
            Instr::LdhAC => self.exec_ldh_a_c(bus),
            Instr::LdhAImm => self.exec_ldh_a_a8(bus),
            Instr::LdAImm16 => self.exec_ld_a_a16(bus),
            Instr::AddSpImm => self.exec_add_sp_e8(bus),
            Instr::LdHlSpImm => self.exec_ld_hl_sp_e8(bus),
            Instr::LdSpHl => self.exec_ld_sp_hl(bus),

            Instr::Prefix => self.step_cb(bus)?,

            // CB-table instructions only arrive through `Prefix`.
            Instr::Illegal
            | Instr::Shift { .. }
            | Instr::Bit { .. }
            | Instr::Res { .. }
            | Instr::Set { .. } => {
                return Err(CpuError::IllegalOpcode {
                    opcode,
                    pc: self.regs.pc.wrapping_sub(1),
                });
            }
        }
        Ok(())
    }
}
