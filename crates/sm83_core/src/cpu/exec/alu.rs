use crate::cpu::alu;
use crate::cpu::Cpu;
use crate::decode::{AluOp, Instr, ShiftOp};

impl Cpu {
    /// `op A,value` for both the register and the immediate forms.
    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) {
        let (result, flags) = alu::alu8(op, self.regs.a, value, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
    }

    pub(super) fn exec_rotate_a(&mut self, instr: Instr) {
        let op = match instr {
            Instr::Rlca => ShiftOp::Rlc,
            Instr::Rrca => ShiftOp::Rrc,
            Instr::Rla => ShiftOp::Rl,
            _ => ShiftOp::Rr,
        };
        let (result, flags) = alu::rotate_a(op, self.regs.a, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
    }

    pub(super) fn exec_daa(&mut self) {
        let (result, flags) = alu::daa(self.regs.a, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
    }

    pub(super) fn exec_cpl(&mut self) {
        let (result, flags) = alu::cpl(self.regs.a, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
    }

    pub(super) fn exec_scf(&mut self) {
        self.regs.f = alu::scf(self.regs.f);
    }

    pub(super) fn exec_ccf(&mut self) {
        self.regs.f = alu::ccf(self.regs.f);
    }
}
