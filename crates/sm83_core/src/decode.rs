//! Opcode decoding.
//!
//! Both opcode tables are laid out on the same grid: the top two bits pick
//! a block, bits 5:3 (`y`) and 2:0 (`z`) pick the operation and operand,
//! and `y` splits again into `p` (bits 5:4) and `q` (bit 3). Decoding is
//! total: every byte maps to an [`Instr`], the eleven opcode holes to
//! [`Instr::Illegal`].

mod disasm;
mod operand;
mod table;

use std::fmt;

pub use disasm::disassemble;
pub use operand::{AluOp, Cond, ShiftOp, R16, R16Mem, R16Stk, R8};
pub use table::{cb_opcode, opcode, Opcode};

/// A decoded instruction.
///
/// Variants carry the operand selectors taken from the opcode byte;
/// immediates are fetched at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instr {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Rlca,
    Rrca,
    Rla,
    Rra,

    /// `LD r16,n16`
    LdR16Imm(R16),
    /// `LD [r16mem],A`
    LdR16MemA(R16Mem),
    /// `LD A,[r16mem]`
    LdAR16Mem(R16Mem),
    /// `LD [a16],SP`
    LdImm16Sp,
    IncR16(R16),
    DecR16(R16),
    /// `ADD HL,r16`
    AddHlR16(R16),
    IncR8(R8),
    DecR8(R8),
    /// `LD r8,n8`
    LdR8Imm(R8),
    Jr,
    JrCond(Cond),

    /// `LD r8,r8'`
    LdR8R8 { dst: R8, src: R8 },
    /// `ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r8`
    AluR8 { op: AluOp, src: R8 },

    RetCond(Cond),
    Ret,
    Reti,
    JpCond(Cond),
    Jp,
    JpHl,
    CallCond(Cond),
    Call,
    /// `RST` with the target address (0x00, 0x08, ... 0x38).
    Rst(u8),
    Pop(R16Stk),
    Push(R16Stk),
    /// `ALU A,n8`
    AluImm(AluOp),
    /// `LDH [C],A`
    LdhCA,
    /// `LDH [a8],A`
    LdhImmA,
    /// `LD [a16],A`
    LdImm16A,
    /// `LDH A,[C]`
    LdhAC,
    /// `LDH A,[a8]`
    LdhAImm,
    /// `LD A,[a16]`
    LdAImm16,
    /// `ADD SP,e8`
    AddSpImm,
    /// `LD HL,SP+e8`
    LdHlSpImm,
    LdSpHl,
    /// The 0xCB escape into the secondary table.
    Prefix,
    /// One of the eleven undefined opcodes.
    Illegal,

    Shift { op: ShiftOp, reg: R8 },
    Bit { bit: u8, reg: R8 },
    Res { bit: u8, reg: R8 },
    Set { bit: u8, reg: R8 },
}

/// Decode a byte of the primary table.
pub fn decode_primary(op: u8) -> Instr {
    let y = (op >> 3) & 0x07;
    let z = op & 0x07;

    match op >> 6 {
        0 => decode_block0(y, z),
        // The one hole in the LD grid: LD [HL],[HL] is HALT.
        1 if op == 0x76 => Instr::Halt,
        1 => Instr::LdR8R8 {
            dst: R8::from_bits(y),
            src: R8::from_bits(z),
        },
        2 => Instr::AluR8 {
            op: AluOp::from_bits(y),
            src: R8::from_bits(z),
        },
        _ => decode_block3(y, z),
    }
}

/// Decode the byte following a 0xCB prefix.
pub fn decode_cb(op: u8) -> Instr {
    let y = (op >> 3) & 0x07;
    let reg = R8::from_bits(op);

    match op >> 6 {
        0 => Instr::Shift {
            op: ShiftOp::from_bits(y),
            reg,
        },
        1 => Instr::Bit { bit: y, reg },
        2 => Instr::Res { bit: y, reg },
        _ => Instr::Set { bit: y, reg },
    }
}

fn decode_block0(y: u8, z: u8) -> Instr {
    let p = y >> 1;
    let q = y & 1;

    match z {
        0 => match y {
            0 => Instr::Nop,
            1 => Instr::LdImm16Sp,
            2 => Instr::Stop,
            3 => Instr::Jr,
            _ => Instr::JrCond(Cond::from_bits(y)),
        },
        1 if q == 0 => Instr::LdR16Imm(R16::from_bits(p)),
        1 => Instr::AddHlR16(R16::from_bits(p)),
        2 if q == 0 => Instr::LdR16MemA(R16Mem::from_bits(p)),
        2 => Instr::LdAR16Mem(R16Mem::from_bits(p)),
        3 if q == 0 => Instr::IncR16(R16::from_bits(p)),
        3 => Instr::DecR16(R16::from_bits(p)),
        4 => Instr::IncR8(R8::from_bits(y)),
        5 => Instr::DecR8(R8::from_bits(y)),
        6 => Instr::LdR8Imm(R8::from_bits(y)),
        _ => match y {
            0 => Instr::Rlca,
            1 => Instr::Rrca,
            2 => Instr::Rla,
            3 => Instr::Rra,
            4 => Instr::Daa,
            5 => Instr::Cpl,
            6 => Instr::Scf,
            _ => Instr::Ccf,
        },
    }
}

fn decode_block3(y: u8, z: u8) -> Instr {
    let p = y >> 1;
    let q = y & 1;

    match z {
        0 => match y {
            0..=3 => Instr::RetCond(Cond::from_bits(y)),
            4 => Instr::LdhImmA,
            5 => Instr::AddSpImm,
            6 => Instr::LdhAImm,
            _ => Instr::LdHlSpImm,
        },
        1 if q == 0 => Instr::Pop(R16Stk::from_bits(p)),
        1 => match p {
            0 => Instr::Ret,
            1 => Instr::Reti,
            2 => Instr::JpHl,
            _ => Instr::LdSpHl,
        },
        2 => match y {
            0..=3 => Instr::JpCond(Cond::from_bits(y)),
            4 => Instr::LdhCA,
            5 => Instr::LdImm16A,
            6 => Instr::LdhAC,
            _ => Instr::LdAImm16,
        },
        3 => match y {
            0 => Instr::Jp,
            1 => Instr::Prefix,
            6 => Instr::Di,
            7 => Instr::Ei,
            // D3, DB, E3, EB
            _ => Instr::Illegal,
        },
        4 => match y {
            0..=3 => Instr::CallCond(Cond::from_bits(y)),
            // E4, EC, F4, FC
            _ => Instr::Illegal,
        },
        5 if q == 0 => Instr::Push(R16Stk::from_bits(p)),
        5 if p == 0 => Instr::Call,
        // DD, ED, FD
        5 => Instr::Illegal,
        6 => Instr::AluImm(AluOp::from_bits(y)),
        _ => Instr::Rst(y * 8),
    }
}

impl Instr {
    /// Encoded length in bytes, including the 0xCB prefix for CB-table
    /// instructions. `Prefix` itself counts as one byte.
    pub fn size(&self) -> u8 {
        use Instr::*;
        match self {
            LdR16Imm(_) | LdImm16Sp | JpCond(_) | Jp | CallCond(_) | Call | LdImm16A
            | LdAImm16 => 3,
            LdR8Imm(_) | Jr | JrCond(_) | AluImm(_) | LdhImmA | LdhAImm | AddSpImm
            | LdHlSpImm | Stop => 2,
            Shift { .. } | Bit { .. } | Res { .. } | Set { .. } => 2,
            _ => 1,
        }
    }

    /// Documented cost in cycles; for conditional control flow this is the
    /// not-taken cost.
    pub fn cycles(&self) -> u8 {
        use Instr::*;
        match *self {
            Nop | Stop | Halt | Di | Ei | Daa | Cpl | Scf | Ccf | Rlca | Rrca | Rla | Rra => 4,
            JpHl | Prefix | Illegal => 4,
            LdR16Imm(_) => 12,
            LdR16MemA(_) | LdAR16Mem(_) => 8,
            LdImm16Sp => 20,
            IncR16(_) | DecR16(_) | AddHlR16(_) | LdSpHl => 8,
            IncR8(reg) | DecR8(reg) => {
                if reg.is_memory() {
                    12
                } else {
                    4
                }
            }
            LdR8Imm(reg) => {
                if reg.is_memory() {
                    12
                } else {
                    8
                }
            }
            Jr => 12,
            JrCond(_) => 8,
            LdR8R8 { dst, src } => {
                if dst.is_memory() || src.is_memory() {
                    8
                } else {
                    4
                }
            }
            AluR8 { src, .. } => {
                if src.is_memory() {
                    8
                } else {
                    4
                }
            }
            RetCond(_) => 8,
            Ret | Reti => 16,
            JpCond(_) => 12,
            Jp => 16,
            CallCond(_) => 12,
            Call => 24,
            Rst(_) => 16,
            Pop(_) => 12,
            Push(_) => 16,
            AluImm(_) => 8,
            LdhCA | LdhAC => 8,
            LdhImmA | LdhAImm => 12,
            LdImm16A | LdAImm16 => 16,
            AddSpImm => 16,
            LdHlSpImm => 12,
            Shift { reg, .. } | Res { reg, .. } | Set { reg, .. } => {
                if reg.is_memory() {
                    16
                } else {
                    8
                }
            }
            Bit { reg, .. } => {
                if reg.is_memory() {
                    12
                } else {
                    8
                }
            }
        }
    }

    /// Cost when a conditional branch is taken. Equal to
    /// [`cycles`](Instr::cycles) for everything else.
    pub fn cycles_taken(&self) -> u8 {
        match self {
            Instr::JrCond(_) => 12,
            Instr::RetCond(_) => 20,
            Instr::JpCond(_) => 16,
            Instr::CallCond(_) => 24,
            other => other.cycles(),
        }
    }

    /// Whether this instruction comes from the CB-prefixed table.
    pub fn is_cb(&self) -> bool {
        matches!(
            self,
            Instr::Shift { .. } | Instr::Bit { .. } | Instr::Res { .. } | Instr::Set { .. }
        )
    }
}

/// Mnemonic with immediates shown as placeholders (`n8`, `n16`, `a8`,
/// `a16`, `e8`).
impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instr::*;
        match self {
            Nop => f.write_str("NOP"),
            Stop => f.write_str("STOP"),
            Halt => f.write_str("HALT"),
            Di => f.write_str("DI"),
            Ei => f.write_str("EI"),
            Daa => f.write_str("DAA"),
            Cpl => f.write_str("CPL"),
            Scf => f.write_str("SCF"),
            Ccf => f.write_str("CCF"),
            Rlca => f.write_str("RLCA"),
            Rrca => f.write_str("RRCA"),
            Rla => f.write_str("RLA"),
            Rra => f.write_str("RRA"),
            LdR16Imm(rr) => write!(f, "LD {rr},n16"),
            LdR16MemA(mem) => write!(f, "LD {mem},A"),
            LdAR16Mem(mem) => write!(f, "LD A,{mem}"),
            LdImm16Sp => f.write_str("LD [a16],SP"),
            IncR16(rr) => write!(f, "INC {rr}"),
            DecR16(rr) => write!(f, "DEC {rr}"),
            AddHlR16(rr) => write!(f, "ADD HL,{rr}"),
            IncR8(r) => write!(f, "INC {r}"),
            DecR8(r) => write!(f, "DEC {r}"),
            LdR8Imm(r) => write!(f, "LD {r},n8"),
            Jr => f.write_str("JR e8"),
            JrCond(cc) => write!(f, "JR {cc},e8"),
            LdR8R8 { dst, src } => write!(f, "LD {dst},{src}"),
            AluR8 { op, src } => write!(f, "{op}{src}"),
            RetCond(cc) => write!(f, "RET {cc}"),
            Ret => f.write_str("RET"),
            Reti => f.write_str("RETI"),
            JpCond(cc) => write!(f, "JP {cc},a16"),
            Jp => f.write_str("JP a16"),
            JpHl => f.write_str("JP HL"),
            CallCond(cc) => write!(f, "CALL {cc},a16"),
            Call => f.write_str("CALL a16"),
            Rst(target) => write!(f, "RST ${target:02X}"),
            Pop(rr) => write!(f, "POP {rr}"),
            Push(rr) => write!(f, "PUSH {rr}"),
            AluImm(op) => write!(f, "{op}n8"),
            LdhCA => f.write_str("LDH [C],A"),
            LdhImmA => f.write_str("LDH [a8],A"),
            LdImm16A => f.write_str("LD [a16],A"),
            LdhAC => f.write_str("LDH A,[C]"),
            LdhAImm => f.write_str("LDH A,[a8]"),
            LdAImm16 => f.write_str("LD A,[a16]"),
            AddSpImm => f.write_str("ADD SP,e8"),
            LdHlSpImm => f.write_str("LD HL,SP+e8"),
            LdSpHl => f.write_str("LD SP,HL"),
            Prefix => f.write_str("PREFIX"),
            Illegal => f.write_str("ILLEGAL"),
            Shift { op, reg } => write!(f, "{op} {reg}"),
            Bit { bit, reg } => write!(f, "BIT {bit},{reg}"),
            Res { bit, reg } => write!(f, "RES {bit},{reg}"),
            Set { bit, reg } => write!(f, "SET {bit},{reg}"),
        }
    }
}
