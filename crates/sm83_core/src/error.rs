use thiserror::Error;

/// Fatal conditions raised by the CPU core.
///
/// Either one stops the CPU before the offending instruction has any
/// architectural effect. The CPU stays faulted, returning the same error
/// from every later `step`/`run`, until [`Cpu::reset`](crate::Cpu::reset).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// One of the eleven opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4,
    /// FC, FD). Real hardware hard-locks on these.
    #[error("illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
    /// `STOP` executed without an armed speed switch. The low-power STOP
    /// mode (wait for a button press) is not emulated.
    #[error("STOP at PC=0x{pc:04X} without a pending speed switch")]
    UnimplementedSystemMode { pc: u16 },
}

impl CpuError {
    /// Address of the instruction that raised the fault.
    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::IllegalOpcode { pc, .. } => pc,
            CpuError::UnimplementedSystemMode { pc } => pc,
        }
    }
}
