//! Instruction engine for the SM83, the Z80-derived CPU inside the Game Boy.
//!
//! The crate covers opcode decoding, the ALU and flag rules, the interrupt
//! controller and the cycle/HALT scheduling model. Memory, cartridges and
//! peripherals live behind the [`Bus`] trait.

pub mod clock;
pub mod config;
pub mod cpu;
pub mod decode;
pub mod error;
pub mod interrupt;

pub use clock::Clock;
pub use config::{CpuConfig, Model, StopPolicy};
pub use cpu::{Bus, Cpu, Flags, Registers, Signals};
pub use decode::{disassemble, Instr, Opcode};
pub use error::CpuError;
pub use interrupt::{Interrupt, InterruptController, InterruptFlags};

/// Address of the IF register (pending interrupt requests).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the IE register (interrupt enable mask).
pub const IE_ADDR: u16 = 0xFFFF;
