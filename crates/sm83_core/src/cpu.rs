mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::{Bus, Signals};
pub use regs::{Flags, Registers};

use crate::clock::Clock;
use crate::config::CpuConfig;
use crate::error::CpuError;
use crate::interrupt::{Interrupt, InterruptController};

/// SM83 CPU core.
///
/// Owns the register file, the interrupt controller (IE/IF) and the CPU
/// clock. Everything else in the machine is reached through a [`Bus`]
/// passed to [`run`](Cpu::run) or [`step`](Cpu::step).
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable, as sampled at the next instruction boundary.
    ime: bool,
    /// Value `ime` takes after the next boundary; `EI` sets only this.
    ime_next: bool,
    pub halted: bool,
    irq: InterruptController,
    clock: Clock,
    config: CpuConfig,
    /// Set once an instruction faults. The CPU refuses to execute until
    /// reset, like hardware locking up on an opcode hole.
    fault: Option<CpuError>,
}

impl Cpu {
    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set IME immediately, with no `EI`-style delay.
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
        self.ime_next = enabled;
    }

    #[inline]
    pub fn ime_next(&self) -> bool {
        self.ime_next
    }

    #[inline]
    pub fn irq(&self) -> &InterruptController {
        &self.irq
    }

    /// Host-side access to IE/IF, e.g. for save states or a debugger.
    #[inline]
    pub fn irq_mut(&mut self) -> &mut InterruptController {
        &mut self.irq
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Request an interrupt from outside a bus tick.
    pub fn raise_interrupt(&mut self, source: Interrupt) {
        self.irq.raise(source);
    }

    /// Arm a speed switch; the next `STOP` toggles double-speed mode.
    pub fn arm_speed_switch(&mut self) {
        self.clock.arm_speed_switch();
    }

    /// The latched fault, if the CPU has stopped on one.
    #[inline]
    pub fn fault(&self) -> Option<CpuError> {
        self.fault
    }
}
