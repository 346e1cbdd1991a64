use super::{Cpu, Registers};
use crate::clock::Clock;
use crate::config::CpuConfig;
use crate::interrupt::InterruptController;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            ime_next: false,
            halted: false,
            irq: InterruptController::new(),
            clock: Clock::new(),
            config,
            fault: None,
        };
        cpu.apply_boot_state();
        cpu
    }

    /// Reset the CPU to its post-boot state and clear any latched fault.
    ///
    /// IE/IF and the clock (including double-speed mode) return to their
    /// power-on values too.
    pub fn reset(&mut self) {
        self.ime = false;
        self.ime_next = false;
        self.halted = false;
        self.fault = None;
        self.irq.reset();
        self.clock.reset();
        self.apply_boot_state();
    }

    /// Register state at the moment the boot ROM hands control to the
    /// cartridge entry point.
    fn apply_boot_state(&mut self) {
        self.regs = Registers::default();
        self.regs.set_af(self.config.model.boot_af());
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}
