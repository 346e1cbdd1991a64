use crate::config::StopPolicy;
use crate::cpu::Cpu;
use crate::error::CpuError;

impl Cpu {
    pub(super) fn exec_stop(&mut self) -> Result<(), CpuError> {
        let pc = self.regs.pc.wrapping_sub(1);

        if self.clock.take_speed_switch() {
            log::info!(
                "speed switch at PC=0x{:04X}: double speed {}",
                pc,
                if self.clock.double_speed() { "on" } else { "off" }
            );
        } else if self.config.stop == StopPolicy::Fatal {
            return Err(CpuError::UnimplementedSystemMode { pc });
        }

        // STOP is a 2-byte instruction; the second byte is padding and is
        // skipped without a bus access.
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(())
    }

    pub(super) fn exec_halt(&mut self) {
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_next = false;
    }

    /// IME becomes 1 only after the instruction following `EI`.
    pub(super) fn exec_ei(&mut self) {
        self.ime_next = true;
    }
}
