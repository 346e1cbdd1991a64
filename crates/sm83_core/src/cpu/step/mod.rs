use super::{Bus, Cpu, Signals};
use crate::decode::{disassemble, opcode, Instr};
use crate::error::CpuError;

/// Disassemble the instruction at `pc` with immediates filled in.
///
/// Reads go straight to the bus with no cycles charged, so only call
/// this for logging.
pub(in crate::cpu) fn disassemble_at<B: Bus>(bus: &mut B, pc: u16) -> String {
    let entry = opcode(bus.read8(pc));
    let len = if entry.instr == Instr::Prefix {
        2
    } else {
        usize::from(entry.size)
    };

    let mut code = [0u8; 3];
    for (offset, byte) in code.iter_mut().enumerate().take(len) {
        *byte = bus.read8(pc.wrapping_add(offset as u16));
    }
    disassemble(&code[..len]).map_or_else(|| entry.instr.to_string(), |(text, _)| text)
}

impl Cpu {
    /// Run until at least `budget` cycles have elapsed on the shared time
    /// axis and return the cycles actually consumed.
    ///
    /// The clock is rebased to zero on entry. The result may overshoot the
    /// budget by the tail of the last instruction. While halted, time is
    /// fast-forwarded to the bus's next event instead of idling.
    pub fn run<B: Bus>(&mut self, bus: &mut B, budget: u32) -> Result<u32, CpuError> {
        if let Some(err) = self.fault {
            return Err(err);
        }

        self.clock.rebase();
        while self.clock.timestamp() < budget {
            if self.service_interrupts(bus) {
                continue;
            }

            if self.halted {
                let remaining = budget - self.clock.timestamp();
                let skip = remaining.min(bus.cycles_until_next_event()).max(1);
                self.fast_forward(bus, skip);
                continue;
            }

            self.execute_next(bus)?;
        }

        Ok(self.clock.timestamp())
    }

    /// Execute a single instruction boundary and return the cycles taken.
    ///
    /// That is one of: an interrupt dispatch, one 4-cycle slice of HALT, or
    /// one instruction. Unlike [`run`](Cpu::run) this does not rebase the
    /// clock.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if let Some(err) = self.fault {
            return Err(err);
        }

        let start = self.clock.timestamp();
        if !self.service_interrupts(bus) {
            if self.halted {
                self.idle(bus);
            } else {
                self.execute_next(bus)?;
            }
        }
        Ok(self.clock.timestamp().wrapping_sub(start))
    }

    /// Advance time while halted. `cycles` is already on the shared axis.
    fn fast_forward<B: Bus>(&mut self, bus: &mut B, cycles: u32) {
        self.clock.skip(cycles);
        let mut signals = Signals {
            irq: &mut self.irq,
            clock: &mut self.clock,
        };
        bus.tick(cycles, &mut signals);
    }

    fn execute_next<B: Bus>(&mut self, bus: &mut B) -> Result<(), CpuError> {
        let pc = self.regs.pc;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "0x{:04X}: {} A={:02X} F={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
                pc,
                disassemble_at(bus, pc),
                self.regs.a,
                self.regs.f.to_u8(),
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
            );
        }

        let op = self.fetch8(bus);
        let entry = opcode(op);

        if let Err(err) = self.execute(bus, op, entry.instr) {
            // Leave PC on the faulting instruction.
            self.regs.pc = err.pc();
            self.fault = Some(err);
            log::error!(
                "CPU locked: {} (A={:02X} F={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X})",
                err,
                self.regs.a,
                self.regs.f.to_u8(),
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
            );
            return Err(err);
        }
        Ok(())
    }
}
