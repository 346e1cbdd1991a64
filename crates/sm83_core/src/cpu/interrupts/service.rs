use super::super::{Bus, Cpu};

/// Fixed cost of the interrupt entry sequence before the PC is pushed.
const DISPATCH_CYCLES: u32 = 12;

impl Cpu {
    /// Instruction-boundary interrupt check.
    ///
    /// Any enabled and requested source wakes the CPU from HALT, even with
    /// IME clear. With IME set, the highest-priority source is acknowledged
    /// and the CPU jumps to its vector. Returns `true` if it dispatched.
    pub(in crate::cpu) fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> bool {
        let Some(source) = self.irq.highest_priority() else {
            self.latch_ime();
            return false;
        };

        if self.halted {
            log::debug!("HALT wake on {source:?} (IME={})", self.ime);
            self.halted = false;
        }

        if !self.ime {
            self.latch_ime();
            return false;
        }

        self.ime = false;
        self.ime_next = false;

        let pc = self.regs.pc;
        log::debug!(
            "interrupt {:?}: vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            source,
            source.vector(),
            pc,
            self.regs.sp,
            self.irq.read_if(),
            self.irq.read_ie(),
        );

        self.tick(bus, DISPATCH_CYCLES);
        self.push_bytes(bus, pc);
        // Source picked before the push, IF bit cleared after it.
        self.irq.acknowledge(source);
        self.regs.pc = source.vector();
        true
    }
}
