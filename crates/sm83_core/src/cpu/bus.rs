use crate::clock::Clock;
use crate::interrupt::{Interrupt, InterruptController};

/// Abstraction over the Game Boy bus (memory and IO).
///
/// IF (`0xFF0F`) and IE (`0xFFFF`) belong to the CPU and never reach the
/// bus; every other address does.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by `cycles`, already scaled for the
    /// current CPU speed.
    ///
    /// Called after every access and internal step. Default implementation
    /// does nothing; system buses can override this to drive timers, PPU,
    /// APU, etc., raising interrupts through `signals`.
    fn tick(&mut self, _cycles: u32, _signals: &mut Signals<'_>) {}

    /// Cycles until the next scheduled peripheral event, on the shared time
    /// axis. Only queried while the CPU is halted, to fast-forward.
    fn cycles_until_next_event(&self) -> u32 {
        u32::MAX
    }
}

/// The CPU-owned lines a peripheral may drive while it is being ticked.
pub struct Signals<'a> {
    pub(super) irq: &'a mut InterruptController,
    pub(super) clock: &'a mut Clock,
}

impl Signals<'_> {
    /// Request an interrupt; it is serviced at the next instruction
    /// boundary if enabled.
    #[inline]
    pub fn raise_interrupt(&mut self, source: Interrupt) {
        self.irq.raise(source);
    }

    /// Arm a CGB speed switch, as a write to KEY1 bit 0 would.
    #[inline]
    pub fn arm_speed_switch(&mut self) {
        self.clock.arm_speed_switch();
    }

    /// Current position on the CPU time axis.
    #[inline]
    pub fn timestamp(&self) -> u32 {
        self.clock.timestamp()
    }
}
