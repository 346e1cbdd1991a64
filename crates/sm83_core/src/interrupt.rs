use bitflags::bitflags;

bitflags! {
    /// Bit mask over the five interrupt sources, laid out like IE/IF.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Interrupt sources in priority order (VBlank highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Fixed handler address.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    #[inline]
    pub fn mask(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self as u8)
    }

    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// IE/IF state.
///
/// Peripherals only ever OR bits into `flags` (see
/// [`Signals`](crate::Signals)); acknowledging is done by the CPU when it
/// dispatches.
#[derive(Clone, Debug, Default)]
pub struct InterruptController {
    /// Raw IE byte. All 8 bits are stored; only the low 5 take part.
    enable: u8,
    flags: InterruptFlags,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enable(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.enable)
    }

    #[inline]
    pub fn flags(&self) -> InterruptFlags {
        self.flags
    }

    pub fn set_enable(&mut self, mask: InterruptFlags) {
        self.enable = mask.bits();
    }

    pub fn set_flags(&mut self, mask: InterruptFlags) {
        self.flags = mask;
    }

    /// Request an interrupt.
    #[inline]
    pub fn raise(&mut self, source: Interrupt) {
        self.flags |= source.mask();
    }

    /// Enabled and requested sources.
    #[inline]
    pub fn active(&self) -> InterruptFlags {
        self.enable() & self.flags
    }

    /// Highest-priority active source, if any.
    pub fn highest_priority(&self) -> Option<Interrupt> {
        let active = self.active().bits();
        if active == 0 {
            return None;
        }
        Interrupt::from_index(active.trailing_zeros())
    }

    /// Clear a source's request bit once it has been dispatched.
    #[inline]
    pub fn acknowledge(&mut self, source: Interrupt) {
        self.flags.remove(source.mask());
    }

    /// IF as seen on the bus: unused bits 5..7 read back as 1.
    pub fn read_if(&self) -> u8 {
        0xE0 | self.flags.bits()
    }

    pub fn write_if(&mut self, value: u8) {
        self.flags = InterruptFlags::from_bits_truncate(value);
    }

    pub fn read_ie(&self) -> u8 {
        self.enable
    }

    pub fn write_ie(&mut self, value: u8) {
        self.enable = value;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_source_order() {
        let vectors: Vec<u16> = Interrupt::ALL.iter().map(|i| i.vector()).collect();
        assert_eq!(vectors, [0x40, 0x48, 0x50, 0x58, 0x60]);
    }

    #[test]
    fn lowest_bit_wins() {
        let mut irq = InterruptController::new();
        irq.set_enable(InterruptFlags::all());
        assert_eq!(irq.highest_priority(), None);

        irq.raise(Interrupt::Joypad);
        irq.raise(Interrupt::Timer);
        assert_eq!(irq.highest_priority(), Some(Interrupt::Timer));

        irq.acknowledge(Interrupt::Timer);
        assert_eq!(irq.highest_priority(), Some(Interrupt::Joypad));
    }

    #[test]
    fn disabled_sources_are_not_active() {
        let mut irq = InterruptController::new();
        irq.set_enable(InterruptFlags::SERIAL);
        irq.raise(Interrupt::VBlank);
        assert!(irq.active().is_empty());
        assert_eq!(irq.highest_priority(), None);

        irq.raise(Interrupt::Serial);
        assert_eq!(irq.highest_priority(), Some(Interrupt::Serial));
    }

    #[test]
    fn register_views_mask_unused_bits() {
        let mut irq = InterruptController::new();
        irq.write_if(0xFF);
        assert_eq!(irq.flags(), InterruptFlags::all());
        assert_eq!(irq.read_if(), 0xFF);
        irq.write_if(0x00);
        assert_eq!(irq.read_if(), 0xE0);

        // IE keeps the upper bits but they never make a source active.
        irq.write_ie(0xE0);
        assert_eq!(irq.read_ie(), 0xE0);
        irq.raise(Interrupt::VBlank);
        assert!(irq.active().is_empty());
    }
}
