/// CPU-side time axis.
///
/// `timestamp` counts cycles since the last [`rebase`](Clock::rebase), in
/// the units shared with the rest of the machine. In double-speed mode the
/// CPU runs twice as fast relative to those units, so every tick is halved.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    timestamp: u32,
    double_speed: bool,
    speed_switch_pending: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles elapsed since the last rebase.
    #[inline]
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    #[inline]
    pub fn double_speed(&self) -> bool {
        self.double_speed
    }

    #[inline]
    pub fn speed_switch_pending(&self) -> bool {
        self.speed_switch_pending
    }

    /// Restart the time axis at zero. Called at the start of every `run`.
    pub fn rebase(&mut self) {
        self.timestamp = 0;
    }

    /// Advance by `cycles` CPU cycles and return the scaled amount actually
    /// added to the timestamp.
    #[inline]
    pub fn tick(&mut self, cycles: u32) -> u32 {
        let scaled = cycles >> u32::from(self.double_speed);
        self.timestamp = self.timestamp.wrapping_add(scaled);
        scaled
    }

    /// Advance by an already-scaled number of cycles. Used by the HALT
    /// fast-forward, which measures its skip on the shared time axis.
    #[inline]
    pub(crate) fn skip(&mut self, cycles: u32) {
        self.timestamp = self.timestamp.wrapping_add(cycles);
    }

    /// Arm a speed switch; the next `STOP` toggles double-speed mode.
    pub fn arm_speed_switch(&mut self) {
        self.speed_switch_pending = true;
    }

    /// Consume an armed speed switch. Returns `false` when nothing was armed.
    pub(crate) fn take_speed_switch(&mut self) -> bool {
        if !self.speed_switch_pending {
            return false;
        }
        self.speed_switch_pending = false;
        self.double_speed = !self.double_speed;
        true
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_halved_in_double_speed() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(4), 4);
        assert_eq!(clock.timestamp(), 4);

        clock.arm_speed_switch();
        assert!(clock.take_speed_switch());
        assert!(clock.double_speed());
        assert!(!clock.speed_switch_pending());

        assert_eq!(clock.tick(4), 2);
        assert_eq!(clock.tick(12), 6);
        assert_eq!(clock.timestamp(), 12);
    }

    #[test]
    fn speed_switch_requires_arming() {
        let mut clock = Clock::new();
        assert!(!clock.take_speed_switch());
        assert!(!clock.double_speed());

        // Switching back to normal speed uses the same mechanism.
        clock.arm_speed_switch();
        clock.take_speed_switch();
        clock.arm_speed_switch();
        clock.take_speed_switch();
        assert!(!clock.double_speed());
    }

    #[test]
    fn rebase_restarts_time_but_keeps_speed() {
        let mut clock = Clock::new();
        clock.arm_speed_switch();
        clock.take_speed_switch();
        clock.tick(40);
        clock.skip(7);
        assert_eq!(clock.timestamp(), 27);

        clock.rebase();
        assert_eq!(clock.timestamp(), 0);
        assert!(clock.double_speed());
    }
}
