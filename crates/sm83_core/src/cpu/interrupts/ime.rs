use super::super::Cpu;

impl Cpu {
    /// Apply the IME change requested by `EI` one boundary late.
    #[inline]
    pub(in crate::cpu) fn latch_ime(&mut self) {
        self.ime = self.ime_next;
    }
}
