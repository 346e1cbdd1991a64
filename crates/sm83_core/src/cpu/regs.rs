/// The four condition flags, stored as independent booleans.
///
/// The packed F byte only exists when AF is read or written as a pair:
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 always read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,
    pub n: bool,
    pub h: bool,
    pub c: bool,
}

impl Flags {
    pub const fn new(z: bool, n: bool, h: bool, c: bool) -> Self {
        Self { z, n, h, c }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        let mut f = 0u8;
        if self.z {
            f |= 0x80;
        }
        if self.n {
            f |= 0x40;
        }
        if self.h {
            f |= 0x20;
        }
        if self.c {
            f |= 0x10;
        }
        f
    }

    /// Unpack an F byte; the low nibble is discarded.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        Self {
            z: value & 0x80 != 0,
            n: value & 0x40 != 0,
            h: value & 0x20 != 0,
            c: value & 0x10 != 0,
        }
    }
}

/// Register file for the SM83.
///
/// 8-bit registers are stored individually and paired on demand, high
/// byte first (B:C, D:E, H:L, A:F).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.to_u8()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_u8(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_high_byte_first() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0x5678);
        regs.set_hl(0x9ABC);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0x56, 0x78));
        assert_eq!((regs.h, regs.l), (0x9A, 0xBC));
        assert_eq!(regs.bc(), 0x1234);
        assert_eq!(regs.de(), 0x5678);
        assert_eq!(regs.hl(), 0x9ABC);
    }

    #[test]
    fn af_write_discards_low_nibble() {
        let mut regs = Registers::default();
        for f in 0..=255u8 {
            regs.set_af(u16::from_be_bytes([0x42, f]));
            assert_eq!(regs.a, 0x42);
            assert_eq!(regs.af() & 0x000F, 0);
            assert_eq!(regs.af() as u8, f & 0xF0);
        }
    }

    #[test]
    fn flag_bits_pack_in_znhc_order() {
        assert_eq!(Flags::new(true, false, false, false).to_u8(), 0x80);
        assert_eq!(Flags::new(false, true, false, false).to_u8(), 0x40);
        assert_eq!(Flags::new(false, false, true, false).to_u8(), 0x20);
        assert_eq!(Flags::new(false, false, false, true).to_u8(), 0x10);
        assert_eq!(Flags::from_u8(0xBF), Flags::new(true, false, true, true));
    }
}
