use lazy_static::lazy_static;

use super::{decode_cb, decode_primary, Instr};

/// One entry of an opcode table: the decoded instruction plus its static
/// metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub instr: Instr,
    /// Encoded length in bytes.
    pub size: u8,
    /// Base cost in cycles (not-taken cost for conditional branches).
    pub cycles: u8,
    /// Cost when a conditional branch is taken.
    pub cycles_taken: u8,
}

impl Opcode {
    fn new(instr: Instr) -> Self {
        Self {
            instr,
            size: instr.size(),
            cycles: instr.cycles(),
            cycles_taken: instr.cycles_taken(),
        }
    }
}

lazy_static! {
    static ref PRIMARY: [Opcode; 256] =
        std::array::from_fn(|op| Opcode::new(decode_primary(op as u8)));
    static ref CB: [Opcode; 256] = std::array::from_fn(|op| Opcode::new(decode_cb(op as u8)));
}

/// Primary-table entry for `op`.
#[inline]
pub fn opcode(op: u8) -> &'static Opcode {
    &PRIMARY[op as usize]
}

/// CB-table entry for the byte following the 0xCB prefix.
#[inline]
pub fn cb_opcode(op: u8) -> &'static Opcode {
    &CB[op as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_agree_with_decoder() {
        for op in 0..=255u8 {
            assert_eq!(opcode(op).instr, decode_primary(op));
            assert_eq!(cb_opcode(op).instr, decode_cb(op));
        }
    }

    /// Base (not-taken) cost of every primary opcode, as documented.
    #[rustfmt::skip]
    const PRIMARY_CYCLES: [u8; 256] = [
        //  0   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
         4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
         4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
         8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
         8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
         8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
         4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
         8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  4, 12, 24,  8, 16, // Cx
         8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // Dx
        12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // Ex
        12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // Fx
    ];

    #[test]
    fn primary_cycles_match_documented_table() {
        for op in 0..=255u8 {
            assert_eq!(
                opcode(op).cycles,
                PRIMARY_CYCLES[op as usize],
                "opcode 0x{op:02X} ({})",
                opcode(op).instr
            );
        }
    }

    #[test]
    fn cb_cycles_follow_operand_and_family() {
        for op in 0..=255u8 {
            let expected = match (op & 0x07 == 0x06, op >> 6) {
                (false, _) => 8,
                (true, 1) => 12,
                (true, _) => 16,
            };
            assert_eq!(cb_opcode(op).cycles, expected, "CB 0x{op:02X}");
        }
    }

    #[test]
    fn metadata_for_representative_entries() {
        let ld_bc = opcode(0x01);
        assert_eq!((ld_bc.size, ld_bc.cycles), (3, 12));

        let jr_nz = opcode(0x20);
        assert_eq!((jr_nz.size, jr_nz.cycles, jr_nz.cycles_taken), (2, 8, 12));

        let call_c = opcode(0xDC);
        assert_eq!(
            (call_c.size, call_c.cycles, call_c.cycles_taken),
            (3, 12, 24)
        );

        let ret_z = opcode(0xC8);
        assert_eq!((ret_z.cycles, ret_z.cycles_taken), (8, 20));

        let ld_a16_sp = opcode(0x08);
        assert_eq!((ld_a16_sp.size, ld_a16_sp.cycles), (3, 20));

        let add_sp = opcode(0xE8);
        assert_eq!((add_sp.size, add_sp.cycles), (2, 16));

        let reti = opcode(0xD9);
        assert_eq!((reti.size, reti.cycles, reti.cycles_taken), (1, 16, 16));

        for rst in [0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF] {
            assert_eq!((opcode(rst).size, opcode(rst).cycles), (1, 16));
        }

        let inc_hl_ind = opcode(0x34);
        assert_eq!(inc_hl_ind.cycles, 12);

        let bit_hl = cb_opcode(0x46);
        assert_eq!((bit_hl.size, bit_hl.cycles), (2, 12));
        let set_hl = cb_opcode(0xC6);
        assert_eq!(set_hl.cycles, 16);
        let rlc_b = cb_opcode(0x00);
        assert_eq!(rlc_b.cycles, 8);
    }
}
