use super::{cb_opcode, opcode, Instr};

/// Disassemble the instruction at the start of `code`.
///
/// Returns the text with immediates filled in (`LD A,$42`, `JR NZ,-3`)
/// and the number of bytes consumed, or `None` when `code` is shorter
/// than the instruction.
pub fn disassemble(code: &[u8]) -> Option<(String, usize)> {
    let first = *code.first()?;
    let entry = opcode(first);

    if entry.instr == Instr::Prefix {
        let second = *code.get(1)?;
        return Some((cb_opcode(second).instr.to_string(), 2));
    }

    let size = entry.size as usize;
    let operand = code.get(1..size)?;
    let template = entry.instr.to_string();

    let text = match (entry.instr, operand) {
        (Instr::LdHlSpImm, [e8]) => format!("LD HL,SP{:+}", *e8 as i8),
        // STOP's second byte is padding, not an operand.
        (Instr::Stop, _) => template,
        (_, [imm]) if template.contains("e8") => {
            template.replacen("e8", &format!("{:+}", *imm as i8), 1)
        }
        (_, [imm]) if template.contains("a8") => {
            template.replacen("a8", &format!("${:04X}", 0xFF00 | u16::from(*imm)), 1)
        }
        (_, [imm]) => template.replacen("n8", &format!("${imm:02X}"), 1),
        (_, [lo, hi]) => {
            let value = u16::from_le_bytes([*lo, *hi]);
            let placeholder = if template.contains("a16") { "a16" } else { "n16" };
            template.replacen(placeholder, &format!("${value:04X}"), 1)
        }
        _ => template,
    };

    Some((text, size))
}
