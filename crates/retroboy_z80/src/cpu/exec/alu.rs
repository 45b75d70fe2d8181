use crate::cpu::decode::Opcode;
use crate::cpu::operand::{Pair, R8};
use crate::cpu::regs::Flags;
use crate::cpu::Cpu;

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r over the 0x80–0xBF block.
    pub(super) fn exec_alu_r(&mut self, op: Opcode) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&op.raw));
        let src = R8::from_index(op.z);
        let value = self.read_r8(src);

        match op.y {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }

        if src.is_indirect() { 7 } else { 4 }
    }

    pub(super) fn exec_add_hl_rp(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_pair(Pair::rp(op.p));
        self.alu_add16_hl(value);
        11
    }

    /// RLCA / RLA / RRCA / RRA. S, Z and P/V are unaffected.
    pub(super) fn exec_rotate_a(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a();
        let carry = self.get_flag(Flags::C);
        let (result, carry_out) = match op.y {
            // RLCA: bit 7 to carry and bit 0.
            0 => (a.rotate_left(1), (a & 0x80) != 0),
            // RRCA: bit 0 to carry and bit 7.
            1 => (a.rotate_right(1), (a & 0x01) != 0),
            // RLA: rotate left through carry.
            2 => ((a << 1) | u8::from(carry), (a & 0x80) != 0),
            // RRA: rotate right through carry.
            _ => ((a >> 1) | (u8::from(carry) << 7), (a & 0x01) != 0),
        };

        self.regs.set_a(result);
        self.set_flag(Flags::C, carry_out);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        4
    }

    pub(super) fn exec_cpl(&mut self, op: Opcode) -> u32 {
        debug_assert_eq!(op.raw, 0x2F);
        let a = self.regs.a();
        self.regs.set_a(!a);
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
        4
    }

    pub(super) fn exec_scf(&mut self, _op: Opcode) -> u32 {
        self.set_flag(Flags::C, true);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        4
    }

    /// CCF: H receives the carry as it was before the complement.
    pub(super) fn exec_ccf(&mut self, _op: Opcode) -> u32 {
        let carry = self.get_flag(Flags::C);
        self.set_flag(Flags::C, !carry);
        self.set_flag(Flags::H, carry);
        self.set_flag(Flags::N, false);
        4
    }
}
