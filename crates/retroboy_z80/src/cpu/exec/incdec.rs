use crate::cpu::decode::Opcode;
use crate::cpu::operand::{Pair, R8};
use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_inc8_r(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 0 && op.z == 4, "unexpected INC r opcode {:#04x}", op.raw);

        let reg = R8::from_index(op.y);
        let value = self.read_r8(reg);
        let result = self.alu_inc8(value);
        self.write_r8(reg, result);

        if reg.is_indirect() { 11 } else { 4 }
    }

    pub(super) fn exec_dec8_r(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 0 && op.z == 5, "unexpected DEC r opcode {:#04x}", op.raw);

        let reg = R8::from_index(op.y);
        let value = self.read_r8(reg);
        let result = self.alu_dec8(value);
        self.write_r8(reg, result);

        if reg.is_indirect() { 11 } else { 4 }
    }

    pub(super) fn exec_inc16_rp(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 0 && op.z == 3 && op.q == 0);
        let pair = Pair::rp(op.p);
        let value = self.read_pair(pair).wrapping_add(1);
        self.write_pair(pair, value);
        6
    }

    pub(super) fn exec_dec16_rp(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 0 && op.z == 3 && op.q == 1);
        let pair = Pair::rp(op.p);
        let value = self.read_pair(pair).wrapping_sub(1);
        self.write_pair(pair, value);
        6
    }
}
