use crate::cpu::decode::Opcode;
use crate::cpu::operand::Condition;
use crate::cpu::Cpu;

impl Cpu {
    /// DJNZ d: decrement B and jump while it is non-zero.
    pub(super) fn exec_djnz(&mut self, op: Opcode) -> u32 {
        debug_assert_eq!(op.raw, 0x10);
        let b = self.regs.b().wrapping_sub(1);
        self.regs.set_b(b);
        if self.jr(b != 0) { 13 } else { 8 }
    }

    pub(super) fn exec_jr(&mut self, op: Opcode) -> u32 {
        debug_assert_eq!(op.raw, 0x18);
        self.jr(true);
        12
    }

    /// JR NZ/Z/NC/C,d (y=4..7 map onto conditions 0..3).
    pub(super) fn exec_jr_cc(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = Condition::from_index(op.y - 4);
        let taken = self.test_condition(cc);
        if self.jr(taken) { 12 } else { 7 }
    }

    /// RET cc. Only the opcode byte is consumed when the condition fails.
    pub(super) fn exec_ret_cc(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 3 && op.z == 0);
        let cc = Condition::from_index(op.y);
        self.ret_cond(self.test_condition(cc))
    }
}
