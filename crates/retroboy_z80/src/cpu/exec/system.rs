use crate::cpu::decode::Opcode;
use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_nop(&mut self, _op: Opcode) -> u32 {
        4
    }

    pub(super) fn exec_ex_af_af(&mut self, op: Opcode) -> u32 {
        debug_assert_eq!(op.raw, 0x08);
        self.regs.exchange_af();
        4
    }
}
