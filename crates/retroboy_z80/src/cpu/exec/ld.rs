use crate::cpu::decode::Opcode;
use crate::cpu::operand::{Pair, R8};
use crate::cpu::Cpu;

impl Cpu {
    /// LD rr,nn
    pub(super) fn exec_ld_rp_nn(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16();
        self.write_pair(Pair::rp(op.p), value);
        10
    }

    /// LD (BC),A / LD (DE),A / LD (nn),HL / LD (nn),A
    pub(super) fn exec_ld_indirect_store(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x02 | 0x12 | 0x22 | 0x32));

        match op.p {
            0 => {
                let addr = self.regs.bc();
                self.memory.write8(addr, self.regs.a());
                7
            }
            1 => {
                let addr = self.regs.de();
                self.memory.write8(addr, self.regs.a());
                7
            }
            2 => {
                let addr = self.fetch16();
                self.memory.write16(addr, self.regs.hl());
                16
            }
            _ => {
                let addr = self.fetch16();
                self.memory.write8(addr, self.regs.a());
                13
            }
        }
    }

    /// LD A,(BC) / LD A,(DE) / LD HL,(nn) / LD A,(nn)
    pub(super) fn exec_ld_indirect_load(&mut self, op: Opcode) -> u32 {
        debug_assert!(matches!(op.raw, 0x0A | 0x1A | 0x2A | 0x3A));

        match op.p {
            0 => {
                let value = self.memory.read8(self.regs.bc());
                self.regs.set_a(value);
                7
            }
            1 => {
                let value = self.memory.read8(self.regs.de());
                self.regs.set_a(value);
                7
            }
            2 => {
                let addr = self.fetch16();
                let value = self.memory.read16(addr);
                self.regs.set_hl(value);
                16
            }
            _ => {
                let addr = self.fetch16();
                let value = self.memory.read8(addr);
                self.regs.set_a(value);
                13
            }
        }
    }

    /// LD r,n (and LD (HL),n)
    pub(super) fn exec_ld_r_n(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 0 && op.z == 6);

        let reg = R8::from_index(op.y);
        let value = self.fetch8();
        self.write_r8(reg, value);

        if reg.is_indirect() { 10 } else { 7 }
    }

    /// LD r,r' over the whole 0x40–0x7F block except HALT.
    pub(super) fn exec_ld_r_r(&mut self, op: Opcode) -> u32 {
        debug_assert!(op.x == 1 && op.raw != 0x76);

        let dst = R8::from_index(op.y);
        let src = R8::from_index(op.z);
        let value = self.read_r8(src);
        self.write_r8(dst, value);

        if dst.is_indirect() || src.is_indirect() { 7 } else { 4 }
    }
}
