use super::Cpu;

impl Cpu {
    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.memory.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian immediate word.
    #[inline]
    pub(super) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word so that memory[SP] = low and memory[SP+1] = high after
    /// the push. The stack grows downward.
    #[inline]
    pub fn push16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write8(self.regs.sp, lo);
    }

    #[inline]
    pub fn pop16(&mut self) -> u16 {
        let value = self.memory.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Relative jump helper used by DJNZ, JR and JR cc.
    ///
    /// The displacement byte is always consumed; it is a signed offset from
    /// the address following it. Returns whether the jump was taken.
    pub(super) fn jr(&mut self, cond: bool) -> bool {
        let offset = self.fetch8() as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
        }
        cond
    }

    /// Conditional return helper used by RET cc.
    pub(super) fn ret_cond(&mut self, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop16();
            11
        } else {
            5
        }
    }
}
