use super::regs::Flags;
use super::Cpu;

/// Even parity of `value`, as reported in P/V by the logical operations.
#[inline]
fn parity_even(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

impl Cpu {
    /// Update S and Z from an 8-bit result.
    #[inline]
    fn set_sz(&mut self, result: u8) {
        self.set_flag(Flags::S, (result & 0x80) != 0);
        self.set_flag(Flags::Z, result == 0);
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.set_a(result);

        // Overflow: both operands share a sign that the result does not.
        self.set_sz(result);
        self.set_flag(Flags::H, (half & 0x10) != 0);
        self.set_flag(Flags::PV, ((a ^ value) & 0x80) == 0 && ((a ^ result) & 0x80) != 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// Shared subtraction core for SUB, SBC and CP. Returns the result
    /// without storing it.
    fn alu_sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a();
        let carry_in = i16::from(use_carry && self.get_flag(Flags::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;

        // Overflow: operands differ in sign and the result's sign differs
        // from the minuend.
        self.set_sz(result);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::PV, ((a ^ value) & 0x80) != 0 && ((a ^ result) & 0x80) != 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::C, full < 0);

        result
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.alu_sub_flags(value, use_carry);
        self.regs.set_a(result);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.alu_sub_flags(value, false);
    }

    #[inline]
    fn set_logic_flags(&mut self, result: u8, half: bool) {
        self.set_sz(result);
        self.set_flag(Flags::H, half);
        self.set_flag(Flags::PV, parity_even(result));
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, false);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);
        self.set_logic_flags(result, true);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);
        self.set_logic_flags(result, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);
        self.set_logic_flags(result, false);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates S, Z, H, P/V and N while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_sz(result);
        self.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        self.set_flag(Flags::PV, result == 0x80);
        self.set_flag(Flags::N, false);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates S, Z, H, P/V and N while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_sz(result);
        self.set_flag(Flags::H, (value & 0x0F) == 0x00);
        self.set_flag(Flags::PV, result == 0x7F);
        self.set_flag(Flags::N, true);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// S, Z and P/V are unaffected; N is cleared; H is the carry out of
    /// bit 11 and C the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(result);
    }
}
