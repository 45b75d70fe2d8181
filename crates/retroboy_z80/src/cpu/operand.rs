use super::regs::Flags;
use super::Cpu;

/// 8-bit operand selected by a 3-bit opcode field (the `r` table).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory addressed by HL.
    IndHl,
    A,
}

impl R8 {
    /// Resolve a 3-bit field: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    /// Only the low three bits of `index` are used.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::IndHl,
            _ => R8::A,
        }
    }

    /// Whether the operand goes through memory and so costs extra cycles.
    #[inline]
    pub const fn is_indirect(self) -> bool {
        matches!(self, R8::IndHl)
    }
}

/// 16-bit register pair selected by a 2-bit opcode field.
///
/// Both the `rp` ("dd") and `rp2` ("qq") tables resolve to this type, so
/// handlers that take a `Pair` work with either table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    BC,
    DE,
    HL,
    SP,
    AF,
}

impl Pair {
    /// `rp` table: BC, DE, HL, SP. Used by 16-bit loads, INC/DEC rr and
    /// `ADD HL,rr`.
    #[inline]
    pub const fn rp(index: u8) -> Self {
        match index & 0x03 {
            0 => Pair::BC,
            1 => Pair::DE,
            2 => Pair::HL,
            _ => Pair::SP,
        }
    }

    /// `rp2` table: BC, DE, HL, AF. The stack instructions select through
    /// this table instead of `rp`.
    #[inline]
    pub const fn rp2(index: u8) -> Self {
        match index & 0x03 {
            0 => Pair::BC,
            1 => Pair::DE,
            2 => Pair::HL,
            _ => Pair::AF,
        }
    }
}

/// Branch condition selected by the `cc` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    NonZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    /// 0=NZ, 1=Z, 2=NC, 3=C, 4=PO, 5=PE, 6=P, 7=M.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Condition::NonZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            _ => Condition::Minus,
        }
    }
}

impl Cpu {
    /// Read the location selected by `r`. `(HL)` reads memory.
    #[inline]
    pub fn read_r8(&self, r: R8) -> u8 {
        match r {
            R8::B => self.regs.b(),
            R8::C => self.regs.c(),
            R8::D => self.regs.d(),
            R8::E => self.regs.e(),
            R8::H => self.regs.h(),
            R8::L => self.regs.l(),
            R8::IndHl => self.memory.read8(self.regs.hl()),
            R8::A => self.regs.a(),
        }
    }

    /// Write the location selected by `r`. `(HL)` writes memory.
    #[inline]
    pub fn write_r8(&mut self, r: R8, value: u8) {
        match r {
            R8::B => self.regs.set_b(value),
            R8::C => self.regs.set_c(value),
            R8::D => self.regs.set_d(value),
            R8::E => self.regs.set_e(value),
            R8::H => self.regs.set_h(value),
            R8::L => self.regs.set_l(value),
            R8::IndHl => {
                let addr = self.regs.hl();
                self.memory.write8(addr, value);
            }
            R8::A => self.regs.set_a(value),
        }
    }

    #[inline]
    pub fn read_pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::BC => self.regs.bc(),
            Pair::DE => self.regs.de(),
            Pair::HL => self.regs.hl(),
            Pair::SP => self.regs.sp,
            Pair::AF => self.regs.af(),
        }
    }

    #[inline]
    pub fn write_pair(&mut self, pair: Pair, value: u16) {
        match pair {
            Pair::BC => self.regs.set_bc(value),
            Pair::DE => self.regs.set_de(value),
            Pair::HL => self.regs.set_hl(value),
            Pair::SP => self.regs.sp = value,
            Pair::AF => self.regs.set_af(value),
        }
    }

    /// Evaluate a branch condition against the current flags.
    #[inline]
    pub fn test_condition(&self, cc: Condition) -> bool {
        match cc {
            Condition::NonZero => !self.get_flag(Flags::Z),
            Condition::Zero => self.get_flag(Flags::Z),
            Condition::NoCarry => !self.get_flag(Flags::C),
            Condition::Carry => self.get_flag(Flags::C),
            Condition::ParityOdd => !self.get_flag(Flags::PV),
            Condition::ParityEven => self.get_flag(Flags::PV),
            Condition::Plus => !self.get_flag(Flags::S),
            Condition::Minus => self.get_flag(Flags::S),
        }
    }
}
