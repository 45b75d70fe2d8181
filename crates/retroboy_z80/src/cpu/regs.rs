use std::fmt;

use bitflags::bitflags;

/// A 16-bit register that can also be addressed as two 8-bit lanes.
///
/// The word is kept in a single `u16`; the high and low lanes are views over
/// that storage, so writing a lane updates the word and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterPair(u16);

impl RegisterPair {
    #[inline]
    pub const fn new(word: u16) -> Self {
        Self(word)
    }

    #[inline]
    pub const fn word(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set_word(&mut self, value: u16) {
        self.0 = value;
    }

    #[inline]
    pub const fn hi(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    #[inline]
    pub const fn lo(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    #[inline]
    pub fn set_hi(&mut self, value: u8) {
        self.0 = u16::from_be_bytes([value, self.lo()]);
    }

    #[inline]
    pub fn set_lo(&mut self, value: u8) {
        self.0 = u16::from_be_bytes([self.hi(), value]);
    }
}

/// One register bank: A/F, B/C, D/E and H/L.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bank {
    pub af: RegisterPair,
    pub bc: RegisterPair,
    pub de: RegisterPair,
    pub hl: RegisterPair,
}

impl Bank {
    /// A bank whose every register holds `fill`.
    pub const fn filled(fill: u8) -> Self {
        let word = u16::from_be_bytes([fill, fill]);
        Self {
            af: RegisterPair::new(word),
            bc: RegisterPair::new(word),
            de: RegisterPair::new(word),
            hl: RegisterPair::new(word),
        }
    }
}

/// Register file for the Z80.
///
/// Only `main` is visible to ordinary opcodes; `alt` is reached through the
/// exchange instructions. The 8-bit accessors below all address the main
/// bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub main: Bank,
    pub alt: Bank,
    pub pc: u16,
    pub sp: u16,
    pub ix: RegisterPair,
    pub iy: RegisterPair,
    /// Interrupt vector base.
    pub i: u8,
    /// Memory refresh counter.
    pub r: u8,
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        self.main.af.hi()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.main.af.set_hi(value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.main.af.lo()
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.main.af.set_lo(value);
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.main.bc.hi()
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.main.bc.set_hi(value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.main.bc.lo()
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.main.bc.set_lo(value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.main.de.hi()
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.main.de.set_hi(value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.main.de.lo()
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.main.de.set_lo(value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.main.hl.hi()
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.main.hl.set_hi(value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.main.hl.lo()
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.main.hl.set_lo(value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.main.af.word()
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.main.af.set_word(value);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.main.bc.word()
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.main.bc.set_word(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.main.de.word()
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.main.de.set_word(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.main.hl.word()
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.main.hl.set_word(value);
    }

    /// `EX AF,AF'`: swap the accumulator/flag pair with the alternate bank.
    #[inline]
    pub fn exchange_af(&mut self) {
        std::mem::swap(&mut self.main.af, &mut self.alt.af);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC={:04X} SP={:04X} AF={:04X} BC={:04X} DE={:04X} HL={:04X} \
             AF'={:04X} BC'={:04X} DE'={:04X} HL'={:04X} IX={:04X} IY={:04X} I={:02X} R={:02X}",
            self.pc,
            self.sp,
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            self.alt.af.word(),
            self.alt.bc.word(),
            self.alt.de.word(),
            self.alt.hl.word(),
            self.ix.word(),
            self.iy.word(),
            self.i,
            self.r,
        )
    }
}

bitflags! {
    /// Flag bits in the F register.
    ///
    /// `F5` and `F3` are the undocumented copies of result bits 5 and 3.
    /// This core does not model them: instructions leave them untouched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Sign
        const S = 0x80;
        /// Zero
        const Z = 0x40;
        const F5 = 0x20;
        /// Half carry
        const H = 0x10;
        const F3 = 0x08;
        /// Parity / overflow
        const PV = 0x04;
        /// Add / subtract
        const N = 0x02;
        /// Carry
        const C = 0x01;
    }
}
