use typed_builder::TypedBuilder;

use super::memory::Memory;
use super::regs::{Bank, RegisterPair, Registers};
use super::Cpu;

/// Register state applied on construction and on `Cpu::reset`.
///
/// The defaults follow the documented power-on state: AF and SP read as
/// 0xFFFF, the remaining registers are undefined on real silicon and are
/// filled with `register_fill`, I and R start at zero and execution begins at
/// `pc`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct ResetConfig {
    #[builder(default = 0xFF)]
    pub register_fill: u8,
    #[builder(default = 0x0000)]
    pub pc: u16,
    #[builder(default = 0xFFFF)]
    pub sp: u16,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(ResetConfig::default())
    }

    pub fn with_config(config: ResetConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: Memory::new(),
            cycles: 0,
            config,
        };
        cpu.apply_reset_state();
        cpu
    }

    pub fn config(&self) -> ResetConfig {
        self.config
    }

    /// Reset registers and the cycle counter. Memory is left untouched so
    /// that a loaded program survives the reset.
    pub fn reset(&mut self) {
        self.apply_reset_state();
        self.cycles = 0;
        log::debug!("Z80 reset: {}", self.regs);
    }

    fn apply_reset_state(&mut self) {
        let fill = self.config.register_fill;
        let fill_word = u16::from_be_bytes([fill, fill]);

        let mut main = Bank::filled(fill);
        let mut alt = Bank::filled(fill);
        main.af.set_word(0xFFFF);
        alt.af.set_word(0xFFFF);

        self.regs = Registers {
            main,
            alt,
            pc: self.config.pc,
            sp: self.config.sp,
            ix: RegisterPair::new(fill_word),
            iy: RegisterPair::new(fill_word),
            i: 0,
            r: 0,
        };
    }
}
