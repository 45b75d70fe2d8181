mod alu;
pub mod decode;
mod dispatch;
mod exec;
mod helpers;
mod init;
pub mod memory;
pub mod operand;
pub mod regs;
mod step;

pub use dispatch::is_implemented;
pub use init::ResetConfig;

use memory::Memory;
use regs::{Flags, Registers};

/// Z80 CPU core.
///
/// Owns the complete machine state seen by the unprefixed instruction set:
/// both register banks, the special-purpose registers, a flat 64 KiB memory
/// and a running T-state counter. Every instruction handler mutates this
/// struct in place; nothing else is shared between steps.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub memory: Memory,
    /// Total T-states consumed since the last reset.
    pub cycles: u64,
    config: ResetConfig,
}

impl Cpu {
    /// Current flag register as a typed set.
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.regs.f())
    }

    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    /// Read a single flag as `0` or `1`.
    #[inline]
    pub fn flag(&self, flag: Flags) -> u8 {
        u8::from(self.get_flag(flag))
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut f = self.flags();
        f.set(flag, value);
        self.regs.set_f(f.bits());
    }
}
