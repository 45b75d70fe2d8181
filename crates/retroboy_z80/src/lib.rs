//! Z80 CPU core: opcode decoding, operand selection and the semantics of the
//! unprefixed instruction groups.
//!
//! The crate only models the CPU and its flat 64 KiB memory. Interrupts,
//! port I/O, the prefixed tables and the outer run loop belong to whatever
//! machine embeds it.

pub mod cpu;
mod error;

pub use cpu::decode::{decode, Opcode};
pub use cpu::memory::{Memory, MEMORY_SIZE};
pub use cpu::operand::{Condition, Pair, R8};
pub use cpu::regs::{Bank, Flags, RegisterPair, Registers};
pub use cpu::{is_implemented, Cpu, ResetConfig};
pub use error::StepError;
