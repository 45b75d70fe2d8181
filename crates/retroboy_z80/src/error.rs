use thiserror::Error;

/// Conditions that stop a single `Cpu::step`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StepError {
    /// The fetched opcode has no handler in the dispatch table. This covers
    /// the CB/DD/ED/FD prefixes as well as slots such as HALT and DAA that
    /// this core does not execute.
    #[error("unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
}
