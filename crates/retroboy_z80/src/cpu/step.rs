use super::decode::decode;
use super::dispatch;
use super::Cpu;
use crate::error::StepError;

impl Cpu {
    /// Execute a single instruction and return the number of T-states taken.
    ///
    /// The opcode fetch advances PC and R before decoding. If the opcode has
    /// no handler, the step fails with `StepError::UnimplementedOpcode`; PC
    /// and R stay advanced past the opcode byte and the cycle counter is left
    /// unchanged.
    pub fn step(&mut self) -> Result<u32, StepError> {
        let pc = self.regs.pc;
        let opcode = self.fetch8();
        self.increment_refresh();

        let op = decode(opcode);
        let Some(handler) = dispatch::lookup(opcode) else {
            log::error!(
                "Z80 unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} ({regs})",
                regs = self.regs,
            );
            return Err(StepError::UnimplementedOpcode { opcode, pc });
        };

        let cycles = handler(self, op);
        self.cycles += u64::from(cycles);

        log::trace!("Z80 {pc:04X}: {opcode:02X} -> {cycles} T ({})", self.regs);
        Ok(cycles)
    }

    #[inline]
    fn increment_refresh(&mut self) {
        self.regs.r = self.regs.r.wrapping_add(1);
    }
}
