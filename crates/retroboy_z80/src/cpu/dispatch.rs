use lazy_static::lazy_static;

use super::decode::decode;
use super::exec::{self, Handler};

lazy_static! {
    /// Opcode byte -> handler, resolved once from the decoded fields.
    ///
    /// The table is immutable after construction; `None` marks slots the
    /// core does not execute (prefixes, HALT, DAA and most of group x=3).
    static ref DISPATCH: [Option<Handler>; 256] = build_table();
}

fn build_table() -> [Option<Handler>; 256] {
    let mut table: [Option<Handler>; 256] = [None; 256];
    for (byte, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
        *slot = exec::route(decode(byte));
    }
    let mapped = table.iter().filter(|slot| slot.is_some()).count();
    log::debug!("Z80 dispatch table built: {mapped}/256 opcodes mapped");
    table
}

#[inline]
pub(super) fn lookup(opcode: u8) -> Option<Handler> {
    DISPATCH[opcode as usize]
}

/// Whether `opcode` has a handler in this core.
pub fn is_implemented(opcode: u8) -> bool {
    lookup(opcode).is_some()
}
