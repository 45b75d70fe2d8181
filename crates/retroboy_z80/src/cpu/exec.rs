mod alu;
mod control;
mod incdec;
mod ld;
mod system;

use super::decode::Opcode;
use super::Cpu;

/// Instruction handler. Receives the decoded opcode (PC already points past
/// it) and returns the number of T-states the instruction took.
pub(super) type Handler = fn(&mut Cpu, Opcode) -> u32;

/// Resolve an opcode to its handler, or `None` if this core does not
/// implement the slot.
///
/// Routing follows the field layout: `x` selects the group, then `z` and
/// `y`/`p`/`q` select within it. This is only evaluated while building the
/// dispatch table, never on the step path.
pub(super) fn route(op: Opcode) -> Option<Handler> {
    match op.x {
        0 => route_x0(op),
        1 => route_x1(op),
        2 => Some(Cpu::exec_alu_r as Handler),
        3 => route_x3(op),
        _ => None,
    }
}

fn route_x0(op: Opcode) -> Option<Handler> {
    let handler: Handler = match op.z {
        0 => match op.y {
            0 => Cpu::exec_nop,
            1 => Cpu::exec_ex_af_af,
            2 => Cpu::exec_djnz,
            3 => Cpu::exec_jr,
            _ => Cpu::exec_jr_cc,
        },
        1 => match op.q {
            0 => Cpu::exec_ld_rp_nn,
            _ => Cpu::exec_add_hl_rp,
        },
        2 => match op.q {
            0 => Cpu::exec_ld_indirect_store,
            _ => Cpu::exec_ld_indirect_load,
        },
        3 => match op.q {
            0 => Cpu::exec_inc16_rp,
            _ => Cpu::exec_dec16_rp,
        },
        4 => Cpu::exec_inc8_r,
        5 => Cpu::exec_dec8_r,
        6 => Cpu::exec_ld_r_n,
        _ => match op.y {
            0..=3 => Cpu::exec_rotate_a,
            // DAA
            4 => return None,
            5 => Cpu::exec_cpl,
            6 => Cpu::exec_scf,
            _ => Cpu::exec_ccf,
        },
    };
    Some(handler)
}

fn route_x1(op: Opcode) -> Option<Handler> {
    // LD (HL),(HL) encodes HALT.
    if op.y == 6 && op.z == 6 {
        return None;
    }
    Some(Cpu::exec_ld_r_r as Handler)
}

fn route_x3(op: Opcode) -> Option<Handler> {
    match op.z {
        0 => Some(Cpu::exec_ret_cc as Handler),
        _ => None,
    }
}
