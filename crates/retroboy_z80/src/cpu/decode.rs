/// An opcode byte split into its canonical fields.
///
/// ```text
///   7 6 | 5 4 3 | 2 1 0
///    x  |   y   |   z
///       | p   q |
/// ```
///
/// Every dispatch decision in the core is made on these fields rather than
/// on raw byte values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub raw: u8,
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub p: u8,
    pub q: u8,
}

/// Split `byte` into `(x, y, z, p, q)`. Total over all 256 inputs.
#[inline]
pub const fn decode(byte: u8) -> Opcode {
    let y = (byte >> 3) & 0x07;
    Opcode {
        raw: byte,
        x: byte >> 6,
        y,
        z: byte & 0x07,
        p: y >> 1,
        q: y & 0x01,
    }
}
