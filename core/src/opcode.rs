use crate::error::Chip8Error;

/// # Opcodes
///
/// Chip-8 opcodes are two bytes, stored big-endian. Dispatch looks at:
/// - `(n, _, _, _)` the instruction family
/// - `(_, _, _, n)` or `(_, _, n, n)` the variant within a family
/// - `(_, n, n, n)` fixed instructions such as CLS and RET
///
/// The remaining nibbles are operands:
/// - `[_adr]` a 12-bit address
/// - `[__kk]` a byte assigned to or compared with Vx
/// - `[_x__]` the register Vx, or the last register of V0..Vx
/// - `[__y_]` the register Vy
/// - `[___n]` a sprite height
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[_x__]`
    fn x(&self) -> usize;

    /// `[__y_]`
    fn y(&self) -> usize;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            ((self & 0xF000) >> 12) as u8,
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines the two bytes at `pc` into an opcode.
pub fn fetch(memory: &[u8], pc: u16) -> Result<u16, Chip8Error> {
    let pc = pc as usize;
    match (memory.get(pc), memory.get(pc + 1)) {
        (Some(&left), Some(&right)) => Ok(u16::from(left) << 8 | u16::from(right)),
        _ => Err(Chip8Error::AddressOutOfBounds(pc)),
    }
}
