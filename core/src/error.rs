use thiserror::Error;

/// Faults raised while executing a ROM
#[derive(Debug, Error, PartialEq)]
pub enum Chip8Error {
    #[error("opcode {0:#06X} is not implemented")]
    UnknownOpcode(u16),

    #[error("call stack overflow at pc {pc:#06X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty call stack at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at address {0:#06X}")]
    AddressOutOfBounds(usize),
}
