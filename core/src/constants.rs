/// Width of the Chip-8 display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// Height of the Chip-8 display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory
pub const MEMORY_SIZE: usize = 4096;
/// Address at which ROMs are loaded and execution begins
pub const PROGRAM_START: u16 = 0x200;
/// Largest ROM that fits between PROGRAM_START and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Depth of the call stack
pub const STACK_SIZE: usize = 16;

/// Value the debug controls force the sound timer to
pub const SOUND_TIMER_MAX: u8 = u8::MAX;

/// Instructions executed per second when no rate is configured
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 500;

/// How many past states are kept for rewinding
pub const MAX_SAVED_STATES: usize = 1000;

/// Hexadecimal digit sprites 0..F, 5 bytes each, stored at the start of memory
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
