use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) a 8-bit stack pointer, pointing at the most recent return address
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - While the sound timer is non-zero a tone plays
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
/// - 64x32 frame buffer holding the contents of the next frame to be drawn
///
/// ## Input
/// - Emulation halts until a key's value is written to `register_needing_key`
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 is reserved for a sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: FrameBuffer::new(),
            register_needing_key: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

const FRAME_LEN: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// # FrameBuffer
/// Monochrome pixels stored row-major: pixel `(x, y)` lives at `y * DISPLAY_WIDTH + x`.
#[derive(Copy, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: [bool; FRAME_LEN],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [false; FRAME_LEN],
        }
    }

    pub fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    pub fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    /// Flat index of pixel `(x, y)`. Coordinates are not checked.
    pub fn index(x: usize, y: usize) -> usize {
        y * DISPLAY_WIDTH + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.pixels[Self::index(x, y)] = on;
    }

    /// Inverts pixel `(x, y)` and returns its new value.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[Self::index(x, y)];
        *pixel = !*pixel;
        *pixel
    }

    /// Reads a pixel by its flat index.
    pub fn pixel(&self, index: usize) -> bool {
        self.pixels[index]
    }

    pub fn clear(&mut self) {
        self.pixels = [false; FRAME_LEN];
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
