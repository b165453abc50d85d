use std::collections::VecDeque;

use log::trace;

use crate::constants::{MAX_SAVED_STATES, PROGRAM_START};
use crate::error::Chip8Error;
use crate::instruction::from_op;
use crate::opcode::fetch;
use crate::operations::Keypad;
use crate::rom::RomImage;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns:
///  - the current `state`, which front-ends read and poke through accessors
///  - `previous_states` for rewinding
///  - `pressed_keys` with public interfaces for manipulating them
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing and reversing the CPU
/// - advancing its timers
/// - inspecting and overriding the frame buffer and sound timer
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
    pressed_keys: Keypad,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
            pressed_keys: [false; 16],
        }
    }

    /// Resets the machine and copies `rom` to the program area
    pub fn load(&mut self, rom: &RomImage) {
        let start = PROGRAM_START as usize;
        self.state = State::new();
        self.state.memory[start..start + rom.len()].copy_from_slice(rom.bytes());
        self.previous_states.clear();
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Out-of-band access to the pixels, e.g. for debug tooling
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.state.frame_buffer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Overrides the sound timer; it keeps counting down from `value`
    pub fn set_sound_timer(&mut self, value: u8) {
        self.state.sound_timer = value;
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex value of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = true;
        if let Some(register) = self.state.register_needing_key {
            self.state.v[register as usize] = key;
            self.state.register_needing_key = None;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex value of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = false;
    }

    /// Advances the CPU by a single cycle
    /// - does nothing while awaiting a keypress
    /// - gets and executes the next opcode, keeping the prior state for rewinding
    ///
    /// On error the state is left untouched.
    pub fn advance_cpu(&mut self) -> Result<(), Chip8Error> {
        if self.state.register_needing_key.is_some() {
            return Ok(());
        }
        let op = fetch(&self.state.memory, self.state.pc)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        let next = from_op(op)?(&op, &self.state, &self.pressed_keys)?;
        self.save_state();
        self.state = next;
        Ok(())
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    pub fn reverse_cpu(&mut self) {
        if let Some(state) = self.previous_states.pop_front() {
            self.state = state
        }
    }

    /// Puts the current state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(self.state);
    }

    /// Decrements both timers by one tick, saturating at zero.
    /// Expected to be called at 60Hz.
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
