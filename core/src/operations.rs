use std::ops::Range;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, STACK_SIZE};
use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, State};

/// Pressed status of the hex keys 0..F
pub type Keypad = [bool; 16];

/// Every instruction maps the current state to the next one
pub type Operation = fn(op: &dyn Opcode, state: &State, keys: &Keypad) -> Result<State, Chip8Error>;

/// Memory range `i..i + len`, if it lies inside memory
fn span(i: u16, len: usize) -> Result<Range<usize>, Chip8Error> {
    let start = i as usize;
    if start + len > MEMORY_SIZE {
        return Err(Chip8Error::AddressOutOfBounds(start + len - 1));
    }
    Ok(start..start + len)
}

/// The pc of the next instruction, or the one after it when `skip` holds
fn skip_if(state: &State, skip: bool) -> u16 {
    if skip {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    }
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        frame_buffer: FrameBuffer::new(),
        ..*state
    })
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let sp = state
        .sp
        .checked_sub(0x1)
        .ok_or(Chip8Error::StackUnderflow { pc: state.pc })?;
    Ok(State {
        pc: state.stack[sp as usize],
        sp,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: op.addr(),
        ..*state
    })
}

/// STACK.push(PC + 2); PC = addr
pub fn call(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    if state.sp as usize >= STACK_SIZE {
        return Err(Chip8Error::StackOverflow { pc: state.pc });
    }
    let mut stack = state.stack;
    stack[state.sp as usize] = state.pc + 0x2;
    Ok(State {
        pc: op.addr(),
        sp: state.sp + 0x1,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, state.v[op.x()] == op.kk());
    Ok(State { pc, ..*state })
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, state.v[op.x()] != op.kk());
    Ok(State { pc, ..*state })
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, state.v[op.x()] == state.v[op.y()]);
    Ok(State { pc, ..*state })
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] = op.kk();
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx += kk
/// Overflow wraps and leaves VF alone
pub fn add(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] = v[op.x()].wrapping_add(op.kk());
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] = v[op.y()];
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] |= v[op.y()];
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] &= v[op.y()];
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] ^= v[op.y()];
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    let mut v = state.v;
    v[op.x()] = res;
    v[0xF] = over as u8;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    let mut v = state.v;
    v[op.x()] = res;
    v[0xF] = !under as u8;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    let lsb = v[op.x()] & 0x1;
    v[op.x()] >>= 1;
    v[0xF] = lsb;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    let mut v = state.v;
    v[op.x()] = res;
    v[0xF] = !under as u8;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    let msb = v[op.x()] >> 7;
    v[op.x()] <<= 1;
    v[0xF] = msb;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, state.v[op.x()] != state.v[op.y()]);
    Ok(State { pc, ..*state })
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        i: op.addr(),
        ..*state
    })
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: u16::from(state.v[0x0]) + op.addr(),
        ..*state
    })
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let rand_byte: u8 = rand::random();
    let mut v = state.v;
    v[op.x()] = rand_byte & op.kk();
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels are erased
pub fn draw(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let sprite = &state.memory[span(state.i, op.n() as usize)?];
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;
    let mut collision = false;

    for (row, byte) in sprite.iter().enumerate() {
        let y = (state.v[op.y()] as usize + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let x = (state.v[op.x()] as usize + bit) % DISPLAY_WIDTH;
            // toggle returns the new value, so false means a lit pixel was erased
            collision |= !frame_buffer.toggle(x, y);
        }
    }
    v[0xF] = collision as u8;

    Ok(State {
        pc: state.pc + 0x2,
        v,
        frame_buffer,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &State, keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, keys[(state.v[op.x()] & 0xF) as usize]);
    Ok(State { pc, ..*state })
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &State, keys: &Keypad) -> Result<State, Chip8Error> {
    let pc = skip_if(state, !keys[(state.v[op.x()] & 0xF) as usize]);
    Ok(State { pc, ..*state })
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[op.x()] = state.delay_timer;
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// await keypress for Vx
pub fn keyd(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        register_needing_key: Some(op.x() as u8),
        ..*state
    })
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        delay_timer: state.v[op.x()],
        ..*state
    })
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        sound_timer: state.v[op.x()],
        ..*state
    })
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        i: state.i.wrapping_add(u16::from(state.v[op.x()])),
        ..*state
    })
}

/// I = Vx * 5
/// Point I at the font sprite for the low nibble of Vx
pub fn ldspr(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    Ok(State {
        pc: state.pc + 0x2,
        i: u16::from(state.v[op.x()] & 0xF) * 5,
        ..*state
    })
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let vx = state.v[op.x()];
    let mut memory = state.memory;
    memory[span(state.i, 3)?].copy_from_slice(&[vx / 100, vx / 10 % 10, vx % 10]);
    Ok(State {
        pc: state.pc + 0x2,
        memory,
        ..*state
    })
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut memory = state.memory;
    memory[span(state.i, op.x() + 1)?].copy_from_slice(&state.v[..=op.x()]);
    Ok(State {
        pc: state.pc + 0x2,
        memory,
        ..*state
    })
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &State, _keys: &Keypad) -> Result<State, Chip8Error> {
    let mut v = state.v;
    v[..=op.x()].copy_from_slice(&state.memory[span(state.i, op.x() + 1)?]);
    Ok(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}
