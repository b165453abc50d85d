use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::operations::*;

/// Selects the Operation a given opcode decodes to
pub fn from_op(op: u16) -> Result<Operation, Chip8Error> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, _, 0x9, 0xE) => skpr,
        (0xE, _, 0xA, 0x1) => skup,
        (0xF, _, 0x0, 0x7) => moved,
        (0xF, _, 0x0, 0xA) => keyd,
        (0xF, _, 0x1, 0x5) => loads,
        (0xF, _, 0x1, 0x8) => ld,
        (0xF, _, 0x1, 0xE) => addi,
        (0xF, _, 0x2, 0x9) => ldspr,
        (0xF, _, 0x3, 0x3) => bcd,
        (0xF, _, 0x5, 0x5) => stor,
        (0xF, _, 0x6, 0x5) => read,
        _ => return Err(Chip8Error::UnknownOpcode(op)),
    };
    Ok(operation)
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use crate::state::{FrameBuffer, State};

    const NO_KEYS: Keypad = [false; 16];

    fn exec(op: u16, state: &State, keys: &Keypad) -> State {
        from_op(op).unwrap()(&op, state, keys).unwrap()
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(from_op(0x5121).err(), Some(Chip8Error::UnknownOpcode(0x5121)));
        assert_eq!(from_op(0xFFFF).err(), Some(Chip8Error::UnknownOpcode(0xFFFF)));
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = State::new();
        state.frame_buffer.set(0, 0, true);
        let state = exec(0x00E0, &state, &NO_KEYS);
        assert!(state.frame_buffer == FrameBuffer::new());
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = State::new();
        state.sp = 0x1;
        state.stack[0] = 0x0ABC;
        let state = exec(0x00EE, &state, &NO_KEYS);
        assert_eq!(state.sp, 0x0);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_underflow() {
        let state = State::new();
        let op = 0x00EE;
        let result = from_op(op).unwrap()(&op, &state, &NO_KEYS);
        assert_eq!(result.err(), Some(Chip8Error::StackUnderflow { pc: 0x200 }));
    }

    #[test]
    fn test_1nnn_jp() {
        let state = exec(0x1ABC, &State::new(), &NO_KEYS);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = State::new();
        state.pc = 0x0ABC;
        let state = exec(0x2123, &state, &NO_KEYS);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0], 0x0ABE);
        assert_eq!(state.pc, 0x0123);
    }

    #[test]
    fn test_2nnn_call_then_ret() {
        let state = exec(0x2300, &State::new(), &NO_KEYS);
        let state = exec(0x00EE, &state, &NO_KEYS);
        assert_eq!(state.pc, 0x202);
        assert_eq!(state.sp, 0x0);
    }

    #[test]
    fn test_2nnn_call_overflow() {
        let mut state = State::new();
        state.sp = 16;
        let op = 0x2123;
        let result = from_op(op).unwrap()(&op, &state, &NO_KEYS);
        assert_eq!(result.err(), Some(Chip8Error::StackOverflow { pc: 0x200 }));
    }

    #[test]
    fn test_3xkk_se() {
        let mut state = State::new();
        assert_eq!(exec(0x3111, &state, &NO_KEYS).pc, 0x0202);
        state.v[0x1] = 0x11;
        assert_eq!(exec(0x3111, &state, &NO_KEYS).pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne() {
        let mut state = State::new();
        assert_eq!(exec(0x4111, &state, &NO_KEYS).pc, 0x0204);
        state.v[0x1] = 0x11;
        assert_eq!(exec(0x4111, &state, &NO_KEYS).pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        assert_eq!(exec(0x5120, &state, &NO_KEYS).pc, 0x0202);
        state.v[0x2] = 0x11;
        assert_eq!(exec(0x5120, &state, &NO_KEYS).pc, 0x0204);
    }

    #[test]
    fn test_6xkk_ld() {
        let state = exec(0x6122, &State::new(), &NO_KEYS);
        assert_eq!(state.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add_wraps_without_carry() {
        let mut state = State::new();
        state.v[0x1] = 0xF0;
        state.v[0xF] = 0xA;
        let state = exec(0x7111, &state, &NO_KEYS);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0xA);
    }

    #[test]
    fn test_8xy0_to_8xy3_logic() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        assert_eq!(exec(0x8120, &state, &NO_KEYS).v[0x1], 0x3);
        assert_eq!(exec(0x8121, &state, &NO_KEYS).v[0x1], 0x7);
        assert_eq!(exec(0x8122, &state, &NO_KEYS).v[0x1], 0x2);
        assert_eq!(exec(0x8123, &state, &NO_KEYS).v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add() {
        let mut state = State::new();
        state.v[0x1] = 0xEE;
        state.v[0x2] = 0x11;
        let no_carry = exec(0x8124, &state, &NO_KEYS);
        assert_eq!((no_carry.v[0x1], no_carry.v[0xF]), (0xFF, 0x0));

        state.v[0x1] = 0xFF;
        let carry = exec(0x8124, &state, &NO_KEYS);
        assert_eq!((carry.v[0x1], carry.v[0xF]), (0x10, 0x1));
    }

    #[test]
    fn test_8xy5_sub() {
        let mut state = State::new();
        state.v[0x1] = 0x33;
        state.v[0x2] = 0x11;
        let no_borrow = exec(0x8125, &state, &NO_KEYS);
        assert_eq!((no_borrow.v[0x1], no_borrow.v[0xF]), (0x22, 0x1));

        state.v[0x1] = 0x11;
        state.v[0x2] = 0x12;
        let borrow = exec(0x8125, &state, &NO_KEYS);
        assert_eq!((borrow.v[0x1], borrow.v[0xF]), (0xFF, 0x0));
    }

    #[test]
    fn test_8xy6_shr() {
        let mut state = State::new();
        state.v[0x1] = 0x5;
        let state = exec(0x8106, &state, &NO_KEYS);
        assert_eq!((state.v[0x1], state.v[0xF]), (0x2, 0x1));
    }

    #[test]
    fn test_8xy7_subn() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x33;
        let state = exec(0x8127, &state, &NO_KEYS);
        assert_eq!((state.v[0x1], state.v[0xF]), (0x22, 0x1));
    }

    #[test]
    fn test_8xye_shl() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        let msb = exec(0x810E, &state, &NO_KEYS);
        assert_eq!((msb.v[0x1], msb.v[0xF]), (0xFE, 0x1));

        state.v[0x1] = 0x4;
        let no_msb = exec(0x810E, &state, &NO_KEYS);
        assert_eq!((no_msb.v[0x1], no_msb.v[0xF]), (0x8, 0x0));
    }

    #[test]
    fn test_9xy0_sne() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        assert_eq!(exec(0x9120, &state, &NO_KEYS).pc, 0x0204);
        state.v[0x2] = 0x11;
        assert_eq!(exec(0x9120, &state, &NO_KEYS).pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let state = exec(0xAABC, &State::new(), &NO_KEYS);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = State::new();
        state.v[0x0] = 0x2;
        let state = exec(0xBABC, &state, &NO_KEYS);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let state = exec(0xC100, &State::new(), &NO_KEYS);
        assert_eq!(state.v[0x1], 0x0);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = State::new();
        state.v[0x0] = 0x1;
        // Draw the "0" font sprite with a 1x 1y offset
        let state = exec(0xD005, &state, &NO_KEYS);
        let rows = [
            [true, true, true, true],
            [true, false, false, true],
            [true, false, false, true],
            [true, false, false, true],
            [true, true, true, true],
        ];
        for (dy, row) in rows.iter().enumerate() {
            for (dx, expected) in row.iter().enumerate() {
                assert_eq!(state.frame_buffer.get(1 + dx, 1 + dy), *expected);
            }
        }
        let lit = state.frame_buffer.pixels().iter().filter(|p| **p).count();
        assert_eq!(lit, 14);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = State::new();
        state.frame_buffer.set(0, 0, true);
        let state = exec(0xD001, &state, &NO_KEYS);
        assert_eq!(state.v[0xF], 0x1);
        assert!(!state.frame_buffer.get(0, 0));
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = State::new();
        // 0 1 0 1 -> Set at x = 2..6
        state.frame_buffer.set(3, 0, true);
        state.frame_buffer.set(5, 0, true);
        // 1 1 1 1 -> Draw xor, starting at x = 2
        state.v[0x1] = 0x2;
        let state = exec(0xD101, &state, &NO_KEYS);
        let row: Vec<bool> = (2..6).map(|x| state.frame_buffer.get(x, 0)).collect();
        assert_eq!(row, vec![true, false, true, false]);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_dxyn_drw_wraps() {
        let mut state = State::new();
        state.v[0x1] = 62;
        state.v[0x2] = 31;
        // Top row of the "0" sprite is 1111
        let state = exec(0xD122, &state, &NO_KEYS);
        assert!(state.frame_buffer.get(62, 31));
        assert!(state.frame_buffer.get(63, 31));
        assert!(state.frame_buffer.get(0, 31));
        assert!(state.frame_buffer.get(1, 31));
        assert!(state.frame_buffer.get(62, 0));
    }

    #[test]
    fn test_dxyn_drw_out_of_bounds() {
        let mut state = State::new();
        state.i = 0xFFE;
        let op = 0xD005;
        let result = from_op(op).unwrap()(&op, &state, &NO_KEYS);
        assert_eq!(result.err(), Some(Chip8Error::AddressOutOfBounds(0x1002)));
    }

    #[test]
    fn test_ex9e_skp() {
        let mut state = State::new();
        let mut keys = NO_KEYS;
        state.v[0x1] = 0xE;
        assert_eq!(exec(0xE19E, &state, &keys).pc, 0x0202);
        keys[0xE] = true;
        assert_eq!(exec(0xE19E, &state, &keys).pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp() {
        let mut state = State::new();
        let mut keys = NO_KEYS;
        state.v[0x1] = 0xE;
        assert_eq!(exec(0xE1A1, &state, &keys).pc, 0x0204);
        keys[0xE] = true;
        assert_eq!(exec(0xE1A1, &state, &keys).pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = State::new();
        state.delay_timer = 0xF;
        assert_eq!(exec(0xF107, &state, &NO_KEYS).v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_sets_register_needing_key() {
        let state = exec(0xF10A, &State::new(), &NO_KEYS);
        assert_eq!(state.register_needing_key, Some(0x1));
    }

    #[test]
    fn test_fx15_fx18_timers() {
        let mut state = State::new();
        state.v[0x1] = 0xF;
        assert_eq!(exec(0xF115, &state, &NO_KEYS).delay_timer, 0xF);
        assert_eq!(exec(0xF118, &state, &NO_KEYS).sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = State::new();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        assert_eq!(exec(0xF11E, &state, &NO_KEYS).i, 0x2);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = State::new();
        state.v[0x1] = 0x2;
        assert_eq!(exec(0xF129, &state, &NO_KEYS).i, 0xA);
    }

    #[test]
    fn test_fx33_bcd() {
        let mut state = State::new();
        state.v[0x1] = 123;
        state.i = 0x300;
        let state = exec(0xF133, &state, &NO_KEYS);
        assert_eq!(state.memory[0x300..0x303], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx55_fx65_round_trip_registers() {
        let mut state = State::new();
        state.i = 0x300;
        state.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        let stored = exec(0xF455, &state, &NO_KEYS);
        assert_eq!(stored.memory[0x300..0x305], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(stored.memory[0x305], 0x0);

        let mut cleared = stored;
        cleared.v = [0; 16];
        let read = exec(0xF465, &cleared, &NO_KEYS);
        assert_eq!(read.v[0x0..0x5], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(read.v[0x5], 0x0);
    }
}
