use std::time::Instant;

use anyhow::Context;
use log::{debug, error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use c8_audio::Beeper;
use c8_core::{load_rom, Chip8};
use c8_display::{Display, DisplayError};

use crate::debug::{
    override_sound, sound_gate, toggle_random_pixels, DebugAction, DebugPanel, VOLUME_STEP,
};
use crate::fps::FpsCounter;
use crate::keymap::{debug_keymap, keymap};
use crate::open::{FileDrop, OpenOutcome};
use crate::settings::Settings;

/// Whether the CPU may run; a fault halts it until the next ROM is opened or it is rewound
type Halt = Option<c8_core::Chip8Error>;

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    if let Some(path) = &settings.rom {
        let rom = load_rom(path).with_context(|| format!("unable to load {}", path.display()))?;
        chip8.load(&rom);
        info!("loaded {} ({} bytes)", path.display(), rom.len());
    } else {
        info!("no ROM given, drop one on the window to start");
    }

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, settings.pixel_size.into())?;
    let beeper = Beeper::new(&sdl, settings.volume)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let mut panel = DebugPanel::new(settings.volume, settings.pixel_size.into());
    let mut drops = FileDrop::default();
    let mut fps = FpsCounter::new(Instant::now());
    let mut title = String::new();
    let mut halt: Halt = None;

    let frame_time = settings.frame_time();
    let cycles = settings.cycles_per_frame();

    // Whether or not the frame rate should be respected
    let mut fast_forward: bool = false;
    // Whether the game's state should be cycled forwards or backwards
    let mut rewind: bool = false;

    'frame: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            if let Some(outcome) = drops.handle(&event) {
                open(outcome, &mut chip8, &mut halt);
                continue;
            }
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => match (key, keymap(key), debug_keymap(key)) {
                    (_, Some(kc), _) => chip8.key_press(kc),
                    (_, _, Some(action)) if !repeat => {
                        apply(action, &mut panel, &mut chip8, &beeper, &mut display)?
                    }
                    (Keycode::Space, ..) => fast_forward = true,
                    (Keycode::Backspace, ..) => rewind = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Backspace, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            for _ in 0..cycles {
                chip8.reverse_cpu();
            }
            halt = None;
        } else {
            if halt.is_none() {
                for _ in 0..cycles {
                    if let Err(e) = chip8.advance_cpu() {
                        error!("CPU halted: {}", e);
                        halt = Some(e);
                        break;
                    }
                }
            }
            chip8.advance_timers();
        }

        // Sample the sound timer once per frame
        beeper.set_playing(sound_gate(chip8.sound_timer()));

        display.render(chip8.frame())?;
        fps.tick(Instant::now());
        let readout = panel.readout(fps.rate(), chip8.sound_timer());
        if readout != title {
            display.set_title(&readout)?;
            title = readout;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    info!("window closed");
    Ok(())
}

/// Acts on the result of an open request
fn open(outcome: OpenOutcome, chip8: &mut Chip8, halt: &mut Halt) {
    match outcome {
        OpenOutcome::Opened(path) => {
            debug!("Opened file: {}", path.display());
            match load_rom(&path) {
                Ok(rom) => {
                    chip8.load(&rom);
                    *halt = None;
                    info!("loaded {} ({} bytes)", path.display(), rom.len());
                }
                Err(e) => warn!("{}", e),
            }
        }
        OpenOutcome::Cancelled => debug!("User pressed cancel."),
        OpenOutcome::Failed(e) => debug!("Error: {}", e),
    }
}

/// Applies a debug control to the machine and peripherals
fn apply(
    action: DebugAction,
    panel: &mut DebugPanel,
    chip8: &mut Chip8,
    beeper: &Beeper,
    display: &mut Display,
) -> Result<(), DisplayError> {
    match action {
        DebugAction::PlaySound | DebugAction::StopSound => {
            override_sound(action, chip8);
        }
        DebugAction::ToggleRandomPixels => {
            toggle_random_pixels(chip8.frame_mut(), panel.random_pixel_count(), rand::random)
        }
        DebugAction::FewerPixels | DebugAction::MorePixels => {
            let delta = if action == DebugAction::MorePixels { 1 } else { -1 };
            if let Some(count) = panel.adjust_random_pixel_count(delta) {
                debug!("Set random pixel count: {}", count);
            }
        }
        DebugAction::VolumeDown | DebugAction::VolumeUp => {
            let delta = if action == DebugAction::VolumeUp {
                VOLUME_STEP
            } else {
                -VOLUME_STEP
            };
            if let Some(volume) = panel.adjust_volume(delta) {
                debug!("Set volume: {}", volume);
                beeper.set_volume(volume);
            }
        }
        DebugAction::PixelSizeDown | DebugAction::PixelSizeUp => {
            let delta = if action == DebugAction::PixelSizeUp { 1 } else { -1 };
            if let Some(size) = panel.adjust_pixel_size(delta) {
                debug!("Set pixel size: {}", size);
                display.set_pixel_size(size)?;
            }
        }
    }
    Ok(())
}
