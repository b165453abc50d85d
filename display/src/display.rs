use log::info;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use c8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crate::error::DisplayError;
use crate::surface::{PixelSource, Surface};

pub const WINDOW_TITLE: &str = "CHIP-8";
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;

const BACKGROUND: Color = Color::RGB(245, 245, 245);

fn sdl_error(e: impl std::fmt::Display) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// # Display
/// A fixed size window showing the Chip-8 screen.
///
/// Frames are rasterized into an off-screen `Surface` and then copied, unscaled, to the
/// middle of the window. Changing the pixel size reallocates that surface.
pub struct Display {
    canvas: WindowCanvas,
    texture_creator: TextureCreator<WindowContext>,
    surface: Surface,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `pixel_size` the size multiplier for each Chip-8 pixel
    pub fn new(sdl: &sdl2::Sdl, pixel_size: usize) -> Result<Self, DisplayError> {
        let surface = Surface::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, pixel_size)?;
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
            .position_centered()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        let texture_creator = canvas.texture_creator();
        info!(
            "opened {}x{} window, surface {}x{}",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            surface.width(),
            surface.height()
        );

        Ok(Display {
            canvas,
            texture_creator,
            surface,
        })
    }

    pub fn set_pixel_size(&mut self, pixel_size: usize) -> Result<(), DisplayError> {
        self.surface.resize(pixel_size)
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DisplayError> {
        self.canvas.window_mut().set_title(title).map_err(sdl_error)
    }

    /// Redraws every pixel of `frame` and presents it.
    ///
    /// # Arguments
    /// * `frame` the pixels to show, usually the Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &dyn PixelSource) -> Result<(), DisplayError> {
        self.surface.draw(frame);

        let (width, height) = (self.surface.width() as u32, self.surface.height() as u32);
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
            .map_err(sdl_error)?;
        texture
            .update(None, self.surface.buffer(), self.surface.pitch())
            .map_err(sdl_error)?;

        let target = Rect::new(
            (WINDOW_WIDTH.saturating_sub(width) / 2) as i32,
            (WINDOW_HEIGHT.saturating_sub(height) / 2) as i32,
            width,
            height,
        );
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        self.canvas
            .copy(&texture, None, Some(target))
            .map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}
