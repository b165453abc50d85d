use c8_core::state::FrameBuffer;

use crate::error::DisplayError;

pub const MIN_PIXEL_SIZE: usize = 1;
pub const MAX_PIXEL_SIZE: usize = 10;

/// RGB of a lit pixel
const ON: [u8; 3] = [245, 245, 245];
/// RGB of an unlit pixel
const OFF: [u8; 3] = [0, 0, 0];

const BYTES_PER_PIXEL: usize = 3;

/// Anything that can be rasterized: a fixed grid of on/off pixels addressed row-major.
pub trait PixelSource {
    /// `(width, height)` in logical pixels
    fn dimensions(&self) -> (usize, usize);

    /// Pixel at flat index `y * width + x`
    fn pixel(&self, index: usize) -> bool;
}

impl PixelSource for FrameBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn pixel(&self, index: usize) -> bool {
        FrameBuffer::pixel(self, index)
    }
}

/// # Surface
/// An off-screen RGB24 render target for a `width x height` pixel grid where every logical
/// pixel covers a `pixel_size x pixel_size` block.
///
/// The whole grid is redrawn by every call to `draw`; nothing is diffed.
pub struct Surface {
    columns: usize,
    rows: usize,
    pixel_size: usize,
    buffer: Vec<u8>,
}

impl Surface {
    /// Creates a blank surface for a `columns x rows` grid.
    ///
    /// # Arguments
    /// * `columns` logical width of the grid
    /// * `rows` logical height of the grid
    /// * `pixel_size` the size multiplier for each pixel, `MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE`
    pub fn new(columns: usize, rows: usize, pixel_size: usize) -> Result<Self, DisplayError> {
        let mut surface = Surface {
            columns,
            rows,
            pixel_size: 0,
            buffer: Vec::new(),
        };
        surface.resize(pixel_size)?;
        Ok(surface)
    }

    /// Reallocates the buffer for a new pixel size. The contents are blank until the next draw.
    pub fn resize(&mut self, pixel_size: usize) -> Result<(), DisplayError> {
        if !(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).contains(&pixel_size) {
            return Err(DisplayError::PixelSize {
                size: pixel_size,
                min: MIN_PIXEL_SIZE,
                max: MAX_PIXEL_SIZE,
            });
        }
        self.pixel_size = pixel_size;
        self.buffer = vec![0; self.pitch() * self.height()];
        Ok(())
    }

    pub fn pixel_size(&self) -> usize {
        self.pixel_size
    }

    /// Width in screen pixels
    pub fn width(&self) -> usize {
        self.columns * self.pixel_size
    }

    /// Height in screen pixels
    pub fn height(&self) -> usize {
        self.rows * self.pixel_size
    }

    /// Bytes per row of the buffer
    pub fn pitch(&self) -> usize {
        self.width() * BYTES_PER_PIXEL
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Rasterizes every pixel of `source`, reading each exactly once.
    ///
    /// Sources whose dimensions differ from the surface only have the overlapping region read.
    pub fn draw(&mut self, source: &dyn PixelSource) {
        let (source_columns, source_rows) = source.dimensions();
        let columns = self.columns.min(source_columns);
        let rows = self.rows.min(source_rows);
        let pitch = self.pitch();
        let size = self.pixel_size;

        for y in 0..rows {
            for x in 0..columns {
                let color = if source.pixel(y * source_columns + x) {
                    ON
                } else {
                    OFF
                };
                for sy in 0..size {
                    let row_start = (y * size + sy) * pitch + x * size * BYTES_PER_PIXEL;
                    let block = &mut self.buffer[row_start..row_start + size * BYTES_PER_PIXEL];
                    for chunk in block.chunks_exact_mut(BYTES_PER_PIXEL) {
                        chunk.copy_from_slice(&color);
                    }
                }
            }
        }
    }
}
