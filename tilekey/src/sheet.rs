/// Width and height of one tile in pixels.
pub const TILE_SIZE: u32 = 16;

/// The color that marks a sample point as solid terrain (#4f4f4fff).
pub const SOLID: Rgba = Rgba([79, 79, 79, 255]);

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

/// RGBA sprite sheet with row-major pixel data, 4 bytes per pixel.
///
/// Tiles are laid out left to right along the first `TILE_SIZE` rows.
#[derive(Debug, Clone)]
pub struct TileSheet {
    pub width: u32,
    pub height: u32,
    pub buf: Vec<u8>,
}

impl TileSheet {
    /// Create a new fully transparent sheet.
    pub fn new(width: u32, height: u32) -> Self {
        let buf = vec![0u8; width as usize * height as usize * 4];
        Self { width, height, buf }
    }

    /// Create a sheet from existing RGBA pixel data.
    ///
    /// `buf` must contain at least `width * height * 4` bytes.
    pub fn from_buf(width: u32, height: u32, buf: Vec<u8>) -> Self {
        assert!(buf.len() >= width as usize * height as usize * 4);
        Self { width, height, buf }
    }

    /// Byte offset of pixel (x, y) in `buf`.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        Rgba([self.buf[i], self.buf[i + 1], self.buf[i + 2], self.buf[i + 3]])
    }

    /// Set the pixel at (x, y).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, px: Rgba) {
        let i = self.offset(x, y);
        self.buf[i..i + 4].copy_from_slice(&px.0);
    }

    /// Number of whole tiles along the row. Leftover columns are ignored.
    pub fn columns(&self) -> u32 {
        self.width / TILE_SIZE
    }

    /// Pixel columns past the last whole tile.
    pub fn remainder(&self) -> u32 {
        self.width % TILE_SIZE
    }

    /// Fill the tile-relative rectangle `[x0, x1) x [y0, y1)` of tile `column`.
    pub fn fill_tile_rect(&mut self, column: u32, x0: u32, y0: u32, x1: u32, y1: u32, px: Rgba) {
        let ox = column * TILE_SIZE;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(ox + x, y, px);
            }
        }
    }
}
