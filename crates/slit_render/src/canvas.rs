//! CPU raster target
//!
//! Every frame is painted here and then uploaded whole. All drawing clips to
//! the canvas bounds.

use crate::font;

/// Opaque RGBA8 pixel.
pub type Rgba = [u8; 4];

pub fn rgb(color: [u8; 3]) -> Rgba {
    [color[0], color[1], color[2], 255]
}

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    /// Axis-aligned rectangle, clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in y0..y1 {
            let start = self.index(x0 as u32, row as u32);
            let end = start + (x1 - x0) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// One-pixel vertical line spanning the full height.
    pub fn vline(&mut self, x: u32, color: Rgba) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    /// Draw `text` with the built-in bitmap font, top-left at `(x, y)`.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgba) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.fill_rect(
                                pen_x + (col * scale) as i32,
                                y + (row as u32 * scale) as i32,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += (font::ADVANCE * scale) as i32;
        }
    }

    /// Pixel data as tightly packed RGBA8 rows.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
