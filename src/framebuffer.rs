use crate::geometry::Color;

/// Dense width x height grid of linear HDR colors, row-major, top row
/// first. Pixel (x, y) lives at index `x + y * width`.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Framebuffer {
        Framebuffer {
            width,
            height,
            pixels: vec![Color::zeros(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[x as usize + y as usize * self.width as usize]
    }

    /// Replaces row `y` with `row`, which must hold exactly `width` pixels.
    pub fn copy_row(&mut self, y: u32, row: &[Color]) {
        debug_assert!(y < self.height);
        debug_assert_eq!(row.len(), self.width as usize);
        let start = y as usize * self.width as usize;
        self.pixels[start..start + self.width as usize].copy_from_slice(row);
    }

    /// All pixels in storage order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}
