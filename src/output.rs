use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::framebuffer::Framebuffer;
use crate::geometry::Color;

/// Scales all channels down by the maximum channel when it exceeds one.
/// Keeps the hue, never raises dark pixels.
pub fn tone_map(color: Color) -> Color {
    let max = color.x.max(color.y).max(color.z);
    if max > 1.0 { color / max } else { color }
}

/// Expects a tone mapped channel in [0, 1]; `as` saturates stray values
/// at the byte range ends.
fn quantize(channel: f64) -> u8 {
    (255.99 * channel) as u8
}

/// Writes the framebuffer as a binary PPM (P6): ASCII header, then RGB
/// byte triplets row-major, top row first. Tone mapping and quantization
/// happen here, per pixel.
pub fn write_ppm<W: Write>(writer: &mut W, framebuffer: &Framebuffer) -> io::Result<()> {
    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width(),
        framebuffer.height()
    )?;
    for pixel in framebuffer.pixels() {
        let color = tone_map(*pixel);
        writer.write_all(&[quantize(color.x), quantize(color.y), quantize(color.z)])?;
    }
    Ok(())
}

/// Writes the image to a file, buffered. Fails with the underlying I/O
/// error; no partial-output guarantee.
pub fn save_ppm(path: &Path, framebuffer: &Framebuffer) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, framebuffer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;
    use proptest::prelude::*;

    #[test]
    fn tone_map_leaves_in_range_colors_alone() {
        let color = Color::new(0.2, 0.7, 0.8);
        assert!(tone_map(color) == color);
    }

    #[test]
    fn tone_map_normalizes_bright_colors() {
        let mapped = tone_map(Color::new(4.0, 2.0, 1.0));
        assert!((mapped - Color::new(1.0, 0.5, 0.25)).norm() < 1e-12);
    }

    #[test]
    fn quantize_endpoints() {
        assert!(quantize(0.0) == 0);
        assert!(quantize(1.0) == 255);
        assert!(quantize(0.5) == 127);
        // Stray values saturate instead of wrapping.
        assert!(quantize(-0.5) == 0);
        assert!(quantize(2.0) == 255);
    }

    #[test]
    fn ppm_header_and_length() {
        let mut buffer = Framebuffer::new(4, 3);
        buffer.copy_row(0, &[Color::new(1.0, 0.5, 0.0); 4]);

        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &buffer).unwrap();

        let header = b"P6\n4 3\n255\n";
        assert!(&bytes[..header.len()] == header);
        assert!(bytes.len() == header.len() + 4 * 3 * 3);
        // First pixel of the written row.
        assert!(bytes[header.len()] == 255);
        assert!(bytes[header.len() + 1] == 127);
        assert!(bytes[header.len() + 2] == 0);
    }

    proptest! {
        /// Any color with a channel above one maps to max channel exactly
        /// one with channel ratios preserved.
        #[test]
        fn tone_map_caps_max_at_one(
            r in 0.0..10.0f64,
            g in 0.0..10.0f64,
            b in 0.0..10.0f64,
        ) {
            let color = Color::new(r, g, b);
            let max = r.max(g).max(b);
            prop_assume!(max > 1.0);

            let mapped = tone_map(color);
            let mapped_max = mapped.x.max(mapped.y).max(mapped.z);
            prop_assert!((mapped_max - 1.0).abs() < 1e-12);
            // Ratios against the max channel survive the scaling.
            prop_assert!((mapped.x * max - color.x).abs() < 1e-9);
            prop_assert!((mapped.y * max - color.y).abs() < 1e-9);
            prop_assert!((mapped.z * max - color.z).abs() < 1e-9);
        }
    }
}
