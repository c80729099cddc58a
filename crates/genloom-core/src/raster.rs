//! Placeholder image encoding.

use crate::error::Result;

pub const BLUE: [u8; 3] = [0, 0, 255];

/// Encode a single-color RGB8 PNG.
pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Result<Vec<u8>> {
    let pixel_count = width as usize * height as usize;
    let pixels: Vec<u8> = color.iter().copied().cycle().take(pixel_count * 3).collect();

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
        writer.finish()?;
    }

    Ok(buf)
}
