use std::path::Path;

use crate::core::InitError;
use crate::math::hsv_to_rgb;
use crate::types::TextureData;

/// Decode an image file into RGBA8 pixels, flipped vertically so that
/// UV (0,0) lands on the bottom-left corner like the demos expect.
pub fn load_texture(path: &Path) -> Result<TextureData, InitError> {
    let image = image::open(path).map_err(|source| InitError::Texture {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image.flipv().into_rgba8();
    let (width, height) = image.dimensions();

    log::info!("Loaded texture {path:?} ({width}x{height})");

    Ok(TextureData {
        width,
        height,
        pixels: image.into_raw(),
    })
}

/// Deterministic checkerboard with a hue sweep across the X axis, used
/// when no texture file is supplied.
pub fn checkerboard(size: u32, cell: u32) -> TextureData {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let lit = ((x / cell) + (y / cell)) % 2 == 0;
            let rgb = if lit {
                hsv_to_rgb(x as f32 / size as f32, 0.5, 0.9)
            } else {
                [0.15, 0.15, 0.15]
            };
            pixels.push((rgb[0] * 255.0) as u8);
            pixels.push((rgb[1] * 255.0) as u8);
            pixels.push((rgb[2] * 255.0) as u8);
            pixels.push(255);
        }
    }

    TextureData {
        width: size,
        height: size,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_has_full_coverage_and_opaque_alpha() {
        let texture = checkerboard(16, 4);
        assert_eq!(texture.width, 16);
        assert_eq!(texture.height, 16);
        assert_eq!(texture.pixels.len(), 16 * 16 * 4);
        assert!(texture.pixels.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn checkerboard_is_deterministic() {
        assert_eq!(checkerboard(32, 8), checkerboard(32, 8));
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let texture = checkerboard(8, 4);
        let pixel = |x: usize, y: usize| {
            let i = (y * 8 + x) * 4;
            [texture.pixels[i], texture.pixels[i + 1], texture.pixels[i + 2]]
        };
        // Adjacent cells differ, diagonal cells match the dark fill.
        assert_ne!(pixel(0, 0), pixel(4, 0));
        assert_eq!(pixel(4, 0), pixel(0, 4));
    }

    #[test]
    fn missing_file_is_a_texture_init_error() {
        let result = load_texture(Path::new("/no/such/texture.png"));
        assert!(matches!(result, Err(InitError::Texture { .. })));
    }
}
