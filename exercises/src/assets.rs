use std::path::Path;

const FALLBACK_SIZE: u32 = 8;

/// Decoded RGBA8 pixels, bottom row first to match GL texture coordinates.
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decodes an image file into flipped RGBA8 pixels. A file that cannot be
/// read or decoded is reported and replaced with a checkerboard, so the
/// exercise keeps running with a visibly wrong texture.
pub fn load_rgba(path: &Path) -> Pixels {
    match image::open(path) {
        Ok(img) => {
            let img = img.flipv().to_rgba8();

            Pixels {
                width: img.width(),
                height: img.height(),
                data: img.into_raw(),
            }
        }
        Err(e) => {
            eprintln!("Could not read texture {}: {e}", path.display());
            fallback()
        }
    }
}

fn fallback() -> Pixels {
    let mut data = Vec::with_capacity((FALLBACK_SIZE * FALLBACK_SIZE * 4) as usize);

    for y in 0..FALLBACK_SIZE {
        for x in 0..FALLBACK_SIZE {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[v, 0, v, 255]);
        }
    }

    Pixels {
        width: FALLBACK_SIZE,
        height: FALLBACK_SIZE,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_consistent() {
        let pixels = fallback();

        assert_eq!(
            pixels.data.len(),
            (pixels.width * pixels.height * 4) as usize
        );
        // corners of a checkerboard are magenta
        assert_eq!(&pixels.data[0..4], &[255, 0, 255, 255]);
        assert_eq!(&pixels.data[4..8], &[0, 0, 0, 255]);
    }

    #[test]
    fn missing_file_falls_back() {
        let pixels = load_rgba(Path::new("no/such/texture.png"));

        assert_eq!(pixels.width, FALLBACK_SIZE);
        assert_eq!(pixels.height, FALLBACK_SIZE);
    }
}
