use std::ffi::c_void;
use thiserror::Error;

pub struct Texture2D {
    id: u32,
}

impl Texture2D {
    pub fn new(
        width: u32,
        height: u32,
        data: &[u8],
        format: TextureFormat,
        params: TextureParams,
    ) -> Result<Self, TextureError> {
        if expected_len(width, height, format) != data.len() {
            return Err(TextureError::InvalidSrcLength);
        }

        let mut id = 0;

        unsafe {
            gl::GenTextures(1, (&mut id) as *mut u32);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, params.wrap.gl_param());
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, params.wrap.gl_param());
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                params.filter.gl_min_param(),
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                params.filter.gl_mag_param(),
            );

            if let Some(color) = params.border_color {
                gl::TexParameterfv(
                    gl::TEXTURE_2D,
                    gl::TEXTURE_BORDER_COLOR,
                    color.as_ptr(),
                );
            }

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format.gl_internal(),
                width as i32,
                height as i32,
                0,
                format.gl_format(),
                gl::UNSIGNED_BYTE,
                data.as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        Ok(Self { id })
    }

    pub fn bind(&self, unit: u8) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
            gl::BindTexture(gl::TEXTURE_2D, self.id)
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, (&self.id) as *const u32);
        }
    }
}

fn expected_len(width: u32, height: u32, format: TextureFormat) -> usize {
    width as usize * height as usize * format.channels()
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Invalid source data length")]
    InvalidSrcLength,
}

#[derive(Copy, Clone)]
pub enum TextureFormat {
    Rgb8,
    Rgba8,
}

impl TextureFormat {
    pub fn channels(&self) -> usize {
        match self {
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
        }
    }

    fn gl_internal(&self) -> i32 {
        match self {
            TextureFormat::Rgb8 => gl::RGB8 as i32,
            TextureFormat::Rgba8 => gl::RGBA8 as i32,
        }
    }

    fn gl_format(&self) -> u32 {
        match self {
            TextureFormat::Rgb8 => gl::RGB,
            TextureFormat::Rgba8 => gl::RGBA,
        }
    }
}

#[derive(Copy, Clone)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

impl TextureFilter {
    fn gl_min_param(&self) -> i32 {
        match self {
            TextureFilter::Nearest => gl::NEAREST as i32,
            TextureFilter::Linear => gl::LINEAR_MIPMAP_LINEAR as i32,
        }
    }

    fn gl_mag_param(&self) -> i32 {
        match self {
            TextureFilter::Nearest => gl::NEAREST as i32,
            TextureFilter::Linear => gl::LINEAR as i32,
        }
    }
}

#[derive(Copy, Clone)]
pub enum TextureWrap {
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

impl TextureWrap {
    fn gl_param(&self) -> i32 {
        match self {
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE as i32,
            TextureWrap::Repeat => gl::REPEAT as i32,
            TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT as i32,
        }
    }
}

#[derive(Copy, Clone)]
pub struct TextureParams {
    pub filter: TextureFilter,
    pub wrap: TextureWrap,
    pub border_color: Option<[f32; 4]>,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter: TextureFilter::Linear,
            wrap: TextureWrap::ClampToEdge,
            border_color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_len_by_format() {
        assert_eq!(expected_len(4, 2, TextureFormat::Rgb8), 24);
        assert_eq!(expected_len(4, 2, TextureFormat::Rgba8), 32);
        assert_eq!(expected_len(0, 2, TextureFormat::Rgba8), 0);
    }

    // length validation happens before any GL call, so mismatched data
    // fails even without a context
    #[test]
    fn mismatched_data_length() {
        let res = Texture2D::new(
            2,
            2,
            &[0_u8; 12],
            TextureFormat::Rgba8,
            TextureParams::default(),
        );

        assert!(matches!(res, Err(TextureError::InvalidSrcLength)));
    }
}
