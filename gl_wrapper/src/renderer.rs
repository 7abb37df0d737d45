use crate::geometry::Geometry;
use crate::program::Program;

#[derive(Default)]
pub struct GlRenderer;

impl GlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        program.bind();

        unsafe {
            gl::BindVertexArray(geometry.vao());
            if geometry.is_indexed() {
                gl::DrawElements(
                    gl::TRIANGLES,
                    geometry.count() as i32,
                    gl::UNSIGNED_INT,
                    std::ptr::null(),
                );
            } else {
                gl::DrawArrays(gl::TRIANGLES, 0, geometry.count() as i32);
            }
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

pub fn set_wireframe(enabled: bool) {
    let mode = if enabled { gl::LINE } else { gl::FILL };

    unsafe {
        gl::PolygonMode(gl::FRONT_AND_BACK, mode);
    }
}
