use gl::types::GLuint;
use std::ffi::{c_char, CString};
use std::path::Path;
use thiserror::Error;

pub struct ProgramBuilder {
    vert: String,
    frag: String,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: vert_src.to_owned(),
            frag: frag_src.to_owned(),
        }
    }

    /// Reads the vertex and fragment sources from two text files.
    pub fn from_paths(vert: &Path, frag: &Path) -> Result<Self, PBError> {
        Ok(Self {
            vert: std::fs::read_to_string(vert)?,
            frag: std::fs::read_to_string(frag)?,
        })
    }

    pub fn build(self) -> Result<Program, PBError> {
        // no GL calls until both sources are known to be valid C strings
        let vert = CString::new(self.vert).map_err(|_| PBError::InvalidSource)?;
        let frag = CString::new(self.frag).map_err(|_| PBError::InvalidSource)?;

        unsafe {
            let vert = compile_stage(gl::VERTEX_SHADER, &vert)?;
            let frag = compile_stage(gl::FRAGMENT_SHADER, &frag)?;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            let mut success: i32 = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let buf = [0_u8; 1024];
                gl::GetProgramInfoLog(
                    program,
                    1024,
                    std::ptr::null_mut(),
                    (&buf).as_ptr() as *mut c_char,
                );

                return Err(PBError::Linking(read_info_log(&buf)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_stage(kind: u32, src: &CString) -> Result<GLuint, PBError> {
    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );
    gl::CompileShader(shader);

    let mut success: i32 = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let buf = [0_u8; 1024];
        gl::GetShaderInfoLog(
            shader,
            1024,
            std::ptr::null_mut(),
            (&buf).as_ptr() as *mut c_char,
        );

        return Err(PBError::Compilation(read_info_log(&buf)));
    }

    Ok(shader)
}

fn read_info_log(buf: &[u8]) -> String {
    let data = if buf.contains(&0) {
        buf.split(|a| *a == 0).next().unwrap()
    } else {
        buf
    };

    String::from_utf8_lossy(data).to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("shader source contains a NUL byte")]
    InvalidSource,
    #[error("could not read shader source: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.bind();
        unsafe { gl::Uniform1i(self.location(name), value) }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.bind();
        unsafe { gl::Uniform1f(self.location(name), value) }
    }

    pub fn set_vec4(&self, name: &str, value: [f32; 4]) {
        self.bind();
        unsafe {
            gl::Uniform4f(
                self.location(name),
                value[0],
                value[1],
                value[2],
                value[3],
            )
        }
    }

    // unknown names resolve to -1, which GL ignores
    fn location(&self, name: &str) -> i32 {
        let name = CString::new(name).unwrap();
        unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_in_source_fails_before_gl() {
        let res = ProgramBuilder::new("void main() {\0}", "").build();

        assert!(matches!(res, Err(PBError::InvalidSource)));
    }

    #[test]
    fn missing_shader_file() {
        let res = ProgramBuilder::from_paths(
            Path::new("no/such/shader.vert.glsl"),
            Path::new("no/such/shader.frag.glsl"),
        );

        assert!(matches!(res, Err(PBError::Io(_))));
    }

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [b'x'; 16];
        buf[4] = 0;

        assert_eq!(read_info_log(&buf), "xxxx");
        assert_eq!(read_info_log(&[b'y'; 4]), "yyyy");
    }
}
