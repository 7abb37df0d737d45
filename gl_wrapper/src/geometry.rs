use std::ffi::c_void;
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: Option<&'a [u32]>,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            indices: None,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let (stride, vertices) = vertex_layout(&self.attributes, self.data.len())?;

        if let Some(indices) = self.indices {
            if indices.iter().any(|i| *i as usize >= vertices) {
                return Err(GBError::IndexOutOfRange);
            }
        }

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = None;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.data.len() * std::mem::size_of::<f32>()) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            if let Some(indices) = self.indices {
                let mut id = 0;
                gl::GenBuffers(1, (&mut id) as *mut u32);

                // stays attached to the VAO, so only unbind after the VAO
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    (indices.len() * std::mem::size_of::<u32>()) as isize,
                    indices.as_ptr() as *const c_void,
                    gl::STATIC_DRAW,
                );

                ebo = Some(id);
            }

            let mut offset = 0;

            for (i, attr) in self.attributes.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (stride * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                offset += attr.size();
                gl::EnableVertexAttribArray(i as u32);
            }

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
        }

        let count = match self.indices {
            Some(indices) => indices.len(),
            None => vertices,
        };

        Ok(Geometry {
            vao,
            vbo,
            ebo,
            count,
        })
    }
}

fn vertex_layout(
    attributes: &[VertexAttribute],
    data_len: usize,
) -> Result<(usize, usize), GBError> {
    let stride: usize = attributes.iter().map(|a| a.size()).sum();

    if stride == 0 {
        return Err(GBError::NoAttributes);
    }

    if data_len % stride != 0 {
        return Err(GBError::InvalidDataLength);
    }

    Ok((stride, data_len / stride))
}

#[derive(Debug, Error)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry needs at least one vertex attribute")]
    NoAttributes,
    #[error("Index out of range of vertex data")]
    IndexOutOfRange,
}

pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    ebo: Option<u32>,
    count: usize,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }

    /// Vertices to draw, or indices for indexed geometry.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = self.ebo {
                gl::DeleteBuffers(1, (&ebo) as *const u32);
            }
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stride_and_count() {
        let attrs = [VertexAttribute::Vec3, VertexAttribute::Vec3];

        assert_eq!(vertex_layout(&attrs, 18).unwrap(), (6, 3));
    }

    #[test]
    fn layout_rejects_partial_vertex() {
        let attrs = [VertexAttribute::Vec3, VertexAttribute::Vec2];

        assert!(matches!(
            vertex_layout(&attrs, 16),
            Err(GBError::InvalidDataLength)
        ));
    }

    #[test]
    fn layout_rejects_empty_attributes() {
        assert!(matches!(vertex_layout(&[], 12), Err(GBError::NoAttributes)));
    }

    #[test]
    fn single_float_attribute() {
        assert_eq!(vertex_layout(&[VertexAttribute::Float], 5).unwrap(), (1, 5));
    }

    // index validation happens before any GL object is created, so a bad
    // index list fails even without a context
    #[test]
    fn index_past_vertex_data() {
        let res = GeometryBuilder::new(&[0.0; 9])
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&[0, 1, 3])
            .build();

        assert!(matches!(res, Err(GBError::IndexOutOfRange)));
    }
}
