//! Two triangles forming a quad, drawn from a single vertex buffer.

use clap::Parser;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::set_wireframe;

use learngl::window::App;

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // first triangle
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
     0.5,  0.5, 0.0,
    // second triangle
     0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
];

const VERT_SRC: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FRAG_SRC: &str = r#"
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

#[derive(Debug, Parser)]
struct Args {
    /// Draw in wireframe mode
    #[arg(short, long)]
    wireframe: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let app = App::new("Two triangles").unwrap();

    set_wireframe(args.wireframe);

    let triangles = GeometryBuilder::new(&VERTICES)
        .with_attribute(VertexAttribute::Vec3)
        .build()
        .unwrap();

    let program = match ProgramBuilder::new(VERT_SRC, FRAG_SRC).build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Could not build shader program: {e}");
            std::process::exit(1);
        }
    };

    app.run(move |renderer, _elapsed| {
        renderer.clear_color(0.2, 0.3, 0.3);
        renderer.draw(&triangles, &program);
    })
}
