//! Two triangles drawn with two programs sharing the vertex stage.

use clap::Parser;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::set_wireframe;

use learngl::window::App;

#[rustfmt::skip]
const FIRST_TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
     0.5,  0.5, 0.0,
];

#[rustfmt::skip]
const SECOND_TRIANGLE: [f32; 9] = [
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

const ORANGE_FRAG_SRC: &str = r#"
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

const YELLOW_FRAG_SRC: &str = r#"
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 1.0, 0.0, 1.0);
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

    let app = App::new("Two programs").unwrap();

    set_wireframe(args.wireframe);

    let first = GeometryBuilder::new(&FIRST_TRIANGLE)
        .with_attribute(VertexAttribute::Vec3)
        .build()
        .unwrap();

    let second = GeometryBuilder::new(&SECOND_TRIANGLE)
        .with_attribute(VertexAttribute::Vec3)
        .build()
        .unwrap();

    let orange = match ProgramBuilder::new(VERT_SRC, ORANGE_FRAG_SRC).build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Could not build orange shader program: {e}");
            std::process::exit(1);
        }
    };

    let yellow = match ProgramBuilder::new(VERT_SRC, YELLOW_FRAG_SRC).build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Could not build yellow shader program: {e}");
            std::process::exit(1);
        }
    };

    app.run(move |renderer, _elapsed| {
        renderer.clear_color(0.2, 0.3, 0.3);
        renderer.draw(&first, &orange);
        renderer.draw(&second, &yellow);
    })
}
