//! Indexed quad with a fragment color animated through a uniform.

use clap::Parser;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::set_wireframe;

use learngl::window::App;

#[rustfmt::skip]
const VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.0,    // bottom left
    -0.5,  0.5, 0.0,    // top left
     0.5, -0.5, 0.0,    // bottom right
     0.5,  0.5, 0.0,    // top right
];

const INDICES: [u32; 6] = [
    3, 2, 1, //
    2, 0, 1, //
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
uniform vec4 outColor;
void main()
{
    FragColor = outColor;
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

    let app = App::new("Hello quad").unwrap();

    set_wireframe(args.wireframe);

    let quad = GeometryBuilder::new(&VERTICES)
        .with_attribute(VertexAttribute::Vec3)
        .with_indices(&INDICES)
        .build()
        .unwrap();

    let program = match ProgramBuilder::new(VERT_SRC, FRAG_SRC).build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Could not build shader program: {e}");
            std::process::exit(1);
        }
    };

    app.run(move |renderer, elapsed| {
        renderer.clear_color(0.2, 0.3, 0.3);

        let green = elapsed.sin() / 2.0 + 0.5;
        program.set_vec4("outColor", [0.0, green, 0.0, 1.0]);

        renderer.draw(&quad, &program);
    })
}
