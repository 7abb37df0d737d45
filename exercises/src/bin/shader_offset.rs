//! Colored triangle with its shaders loaded from GLSL files, oscillating
//! horizontally through a uniform offset.

use std::path::PathBuf;

use clap::Parser;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::set_wireframe;

use learngl::window::App;

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // positions        // colors
    -0.5, -0.5, 0.0,    1.0, 0.0, 0.0,  // bottom left, red
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,  // bottom right, green
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0,  // top, blue
];

#[derive(Debug, Parser)]
struct Args {
    /// Path to the vertex shader source
    #[arg(long, default_value = "exercises/shaders/offset.vert.glsl")]
    vert: PathBuf,
    /// Path to the fragment shader source
    #[arg(long, default_value = "exercises/shaders/offset.frag.glsl")]
    frag: PathBuf,
    /// Draw in wireframe mode
    #[arg(short, long)]
    wireframe: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let app = App::new("Shader offset").unwrap();

    set_wireframe(args.wireframe);

    let triangle = GeometryBuilder::new(&VERTICES)
        .with_attribute(VertexAttribute::Vec3)
        .with_attribute(VertexAttribute::Vec3)
        .build()
        .unwrap();

    let program = ProgramBuilder::from_paths(&args.vert, &args.frag).and_then(|b| b.build());
    let program = match program {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Could not build shader program: {e}");
            std::process::exit(1);
        }
    };

    app.run(move |renderer, elapsed| {
        renderer.clear_color(0.2, 0.3, 0.3);

        program.set_float("hOffset", elapsed.sin());

        renderer.draw(&triangle, &program);
    })
}
