//! Indexed quad sampling two textures mixed in the fragment shader.

use std::path::PathBuf;

use clap::Parser;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::set_wireframe;
use gl_wrapper::texture::{Texture2D, TextureFilter, TextureFormat, TextureParams, TextureWrap};

use learngl::assets::load_rgba;
use learngl::window::App;

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // positions        // colors       // texture coordinates
    -0.5, -0.5, 0.0,    1.0, 0.0, 0.0,  0.0, 0.0,   // bottom left
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,  1.0, 0.0,   // bottom right
    -0.5,  0.5, 0.0,    0.0, 0.0, 1.0,  0.0, 1.0,   // top left
     0.5,  0.5, 0.0,    1.0, 1.0, 0.0,  1.0, 1.0,   // top right
];

const INDICES: [u32; 6] = [
    0, 2, 3, //
    3, 1, 0, //
];

#[derive(Debug, Parser)]
struct Args {
    /// Path to the vertex shader source
    #[arg(long, default_value = "exercises/shaders/textured.vert.glsl")]
    vert: PathBuf,
    /// Path to the fragment shader source
    #[arg(long, default_value = "exercises/shaders/textured.frag.glsl")]
    frag: PathBuf,
    /// Image file for texture unit 0
    #[arg(long, default_value = "resources/textures/container.jpg")]
    texture1: PathBuf,
    /// Image file for texture unit 1
    #[arg(long, default_value = "resources/textures/awesomeface.png")]
    texture2: PathBuf,
    /// Draw in wireframe mode
    #[arg(short, long)]
    wireframe: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let app = App::new("Textured quad").unwrap();

    set_wireframe(args.wireframe);

    let params = TextureParams {
        filter: TextureFilter::Linear,
        wrap: TextureWrap::MirroredRepeat,
        border_color: Some([1.0, 1.0, 0.0, 1.0]),
    };

    let textures = [&args.texture1, &args.texture2].map(|path| {
        let pixels = load_rgba(path);

        Texture2D::new(
            pixels.width,
            pixels.height,
            &pixels.data,
            TextureFormat::Rgba8,
            params,
        )
        .unwrap()
    });

    let quad = GeometryBuilder::new(&VERTICES)
        .with_attribute(VertexAttribute::Vec3)
        .with_attribute(VertexAttribute::Vec3)
        .with_attribute(VertexAttribute::Vec2)
        .with_indices(&INDICES)
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

    program.set_int("texture1", 0);
    program.set_int("texture2", 1);

    app.run(move |renderer, _elapsed| {
        renderer.clear_color(0.2, 0.3, 0.3);

        textures[0].bind(0);
        textures[1].bind(1);

        renderer.draw(&quad, &program);
    })
}
