pub mod assets;
pub mod window;
