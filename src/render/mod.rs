pub mod renderer;

pub use renderer::{Renderer, required_size};
