pub mod benchmark;
pub mod canvas;
pub mod clock;
pub mod colour;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod host;
pub mod pixel;
pub mod present;
pub mod render;
pub mod screen;
pub mod surface;

pub use benchmark::{fully_native_mandelbrot, Report};
pub use config::Config;
pub use error::{Error, Result};
