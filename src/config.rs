use crate::{error::Result, render::Grid, screen};

/// Logical grid side of the reference benchmark.
pub const GRID_SIDE: u32 = 80;

/// Each logical pixel covers a `DEVICE_SCALE × DEVICE_SCALE` block.
pub const DEVICE_SCALE: u32 = 2;

pub const FILL_STYLE: &str = "red";

/// Canvases are named `fullynative0`, `fullynative1`, ...
pub const CANVAS_ID_BASE: &str = "fullynative";

pub const CONTAINER_ID: &str = "body";

/// When set, the binary prints the timing and exits without opening a window.
pub const HEADLESS_VAR: &str = "MANDELBROT_HEADLESS";

/// Benchmark settings. [`Config::default`] is the reference configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub grid_size: screen::Size,
    pub scale: u32,
    pub fill_style: String,
    pub canvas_id_base: String,
    pub container_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: screen::Size::new(GRID_SIDE, GRID_SIDE),
            scale: DEVICE_SCALE,
            fill_style: FILL_STYLE.to_owned(),
            canvas_id_base: CANVAS_ID_BASE.to_owned(),
            container_id: CONTAINER_ID.to_owned(),
        }
    }
}

impl Config {
    pub fn with_grid_size(mut self, width: u32, height: u32) -> Self {
        self.grid_size = screen::Size::new(width, height);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_fill_style(mut self, fill_style: &str) -> Self {
        self.fill_style = fill_style.to_owned();
        self
    }

    pub fn with_canvas_id_base(mut self, canvas_id_base: &str) -> Self {
        self.canvas_id_base = canvas_id_base.to_owned();
        self
    }

    pub fn with_container_id(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_owned();
        self
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_size, self.scale)
    }
}
