//! Grid rendering.

use log::trace;

use crate::{
    clock::Clock,
    error::{Error, Result},
    escape,
    pixel::Pixel,
    screen,
    surface::Surface,
};

/**
Logical grid centred on the origin.

A grid of side `n` visits `-(n/2 - 1)..=(n/2 - 1)` on that axis and divides by
`n/2` to normalize, so the reference 80×80 grid walks `-39..=39` and samples
`[-0.975, 0.975]`. Logical pixel `(x, y)` lands at device position
`((x + n/2 - 1) * scale, ...)`.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: screen::Size,
    scale: u32,
}

impl Grid {
    pub fn new(size: screen::Size, scale: u32) -> Result<Self> {
        if size.width < 2 || size.height < 2 {
            return Err(Error::InvalidGrid {
                width: size.width,
                height: size.height,
            });
        }
        if scale == 0 {
            return Err(Error::ZeroScale);
        }
        // Device coordinates are `i32`; both scaled sides must fit.
        let fits = |side: u32| side.checked_mul(scale).map_or(false, |d| d <= i32::MAX as u32);
        if !fits(size.width) || !fits(size.height) {
            return Err(Error::GridTooLarge {
                width: size.width,
                height: size.height,
                scale,
            });
        }
        Ok(Self { size, scale })
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Size of the canvas the grid is drawn on.
    pub fn device_size(&self) -> screen::Size {
        self.size.scaled(self.scale)
    }

    fn half_width(&self) -> i32 {
        (self.size.width / 2) as i32
    }

    fn half_height(&self) -> i32 {
        (self.size.height / 2) as i32
    }

    /// Every logical pixel, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        let x_limit = self.half_width() - 1;
        let y_limit = self.half_height() - 1;
        (-y_limit..=y_limit).flat_map(move |y| (-x_limit..=x_limit).map(move |x| Pixel { x, y }))
    }

    pub fn normalize(&self, pixel: Pixel) -> (f64, f64) {
        (
            pixel.x as f64 / self.half_width() as f64,
            pixel.y as f64 / self.half_height() as f64,
        )
    }

    pub fn device_position(&self, pixel: Pixel) -> (i32, i32) {
        let scale = self.scale as i32;
        (
            (pixel.x + self.half_width() - 1) * scale,
            (pixel.y + self.half_height() - 1) * scale,
        )
    }
}

/// Two clock samples taken around a render, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub start: u64,
    pub end: u64,
}

impl Timing {
    pub fn elapsed(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Fill one logical pixel.
pub fn plot<S: Surface>(surface: &mut S, grid: &Grid, pixel: Pixel) {
    let (x, y) = grid.device_position(pixel);
    surface.fill_rect(x, y, grid.scale, grid.scale);
}

/// Plot every member of the set on `surface`, returning how many were plotted.
pub fn sweep<S: Surface>(surface: &mut S, grid: &Grid) -> usize {
    trace!("begin sweep");

    let mut plotted = 0;
    for pixel in grid.pixels() {
        let (x, y) = grid.normalize(pixel);
        if escape::evaluate(x, y) == 0 {
            plot(surface, grid, pixel);
            plotted += 1;
        }
    }

    trace!("end sweep");
    plotted
}

/// Set the fill style, then time a [`sweep`].
pub fn render<S: Surface, C: Clock>(
    surface: &mut S,
    clock: &C,
    grid: &Grid,
    fill_style: &str,
) -> (Timing, usize) {
    surface.set_fill_style(fill_style);

    let start = clock.current_time();
    let plotted = sweep(surface, grid);
    let end = clock.current_time();

    (Timing { start, end }, plotted)
}
