//! RGBA canvas backing a `<canvas>` node.

use log::warn;

use crate::{colour, colour::Rgba, screen, surface::Surface};

#[derive(Clone, Debug)]
pub struct Canvas {
    size: screen::Size,
    fill_style: Rgba,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// A transparent canvas with an opaque black fill style.
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            fill_style: Rgba::BLACK,
            pixels: vec![Rgba::TRANSPARENT; size.area()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn fill_style(&self) -> Rgba {
        self.fill_style
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixels as tightly packed RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.size.width && y < self.size.height {
            Some(self.pixels[y as usize * self.size.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }
}

impl Surface for Canvas {
    fn set_fill_style(&mut self, style: &str) {
        match colour::parse(style) {
            Some(rgba) => self.fill_style = rgba,
            None => warn!("ignoring unrecognised fill style {:?}", style),
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let clip = |start: i32, length: u32, limit: u32| {
            let start = start as i64;
            let end = start + length as i64;
            (start.clamp(0, limit as i64) as usize, end.clamp(0, limit as i64) as usize)
        };
        let (left, right) = clip(x, width, self.size.width);
        let (top, bottom) = clip(y, height, self.size.height);

        let stride = self.size.width as usize;
        let fill_style = self.fill_style;
        for row in top..bottom {
            for pixel in &mut self.pixels[row * stride + left..row * stride + right] {
                *pixel = fill_style.over(*pixel);
            }
        }
    }
}
