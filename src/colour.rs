//! Fill styles.

use std::sync::OnceLock;

use bytemuck::{Pod, Zeroable};
use fnv::FnvHashMap;

/// [`bytemuck`]-compatible colour for a single device pixel.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Self = Rgba::opaque(0, 0, 0);
    pub const RED: Self = Rgba::opaque(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Source-over compositing of `self` onto `destination`.
    pub fn over(self, destination: Rgba) -> Rgba {
        match self.a {
            255 => self,
            0 => destination,
            _ => {
                let source_alpha = self.a as u32;
                let destination_alpha = destination.a as u32 * (255 - source_alpha) / 255;
                let alpha = source_alpha + destination_alpha;
                let channel = |source: u8, destination: u8| {
                    ((source as u32 * source_alpha + destination as u32 * destination_alpha)
                        / alpha) as u8
                };
                Rgba {
                    r: channel(self.r, destination.r),
                    g: channel(self.g, destination.g),
                    b: channel(self.b, destination.b),
                    a: alpha as u8,
                }
            }
        }
    }
}

fn named_colours() -> &'static FnvHashMap<&'static str, Rgba> {
    static NAMED: OnceLock<FnvHashMap<&'static str, Rgba>> = OnceLock::new();
    NAMED.get_or_init(|| {
        [
            ("black", Rgba::BLACK),
            ("silver", Rgba::opaque(192, 192, 192)),
            ("gray", Rgba::opaque(128, 128, 128)),
            ("grey", Rgba::opaque(128, 128, 128)),
            ("white", Rgba::opaque(255, 255, 255)),
            ("maroon", Rgba::opaque(128, 0, 0)),
            ("red", Rgba::RED),
            ("purple", Rgba::opaque(128, 0, 128)),
            ("fuchsia", Rgba::opaque(255, 0, 255)),
            ("magenta", Rgba::opaque(255, 0, 255)),
            ("green", Rgba::opaque(0, 128, 0)),
            ("lime", Rgba::opaque(0, 255, 0)),
            ("olive", Rgba::opaque(128, 128, 0)),
            ("yellow", Rgba::opaque(255, 255, 0)),
            ("navy", Rgba::opaque(0, 0, 128)),
            ("blue", Rgba::opaque(0, 0, 255)),
            ("teal", Rgba::opaque(0, 128, 128)),
            ("aqua", Rgba::opaque(0, 255, 255)),
            ("cyan", Rgba::opaque(0, 255, 255)),
            ("orange", Rgba::opaque(255, 165, 0)),
            ("transparent", Rgba::TRANSPARENT),
        ]
        .into_iter()
        .collect()
    })
}

fn hex_digit(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|value| value as u8)
}

fn parse_hex(digits: &str) -> Option<Rgba> {
    let digits = digits.as_bytes();
    let nibbles = digits
        .iter()
        .map(|digit| hex_digit(*digit))
        .collect::<Option<Vec<u8>>>()?;
    match nibbles.as_slice() {
        &[r, g, b] => Some(Rgba::opaque(r * 17, g * 17, b * 17)),
        &[r, g, b, a] => Some(Rgba::new(r * 17, g * 17, b * 17, a * 17)),
        &[r1, r0, g1, g0, b1, b0] => Some(Rgba::opaque(
            r1 << 4 | r0,
            g1 << 4 | g0,
            b1 << 4 | b0,
        )),
        &[r1, r0, g1, g0, b1, b0, a1, a0] => Some(Rgba::new(
            r1 << 4 | r0,
            g1 << 4 | g0,
            b1 << 4 | b0,
            a1 << 4 | a0,
        )),
        _ => None,
    }
}

/// Parse a CSS colour: a basic named colour or a `#` hex form.
pub fn parse(style: &str) -> Option<Rgba> {
    let style = style.trim();
    match style.strip_prefix('#') {
        Some(digits) => parse_hex(digits),
        None => named_colours()
            .get(style.to_ascii_lowercase().as_str())
            .copied(),
    }
}
