/// A point in the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    /**
    Sample point for normalized grid coordinates `(x, y)`.

    The axes are swapped: `x` drives the imaginary part and `y` the real part,
    shifted by `-0.5`. The rendered image depends on this mapping.
    */
    pub fn from_normalized(x: f64, y: f64) -> Self {
        Complex {
            real: y - 0.5,
            imaginary: x,
        }
    }
}

/// A cell of the logical grid, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}
