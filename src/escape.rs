//! Escape-time evaluation ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Escape_time_algorithm)).

use crate::pixel::Complex;

/// Squared magnitude past which a point has escaped.
pub const BAILOUT: f64 = 16.0;

pub const MAX_ITERATIONS: u32 = 200;

/**
Iterate `z = z² + c` from `z = 0`.

Returns the step at which the point escaped, or `0` if it stayed bounded for
[`MAX_ITERATIONS`] steps.

The bailout test uses the squared terms computed *before* the update, so a
point is reported one step later than a textbook implementation would. The
rendered image depends on this.
*/
pub fn escape_time(c: Complex) -> u32 {
    let mut zr = 0.0;
    let mut zi = 0.0;

    for i in 1..=MAX_ITERATIONS {
        let temp = zr * zi;
        let zr2 = zr * zr;
        let zi2 = zi * zi;
        zr = zr2 - zi2 + c.real;
        zi = temp + temp + c.imaginary;
        if zi2 + zr2 > BAILOUT {
            return i;
        }
    }

    0
}

/// Escape time for normalized grid coordinates, see [`Complex::from_normalized`].
pub fn evaluate(x: f64, y: f64) -> u32 {
    escape_time(Complex::from_normalized(x, y))
}

/// Whether `(x, y)` belongs to the set, as far as [`MAX_ITERATIONS`] can tell.
pub fn is_member(x: f64, y: f64) -> bool {
    evaluate(x, y) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(evaluate(0.0, 0.5), 0);
        assert!(is_member(0.0, 0.5));
    }

    #[test]
    fn far_point_escapes_quickly() {
        // c = 2 + 2i: |z|² is 0, 8, then 104 against the stale terms.
        assert_eq!(evaluate(2.0, 2.5), 3);
    }

    #[test]
    fn bailout_uses_stale_magnitude() {
        // c = 5: z1 = 5 already has |z|² = 25, but the test sees z0.
        assert_eq!(escape_time(Complex { real: 5.0, imaginary: 0.0 }), 2);
    }

    #[test]
    fn tip_of_the_needle_is_a_member() {
        // c = -2 cycles through 4, 2 forever.
        assert_eq!(escape_time(Complex { real: -2.0, imaginary: 0.0 }), 0);
        assert_eq!(evaluate(0.0, -1.5), 0);
    }

    #[test]
    fn result_is_bounded() {
        let mut y = -3.0;
        while y <= 3.0 {
            let mut x = -3.0;
            while x <= 3.0 {
                assert!(evaluate(x, y) <= MAX_ITERATIONS, "({}, {})", x, y);
                x += 0.125;
            }
            y += 0.125;
        }
    }

    #[test]
    fn deterministic() {
        let first = evaluate(0.3, 0.1);
        for _ in 0..10 {
            assert_eq!(evaluate(0.3, 0.1), first);
        }
    }

    #[test]
    fn conjugate_points_agree() {
        for (x, y) in [(0.1, 0.2), (0.7, -0.3), (0.55, 0.45), (1.2, 0.9)] {
            assert_eq!(evaluate(x, y), evaluate(-x, y));
        }
    }
}
