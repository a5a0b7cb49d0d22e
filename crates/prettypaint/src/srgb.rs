//! Conversion of tristimulus values to display RGB.

use crate::tristimulus::Tristimulus;
use crate::Float;

/// The transform from XYZ to linear sRGB, derived from the sRGB primaries
/// and the D65 white point.
#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [ 3.2406, -1.5372, -0.4986],
    [-0.9689,  1.8758,  0.0415],
    [ 0.0557, -0.2040,  1.0570],
];

/// The scale factor from unit range to display range.
const DISPLAY_SCALE: Float = 255.0;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// A display color with red, green, and blue coordinates scaled to 0–255.
///
/// Coordinates are *not* clamped to that range: a mixture outside the sRGB
/// gamut yields coordinates below 0 or above 255, faithfully so. Whether and
/// how to map such colors into gamut is the caller's policy;
/// [`Rgb::clamped_24bit`] implements the crudest option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    r: Float,
    g: Float,
    b: Float,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Get this color's red coordinate.
    #[inline]
    pub const fn r(&self) -> Float {
        self.r
    }

    /// Get this color's green coordinate.
    #[inline]
    pub const fn g(&self) -> Float {
        self.g
    }

    /// Get this color's blue coordinate.
    #[inline]
    pub const fn b(&self) -> Float {
        self.b
    }

    /// Determine whether all three coordinates lie within 0–255.
    pub fn in_gamut(&self) -> bool {
        let Self { r, g, b } = *self;
        (0.0..=DISPLAY_SCALE).contains(&r)
            && (0.0..=DISPLAY_SCALE).contains(&g)
            && (0.0..=DISPLAY_SCALE).contains(&b)
    }

    /// Clamp the coordinates to 0–255 and round to 24-bit representation.
    pub fn clamped_24bit(&self) -> [u8; 3] {
        [
            self.r.clamp(0.0, DISPLAY_SCALE).round() as u8,
            self.g.clamp(0.0, DISPLAY_SCALE).round() as u8,
            self.b.clamp(0.0, DISPLAY_SCALE).round() as u8,
        ]
    }
}

impl From<Rgb> for [Float; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[Float; 3]> for Rgb {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({:.2} {:.2} {:.2})", self.r, self.g, self.b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert tristimulus values to display RGB.
///
/// This function scales the tristimulus values by the given luminosity (the
/// Y of a perfect reflector under the same weighting table) so that pure white
/// maps to Y = 1, applies the linear sRGB matrix, and scales to display
/// range. It performs no gamma correction and no clamping.
pub fn tristimulus_to_rgb(tristimulus: &Tristimulus, luminosity: Float) -> Rgb {
    let scaled = [
        tristimulus.x / luminosity,
        tristimulus.y / luminosity,
        tristimulus.z / luminosity,
    ];
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &scaled);

    Rgb::new(r * DISPLAY_SCALE, g * DISPLAY_SCALE, b * DISPLAY_SCALE)
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{tristimulus_to_rgb, Rgb};
    use crate::tristimulus::Tristimulus;
    use crate::Float;

    #[test]
    fn test_white_point() {
        // The D65 white point maps to equal full-scale coordinates, up to
        // the matrix's published precision.
        let white = Tristimulus {
            x: 0.95047,
            y: 1.0,
            z: 1.08883,
        };

        let color = tristimulus_to_rgb(&white, 1.0);
        for value in <[Float; 3]>::from(color) {
            assert!(
                (value - 255.0).abs() < 0.15,
                "white point channel {} off full scale",
                value
            );
        }
    }

    #[test]
    fn test_luminosity_normalization() {
        let gray = Tristimulus {
            x: 0.95047 * 50.0,
            y: 50.0,
            z: 1.08883 * 50.0,
        };

        let full = tristimulus_to_rgb(&gray, 50.0);
        let half = tristimulus_to_rgb(&gray, 100.0);
        assert!((full.r() - 2.0 * half.r()).abs() < 1e-9);
        assert!((full.g() - 2.0 * half.g()).abs() < 1e-9);
        assert!((full.b() - 2.0 * half.b()).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_gamut() {
        // A spectral-ish color lands outside the sRGB gamut and must pass
        // through unclamped.
        let color = tristimulus_to_rgb(
            &Tristimulus {
                x: 0.2,
                y: 0.1,
                z: 1.0,
            },
            1.0,
        );

        assert!(!color.in_gamut());
        assert!(color.r() < 0.0);
        assert_eq!(color.clamped_24bit()[0], 0);
    }

    #[test]
    fn test_display() {
        let color = Rgb::new(12.5, 200.0, 255.5);
        assert_eq!(color.to_string(), "rgb(12.50 200.00 255.50)");
    }
}
