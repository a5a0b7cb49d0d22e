//! Utility module with prettypaint's errors.

use crate::Float;

/// An error while evaluating a paint mixture.
///
/// All failures of the mixing pipeline are deterministic value computations
/// going wrong on bad input. None of them is transient, so retrying is never
/// meaningful. The library reports them as structured values and leaves any
/// user-facing presentation, including logging, to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum MixingError {
    /// A palette references a pigment that the pigment set does not contain.
    /// Name resolution happens before any spectra are combined, so this error
    /// implies that no partial computation took place.
    UnknownPigment(String),

    /// A palette without a single entry. Such a palette cannot satisfy the
    /// invariant that concentrations sum to one.
    EmptyPalette,

    /// A palette entry with a concentration outside the half-open unit
    /// interval (0, 1].
    InvalidConcentration {
        /// The offending pigment's name.
        pigment: String,
        /// The offending concentration.
        concentration: Float,
    },

    /// A pigment spectrum with a negative absorption or scattering
    /// coefficient. Kubelka-Munk coefficients are physical quantities and
    /// cannot be negative; rejecting them upon construction keeps the
    /// reflectance formula within its domain.
    NegativeCoefficient {
        /// The offending pigment's name.
        pigment: String,
        /// The wavelength of the offending sample, in nanometers.
        wavelength: usize,
    },

    /// A mixture whose scattering coefficient vanishes at some wavelength,
    /// leaving the Kubelka-Munk ratio K/S undefined there.
    DegenerateScattering {
        /// The wavelength of the offending sample, in nanometers.
        wavelength: usize,
    },

    /// A Kubelka-Munk ratio outside the reflectance formula's domain. The
    /// formula R = 1 + r − √(r² + 2r) requires a non-negative ratio; a
    /// negative ratio either has no real root or yields a nonsensical
    /// reflectance.
    InvalidReflectance {
        /// The wavelength of the offending sample, in nanometers.
        wavelength: usize,
        /// The offending ratio.
        ratio: Float,
    },

    /// A sequence of samples incompatible with composite Simpson's rule,
    /// which requires at least three samples and an even number of intervals,
    /// i.e., an odd number of samples.
    InvalidGridSize {
        /// The incompatible number of samples.
        len: usize,
    },

    /// A sequence of per-wavelength values whose length does not match its
    /// wavelength grid.
    MismatchedSamples {
        /// The number of samples the grid calls for.
        expected: usize,
        /// The number of samples actually present.
        actual: usize,
    },

    /// Two spectra that should share one wavelength grid but do not.
    MismatchedGrids,

    /// A native table resolution that cannot be resampled onto the target
    /// grid. Supported are tables at the target step and tables at half the
    /// target step.
    UnsupportedResolution {
        /// The native table's step, in nanometers.
        native: usize,
        /// The target grid's step, in nanometers.
        target: usize,
    },

    /// A target wavelength that the native table does not cover.
    UncoveredWavelength {
        /// The uncovered wavelength, in nanometers.
        wavelength: usize,
    },
}

impl std::fmt::Display for MixingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use MixingError::*;

        match *self {
            UnknownPigment(ref name) => write!(
                f,
                "palette references pigment \"{}\" but the pigment set has no such entry",
                name
            ),
            EmptyPalette => {
                f.write_str("palette should contain at least one pigment but is empty")
            }
            InvalidConcentration {
                ref pigment,
                concentration,
            } => write!(
                f,
                "concentration of pigment \"{}\" should be within (0, 1] but is {}",
                pigment, concentration
            ),
            NegativeCoefficient {
                ref pigment,
                wavelength,
            } => write!(
                f,
                "pigment \"{}\" should have non-negative coefficients but is negative at {}nm",
                pigment, wavelength
            ),
            DegenerateScattering { wavelength } => write!(
                f,
                "mixture scattering vanishes at {}nm, leaving the Kubelka-Munk ratio undefined",
                wavelength
            ),
            InvalidReflectance { wavelength, ratio } => write!(
                f,
                "Kubelka-Munk ratio should be non-negative but is {} at {}nm",
                ratio, wavelength
            ),
            InvalidGridSize { len } => write!(
                f,
                "Simpson integration should cover an odd number of at least 3 samples but got {}",
                len
            ),
            MismatchedSamples { expected, actual } => write!(
                f,
                "spectrum should have {} samples but has {}",
                expected, actual
            ),
            MismatchedGrids => {
                f.write_str("spectra should share one wavelength grid but do not")
            }
            UnsupportedResolution { native, target } => write!(
                f,
                "native table at {}nm steps cannot be resampled onto a grid at {}nm steps",
                native, target
            ),
            UncoveredWavelength { wavelength } => write!(
                f,
                "native table should cover {}nm but does not",
                wavelength
            ),
        }
    }
}

impl std::error::Error for MixingError {}
