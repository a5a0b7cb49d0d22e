//! The Kubelka-Munk mixing engine.
//!
//! Kubelka-Munk theory describes a layer of turbid medium, such as paint, by
//! two per-wavelength coefficients, absorption K(λ) and scattering S(λ). The
//! coefficients of a physical mixture are the concentration-weighted sums of
//! the constituent pigments' coefficients, and the bulk reflectance of an
//! opaque layer follows from their ratio alone:
//!
//! > R(λ) = 1 + K/S − √((K/S)² + 2·K/S)
//!
//! Since some light reflects off the paint-air interface before ever entering
//! the pigment layer, the bulk reflectance overstates what an observer sees.
//! The [Saunderson correction](https://en.wikipedia.org/wiki/Kubelka%E2%80%93Munk_theory)
//! accounts for that surface loss with two fixed constants.
//!
//! Both operations in this module are pure functions: they have no side
//! effects, never log, and fail deterministically on bad input.

use crate::error::MixingError;
use crate::pigment::{Palette, PigmentSet};
use crate::spectrum::{Spectrum, WavelengthGrid};
use crate::Float;

/// The Saunderson coefficient for light reflected off the paint surface on
/// the way in.
const SAUNDERSON_K1: Float = 0.092;

/// The Saunderson coefficient for light reflected back into the paint at the
/// surface on the way out.
const SAUNDERSON_K2: Float = 0.060;

// --------------------------------------------------------------------------------------------------------------------

/// The Kubelka-Munk coefficients of a pigment mixture.
///
/// A mixture spectrum is a transient, derived quantity: it only exists
/// between combining a palette's pigments and computing the mixture's
/// reflectance.
#[derive(Clone, Debug, PartialEq)]
pub struct MixtureSpectrum {
    absorption: Spectrum,
    scattering: Spectrum,
}

impl MixtureSpectrum {
    /// Create a new mixture spectrum from absorption and scattering spectra
    /// over one shared wavelength grid.
    pub fn new(absorption: Spectrum, scattering: Spectrum) -> Result<Self, MixingError> {
        if absorption.grid() != scattering.grid() {
            return Err(MixingError::MismatchedGrids);
        }

        Ok(Self {
            absorption,
            scattering,
        })
    }

    /// Get this mixture's absorption coefficients K(λ).
    #[inline]
    pub fn absorption(&self) -> &Spectrum {
        &self.absorption
    }

    /// Get this mixture's scattering coefficients S(λ).
    #[inline]
    pub fn scattering(&self) -> &Spectrum {
        &self.scattering
    }

    /// Get this mixture's wavelength grid.
    #[inline]
    pub fn grid(&self) -> WavelengthGrid {
        self.absorption.grid()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Combine a palette's pigments into a mixture spectrum.
///
/// For every wavelength, the mixture's absorption is the sum over all palette
/// entries of the entry's concentration times the pigment's absorption at
/// that wavelength, and just the same for scattering. The combination is
/// linear in the concentrations and independent of entry order, up to
/// floating point rounding.
///
/// Every palette entry is resolved against the pigment set before any
/// combining starts, so an unknown pigment name fails without partial
/// computation.
pub fn mix(palette: &Palette, pigments: &PigmentSet) -> Result<MixtureSpectrum, MixingError> {
    if palette.is_empty() {
        return Err(MixingError::EmptyPalette);
    }

    let mut resolved = Vec::with_capacity(palette.len());
    for (name, concentration) in palette.iter() {
        resolved.push((pigments.lookup(name)?, concentration));
    }

    let grid = resolved[0].0.grid();
    let mut absorption = vec![0.0; grid.len()];
    let mut scattering = vec![0.0; grid.len()];

    for (pigment, concentration) in resolved {
        if pigment.grid() != grid {
            return Err(MixingError::MismatchedGrids);
        }

        for (index, &k) in pigment.absorption().values().iter().enumerate() {
            absorption[index] += concentration * k;
        }
        for (index, &s) in pigment.scattering().values().iter().enumerate() {
            scattering[index] += concentration * s;
        }
    }

    MixtureSpectrum::new(
        Spectrum::new(grid, absorption)?,
        Spectrum::new(grid, scattering)?,
    )
}

/// Derive the Saunderson-corrected reflectance of a mixture.
///
/// For every wavelength, this function forms the Kubelka-Munk ratio r = K/S,
/// evaluates the bulk reflectance R = 1 + r − √(r² + 2r), and applies the
/// Saunderson surface correction
///
/// > R′ = (1 − k1)(1 − k2)·R / (1 − k2·R)
///
/// with k1 = 0.092 and k2 = 0.060.
///
/// A vanishing scattering coefficient leaves the ratio undefined and fails
/// with [`MixingError::DegenerateScattering`] instead of quietly turning into
/// infinity. A negative ratio, which requires negative coefficients, lies
/// outside the formula's domain: for −2 < r < 0 the radicand is negative, and
/// below that the root no longer describes a reflectance. It fails with
/// [`MixingError::InvalidReflectance`].
pub fn reflectance(mixture: &MixtureSpectrum) -> Result<Spectrum, MixingError> {
    let grid = mixture.grid();
    let mut values = Vec::with_capacity(grid.len());

    for (index, (&k, &s)) in mixture
        .absorption()
        .values()
        .iter()
        .zip(mixture.scattering().values())
        .enumerate()
    {
        let wavelength = grid.wavelength(index).unwrap_or(grid.start());

        if s == 0.0 {
            return Err(MixingError::DegenerateScattering { wavelength });
        }

        let ratio = k / s;
        if ratio < 0.0 {
            return Err(MixingError::InvalidReflectance { wavelength, ratio });
        }

        let bulk = 1.0 + ratio - (ratio * ratio + 2.0 * ratio).sqrt();
        let corrected =
            (1.0 - SAUNDERSON_K1) * (1.0 - SAUNDERSON_K2) * bulk / (1.0 - SAUNDERSON_K2 * bulk);
        values.push(corrected);
    }

    Spectrum::new(grid, values)
}

// --------------------------------------------------------------------------------------------------------------------
