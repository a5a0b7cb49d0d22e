//! Integration of reflectance spectra into CIE XYZ tristimulus values.
//!
//! Converting a reflectance spectrum into a perceived color requires weighing
//! it, wavelength by wavelength, with a standard observer under an
//! illuminant, and then integrating the three weighted sequences over the
//! visible range. The [`WeightingTable`] prepares the per-wavelength weights
//! once; [`simpson`] performs the numerical integration.

use crate::core::Sum;
use crate::error::MixingError;
use crate::spectrum::{
    resample, resample_observer, SpectralDistribution, Spectrum, WavelengthGrid,
};
use crate::Float;

/// CIE XYZ tristimulus values.
///
/// Tristimulus values are derived quantities without persistent identity;
/// their scale depends on the weighting table that produced them and only
/// becomes meaningful relative to the table's [luminosity
/// normalization](WeightingTable::luminosity).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tristimulus {
    /// The X component.
    pub x: Float,
    /// The Y component.
    pub y: Float,
    /// The Z component.
    pub z: Float,
}

// --------------------------------------------------------------------------------------------------------------------

/// Per-wavelength observer-times-illuminant weights over a wavelength grid.
///
/// A weighting table resamples an observer and an illuminant onto its target
/// grid and premultiplies the two, caching one x̄·S, ȳ·S, z̄·S triple per
/// wavelength. ASTM standard E308 refers to such premultiplied values as
/// *weighting factors*. The table also integrates ȳ·S once, yielding the
/// luminosity that normalizes all colors computed against it.
///
/// Construction is the expensive step; afterwards, a weighting table never
/// changes and may be shared freely across threads.
#[derive(Clone, Debug)]
pub struct WeightingTable {
    label: String,
    grid: WavelengthGrid,
    weights: Vec<[Float; 3]>,
    luminosity: Float,
}

impl WeightingTable {
    /// Create a new weighting table over the given grid.
    ///
    /// Observer and illuminant may be sampled at the grid's own step or at
    /// half that step; see [`resample`] for the exact rule. The grid must
    /// suit [`simpson`], i.e., have an odd number of at least three samples.
    pub fn new<I, O>(
        illuminant: &I,
        observer: &O,
        grid: WavelengthGrid,
    ) -> Result<Self, MixingError>
    where
        I: SpectralDistribution<Value = Float>,
        O: SpectralDistribution<Value = [Float; 3]>,
    {
        let power = resample(illuminant, grid)?;
        let sensitivity = resample_observer(observer, grid)?;

        let mut weights = Vec::with_capacity(grid.len());
        for (&s, [x, y, z]) in power.values().iter().zip(sensitivity) {
            weights.push([x * s, y * s, z * s]);
        }

        let luminance: Vec<Float> = weights.iter().map(|[_, y, _]| *y).collect();
        let luminosity = simpson(&luminance, grid.step() as Float)?;

        Ok(Self {
            label: format!("{} / {}", illuminant.label(), observer.label()),
            grid,
            weights,
            luminosity,
        })
    }

    /// Get a descriptive label for this weighting table.
    #[inline]
    pub fn label(&self) -> String {
        self.label.clone()
    }

    /// Get this weighting table's wavelength grid.
    #[inline]
    pub fn grid(&self) -> WavelengthGrid {
        self.grid
    }

    /// Get the weighting factors in wavelength order.
    #[inline]
    pub fn weights(&self) -> &[[Float; 3]] {
        &self.weights
    }

    /// Get this weighting table's luminosity, the integral of its second
    /// weight component.
    ///
    /// The luminosity is the Y tristimulus value of a perfect reflector and
    /// hence the natural normalization constant for colors computed against
    /// this table.
    #[inline]
    pub fn luminosity(&self) -> Float {
        self.luminosity
    }

    /// Integrate the given reflectance into tristimulus values.
    ///
    /// The reflectance must be aligned with this table's grid. The result is
    /// unnormalized; divide by [`WeightingTable::luminosity`] to relate it to
    /// the white point.
    pub fn tristimulus(&self, reflectance: &Spectrum) -> Result<Tristimulus, MixingError> {
        if reflectance.grid() != self.grid {
            return Err(MixingError::MismatchedGrids);
        }

        let step = self.grid.step() as Float;
        let mut integrand = Vec::with_capacity(self.grid.len());
        let mut components = [0.0; 3];

        for (component, value) in components.iter_mut().enumerate() {
            integrand.clear();
            integrand.extend(
                self.weights
                    .iter()
                    .zip(reflectance.values())
                    .map(|(weight, &r)| weight[component] * r),
            );
            *value = simpson(&integrand, step)?;
        }

        let [x, y, z] = components;
        Ok(Tristimulus { x, y, z })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Integrate equidistant samples with composite Simpson's rule.
///
/// Composite Simpson's rule fits parabolas through consecutive sample
/// triples, which requires an even number of intervals and hence an odd
/// number of at least three samples. Violating that precondition is a
/// configuration error and fails with [`MixingError::InvalidGridSize`].
///
/// The summation is compensated, so integrating a constant value v over n
/// samples with step h yields exactly v·h·(n − 1).
pub fn simpson(values: &[Float], step: Float) -> Result<Float, MixingError> {
    if values.len() < 3 || values.len() % 2 == 0 {
        return Err(MixingError::InvalidGridSize { len: values.len() });
    }

    let mut sum = Sum::new();
    sum += values[0];
    for (index, &value) in values.iter().enumerate().skip(1) {
        if index == values.len() - 1 {
            sum += value;
        } else if index % 2 == 1 {
            sum += 4.0 * value;
        } else {
            sum += 2.0 * value;
        }
    }

    Ok(step * sum.value() / 3.0)
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{simpson, WeightingTable};
    use crate::cie::{CIE_ILLUMINANT_D65, CIE_OBSERVER_2DEG_1931};
    use crate::error::MixingError;
    use crate::spectrum::{resample, Spectrum, VISIBLE_GRID};
    use crate::{assert_close_enough, Float};

    #[test]
    fn test_simpson_constant() {
        // The integral of a constant over the visible grid must come out
        // exactly: v times the 340 nm span.
        let values = vec![1.0; 35];
        assert_eq!(simpson(&values, 10.0).unwrap(), 340.0);

        let values = vec![2.5; 35];
        assert_close_enough!(simpson(&values, 10.0).unwrap(), 850.0);
    }

    #[test]
    fn test_simpson_parabola() {
        // Simpson's rule integrates quadratics exactly. With f(x) = x² over
        // 0..=4, the integral is 64/3.
        let values: Vec<Float> = (0..=4).map(|x| (x * x) as Float).collect();
        assert_close_enough!(simpson(&values, 1.0).unwrap(), 64.0 / 3.0);
    }

    #[test]
    fn test_simpson_grid_size() {
        assert_eq!(
            simpson(&[1.0, 2.0], 10.0).unwrap_err(),
            MixingError::InvalidGridSize { len: 2 }
        );
        assert_eq!(
            simpson(&[1.0, 2.0, 3.0, 4.0], 10.0).unwrap_err(),
            MixingError::InvalidGridSize { len: 4 }
        );
        assert!(simpson(&[1.0, 2.0, 3.0], 10.0).is_ok());
    }

    #[test]
    fn test_resampled_boundary() {
        // The resampling rule reads the first grid point off the native
        // table directly and averages neighbors everywhere else.
        let power = resample(&CIE_ILLUMINANT_D65, VISIBLE_GRID).unwrap();
        assert_eq!(power.values()[0], 54.6482);
        assert_close_enough!(power.values()[1], (68.7015 + 87.1204) / 2.0);
    }

    #[test]
    fn test_weighting_table() {
        let table =
            WeightingTable::new(&CIE_ILLUMINANT_D65, &CIE_OBSERVER_2DEG_1931, VISIBLE_GRID)
                .unwrap();

        assert_eq!(table.grid(), VISIBLE_GRID);
        assert_eq!(table.weights().len(), 35);
        assert_eq!(table.label(), "Illuminant D65 / 2º Observer (CIE 1931)");

        // Pinned from an independent run of the same computation.
        let expected: Float = 10_563.007_545_125_918;
        let relative = (table.luminosity() - expected).abs() / expected;
        assert!(
            relative < 1e-9,
            "luminosity {} differs from {}",
            table.luminosity(),
            expected
        );
    }

    #[test]
    fn test_perfect_reflector() {
        // Integrating a perfect reflector must reproduce the luminosity as
        // the Y component.
        let table =
            WeightingTable::new(&CIE_ILLUMINANT_D65, &CIE_OBSERVER_2DEG_1931, VISIBLE_GRID)
                .unwrap();
        let ideal = Spectrum::new(VISIBLE_GRID, vec![1.0; 35]).unwrap();

        let xyz = table.tristimulus(&ideal).unwrap();
        assert_close_enough!(xyz.y, table.luminosity());
    }
}
