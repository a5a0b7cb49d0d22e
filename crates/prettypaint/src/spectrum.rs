//! Utility module with wavelength grids, sampled spectra, and spectral
//! distributions.
//!
//! The [`SpectralDistribution`] trait defines an interface for mapping a
//! fixed, nanometer-aligned range of wavelengths at a fixed step to values.
//! With wavelengths restricted to integral nanometers, the interface uses
//! `usize` for their representation. Meanwhile, values are represented by an
//! associated type, which is [`Float`] for illuminants and `[Float; 3]` for
//! observers.
//!
//! This module includes the following implementations of the trait:
//!
//!   * [`TabularDistribution`] is a table-driven implementation of
//!     `SpectralDistribution<Value=Float>`.
//!   * [`Observer`] is a table-driven implementation of
//!     `SpectralDistribution<Value=[Float;3]>`.
//!
//! Distributions are static reference tables at their native resolution.
//! Mixing computations instead run over [`Spectrum`] values aligned with a
//! [`WavelengthGrid`], usually [`VISIBLE_GRID`]. The [`resample`] and
//! [`resample_observer`] functions bridge the two representations.

use crate::error::MixingError;
use crate::Float;

/// A convenient constant for 5nm.
pub const FIVE_NANOMETERS: std::num::NonZeroUsize =
    unsafe { std::num::NonZeroUsize::new_unchecked(5) };

/// A convenient constant for 10nm.
pub const TEN_NANOMETERS: std::num::NonZeroUsize =
    unsafe { std::num::NonZeroUsize::new_unchecked(10) };

/// The wavelength grid shared by all mixing computations: 390–730 nm sampled
/// every 10 nm, i.e., 35 samples spanning 340 nm.
///
/// The 35 samples make for 34 intervals, which satisfies composite Simpson's
/// rule's requirement of an even interval count.
pub const VISIBLE_GRID: WavelengthGrid = WavelengthGrid::new(390, TEN_NANOMETERS, 35);

// --------------------------------------------------------------------------------------------------------------------

/// An equidistant sequence of wavelengths.
///
/// A wavelength grid is given by its starting wavelength, its nonzero step,
/// and its number of samples, all in integral nanometers. Wavelengths are
/// strictly increasing by construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavelengthGrid {
    start: usize,
    step: std::num::NonZeroUsize,
    len: usize,
}

impl WavelengthGrid {
    /// Create a new wavelength grid.
    pub const fn new(start: usize, step: std::num::NonZeroUsize, len: usize) -> Self {
        Self { start, step, len }
    }

    /// Get this grid's starting wavelength.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Get this grid's step between samples.
    #[inline]
    pub const fn step(&self) -> usize {
        self.step.get()
    }

    /// Get this grid's number of samples.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Determine whether this grid is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get this grid's last wavelength. For an empty grid, that is the
    /// starting wavelength.
    #[inline]
    pub const fn last(&self) -> usize {
        if self.len == 0 {
            self.start
        } else {
            self.start + self.step.get() * (self.len - 1)
        }
    }

    /// Get the distance between this grid's first and last wavelength.
    #[inline]
    pub const fn span(&self) -> usize {
        self.last() - self.start
    }

    /// Get the wavelength at the given zero-based index.
    #[inline]
    pub const fn wavelength(&self, index: usize) -> Option<usize> {
        if index < self.len {
            Some(self.start + self.step.get() * index)
        } else {
            None
        }
    }

    /// Get the zero-based index of the given wavelength, which must lie on
    /// this grid.
    pub const fn index_of(&self, wavelength: usize) -> Option<usize> {
        if wavelength < self.start {
            return None;
        }
        let offset = wavelength - self.start;
        if offset % self.step.get() != 0 {
            return None;
        }
        let index = offset / self.step.get();
        if index < self.len {
            Some(index)
        } else {
            None
        }
    }

    /// Get an iterator over this grid's wavelengths.
    pub fn wavelengths(&self) -> impl Iterator<Item = usize> {
        let start = self.start;
        let step = self.step.get();
        (0..self.len).map(move |index| start + step * index)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An owned sequence of per-wavelength values aligned 1:1 with a wavelength
/// grid.
///
/// Spectra represent the transient quantities of the mixing pipeline, such as
/// a pigment's absorption and scattering coefficients or a mixture's
/// reflectance. Static reference data uses [`TabularDistribution`] and
/// [`Observer`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    grid: WavelengthGrid,
    values: Vec<Float>,
}

impl Spectrum {
    /// Create a new spectrum over the given grid.
    ///
    /// The number of values must match the grid's number of samples.
    pub fn new(grid: WavelengthGrid, values: Vec<Float>) -> Result<Self, MixingError> {
        if values.len() != grid.len() {
            return Err(MixingError::MismatchedSamples {
                expected: grid.len(),
                actual: values.len(),
            });
        }

        Ok(Self { grid, values })
    }

    /// Get this spectrum's wavelength grid.
    #[inline]
    pub fn grid(&self) -> WavelengthGrid {
        self.grid
    }

    /// Get this spectrum's values in wavelength order.
    #[inline]
    pub fn values(&self) -> &[Float] {
        &self.values
    }

    /// Get this spectrum's value for the given wavelength.
    pub fn at(&self, wavelength: usize) -> Option<Float> {
        self.grid.index_of(wavelength).map(|index| self.values[index])
    }
}

impl AsRef<[Float]> for Spectrum {
    fn as_ref(&self) -> &[Float] {
        &self.values
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A spectral distribution at a fixed nanometer resolution.
///
/// A concrete implementation must provide methods that return a descriptive
/// label, a start wavelength, a step, a length, and the spectral
/// distribution's values.
pub trait SpectralDistribution {
    /// The spectral distribution's value type.
    type Value;

    /// Get a descriptive label for this spectral distribution.
    fn label(&self) -> String;

    /// Get the starting wavelength for this spectral distribution.
    fn start(&self) -> usize;

    /// Get the step between this spectral distribution's samples.
    fn step(&self) -> usize;

    /// Get the number of samples of this spectral distribution.
    fn len(&self) -> usize;

    /// Get the last wavelength of this spectral distribution.
    fn end(&self) -> usize {
        if self.is_empty() {
            self.start()
        } else {
            self.start() + self.step() * (self.len() - 1)
        }
    }

    /// Determine whether this distribution is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get this spectral distribution's value for the given wavelength.
    ///
    /// If the wavelength lies on this spectral distribution's grid, this
    /// method returns some value. Otherwise, it returns none.
    fn at(&self, wavelength: usize) -> Option<Self::Value>;

    /// Get the checksum for this spectral distribution.
    ///
    /// The checksum is the componentwise sum of all values contained in the
    /// distribution. It must not be computed on the fly.
    fn checksum(&self) -> Self::Value;
}

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven spectral distribution over floating point values.
#[derive(Clone, Debug)]
pub struct TabularDistribution {
    label: &'static str,
    start: usize,
    step: std::num::NonZeroUsize,
    checksum: Float,
    data: &'static [Float],
}

impl TabularDistribution {
    /// Create a new tabular distribution.
    pub const fn new(
        label: &'static str,
        start: usize,
        step: std::num::NonZeroUsize,
        checksum: Float,
        data: &'static [Float],
    ) -> Self {
        Self {
            label,
            start,
            step,
            checksum,
            data,
        }
    }
}

impl SpectralDistribution for TabularDistribution {
    type Value = Float;

    fn label(&self) -> String {
        self.label.to_string()
    }

    fn start(&self) -> usize {
        self.start
    }

    fn step(&self) -> usize {
        self.step.get()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, wavelength: usize) -> Option<Self::Value> {
        if wavelength < self.start {
            return None;
        }
        let offset = wavelength - self.start;
        if offset % self.step.get() != 0 {
            return None;
        }
        self.data.get(offset / self.step.get()).copied()
    }

    fn checksum(&self) -> Self::Value {
        self.checksum
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A standard observer.
///
/// The CIE's standard observers, or color matching functions, model human
/// color perception. Since humans are trichromatic, the per-wavelength values
/// of standard observers are triples of floating point numbers.
#[derive(Clone, Debug)]
pub struct Observer {
    label: &'static str,
    start: usize,
    step: std::num::NonZeroUsize,
    checksum: [Float; 3],
    data: &'static [[Float; 3]],
}

impl Observer {
    /// Create a new observer.
    pub const fn new(
        label: &'static str,
        start: usize,
        step: std::num::NonZeroUsize,
        checksum: [Float; 3],
        data: &'static [[Float; 3]],
    ) -> Self {
        Self {
            label,
            start,
            step,
            checksum,
            data,
        }
    }
}

impl SpectralDistribution for Observer {
    type Value = [Float; 3];

    fn label(&self) -> String {
        self.label.to_string()
    }

    fn start(&self) -> usize {
        self.start
    }

    fn step(&self) -> usize {
        self.step.get()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, wavelength: usize) -> Option<Self::Value> {
        if wavelength < self.start {
            return None;
        }
        let offset = wavelength - self.start;
        if offset % self.step.get() != 0 {
            return None;
        }
        self.data.get(offset / self.step.get()).copied()
    }

    fn checksum(&self) -> Self::Value {
        self.checksum
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Where to read a resampled value from the native table.
enum Tap {
    Direct(usize),
    Mean(usize, usize),
}

/// Determine the native wavelengths backing the target sample at the given
/// index.
fn tap(
    native_step: usize,
    target_step: usize,
    index: usize,
    wavelength: usize,
) -> Result<Tap, MixingError> {
    if native_step == target_step {
        Ok(Tap::Direct(wavelength))
    } else if 2 * native_step == target_step {
        if index == 0 {
            Ok(Tap::Direct(wavelength))
        } else {
            Ok(Tap::Mean(wavelength - native_step, wavelength + native_step))
        }
    } else {
        Err(MixingError::UnsupportedResolution {
            native: native_step,
            target: target_step,
        })
    }
}

/// Resample a scalar-valued spectral distribution onto the given grid.
///
/// A native table at the grid's own step is read off directly. A native table
/// at half the grid's step is smoothed instead: The value at each grid
/// wavelength is the mean of the two native samples immediately below and
/// above it. The exception is the grid's very first wavelength, which has no
/// preceding sample to draw on and takes the native sample at that wavelength
/// directly. Other step ratios are not supported.
///
/// The asymmetry at the first wavelength is deliberate and load-bearing: the
/// reference tristimulus values depend on it.
pub fn resample<D>(distribution: &D, grid: WavelengthGrid) -> Result<Spectrum, MixingError>
where
    D: SpectralDistribution<Value = Float>,
{
    let mut values = Vec::with_capacity(grid.len());

    for (index, wavelength) in grid.wavelengths().enumerate() {
        let value = match tap(distribution.step(), grid.step(), index, wavelength)? {
            Tap::Direct(at) => lookup(distribution, at)?,
            Tap::Mean(below, above) => {
                (lookup(distribution, below)? + lookup(distribution, above)?) / 2.0
            }
        };
        values.push(value);
    }

    Spectrum::new(grid, values)
}

/// Resample a triple-valued spectral distribution onto the given grid.
///
/// This function applies the same rule as [`resample`], componentwise.
pub fn resample_observer<D>(
    distribution: &D,
    grid: WavelengthGrid,
) -> Result<Vec<[Float; 3]>, MixingError>
where
    D: SpectralDistribution<Value = [Float; 3]>,
{
    let mut values = Vec::with_capacity(grid.len());

    for (index, wavelength) in grid.wavelengths().enumerate() {
        let value = match tap(distribution.step(), grid.step(), index, wavelength)? {
            Tap::Direct(at) => lookup(distribution, at)?,
            Tap::Mean(below, above) => {
                let below = lookup(distribution, below)?;
                let above = lookup(distribution, above)?;
                [
                    (below[0] + above[0]) / 2.0,
                    (below[1] + above[1]) / 2.0,
                    (below[2] + above[2]) / 2.0,
                ]
            }
        };
        values.push(value);
    }

    Ok(values)
}

fn lookup<D: SpectralDistribution>(
    distribution: &D,
    wavelength: usize,
) -> Result<D::Value, MixingError> {
    distribution
        .at(wavelength)
        .ok_or(MixingError::UncoveredWavelength { wavelength })
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{
        resample, resample_observer, Observer, SpectralDistribution, TabularDistribution,
        WavelengthGrid, FIVE_NANOMETERS, TEN_NANOMETERS, VISIBLE_GRID,
    };
    use crate::error::MixingError;
    use crate::Float;

    #[test]
    fn test_visible_grid() {
        assert_eq!(VISIBLE_GRID.start(), 390);
        assert_eq!(VISIBLE_GRID.step(), 10);
        assert_eq!(VISIBLE_GRID.len(), 35);
        assert_eq!(VISIBLE_GRID.last(), 730);
        assert_eq!(VISIBLE_GRID.span(), 340);

        assert_eq!(VISIBLE_GRID.wavelength(0), Some(390));
        assert_eq!(VISIBLE_GRID.wavelength(34), Some(730));
        assert_eq!(VISIBLE_GRID.wavelength(35), None);

        assert_eq!(VISIBLE_GRID.index_of(390), Some(0));
        assert_eq!(VISIBLE_GRID.index_of(500), Some(11));
        assert_eq!(VISIBLE_GRID.index_of(495), None);
        assert_eq!(VISIBLE_GRID.index_of(380), None);
        assert_eq!(VISIBLE_GRID.index_of(740), None);

        let wavelengths: Vec<usize> = VISIBLE_GRID.wavelengths().collect();
        assert_eq!(wavelengths.len(), 35);
        assert_eq!(wavelengths[0], 390);
        assert_eq!(wavelengths[34], 730);
    }

    #[test]
    fn test_tabular_distribution() {
        static DATA: [Float; 4] = [1.0, 2.0, 3.0, 4.0];
        let table = TabularDistribution::new("table", 400, FIVE_NANOMETERS, 10.0, &DATA);

        assert_eq!(table.start(), 400);
        assert_eq!(table.step(), 5);
        assert_eq!(table.len(), 4);
        assert_eq!(table.end(), 415);

        assert_eq!(table.at(400), Some(1.0));
        assert_eq!(table.at(415), Some(4.0));
        assert_eq!(table.at(395), None);
        assert_eq!(table.at(402), None);
        assert_eq!(table.at(420), None);
        assert_eq!(table.checksum(), 10.0);
    }

    #[test]
    fn test_resample_same_step() {
        static DATA: [Float; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
        let table = TabularDistribution::new("table", 390, TEN_NANOMETERS, 150.0, &DATA);
        let grid = WavelengthGrid::new(390, TEN_NANOMETERS, 5);

        let spectrum = resample(&table, grid).unwrap();
        assert_eq!(spectrum.values(), &[10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn test_resample_half_step() {
        // 380, 385, ..., 425 nm
        static DATA: [Float; 10] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];
        let table = TabularDistribution::new("table", 380, FIVE_NANOMETERS, 1023.0, &DATA);
        let grid = WavelengthGrid::new(390, TEN_NANOMETERS, 4);

        let spectrum = resample(&table, grid).unwrap();
        // The first grid point reads 390 nm directly; every other point is
        // the mean of its neighbors 5 nm below and above.
        assert_eq!(
            spectrum.values(),
            &[
                4.0,
                (8.0 + 32.0) / 2.0,
                (32.0 + 128.0) / 2.0,
                (128.0 + 512.0) / 2.0
            ]
        );
    }

    #[test]
    fn test_resample_unsupported_step() {
        static DATA: [Float; 200] = [1.0; 200];
        let table = TabularDistribution::new(
            "table",
            380,
            unsafe { std::num::NonZeroUsize::new_unchecked(2) },
            200.0,
            &DATA,
        );

        let result = resample(&table, VISIBLE_GRID);
        assert_eq!(
            result.unwrap_err(),
            MixingError::UnsupportedResolution {
                native: 2,
                target: 10
            }
        );
    }

    #[test]
    fn test_resample_uncovered() {
        // Starts at 400 nm, so the grid's first wavelength has no sample.
        static DATA: [Float; 100] = [1.0; 100];
        let table = TabularDistribution::new("table", 400, FIVE_NANOMETERS, 100.0, &DATA);

        let result = resample(&table, VISIBLE_GRID);
        assert_eq!(
            result.unwrap_err(),
            MixingError::UncoveredWavelength { wavelength: 390 }
        );
    }

    #[test]
    fn test_resample_observer() {
        static DATA: [[Float; 3]; 6] = [
            [1.0, 10.0, 100.0],
            [2.0, 20.0, 200.0],
            [3.0, 30.0, 300.0],
            [4.0, 40.0, 400.0],
            [5.0, 50.0, 500.0],
            [6.0, 60.0, 600.0],
        ];
        let observer = Observer::new(
            "observer",
            385,
            FIVE_NANOMETERS,
            [21.0, 210.0, 2100.0],
            &DATA,
        );
        let grid = WavelengthGrid::new(390, TEN_NANOMETERS, 2);

        let values = resample_observer(&observer, grid).unwrap();
        assert_eq!(values[0], [2.0, 20.0, 200.0]);
        assert_eq!(values[1], [4.0, 40.0, 400.0]);
    }
}
