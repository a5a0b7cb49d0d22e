use crate::cie::{CIE_ILLUMINANT_D65, CIE_OBSERVER_2DEG_1931};
use crate::error::MixingError;
use crate::km::{mix, reflectance};
use crate::pigment::{Palette, PigmentSet};
use crate::spectrum::{SpectralDistribution, Spectrum, WavelengthGrid, VISIBLE_GRID};
use crate::srgb::{tristimulus_to_rgb, Rgb};
use crate::tristimulus::WeightingTable;
use crate::Float;

/// A paint mixer.
///
/// A mixer owns the two read-only tables that mixture evaluation needs: the
/// [`PigmentSet`] naming the available paints and the [`WeightingTable`]
/// derived from an illuminant and observer. Constructing a mixer performs the
/// one-time table work of resampling, premultiplication, and the luminosity
/// integral, so that [`Mixer::mix`] only runs the per-palette pipeline.
///
/// After construction, a mixer never changes. Every evaluation owns its
/// transient state exclusively, so a single mixer may evaluate any number of
/// palettes concurrently from different threads without synchronization.
#[derive(Clone, Debug)]
pub struct Mixer {
    pigments: PigmentSet,
    weighting: WeightingTable,
}

impl Mixer {
    /// Create a new mixer for the given pigments, with colors as seen by the
    /// CIE 1931 2º standard observer under the D65 standard illuminant.
    pub fn new(pigments: PigmentSet) -> Result<Self, MixingError> {
        Self::with_tables(
            pigments,
            &CIE_ILLUMINANT_D65,
            &CIE_OBSERVER_2DEG_1931,
            VISIBLE_GRID,
        )
    }

    /// Create a new mixer with an explicit illuminant, observer, and grid.
    pub fn with_tables<I, O>(
        pigments: PigmentSet,
        illuminant: &I,
        observer: &O,
        grid: WavelengthGrid,
    ) -> Result<Self, MixingError>
    where
        I: SpectralDistribution<Value = Float>,
        O: SpectralDistribution<Value = [Float; 3]>,
    {
        let weighting = WeightingTable::new(illuminant, observer, grid)?;

        Ok(Self {
            pigments,
            weighting,
        })
    }

    /// Get this mixer's pigments.
    #[inline]
    pub fn pigments(&self) -> &PigmentSet {
        &self.pigments
    }

    /// Get this mixer's weighting table.
    #[inline]
    pub fn weighting(&self) -> &WeightingTable {
        &self.weighting
    }

    /// Derive the Saunderson-corrected reflectance of the palette's mixture.
    ///
    /// This method exposes the pipeline's intermediate result for callers
    /// that want to inspect or plot the spectrum itself rather than the
    /// perceived color.
    pub fn reflectance(&self, palette: &Palette) -> Result<Spectrum, MixingError> {
        reflectance(&mix(palette, &self.pigments)?)
    }

    /// Evaluate the palette into its perceived color.
    ///
    /// This method runs the full pipeline: it combines the palette's pigments
    /// into mixture coefficients, derives the corrected reflectance,
    /// integrates against the weighting table, and converts the resulting
    /// tristimulus values to display RGB. The palette's concentrations must
    /// sum to one; the mixer trusts the caller on that and never
    /// renormalizes.
    pub fn mix(&self, palette: &Palette) -> Result<Rgb, MixingError> {
        let reflectance = self.reflectance(palette)?;
        let tristimulus = self.weighting.tristimulus(&reflectance)?;

        Ok(tristimulus_to_rgb(
            &tristimulus,
            self.weighting.luminosity(),
        ))
    }
}

// --------------------------------------------------------------------------------------------------------------------
