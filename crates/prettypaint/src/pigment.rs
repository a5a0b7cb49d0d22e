use std::collections::BTreeMap;

use crate::error::MixingError;
use crate::spectrum::{Spectrum, WavelengthGrid};
use crate::Float;

/// A pigment with its Kubelka-Munk coefficients.
///
/// A pigment couples a unique name with two spectra over a shared wavelength
/// grid: the absorption coefficients K(λ) and the scattering coefficients
/// S(λ). Both are physical quantities and hence non-negative; the constructor
/// enforces as much. Once constructed, a pigment never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Pigment {
    name: String,
    absorption: Spectrum,
    scattering: Spectrum,
}

impl Pigment {
    /// Create a new pigment.
    ///
    /// The absorption and scattering spectra must share one wavelength grid,
    /// and all their coefficients must be non-negative.
    pub fn new(
        name: impl Into<String>,
        absorption: Spectrum,
        scattering: Spectrum,
    ) -> Result<Self, MixingError> {
        let name = name.into();

        if absorption.grid() != scattering.grid() {
            return Err(MixingError::MismatchedGrids);
        }

        let grid = absorption.grid();
        for (index, (&k, &s)) in absorption
            .values()
            .iter()
            .zip(scattering.values())
            .enumerate()
        {
            if k < 0.0 || s < 0.0 {
                return Err(MixingError::NegativeCoefficient {
                    pigment: name,
                    wavelength: grid.wavelength(index).unwrap_or(grid.start()),
                });
            }
        }

        Ok(Self {
            name,
            absorption,
            scattering,
        })
    }

    /// Get this pigment's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get this pigment's absorption coefficients K(λ).
    #[inline]
    pub fn absorption(&self) -> &Spectrum {
        &self.absorption
    }

    /// Get this pigment's scattering coefficients S(λ).
    #[inline]
    pub fn scattering(&self) -> &Spectrum {
        &self.scattering
    }

    /// Get this pigment's wavelength grid.
    #[inline]
    pub fn grid(&self) -> WavelengthGrid {
        self.absorption.grid()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A collection of pigments, indexed by name.
///
/// A pigment set is loaded once before any mixing starts and read-only
/// thereafter. Looking up a name that the set does not contain is an error,
/// not an absence: palettes must only reference known pigments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PigmentSet {
    pigments: BTreeMap<String, Pigment>,
}

impl PigmentSet {
    /// Create a new, empty pigment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pigment to this set, replacing any previous pigment with the
    /// same name.
    pub fn insert(&mut self, pigment: Pigment) -> Option<Pigment> {
        self.pigments.insert(pigment.name.clone(), pigment)
    }

    /// Get the pigment with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Pigment> {
        self.pigments.get(name)
    }

    /// Look up the pigment with the given name, failing with
    /// [`MixingError::UnknownPigment`] if the set has no such entry.
    pub fn lookup(&self, name: &str) -> Result<&Pigment, MixingError> {
        self.pigments
            .get(name)
            .ok_or_else(|| MixingError::UnknownPigment(name.to_string()))
    }

    /// Determine whether this set contains a pigment with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.pigments.contains_key(name)
    }

    /// Get the number of pigments in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.pigments.len()
    }

    /// Determine whether this set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pigments.is_empty()
    }

    /// Get an iterator over this set's pigments, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Pigment> {
        self.pigments.values()
    }
}

impl FromIterator<Pigment> for PigmentSet {
    fn from_iter<I: IntoIterator<Item = Pigment>>(iter: I) -> Self {
        let mut set = Self::new();
        for pigment in iter {
            set.insert(pigment);
        }
        set
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A weighted selection of pigments.
///
/// A palette maps pigment names to concentrations. Each concentration must
/// lie within the half-open unit interval (0, 1], and all concentrations
/// together must sum to one. Upholding the latter invariant is the caller's
/// responsibility, deliberately so, since the mixing pipeline's linearity in
/// the concentrations is worth preserving for diagnostic computations. The
/// pipeline never renormalizes. [`Palette::validate`] checks each individual
/// concentration, and [`Palette::is_normalized`] checks the sum; neither is
/// invoked implicitly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    entries: BTreeMap<String, Float>,
}

impl Palette {
    /// Create a new, empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pigment with the given concentration to this palette, replacing
    /// any previous concentration for the same name.
    #[must_use = "the method returns a new palette and does not mutate the original value"]
    pub fn with(mut self, name: impl Into<String>, concentration: Float) -> Self {
        self.entries.insert(name.into(), concentration);
        self
    }

    /// Set the concentration for the given pigment name.
    pub fn set(&mut self, name: impl Into<String>, concentration: Float) {
        self.entries.insert(name.into(), concentration);
    }

    /// Get the concentration for the given pigment name, if any.
    pub fn get(&self, name: &str) -> Option<Float> {
        self.entries.get(name).copied()
    }

    /// Get the number of entries in this palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over this palette's entries, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Float)> {
        self.entries
            .iter()
            .map(|(name, concentration)| (name.as_str(), *concentration))
    }

    /// Check that every concentration lies within (0, 1].
    pub fn validate(&self) -> Result<(), MixingError> {
        for (name, concentration) in self.iter() {
            if !(concentration > 0.0 && concentration <= 1.0) {
                return Err(MixingError::InvalidConcentration {
                    pigment: name.to_string(),
                    concentration,
                });
            }
        }
        Ok(())
    }

    /// Determine whether this palette's concentrations sum to one, up to a
    /// small tolerance for floating point rounding.
    pub fn is_normalized(&self) -> bool {
        let total: Float = self.entries.values().sum();
        (total - 1.0).abs() <= 1e-6
    }
}

impl FromIterator<(String, Float)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, Float)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{Palette, Pigment, PigmentSet};
    use crate::error::MixingError;
    use crate::spectrum::{Spectrum, WavelengthGrid, TEN_NANOMETERS};

    fn grid() -> WavelengthGrid {
        WavelengthGrid::new(390, TEN_NANOMETERS, 3)
    }

    fn pigment(name: &str) -> Pigment {
        Pigment::new(
            name,
            Spectrum::new(grid(), vec![0.1, 0.2, 0.3]).unwrap(),
            Spectrum::new(grid(), vec![1.0, 1.0, 1.0]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_pigment_validation() {
        let absorption = Spectrum::new(grid(), vec![0.1, -0.2, 0.3]).unwrap();
        let scattering = Spectrum::new(grid(), vec![1.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            Pigment::new("Bad", absorption, scattering).unwrap_err(),
            MixingError::NegativeCoefficient {
                pigment: "Bad".to_string(),
                wavelength: 400,
            }
        );

        let absorption = Spectrum::new(grid(), vec![0.1, 0.2, 0.3]).unwrap();
        let other_grid = WavelengthGrid::new(400, TEN_NANOMETERS, 3);
        let scattering = Spectrum::new(other_grid, vec![1.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            Pigment::new("Bad", absorption, scattering).unwrap_err(),
            MixingError::MismatchedGrids
        );
    }

    #[test]
    fn test_pigment_set() {
        let mut set = PigmentSet::new();
        assert!(set.is_empty());

        set.insert(pigment("Azure"));
        set.insert(pigment("Zaffre"));
        assert_eq!(set.len(), 2);
        assert!(set.contains("Azure"));

        assert_eq!(set.lookup("Azure").unwrap().name(), "Azure");
        assert_eq!(
            set.lookup("Cerulean").unwrap_err(),
            MixingError::UnknownPigment("Cerulean".to_string())
        );

        let names: Vec<&str> = set.iter().map(Pigment::name).collect();
        assert_eq!(names, ["Azure", "Zaffre"]);
    }

    #[test]
    fn test_palette() {
        let palette = Palette::new().with("Azure", 0.25).with("Zaffre", 0.75);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("Azure"), Some(0.25));
        assert_eq!(palette.get("Cerulean"), None);
        assert!(palette.validate().is_ok());
        assert!(palette.is_normalized());

        let skewed = Palette::new().with("Azure", 0.25).with("Zaffre", 0.25);
        assert!(!skewed.is_normalized());

        let overloaded = Palette::new().with("Azure", 1.5);
        assert_eq!(
            overloaded.validate().unwrap_err(),
            MixingError::InvalidConcentration {
                pigment: "Azure".to_string(),
                concentration: 1.5,
            }
        );
    }
}
