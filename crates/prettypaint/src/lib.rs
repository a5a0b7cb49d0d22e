//! # Pretty 🎨 Paint
//!
//! Prettypaint predicts the color of physically mixed paints. It implements
//! the [Kubelka-Munk
//! theory](https://en.wikipedia.org/wiki/Kubelka%E2%80%93Munk_theory) of
//! subtractive color mixing: Given the per-wavelength absorption K(λ) and
//! scattering S(λ) coefficients of the pigments in a mixture, it derives the
//! mixture's spectral reflectance, weighs that reflectance by the [CIE 1931 2º
//! standard observer](https://en.wikipedia.org/wiki/CIE_1931_color_space)
//! under the [D65 standard
//! illuminant](https://en.wikipedia.org/wiki/Standard_illuminant), and
//! converts the resulting tristimulus values into display RGB.
//!
//!
//! ## 1. Overview
//!
//! Prettypaint's main abstractions are:
//!
//!   * [`Mixer`] owns the read-only reference tables, a [`PigmentSet`] and a
//!     [`WeightingTable`](tristimulus::WeightingTable), and evaluates palettes.
//!     Because a mixer never mutates after construction, one instance may
//!     serve any number of threads concurrently.
//!   * [`Palette`] names the pigments of a mixture together with their
//!     concentrations. Concentrations must sum to one; the mixer trusts but
//!     never renormalizes them.
//!   * [`Pigment`] couples a pigment's name with its absorption and scattering
//!     [`Spectrum`](spectrum::Spectrum)s over the shared
//!     [`VISIBLE_GRID`](spectrum::VISIBLE_GRID), that is, 390–730 nm sampled
//!     every 10 nm.
//!   * The [`km`] module combines pigments into mixture spectra and turns
//!     those into Saunderson-corrected Kubelka-Munk reflectances.
//!   * The [`tristimulus`] module integrates a reflectance against observer
//!     and illuminant with composite Simpson's rule, yielding CIE XYZ.
//!   * The [`srgb`] module maps XYZ to unclamped display [`Rgb`].
//!   * The [`cie`] module embeds the D65 illuminant and the 1931 2º observer
//!     at their native 5 nm resolution, and the [`paints`] module embeds
//!     reference Kubelka-Munk coefficients for a handful of artist pigments.
//!
//!
//! ## 2. One-Two-Three: Mix!
//!
//! Mixing a color takes three steps. First, stand up a mixer, here with the
//! built-in pigments and CIE tables:
//!
//! ```
//! # use prettypaint::{Mixer, Palette, error::MixingError};
//! # fn main() -> Result<(), MixingError> {
//! // 1. Stand up the mixer
//! let mixer = Mixer::new(prettypaint::paints::artist_pigments())?;
//! # Ok(())
//! # }
//! ```
//!
//! Second, describe the mixture as a palette. The caller is responsible for
//! concentrations summing to one:
//!
//! ```
//! # use prettypaint::Palette;
//! // 2. Describe the mixture
//! let half_half = Palette::new()
//!     .with("White", 0.5)
//!     .with("Cobalt Blue", 0.5);
//! assert!(half_half.is_normalized());
//! ```
//!
//! Third, mix. The result is an unclamped RGB triple scaled to 0–255;
//! clamping, if desired at all, is the caller's policy:
//!
//! ```
//! # use prettypaint::{Mixer, Palette, error::MixingError};
//! # fn main() -> Result<(), MixingError> {
//! # let mixer = Mixer::new(prettypaint::paints::artist_pigments())?;
//! # let half_half = Palette::new().with("White", 0.5).with("Cobalt Blue", 0.5);
//! // 3. Mix!
//! let color = mixer.mix(&half_half)?;
//! let [r, g, b] = color.clamped_24bit();
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypaint supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` and `Deserialize` for the public value
//!     types, so palettes and results can travel through configuration files
//!     and wire formats. This feature is disabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! The pipeline follows the classic treatment of Kubelka and Munk (1931) with
//! Saunderson's surface correction (1942), and the colorimetry of the CIE's
//! 1931 standard observer. The tabulated observer and illuminant data are
//! directly sourced from the CIE.
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod mixer;
mod pigment;

pub mod cie;
pub mod km;
pub mod paints;
pub mod spectrum;
pub mod srgb;
pub mod tristimulus;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use error::MixingError;
pub use mixer::Mixer;
pub use pigment::{Palette, Pigment, PigmentSet};
pub use srgb::Rgb;
