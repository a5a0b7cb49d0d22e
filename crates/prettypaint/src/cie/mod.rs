//! Spectral reference data directly sourced from the CIE.

mod d65;
mod two_deg;

pub use d65::CIE_ILLUMINANT_D65;
pub use two_deg::CIE_OBSERVER_2DEG_1931;

#[cfg(test)]
mod test {
    use super::{CIE_ILLUMINANT_D65, CIE_OBSERVER_2DEG_1931};
    use crate::core::{Sum, ThreeSum};
    use crate::assert_close_enough;
    use crate::spectrum::SpectralDistribution;

    #[test]
    fn test_checksum() {
        let illuminant = &CIE_ILLUMINANT_D65;
        let mut sum = Sum::new();
        let mut wavelength = illuminant.start();
        while wavelength <= illuminant.end() {
            sum += illuminant.at(wavelength).unwrap();
            wavelength += illuminant.step();
        }
        assert_close_enough!(sum.value(), illuminant.checksum());

        let observer = &CIE_OBSERVER_2DEG_1931;
        let mut sum = ThreeSum::new();
        let mut wavelength = observer.start();
        while wavelength <= observer.end() {
            sum += observer.at(wavelength).unwrap();
            wavelength += observer.step();
        }
        let [x, y, z] = sum.value();
        let [cx, cy, cz] = observer.checksum();
        assert_close_enough!(x, cx);
        assert_close_enough!(y, cy);
        assert_close_enough!(z, cz);
    }

    #[test]
    fn test_coverage() {
        // Both tables must cover the visible grid, with margin for the
        // half-step resampling rule.
        assert_eq!(CIE_ILLUMINANT_D65.start(), 380);
        assert_eq!(CIE_ILLUMINANT_D65.end(), 780);
        assert_eq!(CIE_ILLUMINANT_D65.len(), 81);
        assert_eq!(CIE_OBSERVER_2DEG_1931.start(), 380);
        assert_eq!(CIE_OBSERVER_2DEG_1931.end(), 780);
        assert_eq!(CIE_OBSERVER_2DEG_1931.len(), 81);

        // D65 is normalized to 100 at 560 nm; ȳ peaks at 555 nm.
        assert_eq!(CIE_ILLUMINANT_D65.at(560), Some(100.0));
        let [_, y, _] = CIE_OBSERVER_2DEG_1931.at(555).unwrap();
        assert_eq!(y, 1.0);
    }
}
