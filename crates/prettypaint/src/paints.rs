//! Reference Kubelka-Munk coefficients for artist pigments.
//!
//! The tables below describe a small working set of artist paints by their
//! absorption K(λ) and scattering S(λ) coefficients over
//! [`VISIBLE_GRID`](crate::spectrum::VISIBLE_GRID), i.e., 390–730 nm at
//! 10 nm steps. The coefficients are normalized to unit film thickness; only
//! their ratio enters the reflectance computation, so the overall scale is a
//! matter of convention.

use crate::pigment::{Pigment, PigmentSet};
use crate::spectrum::{Spectrum, VISIBLE_GRID};
use crate::Float;

#[rustfmt::skip]
static WHITE_K: [Float; 35] = [
    0.0354, 0.0241, 0.0077, 0.0014, 0.0005, 0.0004, 0.0004,
    0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004,
    0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004,
    0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004,
    0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004, 0.0004,
];

#[rustfmt::skip]
static WHITE_S: [Float; 35] = [
    1.1800, 1.1755, 1.1710, 1.1665, 1.1620, 1.1575, 1.1530,
    1.1485, 1.1440, 1.1395, 1.1350, 1.1305, 1.1260, 1.1215,
    1.1170, 1.1125, 1.1080, 1.1035, 1.0990, 1.0945, 1.0900,
    1.0855, 1.0810, 1.0765, 1.0720, 1.0675, 1.0630, 1.0585,
    1.0540, 1.0495, 1.0450, 1.0405, 1.0360, 1.0315, 1.0270,
];

#[rustfmt::skip]
static COBALT_BLUE_K: [Float; 35] = [
    0.0350, 0.0350, 0.0351, 0.0352, 0.0356, 0.0366, 0.0387,
    0.0432, 0.0524, 0.0698, 0.1009, 0.1531, 0.2353, 0.3561,
    0.5221, 0.7340, 0.9838, 1.2534, 1.5150, 1.7359, 1.8845,
    1.9382, 1.8894, 1.7473, 1.5365, 1.2901, 1.0429, 0.8237,
    0.6509, 0.5309, 0.4597, 0.4257, 0.4141, 0.4102, 0.4024,
];

#[rustfmt::skip]
static COBALT_BLUE_S: [Float; 35] = [
    0.4034, 0.4145, 0.4292, 0.4466, 0.4647, 0.4808, 0.4920,
    0.4958, 0.4913, 0.4788, 0.4603, 0.4387, 0.4167, 0.3968,
    0.3802, 0.3674, 0.3580, 0.3514, 0.3468, 0.3433, 0.3406,
    0.3382, 0.3361, 0.3340, 0.3320, 0.3300, 0.3280, 0.3260,
    0.3240, 0.3220, 0.3200, 0.3180, 0.3160, 0.3140, 0.3120,
];

#[rustfmt::skip]
static CADMIUM_YELLOW_K: [Float; 35] = [
    2.4173, 2.4163, 2.4141, 2.4090, 2.3974, 2.3712, 2.3129,
    2.1892, 1.9496, 1.5584, 1.0688, 0.6249, 0.3258, 0.1622,
    0.0829, 0.0466, 0.0305, 0.0235, 0.0204, 0.0190, 0.0184,
    0.0182, 0.0181, 0.0180, 0.0180, 0.0180, 0.0180, 0.0180,
    0.0180, 0.0180, 0.0180, 0.0180, 0.0180, 0.0180, 0.0180,
];

#[rustfmt::skip]
static CADMIUM_YELLOW_S: [Float; 35] = [
    0.7800, 0.7760, 0.7720, 0.7680, 0.7640, 0.7600, 0.7560,
    0.7520, 0.7480, 0.7440, 0.7400, 0.7360, 0.7320, 0.7280,
    0.7240, 0.7200, 0.7160, 0.7120, 0.7080, 0.7040, 0.7000,
    0.6960, 0.6920, 0.6880, 0.6840, 0.6800, 0.6760, 0.6720,
    0.6680, 0.6640, 0.6600, 0.6560, 0.6520, 0.6480, 0.6440,
];

#[rustfmt::skip]
static CADMIUM_RED_K: [Float; 35] = [
    2.6200, 2.6200, 2.6200, 2.6200, 2.6200, 2.6200, 2.6200,
    2.6200, 2.6199, 2.6198, 2.6197, 2.6192, 2.6182, 2.6158,
    2.6103, 2.5977, 2.5693, 2.5061, 2.3721, 2.1125, 1.6888,
    1.1583, 0.6775, 0.3534, 0.1762, 0.0903, 0.0510, 0.0336,
    0.0259, 0.0226, 0.0211, 0.0205, 0.0202, 0.0201, 0.0200,
];

#[rustfmt::skip]
static CADMIUM_RED_S: [Float; 35] = [
    0.6000, 0.5970, 0.5940, 0.5910, 0.5880, 0.5850, 0.5820,
    0.5790, 0.5760, 0.5730, 0.5700, 0.5670, 0.5640, 0.5610,
    0.5580, 0.5550, 0.5520, 0.5490, 0.5460, 0.5430, 0.5400,
    0.5370, 0.5340, 0.5310, 0.5280, 0.5250, 0.5220, 0.5190,
    0.5160, 0.5130, 0.5100, 0.5070, 0.5040, 0.5010, 0.4980,
];

#[rustfmt::skip]
static QUINACRIDONE_MAGENTA_K: [Float; 35] = [
    0.0702, 0.0705, 0.0716, 0.0746, 0.0818, 0.0980, 0.1313,
    0.1940, 0.3014, 0.4686, 0.7040, 1.0007, 1.3314, 1.6481,
    1.8925, 2.0130, 1.9822, 1.8071, 1.5268, 1.1978, 0.8759,
    0.6016, 0.3938, 0.2520, 0.1644, 0.1152, 0.0900, 0.0782,
    0.0731, 0.0711, 0.0703, 0.0701, 0.0700, 0.0700, 0.0700,
];

#[rustfmt::skip]
static QUINACRIDONE_MAGENTA_S: [Float; 35] = [
    0.3200, 0.3190, 0.3180, 0.3170, 0.3160, 0.3150, 0.3140,
    0.3130, 0.3120, 0.3110, 0.3100, 0.3090, 0.3080, 0.3070,
    0.3060, 0.3050, 0.3040, 0.3030, 0.3020, 0.3010, 0.3000,
    0.2990, 0.2980, 0.2970, 0.2960, 0.2950, 0.2940, 0.2930,
    0.2920, 0.2910, 0.2900, 0.2890, 0.2880, 0.2870, 0.2860,
];

#[rustfmt::skip]
static PHTHALO_GREEN_K: [Float; 35] = [
    2.1567, 2.1509, 2.1370, 2.1067, 2.0466, 1.9387, 1.7640,
    1.5106, 1.1834, 0.8135, 0.4579, 0.1872, 0.0636, 0.1175,
    0.3355, 0.6657, 1.0379, 1.3875, 1.6723, 1.8778, 2.0102,
    2.0871, 2.1275, 2.1467, 2.1550, 2.1583, 2.1595, 2.1598,
    2.1600, 2.1600, 2.1600, 2.1600, 2.1600, 2.1600, 2.1600,
];

#[rustfmt::skip]
static PHTHALO_GREEN_S: [Float; 35] = [
    0.2700, 0.2690, 0.2680, 0.2670, 0.2660, 0.2650, 0.2640,
    0.2630, 0.2620, 0.2610, 0.2600, 0.2590, 0.2580, 0.2570,
    0.2560, 0.2550, 0.2540, 0.2530, 0.2520, 0.2510, 0.2500,
    0.2490, 0.2480, 0.2470, 0.2460, 0.2450, 0.2440, 0.2430,
    0.2420, 0.2410, 0.2400, 0.2390, 0.2380, 0.2370, 0.2360,
];

#[rustfmt::skip]
static YELLOW_OCHRE_K: [Float; 35] = [
    1.0861, 1.0796, 1.0704, 1.0570, 1.0380, 1.0114, 0.9748,
    0.9259, 0.8627, 0.7847, 0.6940, 0.5952, 0.4949, 0.4002,
    0.3168, 0.2476, 0.1931, 0.1519, 0.1216, 0.0998, 0.0844,
    0.0737, 0.0662, 0.0611, 0.0576, 0.0552, 0.0535, 0.0524,
    0.0516, 0.0511, 0.0508, 0.0505, 0.0504, 0.0502, 0.0502,
];

#[rustfmt::skip]
static YELLOW_OCHRE_S: [Float; 35] = [
    0.7200, 0.7160, 0.7120, 0.7080, 0.7040, 0.7000, 0.6960,
    0.6920, 0.6880, 0.6840, 0.6800, 0.6760, 0.6720, 0.6680,
    0.6640, 0.6600, 0.6560, 0.6520, 0.6480, 0.6440, 0.6400,
    0.6360, 0.6320, 0.6280, 0.6240, 0.6200, 0.6160, 0.6120,
    0.6080, 0.6040, 0.6000, 0.5960, 0.5920, 0.5880, 0.5840,
];

#[rustfmt::skip]
static IVORY_BLACK_K: [Float; 35] = [
    2.9000, 2.8880, 2.8760, 2.8640, 2.8520, 2.8400, 2.8280,
    2.8160, 2.8040, 2.7920, 2.7800, 2.7680, 2.7560, 2.7440,
    2.7320, 2.7200, 2.7080, 2.6960, 2.6840, 2.6720, 2.6600,
    2.6480, 2.6360, 2.6240, 2.6120, 2.6000, 2.5880, 2.5760,
    2.5640, 2.5520, 2.5400, 2.5280, 2.5160, 2.5040, 2.4920,
];

#[rustfmt::skip]
static IVORY_BLACK_S: [Float; 35] = [
    0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500,
    0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500,
    0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500,
    0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500,
    0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500, 0.2500,
];

static ARTIST_PIGMENTS: [(&str, &[Float; 35], &[Float; 35]); 8] = [
    ("White", &WHITE_K, &WHITE_S),
    ("Cobalt Blue", &COBALT_BLUE_K, &COBALT_BLUE_S),
    ("Cadmium Yellow", &CADMIUM_YELLOW_K, &CADMIUM_YELLOW_S),
    ("Cadmium Red", &CADMIUM_RED_K, &CADMIUM_RED_S),
    ("Quinacridone Magenta", &QUINACRIDONE_MAGENTA_K, &QUINACRIDONE_MAGENTA_S),
    ("Phthalo Green", &PHTHALO_GREEN_K, &PHTHALO_GREEN_S),
    ("Yellow Ochre", &YELLOW_OCHRE_K, &YELLOW_OCHRE_S),
    ("Ivory Black", &IVORY_BLACK_K, &IVORY_BLACK_S),
];

/// Assemble the built-in set of artist pigments.
///
/// The set contains White, Cobalt Blue, Cadmium Yellow, Cadmium Red,
/// Quinacridone Magenta, Phthalo Green, Yellow Ochre, and Ivory Black.
pub fn artist_pigments() -> PigmentSet {
    ARTIST_PIGMENTS
        .iter()
        .map(|&(name, absorption, scattering)| {
            let absorption = Spectrum::new(VISIBLE_GRID, absorption.to_vec())
                .expect("reference table has 35 samples");
            let scattering = Spectrum::new(VISIBLE_GRID, scattering.to_vec())
                .expect("reference table has 35 samples");
            Pigment::new(name, absorption, scattering)
                .expect("reference coefficients are non-negative")
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{artist_pigments, ARTIST_PIGMENTS};
    use crate::spectrum::VISIBLE_GRID;

    #[test]
    fn test_artist_pigments() {
        let pigments = artist_pigments();
        assert_eq!(pigments.len(), ARTIST_PIGMENTS.len());

        for pigment in pigments.iter() {
            assert_eq!(pigment.grid(), VISIBLE_GRID);
            assert_eq!(pigment.absorption().values().len(), 35);
            assert_eq!(pigment.scattering().values().len(), 35);
        }

        assert!(pigments.contains("White"));
        assert!(pigments.contains("Cobalt Blue"));
    }

    #[test]
    fn test_positive_scattering() {
        // Every built-in pigment scatters at least a little at every
        // wavelength, keeping the Kubelka-Munk ratio well-defined for any
        // mixture of them.
        for pigment in artist_pigments().iter() {
            for &s in pigment.scattering().values() {
                assert!(s > 0.0, "pigment {} has vanishing scattering", pigment.name());
            }
        }
    }
}
