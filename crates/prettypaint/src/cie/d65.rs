use crate::spectrum::{TabularDistribution, FIVE_NANOMETERS};

/// The CIE D65 standard illuminant at 5nm resolution.
///
/// D65 approximates average daylight around noon. The relative spectral power
/// distribution below covers 380--780 nm and is normalized to 100 at 560 nm.
#[rustfmt::skip]
pub const CIE_ILLUMINANT_D65: TabularDistribution = TabularDistribution::new(
    "Illuminant D65",
    380,
    FIVE_NANOMETERS,
    7092.7234,
    &[
        49.9755, 52.3118, 54.6482, 68.7015, 82.7549, 87.1204,
        91.4860, 92.4589, 93.4318, 90.0570, 86.6823, 95.7736,
        104.8650, 110.9360, 117.0080, 117.4100, 117.8120, 116.3360,
        114.8610, 115.3920, 115.9230, 112.3670, 108.8110, 109.0820,
        109.3540, 108.5780, 107.8020, 106.2960, 104.7900, 106.2390,
        107.6890, 106.0470, 104.4050, 104.2250, 104.0460, 102.0230,
        100.0000, 98.1671, 96.3342, 96.0611, 95.7880, 92.2368,
        88.6856, 89.3459, 90.0062, 89.8026, 89.5991, 88.6489,
        87.6987, 85.4936, 83.2886, 83.4939, 83.6992, 81.8630,
        80.0268, 80.1207, 80.2146, 81.2462, 82.2778, 80.2810,
        78.2842, 74.0027, 69.7213, 70.6652, 71.6091, 72.9790,
        74.3490, 67.9765, 61.6040, 65.7448, 69.8856, 72.4863,
        75.0870, 69.3398, 63.5927, 55.0054, 46.4182, 56.6118,
        66.8054, 65.0941, 63.3828,
    ],
);
