/// Divisor mapping wire chromaticity integers to CIE xy coordinates.
pub const PRIMARIES_SCALE: f64 = 1_000_000.0;
/// Divisor mapping wire minimum-luminance integers to nits.
pub const MIN_LUMINANCE_SCALE: f64 = 10_000.0;

/// A container luminance range in nits.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Luminance {
    pub min: f64,
    pub max: f64,
    pub reference: f64,
}

/// A mastering/target luminance range in nits.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TargetLuminance {
    pub min: f64,
    pub max: f64,
}

pub fn encode_chromaticity(c: f64) -> i32 {
    (c * PRIMARIES_SCALE).round() as i32
}

pub fn decode_chromaticity(c: i32) -> f64 {
    c as f64 / PRIMARIES_SCALE
}

/// Minimum luminance travels scaled by 10000; maximum and reference
/// luminance are plain nits.
pub fn encode_min_luminance(nits: f64) -> u32 {
    (nits * MIN_LUMINANCE_SCALE).round() as u32
}

pub fn decode_min_luminance(raw: u32) -> f64 {
    raw as f64 / MIN_LUMINANCE_SCALE
}
