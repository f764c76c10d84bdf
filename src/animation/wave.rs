//! Closed-form periodic and pseudo-random signals.
//!
//! Everything here is a pure function of its arguments; there is no generator state to advance,
//! so any frame can be sampled in isolation.

/// The golden angle in degrees (`180 * (3 - sqrt(5))`).
pub const GOLDEN_ANGLE_DEG: f64 = 137.507_764_050_037_85;

/// Fractional part of the golden ratio, used for 1D low-discrepancy sequences.
pub const GOLDEN_RATIO_FRACT: f64 = 0.618_033_988_749_894_9;

/// A sine oscillator sampled in frame units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    /// Peak deviation from `offset`.
    pub amp: f64,
    /// Angular speed in radians per frame.
    pub speed: f64,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f64,
    /// Center value.
    #[serde(default)]
    pub offset: f64,
}

impl Wave {
    /// Oscillator with the given amplitude and angular speed.
    pub fn new(amp: f64, speed: f64) -> Self {
        Self {
            amp,
            speed,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// Same oscillator shifted by `phase` radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// `offset + amp * sin(frame * speed + phase)`.
    pub fn sample(self, frame: f64) -> f64 {
        self.offset + self.amp * (frame * self.speed + self.phase).sin()
    }

    /// Sample remapped to `[0, 1]` (ignores `amp` and `offset`).
    pub fn sample01(self, frame: f64) -> f64 {
        ((frame * self.speed + self.phase).sin() + 1.0) / 2.0
    }
}

/// Angle of the `i`-th golden-angle step, in radians, wrapped to `[0, TAU)`.
pub fn golden_angle_rad(i: u32) -> f64 {
    (f64::from(i) * GOLDEN_ANGLE_DEG).rem_euclid(360.0).to_radians()
}

/// `i`-th member of the additive golden-ratio sequence in `[0, 1)`.
pub fn golden_fract(i: u32, seed: f64) -> f64 {
    (seed + f64::from(i) * GOLDEN_RATIO_FRACT).rem_euclid(1.0)
}

/// Euclidean modulo: result is always in `[0, span)`; a non-positive `span` yields 0.
pub fn wrap(x: f64, span: f64) -> f64 {
    if span <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    x.rem_euclid(span)
}

/// SplitMix64 finalizer.
pub fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Stateless hash of `(seed, x)` to `[0, 1)` with 53 bits of precision.
pub fn hash01(seed: u64, x: u64) -> f64 {
    let v = mix64(seed ^ x.wrapping_mul(0xD6E8_FEB8_6659_FD93)) >> 11;
    (v as f64) * (1.0 / ((1u64 << 53) as f64))
}
