//! Snow depth series generators
//!
//! Deterministic (fixed-seed LCG) so failures reproduce exactly.

use super::hour_stamp;
use depthguard_core::Sample;

/// Glitch injected into a generated series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glitch {
    /// Single reading far above the pack
    Spike { hour: usize, height: f64 },
    /// Sensor reports nothing for a stretch
    Dropout { from: usize, to: usize },
}

/// Generator for hourly snow depth
pub struct DepthGenerator {
    seed: u32,
}

impl DepthGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Settling snowpack: slow decline with small sensor noise
    pub fn settling_pack(&mut self, hours: usize, start_depth: f64, glitches: &[Glitch]) -> Vec<Sample> {
        (0..hours)
            .map(|hour| {
                let depth = start_depth - 0.02 * hour as f64 + self.noise(0.1);
                let value = glitches.iter().fold(Some(depth), |value, glitch| match *glitch {
                    Glitch::Spike { hour: at, height } if at == hour => Some(depth + height),
                    Glitch::Dropout { from, to } if (from..to).contains(&hour) => None,
                    _ => value,
                });
                Sample::new(hour_stamp(hour as i64), value).with_source("HMDW1")
            })
            .collect()
    }

    /// Uniform noise in `[-amplitude, amplitude]`
    fn noise(&mut self, amplitude: f64) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let unit = (self.seed >> 16) as f64 / u16::MAX as f64;
        (unit * 2.0 - 1.0) * amplitude
    }
}
