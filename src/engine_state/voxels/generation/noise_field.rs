//! Seeded 2D height noise.

use std::fmt;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// A deterministic, smooth-looking scalar field over integer `(x, z)`.
///
/// Backed by fractal Perlin noise. The field holds no state besides its seed and
/// shape parameters, so the same inputs always sample the same value.
pub struct NoiseField {
    seed: u32,
    fbm: Fbm<Perlin>,
}

impl NoiseField {
    /// Creates a field for `seed`.
    ///
    /// # Arguments
    /// * `seed` - Noise seed
    /// * `frequency` - Scale applied to block coordinates before sampling
    /// * `octaves` - Number of Perlin layers summed together
    /// * `persistence` - Amplitude falloff between successive octaves
    pub fn new(seed: u32, frequency: f64, octaves: usize, persistence: f64) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_frequency(frequency)
            .set_octaves(octaves.max(1))
            .set_persistence(persistence);

        NoiseField { seed, fbm }
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples the field at `(x, z)`. The result is always within `[-1, 1]`.
    pub fn height(&self, x: i32, z: i32) -> f64 {
        let sample = self.fbm.get([x as f64, z as f64]);
        if sample.is_finite() {
            sample.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u32) -> NoiseField {
        NoiseField::new(seed, 0.05, 4, 0.5)
    }

    #[test]
    fn same_seed_samples_identically() {
        let a = field(123489);
        let b = field(123489);
        for x in -8..8 {
            for z in -8..8 {
                assert_eq!(a.height(x, z), b.height(x, z));
                assert_eq!(a.height(x, z), a.height(x, z));
            }
        }
    }

    #[test]
    fn samples_stay_bounded() {
        let noise = field(7);
        for x in 0..64 {
            for z in 0..64 {
                assert!((-1.0..=1.0).contains(&noise.height(x, z)));
            }
        }
    }

    #[test]
    fn different_seeds_give_different_fields() {
        let a = field(1);
        let b = field(2);
        let differs = (0..32).any(|x| (0..32).any(|z| a.height(x, z) != b.height(x, z)));
        assert!(differs);
    }
}
