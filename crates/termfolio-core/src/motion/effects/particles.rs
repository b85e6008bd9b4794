//! Decorative particle field behind the hero section. Particles live
//! in unit space and drift slowly, wrapping at the edges; each one
//! twinkles on its own phase. The field is seeded, so a given seed
//! always produces the same sky.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Unit-space half-range of drift velocity, per second.
const DRIFT_MAX: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    drift_x: f64,
    drift_y: f64,
    phase: f64,
    twinkle: f64,
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    elapsed: Duration,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random::<f64>(),
                y: rng.random::<f64>(),
                drift_x: rng.random_range(-DRIFT_MAX..DRIFT_MAX),
                drift_y: rng.random_range(-DRIFT_MAX..DRIFT_MAX),
                phase: rng.random_range(0.0..std::f64::consts::TAU),
                twinkle: rng.random_range(0.5..2.0),
            })
            .collect();
        Self {
            particles,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        let dt_s = dt.as_secs_f64();
        self.elapsed += dt;
        for p in &mut self.particles {
            p.x = (p.x + p.drift_x * dt_s).rem_euclid(1.0);
            p.y = (p.y + p.drift_y * dt_s).rem_euclid(1.0);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Twinkle brightness of one particle in `[0, 1]`.
    pub fn intensity(&self, index: usize) -> f64 {
        let Some(p) = self.particles.get(index) else {
            return 0.0;
        };
        let t = self.elapsed.as_secs_f64();
        ((p.phase + t * p.twinkle).sin() + 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sky() {
        let mut a = ParticleField::new(32, 7);
        let mut b = ParticleField::new(32, 7);
        for _ in 0..10 {
            a.tick(Duration::from_millis(160));
            b.tick(Duration::from_millis(160));
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ParticleField::new(32, 1);
        let b = ParticleField::new(32, 2);
        assert_ne!(a.particles(), b.particles());
    }

    #[test]
    fn test_particles_stay_in_unit_space() {
        let mut field = ParticleField::new(64, 42);
        for _ in 0..600 {
            field.tick(Duration::from_millis(160));
        }
        // rem_euclid may round up to exactly 1.0 for tiny negatives.
        for p in field.particles() {
            assert!((0.0..=1.0).contains(&p.x), "x {}", p.x);
            assert!((0.0..=1.0).contains(&p.y), "y {}", p.y);
        }
    }

    #[test]
    fn test_intensity_in_range() {
        let mut field = ParticleField::new(16, 3);
        field.tick(Duration::from_millis(500));
        for i in 0..field.len() {
            let v = field.intensity(i);
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(field.intensity(99), 0.0);
    }
}
