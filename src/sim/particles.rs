//! Cosmetic particle bursts
//!
//! Particles never affect gameplay. The pool is unordered and relies on
//! short lifetimes (under a second) to stay small.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::pickup::PowerUpKind;

/// Color hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParticleTint {
    Trail,
    Coin,
    Life,
    Shield,
    Speed,
    Goal,
    Hit,
}

impl From<PowerUpKind> for ParticleTint {
    fn from(kind: PowerUpKind) -> Self {
        match kind {
            PowerUpKind::Life => ParticleTint::Life,
            PowerUpKind::Shield => ParticleTint::Shield,
            PowerUpKind::Speed => ParticleTint::Speed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    pub tint: ParticleTint,
    pub size: f32,
}

/// Longest lifetime a particle can be emitted with
pub const MAX_PARTICLE_LIFE: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    enabled: bool,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ParticlePool {
    /// A disabled pool ignores every emission
    pub fn new(enabled: bool) -> Self {
        Self {
            particles: Vec::new(),
            enabled,
        }
    }

    /// Emit `count` particles from `origin` in uniformly random directions
    ///
    /// `size` is an inclusive (min, max) range sampled in tenths.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        count: usize,
        tint: ParticleTint,
        speed: f32,
        size: (f32, f32),
    ) {
        if !self.enabled {
            return;
        }
        let size_min = (size.0 * 10.0) as i32;
        let size_max = (size.1 * 10.0) as i32;
        self.particles.reserve(count);
        for _ in 0..count {
            let angle = (rng.random_range(0..=360) as f32).to_radians();
            let vel = Vec2::new(angle.sin(), angle.cos()) * speed;
            let life = rng.random_range(3..=8) as f32 / 10.0;
            let size = rng.random_range(size_min..=size_max) as f32 / 10.0;
            self.particles.push(Particle {
                pos: origin,
                vel,
                life,
                tint,
                size,
            });
        }
    }

    /// Integrate and drop expired particles in the same step
    pub fn advance(&mut self, dt: f32) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel * dt;
            p.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_emit_ranges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = ParticlePool::default();
        let origin = Vec2::new(50.0, 60.0);
        pool.emit(&mut rng, origin, 40, ParticleTint::Coin, 80.0, (2.0, 4.0));

        assert_eq!(pool.len(), 40);
        for p in pool.as_slice() {
            assert_eq!(p.pos, origin);
            assert!((p.vel.length() - 80.0).abs() < 1e-3);
            assert!((0.3..=MAX_PARTICLE_LIFE).contains(&p.life));
            assert!((2.0..=4.0).contains(&p.size));
            assert_eq!(p.tint, ParticleTint::Coin);
        }
    }

    #[test]
    fn test_expired_particles_removed_same_step() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut pool = ParticlePool::default();
        pool.emit(&mut rng, Vec2::ZERO, 10, ParticleTint::Hit, 120.0, (4.0, 8.0));
        pool.advance(MAX_PARTICLE_LIFE);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_particles_move() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = ParticlePool::default();
        pool.emit(&mut rng, Vec2::ZERO, 1, ParticleTint::Trail, 50.0, (1.0, 3.0));
        let vel = pool.as_slice()[0].vel;
        pool.advance(0.1);
        let p = &pool.as_slice()[0];
        assert!((p.pos - vel * 0.1).length() < 1e-4);
    }

    #[test]
    fn test_disabled_pool_ignores_emission() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pool = ParticlePool::new(false);
        pool.emit(&mut rng, Vec2::ZERO, 25, ParticleTint::Goal, 200.0, (5.0, 10.0));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_power_up_tints() {
        assert_eq!(ParticleTint::from(PowerUpKind::Life), ParticleTint::Life);
        assert_eq!(ParticleTint::from(PowerUpKind::Shield), ParticleTint::Shield);
        assert_eq!(ParticleTint::from(PowerUpKind::Speed), ParticleTint::Speed);
    }
}
