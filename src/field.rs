use crate::{
    particle::{Particle, SurfaceSize},
    random::RandomSource,
};

/// Number of particles on screen for the lifetime of the page.
pub const PARTICLE_COUNT: usize = 30;

/// Fixed pool of falling equations.
///
/// The particles are allocated once, in a fixed-size array, and recycled in
/// place. Nothing is ever pushed or removed, so the pool size is
/// [`PARTICLE_COUNT`] at all times.
#[derive(Debug)]
pub struct ParticleField<R> {
    /// The particles, in creation order.
    particles: [Particle; PARTICLE_COUNT],
    /// Current drawing surface dimensions.
    surface: SurfaceSize,
    /// Random source used for every recycle.
    rng: R,
}

impl<R: RandomSource> ParticleField<R> {
    /// Constructs a new [`ParticleField`] sized to `surface`.
    pub fn new(surface: SurfaceSize, mut rng: R) -> Self {
        let particles = std::array::from_fn(|_| Particle::spawn(surface, &mut rng));
        Self {
            particles,
            surface,
            rng,
        }
    }

    /// Returns the particles in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns the current surface dimensions.
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Updates the surface dimensions.
    ///
    /// Particles keep their positions; one that now lies past the bottom is
    /// recycled by its next [`ParticleField::update`].
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Advances every particle by one frame, calling `visit` with each
    /// particle right after it moved.
    ///
    /// Returns how many particles were recycled.
    pub fn update<F>(&mut self, mut visit: F) -> usize
    where
        F: FnMut(&Particle),
    {
        let mut recycled = 0;
        for particle in self.particles.iter_mut() {
            if particle.advance(self.surface, &mut self.rng) {
                recycled += 1;
            }
            visit(particle);
        }
        recycled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog,
        particle::{FALL_SPEED, GLYPH_SIZE, OPACITY, SPAWN_Y},
        random::rng,
    };
    use std::collections::HashSet;

    fn field(seed: u64, surface: SurfaceSize) -> ParticleField<fastrand::Rng> {
        ParticleField::new(surface, rng(Some(seed)))
    }

    #[test]
    fn test_pool_size_is_fixed() {
        let mut field = field(11, SurfaceSize::new(800, 300));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for _ in 0..5_000 {
            field.update(|_| {});
            assert_eq!(field.particles().len(), PARTICLE_COUNT);
        }
    }

    #[test]
    fn test_descent_is_monotonic_until_recycle() {
        let mut field = field(12, SurfaceSize::new(640, 120));
        let mut total_recycled = 0;
        for _ in 0..2_000 {
            let before: Vec<f64> = field.particles().iter().map(|p| p.y).collect();
            total_recycled += field.update(|_| {});
            for (particle, y) in field.particles().iter().zip(before) {
                assert!(particle.y >= y || particle.y == SPAWN_Y);
            }
        }
        // 2000 frames at >= 0.2 px/frame covers a 120 px surface several times
        assert!(total_recycled > 0);
    }

    #[test]
    fn test_recycled_particles_are_resampled_within_ranges() {
        let surface = SurfaceSize::new(500, 80);
        let mut field = field(13, surface);
        for _ in 0..3_000 {
            let before: Vec<f64> = field.particles().iter().map(|p| p.y).collect();
            field.update(|_| {});
            for (particle, y) in field.particles().iter().zip(before) {
                if particle.y < y {
                    assert_eq!(particle.y, SPAWN_Y);
                    assert!(particle.x >= 0.0 && particle.x < surface.width as f64);
                    assert!(FALL_SPEED.contains(&particle.fall_speed));
                    assert!(OPACITY.contains(&particle.opacity));
                    assert!(GLYPH_SIZE.contains(&particle.glyph_size));
                    assert!(catalog::contains(particle.label));
                }
            }
        }
    }

    #[test]
    fn test_particle_past_margin_is_recycled_to_spawn_row() {
        let surface = SurfaceSize::new(1024, 700);
        let mut field = field(14, surface);
        field.particles[0].y = surface.height as f64 + 60.0;
        field.particles[0].fall_speed = 0.3;

        assert!(field.update(|_| {}) >= 1);
        assert_eq!(field.particles()[0].y, -50.0);
    }

    #[test]
    fn test_growing_surface_keeps_particle_in_flight() {
        let mut field = field(15, SurfaceSize::new(1024, 1000));
        field.particles[0].y = 980.0;
        field.particles[0].fall_speed = 0.5;

        field.resize(SurfaceSize::new(1024, 2000));
        field.update(|_| {});

        assert_eq!(field.surface().height, 2000);
        assert_eq!(field.particles()[0].y, 980.5);
    }

    #[test]
    fn test_shrinking_surface_does_not_move_particles() {
        let mut field = field(16, SurfaceSize::new(1024, 2000));
        let before: Vec<(f64, f64)> = field.particles().iter().map(Particle::position).collect();
        field.resize(SurfaceSize::new(300, 100));
        let after: Vec<(f64, f64)> = field.particles().iter().map(Particle::position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_visit_follows_creation_order() {
        let mut field = field(17, SurfaceSize::new(1024, 768));
        let mut visited = Vec::new();
        field.update(|particle| visited.push(particle.clone()));
        assert_eq!(visited.as_slice(), field.particles());
    }

    #[test]
    fn test_initial_heights_are_distinct() {
        let field = field(18, SurfaceSize::new(1024, 1000));
        let distinct: HashSet<u64> = field.particles().iter().map(|p| p.y.to_bits()).collect();
        assert_eq!(distinct.len(), PARTICLE_COUNT);
        assert!(field.particles().iter().all(|p| p.y >= 0.0 && p.y < 1000.0));
    }

    #[test]
    fn test_initial_heights_are_uniformly_spread() {
        let height = 1000.0;
        let runs = 200;
        let mut sum = 0.0;
        for seed in 0..runs {
            let field = field(seed, SurfaceSize::new(1024, height as u32));
            sum += field.particles().iter().map(|p| p.y).sum::<f64>();
        }
        let mean = sum / (runs as f64 * PARTICLE_COUNT as f64);
        // standard error over 6000 samples of U(0, 1000) is ~3.7
        assert!((mean - height / 2.0).abs() < 25.0, "mean was {mean}");
    }
}
