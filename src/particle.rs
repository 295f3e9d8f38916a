use std::ops::Range;

use crate::{catalog::EQUATIONS, random::RandomSource};

/// Vertical position a particle restarts from when it is recycled.
///
/// Negative so the label slides in from above the canvas instead of popping
/// into view at the top edge.
pub const SPAWN_Y: f64 = -50.0;

/// Distance below the surface bottom a particle must pass before it is recycled.
pub const RECYCLE_MARGIN: f64 = 50.0;

/// Pixels per frame.
pub const FALL_SPEED: Range<f64> = 0.2..0.5;

/// Fill transparency.
pub const OPACITY: Range<f64> = 0.1..0.25;

/// Font size in pixels.
pub const GLYPH_SIZE: Range<f64> = 10.0..14.0;

/// Dimensions of the drawing surface, in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl SurfaceSize {
    /// Constructs a new [`SurfaceSize`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A falling equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) label: &'static str,
    pub(crate) fall_speed: f64,
    pub(crate) opacity: f64,
    pub(crate) glyph_size: f64,
}

impl Particle {
    /// Spawns a particle already in flight somewhere over the surface.
    ///
    /// All attributes are sampled as on recycle, then the vertical position is
    /// spread over `[0, height)` so the first frame is not a single row of
    /// labels at the top edge.
    pub fn spawn<R: RandomSource>(surface: SurfaceSize, rng: &mut R) -> Self {
        let mut particle = Self {
            x: 0.0,
            y: SPAWN_Y,
            label: EQUATIONS[0],
            fall_speed: FALL_SPEED.start,
            opacity: OPACITY.start,
            glyph_size: GLYPH_SIZE.start,
        };
        particle.recycle(surface, rng);
        particle.y = rng.in_range(0.0..surface.height as f64);
        particle
    }

    /// Re-samples every attribute and moves the particle back above the surface.
    pub fn recycle<R: RandomSource>(&mut self, surface: SurfaceSize, rng: &mut R) {
        self.x = rng.in_range(0.0..surface.width as f64);
        self.y = SPAWN_Y;
        self.label = *rng.pick(&EQUATIONS);
        self.fall_speed = rng.in_range(FALL_SPEED);
        self.opacity = rng.in_range(OPACITY);
        self.glyph_size = rng.in_range(GLYPH_SIZE);
    }

    /// Moves the particle down by one frame, recycling it once it has left
    /// the surface.
    ///
    /// Returns `true` if the particle was recycled.
    pub fn advance<R: RandomSource>(&mut self, surface: SurfaceSize, rng: &mut R) -> bool {
        self.y += self.fall_speed;
        if self.y > surface.height as f64 + RECYCLE_MARGIN {
            self.recycle(surface, rng);
            return true;
        }
        false
    }

    /// Returns the position as `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the equation drawn at the particle's position.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the distance travelled per frame.
    pub fn fall_speed(&self) -> f64 {
        self.fall_speed
    }

    /// Returns the fill transparency.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns the font size in pixels.
    pub fn glyph_size(&self) -> f64 {
        self.glyph_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, random::rng};

    const SURFACE: SurfaceSize = SurfaceSize::new(1280, 1000);

    fn assert_freshly_recycled(particle: &Particle, surface: SurfaceSize) {
        assert_eq!(particle.y, SPAWN_Y);
        assert!(particle.x >= 0.0 && particle.x < surface.width as f64);
        assert!(FALL_SPEED.contains(&particle.fall_speed));
        assert!(OPACITY.contains(&particle.opacity));
        assert!(GLYPH_SIZE.contains(&particle.glyph_size));
        assert!(catalog::contains(particle.label));
    }

    #[test]
    fn test_recycle_samples_within_ranges() {
        let mut rng = rng(Some(1));
        let mut particle = Particle::spawn(SURFACE, &mut rng);
        for _ in 0..500 {
            particle.recycle(SURFACE, &mut rng);
            assert_freshly_recycled(&particle, SURFACE);
        }
    }

    #[test]
    fn test_spawn_is_in_flight() {
        let mut rng = rng(Some(2));
        for _ in 0..200 {
            let particle = Particle::spawn(SURFACE, &mut rng);
            assert!(particle.y >= 0.0 && particle.y < SURFACE.height as f64);
        }
    }

    #[test]
    fn test_advance_moves_down_by_fall_speed() {
        let mut rng = rng(Some(3));
        let mut particle = Particle::spawn(SURFACE, &mut rng);
        particle.y = 100.0;
        particle.fall_speed = 0.25;
        let before = particle.clone();

        assert!(!particle.advance(SURFACE, &mut rng));
        assert_eq!(particle.y, 100.25);
        assert_eq!(particle.x, before.x);
        assert_eq!(particle.opacity, before.opacity);
        assert_eq!(particle.glyph_size, before.glyph_size);
        assert_eq!(particle.label, before.label);
    }

    #[test]
    fn test_advance_past_margin_recycles_to_spawn_row() {
        let mut rng = rng(Some(4));
        let mut particle = Particle::spawn(SURFACE, &mut rng);
        particle.y = SURFACE.height as f64 + 60.0;
        particle.fall_speed = 0.3;

        assert!(particle.advance(SURFACE, &mut rng));
        assert_eq!(particle.y, -50.0);
        assert_freshly_recycled(&particle, SURFACE);
    }

    #[test]
    fn test_advance_at_margin_does_not_recycle() {
        let mut rng = rng(Some(5));
        let mut particle = Particle::spawn(SURFACE, &mut rng);
        particle.y = SURFACE.height as f64 + RECYCLE_MARGIN - 0.5;
        particle.fall_speed = 0.5;

        assert!(!particle.advance(SURFACE, &mut rng));
        assert_eq!(particle.y, SURFACE.height as f64 + RECYCLE_MARGIN);
    }
}
