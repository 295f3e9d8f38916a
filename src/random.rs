use std::ops::Range;

/// Source of uniform random numbers used to sample particles.
///
/// The renderer never calls an ambient random function directly; it goes
/// through this trait so tests can drive it with a fixed seed.
pub trait RandomSource {
    /// Returns a sample from `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a sample from `range`, start inclusive, end exclusive.
    fn in_range(&mut self, range: Range<f64>) -> f64 {
        range.start + self.next_f64() * (range.end - range.start)
    }

    /// Picks one element of `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let index = (self.next_f64() * items.len() as f64) as usize;
        &items[index.min(items.len() - 1)]
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Creates the random source for a backdrop.
///
/// A `seed` makes every frame reproducible; without one the generator is
/// seeded from the host's entropy source.
pub fn rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}
