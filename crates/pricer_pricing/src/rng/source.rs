//! Standard normal variate source.

/// A source of independent standard normal variates (mean 0, variance 1).
///
/// The Monte Carlo pricer draws all of its randomness through this trait.
/// Implementations must be deterministic for a fixed internal state so that
/// a seeded source reproduces the same simulation.
///
/// # Examples
///
/// A scripted source cycling through fixed values:
///
/// ```rust
/// use pricer_pricing::rng::NormalSource;
///
/// struct Cycle {
///     values: Vec<f64>,
///     index: usize,
/// }
///
/// impl NormalSource for Cycle {
///     fn next_normal(&mut self) -> f64 {
///         let value = self.values[self.index % self.values.len()];
///         self.index += 1;
///         value
///     }
/// }
///
/// let mut source = Cycle { values: vec![-1.0, 1.0], index: 0 };
/// let mut buffer = [0.0; 3];
/// source.fill_normal(&mut buffer);
/// assert_eq!(buffer, [-1.0, 1.0, -1.0]);
/// ```
pub trait NormalSource {
    /// Draws a single standard normal variate.
    fn next_normal(&mut self) -> f64;

    /// Fills the buffer with standard normal variates in draw order.
    ///
    /// Empty buffers are a no-op.
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }

    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        (**self).fill_normal(buffer)
    }
}
