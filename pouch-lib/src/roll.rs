use rand::Rng;

/// Interface for rolling dices
pub trait Source {
    /// Throw one die, the outcome must lie in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}
