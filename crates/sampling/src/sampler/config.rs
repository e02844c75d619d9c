use thiserror::Error;

/// Configuration for the sampling driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    samples: usize,
    workers: usize,
    seed: Option<u64>,
}

/// Errors that can occur when validating a sampling config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("workers must be at least 1")]
    ZeroWorkers,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 10).unwrap()
    }
}

impl Config {
    /// Creates a config that records `samples` calls across `workers` threads.
    ///
    /// The random seed is drawn from entropy unless set with
    /// [`with_seed`](Config::with_seed).
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero.
    pub fn new(samples: usize, workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        Ok(Self {
            samples,
            workers,
            seed: None,
        })
    }

    /// Fixes the random seed, making the sampled inputs reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of calls to record.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the fixed random seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_ten_workers() {
        let config = Config::default();
        assert_eq!(config.samples(), 100);
        assert_eq!(config.workers(), 10);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn rejects_zero_workers() {
        assert_eq!(Config::new(10, 0), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn with_seed_sets_seed() {
        let config = Config::new(5, 2).unwrap().with_seed(99);
        assert_eq!(config.seed(), Some(99));
    }
}
