//! A multi-threaded driver that samples a function into a [`SampleSet`].
//!
//! The driver builds each input by calling one [`Generator`] per argument,
//! calls the function under test, and inserts the pair. Calls are spread
//! round-robin across worker threads, each with its own random number
//! generator seeded from the config seed and the worker index. A fixed seed
//! therefore reproduces the same set of samples however the workers are
//! scheduled.

mod config;

pub use config::{Config, ConfigError};

use std::{
    panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use rand::{SeedableRng, rngs::StdRng};

use fnplot_core::Values;

use crate::{Error, Generator, SampleSet};

/// Records `config.samples()` calls of `function` into `set`.
///
/// # Errors
///
/// Returns the first insertion error. Workers stop drawing new samples once
/// any worker has failed.
///
/// # Panics
///
/// Resumes the panic of any worker whose generator or function panicked.
pub fn sample<F>(
    set: &SampleSet,
    generators: &[&dyn Generator],
    config: &Config,
    function: F,
) -> Result<(), Error>
where
    F: Fn(&Values) -> Values + Sync,
{
    let seed = config.seed().unwrap_or_else(rand::random);
    let workers = config.workers().min(config.samples()).max(1);
    log::debug!(
        "sampling {} calls on {workers} workers with seed {seed}",
        config.samples()
    );

    let failed = AtomicBool::new(false);
    let worker = Worker {
        set,
        generators,
        function: &function,
        failed: &failed,
        samples: config.samples(),
        stride: workers,
    };

    let result = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|index| {
                let worker = &worker;
                scope.spawn(move || worker.run(index, seed))
            })
            .collect();

        let mut result = Ok(());
        for handle in handles {
            match handle.join() {
                Ok(outcome) => result = result.and(outcome),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        result
    });

    log::debug!("sampling finished with {} samples in set", set.len());
    result
}

struct Worker<'a, F> {
    set: &'a SampleSet,
    generators: &'a [&'a dyn Generator],
    function: &'a F,
    failed: &'a AtomicBool,
    samples: usize,
    stride: usize,
}

impl<F> Worker<'_, F>
where
    F: Fn(&Values) -> Values + Sync,
{
    fn run(&self, index: usize, seed: u64) -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));

        for _ in (index..self.samples).step_by(self.stride) {
            if self.failed.load(Ordering::Relaxed) {
                break;
            }

            let input: Values = self
                .generators
                .iter()
                .map(|generator| generator.generate(&mut rng))
                .collect();
            let output = (self.function)(&input);

            if let Err(err) = self.set.insert(input, output) {
                self.failed.store(true, Ordering::Relaxed);
                return Err(err);
            }
        }
        Ok(())
    }
}
