use std::time::{Duration, Instant};

/// Wall-clock timer around a named operation.
///
/// `stop` emits a `tracing` event on the `benchmark` target, so any
/// subscriber can collect the timings.
#[derive(Debug)]
pub struct Timer {
    operation: &'static str,
    started: Instant,
}

impl Timer {
    pub fn start(operation: &'static str) -> Self {
        Self { operation, started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration { self.started.elapsed() }

    pub fn stop(self) -> Duration {
        let elapsed = self.started.elapsed();
        tracing::info!(target: "benchmark", operation = self.operation, took_s = elapsed.as_secs_f64(), "operation finished");
        elapsed
    }
}
