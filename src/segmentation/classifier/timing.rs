use std::time::{Duration, Instant};

use tracing::debug;

/// Duration of one named phase.
#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Per-phase durations of one classification, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` and records how long it took under `name`.
    pub fn measure<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let result = f();
        timer.record(self);
        result
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Summed duration of every step called `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.duration)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            debug!(
                "Timecost to {}: {:.3}ms",
                step.name,
                step.duration.as_secs_f64() * 1000.0
            );
        }
        debug!("Timecost total: {:.3}ms", total.as_secs_f64() * 1000.0);
    }
}

/// Stopwatch for a phase that does not fit in a closure.
pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn record(self, timings: &mut PipelineTimings) {
        timings.add_step(self.name, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_order_and_sum() {
        let mut timings = PipelineTimings::new();
        timings.add_step("encode", Duration::from_millis(2));
        timings.add_step("run", Duration::from_millis(5));
        timings.add_step("encode", Duration::from_millis(1));

        let names: Vec<&str> = timings.steps().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["encode", "run", "encode"]);
        assert_eq!(timings.get_step("encode"), Some(Duration::from_millis(3)));
        assert_eq!(timings.get_step("decode"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(8));
    }

    #[test]
    fn test_measure_returns_closure_result() {
        let mut timings = PipelineTimings::new();

        let value = timings.measure("run", || 42);

        assert_eq!(value, 42);
        assert_eq!(timings.steps().len(), 1);
        assert_eq!(timings.steps()[0].name, "run");
    }

    #[test]
    fn test_timer_records_named_step() {
        let mut timings = PipelineTimings::new();
        let timer = Timer::start("setup");
        let elapsed = timer.elapsed();

        timer.record(&mut timings);

        assert_eq!(timings.steps()[0].name, "setup");
        assert!(timings.total_duration() >= elapsed);
    }
}
