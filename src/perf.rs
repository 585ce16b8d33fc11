//! Gesture timing instrumentation.
//!
//! Pointer moves arrive at display rate while a gesture runs, so each move
//! handler has to finish well inside one frame. With the `profiling` feature
//! the handlers are wrapped in [`ScopedTimer`]s that report through
//! `tracing`; without it `profile_scope!` compiles to nothing.
//!
//! ```ignore
//! fn on_pointer_move(&mut self) {
//!     profile_scope!("drag_move");
//!     // ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{trace, warn};

/// Frame budget at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Samples kept per operation for rolling statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Time the rest of the enclosing scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Logs the elapsed time of a scope on drop; warns above the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer against the frame budget, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "slow gesture handler"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = ms, "timed");
        }
    }
}

/// Rolling timing statistics for one operation.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Per-operation statistics collected by a host over a session.
#[derive(Debug, Default)]
pub struct GestureStats {
    operations: HashMap<&'static str, OperationStats>,
}

impl GestureStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operations.entry(name).or_default().record(elapsed_ms);
    }

    /// Run `f`, recording how long it took under `name`.
    pub fn measure<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(name, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn get(&self, name: &str) -> Option<&OperationStats> {
        self.operations.get(name)
    }

    /// Warn about operations whose average exceeds the frame budget.
    pub fn log_slow_operations(&self) {
        for (name, stats) in &self.operations {
            if stats.average() > TARGET_FRAME_MS {
                warn!(
                    operation = *name,
                    avg_ms = format!("{:.2}", stats.average()),
                    max_ms = format!("{:.2}", stats.max()),
                    count = stats.count(),
                    "gesture operation over frame budget"
                );
            }
        }
    }
}
