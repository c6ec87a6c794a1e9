//! Per-move timing for the drag hot path.
//!
//! Move events arrive at pointer rate and every one runs the full
//! lock/snap/scale pipeline plus host callbacks, so the controller keeps a
//! rolling window of move durations and warns when a single move blows the
//! configured budget.
//!
//! ## Usage
//!
//! Enable scope timers with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! guidedrag = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn snap_pass() {
//!     profile_scope!("snap_pass");
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

use crate::constants::{DEFAULT_MOVE_BUDGET_MS, MOVE_SAMPLE_COUNT};

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
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

pub use crate::profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when over threshold.
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

    /// Timer with a 1ms threshold, used by `profile_scope!`
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.start.elapsed())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

#[inline]
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

// ============================================================================
// Move Statistics
// ============================================================================

/// Rolling statistics over recent move durations.
#[derive(Debug, Clone)]
pub struct MoveStats {
    samples: VecDeque<f64>,
    budget_ms: f64,
    count: u64,
    slow_count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for MoveStats {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_BUDGET_MS)
    }
}

impl MoveStats {
    pub fn new(budget_ms: f64) -> Self {
        Self {
            samples: VecDeque::with_capacity(MOVE_SAMPLE_COUNT),
            budget_ms,
            count: 0,
            slow_count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }

    pub fn set_budget(&mut self, budget_ms: f64) {
        self.budget_ms = budget_ms;
    }

    pub fn budget_ms(&self) -> f64 {
        self.budget_ms
    }

    /// Record one move. Returns true (and warns) when it exceeded the budget.
    pub fn record(&mut self, elapsed: Duration) -> bool {
        self.record_ms(duration_ms(elapsed))
    }

    pub fn record_ms(&mut self, ms: f64) -> bool {
        if self.samples.len() >= MOVE_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);

        let slow = ms > self.budget_ms;
        if slow {
            self.slow_count += 1;
            warn!(
                move_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", self.budget_ms),
                "Slow drag move"
            );
        }
        slow
    }

    /// Average over the rolling window
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the rolling window
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// Maximum since creation or the last reset
    pub fn max(&self) -> f64 {
        self.max_ms
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn slow_count(&self) -> u64 {
        self.slow_count
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.budget_ms);
    }
}
