use memory_stats::memory_stats;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource budgets for a single search call. All limits are optional; the
/// default is an unbounded search, matching the base contract of the engines.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchLimits {
    /// Wall-clock budget in seconds.
    pub time_limit_secs: Option<f64>,
    /// Peak physical memory budget in MiB.
    pub memory_limit_mb: Option<usize>,
    /// Budget on the number of nodes expanded.
    pub expansion_limit: Option<usize>,
}

impl SearchLimits {
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs_f64)
    }
}

/// Why a search was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    TimeLimit,
    MemoryLimit,
    ExpansionLimit,
}

/// Tracks the budgets of a running search. Engines call
/// [`TerminationCondition::should_terminate`] at the top of every loop
/// iteration; that call also drives the periodic resource logging.
#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit_secs = limits.time_limit_secs,
            memory_limit_mb = limits.memory_limit_mb,
            expansion_limit = limits.expansion_limit,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// `expanded` is the number of nodes the engine has expanded so far.
    /// Memory is judged against the peak recorded at the logging cadence, not
    /// sampled on every call.
    pub fn should_terminate(&mut self, expanded: usize) -> Option<Termination> {
        self.log_if_needed();
        if let Some(time_limit) = self.limits.time_limit() {
            if self.start_time.elapsed() > time_limit {
                return Some(Termination::TimeLimit);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(Termination::MemoryLimit);
                }
            }
        }
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded >= expansion_limit {
                return Some(Termination::ExpansionLimit);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_by_default() {
        let mut condition = TerminationCondition::new(SearchLimits::default());
        assert_eq!(condition.should_terminate(1_000_000), None);
    }

    #[test]
    fn expansion_limit_trips() {
        let limits = SearchLimits {
            expansion_limit: Some(100),
            ..SearchLimits::default()
        };
        let mut condition = TerminationCondition::new(limits);
        assert_eq!(condition.should_terminate(99), None);
        assert_eq!(condition.should_terminate(100), Some(Termination::ExpansionLimit));
    }

    #[test]
    fn zero_time_limit_trips_immediately() {
        let limits = SearchLimits {
            time_limit_secs: Some(0.0),
            ..SearchLimits::default()
        };
        let mut condition = TerminationCondition::new(limits);
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(condition.should_terminate(0), Some(Termination::TimeLimit));
    }

    #[test]
    fn limits_parse_from_toml() {
        let limits: SearchLimits =
            toml::from_str("time_limit_secs = 1.5\nexpansion_limit = 10").unwrap();
        assert_eq!(limits.time_limit(), Some(Duration::from_secs_f64(1.5)));
        assert_eq!(limits.memory_limit_mb, None);
        assert_eq!(limits.expansion_limit, Some(10));
    }
}
