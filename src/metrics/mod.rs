//! Basic session metrics.
//!
//! Counts dispatched commands, handler failures and unknown commands. The
//! summary is logged when a session ends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for a command session.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    /// Total number of commands that reached a handler
    commands_total: Arc<AtomicU64>,

    /// Number of handler calls that returned an error
    command_errors_total: Arc<AtomicU64>,

    /// Number of lines whose command token matched no handler
    invalid_commands_total: Arc<AtomicU64>,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            command_errors_total: Arc::new(AtomicU64::new(0)),
            invalid_commands_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a command routed to a handler.
    pub fn record_command(&self) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a handler that returned an error.
    pub fn record_command_error(&self) {
        self.command_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unrecognized command token.
    pub fn record_invalid_command(&self) {
        self.invalid_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total.load(Ordering::Relaxed)
    }

    pub fn invalid_commands_total(&self) -> u64 {
        self.invalid_commands_total.load(Ordering::Relaxed)
    }

    /// Get the error rate as a percentage of handled commands.
    pub fn error_rate(&self) -> f64 {
        let total = self.commands_total();
        if total == 0 {
            0.0
        } else {
            (self.command_errors_total() as f64 / total as f64) * 100.0
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            command_errors_total: self.command_errors_total(),
            invalid_commands_total: self.invalid_commands_total(),
            error_rate: self.error_rate(),
        }
    }

    /// Log the current metrics summary at info level.
    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            commands = summary.commands_total,
            errors = summary.command_errors_total,
            invalid = summary.invalid_commands_total,
            error_rate = summary.error_rate,
            "Session metrics"
        );
    }
}

/// Snapshot of session metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_errors_total: u64,
    pub invalid_commands_total: u64,
    pub error_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counting() {
        let metrics = SessionMetrics::new();
        metrics.record_command();
        metrics.record_command();
        metrics.record_command_error();
        metrics.record_invalid_command();

        let summary = metrics.summary();
        assert_eq!(summary.commands_total, 2);
        assert_eq!(summary.command_errors_total, 1);
        assert_eq!(summary.invalid_commands_total, 1);
        assert_eq!(summary.error_rate, 50.0);
    }

    #[test]
    fn test_error_rate_without_commands() {
        assert_eq!(SessionMetrics::new().error_rate(), 0.0);
    }

    #[test]
    fn test_metrics_clone_shares_counters() {
        let metrics = SessionMetrics::new();
        let clone = metrics.clone();
        clone.record_command();
        assert_eq!(metrics.commands_total(), 1);
    }
}
