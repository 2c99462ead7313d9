//! Operation Metrics Module
//!
//! Counters for the mutating operations of every container in the crate:
//! how many insertions and removals succeeded or failed, how often backing
//! storage was grown or shrunk, and how large the container got.
//!
//! Recording is a handful of integer increments behind `&mut self`, so it
//! needs no atomics and works without `std`.

/// Snapshot of the metrics collected by a container
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationMetrics {
    /// Total number of mutating operations attempted
    pub total_operations: u64,
    /// Number of operations that completed
    pub successful_operations: u64,
    /// Number of operations rejected with an error
    pub failed_operations: u64,
    /// Number of times backing storage was enlarged
    pub grow_events: u64,
    /// Number of times backing storage was reduced
    pub shrink_events: u64,
    /// Live elements at snapshot time
    pub current_len: usize,
    /// Largest live element count observed
    pub peak_len: usize,
    /// Storage slots currently allocated
    pub storage_slots: usize,
}

impl OperationMetrics {
    /// Calculate success rate as percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.successful_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Calculate failure rate as percentage
    pub fn failure_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.failed_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Total number of storage reallocations
    pub fn resize_events(&self) -> u64 {
        self.grow_events + self.shrink_events
    }
}

/// Internal metrics bookkeeping shared by the containers
#[derive(Debug, Clone)]
pub(crate) struct MetricsRecorder {
    enabled: bool,
    total_operations: u64,
    successful_operations: u64,
    failed_operations: u64,
    grow_events: u64,
    shrink_events: u64,
    peak_len: usize,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self {
            enabled: true,
            total_operations: 0,
            successful_operations: 0,
            failed_operations: 0,
            grow_events: 0,
            shrink_events: 0,
            peak_len: 0,
        }
    }
}

impl MetricsRecorder {
    /// Record a completed operation, `len` being the length afterwards
    #[inline]
    pub(crate) fn record_success(&mut self, len: usize) {
        if !self.enabled {
            return;
        }
        self.total_operations += 1;
        self.successful_operations += 1;
        if len > self.peak_len {
            self.peak_len = len;
        }
    }

    /// Record a rejected operation
    #[inline]
    pub(crate) fn record_failure(&mut self) {
        if !self.enabled {
            return;
        }
        self.total_operations += 1;
        self.failed_operations += 1;
    }

    #[inline]
    pub(crate) fn record_grow(&mut self) {
        if self.enabled {
            self.grow_events += 1;
        }
    }

    #[inline]
    pub(crate) fn record_shrink(&mut self) {
        if self.enabled {
            self.shrink_events += 1;
        }
    }

    pub(crate) fn snapshot(&self, current_len: usize, storage_slots: usize) -> OperationMetrics {
        OperationMetrics {
            total_operations: self.total_operations,
            successful_operations: self.successful_operations,
            failed_operations: self.failed_operations,
            grow_events: self.grow_events,
            shrink_events: self.shrink_events,
            current_len,
            peak_len: self.peak_len,
            storage_slots,
        }
    }

    /// Reset all counters; the peak restarts from the current length
    pub(crate) fn reset(&mut self, current_len: usize) {
        *self = Self {
            enabled: self.enabled,
            peak_len: current_len,
            ..Self::default()
        };
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Trait for containers that collect operation metrics
pub trait MetricsCollector {
    /// Get current operation metrics
    fn metrics(&self) -> OperationMetrics;

    /// Reset all metrics
    fn reset_metrics(&mut self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&mut self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
