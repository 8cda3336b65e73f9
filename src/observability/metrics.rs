//! Submission and listing metrics.
//!
//! Counters are shared through `Arc` so every clone of the tracker reports
//! into the same totals.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for the contact book.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    contacts_created_total: Arc<AtomicU64>,
    submissions_rejected_total: Arc<AtomicU64>,
    validation_errors_total: Arc<AtomicU64>,
    listings_served_total: Arc<AtomicU64>,
}

/// Point-in-time snapshot of all counters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSummary {
    pub contacts_created_total: u64,
    pub submissions_rejected_total: u64,
    pub validation_errors_total: u64,
    pub listings_served_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_created_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            validation_errors_total: Arc::new(AtomicU64::new(0)),
            listings_served_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track an accepted submission.
    pub fn track_contact_created(&self) {
        self.contacts_created_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Contact created");
    }

    /// Track a rejected submission and how many messages it produced.
    pub fn track_submission_rejected(&self, error_count: usize) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
        self.validation_errors_total
            .fetch_add(error_count as u64, Ordering::Relaxed);
        tracing::trace!(error_count = error_count, "Submission rejected");
    }

    /// Track a served contact listing.
    pub fn track_listing_served(&self, contact_count: usize) {
        self.listings_served_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(contact_count = contact_count, "Listing served");
    }

    /// Get the total number of contacts created.
    pub fn contacts_created_total(&self) -> u64 {
        self.contacts_created_total.load(Ordering::Relaxed)
    }

    /// Get the total number of rejected submissions.
    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    /// Get the total number of validation messages reported.
    pub fn validation_errors_total(&self) -> u64 {
        self.validation_errors_total.load(Ordering::Relaxed)
    }

    /// Get the total number of listings served.
    pub fn listings_served_total(&self) -> u64 {
        self.listings_served_total.load(Ordering::Relaxed)
    }

    /// Snapshot all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_created_total: self.contacts_created_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            validation_errors_total: self.validation_errors_total(),
            listings_served_total: self.listings_served_total(),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer with a specific status and return the elapsed time
    /// in microseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::debug!(
            operation = self.operation,
            duration_us = duration_us,
            success = success,
            "Operation completed"
        );

        duration_us
    }
}
