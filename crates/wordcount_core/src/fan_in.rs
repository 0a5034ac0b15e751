use crate::ItemReport;

/// Collection state for one run: exactly `expected` reports, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanIn {
    expected: usize,
    reports: Vec<ItemReport>,
    failed: usize,
}

/// Outcome counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub expected: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl FanIn {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            reports: Vec::with_capacity(expected),
            failed: 0,
        }
    }

    /// Record one report. Returns `false` and drops the report once the run
    /// is already complete.
    pub fn accept(&mut self, report: ItemReport) -> bool {
        if self.is_complete() {
            return false;
        }
        if !report.is_success() {
            self.failed += 1;
        }
        self.reports.push(report);
        true
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn received(&self) -> usize {
        self.reports.len()
    }

    pub fn remaining(&self) -> usize {
        self.expected - self.reports.len()
    }

    pub fn is_complete(&self) -> bool {
        self.reports.len() >= self.expected
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            expected: self.expected,
            succeeded: self.reports.len() - self.failed,
            failed: self.failed,
        }
    }

    /// Reports ordered by identifier; equal identifiers keep arrival order.
    pub fn into_sorted(mut self) -> Vec<ItemReport> {
        self.reports.sort_by_key(|report| report.id);
        self.reports
    }
}
