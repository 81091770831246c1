//! Feedback counter for the "give feedback" widget.
//!
//! Holds the good/neutral/bad tallies and derives the summary statistics shown
//! under them. Nothing here touches the store or the HTTP layer.

use std::fmt;

use serde::Serialize;

/// Tallies of the three feedback buttons. Values only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackCounters {
    pub good: u64,
    pub neutral: u64,
    pub bad: u64,
}

impl FeedbackCounters {
    /// Fresh counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_good(&mut self) {
        self.good = self.good.saturating_add(1);
    }

    pub fn record_neutral(&mut self) {
        self.neutral = self.neutral.saturating_add(1);
    }

    pub fn record_bad(&mut self) {
        self.bad = self.bad.saturating_add(1);
    }

    pub fn statistics(&self) -> Statistics {
        compute_statistics(self.good, self.neutral, self.bad)
    }
}

/// Derived view of a set of counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Statistics {
    /// No button has been pressed yet
    NoFeedback,
    #[serde(rename_all = "camelCase")]
    Summary {
        good: u64,
        neutral: u64,
        bad: u64,
        total: u64,
        /// good counts +1, bad counts -1, neutral counts 0
        average: f64,
        positive_percent: f64,
    },
}

impl Statistics {
    pub fn is_empty(&self) -> bool {
        matches!(self, Statistics::NoFeedback)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistics::NoFeedback => write!(f, "No feedback given"),
            Statistics::Summary {
                good,
                neutral,
                bad,
                total,
                average,
                positive_percent,
            } => write!(
                f,
                "good {good}, neutral {neutral}, bad {bad}, all {total}, \
                 average {average}, positive {positive_percent}%"
            ),
        }
    }
}

/// Compute the statistics for the given tallies.
pub fn compute_statistics(good: u64, neutral: u64, bad: u64) -> Statistics {
    let total = good.saturating_add(neutral).saturating_add(bad);
    if total == 0 {
        return Statistics::NoFeedback;
    }

    let total_f = total as f64;
    Statistics::Summary {
        good,
        neutral,
        bad,
        total,
        average: (good as f64 - bad as f64) / total_f,
        positive_percent: good as f64 / total_f * 100.0,
    }
}
