use serde::{Deserialize, Serialize};

/// Safely convert a record count to f64 for percentage calculations
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Counts accumulated by one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Number of sample records read
    pub processed_count: u64,

    /// Number of sample records with at least one matching reference record
    pub matched_count: u64,
}

/// Precision of an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precision {
    /// The sample set had no records
    Empty,
    /// Percentage of sample records found in the reference, in `[0, 100]`
    Percent(f64),
}

impl EvaluationResult {
    #[must_use]
    pub fn new(processed_count: u64, matched_count: u64) -> Self {
        debug_assert!(matched_count <= processed_count);
        Self {
            processed_count,
            matched_count,
        }
    }

    /// Record one processed sample record
    pub fn record(&mut self, matched: bool) {
        self.processed_count += 1;
        if matched {
            self.matched_count += 1;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processed_count == 0
    }

    #[must_use]
    pub fn unmatched_count(&self) -> u64 {
        self.processed_count - self.matched_count
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        if self.is_empty() {
            Precision::Empty
        } else {
            Precision::Percent(
                100.0 * count_to_f64(self.matched_count) / count_to_f64(self.processed_count),
            )
        }
    }

    /// Precision as a percentage, `None` for an empty sample set
    #[must_use]
    pub fn precision_percent(&self) -> Option<f64> {
        match self.precision() {
            Precision::Empty => None,
            Precision::Percent(p) => Some(p),
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "NA"),
            Self::Percent(p) => write!(f, "{p:.2}%"),
        }
    }
}
