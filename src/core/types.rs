use serde::{Deserialize, Serialize};

/// How the contig of two records is compared by the match predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ContigMatching {
    /// Compare contig dictionary indexes (position of the `##contig` line in each file)
    #[default]
    Index,
    /// Compare contig names as written in each file
    Name,
}

impl std::fmt::Display for ContigMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// Per-comparison tracing of the evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonTrace {
    /// No per-comparison tracing
    #[default]
    Off,
    /// Emit every candidate comparison and every match
    Verbose,
}

impl ComparisonTrace {
    #[must_use]
    pub fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl From<bool> for ComparisonTrace {
    fn from(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Off
        }
    }
}

/// How the reference collection is scanned for each sample record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Index the reference in memory, falling back to streaming above the record limit
    #[default]
    Auto,
    /// Always index the reference in memory
    Indexed,
    /// Re-open and re-scan the reference for every sample record
    Streaming,
}

impl std::fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Indexed => write!(f, "indexed"),
            Self::Streaming => write!(f, "streaming"),
        }
    }
}
