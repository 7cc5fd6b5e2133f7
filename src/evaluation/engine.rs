use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::core::types::{ComparisonTrace, ContigMatching, ScanStrategy};
use crate::core::variant::{VariantKey, VariantRecord};
use crate::evaluation::predicate::matches;
use crate::evaluation::result::EvaluationResult;
use crate::parsing::source::{SourceError, VariantSource};
use crate::parsing::vcf::VcfSource;

/// Default number of reference records the `auto` strategy holds in memory
pub const DEFAULT_MAX_INDEXED_RECORDS: usize = 10_000_000;

/// Configuration for the precision evaluator
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// How the reference is scanned for each sample record
    pub strategy: ScanStrategy,
    /// How contigs are compared
    pub contig_matching: ContigMatching,
    /// Per-comparison tracing
    pub trace: ComparisonTrace,
    /// Reference size above which `auto` falls back to streaming
    pub max_indexed_records: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::default(),
            contig_matching: ContigMatching::default(),
            trace: ComparisonTrace::default(),
            max_indexed_records: DEFAULT_MAX_INDEXED_RECORDS,
        }
    }
}

/// Reference records keyed for exact lookup.
///
/// A read error part way through the reference keeps the keys read before it. The
/// error only surfaces when a lookup misses, which is the one case where a streaming
/// scan would have reached the unreadable record.
#[derive(Debug, Default)]
struct ReferenceIndex {
    keys: HashSet<VariantKey>,
    error: Option<SourceError>,
}

/// Computes how many sample records are present in a reference collection
#[derive(Debug, Clone, Default)]
pub struct PrecisionEvaluator {
    config: EvaluationConfig,
}

impl PrecisionEvaluator {
    /// Create an evaluator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom configuration
    #[must_use]
    pub fn with_config(config: EvaluationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Count the sample records that have at least one matching reference record.
    ///
    /// Every sample record is checked against the whole reference collection and the
    /// first match ends the search for that record. Duplicate sample records are each
    /// counted; duplicate reference records never are.
    ///
    /// # Errors
    ///
    /// Returns the first `SourceError` from either source. No partial result is kept.
    /// A reference record read error is only returned once a sample record would have
    /// to scan past it, so every strategy fails (or succeeds) on the same inputs.
    pub fn evaluate<S, R>(
        &self,
        sample: &S,
        reference: &R,
    ) -> Result<EvaluationResult, SourceError>
    where
        S: VariantSource + ?Sized,
        R: VariantSource + ?Sized,
    {
        let records = sample.open()?;

        let mut index = match self.config.strategy {
            ScanStrategy::Streaming => None,
            ScanStrategy::Indexed => self.build_index(reference, usize::MAX)?,
            ScanStrategy::Auto => self.build_index(reference, self.config.max_indexed_records)?,
        };

        if index.is_none() {
            // Fail on an unreadable reference even if no sample record triggers a scan
            drop(reference.open()?);
        }

        let strategy = if index.is_some() {
            ScanStrategy::Indexed
        } else {
            ScanStrategy::Streaming
        };

        info!(
            sample = %sample.label(),
            reference = %reference.label(),
            strategy = %strategy,
            contig_matching = %self.config.contig_matching,
            "Evaluating precision"
        );

        let mut result = EvaluationResult::default();

        for record in records {
            let record = record?;
            let matched = match &mut index {
                Some(index) => self.lookup(index, &record)?,
                None => self.scan(reference, &record)?,
            };
            result.record(matched);
        }

        info!(
            processed = result.processed_count,
            matched = result.matched_count,
            "Finished evaluation"
        );

        Ok(result)
    }

    /// Read the reference once into a lookup set.
    ///
    /// Returns `None` if it holds more than `limit` records. A record read error ends
    /// the build early and is kept in the index; see [`ReferenceIndex`].
    fn build_index<R>(
        &self,
        reference: &R,
        limit: usize,
    ) -> Result<Option<ReferenceIndex>, SourceError>
    where
        R: VariantSource + ?Sized,
    {
        let mut index = ReferenceIndex::default();
        let mut count: usize = 0;

        for record in reference.open()? {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    debug!(
                        reference = %reference.label(),
                        records = count,
                        error = %e,
                        "Reference read failed, index holds the records before it"
                    );
                    index.error = Some(e);
                    return Ok(Some(index));
                }
            };
            count += 1;
            if count > limit {
                debug!(
                    reference = %reference.label(),
                    limit,
                    "Reference exceeds index limit, falling back to streaming"
                );
                return Ok(None);
            }
            index.keys.insert(record.key(self.config.contig_matching));
        }

        debug!(
            reference = %reference.label(),
            records = count,
            distinct = index.keys.len(),
            "Indexed reference"
        );

        Ok(Some(index))
    }

    fn lookup(
        &self,
        index: &mut ReferenceIndex,
        sample: &VariantRecord,
    ) -> Result<bool, SourceError> {
        let matched = index.keys.contains(&sample.key(self.config.contig_matching));

        if self.config.trace.is_verbose() {
            trace!(sample = %sample, matched, "Looked up sample record");
            if matched {
                debug!(sample = %sample, "Match");
            }
        }

        if !matched {
            if let Some(e) = index.error.take() {
                return Err(e);
            }
        }

        Ok(matched)
    }

    /// Scan a fresh pass over the reference until the first match
    fn scan<R>(&self, reference: &R, sample: &VariantRecord) -> Result<bool, SourceError>
    where
        R: VariantSource + ?Sized,
    {
        for candidate in reference.open()? {
            let candidate = candidate?;
            let matched = matches(sample, &candidate, self.config.contig_matching);

            if self.config.trace.is_verbose() {
                trace!(sample = %sample, candidate = %candidate, matched, "Compared records");
                if matched {
                    debug!(sample = %sample, reference = %candidate, "Match");
                }
            }

            if matched {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Evaluate a sample variant file against a reference variant file with default settings
///
/// # Errors
///
/// Returns `SourceError` if either file cannot be opened or read.
pub fn evaluate(
    sample_path: impl AsRef<Path>,
    reference_path: impl AsRef<Path>,
) -> Result<EvaluationResult, SourceError> {
    let sample = VcfSource::new(sample_path.as_ref());
    let reference = VcfSource::new(reference_path.as_ref());
    PrecisionEvaluator::new().evaluate(&sample, &reference)
}
