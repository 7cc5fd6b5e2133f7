//! # vcf-precision
//!
//! A library for measuring the precision of a genotyping pipeline.
//!
//! A pipeline's variant calls (the *sample*) are compared with a trusted call set (the
//! *reference*). Every sample variant that also appears in the reference is confirmed,
//! and precision is the percentage of sample variants confirmed.
//!
//! Two variants are the same when they agree exactly on:
//!
//! - **Contig**: by header dictionary index, or by name
//! - **Position**: the variant start
//! - **Reference allele length**: the number of REF bases
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_precision::{EvaluationConfig, PrecisionEvaluator, Precision, VcfSource};
//! use vcf_precision::core::types::ContigMatching;
//!
//! let sample = VcfSource::new("sample.vcf.gz");
//! let reference = VcfSource::new("truth.bcf");
//!
//! let evaluator = PrecisionEvaluator::with_config(EvaluationConfig {
//!     contig_matching: ContigMatching::Name,
//!     ..EvaluationConfig::default()
//! });
//! let result = evaluator.evaluate(&sample, &reference).unwrap();
//!
//! match result.precision() {
//!     Precision::Empty => println!("no sample variants"),
//!     Precision::Percent(p) => println!("{} / {} ({p:.2}%)", result.matched_count, result.processed_count),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Variant records and evaluator options
//! - [`parsing`]: Variant record sources for VCF, BCF and in-memory records
//! - [`evaluation`]: Match predicate, precision evaluator and results
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Resource telemetry

pub mod cli;
pub mod core;
pub mod evaluation;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::types::*;
pub use core::variant::VariantRecord;
pub use evaluation::engine::{evaluate, EvaluationConfig, PrecisionEvaluator};
pub use evaluation::result::{EvaluationResult, Precision};
pub use parsing::source::{MemorySource, SourceError, VariantSource};
pub use parsing::vcf::VcfSource;
