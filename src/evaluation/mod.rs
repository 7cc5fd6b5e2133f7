//! Precision evaluation of a sample call set against a reference call set.
//!
//! - [`PrecisionEvaluator`]: Counts sample records that are present in the reference
//! - [`EvaluationResult`]: Processed and matched counts, and the derived [`Precision`]
//! - [`matches`]: The exact-match predicate on contig, position and REF length
//!
//! ## Scan strategies
//!
//! For each sample record the reference is searched until the first match. How the
//! reference is searched does not change the result:
//!
//! 1. **Streaming**: Re-open the reference and scan it from the start for every sample record
//! 2. **Indexed**: Read the reference once into a hash set and look every sample record up
//! 3. **Auto**: Index the reference unless it is larger than the configured limit
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_precision::evaluation::{evaluate, Precision};
//!
//! let result = evaluate("sample.vcf.gz", "truth.vcf.gz").unwrap();
//! match result.precision() {
//!     Precision::Empty => eprintln!("Empty sample set"),
//!     Precision::Percent(p) => eprintln!("Precision: {p:.2}%"),
//! }
//! ```

pub mod engine;
pub mod predicate;
pub mod result;

pub use engine::{evaluate, EvaluationConfig, PrecisionEvaluator};
pub use predicate::matches;
pub use result::{EvaluationResult, Precision};
