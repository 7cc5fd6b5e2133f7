//! Core data types for variant matching.
//!
//! - [`VariantRecord`]: A called variant with its contig, 0-based position and REF length
//! - [`VariantKey`]: The hashable projection of a record compared by the match predicate
//! - [`ContigMatching`], [`ComparisonTrace`], [`ScanStrategy`]: Evaluator options
//!
//! ## Contig identity
//!
//! A record carries both the index of its contig in the file's contig dictionary and the
//! contig name. The dictionary index is only meaningful within one file:
//!
//! | File | `##contig` order | `chr2` index |
//! |------|------------------|--------------|
//! | A    | chr1, chr2       | 1            |
//! | B    | chr2, chr1       | 0            |
//!
//! Matching by index therefore assumes both files share one dictionary; use
//! [`ContigMatching::Name`] when they do not.
//!
//! [`VariantRecord`]: variant::VariantRecord
//! [`VariantKey`]: variant::VariantKey
//! [`ContigMatching`]: types::ContigMatching
//! [`ComparisonTrace`]: types::ComparisonTrace
//! [`ScanStrategy`]: types::ScanStrategy
//! [`ContigMatching::Name`]: types::ContigMatching::Name

pub mod types;
pub mod variant;
