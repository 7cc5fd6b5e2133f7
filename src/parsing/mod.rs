//! Variant record sources.
//!
//! A [`VariantSource`] yields [`VariantRecord`]s in file order and can be scanned from the
//! beginning any number of times. Two implementations are provided:
//!
//! - [`VcfSource`]: VCF, bgzip-compressed VCF and BCF files read with noodles
//! - [`MemorySource`]: records already held in memory
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_precision::parsing::{VariantSource, VcfSource};
//!
//! let source = VcfSource::new("calls.vcf.gz");
//! for result in source.open().unwrap() {
//!     let record = result.unwrap();
//!     println!("{record}");
//! }
//! ```
//!
//! ## Errors
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Open` | The file cannot be opened |
//! | `Header` | The header cannot be read |
//! | `RecordRead` | A record cannot be read or decoded |
//!
//! [`VariantRecord`]: crate::core::variant::VariantRecord

pub mod source;
pub mod vcf;

pub use source::{MemorySource, SourceError, VariantRecords, VariantSource};
pub use vcf::{VariantFormat, VcfSource};
