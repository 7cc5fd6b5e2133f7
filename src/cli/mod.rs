//! Command-line interface for vcf-precision.
//!
//! The command takes a sample call set and a reference call set and reports the
//! percentage of sample variants found in the reference.
//!
//! ## Usage
//!
//! ```text
//! # Precision of a pipeline's calls against a truth set
//! vcf-precision sample.vcf.gz truth.vcf.gz
//!
//! # BCF input, contigs compared by name
//! vcf-precision sample.bcf truth.bcf --contig-match name
//!
//! # JSON output with resource usage
//! vcf-precision sample.vcf truth.vcf --format json --telemetry
//!
//! # Log every comparison
//! vcf-precision sample.vcf truth.vcf --strategy streaming --trace-comparisons
//! ```

use clap::Parser;

pub mod evaluate;

#[derive(Parser)]
#[command(name = "vcf-precision")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Measure genotyping precision against a reference call set")]
#[command(
    long_about = "vcf-precision compares the variants called by a genotyping pipeline (the sample) with a reference call set.\n\nA sample variant is confirmed when the reference holds a variant on the same contig, at the same position, with the same reference allele length. The report gives:\n- The number of sample variants processed\n- The number confirmed by the reference\n- The precision as a percentage"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: evaluate::EvaluateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
