use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{ComparisonTrace, ContigMatching, ScanStrategy};
use crate::evaluation::engine::{
    EvaluationConfig, PrecisionEvaluator, DEFAULT_MAX_INDEXED_RECORDS,
};
use crate::evaluation::result::{EvaluationResult, Precision};
use crate::parsing::vcf::VcfSource;
use crate::utils::telemetry::{Telemetry, TelemetryReport};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Sample variant calls (VCF, VCF.gz or BCF)
    #[arg(required = true)]
    pub sample: PathBuf,

    /// Reference variant calls to confirm the sample against (VCF, VCF.gz or BCF)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// How the reference is searched for each sample variant
    #[arg(long, default_value_t = ScanStrategy::Auto)]
    pub strategy: ScanStrategy,

    /// Compare contigs by header dictionary index or by name
    #[arg(long, default_value_t = ContigMatching::Index)]
    pub contig_match: ContigMatching,

    /// Largest reference the auto strategy holds in memory
    #[arg(long, default_value_t = DEFAULT_MAX_INDEXED_RECORDS)]
    pub max_indexed_records: usize,

    /// Log every candidate comparison and every match
    #[arg(long)]
    pub trace_comparisons: bool,

    /// Report peak memory and CPU time of the evaluation
    #[arg(long)]
    pub telemetry: bool,
}

impl EvaluateArgs {
    fn config(&self) -> EvaluationConfig {
        EvaluationConfig {
            strategy: self.strategy,
            contig_matching: self.contig_match,
            trace: ComparisonTrace::from(self.trace_comparisons),
            max_indexed_records: self.max_indexed_records,
        }
    }
}

pub fn run(args: EvaluateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    eprintln!("Sample: {}", args.sample.display());
    eprintln!("Reference: {}", args.reference.display());

    let config = args.config();
    if verbose {
        eprintln!(
            "Strategy: {}, contig matching: {}",
            config.strategy, config.contig_matching
        );
    }

    let sample = VcfSource::new(&args.sample);
    let reference = VcfSource::new(&args.reference);
    let evaluator = PrecisionEvaluator::with_config(config);

    let telemetry = args.telemetry.then(Telemetry::start);
    let result = evaluator.evaluate(&sample, &reference)?;
    let telemetry = telemetry.map(Telemetry::finish);

    match format {
        OutputFormat::Text => print_text_report(&result, telemetry.as_ref()),
        OutputFormat::Json => print_json_report(&args, &result, telemetry.as_ref())?,
        OutputFormat::Tsv => print_tsv_report(&args, &result),
    }

    Ok(())
}

fn print_text_report(result: &EvaluationResult, telemetry: Option<&TelemetryReport>) {
    match result.precision() {
        Precision::Empty => eprintln!("Empty sample set: no variants to evaluate"),
        precision @ Precision::Percent(_) => {
            eprintln!(
                "Matched: {} / {} sample variants",
                result.matched_count, result.processed_count
            );
            eprintln!("Unmatched: {}", result.unmatched_count());
            eprintln!("Precision: {precision}");
        }
    }

    if let Some(telemetry) = telemetry {
        eprintln!("{telemetry}");
    }
}

fn print_json_report(
    args: &EvaluateArgs,
    result: &EvaluationResult,
    telemetry: Option<&TelemetryReport>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "sample": args.sample.display().to_string(),
        "reference": args.reference.display().to_string(),
        "processed_count": result.processed_count,
        "matched_count": result.matched_count,
        "unmatched_count": result.unmatched_count(),
        "precision_percent": result.precision_percent(),
        "empty": result.is_empty(),
    });

    if let Some(telemetry) = telemetry {
        output["telemetry"] = serde_json::to_value(telemetry)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(args: &EvaluateArgs, result: &EvaluationResult) {
    let precision = result
        .precision_percent()
        .map_or_else(|| "NA".to_string(), |p| format!("{p:.4}"));

    println!("sample\treference\tprocessed_count\tmatched_count\tprecision_percent");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        args.sample.display(),
        args.reference.display(),
        result.processed_count,
        result.matched_count,
        precision,
    );
}
