use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcf_precision::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flags
    let filter = if cli.args.trace_comparisons {
        EnvFilter::new("vcf_precision=trace,info")
    } else if cli.verbose {
        EnvFilter::new("vcf_precision=debug,info")
    } else {
        EnvFilter::new("vcf_precision=warn")
    };

    // Reports go to stdout, so logs must not
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::evaluate::run(cli.args, cli.format, cli.verbose)
}
