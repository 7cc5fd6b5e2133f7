//! End-to-end precision evaluation over VCF, bgzipped VCF and BCF files.

mod common;

use common::{line, write_bcf, write_vcf, write_vcf_gz, HEADER, SWAPPED_HEADER};
use vcf_precision::{
    evaluate, ContigMatching, EvaluationConfig, EvaluationResult, Precision, PrecisionEvaluator,
    ScanStrategy, SourceError, VariantRecord, VariantSource, VcfSource,
};

const STRATEGIES: [ScanStrategy; 3] = [
    ScanStrategy::Auto,
    ScanStrategy::Indexed,
    ScanStrategy::Streaming,
];

fn evaluate_with(
    sample: &VcfSource,
    reference: &VcfSource,
    strategy: ScanStrategy,
    contig_matching: ContigMatching,
) -> EvaluationResult {
    PrecisionEvaluator::with_config(EvaluationConfig {
        strategy,
        contig_matching,
        ..EvaluationConfig::default()
    })
    .evaluate(sample, reference)
    .unwrap()
}

#[test]
fn test_exact_match_is_full_precision() {
    let sample = write_vcf(HEADER, &[line("1", 100, "A")]);
    let reference = write_vcf(HEADER, &[line("1", 100, "A")]);

    let result = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(result, EvaluationResult::new(1, 1));
    assert_eq!(result.precision(), Precision::Percent(100.0));
}

#[test]
fn test_half_of_sample_confirmed() {
    let sample = write_vcf(HEADER, &[line("1", 100, "A"), line("2", 5, "ACG")]);
    let reference = write_vcf(HEADER, &[line("1", 100, "A")]);

    for strategy in STRATEGIES {
        let result = evaluate_with(
            &VcfSource::new(sample.path()),
            &VcfSource::new(reference.path()),
            strategy,
            ContigMatching::Index,
        );
        assert_eq!(result, EvaluationResult::new(2, 1), "strategy {strategy}");
        assert_eq!(result.precision(), Precision::Percent(50.0));
    }
}

#[test]
fn test_empty_sample_is_reported_as_empty() {
    let sample = write_vcf(HEADER, &[]);
    let reference = write_vcf(HEADER, &[line("1", 100, "A")]);

    let result = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(result.processed_count, 0);
    assert_eq!(result.precision(), Precision::Empty);
}

#[test]
fn test_reference_allele_length_must_agree() {
    let sample = write_vcf(HEADER, &[line("1", 100, "AC")]);
    let reference = write_vcf(HEADER, &[line("1", 100, "A")]);

    let result = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(result, EvaluationResult::new(1, 0));
    assert_eq!(result.precision(), Precision::Percent(0.0));
}

#[test]
fn test_alternate_allele_is_ignored() {
    let sample = write_vcf(HEADER, &["1\t100\t.\tA\tG\t50\tPASS\t.\n".to_string()]);
    let reference = write_vcf(HEADER, &["1\t100\trs42\tC\tT\t.\t.\t.\n".to_string()]);

    let result = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(result.matched_count, 1);
}

#[test]
fn test_empty_reference_matches_nothing() {
    let sample = write_vcf(HEADER, &[line("1", 100, "A"), line("2", 7, "T")]);
    let reference = write_vcf(HEADER, &[]);

    for strategy in STRATEGIES {
        let result = evaluate_with(
            &VcfSource::new(sample.path()),
            &VcfSource::new(reference.path()),
            strategy,
            ContigMatching::Index,
        );
        assert_eq!(result, EvaluationResult::new(2, 0));
    }
}

#[test]
fn test_duplicate_sample_records_each_count() {
    let sample = write_vcf(HEADER, &[line("1", 100, "A"), line("1", 100, "A")]);
    let reference = write_vcf(HEADER, &[line("1", 100, "A"), line("1", 100, "A")]);

    let result = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(result, EvaluationResult::new(2, 2));
}

#[test]
fn test_reference_order_is_irrelevant() {
    let sample_lines = [
        line("1", 100, "A"),
        line("1", 250, "GT"),
        line("2", 5, "ACG"),
        line("2", 9, "C"),
    ];
    let mut reference_lines = vec![
        line("2", 5, "ACG"),
        line("1", 100, "A"),
        line("1", 250, "G"),
        line("2", 10, "C"),
    ];

    let sample = write_vcf(HEADER, &sample_lines);
    let forward = write_vcf(HEADER, &reference_lines);
    reference_lines.reverse();
    let backward = write_vcf(HEADER, &reference_lines);

    let a = evaluate(sample.path(), forward.path()).unwrap();
    let b = evaluate(sample.path(), backward.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, EvaluationResult::new(4, 2));
}

#[test]
fn test_repeated_evaluation_is_idempotent() {
    let sample = write_vcf(HEADER, &[line("1", 100, "A"), line("2", 3, "G")]);
    let reference = write_vcf(HEADER, &[line("2", 3, "G")]);

    let first = evaluate(sample.path(), reference.path()).unwrap();
    let second = evaluate(sample.path(), reference.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_contig_dictionary_order_and_matching_mode() {
    // Contig "2" is index 1 in the sample but index 0 in the reference
    let sample = write_vcf(HEADER, &[line("2", 5, "A")]);
    let reference = write_vcf(SWAPPED_HEADER, &[line("2", 5, "A")]);
    let sample = VcfSource::new(sample.path());
    let reference = VcfSource::new(reference.path());

    for strategy in STRATEGIES {
        let by_index = evaluate_with(&sample, &reference, strategy, ContigMatching::Index);
        assert_eq!(by_index.matched_count, 0);

        let by_name = evaluate_with(&sample, &reference, strategy, ContigMatching::Name);
        assert_eq!(by_name.matched_count, 1);
    }
}

#[test]
fn test_missing_files_are_open_errors() {
    let existing = write_vcf(HEADER, &[line("1", 100, "A")]);

    let err = evaluate("/nonexistent/sample.vcf", existing.path()).unwrap_err();
    assert!(matches!(err, SourceError::Open { .. }));

    let err = evaluate(existing.path(), "/nonexistent/reference.vcf").unwrap_err();
    assert!(matches!(err, SourceError::Open { .. }));
}

#[test]
fn test_invalid_header_is_header_error() {
    let garbage = write_vcf("this is not a variant file\n", &[]);
    let valid = write_vcf(HEADER, &[line("1", 100, "A")]);

    let err = evaluate(garbage.path(), valid.path()).unwrap_err();
    assert!(matches!(err, SourceError::Header { .. }), "got {err:?}");
}

#[test]
fn test_bad_record_aborts_evaluation() {
    let sample = write_vcf(
        HEADER,
        &[line("1", 100, "A"), "1\tnot_a_number\t.\tA\tN\t.\t.\t.\n".to_string()],
    );
    let reference = write_vcf(HEADER, &[line("1", 100, "A")]);

    let err = evaluate(sample.path(), reference.path()).unwrap_err();
    assert!(matches!(err, SourceError::RecordRead { record: 2, .. }), "got {err:?}");
}

#[test]
fn test_compressed_and_binary_inputs_read_the_same_records() {
    let lines = [line("1", 100, "A"), line("2", 5, "ACG"), line("1", 7, "TT")];
    let plain = write_vcf(HEADER, &lines);
    let gzipped = write_vcf_gz(HEADER, &lines);
    let binary = write_bcf(HEADER, &lines);

    let expected = vec![
        VariantRecord::new(0, "1", 99, 1),
        VariantRecord::new(1, "2", 4, 3),
        VariantRecord::new(0, "1", 6, 2),
    ];

    for file in [&plain, &gzipped, &binary] {
        let records: Vec<_> = VcfSource::new(file.path())
            .open()
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(records, expected, "{}", file.path().display());
    }
}

#[test]
fn test_bcf_sample_against_vcf_reference() {
    let sample_lines = [line("1", 100, "A"), line("2", 5, "ACG"), line("2", 9, "C")];
    let reference_lines = [line("2", 5, "ACG"), line("1", 100, "A"), line("2", 9, "CC")];

    let sample = write_bcf(HEADER, &sample_lines);
    let reference = write_vcf(HEADER, &reference_lines);
    let sample_gz = write_vcf_gz(HEADER, &sample_lines);
    let reference_bcf = write_bcf(HEADER, &reference_lines);

    for strategy in STRATEGIES {
        let result = evaluate_with(
            &VcfSource::new(sample.path()),
            &VcfSource::new(reference.path()),
            strategy,
            ContigMatching::Index,
        );
        assert_eq!(result, EvaluationResult::new(3, 2), "strategy {strategy}");

        let result = evaluate_with(
            &VcfSource::new(sample_gz.path()),
            &VcfSource::new(reference_bcf.path()),
            strategy,
            ContigMatching::Index,
        );
        assert_eq!(result, EvaluationResult::new(3, 2), "strategy {strategy}");
    }
}
